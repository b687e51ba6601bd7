//! API クライアント
//!
//! 同一オリジンの JSON API への薄いラッパ。各呼び出しは一回きりで、
//! リトライ・タイムアウト・キャッシュはこの層では持たない。
//! セッション Cookie は常に同送する。

use gloo_net::http::{Method, RequestBuilder};
use saveur_shared::{
    CreateReservationPayload, LoginRequest, Reservation, ReservationEnvelope, SignupRequest,
    TimeSlot, UserEnvelope,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::RequestCredentials;

/// API 呼び出しの失敗。
///
/// トランスポート失敗（ネットワーク断・JSON 崩れ）は status = 0。
/// 非 2xx はステータスとパース済み body（JSON でなければ None）を持ち、
/// 呼び出し側がアプリケーションエラーコードで分岐できるようにする。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub payload: Option<Value>,
    pub message: String,
}

impl ApiError {
    /// レスポンス body の "error"（アプリケーションエラーコード）
    pub fn code(&self) -> Option<&str> {
        self.payload.as_ref()?.get("error")?.as_str()
    }

    fn transport(message: String) -> Self {
        Self {
            status: 0,
            payload: None,
            message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 共通フェッチ。204 は明示的な「本文なし」として None を返す
async fn send<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&impl Serialize>,
) -> Result<Option<T>, ApiError> {
    let builder = RequestBuilder::new(path)
        .method(method)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::transport(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?,
    };

    let res = request
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;

    if res.status() == 204 {
        return Ok(None);
    }

    if !res.ok() {
        let status = res.status();
        let status_text = res.status_text();
        // エラー body は JSON とは限らない。パースできなければステータス文言に落とす
        let payload: Option<Value> = res.json().await.ok();
        let message = payload
            .as_ref()
            .and_then(|p| p.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(status_text);
        return Err(ApiError {
            status,
            payload,
            message,
        });
    }

    res.json::<T>()
        .await
        .map(Some)
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// 2xx なら必ず JSON body があるエンドポイント用
async fn call<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&impl Serialize>,
) -> Result<T, ApiError> {
    match send(method, path, body).await? {
        Some(v) => Ok(v),
        None => Err(ApiError::transport("204 応答に本文がありません".to_string())),
    }
}

/// body なしエンドポイント用のダミー型
#[derive(Serialize)]
struct NoBody;

const NO_BODY: Option<&NoBody> = None;

/// サーバ API 一式。ステートレスなので値としてコピーして使う
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Api;

impl Api {
    // ---------- 認証 ----------

    pub async fn me(&self) -> Result<UserEnvelope, ApiError> {
        call(Method::GET, "/api/auth/me", NO_BODY).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<UserEnvelope, ApiError> {
        call(Method::POST, "/api/auth/signup", Some(req)).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<UserEnvelope, ApiError> {
        call(Method::POST, "/api/auth/login", Some(req)).await
    }

    /// 200/204 どちらも成功として扱う
    pub async fn logout(&self) -> Result<(), ApiError> {
        send::<Value>(Method::POST, "/api/auth/logout", NO_BODY)
            .await
            .map(|_| ())
    }

    // ---------- 予約 ----------

    pub async fn timeslots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        call(Method::GET, "/api/timeslots", NO_BODY).await
    }

    pub async fn create_reservation(
        &self,
        payload: &CreateReservationPayload,
    ) -> Result<ReservationEnvelope, ApiError> {
        call(Method::POST, "/api/reservations", Some(payload)).await
    }

    pub async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        call(Method::GET, "/api/reservations/my", NO_BODY).await
    }

    /// 200 `{ok:true}` / 204 のどちらも成功
    pub async fn cancel_reservation(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/reservations/{}", id);
        send::<Value>(Method::DELETE, &path, NO_BODY)
            .await
            .map(|_| ())
    }
}
