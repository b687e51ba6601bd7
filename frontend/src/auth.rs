//! セッション状態管理
//!
//! タブ内で共有する認証状態。ルーティングとは疎結合にし、
//! ルータには状態信号だけを注入する。
//! ここの非同期入口は決して reject を外へ漏らさない。
//! 成否は bool か状態フィールドで返す。

use crate::api::Api;
use leptos::prelude::*;
use saveur_shared::{LoginRequest, SignupRequest, User};

#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// ログイン中のユーザ。None = 未ログイン
    pub user: Option<User>,
    /// 初回プローブまたは refresh の実行中
    pub loading: bool,
    /// 直近の操作エラー（ユーザ向け文言）
    pub error: Option<String>,
}

/// セッションの三値。ルータのガードはこれで判定する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// 初回プローブが終わっていない。保護ページは待機表示し、リダイレクトしない
    Probing,
    Guest,
    SignedIn,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        // マウント直後からプローブ完了までは loading
        let (state, set_state) = signal(SessionState {
            user: None,
            loading: true,
            error: None,
        });
        Self { state, set_state }
    }

    /// ルータ注入用の状態信号
    pub fn status_signal(&self) -> Signal<SessionStatus> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                if s.loading {
                    SessionStatus::Probing
                } else if s.user.is_some() {
                    SessionStatus::SignedIn
                } else {
                    SessionStatus::Guest
                }
            })
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// セッション確認。マウント時に一度呼び、必要なら再実行もできる。
/// 401 もトランスポート失敗も黙って未ログイン扱いにする（エラーは出さない）
pub async fn refresh(ctx: &SessionContext) {
    ctx.set_state.update(|s| s.loading = true);
    let user = match Api.me().await {
        Ok(env) => Some(env.user),
        Err(_) => None,
    };
    ctx.set_state.update(|s| {
        s.user = user;
        s.loading = false;
    });
}

/// ログイン。成功で true。失敗は error に文言を置いて false
pub async fn login(ctx: &SessionContext, email: String, password: String) -> bool {
    ctx.set_state.update(|s| s.error = None);
    match Api.login(&LoginRequest { email, password }).await {
        Ok(env) => {
            ctx.set_state.update(|s| s.user = Some(env.user));
            true
        }
        Err(e) => {
            let msg = if e.status == 401 {
                "メールアドレスまたはパスワードが違います。"
            } else {
                "ログインに失敗しました。時間をおいて再実行してください。"
            };
            ctx.set_state.update(|s| s.error = Some(msg.to_string()));
            false
        }
    }
}

/// 会員登録。成功時はサーバがそのままセッションを張るので自動ログイン扱い
pub async fn signup(ctx: &SessionContext, req: SignupRequest) -> bool {
    ctx.set_state.update(|s| s.error = None);
    match Api.signup(&req).await {
        Ok(env) => {
            ctx.set_state.update(|s| s.user = Some(env.user));
            true
        }
        Err(e) => {
            let msg = if e.status == 409 {
                "このメールアドレスは既に登録されています。"
            } else {
                "会員登録に失敗しました。入力内容をご確認ください。"
            };
            ctx.set_state.update(|s| s.error = Some(msg.to_string()));
            false
        }
    }
}

/// ログアウト。サーバ呼び出しはベストエフォートで、
/// 失敗してもローカルのユーザ状態は必ず破棄する（UI を認証済みで固めない）
pub async fn logout(ctx: &SessionContext) {
    ctx.set_state.update(|s| s.error = None);
    let _ = Api.logout().await;
    ctx.set_state.update(|s| s.user = None);
}
