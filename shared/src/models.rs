//! ワイヤ契約（サーバ API との型定義）
//!
//! 予約行のコース関連フィールドは、保存された時期によって
//! スラッグ・旧数値コード・数値文字列が混在するため `serde_json::Value` のまま
//! 保持し、解決は `course::resolve_course` に任せる。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: i64,
    pub restaurant_id: i64,
    /// "HH:MM" 固定幅。辞書順比較がそのまま時刻順になる
    pub start_time: String,
    pub end_time: String,
    pub capacity: u32,
    /// 日付指定で取得したときだけサーバが残枠を返す（表示用の参考値）
    #[serde(default)]
    pub remaining: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub restaurant_id: i64,
    pub timeslot_id: i64,
    /// "YYYY-MM-DD"
    pub date: String,
    pub party_size: u32,
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    // コース情報はトップレベルにも metadata 内にも入りうる
    #[serde(default)]
    pub course_id: Option<Value>,
    #[serde(default)]
    pub course_code: Option<Value>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub course_price: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// 予約作成リクエスト。
///
/// コース三点セット（id/name/price）はトップレベルと metadata の両方に
/// 常にセットで入れる。未知のトップレベル項目を無視するサーバにも、
/// 任意の metadata しか受けないサーバにも壊れず届けるための互換ヘッジ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationPayload {
    pub restaurant_id: i64,
    pub timeslot_id: i64,
    pub date: String,
    pub party_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

// =========================================================
// 認証 API のリクエスト/レスポンス
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationEnvelope {
    pub reservation: Reservation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OkFlag {
    pub ok: bool,
}

/// 金額表示「¥6,800」。3桁区切り
pub fn format_yen(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('¥');
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// created_at（ISO 8601）を「YYYY/MM/DD HH:MM」へ整形する。
/// パースできない文字列はそのまま返す。表示専用なので決して失敗させない。
pub fn format_created_at(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('Z');
    chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reservation_tolerates_loose_course_fields() {
        // course_id が数値、course_price が文字列でもデシリアライズできること
        let r: Reservation = serde_json::from_value(json!({
            "id": 10,
            "restaurant_id": 1,
            "timeslot_id": 3,
            "date": "2025-09-10",
            "party_size": 2,
            "status": "booked",
            "course_id": 2,
            "course_price": "9800",
            "metadata": {"course_name": "シェフズテイスティング"}
        }))
        .unwrap();
        assert_eq!(r.status, ReservationStatus::Booked);
        assert_eq!(r.course_id, Some(json!(2)));
        assert_eq!(r.course_price, Some(json!("9800")));
        assert!(r.created_at.is_none());
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Canceled).unwrap(),
            "\"canceled\""
        );
        let s: ReservationStatus = serde_json::from_str("\"booked\"").unwrap();
        assert_eq!(s, ReservationStatus::Booked);
    }

    #[test]
    fn yen_grouping() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(980), "¥980");
        assert_eq!(format_yen(6800), "¥6,800");
        assert_eq!(format_yen(1234567), "¥1,234,567");
    }

    #[test]
    fn created_at_formats_or_passes_through() {
        assert_eq!(
            format_created_at("2025-09-01T18:30:00"),
            "2025/09/01 18:30"
        );
        assert_eq!(
            format_created_at("2025-09-01T18:30:00.123456"),
            "2025/09/01 18:30"
        );
        assert_eq!(format_created_at("not-a-date"), "not-a-date");
    }
}
