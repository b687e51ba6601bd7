//! コースカタログとコース情報の解決
//!
//! カタログはクライアント既知の静的リストで、サーバからは取得しない。
//! 予約行のコース表示は三段階の優先順位で解決する：
//! トップレベル項目 → metadata 内の同名項目 → 静的フォールバック表。
//! この関数は表示専用であり、どのフィールドも欠けていて構わない。

use crate::models::Reservation;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub desc: &'static str,
    pub badge: Option<&'static str>,
}

/// 予約時に選べるコース一覧
pub const CATALOG: &[Course] = &[
    Course {
        id: "course_season",
        name: "季節のコース",
        price: 6800,
        desc: "アミューズ/前菜/魚/肉/デザート（全6品）",
        badge: Some("人気"),
    },
    Course {
        id: "course_chef",
        name: "シェフズテイスティング",
        price: 9800,
        desc: "旬を凝縮したおまかせ（全8品）",
        badge: Some("おすすめ"),
    },
    Course {
        id: "course_vegetarian",
        name: "ベジタリアンコース",
        price: 6200,
        desc: "動物性不使用・事前予約制",
        badge: Some("要予約"),
    },
    Course {
        id: "course_no",
        name: "コースを選ばない",
        price: 0,
        desc: "単品注文で承ります",
        badge: None,
    },
];

pub fn find_by_id(id: &str) -> Option<&'static Course> {
    CATALOG.iter().find(|c| c.id == id)
}

pub fn find_by_name(name: &str) -> Option<&'static Course> {
    CATALOG.iter().find(|c| c.name == name)
}

/// スラッグまたは旧数値コードしか残っていない行のためのラベル表
fn fallback_label(key: &str) -> Option<(&'static str, u32)> {
    match key {
        "course_season" | "1" => Some(("季節のコース", 6800)),
        "course_chef" | "2" => Some(("シェフズテイスティング", 9800)),
        "course_vegetarian" | "3" => Some(("ベジタリアンコース", 6200)),
        "course_no" => Some(("コースを選ばない", 0)),
        _ => None,
    }
}

/// 解決済みコース情報。全フィールド任意（表示を決してブロックしない）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<u32>,
}

impl CourseInfo {
    /// コース列の表示。名前 > 生ID > 空プレースホルダ
    pub fn label(&self) -> String {
        if let Some(name) = &self.name {
            name.clone()
        } else if let Some(id) = &self.id {
            format!("ID: {}", id)
        } else {
            "—".to_string()
        }
    }
}

/// キーとして使える文字列へ正規化する（数値はそのまま十進文字列に）
fn value_to_key(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 価格の正規化。数値・数値文字列の両方を受ける
fn value_to_price(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 予約行からコース情報を取り出す。
///
/// 優先順位はトップレベル → metadata → フォールバック表。
/// これ以上の推測はしない。
pub fn resolve_course(r: &Reservation) -> CourseInfo {
    let meta = r.metadata.as_ref();
    let pick = |top: Option<&Value>, key: &str| -> Option<Value> {
        top.cloned().or_else(|| meta.and_then(|m| m.get(key)).cloned())
    };

    let id_raw = pick(r.course_id.as_ref(), "course_id");
    let code_raw = pick(r.course_code.as_ref(), "course_code");
    let price_raw = pick(r.course_price.as_ref(), "course_price");
    let name = r
        .course_name
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            meta.and_then(|m| m.get("course_name"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        });

    let id_key = id_raw.as_ref().and_then(value_to_key);
    let code_key = code_raw.as_ref().and_then(value_to_key);
    // id と code のどちらか存在する方をフォールバック表の引き当てに使う
    let key = id_key.clone().or_else(|| code_key.clone());
    let fallback = key.as_deref().and_then(fallback_label);

    CourseInfo {
        id: id_key.or(code_key),
        name: name.or_else(|| fallback.map(|(n, _)| n.to_string())),
        price: price_raw
            .as_ref()
            .and_then(value_to_price)
            .or_else(|| fallback.map(|(_, p)| p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use serde_json::json;

    fn reservation(patch: Value) -> Reservation {
        let mut base = json!({
            "id": 1,
            "restaurant_id": 1,
            "timeslot_id": 1,
            "date": "2025-09-10",
            "party_size": 2,
            "status": "booked"
        });
        base.as_object_mut()
            .unwrap()
            .extend(patch.as_object().unwrap().clone());
        let r: Reservation = serde_json::from_value(base).unwrap();
        assert_eq!(r.status, ReservationStatus::Booked);
        r
    }

    #[test]
    fn top_level_name_wins_over_metadata() {
        let r = reservation(json!({
            "course_name": "季節のコース",
            "metadata": {"course_name": "シェフズテイスティング"}
        }));
        assert_eq!(resolve_course(&r).name.as_deref(), Some("季節のコース"));
    }

    #[test]
    fn numeric_legacy_code_resolves_via_fallback_table() {
        let r = reservation(json!({"course_id": 2}));
        let info = resolve_course(&r);
        assert_eq!(info.name.as_deref(), Some("シェフズテイスティング"));
        assert_eq!(info.price, Some(9800));
        assert_eq!(info.id.as_deref(), Some("2"));
    }

    #[test]
    fn numeric_string_id_behaves_like_numeric_code() {
        let r = reservation(json!({"course_id": "3"}));
        let info = resolve_course(&r);
        assert_eq!(info.name.as_deref(), Some("ベジタリアンコース"));
        assert_eq!(info.price, Some(6200));
    }

    #[test]
    fn slug_in_metadata_resolves() {
        let r = reservation(json!({"metadata": {"course_id": "course_season"}}));
        let info = resolve_course(&r);
        assert_eq!(info.name.as_deref(), Some("季節のコース"));
        assert_eq!(info.price, Some(6800));
    }

    #[test]
    fn course_code_used_when_id_missing() {
        let r = reservation(json!({"course_code": "course_no"}));
        let info = resolve_course(&r);
        assert_eq!(info.name.as_deref(), Some("コースを選ばない"));
        assert_eq!(info.price, Some(0));
    }

    #[test]
    fn string_price_is_parsed() {
        let r = reservation(json!({
            "course_name": "特別コース",
            "course_price": "12000"
        }));
        let info = resolve_course(&r);
        assert_eq!(info.price, Some(12000));
        // カタログ外の名前はそのまま通す
        assert_eq!(info.name.as_deref(), Some("特別コース"));
    }

    #[test]
    fn unknown_id_keeps_raw_id_without_name() {
        let r = reservation(json!({"course_id": "course_mystery"}));
        let info = resolve_course(&r);
        assert_eq!(info.name, None);
        assert_eq!(info.id.as_deref(), Some("course_mystery"));
        assert_eq!(info.label(), "ID: course_mystery");
    }

    #[test]
    fn nothing_resolvable_yields_placeholder() {
        let r = reservation(json!({}));
        let info = resolve_course(&r);
        assert_eq!(info, CourseInfo::default());
        assert_eq!(info.label(), "—");
    }

    #[test]
    fn catalog_lookup_by_id_and_name() {
        assert_eq!(find_by_id("course_chef").unwrap().price, 9800);
        assert_eq!(find_by_name("季節のコース").unwrap().id, "course_season");
        assert!(find_by_id("nope").is_none());
    }
}
