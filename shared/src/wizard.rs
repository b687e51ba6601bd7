//! 予約ウィザードの状態機械
//!
//! 条件選択 → 時間選択 → 確認/完了 の3ステップ。
//! 前進は現在ステップの必須項目が揃ったときだけ許し、後退は常に許す。
//! 送信は単一飛行ガードで直列化する（実行中の二度目の呼び出しは無視）。

use crate::course::{self, Course};
use crate::models::{CreateReservationPayload, TimeSlot};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// 日付・人数・コース
    #[default]
    Conditions,
    /// 時間帯の選択
    TimeSelect,
    /// 確認、送信後は完了表示
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardDraft {
    pub step: WizardStep,
    /// "YYYY-MM-DD"
    pub date: String,
    /// date 入力の下限（当日）
    pub min_date: String,
    pub party_size: u32,
    /// 未選択 = 空文字
    pub course_id: String,
    pub selected: Option<TimeSlot>,
    pub submitting: bool,
    /// 送信成功時にサーバが採番した予約ID。入ったら完了表示に固定
    pub done_id: Option<i64>,
}

impl WizardDraft {
    pub fn new(today: String) -> Self {
        Self {
            step: WizardStep::Conditions,
            date: today.clone(),
            min_date: today,
            party_size: 2,
            course_id: String::new(),
            selected: None,
            submitting: false,
            done_id: None,
        }
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        if self.course_id.is_empty() {
            None
        } else {
            course::find_by_id(&self.course_id)
        }
    }

    /// 現在ステップから次へ進める条件が揃っているか
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Conditions => {
                !self.date.is_empty() && self.party_size >= 1 && !self.course_id.is_empty()
            }
            WizardStep::TimeSelect => self.selected.is_some(),
            WizardStep::Confirm => true,
        }
    }

    /// 条件を満たしていれば次ステップへ。進んだかどうかを返す
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            WizardStep::Conditions => WizardStep::TimeSelect,
            WizardStep::TimeSelect => WizardStep::Confirm,
            WizardStep::Confirm => return false,
        };
        true
    }

    /// ひとつ前のステップへ戻る。完了後は戻れない
    pub fn back(&mut self) {
        if self.done_id.is_some() {
            return;
        }
        self.step = match self.step {
            WizardStep::Conditions | WizardStep::TimeSelect => WizardStep::Conditions,
            WizardStep::Confirm => WizardStep::TimeSelect,
        };
    }

    /// 日付変更。別の日のために選んだ時間帯を黙って持ち越さない
    pub fn set_date(&mut self, date: String) {
        self.date = date;
        self.selected = None;
    }

    pub fn set_party_size(&mut self, n: u32) {
        self.party_size = n;
    }

    pub fn select_course(&mut self, id: &str) {
        self.course_id = id.to_string();
    }

    pub fn select_slot(&mut self, slot: TimeSlot) {
        self.selected = Some(slot);
    }

    /// メニューページ等からの遷移で渡されるコース指定。ID一致が名前一致に優先する
    pub fn preselect(&mut self, id: Option<&str>, name: Option<&str>) {
        if let Some(id) = id {
            if let Some(hit) = course::find_by_id(id) {
                self.course_id = hit.id.to_string();
            }
            return;
        }
        if let Some(name) = name {
            if let Some(hit) = course::find_by_name(name) {
                self.course_id = hit.id.to_string();
            }
        }
    }

    /// 送信の単一飛行ガード。開始できたら true、既に実行中なら false
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || self.selected.is_none() {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// 送信成功。完了表示に遷移し、このセッション中は戻さない
    pub fn complete(&mut self, reservation_id: i64) {
        self.done_id = Some(reservation_id);
        self.step = WizardStep::Confirm;
    }

    /// 予約作成リクエストを組み立てる。時間帯未選択なら None
    pub fn build_payload(&self) -> Option<CreateReservationPayload> {
        let slot = self.selected.as_ref()?;
        let mut payload = CreateReservationPayload {
            restaurant_id: slot.restaurant_id,
            timeslot_id: slot.id,
            date: self.date.clone(),
            party_size: self.party_size,
            course_id: None,
            course_name: None,
            course_price: None,
            metadata: None,
        };
        if let Some(c) = self.selected_course() {
            // 三点セットは必ずトップレベルと metadata の両方へ（片方だけは送らない）
            let mut meta = Map::new();
            meta.insert("course_id".into(), Value::from(c.id));
            meta.insert("course_name".into(), Value::from(c.name));
            meta.insert("course_price".into(), Value::from(c.price));
            payload.course_id = Some(c.id.to_string());
            payload.course_name = Some(c.name.to_string());
            payload.course_price = Some(c.price);
            payload.metadata = Some(meta);
        }
        Some(payload)
    }
}

/// 時間帯を開始時刻の昇順に並べる。"HH:MM" 固定幅なので辞書順で正しい
pub fn sort_slots(slots: &mut [TimeSlot]) {
    slots.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}

/// 予約作成失敗のユーザ向けメッセージ。
/// 既知のアプリケーションエラーコードだけ個別文言にし、残りは汎用文言に落とす
pub fn submit_error_message(code: Option<&str>) -> &'static str {
    match code {
        Some("duplicate_booking") => "同一の日時で既に予約があります",
        Some("capacity_exceeded") => "満席のため予約できません",
        _ => "予約に失敗しました",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: i64, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            id,
            restaurant_id: 1,
            start_time: start.to_string(),
            end_time: end.to_string(),
            capacity: 8,
            remaining: None,
        }
    }

    fn draft() -> WizardDraft {
        WizardDraft::new("2025-09-10".to_string())
    }

    #[test]
    fn step1_requires_date_party_and_course() {
        let mut d = draft();
        d.course_id.clear();
        assert!(!d.advance());
        assert_eq!(d.step, WizardStep::Conditions);

        d.select_course("course_season");
        d.date.clear();
        assert!(!d.advance());

        d.set_date("2025-09-10".to_string());
        d.party_size = 0;
        assert!(!d.advance());

        d.party_size = 2;
        assert!(d.advance());
        assert_eq!(d.step, WizardStep::TimeSelect);
    }

    #[test]
    fn step2_requires_selected_slot() {
        let mut d = draft();
        d.select_course("course_season");
        assert!(d.advance());
        assert!(!d.advance());

        d.select_slot(slot(3, "18:00", "19:30"));
        assert!(d.advance());
        assert_eq!(d.step, WizardStep::Confirm);
    }

    #[test]
    fn changing_date_clears_selected_slot() {
        let mut d = draft();
        d.select_slot(slot(3, "18:00", "19:30"));
        d.set_date("2025-09-11".to_string());
        assert!(d.selected.is_none());
    }

    #[test]
    fn back_navigation_is_always_allowed_until_done() {
        let mut d = draft();
        d.select_course("course_chef");
        d.advance();
        d.select_slot(slot(1, "17:00", "18:30"));
        d.advance();
        d.back();
        assert_eq!(d.step, WizardStep::TimeSelect);
        d.back();
        assert_eq!(d.step, WizardStep::Conditions);

        d.advance();
        d.advance();
        d.complete(501);
        d.back();
        assert_eq!(d.step, WizardStep::Confirm);
        assert_eq!(d.done_id, Some(501));
    }

    #[test]
    fn preselect_id_wins_over_name() {
        let mut d = draft();
        d.preselect(Some("course_chef"), Some("季節のコース"));
        assert_eq!(d.course_id, "course_chef");

        // ID が解決できないときは名前にも落ちない（ID 指定が優先権を持つ）
        let mut d = draft();
        d.preselect(Some("course_unknown"), Some("季節のコース"));
        assert_eq!(d.course_id, "");

        let mut d = draft();
        d.preselect(None, Some("季節のコース"));
        assert_eq!(d.course_id, "course_season");
    }

    #[test]
    fn submit_guard_is_single_flight() {
        let mut d = draft();
        d.select_slot(slot(3, "18:00", "19:30"));
        assert!(d.begin_submit());
        assert!(!d.begin_submit());
        d.finish_submit();
        assert!(d.begin_submit());
    }

    #[test]
    fn submit_requires_slot() {
        let mut d = draft();
        assert!(!d.begin_submit());
        assert!(d.build_payload().is_none());
    }

    #[test]
    fn payload_duplicates_course_into_metadata() {
        let mut d = draft();
        d.select_course("course_season");
        d.select_slot(slot(3, "18:00", "19:30"));
        let p = d.build_payload().unwrap();
        assert_eq!(p.timeslot_id, 3);
        assert_eq!(p.date, "2025-09-10");
        assert_eq!(p.party_size, 2);
        assert_eq!(p.course_id.as_deref(), Some("course_season"));
        assert_eq!(p.course_price, Some(6800));
        let meta = p.metadata.unwrap();
        assert_eq!(meta["course_id"], "course_season");
        assert_eq!(meta["course_name"], "季節のコース");
        assert_eq!(meta["course_price"], 6800);
    }

    #[test]
    fn payload_without_course_has_no_metadata() {
        let mut d = draft();
        d.select_slot(slot(3, "18:00", "19:30"));
        let p = d.build_payload().unwrap();
        assert!(p.course_id.is_none());
        assert!(p.metadata.is_none());
    }

    #[test]
    fn slots_sort_by_start_time() {
        let mut slots = vec![
            slot(1, "19:00", "20:30"),
            slot(2, "17:00", "18:30"),
            slot(3, "18:00", "19:30"),
        ];
        sort_slots(&mut slots);
        let starts: Vec<_> = slots.iter().map(|s| s.start_time.as_str()).collect();
        assert_eq!(starts, ["17:00", "18:00", "19:00"]);
    }

    #[test]
    fn error_codes_map_to_distinct_messages() {
        assert_eq!(
            submit_error_message(Some("duplicate_booking")),
            "同一の日時で既に予約があります"
        );
        assert_eq!(
            submit_error_message(Some("capacity_exceeded")),
            "満席のため予約できません"
        );
        assert_eq!(submit_error_message(Some("unknown_code")), "予約に失敗しました");
        assert_eq!(submit_error_message(None), "予約に失敗しました");
    }
}
