//! 予約一覧の突合・並び・楽観更新
//!
//! 予約一覧と時間帯一覧を ID で突合して表示行を作る。
//! キャンセルはサーバ確認後にローカル状態だけを差し替える（再取得しない）。

use crate::models::{Reservation, ReservationStatus, TimeSlot};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub reservation: Reservation,
    /// 対応する時間帯が引けた場合の (開始, 終了)
    pub slot_time: Option<(String, String)>,
}

impl Row {
    /// 時間列の表示。時間帯が引けない行は ID を生で出す
    pub fn time_label(&self) -> String {
        match &self.slot_time {
            Some((start, end)) => format!("{} - {}", start, end),
            None => format!("#{}", self.reservation.timeslot_id),
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.reservation.status {
            ReservationStatus::Booked => "予約中",
            ReservationStatus::Canceled => "キャンセル",
        }
    }
}

/// 予約と時間帯を突合し、created_at 昇順（欠損は先頭）に並べた行を返す。
/// 両方のフェッチが完了してから呼ぶこと。中途半端な突合結果は表示しない
pub fn build_rows(reservations: Vec<Reservation>, slots: &[TimeSlot]) -> Vec<Row> {
    let by_id: HashMap<i64, &TimeSlot> = slots.iter().map(|s| (s.id, s)).collect();
    let mut rows: Vec<Row> = reservations
        .into_iter()
        .map(|r| {
            let slot_time = by_id
                .get(&r.timeslot_id)
                .map(|s| (s.start_time.clone(), s.end_time.clone()));
            Row {
                reservation: r,
                slot_time,
            }
        })
        .collect();
    // ISO 風の文字列なので辞書順で時系列になる
    rows.sort_by(|a, b| {
        let ka = a.reservation.created_at.as_deref().unwrap_or("");
        let kb = b.reservation.created_at.as_deref().unwrap_or("");
        ka.cmp(kb)
    });
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub rows: Vec<Row>,
    /// キャンセルの単一飛行ガード。行単位ではなく一覧全体で共有する
    pub working: bool,
}

impl DashboardState {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            working: false,
        }
    }

    pub fn row(&self, id: i64) -> Option<&Row> {
        self.rows.iter().find(|r| r.reservation.id == id)
    }

    /// キャンセル開始。既に実行中なら false（二度目は破棄、キューしない）
    pub fn begin_cancel(&mut self) -> bool {
        if self.working {
            return false;
        }
        self.working = true;
        true
    }

    pub fn finish_cancel(&mut self) {
        self.working = false;
    }

    /// サーバがキャンセルを確認した後にだけ呼ぶ。
    /// 対象行の status のみ差し替え、他の行には触れない
    pub fn apply_cancel(&mut self, id: i64) {
        self.rows = self
            .rows
            .iter()
            .cloned()
            .map(|mut row| {
                if row.reservation.id == id {
                    row.reservation.status = ReservationStatus::Canceled;
                }
                row
            })
            .collect();
    }
}

/// コース価格が数値で解決できた場合だけ出す概算合計（税込・サービス料なしの参考値）。
/// 桁あふれする値が来たら合計は出さない
pub fn advisory_total(price: Option<u32>, party_size: u32) -> Option<u32> {
    price.and_then(|p| p.checked_mul(party_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reservation(id: i64, timeslot_id: i64, created_at: Option<&str>) -> Reservation {
        serde_json::from_value(json!({
            "id": id,
            "restaurant_id": 1,
            "timeslot_id": timeslot_id,
            "date": "2025-09-10",
            "party_size": 2,
            "status": "booked",
            "created_at": created_at
        }))
        .unwrap()
    }

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

    #[test]
    fn join_falls_back_to_raw_slot_id() {
        let slots = vec![slot(1, "17:00", "18:30"), slot(2, "18:00", "19:30"), slot(3, "19:00", "20:30")];
        let rows = build_rows(
            vec![
                reservation(10, 2, Some("2025-09-01T10:00:00")),
                reservation(11, 99, Some("2025-09-02T10:00:00")),
            ],
            &slots,
        );
        assert_eq!(rows[0].time_label(), "18:00 - 19:30");
        // 突合できない行は時間帯 ID をそのまま表示する
        assert_eq!(rows[1].time_label(), "#99");
    }

    #[test]
    fn rows_sort_by_created_at_missing_first() {
        let rows = build_rows(
            vec![
                reservation(1, 1, Some("2025-09-02T10:00:00")),
                reservation(2, 1, None),
                reservation(3, 1, Some("2025-09-01T10:00:00")),
            ],
            &[slot(1, "17:00", "18:30")],
        );
        let ids: Vec<_> = rows.iter().map(|r| r.reservation.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn apply_cancel_patches_only_target_row() {
        let mut state = DashboardState::new(build_rows(
            vec![reservation(501, 1, None), reservation(502, 1, None)],
            &[slot(1, "17:00", "18:30")],
        ));
        state.apply_cancel(501);
        assert_eq!(
            state.row(501).unwrap().reservation.status,
            ReservationStatus::Canceled
        );
        assert_eq!(
            state.row(502).unwrap().reservation.status,
            ReservationStatus::Booked
        );
    }

    #[test]
    fn cancel_guard_blocks_across_rows() {
        let mut state = DashboardState::new(build_rows(
            vec![reservation(501, 1, None), reservation(502, 1, None)],
            &[],
        ));
        assert!(state.begin_cancel());
        // 別の行に対してでも、実行中は開始できない
        assert!(!state.begin_cancel());
        state.finish_cancel();
        assert!(state.begin_cancel());
    }

    #[test]
    fn advisory_total_only_with_numeric_price() {
        assert_eq!(advisory_total(Some(6800), 2), Some(13600));
        assert_eq!(advisory_total(None, 2), None);
    }

    #[test]
    fn advisory_total_withholds_on_overflow() {
        assert_eq!(advisory_total(Some(u32::MAX), 2), None);
        assert_eq!(advisory_total(Some(u32::MAX), 1), Some(u32::MAX));
    }

    #[test]
    fn status_labels() {
        let rows = build_rows(vec![reservation(1, 1, None)], &[]);
        assert_eq!(rows[0].status_label(), "予約中");
    }
}
