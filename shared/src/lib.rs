//! ビストロ・サヴール 共有クレート
//!
//! フロントエンドとサーバ API の境界に関わる型とロジックを集約する：
//! - `models`: ワイヤ契約（serde モデル）
//! - `course`: コースカタログと寛容なコース情報解決
//! - `wizard`: 予約ウィザードの状態機械
//! - `dashboard`: 予約一覧の突合と楽観更新
//!
//! サーバ本体はこのリポジトリに含まれない。ここにあるのは呼び出し規約だけ。

pub mod course;
pub mod dashboard;
pub mod models;
pub mod wizard;

pub use course::{Course, CourseInfo, resolve_course};
pub use dashboard::{DashboardState, Row};
pub use models::*;
pub use wizard::{WizardDraft, WizardStep};
