//! App - アプリケーション層
//!
//! ports と engine を組み合わせてポーリングボットを構成する。
//!
//! # 主要コンポーネント
//! - **ScoutBot**: fetch → derive → filter → rank →（任意で）submit
//! - **SessionLedger**: セッション中の提出実績
//! - **EarningsReport**: 停止時に出すサマリ

pub mod bot;
pub mod ledger;

pub use self::bot::{ScoutBot, TOP_N};
pub use self::ledger::{Completion, EarningsReport, SessionLedger};
