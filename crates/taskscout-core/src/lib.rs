//! taskscout-core
//!
//! Core building blocks for the bounty-scouting bot.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task_type, payload, task）
//! - **scoring**: 派生メトリクス（ai_score, estimated_hours, roi）
//! - **engine**: Filter/Dedup Engine と Ranker（SeenSet を所有）
//! - **config**: 閾値とマーケットプレイス設定（figment で階層ロード）
//! - **ports**: 外部コラボレーターの抽象化（TaskSource, WorkSubmitter, ProfileLookup）
//! - **impls**: 実装（MarketplaceClient, InMemoryMarketplace）
//! - **app**: ポーリングループ、セッション台帳、レポート

pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod impls;
pub mod ports;
pub mod scoring;

pub use config::{ConfigError, MarketplaceConfig, ScoutConfig};
pub use domain::{RawTask, Task, TaskId, TaskType};
pub use engine::{FilterEngine, Rejection, SeenSet, rank};
pub use error::ScoutError;
