//! Ports - 外部コラボレーターの抽象化
//!
//! コアはネットワーク I/O を持たない。タスク取得・作業提出・プロフィール参照は
//! ここの trait 越しに行い、実装は `impls` に置く。

mod profile;
mod submitter;
mod task_source;

pub use profile::ProfileLookup;
pub use submitter::{Submission, WorkSubmitter};
pub use task_source::TaskSource;
