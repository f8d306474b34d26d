//! TaskType - マーケットプレイスの task_type（オープンな文字列列挙）

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task types that earn the flat suitability bonus.
pub const FAVORED_TASK_TYPES: &[&str] = &["Automation", "Writing", "Research"];

/// The type the marketplace client assumes when a payload omits `task_type`.
pub const DEFAULT_TASK_TYPE: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskType(String);

impl TaskType {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive membership in [`FAVORED_TASK_TYPES`].
    pub fn is_favored(&self) -> bool {
        FAVORED_TASK_TYPES.contains(&self.as_str())
    }
}

impl Default for TaskType {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_TYPE)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TaskType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
