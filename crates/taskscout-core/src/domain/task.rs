//! Task record: raw payload + derived metrics.

use serde::Serialize;

use super::{RawTask, TaskId, TaskType};
use crate::scoring::Metrics;

/// The only actionable status.
pub const OPEN_STATUS: &str = "open";

/// One marketplace task with its derived metrics.
///
/// Design:
/// - Built only through [`Task::from_raw`], which runs the derive step once.
/// - No setters. Derived metrics always agree with title/description/type.
/// - Records are rebuilt on every fetch cycle; nothing caches them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    reward: i64,
    task_type: TaskType,
    status: String,
    created_at: String,
    poster: String,

    #[serde(flatten)]
    metrics: Metrics,
}

impl Task {
    pub fn from_raw(raw: RawTask) -> Self {
        let metrics = Metrics::derive(&raw.title, &raw.description, &raw.task_type, raw.reward_amount);
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            reward: raw.reward_amount,
            task_type: raw.task_type,
            status: raw.status,
            created_at: raw.created_at,
            poster: raw.poster_address,
            metrics,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reward(&self) -> i64 {
        self.reward
    }

    pub fn task_type(&self) -> &TaskType {
        &self.task_type
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == OPEN_STATUS
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn poster(&self) -> &str {
        &self.poster
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn ai_score(&self) -> f64 {
        self.metrics.ai_score
    }

    pub fn estimated_hours(&self) -> f64 {
        self.metrics.estimated_hours
    }

    pub fn roi(&self) -> f64 {
        self.metrics.roi
    }
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Self::from_raw(raw)
    }
}
