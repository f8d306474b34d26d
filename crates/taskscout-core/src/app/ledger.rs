//! Session ledger: what this bot session has submitted and earned.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{SessionId, Task, TaskId};

/// Completions shown in a report.
const RECENT_COMPLETIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub task_id: TaskId,
    pub title: String,
    pub reward: i64,
}

/// In-process only; discarded on exit like the seen-set.
#[derive(Debug, Clone)]
pub struct SessionLedger {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    completed: Vec<Completion>,
    total_earned: i64,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: SessionId::generate(),
            started_at,
            completed: Vec::new(),
            total_earned: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn completed(&self) -> &[Completion] {
        &self.completed
    }

    pub fn total_earned(&self) -> i64 {
        self.total_earned
    }

    /// Record a successful submission for `task`.
    pub fn record(&mut self, task: &Task) {
        self.total_earned += task.reward();
        self.completed.push(Completion {
            task_id: task.id().clone(),
            title: task.title().to_string(),
            reward: task.reward(),
        });
    }

    pub fn report_now(&self, monitored: usize) -> EarningsReport {
        self.report(Utc::now(), monitored)
    }

    /// Summarise the session as of `now`. `monitored` is the seen-set size.
    pub fn report(&self, now: DateTime<Utc>, monitored: usize) -> EarningsReport {
        let runtime_hours = ((now - self.started_at).num_milliseconds() as f64 / 3_600_000.0).max(0.0);
        let completed = self.completed.len();
        let total = self.total_earned as f64;
        let recent_from = completed.saturating_sub(RECENT_COMPLETIONS);

        EarningsReport {
            session_id: self.session_id,
            started_at: self.started_at,
            runtime_hours,
            tasks_monitored: monitored,
            tasks_completed: completed,
            total_earned: self.total_earned,
            earned_per_hour: total / runtime_hours.max(0.1),
            success_rate_pct: completed as f64 / monitored.max(1) as f64 * 100.0,
            avg_reward: total / completed.max(1) as f64,
            recent: self.completed[recent_from..].to_vec(),
        }
    }
}

impl Default for SessionLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Earnings and activity summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsReport {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub runtime_hours: f64,
    pub tasks_monitored: usize,
    pub tasks_completed: usize,
    pub total_earned: i64,
    /// `total_earned / max(runtime_hours, 0.1)`
    pub earned_per_hour: f64,
    /// `completed / max(monitored, 1) * 100`
    pub success_rate_pct: f64,
    /// `total_earned / max(completed, 1)`
    pub avg_reward: f64,
    /// Up to the last five completions, oldest first.
    pub recent: Vec<Completion>,
}
