//! Derived metrics: AI suitability, effort estimate, reward per hour.
//!
//! All functions here are pure. The only inputs are the task text, its type
//! and the fixed tables in [`keywords`].

pub mod estimate;
pub mod keywords;
pub mod roi;
pub mod suitability;

pub use estimate::{Effort, estimated_hours};
pub use roi::{MIN_HOURS, roi};
pub use suitability::{MAX_SCORE, MIN_SCORE, ai_score};

use serde::{Deserialize, Serialize};

use crate::domain::TaskType;

/// Text the keyword tables are matched against: lower-cased `title + " " + description`.
pub fn match_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

/// Metrics computed once when a task record is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub ai_score: f64,
    pub estimated_hours: f64,
    pub roi: f64,
}

impl Metrics {
    pub fn derive(title: &str, description: &str, task_type: &TaskType, reward: i64) -> Self {
        let text = match_text(title, description);
        let ai_score = ai_score(&text, task_type);
        let estimated_hours = estimated_hours(&text);
        Self {
            ai_score,
            estimated_hours,
            roi: roi(reward, estimated_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_text_joins_and_lowercases() {
        assert_eq!(match_text("Write CODE", "Fast"), "write code fast");
        assert_eq!(match_text("", ""), " ");
    }

    #[test]
    fn derive_runs_all_three_calculations() {
        let m = Metrics::derive("Build a bot", "", &TaskType::new("Automation"), 600);
        // "bot"/"build" -> complex bucket; no high-value keyword, only the type bonus
        assert_eq!(m.estimated_hours, 6.0);
        assert_eq!(m.ai_score, 2.0);
        assert_eq!(m.roi, 100.0);
    }
}
