//! Filter/Dedup Engine.

use std::fmt;

use tracing::debug;

use super::{SeenSet, rank};
use crate::config::ScoutConfig;
use crate::domain::{Task, TaskType};

/// Why a task was not selected. Checks run in declaration order; the first
/// failing check is reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Accepted in an earlier cycle (or earlier in the same batch).
    AlreadySeen,
    NotOpen { status: String },
    ScoreTooLow { score: f64, min: f64 },
    RewardTooLow { reward: i64, min: i64 },
    TooLong { hours: f64, max: f64 },
    TypeNotAllowed { task_type: TaskType },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::AlreadySeen => write!(f, "already seen"),
            Rejection::NotOpen { status } => write!(f, "status is {status:?}, not open"),
            Rejection::ScoreTooLow { score, min } => write!(f, "ai_score {score:.1} < {min:.1}"),
            Rejection::RewardTooLow { reward, min } => write!(f, "reward {reward} < {min}"),
            Rejection::TooLong { hours, max } => write!(f, "estimated {hours:.1}h > {max:.1}h"),
            Rejection::TypeNotAllowed { task_type } => {
                write!(f, "task_type {task_type} not allowed")
            }
        }
    }
}

/// Stateful filter over fetched tasks.
///
/// Design:
/// - Owns its config (immutable) and its [`SeenSet`] (grow-only).
/// - A task that passes every check is recorded as seen, whether or not work
///   is ever submitted for it.
/// - A rejected task leaves no trace and is evaluated again next cycle.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: ScoutConfig,
    seen: SeenSet,
}

impl FilterEngine {
    pub fn new(config: ScoutConfig) -> Self {
        Self::with_seen(config, SeenSet::new())
    }

    /// Start from an existing seen-set (tests, or a caller carrying history).
    pub fn with_seen(config: ScoutConfig, seen: SeenSet) -> Self {
        Self { config, seen }
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Run every check against `task` without touching the seen-set.
    pub fn evaluate(&self, task: &Task) -> Result<(), Rejection> {
        let config = &self.config;

        if self.seen.contains(task.id()) {
            return Err(Rejection::AlreadySeen);
        }
        if !task.is_open() {
            return Err(Rejection::NotOpen {
                status: task.status().to_string(),
            });
        }
        if task.ai_score() < config.min_ai_score {
            return Err(Rejection::ScoreTooLow {
                score: task.ai_score(),
                min: config.min_ai_score,
            });
        }
        if task.reward() < config.min_reward {
            return Err(Rejection::RewardTooLow {
                reward: task.reward(),
                min: config.min_reward,
            });
        }
        if task.estimated_hours() > config.max_estimated_hours {
            return Err(Rejection::TooLong {
                hours: task.estimated_hours(),
                max: config.max_estimated_hours,
            });
        }
        if !config.task_types.contains(task.task_type()) {
            return Err(Rejection::TypeNotAllowed {
                task_type: task.task_type().clone(),
            });
        }
        Ok(())
    }

    /// Keep new, suitable tasks in input order and mark them seen.
    pub fn filter(&mut self, tasks: Vec<Task>) -> Vec<Task> {
        let mut accepted = Vec::new();
        for task in tasks {
            match self.evaluate(&task) {
                Ok(()) => {
                    self.seen.insert(task.id().clone());
                    accepted.push(task);
                }
                Err(reason) => {
                    debug!(task_id = %task.id(), %reason, "task rejected");
                }
            }
        }
        accepted
    }

    /// [`Self::filter`] followed by [`rank`].
    pub fn select(&mut self, tasks: Vec<Task>) -> Vec<Task> {
        let mut selected = self.filter(tasks);
        rank(&mut selected);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawTask, TaskId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn engine() -> FilterEngine {
        FilterEngine::new(ScoutConfig::default())
    }

    /// Scores 10, 2h, Research, open.
    fn good(id: &str, reward: i64) -> Task {
        Task::from_raw(
            RawTask::new(id, "Write a research summary")
                .description("analyze data and summarize findings")
                .task_type("Research")
                .reward(reward)
                .status("open"),
        )
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id().as_str()).collect()
    }

    #[rstest]
    fn accepts_and_marks_seen(mut engine: FilterEngine) {
        let out = engine.filter(vec![good("a", 1000)]);
        assert_eq!(ids(&out), vec!["a"]);
        assert!(engine.seen().contains(&TaskId::new("a")));
    }

    #[rstest]
    fn second_run_on_same_batch_is_empty(mut engine: FilterEngine) {
        let batch = vec![good("a", 1000), good("b", 2000)];
        assert_eq!(engine.filter(batch.clone()).len(), 2);
        assert!(engine.filter(batch).is_empty());
        assert_eq!(engine.seen().len(), 2);
    }

    #[test]
    fn prepopulated_id_is_excluded() {
        let seen: SeenSet = [TaskId::new("a")].into_iter().collect();
        let mut engine = FilterEngine::with_seen(ScoutConfig::default(), seen);

        let task = good("a", 1000);
        assert_eq!(engine.evaluate(&task), Err(Rejection::AlreadySeen));
        assert!(engine.filter(vec![task]).is_empty());
        assert_eq!(engine.seen().len(), 1);
    }

    #[rstest]
    fn duplicate_in_one_batch_is_accepted_once(mut engine: FilterEngine) {
        let out = engine.filter(vec![good("a", 1000), good("a", 3000)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].reward(), 1000);
    }

    #[rstest]
    fn closed_task_fails_only_on_status(mut engine: FilterEngine) {
        let task = Task::from_raw(
            RawTask::new("c", "Write a research summary")
                .description("analyze data and summarize findings")
                .task_type("Research")
                .reward(1000)
                .status("closed"),
        );
        assert!(task.ai_score() >= 9.0);
        assert_eq!(
            engine.evaluate(&task),
            Err(Rejection::NotOpen {
                status: "closed".to_string()
            })
        );
        assert!(engine.filter(vec![task]).is_empty());
        assert!(engine.seen().is_empty());
    }

    #[rstest]
    fn low_score_fails_regardless_of_reward(engine: FilterEngine) {
        let task = Task::from_raw(
            RawTask::new("art", "Design album art")
                .description("physical manual painting")
                .task_type("Other")
                .reward(1_000_000)
                .status("open"),
        );
        assert_eq!(
            engine.evaluate(&task),
            Err(Rejection::ScoreTooLow {
                score: 0.0,
                min: 5.0
            })
        );
    }

    #[rstest]
    fn thresholds_are_inclusive(mut engine: FilterEngine) {
        // reward exactly at min_reward passes
        let out = engine.filter(vec![good("edge", 500)]);
        assert_eq!(out.len(), 1);
    }

    #[rstest]
    fn low_reward_is_rejected(engine: FilterEngine) {
        assert_eq!(
            engine.evaluate(&good("cheap", 499)),
            Err(Rejection::RewardTooLow {
                reward: 499,
                min: 500
            })
        );
    }

    #[test]
    fn long_task_is_rejected() {
        let config = ScoutConfig {
            max_estimated_hours: 4.0,
            min_ai_score: 0.0,
            ..ScoutConfig::default()
        };
        let engine = FilterEngine::new(config);
        let task = Task::from_raw(
            RawTask::new("big", "Develop a comprehensive system")
                .task_type("Automation")
                .reward(5000)
                .status("open"),
        );
        assert_eq!(task.estimated_hours(), 6.0);
        assert_eq!(
            engine.evaluate(&task),
            Err(Rejection::TooLong {
                hours: 6.0,
                max: 4.0
            })
        );
    }

    #[rstest]
    fn disallowed_type_is_rejected(engine: FilterEngine) {
        let task = Task::from_raw(
            RawTask::new("gfx", "Write and research docs")
                .description("documentation, code samples")
                .task_type("Graphics")
                .reward(5000)
                .status("open"),
        );
        assert_eq!(
            engine.evaluate(&task),
            Err(Rejection::TypeNotAllowed {
                task_type: TaskType::new("Graphics")
            })
        );
    }

    #[rstest]
    fn rejected_tasks_stay_eligible(mut engine: FilterEngine) {
        let closed = Task::from_raw(
            RawTask::new("later", "Write a research summary")
                .description("analyze data and summarize findings")
                .task_type("Research")
                .reward(1000)
                .status("draft"),
        );
        assert!(engine.filter(vec![closed]).is_empty());

        // same id re-listed as open on the next cycle
        let out = engine.filter(vec![good("later", 1000)]);
        assert_eq!(ids(&out), vec!["later"]);
    }

    #[rstest]
    fn select_ranks_by_roi_and_keeps_ties_stable(mut engine: FilterEngine) {
        let out = engine.select(vec![
            good("a", 1000),
            good("b", 4000),
            good("c", 1000),
        ]);
        assert_eq!(ids(&out), vec!["b", "a", "c"]);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::AlreadySeen.to_string(), "already seen");
        assert_eq!(
            Rejection::RewardTooLow { reward: 10, min: 500 }.to_string(),
            "reward 10 < 500"
        );
    }
}
