//! AI suitability score (0-10).

use super::keywords::{FAVORED_TYPE_BONUS, weighted_keywords};
use crate::domain::TaskType;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Score how suitable a task is for an agent.
///
/// `text` must already be lower-cased (see [`super::match_text`]). Each table
/// keyword contributes its weight once when it is a substring of `text`, so
/// overlapping keywords ("analyze" inside "analyze data") count independently.
/// The running total is clamped to `[MIN_SCORE, MAX_SCORE]`.
pub fn ai_score(text: &str, task_type: &TaskType) -> f64 {
    let mut score: f64 = weighted_keywords()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum();

    if task_type.is_favored() {
        score += FAVORED_TYPE_BONUS;
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}
