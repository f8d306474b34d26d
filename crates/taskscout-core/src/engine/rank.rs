//! Ranker: order by reward per hour.

use crate::domain::Task;

/// Stable sort by roi, highest first. Equal-roi tasks keep listing order.
pub fn rank(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.roi().total_cmp(&a.roi()));
}
