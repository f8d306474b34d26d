//! Seen-set: identifiers already accepted by the engine.

use std::collections::HashSet;

use crate::domain::TaskId;

/// Grow-only set of accepted task identifiers.
///
/// Owned by exactly one [`super::FilterEngine`]. There is no removal API;
/// the set only shrinks when the process exits.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    ids: HashSet<TaskId>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.ids.contains(id)
    }

    /// Returns `false` if the id was already present.
    pub fn insert(&mut self, id: TaskId) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskId> {
        self.ids.iter()
    }
}

impl FromIterator<TaskId> for SeenSet {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
