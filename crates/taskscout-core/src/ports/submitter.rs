use async_trait::async_trait;
use serde::Serialize;

use crate::domain::TaskId;
use crate::error::ScoutError;

/// Completed work for one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub task_id: TaskId,
    pub worker_address: String,
    pub message: String,
    pub proof_url: String,
}

/// Hands completed work back to the marketplace.
#[async_trait]
pub trait WorkSubmitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), ScoutError>;
}
