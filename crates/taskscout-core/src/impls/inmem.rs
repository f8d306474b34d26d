//! In-memory marketplace (開発・テスト用).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::RawTask;
use crate::error::ScoutError;
use crate::ports::{ProfileLookup, Submission, TaskSource, WorkSubmitter};

/// Scripted marketplace.
///
/// - Each `fetch_tasks` pops the next scripted batch; once drained it returns
///   an empty batch.
/// - Submissions are recorded in order and can be made to fail.
#[derive(Default)]
pub struct InMemoryMarketplace {
    batches: Mutex<VecDeque<Result<Vec<RawTask>, String>>>,
    submissions: Mutex<Vec<Submission>>,
    reject_submissions: AtomicBool,
    profile: Mutex<serde_json::Value>,
}

impl InMemoryMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch for the next fetch.
    pub async fn push_batch(&self, batch: Vec<RawTask>) {
        self.batches.lock().await.push_back(Ok(batch));
    }

    /// Make the next fetch fail with `message`.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.batches.lock().await.push_back(Err(message.into()));
    }

    pub fn reject_submissions(&self, reject: bool) {
        self.reject_submissions.store(reject, Ordering::Relaxed);
    }

    pub async fn set_profile(&self, profile: serde_json::Value) {
        *self.profile.lock().await = profile;
    }

    /// Everything accepted so far, oldest first.
    pub async fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().await.clone()
    }
}

#[async_trait]
impl TaskSource for InMemoryMarketplace {
    async fn fetch_tasks(&self) -> Result<Vec<RawTask>, ScoutError> {
        match self.batches.lock().await.pop_front() {
            Some(Ok(batch)) => Ok(batch),
            Some(Err(message)) => Err(ScoutError::Other(message)),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl WorkSubmitter for InMemoryMarketplace {
    async fn submit(&self, submission: &Submission) -> Result<(), ScoutError> {
        if self.reject_submissions.load(Ordering::Relaxed) {
            return Err(ScoutError::SubmissionRejected(
                submission.task_id.clone(),
                "rejected by in-memory marketplace".to_string(),
            ));
        }
        self.submissions.lock().await.push(submission.clone());
        Ok(())
    }
}

#[async_trait]
impl ProfileLookup for InMemoryMarketplace {
    async fn profile(&self, _wallet: &str) -> Result<serde_json::Value, ScoutError> {
        Ok(self.profile.lock().await.clone())
    }
}
