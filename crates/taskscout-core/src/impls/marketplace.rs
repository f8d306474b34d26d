//! HTTP client for the bounty marketplace.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use super::http::{decode, ensure_success, read_json};
use crate::config::MarketplaceConfig;
use crate::domain::{RawTask, TaskId, TaskListResponse};
use crate::error::ScoutError;
use crate::ports::{ProfileLookup, Submission, TaskSource, WorkSubmitter};

/// Body of `POST /tasks/{id}/submit`.
#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    worker_address: &'a str,
    message: &'a str,
    link_url: &'a str,
    link_type: &'static str,
}

impl<'a> From<&'a Submission> for SubmitPayload<'a> {
    fn from(s: &'a Submission) -> Self {
        Self {
            worker_address: &s.worker_address,
            message: &s.message,
            link_url: &s.proof_url,
            link_type: "other",
        }
    }
}

/// Talks to the marketplace REST API. No authentication: the wallet address
/// identifies the worker.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    base_url: String,
    profile_base: String,
}

impl MarketplaceClient {
    pub fn new(config: &MarketplaceConfig) -> Result<Self, ScoutError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile_base: config.profile_url.trim_end_matches('/').to_string(),
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn submit_url(&self, task_id: &TaskId) -> String {
        format!("{}/tasks/{}/submit", self.base_url, task_id)
    }

    fn profile_url(&self, wallet: &str) -> String {
        format!("{}/{}", self.profile_base, wallet)
    }
}

/// Decode a `GET /tasks` body. Only a broken envelope is an error; bad
/// items are dropped individually.
pub fn parse_task_list(body: &str) -> Result<Vec<RawTask>, ScoutError> {
    decode::<TaskListResponse>(body, "task list").map(TaskListResponse::into_tasks)
}

#[async_trait]
impl TaskSource for MarketplaceClient {
    async fn fetch_tasks(&self) -> Result<Vec<RawTask>, ScoutError> {
        let url = self.tasks_url();
        debug!(%url, "fetching tasks");
        let body = ensure_success(self.http.get(&url).send().await?)
            .await?
            .text()
            .await?;
        let tasks = parse_task_list(&body)?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }
}

#[async_trait]
impl WorkSubmitter for MarketplaceClient {
    async fn submit(&self, submission: &Submission) -> Result<(), ScoutError> {
        let url = self.submit_url(&submission.task_id);
        let resp = self
            .http
            .post(&url)
            .json(&SubmitPayload::from(submission))
            .send()
            .await?;
        ensure_success(resp).await?;
        info!(task_id = %submission.task_id, "work submitted");
        Ok(())
    }
}

#[async_trait]
impl ProfileLookup for MarketplaceClient {
    async fn profile(&self, wallet: &str) -> Result<serde_json::Value, ScoutError> {
        let resp = self.http.get(self.profile_url(wallet)).send().await?;
        read_json(resp, "profile").await
    }
}
