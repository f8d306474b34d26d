//! Raw marketplace payloads.
//!
//! The marketplace is loose about which fields it sends. Missing fields are
//! defaulted here rather than failing the whole batch.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::{TaskId, TaskType};

fn default_status() -> String {
    "unknown".to_string()
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_status))
}

/// Rewards arrive as integers, floats (`750.0`) or `null`. Floats are truncated.
fn lenient_reward<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reward {
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Reward>::deserialize(deserializer)? {
        Some(Reward::Int(n)) => n,
        Some(Reward::Float(f)) => f as i64,
        None => 0,
    })
}

/// One task as listed by `GET /tasks`, after normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: TaskId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Reward in marketplace tokens. Signed so negative values flow through unguarded.
    #[serde(default, deserialize_with = "lenient_reward")]
    pub reward_amount: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub task_type: TaskType,

    #[serde(default = "default_status", deserialize_with = "null_as_unknown")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub poster_address: String,
}

impl RawTask {
    /// Convenience constructor used by tests and in-memory sources.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            reward_amount: 0,
            task_type: TaskType::default(),
            status: default_status(),
            created_at: String::new(),
            poster_address: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn reward(mut self, reward_amount: i64) -> Self {
        self.reward_amount = reward_amount;
        self
    }

    pub fn task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = TaskType::new(task_type);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Envelope of the `GET /tasks` response.
///
/// Items stay as raw JSON until [`TaskListResponse::into_tasks`] so one
/// malformed item cannot sink the rest of the batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

impl TaskListResponse {
    /// Decode every item, skipping (and logging) the ones that still fail.
    pub fn into_tasks(self) -> Vec<RawTask> {
        self.data
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<RawTask>(item) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed task item");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_take_defaults() {
        let raw: RawTask = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(raw.id.as_str(), "");
        assert_eq!(raw.title, "");
        assert_eq!(raw.reward_amount, 0);
        assert_eq!(raw.task_type.as_str(), "Other");
        assert_eq!(raw.status, "unknown");
        assert_eq!(raw.poster_address, "");
    }

    #[test]
    fn full_payload_is_read() {
        let json = r#"
        {
          "id": "t-42",
          "title": "Write docs",
          "description": "documentation for the API",
          "reward_amount": 1500,
          "task_type": "Writing",
          "status": "open",
          "created_at": "2026-01-02T03:04:05Z",
          "poster_address": "0xabc"
        }"#;
        let raw: RawTask = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            raw,
            RawTask::new("t-42", "Write docs")
                .description("documentation for the API")
                .reward(1500)
                .task_type("Writing")
                .status("open")
                .with_meta("2026-01-02T03:04:05Z", "0xabc")
        );
    }

    #[test]
    fn response_without_data_is_empty() {
        let resp: TaskListResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(resp.into_tasks().is_empty());
    }

    #[test]
    fn nulls_read_as_missing() {
        let json = r#"
        {
          "id": "t-7",
          "title": null,
          "description": null,
          "reward_amount": null,
          "task_type": null,
          "status": null,
          "created_at": null,
          "poster_address": null
        }"#;
        let raw: RawTask = serde_json::from_str(json).expect("deserialize");
        assert_eq!(raw, RawTask::new("t-7", ""));
        assert_eq!(raw.task_type.as_str(), "Other");
        assert_eq!(raw.status, "unknown");
    }

    #[test]
    fn float_reward_is_truncated() {
        let raw: RawTask =
            serde_json::from_str(r#"{"id": "f", "reward_amount": 750.9}"#).expect("deserialize");
        assert_eq!(raw.reward_amount, 750);
    }

    #[test]
    fn malformed_item_is_skipped_not_the_batch() {
        let json = r#"{"data": [
            {"id": "ok-1", "reward_amount": 900},
            {"id": "bad", "reward_amount": "lots"},
            "not even an object",
            {"id": "ok-2"}
        ]}"#;
        let resp: TaskListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = resp
            .into_tasks()
            .into_iter()
            .map(|t| t.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["ok-1", "ok-2"]);
    }

    impl RawTask {
        fn with_meta(mut self, created_at: &str, poster: &str) -> Self {
            self.created_at = created_at.to_string();
            self.poster_address = poster.to_string();
            self
        }
    }
}
