use async_trait::async_trait;

use crate::domain::RawTask;
use crate::error::ScoutError;

/// Lists the marketplace's current tasks.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch one batch of raw payloads, in marketplace listing order.
    async fn fetch_tasks(&self) -> Result<Vec<RawTask>, ScoutError>;
}
