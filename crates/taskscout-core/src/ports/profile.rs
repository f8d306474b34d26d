use async_trait::async_trait;

use crate::error::ScoutError;

/// Wallet profile / reputation lookup. The shape is marketplace-defined, so
/// it is passed through as JSON.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn profile(&self, wallet: &str) -> Result<serde_json::Value, ScoutError>;
}
