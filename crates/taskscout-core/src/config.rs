//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKSCOUT_*` prefix, `__` as separator)
//! 2. An explicit TOML file, or `./taskscout.toml` when none is given
//! 3. User-level `~/.config/taskscout/config.toml`
//! 4. Built-in defaults
//!
//! `TASKSCOUT_MIN_REWARD=1000` -> `min_reward`,
//! `TASKSCOUT_MARKETPLACE__BASE_URL=...` -> `marketplace.base_url`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TaskType;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

fn default_task_types() -> BTreeSet<TaskType> {
    ["Automation", "Writing", "Research", "Other"]
        .into_iter()
        .map(TaskType::new)
        .collect()
}

/// Thresholds for the filter engine plus the knobs the polling loop and
/// submission path read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Minimum suitability score (inclusive).
    #[serde(default = "ScoutConfig::default_min_ai_score")]
    pub min_ai_score: f64,

    /// Minimum reward in marketplace tokens (inclusive).
    #[serde(default = "ScoutConfig::default_min_reward")]
    pub min_reward: i64,

    /// Tasks estimated above this many hours are skipped.
    #[serde(default = "ScoutConfig::default_max_estimated_hours")]
    pub max_estimated_hours: f64,

    /// Seconds between polling cycles.
    #[serde(default = "ScoutConfig::default_check_interval")]
    pub check_interval: u64,

    /// Submit work for selected tasks without manual approval.
    #[serde(default)]
    pub auto_submit: bool,

    /// Accepted task types.
    #[serde(default = "default_task_types")]
    pub task_types: BTreeSet<TaskType>,

    /// Proof link sent along with automatic submissions.
    #[serde(default)]
    pub proof_url: Option<String>,

    #[serde(default)]
    pub marketplace: MarketplaceConfig,
}

impl ScoutConfig {
    const fn default_min_ai_score() -> f64 {
        5.0
    }

    const fn default_min_reward() -> i64 {
        500
    }

    const fn default_max_estimated_hours() -> f64 {
        8.0
    }

    const fn default_check_interval() -> u64 {
        300
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval)
    }

    /// Load from all sources. `path` overrides the `./taskscout.toml` lookup
    /// and, unlike that implicit file, must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: "config".to_string(),
                    reason: format!("file {} not found", path.display()),
                });
            }
        }
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // 明示パスが無ければカレントの taskscout.toml（存在しなければ無視される）
        let local_path = path.map_or_else(|| PathBuf::from("taskscout.toml"), Path::to_path_buf);
        figment = figment.merge(Toml::file(local_path));

        figment.merge(Env::prefixed("TASKSCOUT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskscout").join("config.toml"))
    }

    /// Reject values the polling loop or HTTP client cannot work with.
    ///
    /// Thresholds are deliberately left unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_interval == 0 {
            return Err(invalid("check_interval", "must be at least 1 second"));
        }
        if self.max_estimated_hours.is_nan() || self.max_estimated_hours <= 0.0 {
            return Err(invalid("max_estimated_hours", "must be positive"));
        }
        if self.marketplace.timeout_secs == 0 {
            return Err(invalid("marketplace.timeout_secs", "must be at least 1 second"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            min_ai_score: Self::default_min_ai_score(),
            min_reward: Self::default_min_reward(),
            max_estimated_hours: Self::default_max_estimated_hours(),
            check_interval: Self::default_check_interval(),
            auto_submit: false,
            task_types: default_task_types(),
            proof_url: None,
            marketplace: MarketplaceConfig::default(),
        }
    }
}

/// Marketplace endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    #[serde(default = "MarketplaceConfig::default_base_url")]
    pub base_url: String,

    #[serde(default = "MarketplaceConfig::default_profile_url")]
    pub profile_url: String,

    #[serde(default = "MarketplaceConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MarketplaceConfig {
    fn default_base_url() -> String {
        "https://www.moltask.com/api".to_string()
    }

    fn default_profile_url() -> String {
        "https://www.moltask.com/profile".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            profile_url: Self::default_profile_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}
