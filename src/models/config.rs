//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend API and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Feed and statistics behavior
    #[serde(default)]
    pub feed: FeedConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.feed.limit == 0 {
            return Err(AppError::validation("feed.limit must be > 0"));
        }
        if self.feed.stats_limit == 0 {
            return Err(AppError::validation("feed.stats_limit must be > 0"));
        }
        Ok(())
    }
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin serving `/api/auth/session` and `/api/projects`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Feed aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum number of projects shown in the feed
    #[serde(default = "defaults::feed_limit")]
    pub limit: u32,

    /// Maximum number of the user's projects used for statistics
    #[serde(default = "defaults::stats_limit")]
    pub stats_limit: u32,

    /// Restrict the feed to the signed-in user's projects
    #[serde(default = "defaults::scope_to_user")]
    pub scope_to_user: bool,

    /// Synthetic activity minutes credited per project
    #[serde(default = "defaults::minutes_per_project")]
    pub minutes_per_project: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            limit: defaults::feed_limit(),
            stats_limit: defaults::stats_limit(),
            scope_to_user: defaults::scope_to_user(),
            minutes_per_project: defaults::minutes_per_project(),
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file, relative to the config file. Built-in sample data when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Resolve the catalog path against the directory holding the config file.
    pub fn resolve(&self, base_dir: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base_dir.join(p)
            }
        })
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://localhost:3000".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; showcase/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Feed defaults
    pub fn feed_limit() -> u32 {
        8
    }
    pub fn stats_limit() -> u32 {
        100
    }
    pub fn scope_to_user() -> bool {
        true
    }
    pub fn minutes_per_project() -> u32 {
        30
    }
}
