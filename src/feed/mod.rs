//! Home feed aggregation.
//!
//! - `ProjectSource`: where sessions and projects come from
//! - `HttpProjectSource`: the REST API implementation
//! - `FeedAggregator`: fetch, fall back, and compute statistics

mod aggregator;
mod client;
mod stats;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Project, Session, Stats};

pub use aggregator::FeedAggregator;
pub use client::HttpProjectSource;
pub use stats::{compute_stats, days_in_month, round2};

/// Parameters for a project listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Maximum number of records, most recent first
    pub limit: u32,
    /// Restrict to projects by this author
    pub author: Option<String>,
}

impl ProjectQuery {
    pub fn recent(limit: u32) -> Self {
        Self {
            limit,
            author: None,
        }
    }

    pub fn by_author(limit: u32, author: impl Into<String>) -> Self {
        Self {
            limit,
            author: Some(author.into()),
        }
    }
}

/// Trait for session and project backends.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Resolve the current session.
    async fn session(&self) -> Result<Session>;

    /// List projects matching `query`, most recent first.
    async fn projects(&self, query: &ProjectQuery) -> Result<Vec<Project>>;
}

/// Where the feed's projects came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    Remote,
    Fallback,
}

/// A loaded home feed.
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub projects: Vec<Project>,
    pub stats: Stats,
    pub source: FeedSource,
}
