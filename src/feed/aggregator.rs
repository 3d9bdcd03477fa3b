// src/feed/aggregator.rs

//! Feed loading with sample fallback and per-user statistics.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use crate::catalog::sample_projects;
use crate::feed::{Feed, FeedSource, ProjectQuery, ProjectSource, compute_stats};
use crate::models::{FeedConfig, Project, Stats};

/// Loads the home feed from a [`ProjectSource`].
///
/// Fetch failures never surface to the caller: the feed falls back to the
/// built-in sample projects and statistics keep their previous values.
pub struct FeedAggregator {
    source: Arc<dyn ProjectSource>,
    config: FeedConfig,
    stats: Stats,
}

impl FeedAggregator {
    /// Create an aggregator with zeroed statistics.
    pub fn new(source: Arc<dyn ProjectSource>, config: FeedConfig) -> Self {
        Self {
            source,
            config,
            stats: Stats::default(),
        }
    }

    /// Statistics from the last successful computation.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Load the feed using the current local time.
    pub async fn load_feed(&mut self) -> Feed {
        self.load_feed_at(Local::now()).await
    }

    /// Load the feed, computing monthly statistics relative to `now`.
    pub async fn load_feed_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> Feed {
        let user_id = self.resolve_user().await;

        let (projects, source) = self.fetch_projects(user_id.as_deref()).await;

        if let Some(user_id) = user_id.as_deref() {
            self.refresh_stats(user_id, now).await;
        }

        Feed {
            projects,
            stats: self.stats,
            source,
        }
    }

    async fn resolve_user(&self) -> Option<String> {
        match self.source.session().await {
            Ok(session) => session.user_id().map(String::from),
            Err(error) => {
                log::debug!("Session lookup failed, continuing anonymously: {}", error);
                None
            }
        }
    }

    async fn fetch_projects(&self, user_id: Option<&str>) -> (Vec<Project>, FeedSource) {
        let query = match user_id {
            Some(id) if self.config.scope_to_user => ProjectQuery::by_author(self.config.limit, id),
            _ => ProjectQuery::recent(self.config.limit),
        };

        match self.source.projects(&query).await {
            Ok(projects) if !projects.is_empty() => {
                log::info!("Loaded {} projects for the feed", projects.len());
                (projects, FeedSource::Remote)
            }
            Ok(_) => {
                log::info!("Feed is empty, showing sample projects");
                (sample_projects(), FeedSource::Fallback)
            }
            Err(error) => {
                log::warn!("Failed to fetch feed, showing sample projects: {}", error);
                (sample_projects(), FeedSource::Fallback)
            }
        }
    }

    async fn refresh_stats<Tz: TimeZone>(&mut self, user_id: &str, now: DateTime<Tz>) {
        let query = ProjectQuery::by_author(self.config.stats_limit, user_id);
        match self.source.projects(&query).await {
            Ok(projects) => {
                self.stats = compute_stats(&projects, now, self.config.minutes_per_project);
                log::debug!("Computed stats for {}: {:?}", user_id, self.stats);
            }
            Err(error) => {
                log::warn!("Failed to fetch stats for {}: {}", user_id, error);
            }
        }
    }
}
