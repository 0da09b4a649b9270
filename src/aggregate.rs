//! Fan-out release lookups, one record per tracked repository.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use log::{debug, warn};

use crate::config::RepositoryConfig;
use crate::source::{FetchError, Release, ReleaseSource};

/// The outcome of looking up one repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    pub config: RepositoryConfig,
    /// Releases exactly as upstream returned them; empty on failure.
    pub releases: Vec<Release>,
    /// Publish time of the first release, or the Unix epoch.
    pub last_updated: DateTime<Utc>,
    pub error: Option<FetchError>,
}

/// Which card a record renders as.
#[derive(Debug, PartialEq)]
pub enum RecordState<'a> {
    Failed(&'a FetchError),
    Empty,
    Published(&'a Release),
}

impl RepositoryRecord {
    /// Normalize a lookup result.
    ///
    /// Upstream lists releases newest first, so element 0 is taken as the
    /// latest without scanning the rest.
    pub fn from_lookup(config: RepositoryConfig, result: Result<Vec<Release>, FetchError>) -> Self {
        match result {
            Ok(releases) => {
                let last_updated = releases
                    .first()
                    .and_then(|r| r.published_at)
                    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
                Self {
                    config,
                    releases,
                    last_updated,
                    error: None,
                }
            }
            Err(error) => Self {
                config,
                releases: Vec::new(),
                last_updated: DateTime::<Utc>::UNIX_EPOCH,
                error: Some(error),
            },
        }
    }

    pub fn latest(&self) -> Option<&Release> {
        self.releases.first()
    }

    pub fn state(&self) -> RecordState<'_> {
        match (&self.error, self.latest()) {
            (Some(error), _) => RecordState::Failed(error),
            (None, None) => RecordState::Empty,
            (None, Some(release)) => RecordState::Published(release),
        }
    }
}

/// Look up every repository concurrently and wait for all of them.
///
/// A failed lookup becomes an error record and never affects the others.
/// The only error returned here is a lookup task that died outright.
#[tracing::instrument(skip(source, repositories))]
pub async fn fetch_all(
    source: Arc<dyn ReleaseSource>,
    repositories: &[RepositoryConfig],
) -> Result<Vec<RepositoryRecord>> {
    debug!(
        "Looking up {} repositories at {}",
        repositories.len(),
        source.api_url()
    );

    let handles = repositories.iter().cloned().map(|config| {
        let source = Arc::clone(&source);
        tokio::spawn(async move {
            let result = source.get_releases(&config.id).await;
            match &result {
                Ok(releases) => debug!("{}: {} releases", config.id, releases.len()),
                Err(e) => warn!("{}: lookup failed: {}", config.id, e),
            }
            RepositoryRecord::from_lookup(config, result)
        })
    });

    join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.context("Release lookup task failed"))
        .collect()
}
