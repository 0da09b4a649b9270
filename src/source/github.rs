//! GitHub source implementation.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::http::HttpClient;

use super::{FetchError, Release, ReleaseAsset, ReleaseSource, RepoId};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        pub name: Option<String>,
        #[serde(default)]
        pub published_at: Option<DateTime<Utc>>,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub browser_download_url: String,
    }
}

/// GitHub source implementation.
pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create from an existing HttpClient against the public API.
    pub fn new(http_client: HttpClient) -> Self {
        Self::with_api_url(http_client, DEFAULT_API_URL)
    }

    /// Create from an existing HttpClient against a custom API URL.
    pub fn with_api_url(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_releases(&self, repo: &RepoId) -> Result<Value, FetchError> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        debug!("Fetching releases from {}...", url);
        self.http_client.get_json_value(&url).await
    }
}

/// Turn a raw payload into releases.
///
/// Only a non-array payload or a malformed first release is an invalid
/// format. Older entries that fail to parse are skipped.
fn parse_releases(payload: Value) -> Result<Vec<Release>, FetchError> {
    let Value::Array(entries) = payload else {
        return Err(FetchError::InvalidFormat);
    };

    let mut entries = entries.into_iter();
    let Some(latest) = entries.next() else {
        return Ok(Vec::new());
    };

    let latest: api::Release =
        serde_json::from_value(latest).map_err(|_| FetchError::InvalidFormat)?;

    let older = entries.filter_map(|entry| match serde_json::from_value::<api::Release>(entry) {
        Ok(release) => Some(release),
        Err(e) => {
            debug!("Skipping malformed release entry: {}", e);
            None
        }
    });

    Ok(std::iter::once(latest).chain(older).map(Release::from).collect())
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>, FetchError> {
        let payload = self.fetch_releases(repo).await?;
        parse_releases(payload)
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            name: r.name,
            published_at: r.published_at,
            body: r.body,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
        }
    }
}
