//! Release source abstraction.
//!
//! A source answers one question: "what releases has this repository
//! published?". The GitHub implementation lives in [`github`]; tests swap in
//! the generated `MockReleaseSource`.

mod github;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

pub use github::{DEFAULT_API_URL, GitHubSource};

/// Repository identifier (owner/name format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Build an identifier from its two halves.
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId::new(parts[0], parts[1]))
        }
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
}

/// A published release, newest-first as the upstream API returns them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    /// Release title, may be absent or empty
    pub name: Option<String>,
    /// Publication time; drafts have none
    pub published_at: Option<DateTime<Utc>>,
    /// Release notes
    pub body: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Title shown on the dashboard: the release name, or the tag when the
    /// name is missing or blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag,
        }
    }
}

/// Why a release lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout)
    Request(String),
    /// Upstream answered with a non-success status code
    Status(u16),
    /// The response body was not JSON
    Decode(String),
    /// JSON arrived but was not a list of releases
    InvalidFormat,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP error: {}", code),
            FetchError::Decode(msg) => write!(f, "failed to decode response: {}", msg),
            FetchError::InvalidFormat => write!(f, "invalid data format"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can list a repository's releases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch the first page of releases, newest first.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parse() {
        let repo: RepoId = "owner/repo".parse().unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
    }

    #[test]
    fn test_repo_id_display() {
        let repo = RepoId::new("SagerNet", "sing-box");
        assert_eq!(repo.to_string(), "SagerNet/sing-box");
    }

    #[test]
    fn test_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_display_name_prefers_name() {
        let release = Release {
            tag: "v1.0.0".into(),
            name: Some("First stable".into()),
            ..Default::default()
        };
        assert_eq!(release.display_name(), "First stable");
    }

    #[test]
    fn test_display_name_falls_back_to_tag() {
        let mut release = Release {
            tag: "v1.0.0".into(),
            ..Default::default()
        };
        assert_eq!(release.display_name(), "v1.0.0");

        release.name = Some(String::new());
        assert_eq!(release.display_name(), "v1.0.0");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(FetchError::InvalidFormat.to_string(), "invalid data format");
        assert!(
            FetchError::Request("connection refused".into())
                .to_string()
                .contains("connection refused")
        );
    }
}
