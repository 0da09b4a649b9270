//! Static dashboard configuration and server settings.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::source::{DEFAULT_API_URL, RepoId};

/// Sent as `User-Agent` on every upstream request.
pub const USER_AGENT: &str = "Cloudflare-Worker-Release-Checker";

/// Sent as `Accept` on every upstream request.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

pub const DEFAULT_BIND: &str = "0.0.0.0:8787";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Repositories shown on the dashboard, as `(owner/name, description)`.
const REPOSITORIES: &[(&str, &str)] = &[
    ("2dust/v2rayNG", "کلاینت V2Ray برای اندروید"),
    ("SagerNet/sing-box", "جعبه اتصال چندپروتکلی"),
    ("j-hc/revanced-magisk-module", "ماژول Magisk برای ReVanced"),
    ("KaringX/clashmi", "مدیریت Clash برای MIUI"),
    ("gonzazoid/Ultimatum", "پروژه Ultimatum"),
    ("amnezia-vpn/amnezia-client", "کلاینت Amnezia VPN"),
];

/// One tracked repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryConfig {
    pub id: RepoId,
    pub description: String,
}

impl RepositoryConfig {
    pub fn new(identifier: &str, description: &str) -> Result<Self> {
        Ok(Self {
            id: identifier
                .parse()
                .with_context(|| format!("Invalid repository identifier: {}", identifier))?,
            description: description.to_string(),
        })
    }
}

/// The built-in repository list.
pub fn repositories() -> Result<Vec<RepositoryConfig>> {
    REPOSITORIES
        .iter()
        .map(|(identifier, description)| RepositoryConfig::new(identifier, description))
        .collect()
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub api_url: String,
    pub timeout: Duration,
    pub repositories: Vec<RepositoryConfig>,
}

impl ServerConfig {
    pub fn new(bind: SocketAddr, api_url: Option<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            bind,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            repositories: repositories()?,
        })
    }
}
