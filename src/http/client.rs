//! HTTP client that identifies itself to the release API.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde_json::Value;

use super::classify::{classify_error, classify_status};
use crate::config::{ACCEPT_MEDIA_TYPE, USER_AGENT};
use crate::source::FetchError;

/// Thin wrapper over a shared reqwest Client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and returns the body as untyped JSON.
    ///
    /// The shape of the payload is left to the caller; only transport,
    /// status and "is it JSON at all" are checked here.
    #[tracing::instrument(skip(self))]
    pub async fn get_json_value(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        classify_status(response.status())?;

        response
            .json::<Value>()
            .await
            .map_err(|e| classify_error(&e))
    }
}

/// Build an HTTP client carrying the fixed identifying headers.
pub fn build_http_client(timeout: Duration) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    debug!("HTTP client configured with {:?} timeout", timeout);
    Ok(HttpClient::new(client))
}
