//! Inbound HTTP: one dashboard route, everything else is a 404.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use chrono::Utc;
use log::{debug, error, info};

use crate::aggregate::fetch_all;
use crate::config::{RepositoryConfig, ServerConfig};
use crate::http::build_http_client;
use crate::render::{CONTENT_TYPE, render};
use crate::source::{GitHubSource, ReleaseSource};

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub const NOT_FOUND_MESSAGE: &str = "صفحه مورد نظر یافت نشد!";

pub const INTERNAL_ERROR_PREFIX: &str = "خطا در پردازش درخواست: ";

/// Shared, read-only state for every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReleaseSource>,
    pub repositories: Arc<Vec<RepositoryConfig>>,
}

impl AppState {
    pub fn new(source: Arc<dyn ReleaseSource>, repositories: Vec<RepositoryConfig>) -> Self {
        Self {
            source,
            repositories: Arc::new(repositories),
        }
    }

    /// Wire the GitHub source from server settings.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let http_client = build_http_client(config.timeout)?;
        let source = GitHubSource::with_api_url(http_client, &config.api_url);
        Ok(Self::new(Arc::new(source), config.repositories.clone()))
    }
}

/// Any failure outside the per-repository capture.
#[derive(Debug)]
pub struct DashboardError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for DashboardError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        error!("Dashboard request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            format!("{}{}", INTERNAL_ERROR_PREFIX, self.0),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(dashboard))
        .fallback(not_found)
        .with_state(state)
}

async fn dashboard(State(state): State<AppState>) -> Result<Response, DashboardError> {
    let started = Instant::now();

    let records = fetch_all(Arc::clone(&state.source), &state.repositories).await?;
    let count = records.len();
    let body = render(records, Utc::now());

    debug!("Rendered {} records in {:?}", count, started.elapsed());

    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response())
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        NOT_FOUND_MESSAGE,
    )
        .into_response()
}

/// Bind and serve until Ctrl-C.
#[tracing::instrument(skip(config))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!(
        "Serving {} repositories on http://{}",
        config.repositories.len(),
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
