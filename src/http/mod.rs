//! HTTP client module with upstream error classification.

mod classify;
mod client;

pub use classify::{classify_error, classify_status};
pub use client::{HttpClient, build_http_client};
