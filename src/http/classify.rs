//! Maps transport outcomes onto [`FetchError`].

use reqwest::StatusCode;

use crate::source::FetchError;

/// Classifies a reqwest error raised while sending or reading a request.
pub fn classify_error(error: &reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status(status.as_u16());
    }

    if error.is_decode() {
        return FetchError::Decode(error.to_string());
    }

    if error.is_timeout() {
        return FetchError::Request("request timed out".to_string());
    }

    FetchError::Request(error.to_string())
}

/// Anything outside 2xx is a failure, redirects included.
pub fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}
