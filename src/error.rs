//! API Errors
//!
//! Every network call resolves to `ApiResult<T>`; controllers turn the error
//! into the text shown in the feedback banner.

use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unauthorized")]
    Unauthorized(Option<String>),
    #[error("not found")]
    NotFound,
    #[error("request failed with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// `{ "error": "..." }`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Classify a response. `None` means the status is a success.
    pub fn from_status(status: u16, body: &str) -> Option<Self> {
        if (200..300).contains(&status) {
            return None;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        Some(match status {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound,
            _ => ApiError::Rejected {
                status,
                message: message.unwrap_or_else(|| format!("Request failed with status {}.", status)),
            },
        })
    }

    /// Text for the error banner. Server-provided messages pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Is the server running?".to_string(),
            ApiError::Timeout(_) => "The server did not respond in time.".to_string(),
            ApiError::Unauthorized(Some(message)) => message.clone(),
            ApiError::Unauthorized(None) => "You are not logged in.".to_string(),
            ApiError::NotFound => "The requested item no longer exists.".to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::InvalidInput(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_are_not_errors() {
        assert_eq!(ApiError::from_status(200, ""), None);
        assert_eq!(ApiError::from_status(201, r#"{"error":"ignored"}"#), None);
        assert_eq!(ApiError::from_status(204, ""), None);
    }

    #[test]
    fn test_error_body_is_kept_verbatim() {
        let err = ApiError::from_status(409, r#"{"error": "Username already exists"}"#).unwrap();
        assert_eq!(
            err,
            ApiError::Rejected { status: 409, message: "Username already exists".to_string() }
        );
        assert_eq!(err.user_message(), "Username already exists");
    }

    #[test]
    fn test_status_fallback_without_body() {
        let err = ApiError::from_status(500, "<html>oops</html>").unwrap();
        assert_eq!(err.user_message(), "Request failed with status 500.");
    }

    #[test]
    fn test_auth_and_missing_statuses() {
        assert_eq!(ApiError::from_status(401, ""), Some(ApiError::Unauthorized(None)));
        assert_eq!(
            ApiError::from_status(403, r#"{"error":"Forbidden"}"#),
            Some(ApiError::Unauthorized(Some("Forbidden".to_string())))
        );
        assert_eq!(ApiError::from_status(404, ""), Some(ApiError::NotFound));
    }
}
