use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Startup and server lifecycle failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build LLM client: {0}")]
    Client(#[source] anyhow::Error),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Client-caused rejections. Never retried; the message is returned verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unrecognized mood: {0:?}")]
    UnrecognizedMood(String),

    #[error("At least one genre must be selected")]
    EmptyGenreSet,

    #[error("Unrecognized language: {0:?}")]
    UnrecognizedLanguage(String),

    #[error("Unrecognized platform: {0:?}")]
    UnrecognizedPlatform(String),
}

impl ValidationError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::UnrecognizedMood(_) => "unrecognized_mood",
            ValidationError::EmptyGenreSet => "empty_genre_set",
            ValidationError::UnrecognizedLanguage(_) => "unrecognized_language",
            ValidationError::UnrecognizedPlatform(_) => "unrecognized_platform",
        }
    }
}

/// Failures caused by the text-generation collaborator or its environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Recommendation request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Recommendation service unavailable after {attempts} attempt(s): {message}")]
    Unavailable { attempts: u32, message: String },

    #[error("Recommendation service returned an empty response")]
    EmptyResponse,
}

impl ServiceError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Timeout(_) => "timeout",
            ServiceError::Unavailable { .. } => "unavailable",
            ServiceError::EmptyResponse => "empty_response",
        }
    }
}

/// Everything a single recommendation request can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl RecommendError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RecommendError::Validation(e) => e.kind(),
            RecommendError::Service(e) => e.kind(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecommendError::Validation(_) => StatusCode::BAD_REQUEST,
            RecommendError::Service(ServiceError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            RecommendError::Service(ServiceError::Unavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            RecommendError::Service(ServiceError::EmptyResponse) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
    kind: &'static str,
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.to_string(),
            kind: self.kind(),
        });
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = RecommendError::from(ValidationError::EmptyGenreSet);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "empty_genre_set");
        assert_eq!(err.to_string(), "At least one genre must be selected");
    }

    #[test]
    fn test_service_errors_map_to_gateway_statuses() {
        let timeout = RecommendError::from(ServiceError::Timeout(Duration::from_secs(1)));
        assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);

        let unavailable = RecommendError::from(ServiceError::Unavailable {
            attempts: 3,
            message: "connection reset".into(),
        });
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(unavailable.to_string().contains("3 attempt(s)"));

        let empty = RecommendError::from(ServiceError::EmptyResponse);
        assert_eq!(empty.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(empty.kind(), "empty_response");
    }

    #[test]
    fn test_unrecognized_value_is_quoted_in_message() {
        let err = ValidationError::UnrecognizedPlatform("VHS".into());
        assert_eq!(err.to_string(), "Unrecognized platform: \"VHS\"");
    }
}
