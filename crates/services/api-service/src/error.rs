pub type Result<T> = core::result::Result<T, Error>;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

#[derive(Debug, Clone)]
pub enum Error {
    InvalidName(String),
    NotFound(String),
    AlreadyExists(String),
    AuthenticationFails(String),
    UnableToExtractKey,
    Custom(String),
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

/// The sole place domain error kinds become HTTP status codes (spec §7).
/// 4xx responses carry `{"detail": "..."}`; 5xx responses carry a generic
/// message without the underlying cause.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Error::InvalidName(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid identifier: [{name}]."),
            ),
            Error::NotFound(detail) => (StatusCode::NOT_FOUND, detail.clone()),
            Error::AlreadyExists(detail) => (StatusCode::CONFLICT, detail.clone()),
            Error::AuthenticationFails(detail) => (StatusCode::UNAUTHORIZED, detail.clone()),
            Error::UnableToExtractKey => (
                StatusCode::UNAUTHORIZED,
                "Missing or malformed Authorization header.".to_string(),
            ),
            Error::Custom(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<lib_core::error::Error> for Error {
    fn from(err: lib_core::error::Error) -> Self {
        match err {
            lib_core::error::Error::InvalidName(name) => Error::InvalidName(name),
            lib_core::error::Error::PathEscape => Error::InvalidName("<path escape>".to_string()),
            lib_core::error::Error::NotFound(detail) => Error::NotFound(detail),
            lib_core::error::Error::AlreadyExists(detail) => Error::AlreadyExists(detail),
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<lib_storage::error::Error> for Error {
    fn from(err: lib_storage::error::Error) -> Self {
        match err {
            lib_storage::error::Error::InvalidName(name) => Error::InvalidName(name),
            lib_storage::error::Error::NotFound(detail) => Error::NotFound(detail),
            lib_storage::error::Error::AlreadyExists(detail) => Error::AlreadyExists(detail),
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<lib_classifier::error::Error> for Error {
    fn from(err: lib_classifier::error::Error) -> Self {
        match err {
            lib_classifier::error::Error::InvalidName(name) => Error::InvalidName(name),
            lib_classifier::error::Error::NotFound(detail) => Error::NotFound(detail),
            lib_classifier::error::Error::NotTrained(detail) => Error::NotFound(detail),
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<lib_scheduler::error::Error> for Error {
    fn from(err: lib_scheduler::error::Error) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<lib_auth::error::Error> for Error {
    fn from(err: lib_auth::error::Error) -> Self {
        match err {
            lib_auth::error::Error::MissingBearerPrefix => Error::UnableToExtractKey,
            lib_auth::error::Error::InvalidApiKey => {
                Error::AuthenticationFails("Invalid API key.".to_string())
            }
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<lib_utils::error::Error> for Error {
    fn from(err: lib_utils::error::Error) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Custom(err.to_string())
    }
}
// endregion: --- Error Boilerplate
