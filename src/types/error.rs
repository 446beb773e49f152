//! Error types for Trailhead
//!
//! Faults only. Recoverable input mistakes (over-commit, bad gear names)
//! travel as `FieldError` lists inside a response, never through here.

use hyper::StatusCode;
use std::fmt;

use crate::store::StoreError;

/// The aggregate member a lookup failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Campsite,
    GearCategory,
    Gear,
    Commitment,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Campsite => "Could not find related campsite",
            Self::GearCategory => "Could not find related gear category",
            Self::Gear => "Could not find related gear",
            Self::Commitment => "Could not locate volunteer to remove",
        };
        f.write_str(message)
    }
}

/// Main error type for Trailhead operations
#[derive(Debug, thiserror::Error)]
pub enum TrailheadError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(Resource),

    #[error("Cannot volunteer twice")]
    AlreadyCommitted,

    #[error("Concurrent update conflict: {0}")]
    Conflict(String),

    #[error("Store timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Persistence(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),
}

impl TrailheadError {
    /// Convert error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyCommitted => StatusCode::CONFLICT,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<std::io::Error> for TrailheadError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for TrailheadError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<hyper::Error> for TrailheadError {
    fn from(err: hyper::Error) -> Self {
        Self::Internal(format!("HTTP error: {}", err))
    }
}

impl From<mongodb::error::Error> for TrailheadError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for TrailheadError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Unauthorized(format!("JWT error: {}", err))
    }
}

impl From<StoreError> for TrailheadError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { .. } => Self::Conflict(err.to_string()),
            StoreError::Missing(_) => Self::NotFound(Resource::Campsite),
            StoreError::Backend(message) => Self::Database(message),
        }
    }
}

/// Result type alias for Trailhead operations
pub type Result<T> = std::result::Result<T, TrailheadError>;
