//! Error types for curricula.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation.

use thiserror::Error;

/// Top-level server error.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Course {code} not found")]
    NotFound { code: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool error: {0}")]
    Tool(String),
}

/// Upstream fetch errors.
///
/// A non-2xx response is distinguished from transport failure so callers
/// can surface the upstream body.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for upstream fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Error code implementations for machine-readable error responses
impl ServerError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Json(_) => "JSON_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Tool(_) => "TOOL_ERROR",
        }
    }
}

impl FetchError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::Status { .. } => "UPSTREAM_STATUS",
        }
    }
}

// Conversion to rmcp tool errors
impl From<ServerError> for rmcp::Error {
    fn from(err: ServerError) -> Self {
        rmcp::Error::internal_error(err.to_string(), None)
    }
}
