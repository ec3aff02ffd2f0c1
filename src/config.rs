//! Process-wide configuration for the curriculum server.
//!
//! Built once at startup and passed explicitly to every component; nothing
//! reads ambient globals after construction.

use crate::error::{Result, ServerError};

/// Default Kuali curriculum-management search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://york-sbx.kuali.co/api/v0/cm/search";

/// Dataset index identifier sent with every search request.
pub const SEARCH_INDEX: &str = "courses_latest";

/// Subject prefixes known to carry Lassonde engineering courses.
/// Searches without a recognized subject code fan out over all of these.
pub const SUBJECT_PREFIXES: &[&str] = &["mech", "eng", "esse", "eecs", "tron", "civl"];

/// Faculty marker every returned record must carry in `subjectCode`.
pub const FACULTY_MARKER: &str = "LE/";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "KUALI_TOKEN";

/// Environment variable overriding the base URL (mainly for sandboxes).
pub const BASE_URL_ENV: &str = "KUALI_BASE_URL";

/// Immutable configuration shared by all services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint URL.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Dataset index identifier.
    pub index: String,
    /// Subject prefixes to fan out over.
    pub subject_prefixes: &'static [&'static str],
    /// Records requested per page.
    pub page_limit: usize,
    /// Cumulative fetch budget per prefix.
    pub fetch_cap: usize,
    /// Maximum records a search returns to the caller.
    pub result_cap: usize,
}

impl Config {
    /// Creates a configuration with default constants.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            index: SEARCH_INDEX.to_string(),
            subject_prefixes: SUBJECT_PREFIXES,
            page_limit: 1000,
            fetch_cap: 10_000,
            result_cap: 100,
        }
    }

    /// Builds configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if `KUALI_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ServerError::Config(format!("{TOKEN_ENV} environment variable is not set"))
            })?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, token))
    }
}
