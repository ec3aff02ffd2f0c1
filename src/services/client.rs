//! HTTP client for the upstream curriculum search endpoint.

use crate::config::Config;
use crate::error::{FetchError, FetchResult, Result, ServerError};
use crate::types::CourseRecord;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::sync::Arc;
use std::time::Duration;

/// Request timeout for a single page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for one page of search results.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery<'a> {
    /// Maximum records to return.
    pub limit: usize,
    /// Records to skip (pagination offset).
    pub skip: usize,
    /// Course status filter (e.g. "active").
    pub status: &'a str,
    /// Free-text / prefix query.
    pub q: &'a str,
}

/// Thin client issuing one GET per page against the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl SearchClient {
    /// Creates a client with the bearer token baked into default headers.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if the token is not a valid header
    /// value, or a fetch error if the HTTP client cannot be built.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ServerError::Config("token is not a valid header value".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(FetchError::from)?;

        Ok(Self { http, config })
    }

    /// Fetches one page of course records.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` on transport failure and
    /// `FetchError::Status` on a non-2xx response.
    pub async fn fetch_page(&self, query: PageQuery<'_>) -> FetchResult<Vec<CourseRecord>> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("limit", query.limit.to_string()),
                ("skip", query.skip.to_string()),
                ("status", query.status.to_string()),
                ("index", self.config.index.clone()),
                ("q", query.q.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
