//! Course catalog: pagination, prefix fan-out, filtering, and lookup.
//!
//! The upstream index only supports free-text queries, so searching is a
//! scan: page through each relevant subject prefix, keep faculty courses,
//! then apply the caller's predicates client-side.

use crate::config::{Config, FACULTY_MARKER};
use crate::error::{FetchResult, Result};
use crate::services::client::{PageQuery, SearchClient};
use crate::types::CourseRecord;
use std::collections::HashSet;
use std::sync::Arc;

/// Status filter used when the caller does not specify one.
const DEFAULT_STATUS: &str = "active";

/// Page size for the bounded `get_by_code` lookup.
const LOOKUP_LIMIT: usize = 10;

/// A search filter specification. All fields are optional; omitted fields
/// do not constrain the result set.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Subject code, with or without the faculty marker (e.g. "LE/MECH").
    pub subject_code: Option<String>,
    /// Case-insensitive substring to match in titles.
    pub title: Option<String>,
    /// Case-insensitive substring to match in descriptions.
    pub description: Option<String>,
    /// Course status (defaults to "active").
    pub status: Option<String>,
    /// Require (or forbid) non-empty prerequisites.
    pub has_prerequisites: Option<bool>,
    /// Require (or forbid) non-empty learning outcomes.
    pub has_outcomes: Option<bool>,
}

/// Catalog of faculty courses backed by the upstream search endpoint.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    client: SearchClient,
    config: Arc<Config>,
}

impl CourseCatalog {
    /// Creates a catalog over the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = SearchClient::new(Arc::clone(&config))?;
        Ok(Self { client, config })
    }

    /// Selects the prefixes to scan for a given subject code filter.
    ///
    /// A recognized subject code narrows the scan to its own prefix;
    /// anything else falls back to the full fixed list.
    #[must_use]
    pub fn prefixes_for(&self, subject_code: Option<&str>) -> Vec<&'static str> {
        if let Some(code) = subject_code.filter(|c| !c.is_empty()) {
            let prefix = code
                .strip_prefix(FACULTY_MARKER)
                .unwrap_or(code)
                .to_lowercase();
            if let Some(known) = self
                .config
                .subject_prefixes
                .iter()
                .copied()
                .find(|p| *p == prefix)
            {
                return vec![known];
            }
        }
        self.config.subject_prefixes.to_vec()
    }

    /// Pages through all results for one prefix.
    ///
    /// Stops on an empty page, an exhausted fetch budget, or a fetch
    /// failure; failures are logged and treated as end-of-results. Each
    /// page is filtered to faculty courses before being appended.
    async fn fetch_prefix(&self, prefix: &str, status: &str) -> Vec<CourseRecord> {
        let mut courses = Vec::new();
        let mut skip = 0usize;

        loop {
            let batch_limit = self
                .config
                .page_limit
                .min(self.config.fetch_cap.saturating_sub(skip));
            if batch_limit == 0 {
                break;
            }

            let page = match self
                .client
                .fetch_page(PageQuery {
                    limit: batch_limit,
                    skip,
                    status,
                    q: prefix,
                })
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(prefix, error = %e, "page fetch failed, treating as end of results");
                    break;
                }
            };

            if page.is_empty() {
                break;
            }

            // skip advances by the raw page length, not the filtered count
            skip += page.len();
            courses.extend(page.into_iter().filter(|course| {
                course
                    .subject_code()
                    .is_some_and(|s| s.starts_with(FACULTY_MARKER))
            }));
        }

        courses
    }

    /// Searches the catalog with the given filter specification.
    ///
    /// Results are deduplicated by identity across prefixes (first
    /// occurrence wins) and capped at the configured result limit,
    /// preserving scan order. Fetch failures never surface here; a prefix
    /// that fails mid-scan simply contributes what was fetched so far.
    pub async fn search(&self, query: &SearchQuery) -> Vec<CourseRecord> {
        let status = query.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let mut seen: HashSet<String> = HashSet::new();
        let mut results = Vec::new();

        'prefixes: for prefix in self.prefixes_for(query.subject_code.as_deref()) {
            for course in self.fetch_prefix(prefix, status).await {
                // records without an identity cannot be deduplicated
                let Some(identity) = course.identity() else {
                    continue;
                };
                if seen.contains(&identity) || !matches_filters(&course, query) {
                    continue;
                }
                seen.insert(identity);
                results.push(course);
                if results.len() >= self.config.result_cap {
                    break 'prefixes;
                }
            }
        }

        results
    }

    /// Looks up a single course by exact code.
    ///
    /// Best effort: issues one bounded free-text search and scans the top
    /// hits for an exact `code` match. `Ok(None)` means not found.
    ///
    /// # Errors
    ///
    /// Unlike paging, fetch failures propagate to the caller here.
    pub async fn get_by_code(&self, code: &str) -> FetchResult<Option<CourseRecord>> {
        let page = self
            .client
            .fetch_page(PageQuery {
                limit: LOOKUP_LIMIT,
                skip: 0,
                status: DEFAULT_STATUS,
                q: code,
            })
            .await?;

        Ok(page.into_iter().find(|course| course.code() == Some(code)))
    }
}

/// Applies the predicate filters of a query to one record.
fn matches_filters(course: &CourseRecord, query: &SearchQuery) -> bool {
    if let Some(title) = &query.title {
        let course_title = course.title().unwrap_or_default().to_lowercase();
        if !course_title.contains(&title.to_lowercase()) {
            return false;
        }
    }

    if let Some(description) = &query.description {
        let course_desc = course.description().unwrap_or_default().to_lowercase();
        if !course_desc.contains(&description.to_lowercase()) {
            return false;
        }
    }

    if let Some(wanted) = query.has_prerequisites {
        if course.has_content("prerequisites") != wanted {
            return false;
        }
    }

    if let Some(wanted) = query.has_outcomes {
        if course.has_content("outcomes") != wanted {
            return false;
        }
    }

    true
}
