//! The search_courses tool.

use crate::error::Result;
use crate::services::{CourseCatalog, SearchQuery};
use crate::types::{truncate_chars, CourseRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum description length carried into a search summary.
const SUMMARY_DESCRIPTION_CHARS: usize = 150;

/// Input for the search_courses tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInput {
    /// Subject code to search (e.g. "LE/MECH" or "MECH")
    pub subject_code: Option<String>,
    /// Substring to match in course titles
    pub title: Option<String>,
    /// Substring to match in course descriptions
    pub description: Option<String>,
    /// Course status filter (e.g. "active", "inactive")
    pub status: Option<String>,
    /// Only courses that do (or do not) have prerequisites
    pub has_prerequisites: Option<bool>,
    /// Only courses that do (or do not) have learning outcomes
    pub has_outcomes: Option<bool>,
}

impl SearchInput {
    /// Converts tool input into a catalog filter specification.
    #[must_use]
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            subject_code: self.subject_code,
            title: self.title,
            description: self.description,
            status: self.status,
            has_prerequisites: self.has_prerequisites,
            has_outcomes: self.has_outcomes,
        }
    }
}

/// Output for the search_courses tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchOutput {
    /// Number of courses returned
    pub total_results: usize,
    /// Matching courses, summarized
    pub courses: Vec<CourseSummary>,
}

/// A summarized course in search output.
#[derive(Debug, Serialize, JsonSchema)]
pub struct CourseSummary {
    pub code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "creditHours")]
    pub credit_hours: Option<Value>,
    #[serde(rename = "subjectCode")]
    pub subject_code: Option<String>,
    /// Description, truncated to 150 characters
    pub description: String,
}

impl CourseSummary {
    fn from_record(course: &CourseRecord) -> Self {
        Self {
            code: course.code().map(str::to_owned),
            title: course.title().map(str::to_owned),
            credit_hours: course.get("creditHours").cloned(),
            subject_code: course.subject_code().map(str::to_owned),
            description: truncate_chars(
                course.description().unwrap_or_default(),
                SUMMARY_DESCRIPTION_CHARS,
            ),
        }
    }
}

/// Executes the search_courses tool.
///
/// # Errors
///
/// Infallible today (paging failures are swallowed by the catalog), but
/// kept fallible to match the other tool executors.
pub async fn execute_search(catalog: &CourseCatalog, input: SearchInput) -> Result<SearchOutput> {
    let courses = catalog.search(&input.into_query()).await;

    Ok(SearchOutput {
        total_results: courses.len(),
        courses: courses.iter().map(CourseSummary::from_record).collect(),
    })
}
