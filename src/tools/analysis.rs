//! Analysis tools: completeness scoring, comparison, and statistics.

use crate::error::{Result, ServerError};
use crate::services::analytics::{self, ComparisonReport, CompletenessReport, Statistics};
use crate::services::{CourseCatalog, SearchQuery};
use crate::types::CourseRecord;
use schemars::JsonSchema;
use serde::Deserialize;

/// Input for the analyze_course_completeness tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessInput {
    /// Course code to analyze
    pub course_code: String,
}

/// Input for the compare_courses tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareInput {
    /// First course code
    pub course_code1: String,
    /// Second course code
    pub course_code2: String,
}

/// Input for the get_statistics tool (no parameters).
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct StatsInput {}

/// Resolves a course code or fails with a descriptive not-found error.
async fn resolve(catalog: &CourseCatalog, code: &str) -> Result<CourseRecord> {
    catalog
        .get_by_code(code)
        .await?
        .ok_or_else(|| ServerError::NotFound {
            code: code.to_string(),
        })
}

/// Executes the analyze_course_completeness tool.
///
/// # Errors
///
/// `ServerError::NotFound` when the course cannot be resolved; fetch
/// failures propagate.
pub async fn execute_completeness(
    catalog: &CourseCatalog,
    input: CompletenessInput,
) -> Result<CompletenessReport> {
    let course = resolve(catalog, &input.course_code).await?;
    Ok(analytics::completeness(&course, &input.course_code))
}

/// Executes the compare_courses tool.
///
/// Resolution of either code may fail independently; the first failure
/// short-circuits with a descriptive error naming that code.
///
/// # Errors
///
/// `ServerError::NotFound` for the first unresolvable code; fetch
/// failures propagate.
pub async fn execute_compare(
    catalog: &CourseCatalog,
    input: CompareInput,
) -> Result<ComparisonReport> {
    let course1 = resolve(catalog, &input.course_code1).await?;
    let course2 = resolve(catalog, &input.course_code2).await?;
    Ok(analytics::compare(&course1, &course2))
}

/// Executes the get_statistics tool over an unfiltered search.
///
/// # Errors
///
/// Infallible today, kept fallible to match the other tool executors.
pub async fn execute_stats(catalog: &CourseCatalog, _input: StatsInput) -> Result<Statistics> {
    let courses = catalog.search(&SearchQuery::default()).await;
    Ok(analytics::statistics(&courses))
}
