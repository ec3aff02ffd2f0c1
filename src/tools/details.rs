//! The get_course_details tool.

use crate::error::{Result, ServerError};
use crate::services::CourseCatalog;
use crate::types::CourseRecord;
use schemars::JsonSchema;
use serde::Deserialize;

/// Input for the get_course_details tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailsInput {
    /// Course code (e.g. "LE/MECH 2201", "MECH 2201")
    pub course_code: String,
}

/// Executes the get_course_details tool, returning the full raw record.
///
/// # Errors
///
/// `ServerError::NotFound` when no exact code match is among the top
/// hits; fetch failures propagate.
pub async fn execute_details(
    catalog: &CourseCatalog,
    input: DetailsInput,
) -> Result<CourseRecord> {
    catalog
        .get_by_code(&input.course_code)
        .await?
        .ok_or(ServerError::NotFound {
            code: input.course_code,
        })
}
