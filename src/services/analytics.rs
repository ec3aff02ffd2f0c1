//! Derived analytics over resolved course records.
//!
//! All functions here are pure; record resolution happens in the tool
//! layer so these can be tested without a live endpoint.

use crate::types::{truncate_chars, CourseRecord};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields expected on a fully-described course, in report order.
pub const COMPLETENESS_FIELDS: [&str; 7] = [
    "title",
    "description",
    "creditHours",
    "prerequisites",
    "outcomes",
    "subjectCode",
    "courseNumber",
];

/// Maximum description length carried into a comparison projection.
const COMPARE_DESCRIPTION_CHARS: usize = 200;

/// Per-course field-completeness report.
#[derive(Debug, Serialize, JsonSchema)]
pub struct CompletenessReport {
    /// Code of the analyzed course.
    pub course_code: String,
    /// Completed fields as a percentage, rounded to one decimal.
    pub completeness_percentage: f64,
    /// Number of complete fields.
    pub completed_fields: usize,
    /// Number of fields checked.
    pub total_fields: usize,
    /// Per-field completeness flags.
    pub field_completeness: BTreeMap<String, bool>,
    /// Incomplete fields, in the fixed field order.
    pub missing_fields: Vec<String>,
}

/// Side-by-side projection of two courses.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ComparisonReport {
    pub course1: CourseProfile,
    pub course2: CourseProfile,
}

/// Truncated projection of one course for comparison.
#[derive(Debug, Serialize, JsonSchema)]
pub struct CourseProfile {
    pub code: Option<String>,
    pub title: Option<String>,
    /// Passed through untyped; the upstream sends numbers and strings.
    #[serde(rename = "creditHours")]
    pub credit_hours: Option<Value>,
    /// Description, truncated to 200 characters plus an ellipsis marker.
    pub description: String,
    pub outcomes_count: usize,
}

/// Aggregate statistics over a set of course records.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Statistics {
    pub total_courses: usize,
    pub courses_with_outcomes: usize,
    pub courses_with_prerequisites: usize,
    /// Record count per subject code.
    pub subject_code_breakdown: BTreeMap<String, usize>,
}

/// Whether a field value counts as complete.
///
/// Complete means: non-empty trimmed string, non-empty array or object, or
/// any number (zero included).
#[must_use]
pub fn value_is_complete(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) => true,
        Value::Bool(b) => *b,
        Value::Null => false,
    }
}

/// Scores a course against the fixed expected-field list.
#[must_use]
pub fn completeness(course: &CourseRecord, course_code: &str) -> CompletenessReport {
    let total_fields = COMPLETENESS_FIELDS.len();
    let mut field_completeness = BTreeMap::new();
    let mut missing_fields = Vec::new();
    let mut completed_fields = 0;

    for field in COMPLETENESS_FIELDS {
        let complete = course.get(field).is_some_and(value_is_complete);
        field_completeness.insert(field.to_string(), complete);
        if complete {
            completed_fields += 1;
        } else {
            missing_fields.push(field.to_string());
        }
    }

    let percentage = (completed_fields as f64 / total_fields as f64) * 100.0;

    CompletenessReport {
        course_code: course_code.to_string(),
        completeness_percentage: (percentage * 10.0).round() / 10.0,
        completed_fields,
        total_fields,
        field_completeness,
        missing_fields,
    }
}

/// Builds the truncated comparison projection of one course.
#[must_use]
pub fn profile(course: &CourseRecord) -> CourseProfile {
    CourseProfile {
        code: course.code().map(str::to_owned),
        title: course.title().map(str::to_owned),
        credit_hours: course.get("creditHours").cloned(),
        description: truncate_chars(
            course.description().unwrap_or_default(),
            COMPARE_DESCRIPTION_CHARS,
        ),
        outcomes_count: course.outcomes_count(),
    }
}

/// Compares two resolved courses side by side.
#[must_use]
pub fn compare(course1: &CourseRecord, course2: &CourseRecord) -> ComparisonReport {
    ComparisonReport {
        course1: profile(course1),
        course2: profile(course2),
    }
}

/// Tallies aggregate statistics over a result set.
#[must_use]
pub fn statistics(courses: &[CourseRecord]) -> Statistics {
    let mut subject_code_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut courses_with_outcomes = 0;
    let mut courses_with_prerequisites = 0;

    for course in courses {
        let subject = course.subject_code().unwrap_or("Unknown").to_string();
        *subject_code_breakdown.entry(subject).or_insert(0) += 1;

        if course.has_content("outcomes") {
            courses_with_outcomes += 1;
        }
        if course.has_content("prerequisites") {
            courses_with_prerequisites += 1;
        }
    }

    Statistics {
        total_courses: courses.len(),
        courses_with_outcomes,
        courses_with_prerequisites,
        subject_code_breakdown,
    }
}
