//! Semi-structured course records.
//!
//! The upstream search index does not guarantee field presence or types, so
//! records are kept as raw JSON objects behind typed accessors instead of a
//! strict schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A course record as returned by the upstream search endpoint.
///
/// Fields may be absent, and the same field may hold different shapes
/// across records (e.g. `creditHours` as a number or a string).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CourseRecord(pub Map<String, Value>);

impl CourseRecord {
    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns a field as a string slice, if present and a string.
    #[must_use]
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.str_field("code")
    }

    #[must_use]
    pub fn subject_code(&self) -> Option<&str> {
        self.str_field("subjectCode")
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Returns the record's identity: `id` when present, else `code`.
    ///
    /// Numeric ids are stringified; the upstream sends both shapes.
    #[must_use]
    pub fn identity(&self) -> Option<String> {
        match self.get("id") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => self.code().map(str::to_owned),
        }
    }

    /// Whether a field holds a non-empty sequence or mapping.
    ///
    /// Used for the `hasPrerequisites` / `hasOutcomes` predicates, which
    /// test presence of content rather than mere presence of the key.
    #[must_use]
    pub fn has_content(&self, field: &str) -> bool {
        match self.get(field) {
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(_)) => true,
            Some(Value::Bool(b)) => *b,
            Some(Value::Null) | None => false,
        }
    }

    /// Number of learning outcomes attached to this record.
    #[must_use]
    pub fn outcomes_count(&self) -> usize {
        self.get("outcomes")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Truncates a string to `max` characters, appending `...` when shortened.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    }
}
