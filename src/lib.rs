//! curricula: MCP server for Kuali curriculum course data.
//!
//! Exposes a curriculum-management search API as five MCP tools, with
//! client-side filtering, completeness scoring, and comparison analytics
//! over the returned course records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Dispatch                  │
//! │  search_courses, get_course_details,        │
//! │  analyze_course_completeness, ...           │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │             Course Catalog                   │
//! │   prefix fan-out · paging · filtering ·     │
//! │   dedup · analytics                          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │        Kuali search endpoint (HTTP)         │
//! │   GET ?limit&skip&status&index&q (bearer)   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod services;
pub mod tools;
pub mod types;

pub use config::Config;
pub use error::{FetchError, Result, ServerError};
pub use types::CourseRecord;
