//! Core services: upstream paging, catalog search, and analytics.

pub mod analytics;
mod catalog;
mod client;

pub use catalog::{CourseCatalog, SearchQuery};
pub use client::{PageQuery, SearchClient};
