//! MCP tool implementations.

mod analysis;
mod details;
mod search;

// analysis
pub use analysis::{
    execute_compare, execute_completeness, execute_stats, CompareInput, CompletenessInput,
    StatsInput,
};

// details
pub use details::{execute_details, DetailsInput};

// search
pub use search::{execute_search, CourseSummary, SearchInput, SearchOutput};
