//! API endpoint modules.

mod search;
mod tools;

pub use search::{SearchApi, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_RESULTS};
pub use tools::ToolsApi;
