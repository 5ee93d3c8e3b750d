//! JIRA issue data model.
//!
//! Only the shapes needed to read already-fetched issues are modeled here.
//! Fetching them is left to whatever client produced the JSON.

pub mod types;

pub use types::{Comment, Issue, IssueFields, SearchResult, User, Version};
