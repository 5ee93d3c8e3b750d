//! JIRA issue data types.
//!
//! These types model the read-only subset of JIRA REST API v2 issue payloads
//! that the formatting helpers consume. Keys the model does not name are kept
//! in [`IssueFields::unknowns`] so custom fields can be decoded on demand.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize a value that JIRA may send as `null`, using the type's default
/// in that case.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Search result from a JQL query, or any dump of issues in the same envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// Total number of matching issues.
    #[serde(default)]
    pub total: u32,
    /// The list of issues.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

/// A JIRA issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// The issue key (e.g., "PROJ-123").
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// URL of the issue resource.
    #[serde(rename = "self", default, deserialize_with = "null_as_default")]
    pub self_url: String,
    /// The issue fields. Absent when the issue was fetched without fields.
    #[serde(default)]
    pub fields: Option<IssueFields>,
}

impl Issue {
    /// Get the comments of this issue, or an empty slice if none were fetched.
    pub fn comments(&self) -> &[Comment] {
        self.fields
            .as_ref()
            .and_then(|f| f.comment.as_ref())
            .map(|c| c.comments.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fields {
            Some(fields) => write!(f, "{}: {}", self.key, fields.summary),
            None => write!(f, "{}", self.key),
        }
    }
}

/// Issue fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    /// The issue summary/title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// The comment container.
    #[serde(default)]
    pub comment: Option<Comments>,
    /// The issue resolution, unset while the issue is open.
    #[serde(default)]
    pub resolution: Option<Resolution>,
    /// The issue status.
    #[serde(default)]
    pub status: Option<Status>,
    /// The issue priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// The issue assignee.
    #[serde(default)]
    pub assignee: Option<User>,
    /// The issue reporter.
    #[serde(default)]
    pub reporter: Option<User>,
    /// Labels attached to the issue.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    /// Versions the issue is fixed in.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fix_versions: Vec<Version>,
    /// When the issue was created.
    #[serde(default)]
    pub created: Option<String>,
    /// When the issue was last updated.
    #[serde(default)]
    pub updated: Option<String>,
    /// Every field not modeled above, keyed by field ID (e.g. "customfield_12319743").
    #[serde(flatten)]
    pub unknowns: serde_json::Map<String, serde_json::Value>,
}

/// The comment container of an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comments {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

/// A comment on a JIRA issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The comment ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// The comment body (wiki markup or plain text).
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    /// The user who authored the comment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: User,
    /// When the comment was created.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,
    /// When the comment was last updated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated: String,
    /// Restriction on who may see the comment.
    #[serde(default)]
    pub visibility: Option<CommentVisibility>,
}

impl Comment {
    /// Check if the comment is restricted to a group or role.
    ///
    /// A missing visibility or one with an empty value is public.
    pub fn is_restricted(&self) -> bool {
        self.visibility
            .as_ref()
            .is_some_and(|v| !v.value.is_empty())
    }
}

/// Comment visibility restriction (e.g. `{"type": "role", "value": "Developers"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentVisibility {
    /// Restriction kind, "group" or "role".
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// The group or role name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// A JIRA user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user name (JIRA Server).
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// The user key (JIRA Server).
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// The account ID (JIRA Cloud).
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_id: String,
    /// The user's display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

impl User {
    /// Create a user with only a display name.
    pub fn with_display_name(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Issue resolution (e.g. "Done", "Won't Fix").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Issue status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The status ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// The status name (e.g., "To Do", "In Progress", "Done").
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Issue priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    /// The priority ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// The priority name (e.g., "Blocker", "Major", "Minor").
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A project version, as referenced by fix-version and target-version fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(rename = "self", default, deserialize_with = "null_as_default")]
    pub self_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub released: Option<bool>,
    #[serde(default)]
    pub release_date: Option<String>,
}
