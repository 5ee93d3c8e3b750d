//! Line-oriented issue reports.
//!
//! A report has one row per issue and, optionally, one row per comment.
//! Every cell is passed through [`array_line_safe`] so a row never spans more
//! than one line, whatever the issue text contains.

use tracing::{debug, warn};

use crate::api::types::{Issue, SearchResult};
use crate::config::Settings;
use crate::custom_fields::{get_release_blocker, issue_target_versions};
use crate::error::Result;
use crate::normalize::{
    array_line_safe, array_line_safe_string, comment_author, line_safe, priority_field_name,
    resolution_field_name, status_field_name, user_field_display_name,
};
use crate::redact::filter_issue_comments;

/// Column titles of an issue row.
pub const COLUMNS: [&str; 11] = [
    "KEY",
    "STATUS",
    "PRIORITY",
    "RESOLUTION",
    "ASSIGNEE",
    "REPORTER",
    "RELEASE BLOCKER",
    "TARGET VERSIONS",
    "FIX VERSIONS",
    "LABELS",
    "SUMMARY",
];

/// Marker placed in the second column of comment rows.
const COMMENT_MARKER: &str = "comment";

/// Parse issue JSON.
///
/// Accepts a search result (`{"issues": [...]}`), a bare array of issues, or a
/// single issue object.
pub fn parse_issues(input: &str) -> Result<Vec<Issue>> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let issues = if value.is_array() {
        serde_json::from_value::<Vec<Issue>>(value)?
    } else if value.get("issues").is_some() {
        serde_json::from_value::<SearchResult>(value)?.issues
    } else {
        vec![serde_json::from_value::<Issue>(value)?]
    };

    debug!(count = issues.len(), "Parsed issues");
    Ok(issues)
}

/// Renders issues as separator-delimited rows.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    settings: &'a Settings,
}

impl<'a> Report<'a> {
    /// Create a report using the given settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// The header row.
    pub fn header(&self) -> String {
        COLUMNS.join(self.settings.separator.as_str())
    }

    /// Render all issues.
    ///
    /// Restricted comments are redacted on the issues themselves before
    /// anything is rendered.
    pub fn render(&self, issues: &mut [Issue]) -> Vec<String> {
        filter_issue_comments(issues);

        let mut rows = Vec::with_capacity(issues.len());
        for issue in issues.iter() {
            rows.push(self.issue_row(issue));
            if self.settings.show_comments {
                rows.extend(self.comment_rows(issue));
            }
        }
        rows
    }

    /// Render the row for a single issue.
    pub fn issue_row(&self, issue: &Issue) -> String {
        let delimiter = &self.settings.delimiter;
        let Some(fields) = issue.fields.as_ref() else {
            let mut cells = vec![issue.key.clone()];
            cells.resize(COLUMNS.len(), String::new());
            return self.row(cells);
        };

        let fix_versions: Vec<&str> = fields.fix_versions.iter().map(|v| v.name.as_str()).collect();

        self.row(vec![
            issue.key.clone(),
            status_field_name(fields.status.as_ref()),
            priority_field_name(fields.priority.as_ref()),
            resolution_field_name(fields.resolution.as_ref()),
            user_field_display_name(fields.assignee.as_ref()),
            user_field_display_name(fields.reporter.as_ref()),
            release_blocker_cell(issue),
            target_versions_cell(issue, delimiter),
            array_line_safe_string(&fix_versions, delimiter),
            array_line_safe_string(&fields.labels, delimiter),
            line_safe(&fields.summary),
        ])
    }

    /// Render one row per comment of an issue.
    pub fn comment_rows(&self, issue: &Issue) -> Vec<String> {
        issue
            .comments()
            .iter()
            .map(|comment| {
                self.row(vec![
                    issue.key.clone(),
                    COMMENT_MARKER.to_string(),
                    comment.id.clone(),
                    comment.created.clone(),
                    comment_author(&comment.author.display_name),
                    comment.body.clone(),
                ])
            })
            .collect()
    }

    fn row(&self, cells: Vec<String>) -> String {
        array_line_safe(&cells)
            .into_iter()
            .map(|cell| {
                if cell.is_empty() {
                    self.settings.empty_placeholder.clone()
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(self.settings.separator.as_str())
    }
}

fn release_blocker_cell(issue: &Issue) -> String {
    match get_release_blocker(issue) {
        Ok(Some(field)) => field.value,
        Ok(None) => String::new(),
        Err(e) => {
            warn!(issue = %issue.key, field = e.field(), error = %e, "Skipping release blocker");
            String::new()
        }
    }
}

fn target_versions_cell(issue: &Issue, delimiter: &str) -> String {
    match issue_target_versions(issue) {
        Ok(Some(versions)) => {
            let names: Vec<&str> = versions.iter().map(|v| v.name.as_str()).collect();
            array_line_safe_string(&names, delimiter)
        }
        Ok(None) => String::new(),
        Err(e) => {
            warn!(issue = %issue.key, field = e.field(), error = %e, "Skipping target versions");
            String::new()
        }
    }
}
