//! Line-safe text normalization and nil-safe field extraction.
//!
//! Everything here returns a fresh `String` that can be placed on a single
//! line of tabular or line-oriented output.

use crate::api::types::{Priority, Resolution, Status, User};

/// Author name rendered for comments without one.
pub const ANONYMOUS_AUTHOR: &str = "ANONYMOUS";

/// Replace every newline with a single space and trim the ends.
///
/// Runs of internal whitespace are kept as-is.
///
/// ```
/// use jirafmt::normalize::line_safe;
///
/// assert_eq!(line_safe("a\nb\n c "), "a b  c");
/// ```
pub fn line_safe(s: &str) -> String {
    s.replace('\n', " ").trim().to_string()
}

/// Normalize each entry with [`line_safe`] and join them with `delim`.
pub fn array_line_safe_string<S: AsRef<str>>(arr: &[S], delim: &str) -> String {
    array_line_safe(arr).join(delim)
}

/// Normalize each entry with [`line_safe`], keeping order and length.
pub fn array_line_safe<S: AsRef<str>>(arr: &[S]) -> Vec<String> {
    arr.iter().map(|s| line_safe(s.as_ref())).collect()
}

/// Line-safe resolution name, or `""` when the issue is unresolved.
pub fn resolution_field_name(resolution: Option<&Resolution>) -> String {
    resolution.map(|r| line_safe(&r.name)).unwrap_or_default()
}

/// Line-safe status name, or `""` when absent.
pub fn status_field_name(status: Option<&Status>) -> String {
    status.map(|s| line_safe(&s.name)).unwrap_or_default()
}

/// Line-safe priority name, or `""` when absent.
pub fn priority_field_name(priority: Option<&Priority>) -> String {
    priority.map(|p| line_safe(&p.name)).unwrap_or_default()
}

/// Line-safe user display name, or `""` when absent.
pub fn user_field_display_name(user: Option<&User>) -> String {
    user.map(|u| line_safe(&u.display_name)).unwrap_or_default()
}

/// Resolve the name to show for a comment author.
///
/// Only an empty name becomes [`ANONYMOUS_AUTHOR`]. Other names are trimmed
/// but newlines are left in place.
pub fn comment_author(author_display_name: &str) -> String {
    if author_display_name.is_empty() {
        return ANONYMOUS_AUTHOR.to_string();
    }
    author_display_name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_safe_replaces_newlines_and_trims() {
        assert_eq!(line_safe("a\nb\n c "), "a b  c");
        assert_eq!(line_safe("\nleading"), "leading");
        assert_eq!(line_safe("  plain  "), "plain");
        assert_eq!(line_safe(""), "");
    }

    #[test]
    fn test_line_safe_keeps_internal_spacing() {
        assert_eq!(line_safe("one\n\ntwo"), "one  two");
        assert_eq!(line_safe("tab\there"), "tab\there");
    }

    #[test]
    fn test_line_safe_trims_carriage_return_at_ends() {
        assert_eq!(line_safe("windows\r\n"), "windows");
    }

    #[test]
    fn test_array_line_safe_string() {
        assert_eq!(array_line_safe_string(&["a\nb", "c"], ", "), "a b, c");
        assert_eq!(array_line_safe_string::<&str>(&[], ", "), "");
        assert_eq!(
            array_line_safe_string(&vec![" x ".to_string(), "y\n".to_string()], "|"),
            "x|y"
        );
    }

    #[test]
    fn test_array_line_safe_preserves_order_and_length() {
        let input = ["\nfirst", "second\nline", "", " third "];
        let output = array_line_safe(&input);
        assert_eq!(output, vec!["first", "second line", "", "third"]);
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn test_field_extractors_absent() {
        assert_eq!(resolution_field_name(None), "");
        assert_eq!(status_field_name(None), "");
        assert_eq!(priority_field_name(None), "");
        assert_eq!(user_field_display_name(None), "");
    }

    #[test]
    fn test_field_extractors_normalize_names() {
        let resolution = Resolution {
            id: "1".to_string(),
            name: "Won't\nFix ".to_string(),
        };
        let status = Status {
            id: "2".to_string(),
            name: "\nIn Progress".to_string(),
        };
        let priority = Priority {
            id: "3".to_string(),
            name: "Major\n".to_string(),
        };
        let user = User::with_display_name("John\nDoe");

        assert_eq!(resolution_field_name(Some(&resolution)), "Won't Fix");
        assert_eq!(status_field_name(Some(&status)), "In Progress");
        assert_eq!(priority_field_name(Some(&priority)), "Major");
        assert_eq!(user_field_display_name(Some(&user)), "John Doe");
    }

    #[test]
    fn test_field_extractor_empty_name() {
        assert_eq!(status_field_name(Some(&Status::default())), "");
    }

    #[test]
    fn test_comment_author() {
        assert_eq!(comment_author(""), "ANONYMOUS");
        assert_eq!(comment_author("  Jane  "), "Jane");
    }

    #[test]
    fn test_comment_author_whitespace_only_is_not_anonymous() {
        assert_eq!(comment_author("   "), "");
    }

    #[test]
    fn test_comment_author_keeps_newlines() {
        assert_eq!(comment_author(" Jane\nDoe "), "Jane\nDoe");
    }
}
