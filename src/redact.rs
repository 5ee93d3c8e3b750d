//! Redaction of restricted comments.

use tracing::debug;

use crate::api::types::{Comment, Issue, User};

/// Body shown in place of a restricted comment.
pub const PRIVATE_COMMENT_BODY: &str = "<private comment>";

/// Author display name shown for a restricted comment.
pub const PRIVATE_COMMENT_AUTHOR: &str = "UNKNOWN";

/// Replace every restricted comment of every issue with a placeholder.
///
/// The placeholder keeps the original ID and timestamps. Public comments are
/// kept as they are and the order of comments does not change. The issues are
/// modified in place so the redaction sticks to whatever gets rendered.
pub fn filter_issue_comments(issues: &mut [Issue]) {
    for issue in issues.iter_mut() {
        let Some(container) = issue.fields.as_mut().and_then(|f| f.comment.as_mut()) else {
            continue;
        };

        for comment in container.comments.iter_mut() {
            if comment.is_restricted() {
                debug!(issue = %issue.key, comment_id = %comment.id, "Redacting restricted comment");
                *comment = redacted(comment);
            }
        }
    }
}

fn redacted(comment: &Comment) -> Comment {
    Comment {
        id: comment.id.clone(),
        body: PRIVATE_COMMENT_BODY.to_string(),
        author: User::with_display_name(PRIVATE_COMMENT_AUTHOR),
        created: comment.created.clone(),
        updated: comment.updated.clone(),
        visibility: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{CommentVisibility, Comments, IssueFields};

    fn comment(id: &str, body: &str, restricted_to: Option<&str>) -> Comment {
        Comment {
            id: id.to_string(),
            body: body.to_string(),
            author: User::with_display_name(format!("author-{}", id)),
            created: format!("2024-01-0{}T10:00:00.000+0000", id),
            updated: format!("2024-01-0{}T11:00:00.000+0000", id),
            visibility: restricted_to.map(|group| CommentVisibility {
                kind: "group".to_string(),
                value: group.to_string(),
            }),
        }
    }

    fn issue_with_comments(key: &str, comments: Vec<Comment>) -> Issue {
        Issue {
            key: key.to_string(),
            fields: Some(IssueFields {
                comment: Some(Comments { comments }),
                ..IssueFields::default()
            }),
            ..Issue::default()
        }
    }

    #[test]
    fn test_restricted_comments_are_replaced() {
        let original = comment("2", "secret details", Some("employees"));
        let mut issues = vec![issue_with_comments("PROJ-1", vec![original.clone()])];

        filter_issue_comments(&mut issues);

        let redacted = &issues[0].comments()[0];
        assert_eq!(redacted.body, "<private comment>");
        assert_eq!(redacted.author.display_name, "UNKNOWN");
        assert_eq!(redacted.id, original.id);
        assert_eq!(redacted.created, original.created);
        assert_eq!(redacted.updated, original.updated);
    }

    #[test]
    fn test_public_comments_unchanged_and_order_kept() {
        let public_a = comment("1", "first", None);
        let private = comment("2", "hidden", Some("admins"));
        let public_b = Comment {
            visibility: Some(CommentVisibility::default()),
            ..comment("3", "third", None)
        };
        let mut issues = vec![issue_with_comments(
            "PROJ-1",
            vec![public_a.clone(), private, public_b.clone()],
        )];

        filter_issue_comments(&mut issues);

        let comments = issues[0].comments();
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0], public_a);
        assert_eq!(comments[1].id, "2");
        assert_eq!(comments[1].body, PRIVATE_COMMENT_BODY);
        assert_eq!(comments[2], public_b);
    }

    #[test]
    fn test_multiple_issues() {
        let mut issues = vec![
            issue_with_comments("PROJ-1", vec![comment("1", "a", Some("g"))]),
            issue_with_comments("PROJ-2", vec![comment("2", "b", None)]),
        ];

        filter_issue_comments(&mut issues);

        assert_eq!(issues[0].comments()[0].body, PRIVATE_COMMENT_BODY);
        assert_eq!(issues[1].comments()[0].body, "b");
    }

    #[test]
    fn test_issues_without_comments_are_skipped() {
        let mut issues = vec![
            Issue::default(),
            Issue {
                fields: Some(IssueFields::default()),
                ..Issue::default()
            },
        ];

        filter_issue_comments(&mut issues);

        assert!(issues[0].fields.is_none());
        assert!(issues[1].comments().is_empty());
    }
}
