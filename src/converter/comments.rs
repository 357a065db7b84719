//! Comment tree flattening
//!
//! Converts the nested comment/reply tree detached from one content item
//! into flat, parent-linked records in depth-first pre-order: each comment
//! is emitted before its own replies, and replies before the parent's
//! later siblings.

use super::ids::IdAllocator;
use crate::error::{Error, Result};
use crate::formats::overblog::Comment;
use crate::formats::wp::FlatComment;
use crate::sanitize::HtmlSanitizer;

/// Optional comment metadata stripped before emission.
const REMOVED_COMMENT_FIELDS: [&str; 3] = ["author_url", "author_ip", "status"];

/// Flatten a comment group into `out`.
///
/// `parent_id` is `None` for a content item's top-level comments; when
/// descending into a replies container it carries the parent's freshly
/// allocated comment id, so only replies are stamped with a `parent_id`.
/// Reply-ness is purely positional; nesting depth is never tracked.
///
/// # Errors
/// Returns an error if a comment has no `content` body.
pub fn flatten_comments(
    group: Vec<Comment>,
    owner_id: u64,
    parent_id: Option<u64>,
    ids: &mut IdAllocator,
    sanitizer: &HtmlSanitizer,
    out: &mut Vec<FlatComment>,
) -> Result<()> {
    for comment in group {
        let comment_id = ids.next_comment_id();
        let Comment { mut fields, replies } = comment;

        fields.retain(|field| !REMOVED_COMMENT_FIELDS.contains(&field.name.as_str()));

        let content = fields
            .iter_mut()
            .find(|f| f.name == "content")
            .ok_or(Error::MissingField {
                element: "comment",
                field: "content",
            })?;
        content.value = sanitizer.clean(&content.value);
        content.cdata = true;

        out.push(FlatComment {
            fields,
            post_id: owner_id,
            comment_id,
            parent_id,
        });

        // Replies chain to this comment's id, not the grandparent's
        if !replies.is_empty() {
            flatten_comments(replies, owner_id, Some(comment_id), ids, sanitizer, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::formats::overblog::Field;

    fn comment(author: &str, body: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            fields: vec![
                Field::new("author_name", author),
                Field::new("author_url", "http://example.com"),
                Field::new("author_ip", "127.0.0.1"),
                Field::new("status", "approved"),
                Field::cdata("content", body),
            ],
            replies,
        }
    }

    #[test]
    fn test_reply_chains_to_immediate_parent() {
        // Two top-level comments; the first has one reply
        let group = vec![
            comment("bob", "<p>Nice</p>", vec![comment("alice", "<p>Thanks</p>", vec![])]),
            comment("carol", "<p>Me too</p>", vec![]),
        ];

        let mut ids = IdAllocator::new(7);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 8, None, &mut ids, &sanitizer, &mut out).unwrap();

        assert_eq!(out.len(), 3);
        let ids: Vec<u64> = out.iter().map(|c| c.comment_id).collect();
        assert_eq!(ids, [1, 2, 3]);

        assert_eq!(out[0].parent_id, None);
        assert_eq!(out[1].parent_id, Some(1));
        assert_eq!(out[2].parent_id, None);
        assert!(out.iter().all(|c| c.post_id == 8));
    }

    #[test]
    fn test_deep_nesting_chains_each_level() {
        let group = vec![comment(
            "a",
            "<p>1</p>",
            vec![comment("b", "<p>2</p>", vec![comment("c", "<p>3</p>", vec![])])],
        )];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out).unwrap();

        assert_eq!(out[0].parent_id, None);
        assert_eq!(out[1].parent_id, Some(1));
        assert_eq!(out[2].parent_id, Some(2));
    }

    #[test]
    fn test_dfs_order_before_later_siblings() {
        let group = vec![
            comment("a", "<p>first</p>", vec![
                comment("b", "<p>reply 1</p>", vec![]),
                comment("c", "<p>reply 2</p>", vec![]),
            ]),
            comment("d", "<p>second</p>", vec![]),
        ];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out).unwrap();

        let authors: Vec<&str> = out
            .iter()
            .map(|c| c.field("author_name").unwrap().value.as_str())
            .collect();
        assert_eq!(authors, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_optional_metadata_stripped() {
        let group = vec![comment("bob", "<p>x</p>", vec![])];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out).unwrap();

        assert!(out[0].field("author_url").is_none());
        assert!(out[0].field("author_ip").is_none());
        assert!(out[0].field("status").is_none());
        assert!(out[0].field("author_name").is_some());
    }

    #[test]
    fn test_absent_metadata_is_not_an_error() {
        let group = vec![Comment {
            fields: vec![Field::cdata("content", "<p>bare</p>")],
            replies: Vec::new(),
        }];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_missing_content_is_fatal() {
        let group = vec![Comment {
            fields: vec![Field::new("author_name", "bob")],
            replies: Vec::new(),
        }];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        let result = flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out);
        assert!(matches!(
            result,
            Err(Error::MissingField { element: "comment", field: "content" })
        ));
    }

    #[test]
    fn test_comment_body_sanitized() {
        let group = vec![comment("bob", "<p>ok</p><iframe src='x'></iframe>", vec![])];

        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();
        let mut out = Vec::new();
        flatten_comments(group, 1, None, &mut ids, &sanitizer, &mut out).unwrap();

        let body = &out[0].field("content").unwrap().value;
        assert!(!body.contains("iframe"));
        assert!(body.contains("<p>ok</p>"));
    }
}
