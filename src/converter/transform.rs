//! Content item transformation

use super::ids::IdAllocator;
use crate::error::{Error, Result};
use crate::formats::overblog::{Comment, ContentItem, ContentKind};
use crate::sanitize::HtmlSanitizer;

/// Source-only metadata removed from every post and page.
///
/// The export schema always carries these; a missing one means the item is
/// structurally broken and the run aborts.
const REMOVED_ITEM_FIELDS: [&str; 5] = ["origin", "slug", "created_at", "modified_at", "author"];

/// Transform one content item in place: strip source metadata, sanitize
/// the body, assign the next import id, and detach the comment tree.
///
/// Returns the assigned import id together with the detached comments so
/// the caller can hand them to the flattener; an absent or empty comments
/// container detaches as an empty vec.
///
/// # Errors
/// Returns an error if a metadata field or the `content` body is missing.
pub fn transform_item(
    item: &mut ContentItem,
    kind: ContentKind,
    ids: &mut IdAllocator,
    sanitizer: &HtmlSanitizer,
) -> Result<(u64, Vec<Comment>)> {
    for field in REMOVED_ITEM_FIELDS {
        item.remove_field(field).ok_or(Error::MissingField {
            element: kind.element_name(),
            field,
        })?;
    }

    let content = item.field_mut("content").ok_or(Error::MissingField {
        element: kind.element_name(),
        field: "content",
    })?;
    content.value = sanitizer.clean(&content.value);
    content.cdata = true;

    let import_id = ids.next_content_id();
    item.import_id = Some(import_id);

    Ok((import_id, std::mem::take(&mut item.comments)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::formats::overblog::Field;

    fn sample_item() -> ContentItem {
        ContentItem {
            fields: vec![
                Field::new("origin", "OB"),
                Field::new("title", "First"),
                Field::new("slug", "first"),
                Field::new("created_at", "2012-01-01"),
                Field::new("modified_at", "2012-01-02"),
                Field::new("author", "alice"),
                Field::cdata("content", "<p>Hello</p><script>x()</script>"),
            ],
            comments: vec![Comment::default()],
            import_id: None,
        }
    }

    #[test]
    fn test_metadata_stripped_unknown_fields_kept() {
        let mut item = sample_item();
        let mut ids = IdAllocator::new(7);
        let sanitizer = HtmlSanitizer::new();

        transform_item(&mut item, ContentKind::Post, &mut ids, &sanitizer).unwrap();

        let names: Vec<&str> = item.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title", "content"]);
    }

    #[test]
    fn test_import_id_assigned_and_body_sanitized() {
        let mut item = sample_item();
        let mut ids = IdAllocator::new(7);
        let sanitizer = HtmlSanitizer::new();

        let (import_id, _) =
            transform_item(&mut item, ContentKind::Post, &mut ids, &sanitizer).unwrap();

        assert_eq!(import_id, 8);
        assert_eq!(item.import_id, Some(8));
        let body = &item.field("content").unwrap().value;
        assert!(!body.contains("script"));
        assert!(body.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_comments_are_detached() {
        let mut item = sample_item();
        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();

        let (_, detached) =
            transform_item(&mut item, ContentKind::Post, &mut ids, &sanitizer).unwrap();

        assert_eq!(detached.len(), 1);
        assert!(item.comments.is_empty());
    }

    #[test]
    fn test_missing_metadata_is_fatal() {
        let mut item = sample_item();
        item.remove_field("slug");
        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();

        let result = transform_item(&mut item, ContentKind::Page, &mut ids, &sanitizer);
        assert!(matches!(
            result,
            Err(Error::MissingField { element: "page", field: "slug" })
        ));
    }

    #[test]
    fn test_missing_content_is_fatal() {
        let mut item = sample_item();
        item.remove_field("content");
        let mut ids = IdAllocator::new(0);
        let sanitizer = HtmlSanitizer::new();

        let result = transform_item(&mut item, ContentKind::Post, &mut ids, &sanitizer);
        assert!(matches!(
            result,
            Err(Error::MissingField { element: "post", field: "content" })
        ));
    }
}
