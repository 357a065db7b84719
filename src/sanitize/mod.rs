//! HTML sanitization
//!
//! Wraps [`ammonia`] with the restricted allow-list expected by the import
//! tool: basic text markup plus `<img src>` as the only embedded media tag.
//! Everything else is stripped, keeping inner text.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Tags allowed through sanitization.
const ALLOWED_TAGS: [&str; 15] = [
    "a", "h1", "h2", "h3", "strong", "em", "p", "ul", "ol", "li", "br", "sub", "sup", "hr", "img",
];

/// Attributes allowed on `<a>`.
const LINK_ATTRIBUTES: [&str; 6] = ["href", "name", "target", "title", "id", "rel"];

/// HTML cleaner enforcing the import allow-list.
///
/// Configured once, then applied to every post, page and comment body.
/// Cleaning is deterministic and idempotent: re-sanitizing already
/// sanitized markup is a no-op.
pub struct HtmlSanitizer {
    cleaner: Builder<'static>,
}

impl HtmlSanitizer {
    /// Creates a sanitizer with the restricted allow-list, extended to
    /// permit `<img>` with a `src` attribute.
    #[must_use]
    pub fn new() -> Self {
        let tags: HashSet<&str> = ALLOWED_TAGS.into_iter().collect();

        let mut tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
        tag_attributes.insert("a", LINK_ATTRIBUTES.into_iter().collect());
        tag_attributes.insert("img", HashSet::from(["src"]));

        let mut cleaner = Builder::default();
        cleaner
            .tags(tags)
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            // `rel` is caller-controlled, so ammonia must not inject its own
            .link_rel(None)
            .strip_comments(true);

        Self { cleaner }
    }

    /// Cleans an HTML fragment, returning markup containing only
    /// allow-listed tags and attributes.
    #[must_use]
    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_stripped() {
        let sanitizer = HtmlSanitizer::new();
        let clean = sanitizer.clean("<p>hello<script>alert(1)</script></p>");
        assert!(!clean.contains("script"));
        assert!(clean.contains("<p>hello</p>"));
    }

    #[test]
    fn test_img_src_survives() {
        let sanitizer = HtmlSanitizer::new();
        let clean = sanitizer.clean(r#"<img src="photo.png" onerror="alert(1)">"#);
        assert!(clean.contains("img"));
        assert!(clean.contains("photo.png"));
        assert!(!clean.contains("onerror"));
    }

    #[test]
    fn test_disallowed_tag_keeps_inner_text() {
        let sanitizer = HtmlSanitizer::new();
        let clean = sanitizer.clean("<div><p>kept</p></div>");
        assert!(!clean.contains("div"));
        assert!(clean.contains("<p>kept</p>"));
    }

    #[test]
    fn test_inline_style_removed() {
        let sanitizer = HtmlSanitizer::new();
        let clean = sanitizer.clean(r#"<p style="color: red">text</p>"#);
        assert_eq!(clean, "<p>text</p>");
    }

    #[test]
    fn test_idempotent() {
        let sanitizer = HtmlSanitizer::new();
        let once = sanitizer.clean(r#"<h1>t</h1><a href="https://example.com" target="_blank">x</a><hr><em>y</em>"#);
        let twice = sanitizer.clean(&once);
        assert_eq!(once, twice);
    }
}
