//! WordPress import document structures

use crate::formats::overblog::{ContentItem, Field};

/// A comment record in the flattened output document.
///
/// Produced in depth-first emission order: each comment precedes its own
/// replies, and replies precede the parent's later siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatComment {
    /// Surviving source fields in source order.
    pub fields: Vec<Field>,
    /// `import_id` of the owning post or page.
    pub post_id: u64,
    /// The newly allocated comment identifier.
    pub comment_id: u64,
    /// `comment_id` of the immediate parent; present for replies only.
    pub parent_id: Option<u64>,
}

impl FlatComment {
    /// Returns the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The three assembled output documents of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    /// Transformed posts, in source order.
    pub posts: Vec<ContentItem>,
    /// Transformed pages, in source order.
    pub pages: Vec<ContentItem>,
    /// All comments and replies, in depth-first emission order.
    pub comments: Vec<FlatComment>,
}
