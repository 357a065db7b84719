//! OverBlog export document structures

/// A parsed OverBlog export file.
#[derive(Debug, Clone, Default)]
pub struct ExportDocument {
    /// The `posts` container, if present in the export.
    pub posts: Option<Vec<ContentItem>>,
    /// The `pages` container, if present in the export.
    pub pages: Option<Vec<ContentItem>>,
    /// Text of the first `origin` marker in document order, kept for
    /// validation.
    pub origin: Option<String>,
}

/// The two kinds of content item in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A blog post.
    Post,
    /// A static page.
    Page,
}

impl ContentKind {
    /// Element name of a single item of this kind.
    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Page => "page",
        }
    }

    /// Element name of the container holding items of this kind.
    #[must_use]
    pub fn container_name(self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Page => "pages",
        }
    }
}

/// A post or page from the export.
///
/// Child fields are kept in source order; fields the transformation does
/// not know about survive verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentItem {
    /// Child fields in source order.
    pub fields: Vec<Field>,
    /// Top-level comments; empty when the container is absent or empty.
    pub comments: Vec<Comment>,
    /// The import identifier, assigned during transformation.
    pub import_id: Option<u64>,
}

/// A leaf element of a post, page or comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Element name.
    pub name: String,
    /// Text content.
    pub value: String,
    /// Whether the source carried the value as a CDATA section.
    pub cdata: bool,
}

/// A comment or reply from the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Child fields in source order.
    pub fields: Vec<Field>,
    /// Nested replies; empty when the container is absent or empty.
    pub replies: Vec<Comment>,
}

impl Field {
    /// Creates a plain-text field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            value: value.into(),
            cdata: false,
        }
    }

    /// Creates a field whose value is carried as a CDATA section.
    #[must_use]
    pub fn cdata(name: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            value: value.into(),
            cdata: true,
        }
    }
}

impl ContentItem {
    /// Returns the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the first field with the given name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Removes and returns the first field with the given name.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(index))
    }
}

impl Comment {
    /// Returns the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
