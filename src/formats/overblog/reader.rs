//! OverBlog export file reading
//!
//! The export is a single XML document with optional `posts` and `pages`
//! containers. Items keep every child field in source order; nested
//! comment/reply trees are collected on a stack as elements close.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use super::document::{Comment, ContentItem, ContentKind, ExportDocument, Field};
use crate::error::{Error, Result};

/// Read an OverBlog export file from disk
///
/// # Errors
/// Returns an error if the path does not exist, the extension is not
/// `.xml`, the XML is malformed, or the document fails export validation.
pub fn read_export<P: AsRef<Path>>(path: P) -> Result<ExportDocument> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_xml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if !is_xml {
        return Err(Error::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_export(&content)
}

/// Parse an OverBlog export from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed, neither content container is
/// present, or an `origin` marker does not identify an OverBlog export.
pub fn parse_export(content: &str) -> Result<ExportDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = ExportDocument::default();

    let mut buf = Vec::new();
    let mut current_kind: Option<ContentKind> = None;
    let mut current_items: Vec<ContentItem> = Vec::new();
    let mut current_item: Option<ContentItem> = None;
    // Open <comment> elements, outermost first
    let mut comment_stack: Vec<Comment> = Vec::new();
    let mut open_field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"posts" if current_kind.is_none() && current_item.is_none() => {
                    current_kind = Some(ContentKind::Post);
                }
                b"pages" if current_kind.is_none() && current_item.is_none() => {
                    current_kind = Some(ContentKind::Page);
                }
                b"post" | b"page"
                    if current_item.is_none()
                        && current_kind
                            .is_some_and(|k| e.name().as_ref() == k.element_name().as_bytes()) =>
                {
                    current_item = Some(ContentItem::default());
                }
                b"comments" | b"replies" => {}
                b"comment" => comment_stack.push(Comment::default()),
                name if open_field.is_none() => {
                    open_field = Some(Field::new(String::from_utf8_lossy(name).into_owned(), ""));
                }
                // Markup nested inside a field value; only its text is kept
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"posts" if current_kind.is_none() && current_item.is_none() => {
                    doc.posts = Some(Vec::new());
                }
                b"pages" if current_kind.is_none() && current_item.is_none() => {
                    doc.pages = Some(Vec::new());
                }
                b"comments" | b"replies" => {}
                b"comment" => {
                    if let Some(parent) = comment_stack.last_mut() {
                        parent.replies.push(Comment::default());
                    } else if let Some(item) = current_item.as_mut() {
                        item.comments.push(Comment::default());
                    }
                }
                name if open_field.is_none() => {
                    let field = Field::new(String::from_utf8_lossy(name).into_owned(), "");
                    route_field(field, &mut doc, &mut comment_stack, &mut current_item);
                }
                _ => {}
            },
            Event::Text(e) => {
                if let Some(field) = open_field.as_mut() {
                    field.value.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(field) = open_field.as_mut() {
                    field.value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    field.cdata = true;
                }
            }
            Event::End(e) => {
                let closes_field = open_field
                    .as_ref()
                    .is_some_and(|f| f.name.as_bytes() == e.name().as_ref());
                if closes_field {
                    if let Some(field) = open_field.take() {
                        route_field(field, &mut doc, &mut comment_stack, &mut current_item);
                    }
                    continue;
                }

                match e.name().as_ref() {
                    b"comment" => {
                        if let Some(done) = comment_stack.pop() {
                            if let Some(parent) = comment_stack.last_mut() {
                                parent.replies.push(done);
                            } else if let Some(item) = current_item.as_mut() {
                                item.comments.push(done);
                            }
                        }
                    }
                    b"post" | b"page" => {
                        if let Some(item) = current_item.take() {
                            current_items.push(item);
                        }
                    }
                    b"posts" if current_kind == Some(ContentKind::Post) => {
                        doc.posts = Some(std::mem::take(&mut current_items));
                        current_kind = None;
                    }
                    b"pages" if current_kind == Some(ContentKind::Page) => {
                        doc.pages = Some(std::mem::take(&mut current_items));
                        current_kind = None;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    validate(&doc)?;
    Ok(doc)
}

/// Attach a completed leaf field to the innermost open element.
///
/// The first `origin` field anywhere in the document doubles as the export
/// marker checked by validation.
fn route_field(
    field: Field,
    doc: &mut ExportDocument,
    comment_stack: &mut [Comment],
    current_item: &mut Option<ContentItem>,
) {
    if field.name == "origin" && doc.origin.is_none() {
        doc.origin = Some(field.value.clone());
    }

    if let Some(comment) = comment_stack.last_mut() {
        comment.fields.push(field);
    } else if let Some(item) = current_item.as_mut() {
        item.fields.push(field);
    }
    // Document-level markers outside any item are not kept
}

/// Check that the parsed tree looks like an OverBlog export.
fn validate(doc: &ExportDocument) -> Result<()> {
    if doc.posts.is_none() && doc.pages.is_none() {
        return Err(Error::MissingContentContainers);
    }

    if let Some(origin) = &doc.origin {
        if !origin.split(',').any(|token| token == "OB") {
            return Err(Error::WrongOrigin {
                origin: origin.clone(),
            });
        }
    }

    Ok(())
}
