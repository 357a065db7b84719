//! WordPress import document writing
//!
//! Serializes the three output documents with tab indentation. File names
//! carry an ordinal prefix fixing the order a downstream importer should
//! consume them in: posts, then pages, then comments.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::document::{FlatComment, ImportSet};
use crate::error::Result;
use crate::formats::overblog::{ContentItem, ContentKind, Field};

/// Write the three import documents into `output_dir`.
///
/// The directory is created (with parents) if absent; existing files at
/// the target paths are silently replaced. Returns the written paths in
/// import order.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_import_set(set: &ImportSet, source_stem: &str, output_dir: &Path) -> Result<[PathBuf; 3]> {
    fs::create_dir_all(output_dir)?;

    let posts_path = output_dir.join(file_name(1, source_stem, "post"));
    tracing::info!("Saving {} post(s) to {:?}", set.posts.len(), posts_path);
    fs::write(&posts_path, serialize_items(ContentKind::Post, &set.posts)?)?;

    let pages_path = output_dir.join(file_name(2, source_stem, "page"));
    tracing::info!("Saving {} page(s) to {:?}", set.pages.len(), pages_path);
    fs::write(&pages_path, serialize_items(ContentKind::Page, &set.pages)?)?;

    let comments_path = output_dir.join(file_name(3, source_stem, "comment"));
    tracing::info!("Saving {} comment(s) to {:?}", set.comments.len(), comments_path);
    fs::write(&comments_path, serialize_comments(&set.comments)?)?;

    Ok([posts_path, pages_path, comments_path])
}

/// Output file name: `{order}_{stem}_{kind}s.xml`.
fn file_name(order: u8, stem: &str, kind: &str) -> String {
    format!("{order}_{stem}_{kind}s.xml")
}

/// Serialize a posts or pages document to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_items(kind: ContentKind, items: &[ContentItem]) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(kind.container_name())))?;

    for item in items {
        write_item(&mut writer, kind, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new(kind.container_name())))?;

    let mut xml = String::from_utf8(output)?;
    xml.push('\n');
    Ok(xml)
}

/// Serialize the flattened comments document to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_comments(comments: &[FlatComment]) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("comments")))?;

    for comment in comments {
        writer.write_event(Event::Start(BytesStart::new("comment")))?;

        for field in &comment.fields {
            write_field(&mut writer, field)?;
        }

        write_text_element(&mut writer, "post_id", &comment.post_id.to_string())?;
        write_text_element(&mut writer, "comment_id", &comment.comment_id.to_string())?;
        if let Some(parent_id) = comment.parent_id {
            write_text_element(&mut writer, "parent_id", &parent_id.to_string())?;
        }

        writer.write_event(Event::End(BytesEnd::new("comment")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("comments")))?;

    let mut xml = String::from_utf8(output)?;
    xml.push('\n');
    Ok(xml)
}

fn write_item<W: std::io::Write>(
    writer: &mut Writer<W>,
    kind: ContentKind,
    item: &ContentItem,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(kind.element_name())))?;

    for field in &item.fields {
        write_field(writer, field)?;
    }

    // Appended last, after the surviving source fields
    if let Some(import_id) = item.import_id {
        write_text_element(writer, "import_id", &import_id.to_string())?;
    }

    writer.write_event(Event::End(BytesEnd::new(kind.element_name())))?;
    Ok(())
}

fn write_field<W: std::io::Write>(writer: &mut Writer<W>, field: &Field) -> Result<()> {
    if field.value.is_empty() && !field.cdata {
        writer.write_event(Event::Empty(BytesStart::new(field.name.as_str())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(field.name.as_str())))?;
    if field.cdata {
        writer.write_event(Event::CData(BytesCData::new(field.value.as_str())))?;
    } else {
        writer.write_event(Event::Text(BytesText::new(field.value.as_str())))?;
    }
    writer.write_event(Event::End(BytesEnd::new(field.name.as_str())))?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
