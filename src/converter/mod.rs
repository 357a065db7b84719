//! Export conversion pipeline
//!
//! Turns one OverBlog export into the three WordPress import documents:
//! load and validate the export, renumber every post and page, flatten
//! each item's comment tree into parent-linked records, then write the
//! output files in import order.

pub mod comments;
pub mod ids;
pub mod transform;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::formats::overblog::{self, ContentItem, ContentKind, ExportDocument};
use crate::formats::wp::{self, FlatComment, ImportSet};
use crate::sanitize::HtmlSanitizer;

pub use comments::flatten_comments;
pub use ids::IdAllocator;
pub use transform::transform_item;

/// Counts and output paths of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Number of posts written.
    pub posts: usize,
    /// Number of pages written.
    pub pages: usize,
    /// Number of comments and replies written.
    pub comments: usize,
    /// The three output files, in import order.
    pub files: [PathBuf; 3],
}

/// Convert an OverBlog export file into WordPress import documents.
///
/// `last_known_id` is the highest id already present in the target
/// WordPress database; posts and pages are numbered from the next id up.
/// The run is all-or-nothing: nothing is written unless the whole
/// transformation succeeds.
///
/// # Errors
/// Returns an error if the input fails validation, an item is missing a
/// required field, or the output cannot be written.
pub fn convert_export<P: AsRef<Path>>(
    source: P,
    output_dir: P,
    last_known_id: u64,
) -> Result<ConvertSummary> {
    let source = source.as_ref();
    let output_dir = output_dir.as_ref();
    tracing::info!("Converting export: {:?} → {:?}", source, output_dir);

    let mut doc = overblog::read_export(source)?;
    let set = transform_document(&mut doc, last_known_id)?;

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let files = wp::write_import_set(&set, stem, output_dir)?;

    tracing::info!("Conversion complete");
    Ok(ConvertSummary {
        posts: set.posts.len(),
        pages: set.pages.len(),
        comments: set.comments.len(),
        files,
    })
}

/// Transform a parsed export into the three output documents.
///
/// Posts are renumbered before pages so page ids continue the post
/// sequence; comment ids are document-wide and start at 1. The source
/// document is mutated in place, its comment trees detached as they are
/// flattened.
///
/// # Errors
/// Returns an error if an item or comment is missing a required field.
pub fn transform_document(doc: &mut ExportDocument, last_known_id: u64) -> Result<ImportSet> {
    let mut ids = IdAllocator::new(last_known_id);
    let sanitizer = HtmlSanitizer::new();

    let mut comments = Vec::new();
    let posts = transform_group(
        doc.posts.take(),
        ContentKind::Post,
        &mut ids,
        &sanitizer,
        &mut comments,
    )?;
    let pages = transform_group(
        doc.pages.take(),
        ContentKind::Page,
        &mut ids,
        &sanitizer,
        &mut comments,
    )?;

    Ok(ImportSet {
        posts,
        pages,
        comments,
    })
}

fn transform_group(
    items: Option<Vec<ContentItem>>,
    kind: ContentKind,
    ids: &mut IdAllocator,
    sanitizer: &HtmlSanitizer,
    comments: &mut Vec<FlatComment>,
) -> Result<Vec<ContentItem>> {
    let mut items = items.unwrap_or_default();
    tracing::info!("Formatting {} {}(s)", items.len(), kind.element_name());

    for item in &mut items {
        let (owner_id, detached) = transform_item(item, kind, ids, sanitizer)?;
        if !detached.is_empty() {
            tracing::debug!("Extracting comments for {} #{owner_id}", kind.element_name());
            flatten_comments(detached, owner_id, None, ids, sanitizer, comments)?;
        }
    }

    Ok(items)
}

/// Run a conversion and report success, in the style of a UI boundary.
///
/// Every internal failure is logged and collapsed into `false`; no error
/// value reaches the caller.
pub fn convert<P: AsRef<Path>>(source: P, output_dir: P, last_known_id: u64) -> bool {
    match convert_export(source, output_dir, last_known_id) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Conversion failed: {e}");
            false
        }
    }
}
