//! # overpress
//!
//! A pure-Rust converter for OverBlog XML exports, producing renumbered
//! documents importable into WordPress with the WP All Import plugin.
//!
//! One export file becomes three import files:
//!
//! - **Posts** - every `post`, stripped of source metadata, renumbered
//! - **Pages** - every `page`, ids continuing the post sequence
//! - **Comments** - all comments and replies, flattened into one
//!   parent-linked list with its own id sequence
//!
//! HTML bodies are sanitized against a restricted allow-list on the way
//! through.
//!
//! ## Quick Start
//!
//! ```no_run
//! use overpress::converter::convert_export;
//!
//! // Renumber from the last id already used in the target database
//! let summary = convert_export("export_overblog.xml", "out/", 7)?;
//! println!(
//!     "{} posts, {} pages, {} comments",
//!     summary.posts, summary.pages, summary.comments
//! );
//! # Ok::<(), overpress::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use overpress::prelude::*;
//!
//! // Now you have access to:
//! // - ExportDocument, ContentItem, Comment, FlatComment, ImportSet
//! // - convert, convert_export, IdAllocator, HtmlSanitizer
//! // - Error, Result
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `overpress` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod sanitize;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{convert, convert_export, ConvertSummary, IdAllocator};
    pub use crate::error::{Error, Result};
    pub use crate::formats::overblog::{
        Comment, ContentItem, ContentKind, ExportDocument, Field,
    };
    pub use crate::formats::wp::{FlatComment, ImportSet};
    pub use crate::sanitize::HtmlSanitizer;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
