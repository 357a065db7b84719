//! Document format handlers
//!
//! `overblog` is the source export format read by the converter; `wp` is
//! the WordPress bulk-import format it writes.

pub mod overblog;
pub mod wp;

// Re-export main document types
pub use overblog::{Comment, ContentItem, ContentKind, ExportDocument, Field};
pub use wp::{FlatComment, ImportSet};
