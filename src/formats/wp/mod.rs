//! WordPress import format module

mod document;
mod writer;

pub use document::{FlatComment, ImportSet};
pub use writer::{serialize_comments, serialize_items, write_import_set};
