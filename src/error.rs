//! Error types for `overpress`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `overpress` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Input Validation Errors ====================
    /// The input file does not exist.
    #[error("input file not found: {path}")]
    InputNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The input file does not carry the expected `.xml` extension.
    #[error("expected a .xml file, found: {path}")]
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
    },

    /// Neither a `posts` nor a `pages` container was found in the export.
    #[error("no posts or pages container found in the export")]
    MissingContentContainers,

    /// An `origin` marker is present but does not identify an OverBlog
    /// export.
    #[error("origin marker does not identify an OverBlog export: {origin:?}")]
    WrongOrigin {
        /// The content of the origin marker.
        origin: String,
    },

    // ==================== Transformation Errors ====================
    /// A required child field is missing from a post, page or comment.
    #[error("missing required field <{field}> in <{element}>")]
    MissingField {
        /// The element kind the field was expected under.
        element: &'static str,
        /// The missing field name.
        field: &'static str,
    },

    // ==================== XML Errors ====================
    /// XML parsing or serialization error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Whether this error was raised by input validation, before any
    /// transformation or output took place.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound { .. }
                | Error::UnsupportedExtension { .. }
                | Error::MissingContentContainers
                | Error::WrongOrigin { .. }
        )
    }
}

/// A specialized Result type for `overpress` operations.
pub type Result<T> = std::result::Result<T, Error>;
