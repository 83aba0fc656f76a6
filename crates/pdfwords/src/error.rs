//! Error types for word extraction and report writing.

use std::io;
use std::path::PathBuf;

use pdfplumber::PdfError;
use thiserror::Error;

/// Result type alias for pdfwords operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while extracting a [`Document`](crate::Document) or writing its report.
#[derive(Error, Debug)]
pub enum Error {
    /// The input PDF is missing, unreadable, or not a valid PDF.
    #[error("failed to open PDF {}: {source}", .path.display())]
    Input {
        /// Path that was passed to the extractor.
        path: PathBuf,
        #[source]
        source: PdfError,
    },

    /// A page could not be interpreted after the document was opened.
    #[error("failed to read page {page}: {source}")]
    Page {
        /// 1-based page number.
        page: usize,
        #[source]
        source: PdfError,
    },

    /// The report destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        /// Final (normalized) output path.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Pages handed to [`Document::from_pages`](crate::Document::from_pages) are not numbered 1..N.
    #[error("page numbers must be consecutive from 1: expected page {expected}, found {found}")]
    PageOrder { expected: usize, found: usize },

    /// JSON serialization of the document failed.
    #[cfg(feature = "serde")]
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised by the extraction stage.
    pub fn is_input(&self) -> bool {
        matches!(self, Error::Input { .. } | Error::Page { .. })
    }

    /// True for errors raised by the reporting stage.
    pub fn is_output(&self) -> bool {
        match self {
            Error::Output { .. } => true,
            #[cfg(feature = "serde")]
            Error::Json(_) => true,
            _ => false,
        }
    }
}
