//! Extraction stage: PDF file in, [`Document`] out.
//!
//! All PDF decoding is delegated to `pdfplumber`. This module only turns the
//! words it reports into [`WordRecord`]s, one [`PageRecord`] per page.

use std::path::Path;

use pdfplumber::{Pdf, Word};
use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use crate::model::{Document, PageRecord, WordRecord};

/// A word as reported by a PDF backend, before it becomes a [`WordRecord`].
pub trait WordSource {
    fn text(&self) -> &str;
    /// Font name, if the backend knows it.
    fn font(&self) -> Option<&str>;
    fn x0(&self) -> Option<f64>;
    fn top(&self) -> Option<f64>;
}

impl WordSource for Word {
    fn text(&self) -> &str {
        &self.text
    }

    // Words carry no font of their own; use the first glyph's.
    fn font(&self) -> Option<&str> {
        self.chars.first().map(|c| c.fontname.as_str())
    }

    fn x0(&self) -> Option<f64> {
        Some(self.bbox.x0)
    }

    fn top(&self) -> Option<f64> {
        Some(self.bbox.top)
    }
}

/// Convert one backend word into a record, defaulting the font when absent.
pub fn word_record<W: WordSource + ?Sized>(word: &W) -> WordRecord {
    WordRecord::new(word.text(), word.font(), word.x0(), word.top())
}

/// Build a page record from backend words, keeping their order.
pub fn page_record<W: WordSource>(page: usize, words: &[W]) -> PageRecord {
    PageRecord::new(page, words.iter().map(word_record).collect())
}

/// Extract every page of the PDF at `path` with default options.
///
/// # Errors
///
/// Returns [`Error::Input`] if the file is missing or is not a valid PDF, and
/// [`Error::Page`] if a page cannot be interpreted.
pub fn extract_document(path: impl AsRef<Path>) -> Result<Document> {
    extract_document_with(path, &ExtractConfig::default())
}

/// Extract every page of the PDF at `path` using `config`.
pub fn extract_document_with(path: impl AsRef<Path>, config: &ExtractConfig) -> Result<Document> {
    let pdf = open_pdf(path.as_ref(), config)?;
    extract_pdf(&pdf, config, |_, _| {})
}

/// Open the PDF at `path`, using the configured password if any.
pub fn open_pdf(path: &Path, config: &ExtractConfig) -> Result<Pdf> {
    let opened = match config.password.as_deref() {
        Some(password) => Pdf::open_file_with_password(path, password.as_bytes(), None),
        None => Pdf::open_file(path, None),
    };
    let pdf = opened.map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), pages = pdf.page_count(), "opened PDF");
    Ok(pdf)
}

/// Extract all pages of an already opened PDF.
///
/// `on_page(current, total)` is called after each page, with `current` 1-based.
pub fn extract_pdf(
    pdf: &Pdf,
    config: &ExtractConfig,
    mut on_page: impl FnMut(usize, usize),
) -> Result<Document> {
    let total = pdf.page_count();
    let opts = config.word_options();
    let mut document = Document::new();

    for idx in 0..total {
        let page = pdf.page(idx).map_err(|source| Error::Page {
            page: idx + 1,
            source,
        })?;
        let words = page.extract_words(&opts);
        let record = document.push_page(words.iter().map(word_record).collect());
        debug!(page = record.page(), words = record.words().len(), "extracted page");
        on_page(idx + 1, total);
    }

    info!(
        pages = document.page_count(),
        words = document.word_count(),
        "extraction complete"
    );
    Ok(document)
}
