//! pdfwords: extract words with font and position metadata from a PDF and
//! save them as a plain-text report.
//!
//! The work happens in two stages:
//!
//! - **extract**: opens the PDF with `pdfplumber` and builds a [`Document`],
//!   one [`PageRecord`] per page holding the page's [`WordRecord`]s.
//! - **report**: renders a [`Document`] as text (see [`render_report`]) and
//!   writes it to a `.txt` file.
//!
//! ```ignore
//! let document = pdfwords::extract_document("record.pdf")?;
//! let path = pdfwords::save_report(&document, "record")?; // record.txt
//! ```

mod config;
mod error;
mod extract;
mod model;
mod report;

use std::path::PathBuf;

pub use config::{ExtractConfig, ReportFormat, RunConfig};
pub use error::{Error, Result};
pub use extract::{
    WordSource, extract_document, extract_document_with, extract_pdf, open_pdf, page_record,
    word_record,
};
pub use model::{DEFAULT_FONT, Document, PageRecord, WordRecord};
#[cfg(feature = "serde")]
pub use report::{JSON_SUFFIX, save_json};
pub use report::{
    ABSENT, TEXT_SUFFIX, format_coord, metadata_line, normalize_output_name, render_report,
    save_report, save_text, write_report,
};

/// Result of a completed [`run`].
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The extracted document.
    pub document: Document,
    /// Path of the report that was written.
    pub path: PathBuf,
}

/// Extract `config.input` and save the report to `config.output`.
///
/// `on_page(current, total)` is called after each extracted page.
///
/// # Errors
///
/// Input errors abort before anything is written; output errors leave
/// whatever was already flushed on disk.
pub fn run(config: &RunConfig, on_page: impl FnMut(usize, usize)) -> Result<RunOutput> {
    let pdf = open_pdf(&config.input, &config.extract)?;
    let document = extract_pdf(&pdf, &config.extract, on_page)?;
    drop(pdf);

    let path = match config.format {
        ReportFormat::Text => save_report(&document, &config.output)?,
        #[cfg(feature = "serde")]
        ReportFormat::Json => save_json(&document, &config.output)?,
    };
    tracing::info!(path = %path.display(), "report saved");
    Ok(RunOutput { document, path })
}
