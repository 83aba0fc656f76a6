//! Explicit run configuration passed into the library by its caller.

use std::path::PathBuf;

use pdfplumber::WordOptions;

/// Options for the extraction stage.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Password for encrypted PDFs.
    pub password: Option<String>,
    /// Maximum horizontal distance between characters of the same word.
    pub x_tolerance: f64,
    /// Maximum vertical distance between characters of the same word.
    pub y_tolerance: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            password: None,
            x_tolerance: 3.0,
            y_tolerance: 3.0,
        }
    }
}

impl ExtractConfig {
    /// Word grouping options handed to the PDF library.
    pub fn word_options(&self) -> WordOptions {
        WordOptions {
            x_tolerance: self.x_tolerance,
            y_tolerance: self.y_tolerance,
            ..WordOptions::default()
        }
    }
}

/// Output format of the saved report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Page text followed by a per-word metadata section.
    #[default]
    Text,
    /// The whole document as pretty-printed JSON.
    #[cfg(feature = "serde")]
    Json,
}

/// Everything needed for one extract-and-report run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// PDF to read.
    pub input: PathBuf,
    /// Output name; the format's extension is appended when missing.
    pub output: String,
    pub format: ReportFormat,
    pub extract: ExtractConfig,
}

impl RunConfig {
    /// Text report for `input` written to `output`, with default extraction options.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: ReportFormat::default(),
            extract: ExtractConfig::default(),
        }
    }
}
