use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Write the words of a PDF, with font and position metadata, to a text report.
#[derive(Debug, Parser)]
#[command(name = "pdfwords", about, version)]
pub struct Cli {
    /// Path to the PDF file. Default: ~/Documents/record.pdf
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output name; the format's extension is appended when missing
    #[arg(short, long, default_value = "record")]
    pub output: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormatArg::Text)]
    pub format: ReportFormatArg,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Horizontal tolerance for word grouping (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub x_tolerance: f64,

    /// Vertical tolerance for word grouping (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub y_tolerance: f64,

    /// Print the extracted words of each page to stdout
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Report format for the saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    /// Page text followed by per-word metadata
    Text,
    /// The extracted document as JSON
    Json,
}

impl ReportFormatArg {
    pub fn to_report_format(self) -> pdfwords::ReportFormat {
        match self {
            ReportFormatArg::Text => pdfwords::ReportFormat::Text,
            ReportFormatArg::Json => pdfwords::ReportFormat::Json,
        }
    }
}
