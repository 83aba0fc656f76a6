//! Reporting stage: [`Document`] in, plain-text report out.
//!
//! Each page renders as
//!
//! ```text
//! === Page <N> ===
//! <word1> <word2> ... <wordK>
//!
//! === Metadata ===
//! Word: <text> | Font: <font> | x0: <x0> | top: <top>
//! ...
//!
//!
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Document, PageRecord, WordRecord};

/// Extension appended to text report names.
pub const TEXT_SUFFIX: &str = ".txt";

/// Extension appended to JSON report names.
#[cfg(feature = "serde")]
pub const JSON_SUFFIX: &str = ".json";

/// Rendered in place of a coordinate the PDF did not report.
pub const ABSENT: &str = "None";

/// Append [`TEXT_SUFFIX`] to `name` unless it already ends with it.
pub fn normalize_output_name(name: &str) -> PathBuf {
    with_suffix(name, TEXT_SUFFIX)
}

fn with_suffix(name: &str, suffix: &str) -> PathBuf {
    if name.ends_with(suffix) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{suffix}"))
    }
}

/// Format a coordinate: shortest round-trip form with at least one decimal
/// (`10.0`, `72.25`), or [`ABSENT`].
pub fn format_coord(value: Option<f64>) -> String {
    match value {
        None => ABSENT.to_string(),
        Some(v) if v.is_nan() => "nan".to_string(),
        Some(v) if v.is_infinite() => (if v > 0.0 { "inf" } else { "-inf" }).to_string(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e16 => format!("{v:.1}"),
        Some(v) => v.to_string(),
    }
}

/// One metadata line for `word`, without the trailing newline.
pub fn metadata_line(word: &WordRecord) -> String {
    format!(
        "Word: {} | Font: {} | x0: {} | top: {}",
        word.text(),
        word.font(),
        format_coord(word.x0()),
        format_coord(word.top()),
    )
}

fn render_page(page: &PageRecord, out: &mut String) {
    out.push_str(&format!("=== Page {} ===\n", page.page()));
    out.push_str(&page.text());
    out.push_str("\n\n");
    out.push_str("=== Metadata ===\n");
    for word in page.words() {
        out.push_str(&metadata_line(word));
        out.push('\n');
    }
    out.push_str("\n\n");
}

/// Render the whole report in memory.
pub fn render_report(document: &Document) -> String {
    let mut out = String::new();
    for page in document.pages() {
        render_page(page, &mut out);
    }
    out
}

/// Stream the report to `out`, one page at a time.
pub fn write_report<W: Write>(document: &Document, out: &mut W) -> io::Result<()> {
    let mut buf = String::new();
    for page in document.pages() {
        buf.clear();
        render_page(page, &mut buf);
        out.write_all(buf.as_bytes())?;
    }
    Ok(())
}

/// Write the text report for `document` to `name` (with `.txt` appended if
/// missing), replacing any existing file. Returns the path written.
///
/// # Errors
///
/// Returns [`Error::Output`] if the file cannot be created or written. Pages
/// already flushed before the failure stay on disk.
pub fn save_report(document: &Document, name: &str) -> Result<PathBuf> {
    let path = normalize_output_name(name);
    write_file(&path, |w| write_report(document, w))?;
    debug!(
        path = %path.display(),
        pages = document.page_count(),
        words = document.word_count(),
        "wrote text report"
    );
    Ok(path)
}

/// Write `data` verbatim to `name` (with `.txt` appended if missing),
/// replacing any existing file.
pub fn save_text(data: &str, name: &str) -> Result<PathBuf> {
    let path = normalize_output_name(name);
    write_file(&path, |w| w.write_all(data.as_bytes()))?;
    debug!(path = %path.display(), bytes = data.len(), "wrote text");
    Ok(path)
}

/// Write `document` as pretty-printed JSON to `name` (with `.json` appended
/// if missing), replacing any existing file.
#[cfg(feature = "serde")]
pub fn save_json(document: &Document, name: &str) -> Result<PathBuf> {
    let path = with_suffix(name, JSON_SUFFIX);
    let json = serde_json::to_string_pretty(document)?;
    write_file(&path, |w| {
        w.write_all(json.as_bytes())?;
        w.write_all(b"\n")
    })?;
    debug!(path = %path.display(), bytes = json.len(), "wrote JSON report");
    Ok(path)
}

fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<()> {
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        body(&mut writer)?;
        writer.flush()
    });
    result.map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}
