use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use tracing::Level;

/// Input used when no FILE argument is given, relative to the home directory.
pub const DEFAULT_INPUT: &str = "Documents/record.pdf";

/// Resolve the input path: the explicit argument, or [`DEFAULT_INPUT`] under `home`.
///
/// Returns `Err(1)` with a message printed to stderr if neither is available.
pub fn resolve_input(file: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf, i32> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }
    match home {
        Some(home) => Ok(home.join(DEFAULT_INPUT)),
        None => {
            eprintln!("Error: no FILE given and the home directory could not be determined");
            Err(1)
        }
    }
}

/// Log level for the number of `-v` flags.
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr fmt subscriber at the level chosen by `-v`.
pub fn init_logging(verbose: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging was already initialized");
    }
}

/// Exit code for a library error: 1 for input problems, 2 for output problems.
pub fn exit_code(err: &pdfwords::Error) -> i32 {
    if err.is_output() { 2 } else { 1 }
}

/// A progress reporter that prints "Processing page N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    is_tty: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for page `current` (1-indexed) of `total`.
    pub fn report(&self, current: usize, total: usize) {
        if self.is_tty {
            eprint!("\rProcessing page {current}/{total}...");
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_input_prefers_explicit_file() {
        let path = resolve_input(Some(Path::new("a.pdf")), Some(PathBuf::from("/home/u"))).unwrap();
        assert_eq!(path, PathBuf::from("a.pdf"));
    }

    #[test]
    fn resolve_input_falls_back_to_home() {
        let path = resolve_input(None, Some(PathBuf::from("/home/u"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/Documents/record.pdf"));
    }

    #[test]
    fn resolve_input_without_home_fails() {
        assert_eq!(resolve_input(None, None).unwrap_err(), 1);
    }

    #[test]
    fn log_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }

    #[test]
    fn exit_codes_by_stage() {
        let input = pdfwords::extract_document("/nonexistent/file.pdf").unwrap_err();
        assert_eq!(exit_code(&input), 1);

        let output = pdfwords::save_text("x", "/nonexistent/dir/out").unwrap_err();
        assert_eq!(exit_code(&output), 2);
    }

    #[test]
    fn progress_reporter_does_not_panic() {
        let reporter = ProgressReporter::new();
        reporter.report(1, 2);
        reporter.finish();
    }
}
