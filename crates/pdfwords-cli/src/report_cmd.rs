use pdfwords::{Document, ExtractConfig, RunConfig};

use crate::cli::Cli;
use crate::shared::{ProgressReporter, exit_code, resolve_input};

/// Pages listed by `--preview`.
const PREVIEW_PAGES: usize = 100;

pub fn run(cli: &Cli) -> Result<(), i32> {
    let config = run_config(cli)?;

    if !config.input.exists() {
        eprintln!("Error: file not found: {}", config.input.display());
        return Err(1);
    }

    let progress = ProgressReporter::new();
    let result = pdfwords::run(&config, |current, total| progress.report(current, total));
    progress.finish();

    let output = result.map_err(|e| {
        eprintln!("Error: {e}");
        exit_code(&e)
    })?;

    if cli.preview {
        for line in preview_lines(&output.document, PREVIEW_PAGES) {
            println!("{line}");
        }
    }
    println!("{}", output.path.display());
    Ok(())
}

/// Build the library configuration from parsed arguments.
pub fn run_config(cli: &Cli) -> Result<RunConfig, i32> {
    let input = resolve_input(cli.file.as_deref(), dirs::home_dir())?;
    Ok(RunConfig {
        input,
        output: cli.output.clone(),
        format: cli.format.to_report_format(),
        extract: ExtractConfig {
            password: cli.password.clone(),
            x_tolerance: cli.x_tolerance,
            y_tolerance: cli.y_tolerance,
        },
    })
}

/// One line per page (at most `limit`): page number, word count, joined text.
pub fn preview_lines(document: &Document, limit: usize) -> Vec<String> {
    document
        .pages()
        .iter()
        .take(limit)
        .map(|page| {
            format!(
                "page {} ({} words): {}",
                page.page(),
                page.words().len(),
                page.text()
            )
        })
        .collect()
}
