//! Command handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use analysis::{summarize, FileSource, Session};
use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::config::AnalyzerConfig;
use crate::render::{render_json, render_report, render_summary};

/// Loads each file in order into one session and prints a report after every successful
/// load. A file that fails to read or parse is logged and skipped; the previous dataset stays
/// current. With [`OutputFormat::Json`] each report is one line (JSON Lines). Returns the
/// number of files loaded, and fails only if none could be loaded.
pub async fn run_analyze<W: Write>(
    files: &[PathBuf],
    config: &AnalyzerConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let options = config.report_options();
    let mut session = Session::new();
    let mut loaded = 0usize;

    for path in files {
        let source = FileSource::new(path);
        if let Err(e) = session.load(&source).await.map(|_| ()) {
            warn!(
                path = %path.display(),
                error = %e,
                current = session.loaded_from().unwrap_or("none"),
                "Skipping export"
            );
            continue;
        }
        loaded += 1;

        let Some(report) = session.report(&options) else {
            continue;
        };
        match format {
            OutputFormat::Text => {
                render_report(out, &path.display().to_string(), &report)?;
                writeln!(out)?;
            }
            OutputFormat::Json => render_json(out, &report)?,
        }
    }

    info!(loaded, requested = files.len(), "Analysis finished");
    if loaded == 0 {
        bail!("None of the {} export(s) could be loaded", files.len());
    }
    Ok(loaded)
}

pub async fn run_summary<W: Write>(file: &Path, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    let source = FileSource::new(file);
    let data = session
        .load(&source)
        .await
        .with_context(|| format!("Load {}", file.display()))?;
    render_summary(out, &summarize(data))?;
    Ok(())
}
