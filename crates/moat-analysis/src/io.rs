//! The text-in/text-out boundary: read a source report, write a rendered one.

use std::path::Path;

use moat_core::config::ReportFormat;
use moat_core::errors::ReportError;

use crate::pipeline::Analysis;
use crate::report::{render_json, render_markdown};

pub fn read_source(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.display().to_string(),
        source,
    })
}

pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

/// Render in the requested format.
pub fn render(analysis: &Analysis, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(analysis)),
        ReportFormat::Json => render_json(analysis),
    }
}
