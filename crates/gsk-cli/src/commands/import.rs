//! Import command implementation.
//!
//! Lists external symbols the program pulls in from libraries.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::AnalysisService;

/// Run the import list command
pub fn list(
    service: &dyn AnalysisService,
    filter: Option<&str>,
    limit: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let body = service
        .list_imports(filter, limit)
        .context("Failed to list imports")?;
    writeln!(out, "{}", body)?;
    Ok(())
}
