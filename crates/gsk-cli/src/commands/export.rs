//! Export command implementation.
//!
//! Lists the program's exported entry points.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::AnalysisService;

/// Run the export list command
pub fn list(
    service: &dyn AnalysisService,
    filter: Option<&str>,
    limit: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let body = service
        .list_exports(filter, limit)
        .context("Failed to list exports")?;
    writeln!(out, "{}", body)?;
    Ok(())
}
