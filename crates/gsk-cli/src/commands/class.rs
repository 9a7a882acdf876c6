//! Class command implementation.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::AnalysisService;

/// Run the class list command
pub fn list(service: &dyn AnalysisService, limit: usize, out: &mut dyn Write) -> Result<()> {
    let body = service
        .list_classes(limit)
        .context("Failed to list classes")?;
    writeln!(out, "{}", body)?;
    Ok(())
}
