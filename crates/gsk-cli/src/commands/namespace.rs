//! Namespace command implementation.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::AnalysisService;

/// Run the namespace list command
pub fn list(service: &dyn AnalysisService, limit: usize, out: &mut dyn Write) -> Result<()> {
    let body = service
        .list_namespaces(limit)
        .context("Failed to list namespaces")?;
    writeln!(out, "{}", body)?;
    Ok(())
}
