//! Label command implementation.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::{AnalysisService, LabelScope};
use tracing::debug;

/// Run the label list command
pub fn list(
    service: &dyn AnalysisService,
    address: Option<&str>,
    limit: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let body = service
        .list_labels(address, limit)
        .context("Failed to list labels")?;
    writeln!(out, "{}", body)?;
    Ok(())
}

/// Run the label add command
pub fn add(
    service: &dyn AnalysisService,
    address: &str,
    name: &str,
    local: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let scope = if local {
        LabelScope::Local
    } else {
        LabelScope::Global
    };
    debug!("Adding {} label {} at {}", scope, name, address);

    let body = service
        .set_label(address, name, scope)
        .with_context(|| format!("Failed to add label {} at {}", name, address))?;
    writeln!(out, "{}", body)?;
    Ok(())
}

/// Run the label delete command
pub fn delete(
    service: &dyn AnalysisService,
    address: &str,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let body = service
        .delete_label(address, name)
        .with_context(|| format!("Failed to delete label {} at {}", name, address))?;
    writeln!(out, "{}", body)?;
    Ok(())
}
