//! Read command implementation.
//!
//! Fetches raw bytes from the server and renders them as a hex dump.

use std::io::Write;

use anyhow::{Context, Result};
use gsk_core::{AnalysisService, ByteBlock, parse_hex_address, validate_read_length};
use tracing::{debug, warn};

/// Pick the read length: a positive positional length wins over the flag.
pub fn resolve_length(flag: usize, positional: Option<&str>) -> usize {
    match positional.map(|s| (s, s.trim().parse::<usize>())) {
        Some((_, Ok(length))) if length > 0 => length,
        Some((raw, _)) => {
            warn!("Ignoring invalid length {:?}, using {}", raw, flag);
            flag
        }
        None => flag,
    }
}

/// Run the read command
pub fn run(
    service: &dyn AnalysisService,
    address: &str,
    length: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let address = parse_hex_address(address)?;
    let length = validate_read_length(length)?;

    let data = service
        .read_memory(address, length)
        .with_context(|| format!("Failed to read {} bytes at 0x{:x}", length, address))?;
    debug!("Read {} bytes at 0x{:x}", data.len(), address);

    let block = ByteBlock::new(address, data);
    write!(out, "{}", block)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::MockService;

    #[test]
    fn test_resolve_length() {
        assert_eq!(resolve_length(256, None), 256);
        assert_eq!(resolve_length(256, Some("64")), 64);
        assert_eq!(resolve_length(512, Some("0")), 512);
        assert_eq!(resolve_length(512, Some("abc")), 512);
        assert_eq!(resolve_length(512, Some("-4")), 512);
    }

    #[test]
    fn test_run_renders_hex_dump() {
        let service = MockService::with_memory(b"Hello".to_vec());
        let mut out = Vec::new();
        run(&service, "0x1000", 5, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("00001000  48 65 6c 6c 6f "));
        assert!(text.ends_with("|Hello           |\n"));
        assert_eq!(service.calls(), vec!["read_memory 0x1000 5"]);
    }

    #[test]
    fn test_run_short_read() {
        let service = MockService::with_memory((0..20).collect());
        let mut out = Vec::new();
        run(&service, "0", 256, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("00000010  10 11 12 13 "));
    }

    #[test]
    fn test_run_empty_read_prints_nothing() {
        let service = MockService::default();
        let mut out = Vec::new();
        run(&service, "0x401234", 16, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_rejects_bad_input_before_request() {
        let service = MockService::default();
        let mut out = Vec::new();

        assert!(run(&service, "not-an-address", 16, &mut out).is_err());
        assert!(run(&service, "0x1000", 0, &mut out).is_err());
        assert!(run(&service, "0x1000", 65537, &mut out).is_err());
        assert!(service.calls().is_empty());
    }
}
