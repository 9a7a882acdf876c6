//! Interface to the remote program analysis server.
//!
//! Commands only talk to the server through [`AnalysisService`], so they can
//! be driven by the HTTP client in production and by an in-memory mock in
//! tests.

use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Default maximum number of results for list operations
pub const DEFAULT_LIST_LIMIT: usize = 1000;
/// Default number of bytes fetched by a memory read
pub const DEFAULT_READ_LENGTH: usize = 256;
/// Largest memory read the server accepts
pub const MAX_READ_LENGTH: usize = 65536;

/// Scope of a newly created label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LabelScope {
    /// Program-wide symbol
    #[default]
    Global,
    /// Symbol scoped to the containing function
    Local,
}

/// Operations exposed by the analysis server.
///
/// Text-returning operations hand back the server's response body verbatim.
pub trait AnalysisService {
    fn list_classes(&self, limit: usize) -> Result<String>;

    fn list_exports(&self, filter: Option<&str>, limit: usize) -> Result<String>;

    fn list_imports(&self, filter: Option<&str>, limit: usize) -> Result<String>;

    fn list_namespaces(&self, limit: usize) -> Result<String>;

    /// List all labels, or only those at `address` when given
    fn list_labels(&self, address: Option<&str>, limit: usize) -> Result<String>;

    fn set_label(&self, address: &str, name: &str, scope: LabelScope) -> Result<String>;

    fn delete_label(&self, address: &str, name: &str) -> Result<String>;

    /// Read up to `length` raw bytes starting at `address`
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>>;
}

/// Check a requested read length against the server limit
pub fn validate_read_length(length: usize) -> Result<usize> {
    if (1..=MAX_READ_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(Error::ReadLengthOutOfRange {
            length,
            max: MAX_READ_LENGTH,
        })
    }
}
