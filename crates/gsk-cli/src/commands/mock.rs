//! In-memory `AnalysisService` for command tests.

use std::cell::RefCell;

use gsk_core::{AnalysisService, Error, LabelScope, Result};

/// Records every call and answers with canned responses
#[derive(Default)]
pub struct MockService {
    calls: RefCell<Vec<String>>,
    memory: Vec<u8>,
    fail_with: Option<u16>,
}

impl MockService {
    pub fn with_memory(memory: Vec<u8>) -> Self {
        Self {
            memory,
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> Result<String> {
        self.calls.borrow_mut().push(call.clone());
        match self.fail_with {
            Some(status) => Err(Error::Http {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(format!("ok: {}", call)),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AnalysisService for MockService {
    fn list_classes(&self, limit: usize) -> Result<String> {
        self.record(format!("list_classes limit={}", limit))
    }

    fn list_exports(&self, filter: Option<&str>, limit: usize) -> Result<String> {
        self.record(format!("list_exports filter={:?} limit={}", filter, limit))
    }

    fn list_imports(&self, filter: Option<&str>, limit: usize) -> Result<String> {
        self.record(format!("list_imports filter={:?} limit={}", filter, limit))
    }

    fn list_namespaces(&self, limit: usize) -> Result<String> {
        self.record(format!("list_namespaces limit={}", limit))
    }

    fn list_labels(&self, address: Option<&str>, limit: usize) -> Result<String> {
        self.record(format!("list_labels address={:?} limit={}", address, limit))
    }

    fn set_label(&self, address: &str, name: &str, scope: LabelScope) -> Result<String> {
        self.record(format!("set_label {} {} {}", address, name, scope))
    }

    fn delete_label(&self, address: &str, name: &str) -> Result<String> {
        self.record(format!("delete_label {} {}", address, name))
    }

    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>> {
        self.record(format!("read_memory {:#x} {}", address, length))?;
        Ok(self.memory.iter().copied().take(length).collect())
    }
}
