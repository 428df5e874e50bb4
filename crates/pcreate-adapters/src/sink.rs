//! Output sinks that collect lines in memory.

use std::sync::{Arc, Mutex};

use pcreate_core::{
    application::{ApplicationError, ports::OutputSink},
    error::PcreateResult,
};

/// Collects emitted lines; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// All lines joined with newlines.
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, line: &str) -> PcreateResult<()> {
        self.lines
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned {
                resource: "memory sink",
            })?
            .push(line.to_owned());
        Ok(())
    }
}
