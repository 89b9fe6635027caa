//! Diagnostic sinks for semantic-similarity failures
//!
//! The adapter never writes to a global logger directly; it reports to
//! whatever sink it was given.

use crate::error::ProviderError;
use parking_lot::Mutex;
use std::fmt;

/// One failed semantic measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub model: String,
    pub error: ProviderError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "semantic similarity unavailable (model {}): {}", self.model, self.error)
    }
}

/// Receives at most one diagnostic per failed measurement
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            model = %diagnostic.model,
            error = %diagnostic.error,
            "semantic similarity unavailable, scoring 0.0"
        );
    }
}

/// Keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}
