//! Collector for accumulating warnings while a graph is assembled.
//!
//! Attribute level problems never abort a parse. The [`DiagnosticCollector`]
//! records them so they can be handed back next to the graph.

use log::warn;

use crate::error::Diagnostic;

/// A collector for diagnostics emitted while building a graph.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is logged at warning level as it is recorded.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        warn!(code:? = diagnostic.code(); "{}", diagnostic.message());
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return every recorded diagnostic in order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
