//! Parse diagnostics: collection, structured records and rendering.

mod message;
mod printer;


use rowan::{TextRange, TextSize};

pub use message::{DiagnosticKind, DiagnosticRecord, Severity};
pub use printer::DiagnosticsPrinter;

use message::{DiagnosticMessage, RelatedInfo};

/// Ordered list of everything reported while parsing one input.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "nothing is recorded until .emit() is called"]
pub struct DiagnosticBuilder<'a> {
    sink: &'a mut Diagnostics,
    pending: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic at `range` carrying the kind's stock wording.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            pending: DiagnosticMessage::with_default_message(kind, range),
            sink: self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(DiagnosticMessage::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub(crate) fn last_start(&self) -> Option<TextSize> {
        self.messages.last().map(|m| m.range.start())
    }

    /// Forgets everything past the first `len` messages.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.iter().map(DiagnosticRecord::from).collect()
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self, source)
    }

    /// Plain-text rendering, no color.
    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl DiagnosticBuilder<'_> {
    /// Fills the kind's template with `detail` instead of the stock wording.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.pending.message = self.pending.kind.message(Some(&detail));
        self
    }

    /// Attaches a secondary labelled range.
    pub fn related_to(mut self, label: impl Into<String>, range: TextRange) -> Self {
        self.pending.related.push(RelatedInfo::new(range, label));
        self
    }

    pub fn emit(self) {
        self.sink.messages.push(self.pending);
    }
}
