use std::fmt;

use rowan::TextRange;
use serde::Serialize;

/// What went wrong, ordered from root causes to follow-on reports.
///
/// A broken production is reported where it broke; the statement list only
/// reports skipped junk when nothing else was reported at that spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A pinned production broke after committing.
    ExpectedSyntax,

    ExpectedStatement,
    ExpectedSeparator,

    // Fragment entry point
    ExpectedFragment,
    TrailingInput,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Wording used when the reporter supplies no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExpectedSyntax => "syntax error",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedSeparator => "expected `;` after statement",
            Self::ExpectedFragment => "input does not match the requested rule",
            Self::TrailingInput => "unexpected input after the end of the fragment",
        }
    }

    /// Final text: the fallback wording, or `detail` framed for this kind.
    pub fn message(&self, detail: Option<&str>) -> String {
        let Some(detail) = detail else {
            return self.fallback_message().to_string();
        };
        match self {
            Self::ExpectedFragment => format!("expected {detail}"),
            Self::TrailingInput => format!("{}: {detail}", self.fallback_message()),
            // already a full "expected ..., found ..." sentence
            _ => detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Secondary range shown next to the primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) label: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, label: impl Into<String>) -> Self {
        Self {
            range,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined in rendered output.
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, range: TextRange) -> fmt::Result {
    write!(f, "{}..{}", u32::from(range.start()), u32::from(range.end()))
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ", self.severity())?;
        write_range(f, self.range)?;
        write!(f, ": {}", self.message)?;
        for related in &self.related {
            write!(f, " (related: {} at ", related.label)?;
            write_range(f, related.range)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// One diagnostic as plain data, for JSON output and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub start: u32,
    pub end: u32,
    pub message: String,
}

impl From<&DiagnosticMessage> for DiagnosticRecord {
    fn from(msg: &DiagnosticMessage) -> Self {
        Self {
            kind: msg.kind,
            severity: msg.severity(),
            start: msg.range.start().into(),
            end: msg.range.end().into(),
            message: msg.message.clone(),
        }
    }
}
