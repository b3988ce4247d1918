//! Source-annotated rendering via `annotate-snippets`.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::Severity;

pub struct DiagnosticsPrinter<'a> {
    diagnostics: &'a Diagnostics,
    source: &'a str,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(diagnostics: &'a Diagnostics, source: &'a str) -> Self {
        Self {
            diagnostics,
            source,
            path: None,
            colored: false,
        }
    }

    /// File name shown in the `-->` line.
    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Writes one report per diagnostic.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = match self.colored {
            true => Renderer::styled(),
            false => Renderer::plain(),
        };

        let limit = self.source.len();
        for (idx, diag) in self.diagnostics.iter().enumerate() {
            let mut snippet = Snippet::source(self.source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(visible_span(diag.range, limit)));
            if let Some(path) = self.path {
                snippet = snippet.path(path);
            }
            for related in &diag.related {
                snippet = snippet.annotation(
                    AnnotationKind::Context
                        .span(visible_span(related.range, limit))
                        .label(&related.label),
                );
            }

            if idx > 0 {
                w.write_char('\n')?;
            }
            let report = [level(diag.severity())
                .primary_title(&diag.message)
                .element(snippet)];
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Widens an empty range to one column so the caret has something to mark.
fn visible_span(range: TextRange, limit: usize) -> Range<usize> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if start < end {
        start..end
    } else {
        start..(start + 1).min(limit)
    }
}
