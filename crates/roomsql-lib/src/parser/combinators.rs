//! Grammar combinators: sequence, alternation, optional and repetition,
//! plus the rule wrapper that ties pins, recovery and labels together.
//!
//! Sequences are plain `&&` chains inside a rule body. Everything else goes
//! through a marker, so a failed attempt is rolled back before the next one.

use tracing::trace;

use super::core::Parser;
use super::cst::SyntaxKind;
use super::marker::CompletedMarker;
use super::rule::{Rule, RuleFn};
use crate::diagnostics::DiagnosticKind;

/// What a rule left behind.
pub(super) enum Completion {
    Failed,
    /// Succeeded without a node of its own; children went to the caller.
    Spliced,
    Node(CompletedMarker),
}

impl Parser<'_> {
    /// Runs `body` inside a marker. On success its output is wrapped in `kind`
    /// (or spliced when `None`); on failure it is rolled back.
    pub(super) fn section(
        &mut self,
        kind: Option<SyntaxKind>,
        body: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        let m = self.open();
        let success = body(self);
        m.done(self, kind, success)
    }

    /// `body?`. Always succeeds.
    pub(super) fn opt(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.section(None, body);
        true
    }

    /// `body*`. Stops at the first failure or at an iteration that consumed
    /// nothing. Always succeeds.
    pub(super) fn repeat(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        while !self.has_fatal_error() {
            let start = self.pos;
            if !self.section(None, &mut body) || self.pos == start {
                break;
            }
        }
        true
    }

    /// `body+`.
    pub(super) fn repeat1(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        self.section(None, &mut body) && self.repeat(body)
    }

    /// `item (',' item)*`.
    pub(super) fn comma_list(&mut self, mut item: impl FnMut(&mut Self) -> bool) -> bool {
        item(self) && self.repeat(|p| p.eat(SyntaxKind::Comma) && item(p))
    }

    /// First arm that succeeds wins; the others leave nothing behind.
    pub(super) fn alt(&mut self, arms: &[RuleFn]) -> bool {
        arms.iter().any(|arm| self.section(None, |p| arm(p)))
    }

    /// Commits the innermost rule: from here on it produces its node even if
    /// a later element is missing. Returns `true` so it chains with `&&`.
    pub(super) fn pin(&mut self) -> bool {
        if let Some(pinned) = self.pins.last_mut() {
            *pinned = true;
        }
        true
    }

    /// Runs a rule and reports whether it matched.
    pub(super) fn rule(&mut self, rule: Rule, body: impl FnOnce(&mut Self) -> bool) -> bool {
        !matches!(self.run(rule, body), Completion::Failed)
    }

    /// Runs a rule that always produces a node and hands the node back, so the
    /// expression loop can wrap it.
    pub(super) fn node(
        &mut self,
        rule: Rule,
        body: impl FnOnce(&mut Self) -> bool,
    ) -> Option<CompletedMarker> {
        debug_assert!(rule.node_kind().is_some(), "{rule} produces no node");
        match self.run(rule, body) {
            Completion::Node(done) => Some(done),
            Completion::Failed | Completion::Spliced => None,
        }
    }

    fn run(&mut self, rule: Rule, body: impl FnOnce(&mut Self) -> bool) -> Completion {
        if self.has_fatal_error() || !self.enter_rule(rule) {
            return Completion::Failed;
        }

        let start = self.pos;
        let mark = self.expected.mark(start);
        self.pins.push(false);
        let m = self.open();

        let success = body(self);
        let pinned = self.pins.pop().unwrap_or(false);

        let completion = if success || (pinned && !self.has_fatal_error()) {
            if !success {
                trace!(rule = %rule, pos = self.pos, "recovering pinned rule");
                self.error_expected(DiagnosticKind::ExpectedSyntax);
                self.error_node(rule.recovery());
            }
            match rule.node_kind() {
                Some(kind) => Completion::Node(m.complete(self, kind)),
                None => {
                    m.abandon(self);
                    Completion::Spliced
                }
            }
        } else {
            trace!(rule = %rule, pos = start, "rollback");
            m.rollback(self);
            if rule.is_labeled() {
                self.expected.collapse(start, mark, rule);
            }
            Completion::Failed
        };

        self.exit_rule();
        completion
    }
}
