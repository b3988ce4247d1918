//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};
use tracing::{trace, warn};

use super::ParserConfig;
use super::cst::{SyntaxKind, TokenSet};
use super::guard::ReentryGuard;
use super::lexer::{Token, token_text};
use super::marker::Event;
use super::rule::Rule;
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookaheads allowed between two consumed tokens before the parser is
/// considered stuck. Alternation retries many rules at one position.
pub(super) const DEBUG_FUEL: u32 = 4096;

/// Something the parser looked for at the furthest position it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Expectation {
    Token(SyntaxKind),
    Rule(Rule),
}

impl Expectation {
    fn describe(self) -> String {
        match self {
            Expectation::Token(kind) => kind.describe().to_string(),
            Expectation::Rule(rule) => rule.describe(),
        }
    }
}

/// Furthest-failure tracker. Survives rollbacks on purpose: the deepest point
/// any alternative reached is the best place to blame.
#[derive(Debug, Default)]
pub(super) struct Expected {
    pos: usize,
    items: Vec<Expectation>,
}

impl Expected {
    fn record(&mut self, pos: usize, item: Expectation) {
        if pos > self.pos {
            self.pos = pos;
            self.items.clear();
        }
        if pos == self.pos && !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// How many entries a rule starting at `pos` may later replace by its label.
    pub(super) fn mark(&self, pos: usize) -> usize {
        if self.pos == pos { self.items.len() } else { 0 }
    }

    /// Replaces what a labeled rule recorded at its own start with the rule itself.
    pub(super) fn collapse(&mut self, pos: usize, mark: usize, rule: Rule) {
        if self.pos > pos {
            return;
        }
        if self.pos == pos {
            self.items.truncate(mark);
        }
        self.record(pos, Expectation::Rule(rule));
    }
}

/// Recursive-descent parser over significant tokens.
///
/// Rules append [`Event`]s; trivia never reaches the parser and is woven back
/// in by the sink.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) events: Vec<Event>,
    pub(super) diagnostics: Diagnostics,
    pub(super) expected: Expected,
    /// One flag per active rule: whether the rule passed its pin point.
    pub(super) pins: Vec<bool>,
    pub(super) guard: ReentryGuard,
    pub(super) depth: u32,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: u32,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    /// `tokens` must not contain trivia.
    pub fn new(source: &'src str, tokens: Vec<Token>, config: &ParserConfig) -> Self {
        debug_assert!(tokens.iter().all(|t| !t.kind.is_trivia()));
        Self {
            source,
            tokens,
            pos: 0,
            events: Vec::new(),
            diagnostics: Diagnostics::new(),
            expected: Expected::default(),
            pins: Vec::new(),
            guard: ReentryGuard::new(config.reentry_limit),
            depth: 0,
            debug_fuel: std::cell::Cell::new(DEBUG_FUEL),
            recursion_limit: config.recursion_limit,
            exec_fuel_initial: config.exec_fuel,
            exec_fuel_remaining: config.exec_fuel,
            fatal_error: None,
        }
    }

    /// Hands over the event log once a root rule has run.
    pub(super) fn finish(self) -> Result<(Vec<Event>, Diagnostics, u32), Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok((self.events, self.diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    fn fail(&mut self, err: Error) {
        if self.fatal_error.is_none() {
            warn!(error = %err, pos = self.pos, "parse aborted");
            self.fatal_error = Some(err);
        }
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    /// Plain lookahead; a miss is not recorded as an expectation.
    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Cheap first-token check before a rule opens a marker. A miss is
    /// recorded, so the rule still shows up in "expected" messages.
    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            return true;
        }
        self.expect_token(kind);
        false
    }

    pub(super) fn next_is_any(&mut self, kinds: &[SyntaxKind]) -> bool {
        if kinds.contains(&self.current()) {
            return true;
        }
        for &kind in kinds {
            self.expect_token(kind);
        }
        false
    }

    fn expect_token(&mut self, kind: SyntaxKind) {
        self.expected.record(self.pos, Expectation::Token(kind));
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.span_at(self.pos)
    }

    fn span_at(&self, pos: usize) -> TextRange {
        self.tokens
            .get(pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                self.fail(Error::ExecFuelExhausted);
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();
        let kind = self.tokens[self.pos].kind;
        self.events.push(Event::Token { kind });
        self.pos += 1;
    }

    /// Consumes the current token if it is `kind`; records the miss otherwise.
    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            return true;
        }
        self.expect_token(kind);
        false
    }

    /// Like [`Self::eat`], but a miss leaves no expectation behind. Used for
    /// operator probes, which fail after nearly every operand.
    pub(super) fn consume_if(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            return true;
        }
        false
    }

    pub(super) fn consume_any(&mut self, set: TokenSet) -> bool {
        if self.at_any(set) {
            self.bump();
            return true;
        }
        false
    }

    /// Consumes the current token if it belongs to `set`.
    pub(super) fn eat_any(&mut self, set: TokenSet) -> bool {
        if self.at_any(set) {
            self.bump();
            return true;
        }
        for kind in set.iter() {
            self.expect_token(kind);
        }
        false
    }

    /// Consumes `kinds` in order. Stops at the first miss without undoing
    /// earlier tokens; the enclosing marker decides what to keep.
    pub(super) fn eat_all(&mut self, kinds: &[SyntaxKind]) -> bool {
        kinds.iter().all(|&kind| self.eat(kind))
    }

    /// Rule-level bookkeeping on entry: recursion depth and the re-entry guard.
    pub(super) fn enter_rule(&mut self, rule: Rule) -> bool {
        if self.depth >= self.recursion_limit {
            self.fail(Error::RecursionLimitExceeded);
            return false;
        }
        if !self.guard.enter(rule, self.pos) {
            trace!(rule = %rule, pos = self.pos, "re-entry guard tripped");
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_rule(&mut self) {
        self.guard.exit();
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn should_report(&self, range: TextRange) -> bool {
        self.diagnostics.last_start() != Some(range.start())
    }

    /// Emits `kind` at the current token unless something was already reported there.
    pub(super) fn error(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.current_span();
        if !self.should_report(range) {
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match message {
            Some(msg) => builder.message(msg).emit(),
            None => builder.emit(),
        }
    }

    /// Reports the furthest failure recorded so far: where it happened, what
    /// would have been accepted there and what was found instead.
    pub(super) fn error_expected(&mut self, kind: DiagnosticKind) {
        let pos = self.expected.pos.max(self.pos);
        let range = self.span_at(pos);
        if !self.should_report(range) {
            return;
        }
        let message = self.expected_message(pos);
        self.diagnostics.report(kind, range).message(message).emit();
    }

    fn expected_message(&self, pos: usize) -> String {
        let found = match self.tokens.get(pos) {
            Some(token) => format!("`{}`", token_text(self.source, token)),
            None => SyntaxKind::Eof.describe().to_string(),
        };
        let items: &[Expectation] = if self.expected.pos == pos {
            &self.expected.items
        } else {
            &[]
        };
        match items {
            [] => format!("unexpected {}", found),
            [only] => format!("expected {}, found {}", only.describe(), found),
            [init @ .., last] => {
                let init: Vec<String> = init.iter().map(|e| e.describe()).collect();
                format!(
                    "expected {} or {}, found {}",
                    init.join(", "),
                    last.describe(),
                    found
                )
            }
        }
    }

    /// Wraps tokens up to the first member of `recovery` in an `Error` node.
    /// With an empty set the node is empty and marks where input was missing.
    pub(super) fn error_node(&mut self, recovery: TokenSet) {
        let m = self.open();
        while !recovery.is_empty() && !self.at_any(recovery) && !self.should_stop() {
            self.bump();
        }
        m.complete(self, SyntaxKind::Error);
    }
}
