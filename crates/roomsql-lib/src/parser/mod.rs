//! Recursive-descent parser for the SQL dialect.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree via Rowan's green tree
//! builder, in three steps:
//!
//! - The lexer turns the source into spanned tokens, trivia included.
//! - Rules run over the significant tokens and append [`marker`] events. A
//!   marker is an index into the event list, so backtracking is a truncate.
//! - The sink replays the events into a green tree and weaves trivia back in.
//!
//! Statements, clauses and names are plain combinator rules. Expressions go
//! through a precedence-climbing loop (`grammar::expressions`).
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree covering every token:
//!
//! 1. A failing alternative is rolled back silently.
//! 2. A rule that failed after its pin point keeps its node, gets an `Error`
//!    child and one diagnostic at the furthest position any attempt reached.
//! 3. The statement list skips to the next `;` when no statement matches.
//!
//! Fuel and recursion exhaustion are the only hard failures and return `Err`.

pub mod cst;
pub mod lexer;
pub mod printer;
pub mod rule;

mod combinators;
mod core;
mod grammar;
mod guard;
mod invariants;
mod marker;
mod sink;

#[cfg(test)]
mod tests;

pub use cst::{SqlLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use printer::TreePrinter;
pub use rule::Rule;

pub(crate) use core::Parser;

use tracing::debug;

use crate::Result;
use crate::diagnostics::Diagnostics;
use lexer::{Token, lex};
use sink::Sink;

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
const DEFAULT_RECURSION_LIMIT: u32 = 512;
const DEFAULT_REENTRY_LIMIT: u32 = 4;

/// Parse result: the green tree plus whatever went wrong on the way.
///
/// The tree is always complete. Error nodes in it mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
    exec_fuel_consumed: u32,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    pub fn printer(&self) -> TreePrinter {
        TreePrinter::new(self.syntax())
    }
}

/// Limits applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub(crate) exec_fuel: Option<u32>,
    pub(crate) recursion_limit: u32,
    pub(crate) reentry_limit: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            reentry_limit: DEFAULT_REENTRY_LIMIT,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on consumed tokens, counting re-consumption after
    /// backtracking. `None` = unlimited.
    ///
    /// Execution fuel never replenishes. It protects against inputs that make
    /// alternation backtrack excessively.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Maximum rule nesting depth. It protects against deeply nested input.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// How many times one rule may be active at one token position before it
    /// fails.
    pub fn with_reentry_limit(mut self, limit: u32) -> Self {
        self.reentry_limit = limit;
        self
    }

    /// Parses `source` as `rule`. Returns `Err` only when a limit is hit.
    pub fn parse(&self, rule: Rule, source: &str) -> Result<Parse> {
        let tokens = lex(source);
        let significant: Vec<Token> = tokens
            .iter()
            .copied()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        debug!(rule = %rule, tokens = significant.len(), "parse");

        let mut parser = Parser::new(source, significant, self);
        parser.parse_root(rule);
        let (events, diagnostics, exec_fuel_consumed) = parser.finish()?;

        let cst = Sink::new(source, &tokens).build(events);
        debug!(
            errors = diagnostics.error_count(),
            exec_fuel_consumed, "parse finished"
        );
        Ok(Parse {
            cst,
            diagnostics,
            exec_fuel_consumed,
        })
    }
}

/// Parses `source` as a single `rule` with default limits.
pub fn parse(rule: Rule, source: &str) -> Result<Parse> {
    ParserConfig::default().parse(rule, source)
}

/// Parses a `;`-separated statement list with default limits.
pub fn parse_statements(source: &str) -> Result<Parse> {
    parse(Rule::SqlStmtList, source)
}
