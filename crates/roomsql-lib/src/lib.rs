//! RoomSQL: a lossless recursive-descent parser for a SQLite-flavoured SQL
//! dialect.
//!
//! # Example
//!
//! ```
//! use roomsql_lib::{Rule, parse, parse_statements};
//!
//! let source = "SELECT a, b FROM t WHERE a > 1; DELETE FROM t";
//! let parsed = parse_statements(source).expect("within default limits");
//! assert!(parsed.is_valid());
//!
//! let fragment = parse(Rule::TypeName, "VARCHAR(255)").expect("within default limits");
//! eprintln!("{}", fragment.printer().dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{DiagnosticKind, DiagnosticRecord, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Parse, ParserConfig, Rule, SyntaxKind, SyntaxNode, TreePrinter, parse, parse_statements};

/// Errors that stop a parse.
///
/// Syntax errors are not among them: they are collected in [`Diagnostics`]
/// next to a tree that is built regardless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Rule nesting exceeded the recursion limit (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("unknown rule `{0}`")]
    UnknownRule(String),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
