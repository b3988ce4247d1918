//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! Commands that ignore an argument still accept it hidden (via `.hide(true)`),
//! so switching between `dump` and `check` never needs a flag edit.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// SQL file to parse, or `-` for stdin (positional).
pub fn sql_path_arg() -> Arg {
    Arg::new("sql_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("SQL file to parse (use \"-\" for stdin)")
}

/// Inline SQL text (-e/--sql).
pub fn sql_text_arg() -> Arg {
    Arg::new("sql_text")
        .short('e')
        .long("sql")
        .value_name("TEXT")
        .conflicts_with("sql_path")
        .help("Inline SQL text")
}

/// Grammar rule to parse the input as (--rule).
pub fn rule_arg() -> Arg {
    Arg::new("rule")
        .long("rule")
        .value_name("RULE")
        .help("Parse the input as this rule instead of a statement list (see `roomsql rules`)")
}

/// Include trivia tokens (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include trivia tokens (whitespace, comments)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Machine-readable diagnostics (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print diagnostics as JSON")
}

/// Execution fuel limit (--exec-fuel).
pub fn exec_fuel_arg() -> Arg {
    Arg::new("exec_fuel")
        .long("exec-fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Token budget for one parse, 0 for unlimited (default: 1000000)")
}

/// Rule nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum rule nesting depth (default: 512)")
}

/// Restrict a rule listing to statements (--statements).
pub fn statements_arg() -> Arg {
    Arg::new("statements")
        .long("statements")
        .action(ArgAction::SetTrue)
        .help("Only list statement rules")
}
