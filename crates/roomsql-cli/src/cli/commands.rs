//! Command builders for the CLI.
//!
//! `dump` and `check` share their input and limit flags. Each also accepts
//! the other's output flags, hidden from `--help`.

use clap::Command;

use super::args::*;

/// Input and parser limit args common to every parsing command.
fn with_parse_args(cmd: Command) -> Command {
    cmd.arg(sql_path_arg())
        .arg(sql_text_arg())
        .arg(rule_arg())
        .arg(exec_fuel_arg())
        .arg(recursion_limit_arg())
}

/// Add hidden tree output args (for commands that don't print a tree).
fn with_hidden_dump_args(cmd: Command) -> Command {
    cmd.arg(trivia_arg().hide(true)).arg(spans_arg().hide(true))
}

/// Add hidden report args (for commands that don't print a report).
fn with_hidden_check_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("roomsql")
        .about("Parse SQL into a lossless syntax tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(rules_command())
}

/// Print the syntax tree.
///
/// Diagnostics, if any, go to stderr; the tree is printed regardless.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the syntax tree")
        .override_usage(
            "\
  roomsql dump <SOURCE>
  roomsql dump -e <TEXT> [--rule <RULE>]",
        )
        .after_help(
            r#"EXAMPLES:
  roomsql dump schema.sql                      # statement list
  roomsql dump -e 'SELECT 1' --trivia          # keep whitespace and comments
  roomsql dump -e 'a + b * c' --rule expr      # single rule
  cat q.sql | roomsql dump - --spans           # stdin, with byte offsets"#,
        );

    let cmd = with_parse_args(cmd)
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_hidden_check_args(cmd)
}

/// Report syntax errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors")
        .override_usage(
            "\
  roomsql check <SOURCE>
  roomsql check -e <TEXT> [--rule <RULE>]",
        )
        .after_help(
            r#"EXAMPLES:
  roomsql check schema.sql                     # silent when valid
  roomsql check -e 'SELECT FROM t' --json      # machine-readable report
  roomsql check -e 'INT(' --rule type_name     # single rule"#,
        );

    let cmd = with_parse_args(cmd).arg(color_arg()).arg(json_arg());

    with_hidden_dump_args(cmd)
}

/// List grammar rules.
pub fn rules_command() -> Command {
    Command::new("rules")
        .about("List rule names accepted by --rule")
        .arg(statements_arg())
}
