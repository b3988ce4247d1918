use std::path::PathBuf;

use roomsql_lib::{DiagnosticRecord, ParserConfig};
use serde::Serialize;

use super::run_common::{load_or_exit, parse_or_exit, render_diagnostics, resolve_rule_or_exit};

pub struct CheckArgs {
    pub sql_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub rule: Option<String>,
    pub json: bool,
    pub color: bool,
    pub config: ParserConfig,
}

/// `--json` output.
#[derive(Serialize)]
struct CheckReport<'a> {
    source: Option<&'a str>,
    valid: bool,
    diagnostics: Vec<DiagnosticRecord>,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(args.sql_path.as_deref(), args.sql_text.as_deref());
    let rule = resolve_rule_or_exit(args.rule.as_deref());
    let parsed = parse_or_exit(&args.config, rule, &source);
    let is_valid = parsed.is_valid();

    if args.json {
        let report = CheckReport {
            source: source.name.as_deref(),
            valid: is_valid,
            diagnostics: parsed.diagnostics().records(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else if !is_valid {
        eprint!("{}", render_diagnostics(&parsed, &source, args.color));
    }

    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
