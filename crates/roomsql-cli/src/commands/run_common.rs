//! Input handling shared by the parsing commands.

use std::path::Path;

use roomsql_lib::{Parse, ParserConfig, Rule};

use super::source_loader::{SqlSource, load_sql_source};

/// Loads the SQL, or exits with an error message.
pub fn load_or_exit(sql_path: Option<&Path>, sql_text: Option<&str>) -> SqlSource {
    load_sql_source(sql_path, sql_text).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

/// Resolves `--rule`, defaulting to the statement list.
pub fn resolve_rule_or_exit(name: Option<&str>) -> Rule {
    let Some(name) = name else {
        return Rule::SqlStmtList;
    };
    name.parse().unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        eprintln!();
        eprintln!("Run 'roomsql rules' for the full list.");
        std::process::exit(1);
    })
}

/// Parses `source`. Exits when a parser limit is hit, since no tree exists then.
pub fn parse_or_exit(config: &ParserConfig, rule: Rule, source: &SqlSource) -> Parse {
    config.parse(rule, &source.text).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

/// Renders the parse diagnostics against the source they came from.
pub fn render_diagnostics(parsed: &Parse, source: &SqlSource, color: bool) -> String {
    let printer = parsed
        .diagnostics()
        .printer(&source.text)
        .colored(color);
    match source.name.as_deref() {
        Some(name) => printer.path(name).render(),
        None => printer.render(),
    }
}
