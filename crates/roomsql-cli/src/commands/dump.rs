use std::path::PathBuf;

use roomsql_lib::ParserConfig;

use super::run_common::{load_or_exit, parse_or_exit, render_diagnostics, resolve_rule_or_exit};

pub struct DumpArgs {
    pub sql_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub rule: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
    pub config: ParserConfig,
}

pub fn run(args: DumpArgs) {
    let source = load_or_exit(args.sql_path.as_deref(), args.sql_text.as_deref());
    let rule = resolve_rule_or_exit(args.rule.as_deref());
    let parsed = parse_or_exit(&args.config, rule, &source);

    print!(
        "{}",
        parsed
            .printer()
            .with_trivia(args.trivia)
            .with_spans(args.spans)
            .dump()
    );

    // The tree is useful even when broken; errors only add context.
    if !parsed.is_valid() {
        eprint!("{}", render_diagnostics(&parsed, &source, args.color));
    }
}
