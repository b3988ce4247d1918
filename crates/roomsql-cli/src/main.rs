mod cli;
mod commands;

use cli::{CheckParams, DumpParams, RulesParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("rules", m)) => {
            let params = RulesParams::from_matches(m);
            commands::rules::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Parser logging stays silent unless `RUST_LOG` asks for it.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
