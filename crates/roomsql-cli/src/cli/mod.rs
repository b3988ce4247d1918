mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CheckParams, DumpParams, RulesParams};

/// `--color` setting. Only diagnostics are colored, and they go to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        use std::io::IsTerminal;

        match self {
            Self::Auto => std::io::stderr().is_terminal(),
            choice => choice == Self::Always,
        }
    }
}
