//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap, holding only what the command uses
//! - `from_matches()` extractors that skip hidden flags
//! - `Into<*Args>` impls that resolve colors and parser limits for the handlers

use std::path::PathBuf;

use clap::ArgMatches;
use roomsql_lib::ParserConfig;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::rules::RulesArgs;

/// Where the SQL comes from and how to parse it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InputParams {
    pub sql_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub rule: Option<String>,
    pub exec_fuel: Option<u32>,
    pub recursion_limit: Option<u32>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            sql_path: m.get_one::<PathBuf>("sql_path").cloned(),
            sql_text: m.get_one::<String>("sql_text").cloned(),
            rule: m.get_one::<String>("rule").cloned(),
            exec_fuel: m.get_one::<u32>("exec_fuel").copied(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }

    /// Library defaults, overridden by whichever limits were given.
    /// `--exec-fuel 0` lifts the fuel limit.
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new();
        if let Some(fuel) = self.exec_fuel {
            config = config.with_exec_fuel((fuel > 0).then_some(fuel));
        }
        if let Some(limit) = self.recursion_limit {
            config = config.with_recursion_limit(limit);
        }
        config
    }
}

pub struct DumpParams {
    pub input: InputParams,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
    // Note: json is parsed but not extracted (shared flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            config: p.input.parser_config(),
            sql_path: p.input.sql_path,
            sql_text: p.input.sql_text,
            rule: p.input.rule,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub json: bool,
    pub color: ColorChoice,
    // Note: trivia and spans are parsed but not extracted (shared flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            config: p.input.parser_config(),
            sql_path: p.input.sql_path,
            sql_text: p.input.sql_text,
            rule: p.input.rule,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RulesParams {
    pub statements: bool,
}

impl RulesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statements: m.get_flag("statements"),
        }
    }
}

impl From<RulesParams> for RulesArgs {
    fn from(p: RulesParams) -> Self {
        Self {
            statements: p.statements,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
