mod grammar;
mod recovery;

use crate::parser::{Parse, Rule, parse};

impl Parse {
    pub fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    pub fn dump_cst_full(&self) -> String {
        self.printer().with_trivia(true).dump()
    }

    pub fn dump_diagnostics(&self, source: &str) -> String {
        self.diagnostics().render(source)
    }

    /// One `start..end: message` line per diagnostic.
    pub fn dump_diagnostics_raw(&self) -> String {
        self.diagnostics()
            .records()
            .iter()
            .map(|d| format!("{}..{}: {}\n", d.start, d.end, d.message))
            .collect()
    }

    #[track_caller]
    pub fn expect_valid_cst(src: &str) -> String {
        Self::expect_valid_rule(Rule::SqlStmtList, src)
    }

    #[track_caller]
    pub fn expect_valid_cst_full(src: &str) -> String {
        Self::expect_valid(Rule::SqlStmtList, src).dump_cst_full()
    }

    #[track_caller]
    pub fn expect_valid_rule(rule: Rule, src: &str) -> String {
        Self::expect_valid(rule, src).dump_cst()
    }

    #[track_caller]
    pub fn expect_invalid_cst(rule: Rule, src: &str) -> String {
        Self::expect_invalid(rule, src).dump_cst()
    }

    #[track_caller]
    pub fn expect_invalid_diagnostics(rule: Rule, src: &str) -> String {
        Self::expect_invalid(rule, src).dump_diagnostics(src)
    }

    #[track_caller]
    fn expect_valid(rule: Rule, src: &str) -> Parse {
        let parse = parse(rule, src).unwrap();
        if !parse.is_valid() {
            panic!(
                "Expected valid parse, got error:\n{}",
                parse.dump_diagnostics(src)
            );
        }
        parse
    }

    #[track_caller]
    pub fn expect_invalid(rule: Rule, src: &str) -> Parse {
        let parse = parse(rule, src).unwrap();
        if parse.is_valid() {
            panic!("Expected errors, got valid parse:\n{}", parse.dump_cst());
        }
        parse
    }
}
