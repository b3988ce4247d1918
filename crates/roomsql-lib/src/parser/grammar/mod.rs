//! Grammar productions for the SQL dialect.
//!
//! Every production is a `parse_*` method on [`Parser`] returning whether it
//! matched. Statements live in `statements`, clauses and helpers shared by
//! several statements in `clauses`, identifiers in `names`, and the
//! precedence-climbing `expr` in `expressions`.

mod clauses;
pub(super) mod expressions;
mod names;
mod statements;

use super::core::Parser;
use super::cst::SyntaxKind;
use super::cst::token_sets::STMT_RECOVERY;
use super::rule::{Rule, RuleFn};
use crate::diagnostics::DiagnosticKind;

/// Statement alternatives, in the order they are tried.
const STATEMENTS: &[RuleFn] = &[
    |p| p.parse_alter_table_stmt(),
    |p| p.parse_analyze_stmt(),
    |p| p.parse_attach_stmt(),
    |p| p.parse_begin_stmt(),
    |p| p.parse_commit_stmt(),
    |p| p.parse_create_index_stmt(),
    |p| p.parse_create_table_stmt(),
    |p| p.parse_create_trigger_stmt(),
    |p| p.parse_create_view_stmt(),
    |p| p.parse_create_virtual_table_stmt(),
    |p| p.parse_delete_stmt(),
    |p| p.parse_detach_stmt(),
    |p| p.parse_drop_index_stmt(),
    |p| p.parse_drop_table_stmt(),
    |p| p.parse_drop_trigger_stmt(),
    |p| p.parse_drop_view_stmt(),
    |p| p.parse_insert_stmt(),
    |p| p.parse_pragma_stmt(),
    |p| p.parse_reindex_stmt(),
    |p| p.parse_release_stmt(),
    |p| p.parse_rollback_stmt(),
    |p| p.parse_savepoint_stmt(),
    |p| p.parse_select_stmt(),
    |p| p.parse_update_stmt(),
    |p| p.parse_vacuum_stmt(),
];

impl Parser<'_> {
    /// Parses `rule` over the whole input and wraps the result in `Root`.
    ///
    /// The tree always covers every token: input the rule cannot account for
    /// ends up in `Error` nodes.
    pub(crate) fn parse_root(&mut self, rule: Rule) {
        let root = self.open();
        let entry = rule.entry();

        if !entry(self) && !self.has_fatal_error() {
            self.error(DiagnosticKind::ExpectedFragment, Some(rule.describe()));
            self.error_rest();
        } else if !self.should_stop() {
            let found = self.current().describe();
            self.error(DiagnosticKind::TrailingInput, Some(format!("found {found}")));
            self.error_rest();
        }

        root.complete(self, SyntaxKind::Root);
        self.assert_balanced();
    }

    /// `(stmt)? (';' (stmt)?)*`
    ///
    /// Never fails: input that is not a statement is skipped up to the next
    /// `;`, so one broken statement does not take the rest of the script down.
    pub(crate) fn parse_statement_list(&mut self) {
        while !self.should_stop() {
            if self.consume_if(SyntaxKind::Semicolon) {
                continue;
            }

            self.guard.clear();
            if self.parse_stmt() {
                if !self.eof() && !self.eat(SyntaxKind::Semicolon) {
                    self.error_expected(DiagnosticKind::ExpectedSeparator);
                    self.error_node(STMT_RECOVERY);
                }
                continue;
            }

            if self.has_fatal_error() {
                break;
            }
            self.error_expected(DiagnosticKind::ExpectedStatement);
            self.error_node(STMT_RECOVERY);
        }
    }

    /// `(EXPLAIN (QUERY PLAN)?)? (alter_table_stmt | ... | vacuum_stmt)`
    ///
    /// Only an `EXPLAIN` prefix gets a `Stmt` node; a bare statement stands on
    /// its own.
    pub(crate) fn parse_stmt(&mut self) -> bool {
        let m = self.open();
        let explained = self.consume_if(SyntaxKind::KwExplain);
        if explained {
            self.opt(|p| p.eat_all(&[SyntaxKind::KwQuery, SyntaxKind::KwPlan]));
        }

        if self.rule(Rule::Stmt, |p| p.alt(STATEMENTS)) {
            if explained {
                m.complete(self, SyntaxKind::Stmt);
            } else {
                m.abandon(self);
            }
            return true;
        }

        m.rollback(self);
        false
    }

    /// Wraps everything up to the end of input in an `Error` node.
    fn error_rest(&mut self) {
        let m = self.open();
        while !self.should_stop() {
            self.bump();
        }
        m.complete(self, SyntaxKind::Error);
    }
}
