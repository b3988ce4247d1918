//! Statement productions.
//!
//! Each statement pins once its identifying keywords are in: from then on a
//! missing piece no longer rejects the statement, the rest of it up to the
//! next `;` goes into an `Error` node instead.

use crate::parser::Parser;
use crate::parser::cst::token_sets::CONFLICT_RESOLUTIONS;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::grammar::expressions::LOOSEST;
use crate::parser::rule::Rule;

const TEMPORARY: TokenSet = TokenSet::new(&[SyntaxKind::KwTemp, SyntaxKind::KwTemporary]);
const TRANSACTION_MODES: TokenSet = TokenSet::new(&[
    SyntaxKind::KwDeferred,
    SyntaxKind::KwImmediate,
    SyntaxKind::KwExclusive,
]);

impl Parser<'_> {
    /// `ALTER TABLE (database_name '.')? table_name
    /// (RENAME TO table_name | ADD COLUMN? column_def)`
    pub(crate) fn parse_alter_table_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwAlter) {
            return false;
        }
        self.rule(Rule::AlterTableStmt, |p| {
            p.eat_all(&[SyntaxKind::KwAlter, SyntaxKind::KwTable])
                && p.pin()
                && p.parse_database_prefix()
                && p.parse_table_name()
                && p.alt(&[
                    |p| p.eat_all(&[SyntaxKind::KwRename, SyntaxKind::KwTo]) && p.parse_table_name(),
                    |p| {
                        p.eat(SyntaxKind::KwAdd)
                            && p.opt(|p| p.eat(SyntaxKind::KwColumn))
                            && p.parse_column_def()
                    },
                ])
        })
    }

    /// `ANALYZE (database_name | table_or_index_name
    /// | database_name '.' table_or_index_name)?`
    pub(crate) fn parse_analyze_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwAnalyze) {
            return false;
        }
        self.rule(Rule::AnalyzeStmt, |p| {
            p.eat(SyntaxKind::KwAnalyze)
                && p.pin()
                && p.opt(|p| {
                    p.alt(&[
                        |p| p.parse_database_name(),
                        |p| p.parse_table_or_index_name(),
                        |p| {
                            p.parse_database_name()
                                && p.eat(SyntaxKind::Dot)
                                && p.parse_table_or_index_name()
                        },
                    ])
                })
        })
    }

    /// `ATTACH DATABASE? expr AS database_name`
    pub(crate) fn parse_attach_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwAttach) {
            return false;
        }
        self.rule(Rule::AttachStmt, |p| {
            p.eat(SyntaxKind::KwAttach)
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwDatabase))
                && p.parse_expr(LOOSEST)
                && p.eat(SyntaxKind::KwAs)
                && p.parse_database_name()
        })
    }

    /// `BEGIN (DEFERRED | IMMEDIATE | EXCLUSIVE)? TRANSACTION?`
    pub(crate) fn parse_begin_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwBegin) {
            return false;
        }
        self.rule(Rule::BeginStmt, |p| {
            p.eat(SyntaxKind::KwBegin)
                && p.pin()
                && p.opt(|p| p.eat_any(TRANSACTION_MODES))
                && p.opt(|p| p.eat(SyntaxKind::KwTransaction))
        })
    }

    /// `(COMMIT | END) TRANSACTION?`
    pub(crate) fn parse_commit_stmt(&mut self) -> bool {
        if !self.next_is_any(&[SyntaxKind::KwCommit, SyntaxKind::KwEnd]) {
            return false;
        }
        self.rule(Rule::CommitStmt, |p| {
            p.alt(&[|p| p.eat(SyntaxKind::KwCommit), |p| p.eat(SyntaxKind::KwEnd)])
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwTransaction))
        })
    }

    /// `CREATE UNIQUE? INDEX (IF NOT EXISTS)? (database_name '.')? index_name
    /// ON table_name '(' indexed_column (',' indexed_column)* ')' where_clause?`
    pub(crate) fn parse_create_index_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwCreate) {
            return false;
        }
        self.rule(Rule::CreateIndexStmt, |p| {
            p.eat(SyntaxKind::KwCreate)
                && p.opt(|p| p.eat(SyntaxKind::KwUnique))
                && p.eat(SyntaxKind::KwIndex)
                && p.pin()
                && p.parse_if_not_exists()
                && p.parse_database_prefix()
                && p.parse_index_name()
                && p.eat(SyntaxKind::KwOn)
                && p.parse_table_name()
                && p.parse_indexed_column_list()
                && p.opt(|p| p.parse_where_clause())
        })
    }

    /// `CREATE (TEMP | TEMPORARY)? TABLE (IF NOT EXISTS)? (database_name '.')?
    /// table_name ('(' column_def (',' column_def)* (',' table_constraint)* ')'
    /// (WITHOUT ROWID)? | AS select_stmt)`
    pub(crate) fn parse_create_table_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwCreate) {
            return false;
        }
        self.rule(Rule::CreateTableStmt, |p| {
            p.eat(SyntaxKind::KwCreate)
                && p.opt(|p| p.eat_any(TEMPORARY))
                && p.eat(SyntaxKind::KwTable)
                && p.pin()
                && p.parse_if_not_exists()
                && p.parse_database_prefix()
                && p.parse_table_name()
                && p.parse_create_table_body()
        })
    }

    /// `'(' column_def (',' column_def)* (',' table_constraint)* ')'
    /// (WITHOUT ROWID)? | AS select_stmt`
    ///
    /// Not an alternation: once `(` is seen, the definitions parsed so far stay
    /// in the tree when the list breaks.
    fn parse_create_table_body(&mut self) -> bool {
        if !self.eat(SyntaxKind::ParenOpen) {
            return self.eat(SyntaxKind::KwAs) && self.parse_select_stmt();
        }
        self.comma_list(|p| p.parse_column_def())
            && self.repeat(|p| p.eat(SyntaxKind::Comma) && p.parse_table_constraint())
            && self.eat(SyntaxKind::ParenClose)
            && self.opt(|p| p.eat_all(&[SyntaxKind::KwWithout, SyntaxKind::KwRowid]))
    }

    /// `CREATE (TEMP | TEMPORARY)? TRIGGER (IF NOT EXISTS)? (database_name '.')?
    /// trigger_name (BEFORE | AFTER | INSTEAD OF)?
    /// (DELETE | INSERT | UPDATE (OF column_name (',' column_name)*)?) ON table_name
    /// (FOR EACH ROW)? (WHEN expr)?
    /// BEGIN (update_stmt | insert_stmt | delete_stmt | select_stmt) ';' END`
    pub(crate) fn parse_create_trigger_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwCreate) {
            return false;
        }
        self.rule(Rule::CreateTriggerStmt, |p| {
            p.eat(SyntaxKind::KwCreate)
                && p.opt(|p| p.eat_any(TEMPORARY))
                && p.eat(SyntaxKind::KwTrigger)
                && p.pin()
                && p.parse_if_not_exists()
                && p.parse_database_prefix()
                && p.parse_trigger_name()
                && p.opt(|p| {
                    p.alt(&[
                        |p| p.eat(SyntaxKind::KwBefore),
                        |p| p.eat(SyntaxKind::KwAfter),
                        |p| p.eat_all(&[SyntaxKind::KwInstead, SyntaxKind::KwOf]),
                    ])
                })
                && p.alt(&[
                    |p| p.eat(SyntaxKind::KwDelete),
                    |p| p.eat(SyntaxKind::KwInsert),
                    |p| {
                        p.eat(SyntaxKind::KwUpdate)
                            && p.opt(|p| {
                                p.eat(SyntaxKind::KwOf)
                                    && p.comma_list(|p| p.parse_column_name())
                            })
                    },
                ])
                && p.eat(SyntaxKind::KwOn)
                && p.parse_table_name()
                && p.opt(|p| {
                    p.eat_all(&[SyntaxKind::KwFor, SyntaxKind::KwEach, SyntaxKind::KwRow])
                })
                && p.opt(|p| p.eat(SyntaxKind::KwWhen) && p.parse_expr(LOOSEST))
                && p.eat(SyntaxKind::KwBegin)
                && p.alt(&[
                    |p| p.parse_update_stmt(),
                    |p| p.parse_insert_stmt(),
                    |p| p.parse_delete_stmt(),
                    |p| p.parse_select_stmt(),
                ])
                && p.eat(SyntaxKind::Semicolon)
                && p.eat(SyntaxKind::KwEnd)
        })
    }

    /// `CREATE (TEMP | TEMPORARY)? VIEW (IF NOT EXISTS)? (database_name '.')?
    /// view_name AS select_stmt`
    pub(crate) fn parse_create_view_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwCreate) {
            return false;
        }
        self.rule(Rule::CreateViewStmt, |p| {
            p.eat(SyntaxKind::KwCreate)
                && p.opt(|p| p.eat_any(TEMPORARY))
                && p.eat(SyntaxKind::KwView)
                && p.pin()
                && p.parse_if_not_exists()
                && p.parse_database_prefix()
                && p.parse_view_name()
                && p.eat(SyntaxKind::KwAs)
                && p.parse_select_stmt()
        })
    }

    /// `CREATE VIRTUAL TABLE (IF NOT EXISTS)? (database_name '.')? table_name
    /// USING module_name ('(' module_argument (',' module_argument)* ')')?`
    pub(crate) fn parse_create_virtual_table_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwCreate) {
            return false;
        }
        self.rule(Rule::CreateVirtualTableStmt, |p| {
            p.eat_all(&[SyntaxKind::KwCreate, SyntaxKind::KwVirtual, SyntaxKind::KwTable])
                && p.pin()
                && p.parse_if_not_exists()
                && p.parse_database_prefix()
                && p.parse_table_name()
                && p.eat(SyntaxKind::KwUsing)
                && p.parse_module_name()
                && p.opt(|p| {
                    p.eat(SyntaxKind::ParenOpen)
                        && p.comma_list(|p| p.parse_module_argument())
                        && p.eat(SyntaxKind::ParenClose)
                })
        })
    }

    /// `with_clause? DELETE FROM single_table_stmt_table
    /// (INDEXED BY index_name | NOT INDEXED)? where_clause?
    /// (order_clause? LIMIT expr ((OFFSET | ',') expr)?)?`
    pub(crate) fn parse_delete_stmt(&mut self) -> bool {
        if !self.next_is_any(&[SyntaxKind::KwWith, SyntaxKind::KwDelete]) {
            return false;
        }
        self.rule(Rule::DeleteStmt, |p| {
            p.opt(|p| p.parse_with_clause())
                && p.eat_all(&[SyntaxKind::KwDelete, SyntaxKind::KwFrom])
                && p.pin()
                && p.parse_single_table_stmt_table()
                && p.parse_indexed_by()
                && p.opt(|p| p.parse_where_clause())
                && p.opt(|p| p.opt(|p| p.parse_order_clause()) && p.parse_limit_body())
        })
    }

    /// `DETACH DATABASE? database_name`
    pub(crate) fn parse_detach_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwDetach) {
            return false;
        }
        self.rule(Rule::DetachStmt, |p| {
            p.eat(SyntaxKind::KwDetach)
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwDatabase))
                && p.parse_database_name()
        })
    }

    /// `DROP INDEX (IF EXISTS)? (database_name '.')? index_name`
    pub(crate) fn parse_drop_index_stmt(&mut self) -> bool {
        self.parse_drop(Rule::DropIndexStmt, SyntaxKind::KwIndex, |p| {
            p.parse_index_name()
        })
    }

    /// `DROP TABLE (IF EXISTS)? (database_name '.')? table_name`
    pub(crate) fn parse_drop_table_stmt(&mut self) -> bool {
        self.parse_drop(Rule::DropTableStmt, SyntaxKind::KwTable, |p| {
            p.parse_table_name()
        })
    }

    /// `DROP TRIGGER (IF EXISTS)? (database_name '.')? trigger_name`
    pub(crate) fn parse_drop_trigger_stmt(&mut self) -> bool {
        self.parse_drop(Rule::DropTriggerStmt, SyntaxKind::KwTrigger, |p| {
            p.parse_trigger_name()
        })
    }

    /// `DROP VIEW (IF EXISTS)? (database_name '.')? view_name`
    pub(crate) fn parse_drop_view_stmt(&mut self) -> bool {
        self.parse_drop(Rule::DropViewStmt, SyntaxKind::KwView, |p| {
            p.parse_view_name()
        })
    }

    fn parse_drop(
        &mut self,
        rule: Rule,
        object: SyntaxKind,
        name: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        if !self.next_is(SyntaxKind::KwDrop) {
            return false;
        }
        self.rule(rule, |p| {
            p.eat_all(&[SyntaxKind::KwDrop, object])
                && p.pin()
                && p.opt(|p| p.eat_all(&[SyntaxKind::KwIf, SyntaxKind::KwExists]))
                && p.parse_database_prefix()
                && name(p)
        })
    }

    /// `with_clause? (INSERT (OR (REPLACE | ROLLBACK | ABORT | FAIL | IGNORE))?
    /// | REPLACE) INTO single_table_stmt_table insert_columns?
    /// (select_core_values | select_stmt | DEFAULT VALUES)`
    pub(crate) fn parse_insert_stmt(&mut self) -> bool {
        if !self.next_is_any(&[
            SyntaxKind::KwWith,
            SyntaxKind::KwInsert,
            SyntaxKind::KwReplace,
        ]) {
            return false;
        }
        self.rule(Rule::InsertStmt, |p| {
            p.opt(|p| p.parse_with_clause())
                && p.alt(&[
                    |p| {
                        p.eat(SyntaxKind::KwInsert)
                            && p.opt(|p| {
                                p.eat(SyntaxKind::KwOr) && p.eat_any(CONFLICT_RESOLUTIONS)
                            })
                    },
                    |p| p.eat(SyntaxKind::KwReplace),
                ])
                && p.eat(SyntaxKind::KwInto)
                && p.pin()
                && p.parse_single_table_stmt_table()
                && p.opt(|p| p.parse_insert_columns())
                && p.alt(&[
                    |p| p.parse_select_core_values(),
                    |p| p.parse_select_stmt(),
                    |p| p.eat_all(&[SyntaxKind::KwDefault, SyntaxKind::KwValues]),
                ])
        })
    }

    /// `PRAGMA (database_name '.')? pragma_name
    /// ('=' pragma_value | '(' pragma_value ')')?`
    pub(crate) fn parse_pragma_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwPragma) {
            return false;
        }
        self.rule(Rule::PragmaStmt, |p| {
            p.eat(SyntaxKind::KwPragma)
                && p.pin()
                && p.parse_database_prefix()
                && p.parse_pragma_name()
                && p.opt(|p| {
                    p.alt(&[
                        |p| p.eat(SyntaxKind::Eq) && p.parse_pragma_value(),
                        |p| {
                            p.eat(SyntaxKind::ParenOpen)
                                && p.parse_pragma_value()
                                && p.eat(SyntaxKind::ParenClose)
                        },
                    ])
                })
        })
    }

    /// `REINDEX (collation_name | (database_name '.')? (table_name | index_name))?`
    pub(crate) fn parse_reindex_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwReindex) {
            return false;
        }
        self.rule(Rule::ReindexStmt, |p| {
            p.eat(SyntaxKind::KwReindex)
                && p.pin()
                && p.opt(|p| {
                    p.alt(&[
                        |p| p.parse_collation_name(),
                        |p| {
                            p.parse_database_prefix()
                                && p.alt(&[|p| p.parse_table_name(), |p| p.parse_index_name()])
                        },
                    ])
                })
        })
    }

    /// `RELEASE SAVEPOINT? savepoint_name`
    pub(crate) fn parse_release_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwRelease) {
            return false;
        }
        self.rule(Rule::ReleaseStmt, |p| {
            p.eat(SyntaxKind::KwRelease)
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwSavepoint))
                && p.parse_savepoint_name()
        })
    }

    /// `ROLLBACK TRANSACTION? (TO SAVEPOINT? savepoint_name)?`
    pub(crate) fn parse_rollback_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwRollback) {
            return false;
        }
        self.rule(Rule::RollbackStmt, |p| {
            p.eat(SyntaxKind::KwRollback)
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwTransaction))
                && p.opt(|p| {
                    p.eat(SyntaxKind::KwTo)
                        && p.opt(|p| p.eat(SyntaxKind::KwSavepoint))
                        && p.parse_savepoint_name()
                })
        })
    }

    /// `SAVEPOINT savepoint_name`
    pub(crate) fn parse_savepoint_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwSavepoint) {
            return false;
        }
        self.rule(Rule::SavepointStmt, |p| {
            p.eat(SyntaxKind::KwSavepoint) && p.pin() && p.parse_savepoint_name()
        })
    }

    /// `with_clause? select_core (compound_operator select_core)* order_clause?
    /// limit_clause?`
    pub(crate) fn parse_select_stmt(&mut self) -> bool {
        if !self.next_is_any(&[SyntaxKind::KwWith, SyntaxKind::KwSelect, SyntaxKind::KwValues]) {
            return false;
        }
        self.rule(Rule::SelectStmt, |p| {
            p.opt(|p| p.parse_with_clause())
                && p.parse_select_core()
                && p.repeat(|p| p.parse_compound_operator() && p.parse_select_core())
                && p.opt(|p| p.parse_order_clause())
                && p.opt(|p| p.parse_limit_clause())
        })
    }

    /// `with_clause? UPDATE (OR ROLLBACK | OR ABORT | OR REPLACE | OR FAIL
    /// | OR IGNORE)? single_table_stmt_table (INDEXED BY index_name | NOT INDEXED)?
    /// SET column_name '=' expr (',' column_name '=' expr)* where_clause?`
    pub(crate) fn parse_update_stmt(&mut self) -> bool {
        if !self.next_is_any(&[SyntaxKind::KwWith, SyntaxKind::KwUpdate]) {
            return false;
        }
        self.rule(Rule::UpdateStmt, |p| {
            p.opt(|p| p.parse_with_clause())
                && p.eat(SyntaxKind::KwUpdate)
                && p.pin()
                && p.opt(|p| p.eat(SyntaxKind::KwOr) && p.eat_any(CONFLICT_RESOLUTIONS))
                && p.parse_single_table_stmt_table()
                && p.parse_indexed_by()
                && p.eat(SyntaxKind::KwSet)
                && p.comma_list(|p| {
                    p.parse_column_name() && p.eat(SyntaxKind::Eq) && p.parse_expr(LOOSEST)
                })
                && p.opt(|p| p.parse_where_clause())
        })
    }

    /// `VACUUM`
    pub(crate) fn parse_vacuum_stmt(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwVacuum) {
            return false;
        }
        self.rule(Rule::VacuumStmt, |p| p.eat(SyntaxKind::KwVacuum))
    }

    /// `(IF NOT EXISTS)?`
    fn parse_if_not_exists(&mut self) -> bool {
        self.opt(|p| p.eat_all(&[SyntaxKind::KwIf, SyntaxKind::KwNot, SyntaxKind::KwExists]))
    }
}
