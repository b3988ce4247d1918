//! Clauses and helper productions shared between statements.

use crate::parser::Parser;
use crate::parser::cst::token_sets::{CONFLICT_RESOLUTIONS, LITERAL_VALUE, STRING};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::grammar::expressions::LOOSEST;
use crate::parser::marker::CompletedMarker;
use crate::parser::rule::Rule;

const SORT_ORDER: TokenSet = TokenSet::new(&[SyntaxKind::KwAsc, SyntaxKind::KwDesc]);
const SIGN: TokenSet = TokenSet::new(&[SyntaxKind::Plus, SyntaxKind::Minus]);
const PRAGMA_KEYWORDS: TokenSet = TokenSet::new(&[
    SyntaxKind::KwOn,
    SyntaxKind::KwNo,
    SyntaxKind::KwFull,
    SyntaxKind::KwDelete,
    SyntaxKind::KwExclusive,
    SyntaxKind::KwDefault,
]);

impl Parser<'_> {
    /// `PARAMETER_NAME`
    pub(crate) fn parse_bind_parameter(&mut self) -> bool {
        self.rule(Rule::BindParameter, |p| p.eat(SyntaxKind::ParameterName))
    }

    /// `(CONSTRAINT name)? (PRIMARY KEY ... | NOT NULL ... | UNIQUE ... | CHECK ...
    /// | DEFAULT ... | COLLATE collation_name | foreign_key_clause)`
    pub(crate) fn parse_column_constraint(&mut self) -> bool {
        self.rule(Rule::ColumnConstraint, |p| {
            p.parse_constraint_name()
                && p.alt(&[
                    |p| {
                        p.eat_all(&[SyntaxKind::KwPrimary, SyntaxKind::KwKey])
                            && p.opt(|p| p.eat_any(SORT_ORDER))
                            && p.parse_conflict_clause()
                            && p.opt(|p| p.eat(SyntaxKind::KwAutoincrement))
                    },
                    |p| {
                        p.eat_all(&[SyntaxKind::KwNot, SyntaxKind::KwNull])
                            && p.parse_conflict_clause()
                    },
                    |p| p.eat(SyntaxKind::KwUnique) && p.parse_conflict_clause(),
                    |p| p.eat(SyntaxKind::KwCheck) && p.parse_parenthesized_expr(),
                    |p| {
                        p.eat(SyntaxKind::KwDefault)
                            && p.alt(&[
                                |p| p.parse_signed_number(),
                                |p| p.parse_literal_value(),
                                |p| p.parse_parenthesized_expr(),
                            ])
                    },
                    |p| p.eat(SyntaxKind::KwCollate) && p.parse_collation_name(),
                    |p| p.parse_foreign_key_clause(),
                ])
        })
    }

    /// `(CONSTRAINT name)?`
    fn parse_constraint_name(&mut self) -> bool {
        self.opt(|p| p.eat(SyntaxKind::KwConstraint) && p.parse_name())
    }

    /// `'(' expr ')'`
    fn parse_parenthesized_expr(&mut self) -> bool {
        self.eat(SyntaxKind::ParenOpen)
            && self.parse_expr(LOOSEST)
            && self.eat(SyntaxKind::ParenClose)
    }

    /// `'(' column_name (',' column_name)* ')'`
    pub(super) fn parse_column_name_list(&mut self) -> bool {
        self.eat(SyntaxKind::ParenOpen)
            && self.comma_list(|p| p.parse_column_name())
            && self.eat(SyntaxKind::ParenClose)
    }

    /// `column_name type_name? column_constraint*`
    pub(crate) fn parse_column_def(&mut self) -> bool {
        self.rule(Rule::ColumnDef, |p| {
            p.parse_column_name()
                && p.opt(|p| p.parse_type_name())
                && p.repeat(|p| p.parse_column_constraint())
        })
    }

    /// `UNION ALL? | INTERSECT | EXCEPT`
    pub(crate) fn parse_compound_operator(&mut self) -> bool {
        self.rule(Rule::CompoundOperator, |p| {
            p.alt(&[
                |p| p.eat(SyntaxKind::KwUnion) && p.opt(|p| p.eat(SyntaxKind::KwAll)),
                |p| p.eat(SyntaxKind::KwIntersect),
                |p| p.eat(SyntaxKind::KwExcept),
            ])
        })
    }

    /// `(ON CONFLICT (ROLLBACK | ABORT | FAIL | IGNORE | REPLACE))?`
    ///
    /// Matches empty input, in which case no node is built.
    pub(crate) fn parse_conflict_clause(&mut self) -> bool {
        self.opt(|p| {
            p.rule(Rule::ConflictClause, |p| {
                p.eat_all(&[SyntaxKind::KwOn, SyntaxKind::KwConflict])
                    && p.eat_any(CONFLICT_RESOLUTIONS)
            })
        })
    }

    /// `string_literal`
    pub(crate) fn parse_error_message(&mut self) -> bool {
        self.rule(Rule::ErrorMessage, |p| p.eat_any(STRING))
    }

    /// `REFERENCES foreign_table ('(' column_name (',' column_name)* ')')?
    /// (ON (DELETE | UPDATE) action | MATCH name)?
    /// (NOT? DEFERRABLE (INITIALLY DEFERRED | INITIALLY IMMEDIATE)?)?`
    pub(crate) fn parse_foreign_key_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwReferences) {
            return false;
        }
        self.rule(Rule::ForeignKeyClause, |p| {
            p.eat(SyntaxKind::KwReferences)
                && p.parse_foreign_table()
                && p.opt(|p| p.parse_column_name_list())
                && p.opt(|p| {
                    p.alt(&[
                        |p| {
                            p.eat(SyntaxKind::KwOn)
                                && p.eat_any(TokenSet::new(&[
                                    SyntaxKind::KwDelete,
                                    SyntaxKind::KwUpdate,
                                ]))
                                && p.alt(&[
                                    |p| p.eat_all(&[SyntaxKind::KwSet, SyntaxKind::KwNull]),
                                    |p| p.eat_all(&[SyntaxKind::KwSet, SyntaxKind::KwDefault]),
                                    |p| p.eat(SyntaxKind::KwCascade),
                                    |p| p.eat(SyntaxKind::KwRestrict),
                                    |p| p.eat_all(&[SyntaxKind::KwNo, SyntaxKind::KwAction]),
                                ])
                        },
                        |p| p.eat(SyntaxKind::KwMatch) && p.parse_name(),
                    ])
                })
                && p.opt(|p| {
                    p.opt(|p| p.eat(SyntaxKind::KwNot))
                        && p.eat(SyntaxKind::KwDeferrable)
                        && p.opt(|p| {
                            p.eat(SyntaxKind::KwInitially)
                                && p.eat_any(TokenSet::new(&[
                                    SyntaxKind::KwDeferred,
                                    SyntaxKind::KwImmediate,
                                ]))
                        })
                })
        })
    }

    /// `FROM (from_clause_aux | '(' from_clause_aux ')')`
    pub(crate) fn parse_from_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwFrom) {
            return false;
        }
        self.rule(Rule::FromClause, |p| {
            p.eat(SyntaxKind::KwFrom)
                && p.alt(&[
                    |p| p.parse_from_clause_aux(),
                    |p| {
                        p.eat(SyntaxKind::ParenOpen)
                            && p.parse_from_clause_aux()
                            && p.eat(SyntaxKind::ParenClose)
                    },
                ])
        })
    }

    /// `join_clause | table_or_subquery`
    ///
    /// Both arms start with `table_or_subquery`, so it is parsed once and
    /// wrapped in a `JoinClause` afterwards if a join follows.
    fn parse_from_clause_aux(&mut self) -> bool {
        let Some(first) = self.parse_table_or_subquery_node() else {
            return false;
        };
        let m = first.precede(self);
        if self.parse_join_tail() {
            m.complete(self, SyntaxKind::JoinClause);
        } else {
            m.abandon(self);
        }
        true
    }

    /// `(database_name '.')? table_name (AS? table_alias_name)?
    /// (INDEXED BY index_name | NOT INDEXED)?`
    pub(crate) fn parse_from_table(&mut self) -> bool {
        self.rule(Rule::FromTable, |p| {
            p.parse_database_prefix()
                && p.parse_table_name()
                && p.parse_table_alias()
                && p.parse_indexed_by()
        })
    }

    /// `(AS? table_alias_name)?`
    fn parse_table_alias(&mut self) -> bool {
        self.opt(|p| p.opt(|p| p.eat(SyntaxKind::KwAs)) && p.parse_table_alias_name())
    }

    /// `(INDEXED BY index_name | NOT INDEXED)?`
    pub(super) fn parse_indexed_by(&mut self) -> bool {
        self.opt(|p| {
            p.alt(&[
                |p| p.eat_all(&[SyntaxKind::KwIndexed, SyntaxKind::KwBy]) && p.parse_index_name(),
                |p| p.eat_all(&[SyntaxKind::KwNot, SyntaxKind::KwIndexed]),
            ])
        })
    }

    /// `GROUP BY expr (',' expr)* (HAVING expr)?`
    pub(crate) fn parse_group_by_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwGroup) {
            return false;
        }
        self.rule(Rule::GroupByClause, |p| {
            p.eat_all(&[SyntaxKind::KwGroup, SyntaxKind::KwBy])
                && p.parse_expr_list()
                && p.opt(|p| p.eat(SyntaxKind::KwHaving) && p.parse_expr(LOOSEST))
        })
    }

    /// `expr (',' expr)*`
    pub(super) fn parse_expr_list(&mut self) -> bool {
        self.comma_list(|p| p.parse_expr(LOOSEST))
    }

    /// `column_name (COLLATE collation_name)? (ASC | DESC)?`
    pub(crate) fn parse_indexed_column(&mut self) -> bool {
        self.rule(Rule::IndexedColumn, |p| {
            p.parse_column_name()
                && p.opt(|p| p.eat(SyntaxKind::KwCollate) && p.parse_collation_name())
                && p.opt(|p| p.eat_any(SORT_ORDER))
        })
    }

    /// `'(' column_name (',' column_name)* ')'`
    pub(crate) fn parse_insert_columns(&mut self) -> bool {
        self.rule(Rule::InsertColumns, |p| p.parse_column_name_list())
    }

    /// `table_or_subquery (join_operator table_or_subquery join_constraint?)+`
    pub(crate) fn parse_join_clause(&mut self) -> bool {
        self.rule(Rule::JoinClause, |p| {
            p.parse_table_or_subquery() && p.parse_join_tail()
        })
    }

    /// `(join_operator table_or_subquery join_constraint?)+`
    fn parse_join_tail(&mut self) -> bool {
        self.repeat1(|p| {
            p.parse_join_operator()
                && p.parse_table_or_subquery()
                && p.opt(|p| p.parse_join_constraint())
        })
    }

    /// `ON expr | USING '(' column_name (',' column_name)* ')'`
    pub(crate) fn parse_join_constraint(&mut self) -> bool {
        if !self.next_is_any(&[SyntaxKind::KwOn, SyntaxKind::KwUsing]) {
            return false;
        }
        self.rule(Rule::JoinConstraint, |p| {
            p.alt(&[
                |p| p.eat(SyntaxKind::KwOn) && p.parse_expr(LOOSEST),
                |p| p.eat(SyntaxKind::KwUsing) && p.parse_column_name_list(),
            ])
        })
    }

    /// `',' | NATURAL? (LEFT OUTER? | INNER | CROSS)? JOIN`
    pub(crate) fn parse_join_operator(&mut self) -> bool {
        self.rule(Rule::JoinOperator, |p| {
            p.alt(&[
                |p| p.eat(SyntaxKind::Comma),
                |p| {
                    p.opt(|p| p.eat(SyntaxKind::KwNatural))
                        && p.opt(|p| {
                            p.alt(&[
                                |p| {
                                    p.eat(SyntaxKind::KwLeft)
                                        && p.opt(|p| p.eat(SyntaxKind::KwOuter))
                                },
                                |p| p.eat(SyntaxKind::KwInner),
                                |p| p.eat(SyntaxKind::KwCross),
                            ])
                        })
                        && p.eat(SyntaxKind::KwJoin)
                },
            ])
        })
    }

    /// `LIMIT expr ((OFFSET | ',') expr)?`
    pub(crate) fn parse_limit_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwLimit) {
            return false;
        }
        self.rule(Rule::LimitClause, |p| p.parse_limit_body())
    }

    /// `LIMIT expr ((OFFSET | ',') expr)?` without a node, as used by `DELETE`.
    pub(super) fn parse_limit_body(&mut self) -> bool {
        self.eat(SyntaxKind::KwLimit)
            && self.parse_expr(LOOSEST)
            && self.opt(|p| {
                p.eat_any(TokenSet::new(&[SyntaxKind::KwOffset, SyntaxKind::Comma]))
                    && p.parse_expr(LOOSEST)
            })
    }

    /// `NUMERIC_LITERAL | string_literal | BLOB_LITERAL | NULL | CURRENT_TIME
    /// | CURRENT_DATE | CURRENT_TIMESTAMP`
    pub(crate) fn parse_literal_value(&mut self) -> bool {
        self.rule(Rule::LiteralValue, |p| p.eat_any(LITERAL_VALUE))
    }

    /// `ORDER BY ordering_term (',' ordering_term)*`
    pub(crate) fn parse_order_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwOrder) {
            return false;
        }
        self.rule(Rule::OrderClause, |p| {
            p.eat_all(&[SyntaxKind::KwOrder, SyntaxKind::KwBy])
                && p.comma_list(|p| p.parse_ordering_term())
        })
    }

    /// `expr (COLLATE collation_name)? (ASC | DESC)?`
    pub(crate) fn parse_ordering_term(&mut self) -> bool {
        self.rule(Rule::OrderingTerm, |p| {
            p.parse_expr(LOOSEST)
                && p.opt(|p| p.eat(SyntaxKind::KwCollate) && p.parse_collation_name())
                && p.opt(|p| p.eat_any(SORT_ORDER))
        })
    }

    /// `signed_number | name | string_literal | ON | NO | FULL | DELETE
    /// | EXCLUSIVE | DEFAULT`
    pub(crate) fn parse_pragma_value(&mut self) -> bool {
        self.rule(Rule::PragmaValue, |p| {
            p.alt(&[
                |p| p.parse_signed_number(),
                |p| p.parse_name(),
                |p| p.eat_any(STRING),
                |p| p.eat_any(PRAGMA_KEYWORDS),
            ])
        })
    }

    /// `'*' | table_name '.' '*' | expr (AS? column_alias_name)?`
    pub(crate) fn parse_result_column(&mut self) -> bool {
        self.rule(Rule::ResultColumn, |p| {
            p.alt(&[
                |p| p.eat(SyntaxKind::Star),
                |p| p.parse_table_name() && p.eat_all(&[SyntaxKind::Dot, SyntaxKind::Star]),
                |p| {
                    p.parse_expr(LOOSEST)
                        && p.opt(|p| {
                            p.opt(|p| p.eat(SyntaxKind::KwAs)) && p.parse_column_alias_name()
                        })
                },
            ])
        })
    }

    /// `result_column (',' result_column)*`
    pub(crate) fn parse_result_columns(&mut self) -> bool {
        self.rule(Rule::ResultColumns, |p| {
            p.comma_list(|p| p.parse_result_column())
        })
    }

    /// `select_core_select | select_core_values`
    pub(crate) fn parse_select_core(&mut self) -> bool {
        self.rule(Rule::SelectCore, |p| {
            p.alt(&[
                |p| p.parse_select_core_select(),
                |p| p.parse_select_core_values(),
            ])
        })
    }

    /// `SELECT (DISTINCT | ALL)? result_columns from_clause? where_clause?
    /// group_by_clause?`
    pub(crate) fn parse_select_core_select(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwSelect) {
            return false;
        }
        self.rule(Rule::SelectCoreSelect, |p| {
            p.eat(SyntaxKind::KwSelect)
                && p.pin()
                && p.opt(|p| {
                    p.eat_any(TokenSet::new(&[SyntaxKind::KwDistinct, SyntaxKind::KwAll]))
                })
                && p.parse_result_columns()
                && p.opt(|p| p.parse_from_clause())
                && p.opt(|p| p.parse_where_clause())
                && p.opt(|p| p.parse_group_by_clause())
        })
    }

    /// `VALUES '(' expr (',' expr)* ')' (',' '(' expr (',' expr)* ')')*`
    pub(crate) fn parse_select_core_values(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwValues) {
            return false;
        }
        self.rule(Rule::SelectCoreValues, |p| {
            p.eat(SyntaxKind::KwValues) && p.comma_list(|p| p.parse_values_row())
        })
    }

    /// `'(' expr (',' expr)* ')'`
    fn parse_values_row(&mut self) -> bool {
        self.eat(SyntaxKind::ParenOpen)
            && self.parse_expr_list()
            && self.eat(SyntaxKind::ParenClose)
    }

    /// `('+' | '-')? NUMERIC_LITERAL`
    pub(crate) fn parse_signed_number(&mut self) -> bool {
        self.rule(Rule::SignedNumber, |p| {
            p.opt(|p| p.eat_any(SIGN)) && p.eat(SyntaxKind::NumericLiteral)
        })
    }

    /// `(database_name '.')? table_name`
    pub(crate) fn parse_single_table_stmt_table(&mut self) -> bool {
        self.rule(Rule::SingleTableStmtTable, |p| {
            p.parse_database_prefix() && p.parse_table_name()
        })
    }

    /// `'(' select_stmt ')' (AS? table_alias_name)?`
    pub(crate) fn parse_subquery(&mut self) -> bool {
        if !self.next_is(SyntaxKind::ParenOpen) {
            return false;
        }
        self.rule(Rule::Subquery, |p| {
            p.eat(SyntaxKind::ParenOpen)
                && p.parse_select_stmt()
                && p.eat(SyntaxKind::ParenClose)
                && p.parse_table_alias()
        })
    }

    /// `(CONSTRAINT name)? ((PRIMARY KEY | UNIQUE) '(' indexed_column
    /// (',' indexed_column)* ')' conflict_clause | CHECK '(' expr ')'
    /// | FOREIGN KEY '(' column_name (',' column_name)* ')' foreign_key_clause)`
    pub(crate) fn parse_table_constraint(&mut self) -> bool {
        self.rule(Rule::TableConstraint, |p| {
            p.parse_constraint_name()
                && p.alt(&[
                    |p| {
                        p.alt(&[
                            |p| p.eat_all(&[SyntaxKind::KwPrimary, SyntaxKind::KwKey]),
                            |p| p.eat(SyntaxKind::KwUnique),
                        ]) && p.parse_indexed_column_list()
                            && p.parse_conflict_clause()
                    },
                    |p| p.eat(SyntaxKind::KwCheck) && p.parse_parenthesized_expr(),
                    |p| {
                        p.eat_all(&[SyntaxKind::KwForeign, SyntaxKind::KwKey])
                            && p.parse_column_name_list()
                            && p.parse_foreign_key_clause()
                    },
                ])
        })
    }

    /// `'(' indexed_column (',' indexed_column)* ')'`
    pub(super) fn parse_indexed_column_list(&mut self) -> bool {
        self.eat(SyntaxKind::ParenOpen)
            && self.comma_list(|p| p.parse_indexed_column())
            && self.eat(SyntaxKind::ParenClose)
    }

    /// `from_table | subquery`
    pub(crate) fn parse_table_or_subquery(&mut self) -> bool {
        self.parse_table_or_subquery_node().is_some()
    }

    fn parse_table_or_subquery_node(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::TableOrSubquery, |p| {
            p.alt(&[|p| p.parse_from_table(), |p| p.parse_subquery()])
        })
    }

    /// `name ('(' signed_number ')' | '(' signed_number ',' signed_number ')')?`
    pub(crate) fn parse_type_name(&mut self) -> bool {
        self.rule(Rule::TypeName, |p| {
            p.parse_name()
                && p.opt(|p| {
                    p.alt(&[
                        |p| {
                            p.eat(SyntaxKind::ParenOpen)
                                && p.parse_signed_number()
                                && p.eat(SyntaxKind::ParenClose)
                        },
                        |p| {
                            p.eat(SyntaxKind::ParenOpen)
                                && p.parse_signed_number()
                                && p.eat(SyntaxKind::Comma)
                                && p.parse_signed_number()
                                && p.eat(SyntaxKind::ParenClose)
                        },
                    ])
                })
        })
    }

    /// `WHERE expr`
    pub(crate) fn parse_where_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwWhere) {
            return false;
        }
        self.rule(Rule::WhereClause, |p| {
            p.eat(SyntaxKind::KwWhere) && p.parse_expr(LOOSEST)
        })
    }

    /// `WITH RECURSIVE? with_clause_table (',' with_clause_table)*`
    pub(crate) fn parse_with_clause(&mut self) -> bool {
        if !self.next_is(SyntaxKind::KwWith) {
            return false;
        }
        self.rule(Rule::WithClause, |p| {
            p.eat(SyntaxKind::KwWith)
                && p.opt(|p| p.eat(SyntaxKind::KwRecursive))
                && p.comma_list(|p| p.parse_with_clause_table())
        })
    }

    /// `with_clause_table_def AS '(' select_stmt ')'`
    pub(crate) fn parse_with_clause_table(&mut self) -> bool {
        self.rule(Rule::WithClauseTable, |p| {
            p.parse_with_clause_table_def()
                && p.eat_all(&[SyntaxKind::KwAs, SyntaxKind::ParenOpen])
                && p.parse_select_stmt()
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `table_def_name ('(' column_def_name (',' column_def_name)* ')')?`
    pub(crate) fn parse_with_clause_table_def(&mut self) -> bool {
        self.rule(Rule::WithClauseTableDef, |p| {
            p.parse_table_def_name()
                && p.opt(|p| {
                    p.eat(SyntaxKind::ParenOpen)
                        && p.comma_list(|p| p.parse_column_def_name())
                        && p.eat(SyntaxKind::ParenClose)
                })
        })
    }
}
