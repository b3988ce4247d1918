//! Identifiers.
//!
//! Every named thing in the grammar is a plain `name` underneath. The
//! wrappers exist so the tree says what the name refers to.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::NAME;
use crate::parser::rule::Rule;

macro_rules! name_rules {
    ($($method:ident => $rule:ident,)*) => {
        impl Parser<'_> {
            $(
                pub(crate) fn $method(&mut self) -> bool {
                    self.rule(Rule::$rule, |p| p.parse_name())
                }
            )*
        }
    };
}

name_rules! {
    parse_collation_name => CollationName,
    parse_column_alias_name => ColumnAliasName,
    parse_column_def_name => ColumnDefName,
    parse_column_name => ColumnName,
    parse_database_name => DatabaseName,
    parse_foreign_table => ForeignTable,
    parse_function_name => FunctionName,
    parse_module_argument => ModuleArgument,
    parse_module_name => ModuleName,
    parse_pragma_name => PragmaName,
    parse_savepoint_name => SavepointName,
    parse_table_alias_name => TableAliasName,
    parse_table_def_name => TableDefName,
    parse_table_name => TableName,
    parse_table_or_index_name => TableOrIndexName,
    parse_trigger_name => TriggerName,
    parse_view_name => ViewName,
}

impl Parser<'_> {
    /// `IDENTIFIER | BRACKET_LITERAL | BACKTICK_LITERAL | string_literal`
    pub(crate) fn parse_name(&mut self) -> bool {
        self.rule(Rule::Name, |p| p.eat_any(NAME))
    }

    /// Index names have no node of their own.
    pub(crate) fn parse_index_name(&mut self) -> bool {
        self.rule(Rule::IndexName, |p| p.parse_name())
    }

    /// `(database_name '.')?`
    pub(super) fn parse_database_prefix(&mut self) -> bool {
        self.opt(|p| p.parse_database_name() && p.eat(SyntaxKind::Dot))
    }
}
