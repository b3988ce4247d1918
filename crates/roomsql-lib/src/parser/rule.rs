//! Grammar rule identifiers and the fragment dispatch table.

use std::fmt;
use std::str::FromStr;

use super::core::Parser;
use super::cst::{SyntaxKind, TokenSet, token_sets};
use super::grammar::expressions::LOOSEST;
use crate::Error;

/// A rule body over the parser. Used for alternation arms and dispatch tables.
pub(crate) type RuleFn = for<'p, 'src> fn(&'p mut Parser<'src>) -> bool;

macro_rules! rules {
    ($($variant:ident = $name:literal => $kind:expr,)*) => {
        /// Non-terminals of the grammar, named after their snake_case productions.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant,)*
        }

        impl Rule {
            pub const ALL: &'static [Rule] = &[$(Rule::$variant,)*];

            /// Grammar name, as accepted by [`FromStr`].
            pub fn name(self) -> &'static str {
                match self {
                    $(Rule::$variant => $name,)*
                }
            }

            /// Node the rule wraps its input in, `None` for rules that splice
            /// their children into the caller's node.
            pub fn node_kind(self) -> Option<SyntaxKind> {
                match self {
                    $(Rule::$variant => $kind,)*
                }
            }
        }
    };
}

rules! {
    // Entry points and unlabeled helpers
    SqlStmtList = "sql_stmt_list" => None,
    Stmt = "stmt" => None,
    Expr = "expr" => None,
    Name = "name" => None,
    IndexName = "index_name" => None,

    // Statements
    AlterTableStmt = "alter_table_stmt" => Some(SyntaxKind::AlterTableStmt),
    AnalyzeStmt = "analyze_stmt" => Some(SyntaxKind::AnalyzeStmt),
    AttachStmt = "attach_stmt" => Some(SyntaxKind::AttachStmt),
    BeginStmt = "begin_stmt" => Some(SyntaxKind::BeginStmt),
    CommitStmt = "commit_stmt" => Some(SyntaxKind::CommitStmt),
    CreateIndexStmt = "create_index_stmt" => Some(SyntaxKind::CreateIndexStmt),
    CreateTableStmt = "create_table_stmt" => Some(SyntaxKind::CreateTableStmt),
    CreateTriggerStmt = "create_trigger_stmt" => Some(SyntaxKind::CreateTriggerStmt),
    CreateViewStmt = "create_view_stmt" => Some(SyntaxKind::CreateViewStmt),
    CreateVirtualTableStmt = "create_virtual_table_stmt" => Some(SyntaxKind::CreateVirtualTableStmt),
    DeleteStmt = "delete_stmt" => Some(SyntaxKind::DeleteStmt),
    DetachStmt = "detach_stmt" => Some(SyntaxKind::DetachStmt),
    DropIndexStmt = "drop_index_stmt" => Some(SyntaxKind::DropIndexStmt),
    DropTableStmt = "drop_table_stmt" => Some(SyntaxKind::DropTableStmt),
    DropTriggerStmt = "drop_trigger_stmt" => Some(SyntaxKind::DropTriggerStmt),
    DropViewStmt = "drop_view_stmt" => Some(SyntaxKind::DropViewStmt),
    InsertStmt = "insert_stmt" => Some(SyntaxKind::InsertStmt),
    PragmaStmt = "pragma_stmt" => Some(SyntaxKind::PragmaStmt),
    ReindexStmt = "reindex_stmt" => Some(SyntaxKind::ReindexStmt),
    ReleaseStmt = "release_stmt" => Some(SyntaxKind::ReleaseStmt),
    RollbackStmt = "rollback_stmt" => Some(SyntaxKind::RollbackStmt),
    SavepointStmt = "savepoint_stmt" => Some(SyntaxKind::SavepointStmt),
    SelectStmt = "select_stmt" => Some(SyntaxKind::SelectStmt),
    UpdateStmt = "update_stmt" => Some(SyntaxKind::UpdateStmt),
    VacuumStmt = "vacuum_stmt" => Some(SyntaxKind::VacuumStmt),

    // Clauses
    BindParameter = "bind_parameter" => Some(SyntaxKind::BindParameter),
    ColumnConstraint = "column_constraint" => Some(SyntaxKind::ColumnConstraint),
    ColumnDef = "column_def" => Some(SyntaxKind::ColumnDef),
    CompoundOperator = "compound_operator" => Some(SyntaxKind::CompoundOperator),
    ConflictClause = "conflict_clause" => Some(SyntaxKind::ConflictClause),
    ErrorMessage = "error_message" => Some(SyntaxKind::ErrorMessage),
    ForeignKeyClause = "foreign_key_clause" => Some(SyntaxKind::ForeignKeyClause),
    FromClause = "from_clause" => Some(SyntaxKind::FromClause),
    FromTable = "from_table" => Some(SyntaxKind::FromTable),
    GroupByClause = "group_by_clause" => Some(SyntaxKind::GroupByClause),
    IndexedColumn = "indexed_column" => Some(SyntaxKind::IndexedColumn),
    InsertColumns = "insert_columns" => Some(SyntaxKind::InsertColumns),
    JoinClause = "join_clause" => Some(SyntaxKind::JoinClause),
    JoinConstraint = "join_constraint" => Some(SyntaxKind::JoinConstraint),
    JoinOperator = "join_operator" => Some(SyntaxKind::JoinOperator),
    LimitClause = "limit_clause" => Some(SyntaxKind::LimitClause),
    LiteralValue = "literal_value" => Some(SyntaxKind::LiteralValue),
    OrderClause = "order_clause" => Some(SyntaxKind::OrderClause),
    OrderingTerm = "ordering_term" => Some(SyntaxKind::OrderingTerm),
    PragmaValue = "pragma_value" => Some(SyntaxKind::PragmaValue),
    ResultColumn = "result_column" => Some(SyntaxKind::ResultColumn),
    ResultColumns = "result_columns" => Some(SyntaxKind::ResultColumns),
    SelectCore = "select_core" => Some(SyntaxKind::SelectCore),
    SelectCoreSelect = "select_core_select" => Some(SyntaxKind::SelectCoreSelect),
    SelectCoreValues = "select_core_values" => Some(SyntaxKind::SelectCoreValues),
    SignedNumber = "signed_number" => Some(SyntaxKind::SignedNumber),
    SingleTableStmtTable = "single_table_stmt_table" => Some(SyntaxKind::SingleTableStmtTable),
    Subquery = "subquery" => Some(SyntaxKind::Subquery),
    TableConstraint = "table_constraint" => Some(SyntaxKind::TableConstraint),
    TableOrSubquery = "table_or_subquery" => Some(SyntaxKind::TableOrSubquery),
    TypeName = "type_name" => Some(SyntaxKind::TypeName),
    WhereClause = "where_clause" => Some(SyntaxKind::WhereClause),
    WithClause = "with_clause" => Some(SyntaxKind::WithClause),
    WithClauseTable = "with_clause_table" => Some(SyntaxKind::WithClauseTable),
    WithClauseTableDef = "with_clause_table_def" => Some(SyntaxKind::WithClauseTableDef),

    // Names
    CollationName = "collation_name" => Some(SyntaxKind::CollationName),
    ColumnAliasName = "column_alias_name" => Some(SyntaxKind::ColumnAliasName),
    ColumnDefName = "column_def_name" => Some(SyntaxKind::ColumnDefName),
    ColumnName = "column_name" => Some(SyntaxKind::ColumnName),
    DatabaseName = "database_name" => Some(SyntaxKind::DatabaseName),
    ForeignTable = "foreign_table" => Some(SyntaxKind::ForeignTable),
    FunctionName = "function_name" => Some(SyntaxKind::FunctionName),
    ModuleArgument = "module_argument" => Some(SyntaxKind::ModuleArgument),
    ModuleName = "module_name" => Some(SyntaxKind::ModuleName),
    PragmaName = "pragma_name" => Some(SyntaxKind::PragmaName),
    SavepointName = "savepoint_name" => Some(SyntaxKind::SavepointName),
    TableAliasName = "table_alias_name" => Some(SyntaxKind::TableAliasName),
    TableDefName = "table_def_name" => Some(SyntaxKind::TableDefName),
    TableName = "table_name" => Some(SyntaxKind::TableName),
    TableOrIndexName = "table_or_index_name" => Some(SyntaxKind::TableOrIndexName),
    TriggerName = "trigger_name" => Some(SyntaxKind::TriggerName),
    ViewName = "view_name" => Some(SyntaxKind::ViewName),

    // Expressions
    AddExpr = "add_expr" => Some(SyntaxKind::AddExpr),
    AndExpr = "and_expr" => Some(SyntaxKind::AndExpr),
    BetweenExpr = "between_expr" => Some(SyntaxKind::BetweenExpr),
    BitExpr = "bit_expr" => Some(SyntaxKind::BitExpr),
    CaseExpr = "case_expr" => Some(SyntaxKind::CaseExpr),
    CastExpr = "cast_expr" => Some(SyntaxKind::CastExpr),
    CollateExpr = "collate_expr" => Some(SyntaxKind::CollateExpr),
    ColumnRefExpr = "column_ref_expr" => Some(SyntaxKind::ColumnRefExpr),
    ComparisonExpr = "comparison_expr" => Some(SyntaxKind::ComparisonExpr),
    ConcatExpr = "concat_expr" => Some(SyntaxKind::ConcatExpr),
    EquivalenceExpr = "equivalence_expr" => Some(SyntaxKind::EquivalenceExpr),
    ExistsExpr = "exists_expr" => Some(SyntaxKind::ExistsExpr),
    FunctionCallExpr = "function_call_expr" => Some(SyntaxKind::FunctionCallExpr),
    InExpr = "in_expr" => Some(SyntaxKind::InExpr),
    IsnullExpr = "isnull_expr" => Some(SyntaxKind::IsnullExpr),
    LikeExpr = "like_expr" => Some(SyntaxKind::LikeExpr),
    LiteralExpr = "literal_expr" => Some(SyntaxKind::LiteralExpr),
    MulExpr = "mul_expr" => Some(SyntaxKind::MulExpr),
    OrExpr = "or_expr" => Some(SyntaxKind::OrExpr),
    ParenExpr = "paren_expr" => Some(SyntaxKind::ParenExpr),
    RaiseFunctionExpr = "raise_function_expr" => Some(SyntaxKind::RaiseFunctionExpr),
    UnaryExpr = "unary_expr" => Some(SyntaxKind::UnaryExpr),
}

impl Rule {
    /// Rules reported by name when they fail where they start, instead of
    /// listing every token they could have begun with.
    pub(crate) fn is_labeled(self) -> bool {
        matches!(
            self,
            Rule::Stmt
                | Rule::Expr
                | Rule::Name
                | Rule::IndexName
                | Rule::BindParameter
                | Rule::LiteralValue
                | Rule::SignedNumber
                | Rule::TypeName
                | Rule::ErrorMessage
        ) || self.is_name()
    }

    fn is_name(self) -> bool {
        matches!(
            self,
            Rule::CollationName
                | Rule::ColumnAliasName
                | Rule::ColumnDefName
                | Rule::ColumnName
                | Rule::DatabaseName
                | Rule::ForeignTable
                | Rule::FunctionName
                | Rule::ModuleArgument
                | Rule::ModuleName
                | Rule::PragmaName
                | Rule::SavepointName
                | Rule::TableAliasName
                | Rule::TableDefName
                | Rule::TableName
                | Rule::TableOrIndexName
                | Rule::TriggerName
                | Rule::ViewName
        )
    }

    pub fn is_statement(self) -> bool {
        self.name().ends_with("_stmt")
    }

    /// Human-readable name for diagnostics.
    pub fn describe(self) -> String {
        match self {
            Rule::Expr => "expression".to_string(),
            Rule::Stmt => "statement".to_string(),
            Rule::LiteralValue => "literal".to_string(),
            Rule::SignedNumber => "number".to_string(),
            Rule::ForeignTable => "table name".to_string(),
            _ => self.name().replace('_', " "),
        }
    }

    /// Tokens skipped into the error node when the rule breaks after its pin.
    pub(crate) fn recovery(self) -> TokenSet {
        if self.is_statement() {
            token_sets::STMT_RECOVERY
        } else {
            TokenSet::EMPTY
        }
    }

    /// Dispatch table for parsing a rule in isolation.
    pub(crate) fn entry(self) -> RuleFn {
        match self {
            Rule::SqlStmtList => |p| {
                p.parse_statement_list();
                true
            },
            Rule::Stmt => |p| p.parse_stmt(),
            Rule::Name => |p| p.parse_name(),
            Rule::IndexName => |p| p.parse_index_name(),
            Rule::AlterTableStmt => |p| p.parse_alter_table_stmt(),
            Rule::AnalyzeStmt => |p| p.parse_analyze_stmt(),
            Rule::AttachStmt => |p| p.parse_attach_stmt(),
            Rule::BeginStmt => |p| p.parse_begin_stmt(),
            Rule::CommitStmt => |p| p.parse_commit_stmt(),
            Rule::CreateIndexStmt => |p| p.parse_create_index_stmt(),
            Rule::CreateTableStmt => |p| p.parse_create_table_stmt(),
            Rule::CreateTriggerStmt => |p| p.parse_create_trigger_stmt(),
            Rule::CreateViewStmt => |p| p.parse_create_view_stmt(),
            Rule::CreateVirtualTableStmt => |p| p.parse_create_virtual_table_stmt(),
            Rule::DeleteStmt => |p| p.parse_delete_stmt(),
            Rule::DetachStmt => |p| p.parse_detach_stmt(),
            Rule::DropIndexStmt => |p| p.parse_drop_index_stmt(),
            Rule::DropTableStmt => |p| p.parse_drop_table_stmt(),
            Rule::DropTriggerStmt => |p| p.parse_drop_trigger_stmt(),
            Rule::DropViewStmt => |p| p.parse_drop_view_stmt(),
            Rule::InsertStmt => |p| p.parse_insert_stmt(),
            Rule::PragmaStmt => |p| p.parse_pragma_stmt(),
            Rule::ReindexStmt => |p| p.parse_reindex_stmt(),
            Rule::ReleaseStmt => |p| p.parse_release_stmt(),
            Rule::RollbackStmt => |p| p.parse_rollback_stmt(),
            Rule::SavepointStmt => |p| p.parse_savepoint_stmt(),
            Rule::SelectStmt => |p| p.parse_select_stmt(),
            Rule::UpdateStmt => |p| p.parse_update_stmt(),
            Rule::VacuumStmt => |p| p.parse_vacuum_stmt(),
            Rule::BindParameter => |p| p.parse_bind_parameter(),
            Rule::ColumnConstraint => |p| p.parse_column_constraint(),
            Rule::ColumnDef => |p| p.parse_column_def(),
            Rule::CompoundOperator => |p| p.parse_compound_operator(),
            Rule::ConflictClause => |p| p.parse_conflict_clause(),
            Rule::ErrorMessage => |p| p.parse_error_message(),
            Rule::ForeignKeyClause => |p| p.parse_foreign_key_clause(),
            Rule::FromClause => |p| p.parse_from_clause(),
            Rule::FromTable => |p| p.parse_from_table(),
            Rule::GroupByClause => |p| p.parse_group_by_clause(),
            Rule::IndexedColumn => |p| p.parse_indexed_column(),
            Rule::InsertColumns => |p| p.parse_insert_columns(),
            Rule::JoinClause => |p| p.parse_join_clause(),
            Rule::JoinConstraint => |p| p.parse_join_constraint(),
            Rule::JoinOperator => |p| p.parse_join_operator(),
            Rule::LimitClause => |p| p.parse_limit_clause(),
            Rule::LiteralValue => |p| p.parse_literal_value(),
            Rule::OrderClause => |p| p.parse_order_clause(),
            Rule::OrderingTerm => |p| p.parse_ordering_term(),
            Rule::PragmaValue => |p| p.parse_pragma_value(),
            Rule::ResultColumn => |p| p.parse_result_column(),
            Rule::ResultColumns => |p| p.parse_result_columns(),
            Rule::SelectCore => |p| p.parse_select_core(),
            Rule::SelectCoreSelect => |p| p.parse_select_core_select(),
            Rule::SelectCoreValues => |p| p.parse_select_core_values(),
            Rule::SignedNumber => |p| p.parse_signed_number(),
            Rule::SingleTableStmtTable => |p| p.parse_single_table_stmt_table(),
            Rule::Subquery => |p| p.parse_subquery(),
            Rule::TableConstraint => |p| p.parse_table_constraint(),
            Rule::TableOrSubquery => |p| p.parse_table_or_subquery(),
            Rule::TypeName => |p| p.parse_type_name(),
            Rule::WhereClause => |p| p.parse_where_clause(),
            Rule::WithClause => |p| p.parse_with_clause(),
            Rule::WithClauseTable => |p| p.parse_with_clause_table(),
            Rule::WithClauseTableDef => |p| p.parse_with_clause_table_def(),
            Rule::CollationName => |p| p.parse_collation_name(),
            Rule::ColumnAliasName => |p| p.parse_column_alias_name(),
            Rule::ColumnDefName => |p| p.parse_column_def_name(),
            Rule::ColumnName => |p| p.parse_column_name(),
            Rule::DatabaseName => |p| p.parse_database_name(),
            Rule::ForeignTable => |p| p.parse_foreign_table(),
            Rule::FunctionName => |p| p.parse_function_name(),
            Rule::ModuleArgument => |p| p.parse_module_argument(),
            Rule::ModuleName => |p| p.parse_module_name(),
            Rule::PragmaName => |p| p.parse_pragma_name(),
            Rule::SavepointName => |p| p.parse_savepoint_name(),
            Rule::TableAliasName => |p| p.parse_table_alias_name(),
            Rule::TableDefName => |p| p.parse_table_def_name(),
            Rule::TableName => |p| p.parse_table_name(),
            Rule::TableOrIndexName => |p| p.parse_table_or_index_name(),
            Rule::TriggerName => |p| p.parse_trigger_name(),
            Rule::ViewName => |p| p.parse_view_name(),
            Rule::Expr
            | Rule::AddExpr
            | Rule::AndExpr
            | Rule::BetweenExpr
            | Rule::BitExpr
            | Rule::CaseExpr
            | Rule::CastExpr
            | Rule::CollateExpr
            | Rule::ColumnRefExpr
            | Rule::ComparisonExpr
            | Rule::ConcatExpr
            | Rule::EquivalenceExpr
            | Rule::ExistsExpr
            | Rule::FunctionCallExpr
            | Rule::InExpr
            | Rule::IsnullExpr
            | Rule::LikeExpr
            | Rule::LiteralExpr
            | Rule::MulExpr
            | Rule::OrExpr
            | Rule::ParenExpr
            | Rule::RaiseFunctionExpr
            | Rule::UnaryExpr => |p| p.parse_expr(LOOSEST),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| Error::UnknownRule(s.to_string()))
    }
}
