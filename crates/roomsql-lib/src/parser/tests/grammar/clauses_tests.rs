use crate::parser::{Parse, Rule};

#[test]
fn column_def_with_named_primary_key() {
    let input = "id INTEGER CONSTRAINT pk PRIMARY KEY DESC ON CONFLICT REPLACE";

    let res = Parse::expect_valid_rule(Rule::ColumnDef, input);

    insta::assert_snapshot!(res, @r#"
    Root
      ColumnDef
        ColumnName
          Identifier "id"
        TypeName
          Identifier "INTEGER"
        ColumnConstraint
          KwConstraint "CONSTRAINT"
          Identifier "pk"
          KwPrimary "PRIMARY"
          KwKey "KEY"
          KwDesc "DESC"
          ConflictClause
            KwOn "ON"
            KwConflict "CONFLICT"
            KwReplace "REPLACE"
    "#);
}

#[test]
fn column_def_without_type() {
    let res = Parse::expect_valid_rule(Rule::ColumnDef, "a");

    insta::assert_snapshot!(res, @r#"
    Root
      ColumnDef
        ColumnName
          Identifier "a"
    "#);
}

#[test]
fn check_constraint() {
    let res = Parse::expect_valid_rule(Rule::ColumnConstraint, "CHECK (x > 0)");

    insta::assert_snapshot!(res, @r#"
    Root
      ColumnConstraint
        KwCheck "CHECK"
        ParenOpen "("
        ComparisonExpr
          ColumnRefExpr
            ColumnName
              Identifier "x"
          Gt ">"
          LiteralExpr
            LiteralValue
              NumericLiteral "0"
        ParenClose ")"
    "#);
}

#[test]
fn foreign_key_with_match_and_deferral() {
    let input = "REFERENCES parent (id) MATCH simple NOT DEFERRABLE INITIALLY DEFERRED";

    let res = Parse::expect_valid_rule(Rule::ForeignKeyClause, input);

    insta::assert_snapshot!(res, @r#"
    Root
      ForeignKeyClause
        KwReferences "REFERENCES"
        ForeignTable
          Identifier "parent"
        ParenOpen "("
        ColumnName
          Identifier "id"
        ParenClose ")"
        KwMatch "MATCH"
        Identifier "simple"
        KwNot "NOT"
        KwDeferrable "DEFERRABLE"
        KwInitially "INITIALLY"
        KwDeferred "DEFERRED"
    "#);
}

#[test]
fn from_clause_with_natural_and_comma_joins() {
    let input = "FROM a NATURAL JOIN b USING (id), c INDEXED BY c_idx";

    let res = Parse::expect_valid_rule(Rule::FromClause, input);

    insta::assert_snapshot!(res, @r#"
    Root
      FromClause
        KwFrom "FROM"
        JoinClause
          TableOrSubquery
            FromTable
              TableName
                Identifier "a"
          JoinOperator
            KwNatural "NATURAL"
            KwJoin "JOIN"
          TableOrSubquery
            FromTable
              TableName
                Identifier "b"
          JoinConstraint
            KwUsing "USING"
            ParenOpen "("
            ColumnName
              Identifier "id"
            ParenClose ")"
          JoinOperator
            Comma ","
          TableOrSubquery
            FromTable
              TableName
                Identifier "c"
              KwIndexed "INDEXED"
              KwBy "BY"
              Identifier "c_idx"
    "#);
}

#[test]
fn from_table_with_alias_without_as() {
    let res = Parse::expect_valid_rule(Rule::FromTable, "users u NOT INDEXED");

    insta::assert_snapshot!(res, @r#"
    Root
      FromTable
        TableName
          Identifier "users"
        TableAliasName
          Identifier "u"
        KwNot "NOT"
        KwIndexed "INDEXED"
    "#);
}

#[test]
fn type_name_with_two_arguments() {
    let res = Parse::expect_valid_rule(Rule::TypeName, "DECIMAL(10, 2)");

    insta::assert_snapshot!(res, @r#"
    Root
      TypeName
        Identifier "DECIMAL"
        ParenOpen "("
        SignedNumber
          NumericLiteral "10"
        Comma ","
        SignedNumber
          NumericLiteral "2"
        ParenClose ")"
    "#);
}

#[test]
fn type_name_with_one_argument() {
    let res = Parse::expect_valid_rule(Rule::TypeName, "VARCHAR(255)");

    insta::assert_snapshot!(res, @r#"
    Root
      TypeName
        Identifier "VARCHAR"
        ParenOpen "("
        SignedNumber
          NumericLiteral "255"
        ParenClose ")"
    "#);
}

#[test]
fn order_clause_collation_belongs_to_the_expression() {
    let input = "ORDER BY name COLLATE nocase ASC, 2";

    let res = Parse::expect_valid_rule(Rule::OrderClause, input);

    insta::assert_snapshot!(res, @r#"
    Root
      OrderClause
        KwOrder "ORDER"
        KwBy "BY"
        OrderingTerm
          CollateExpr
            ColumnRefExpr
              ColumnName
                Identifier "name"
            KwCollate "COLLATE"
            CollationName
              Identifier "nocase"
          KwAsc "ASC"
        Comma ","
        OrderingTerm
          LiteralExpr
            LiteralValue
              NumericLiteral "2"
    "#);
}

#[test]
fn limit_with_comma_offset() {
    let res = Parse::expect_valid_rule(Rule::LimitClause, "LIMIT 5, 10");

    insta::assert_snapshot!(res, @r#"
    Root
      LimitClause
        KwLimit "LIMIT"
        LiteralExpr
          LiteralValue
            NumericLiteral "5"
        Comma ","
        LiteralExpr
          LiteralValue
            NumericLiteral "10"
    "#);
}

#[test]
fn table_constraint_unique() {
    let input = "UNIQUE (a, b DESC) ON CONFLICT ABORT";

    let res = Parse::expect_valid_rule(Rule::TableConstraint, input);

    insta::assert_snapshot!(res, @r#"
    Root
      TableConstraint
        KwUnique "UNIQUE"
        ParenOpen "("
        IndexedColumn
          ColumnName
            Identifier "a"
        Comma ","
        IndexedColumn
          ColumnName
            Identifier "b"
          KwDesc "DESC"
        ParenClose ")"
        ConflictClause
          KwOn "ON"
          KwConflict "CONFLICT"
          KwAbort "ABORT"
    "#);
}

#[test]
fn empty_conflict_clause_builds_no_node() {
    let res = Parse::expect_valid_rule(Rule::ConflictClause, "");

    assert_eq!(res, "Root\n");
}

#[test]
fn bind_parameter_forms() {
    for input in ["?", "?12", ":name", "@name", "$name"] {
        let res = Parse::expect_valid_rule(Rule::BindParameter, input);
        assert_eq!(res, format!("Root\n  BindParameter\n    ParameterName {input:?}\n"));
    }
}
