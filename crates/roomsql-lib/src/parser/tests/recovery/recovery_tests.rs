use crate::parser::{Parse, Rule, parse_statements};

#[test]
fn broken_statement_does_not_take_down_the_next() {
    let input = "CREATE TABLE t (a INT,) ; SELECT 1;";

    let res = Parse::expect_invalid(Rule::SqlStmtList, input);

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      CreateTableStmt
        KwCreate "CREATE"
        KwTable "TABLE"
        TableName
          Identifier "t"
        ParenOpen "("
        ColumnDef
          ColumnName
            Identifier "a"
          TypeName
            Identifier "INT"
        Error
          Comma ","
          ParenClose ")"
      Semicolon ";"
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
      Semicolon ";"
    "#);
    insta::assert_snapshot!(res.dump_diagnostics(input), @r"
    error: expected column name, `CONSTRAINT`, `PRIMARY`, `UNIQUE`, `CHECK` or `FOREIGN`, found `)`
      |
    1 | CREATE TABLE t (a INT,) ; SELECT 1;
      |                       ^
    ");
}

#[test]
fn unclosed_column_list_keeps_its_definitions() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "CREATE TABLE t (a INT, b TEXT");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      CreateTableStmt
        KwCreate "CREATE"
        KwTable "TABLE"
        TableName
          Identifier "t"
        ParenOpen "("
        ColumnDef
          ColumnName
            Identifier "a"
          TypeName
            Identifier "INT"
        Comma ","
        ColumnDef
          ColumnName
            Identifier "b"
          TypeName
            Identifier "TEXT"
        Error
    "#);
    assert_eq!(res.diagnostics().error_count(), 1);
}

#[test]
fn missing_result_columns() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "SELECT FROM t");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            Error
      Error
        KwFrom "FROM"
        Identifier "t"
    "#);
    insta::assert_snapshot!(res.dump_diagnostics_raw(), @r"
    7..11: expected `ALL`, `DISTINCT`, `*`, table name or expression, found `FROM`
    ");
}

#[test]
fn unknown_statement_is_skipped_to_the_separator() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "FOO bar; SELECT 1");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      Error
        Identifier "FOO"
        Identifier "bar"
      Semicolon ";"
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
    "#);
    insta::assert_snapshot!(res.dump_diagnostics_raw(), @r"
    0..3: expected statement, found `FOO`
    ");
}

#[test]
fn missing_right_operand() {
    let res = Parse::expect_invalid(Rule::Expr, "1 +");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      AddExpr
        LiteralExpr
          LiteralValue
            NumericLiteral "1"
        Plus "+"
        Error
    "#);
    insta::assert_snapshot!(res.dump_diagnostics_raw(), @r"
    3..3: expected expression, found end of input
    ");
}

#[test]
fn missing_separator_between_statements() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "SELECT 1 2");

    let diagnostics = res.diagnostics().records();
    assert_eq!(diagnostics.len(), 1);
    assert!(
        diagnostics[0].message.ends_with(", found `2`"),
        "{}",
        diagnostics[0].message
    );
    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
      Error
        NumericLiteral "2"
    "#);
}

#[test]
fn unclosed_parenthesis() {
    let res = Parse::expect_invalid(Rule::Expr, "(1 + 2");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      ParenExpr
        ParenOpen "("
        AddExpr
          LiteralExpr
            LiteralValue
              NumericLiteral "1"
          Plus "+"
          LiteralExpr
            LiteralValue
              NumericLiteral "2"
        Error
    "#);
    insta::assert_snapshot!(res.dump_diagnostics_raw(), @r"
    6..6: expected `)`, found end of input
    ");
}

#[test]
fn garbage_character() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "SELECT 1 # 2");

    insta::assert_snapshot!(res.dump_cst(), @r##"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
      Error
        Garbage "#"
        NumericLiteral "2"
    "##);
}

#[test]
fn pinned_statement_keeps_its_node() {
    let res = Parse::expect_invalid(Rule::SqlStmtList, "DROP TABLE; SELECT 1");

    insta::assert_snapshot!(res.dump_cst(), @r#"
    Root
      DropTableStmt
        KwDrop "DROP"
        KwTable "TABLE"
        Error
      Semicolon ";"
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
    "#);
    insta::assert_snapshot!(res.dump_diagnostics_raw(), @r"
    10..11: expected `IF`, database name or table name, found `;`
    ");
}

#[test]
fn every_statement_after_a_failure_is_still_parsed() {
    let res = parse_statements("DELETE FROM; UPDATE; VACUUM").unwrap();

    assert_eq!(res.diagnostics().error_count(), 2);
    let kinds: Vec<String> = res
        .syntax()
        .children()
        .map(|node| format!("{:?}", node.kind()))
        .collect();
    assert_eq!(kinds, ["DeleteStmt", "UpdateStmt", "VacuumStmt"]);
}
