use crate::parser::Parse;
use indoc::indoc;

#[test]
fn select_with_from_and_where() {
    let input = "SELECT a, b FROM t WHERE a > 1";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                ColumnRefExpr
                  ColumnName
                    Identifier "a"
              Comma ","
              ResultColumn
                ColumnRefExpr
                  ColumnName
                    Identifier "b"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "t"
            WhereClause
              KwWhere "WHERE"
              ComparisonExpr
                ColumnRefExpr
                  ColumnName
                    Identifier "a"
                Gt ">"
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
    "#);
}

#[test]
fn select_star_of_table() {
    let input = "SELECT t.* FROM t";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                TableName
                  Identifier "t"
                Dot "."
                Star "*"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "t"
    "#);
}

#[test]
fn select_with_subquery_group_by_and_having() {
    let input = "SELECT DISTINCT t.a AS x, count(*) FROM (SELECT a FROM u) AS t GROUP BY t.a HAVING count(*) > 1";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            KwDistinct "DISTINCT"
            ResultColumns
              ResultColumn
                ColumnRefExpr
                  TableName
                    Identifier "t"
                  Dot "."
                  ColumnName
                    Identifier "a"
                KwAs "AS"
                ColumnAliasName
                  Identifier "x"
              Comma ","
              ResultColumn
                FunctionCallExpr
                  FunctionName
                    Identifier "count"
                  ParenOpen "("
                  Star "*"
                  ParenClose ")"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                Subquery
                  ParenOpen "("
                  SelectStmt
                    SelectCore
                      SelectCoreSelect
                        KwSelect "SELECT"
                        ResultColumns
                          ResultColumn
                            ColumnRefExpr
                              ColumnName
                                Identifier "a"
                        FromClause
                          KwFrom "FROM"
                          TableOrSubquery
                            FromTable
                              TableName
                                Identifier "u"
                  ParenClose ")"
                  KwAs "AS"
                  TableAliasName
                    Identifier "t"
            GroupByClause
              KwGroup "GROUP"
              KwBy "BY"
              ColumnRefExpr
                TableName
                  Identifier "t"
                Dot "."
                ColumnName
                  Identifier "a"
              KwHaving "HAVING"
              ComparisonExpr
                FunctionCallExpr
                  FunctionName
                    Identifier "count"
                  ParenOpen "("
                  Star "*"
                  ParenClose ")"
                Gt ">"
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
    "#);
}

#[test]
fn compound_select_with_order_and_limit() {
    let input = "SELECT a FROM t UNION ALL SELECT b FROM u ORDER BY 1 DESC LIMIT 10 OFFSET 5";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                ColumnRefExpr
                  ColumnName
                    Identifier "a"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "t"
        CompoundOperator
          KwUnion "UNION"
          KwAll "ALL"
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                ColumnRefExpr
                  ColumnName
                    Identifier "b"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "u"
        OrderClause
          KwOrder "ORDER"
          KwBy "BY"
          OrderingTerm
            LiteralExpr
              LiteralValue
                NumericLiteral "1"
            KwDesc "DESC"
        LimitClause
          KwLimit "LIMIT"
          LiteralExpr
            LiteralValue
              NumericLiteral "10"
          KwOffset "OFFSET"
          LiteralExpr
            LiteralValue
              NumericLiteral "5"
    "#);
}

#[test]
fn select_with_join() {
    let input = "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                Star "*"
            FromClause
              KwFrom "FROM"
              JoinClause
                TableOrSubquery
                  FromTable
                    TableName
                      Identifier "a"
                JoinOperator
                  KwLeft "LEFT"
                  KwOuter "OUTER"
                  KwJoin "JOIN"
                TableOrSubquery
                  FromTable
                    TableName
                      Identifier "b"
                JoinConstraint
                  KwOn "ON"
                  EquivalenceExpr
                    ColumnRefExpr
                      TableName
                        Identifier "a"
                      Dot "."
                      ColumnName
                        Identifier "id"
                    Eq "="
                    ColumnRefExpr
                      TableName
                        Identifier "b"
                      Dot "."
                      ColumnName
                        Identifier "id"
    "#);
}

#[test]
fn values_statement() {
    let input = "VALUES (1, 2), (3, 4)";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreValues
            KwValues "VALUES"
            ParenOpen "("
            LiteralExpr
              LiteralValue
                NumericLiteral "1"
            Comma ","
            LiteralExpr
              LiteralValue
                NumericLiteral "2"
            ParenClose ")"
            Comma ","
            ParenOpen "("
            LiteralExpr
              LiteralValue
                NumericLiteral "3"
            Comma ","
            LiteralExpr
              LiteralValue
                NumericLiteral "4"
            ParenClose ")"
    "#);
}

#[test]
fn recursive_with_clause() {
    let input = "WITH RECURSIVE cnt(x) AS (SELECT 1) SELECT x FROM cnt";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        WithClause
          KwWith "WITH"
          KwRecursive "RECURSIVE"
          WithClauseTable
            WithClauseTableDef
              TableDefName
                Identifier "cnt"
              ParenOpen "("
              ColumnDefName
                Identifier "x"
              ParenClose ")"
            KwAs "AS"
            ParenOpen "("
            SelectStmt
              SelectCore
                SelectCoreSelect
                  KwSelect "SELECT"
                  ResultColumns
                    ResultColumn
                      LiteralExpr
                        LiteralValue
                          NumericLiteral "1"
            ParenClose ")"
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                ColumnRefExpr
                  ColumnName
                    Identifier "x"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "cnt"
    "#);
}

#[test]
fn insert_values() {
    let input = "INSERT INTO t (a, b) VALUES (1, 'x')";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      InsertStmt
        KwInsert "INSERT"
        KwInto "INTO"
        SingleTableStmtTable
          TableName
            Identifier "t"
        InsertColumns
          ParenOpen "("
          ColumnName
            Identifier "a"
          Comma ","
          ColumnName
            Identifier "b"
          ParenClose ")"
        SelectCoreValues
          KwValues "VALUES"
          ParenOpen "("
          LiteralExpr
            LiteralValue
              NumericLiteral "1"
          Comma ","
          ColumnRefExpr
            ColumnName
              SingleQuoteString "'x'"
          ParenClose ")"
    "#);
}

#[test]
fn insert_default_values() {
    let input = "INSERT OR IGNORE INTO main.t DEFAULT VALUES";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      InsertStmt
        KwInsert "INSERT"
        KwOr "OR"
        KwIgnore "IGNORE"
        KwInto "INTO"
        SingleTableStmtTable
          DatabaseName
            Identifier "main"
          Dot "."
          TableName
            Identifier "t"
        KwDefault "DEFAULT"
        KwValues "VALUES"
    "#);
}

#[test]
fn update_with_conflict_resolution() {
    let input = "UPDATE OR REPLACE t SET a = 1, b = b + 1 WHERE id = 2";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      UpdateStmt
        KwUpdate "UPDATE"
        KwOr "OR"
        KwReplace "REPLACE"
        SingleTableStmtTable
          TableName
            Identifier "t"
        KwSet "SET"
        ColumnName
          Identifier "a"
        Eq "="
        LiteralExpr
          LiteralValue
            NumericLiteral "1"
        Comma ","
        ColumnName
          Identifier "b"
        Eq "="
        AddExpr
          ColumnRefExpr
            ColumnName
              Identifier "b"
          Plus "+"
          LiteralExpr
            LiteralValue
              NumericLiteral "1"
        WhereClause
          KwWhere "WHERE"
          EquivalenceExpr
            ColumnRefExpr
              ColumnName
                Identifier "id"
            Eq "="
            LiteralExpr
              LiteralValue
                NumericLiteral "2"
    "#);
}

#[test]
fn delete_with_order_and_limit() {
    let input = "DELETE FROM t WHERE a IS NOT NULL ORDER BY a LIMIT 1";

    let res = Parse::expect_valid_cst(input);

    // The limit of a DELETE has no clause node of its own.
    insta::assert_snapshot!(res, @r#"
    Root
      DeleteStmt
        KwDelete "DELETE"
        KwFrom "FROM"
        SingleTableStmtTable
          TableName
            Identifier "t"
        WhereClause
          KwWhere "WHERE"
          EquivalenceExpr
            ColumnRefExpr
              ColumnName
                Identifier "a"
            KwIs "IS"
            KwNot "NOT"
            LiteralExpr
              LiteralValue
                KwNull "NULL"
        OrderClause
          KwOrder "ORDER"
          KwBy "BY"
          OrderingTerm
            ColumnRefExpr
              ColumnName
                Identifier "a"
        KwLimit "LIMIT"
        LiteralExpr
          LiteralValue
            NumericLiteral "1"
    "#);
}

#[test]
fn create_table_with_constraints() {
    let input = indoc! {r#"
    CREATE TABLE IF NOT EXISTS main.users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT 'x',
        CONSTRAINT fk FOREIGN KEY (id) REFERENCES other (id) ON DELETE CASCADE
    ) WITHOUT ROWID
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CreateTableStmt
        KwCreate "CREATE"
        KwTable "TABLE"
        KwIf "IF"
        KwNot "NOT"
        KwExists "EXISTS"
        DatabaseName
          Identifier "main"
        Dot "."
        TableName
          Identifier "users"
        ParenOpen "("
        ColumnDef
          ColumnName
            Identifier "id"
          TypeName
            Identifier "INTEGER"
          ColumnConstraint
            KwPrimary "PRIMARY"
            KwKey "KEY"
            KwAutoincrement "AUTOINCREMENT"
        Comma ","
        ColumnDef
          ColumnName
            Identifier "name"
          TypeName
            Identifier "TEXT"
          ColumnConstraint
            KwNot "NOT"
            KwNull "NULL"
          ColumnConstraint
            KwDefault "DEFAULT"
            LiteralValue
              SingleQuoteString "'x'"
        Comma ","
        TableConstraint
          KwConstraint "CONSTRAINT"
          Identifier "fk"
          KwForeign "FOREIGN"
          KwKey "KEY"
          ParenOpen "("
          ColumnName
            Identifier "id"
          ParenClose ")"
          ForeignKeyClause
            KwReferences "REFERENCES"
            ForeignTable
              Identifier "other"
            ParenOpen "("
            ColumnName
              Identifier "id"
            ParenClose ")"
            KwOn "ON"
            KwDelete "DELETE"
            KwCascade "CASCADE"
        ParenClose ")"
        KwWithout "WITHOUT"
        KwRowid "ROWID"
    "#);
}

#[test]
fn create_index() {
    let input = "CREATE UNIQUE INDEX IF NOT EXISTS idx ON t (a COLLATE nocase DESC, b) WHERE a > 0";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CreateIndexStmt
        KwCreate "CREATE"
        KwUnique "UNIQUE"
        KwIndex "INDEX"
        KwIf "IF"
        KwNot "NOT"
        KwExists "EXISTS"
        Identifier "idx"
        KwOn "ON"
        TableName
          Identifier "t"
        ParenOpen "("
        IndexedColumn
          ColumnName
            Identifier "a"
          KwCollate "COLLATE"
          CollationName
            Identifier "nocase"
          KwDesc "DESC"
        Comma ","
        IndexedColumn
          ColumnName
            Identifier "b"
        ParenClose ")"
        WhereClause
          KwWhere "WHERE"
          ComparisonExpr
            ColumnRefExpr
              ColumnName
                Identifier "a"
            Gt ">"
            LiteralExpr
              LiteralValue
                NumericLiteral "0"
    "#);
}

#[test]
fn create_trigger() {
    let input = indoc! {r#"
    CREATE TRIGGER trg AFTER UPDATE OF a ON t FOR EACH ROW WHEN new.a > 0
    BEGIN
        DELETE FROM log;
    END
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CreateTriggerStmt
        KwCreate "CREATE"
        KwTrigger "TRIGGER"
        TriggerName
          Identifier "trg"
        KwAfter "AFTER"
        KwUpdate "UPDATE"
        KwOf "OF"
        ColumnName
          Identifier "a"
        KwOn "ON"
        TableName
          Identifier "t"
        KwFor "FOR"
        KwEach "EACH"
        KwRow "ROW"
        KwWhen "WHEN"
        ComparisonExpr
          ColumnRefExpr
            TableName
              Identifier "new"
            Dot "."
            ColumnName
              Identifier "a"
          Gt ">"
          LiteralExpr
            LiteralValue
              NumericLiteral "0"
        KwBegin "BEGIN"
        DeleteStmt
          KwDelete "DELETE"
          KwFrom "FROM"
          SingleTableStmtTable
            TableName
              Identifier "log"
        Semicolon ";"
        KwEnd "END"
    "#);
}

#[test]
fn create_view() {
    let input = "CREATE TEMP VIEW IF NOT EXISTS v AS SELECT a FROM t";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CreateViewStmt
        KwCreate "CREATE"
        KwTemp "TEMP"
        KwView "VIEW"
        KwIf "IF"
        KwNot "NOT"
        KwExists "EXISTS"
        ViewName
          Identifier "v"
        KwAs "AS"
        SelectStmt
          SelectCore
            SelectCoreSelect
              KwSelect "SELECT"
              ResultColumns
                ResultColumn
                  ColumnRefExpr
                    ColumnName
                      Identifier "a"
              FromClause
                KwFrom "FROM"
                TableOrSubquery
                  FromTable
                    TableName
                      Identifier "t"
    "#);
}

#[test]
fn create_virtual_table() {
    let input = "CREATE VIRTUAL TABLE docs USING fts4(title, body)";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CreateVirtualTableStmt
        KwCreate "CREATE"
        KwVirtual "VIRTUAL"
        KwTable "TABLE"
        TableName
          Identifier "docs"
        KwUsing "USING"
        ModuleName
          Identifier "fts4"
        ParenOpen "("
        ModuleArgument
          Identifier "title"
        Comma ","
        ModuleArgument
          Identifier "body"
        ParenClose ")"
    "#);
}

#[test]
fn alter_table() {
    let input = "ALTER TABLE t ADD COLUMN c TEXT; ALTER TABLE t RENAME TO u";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      AlterTableStmt
        KwAlter "ALTER"
        KwTable "TABLE"
        TableName
          Identifier "t"
        KwAdd "ADD"
        KwColumn "COLUMN"
        ColumnDef
          ColumnName
            Identifier "c"
          TypeName
            Identifier "TEXT"
      Semicolon ";"
      AlterTableStmt
        KwAlter "ALTER"
        KwTable "TABLE"
        TableName
          Identifier "t"
        KwRename "RENAME"
        KwTo "TO"
        TableName
          Identifier "u"
    "#);
}

#[test]
fn drop_statements() {
    let input = "DROP TABLE IF EXISTS main.t; DROP INDEX idx; DROP VIEW v; DROP TRIGGER trg";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      DropTableStmt
        KwDrop "DROP"
        KwTable "TABLE"
        KwIf "IF"
        KwExists "EXISTS"
        DatabaseName
          Identifier "main"
        Dot "."
        TableName
          Identifier "t"
      Semicolon ";"
      DropIndexStmt
        KwDrop "DROP"
        KwIndex "INDEX"
        Identifier "idx"
      Semicolon ";"
      DropViewStmt
        KwDrop "DROP"
        KwView "VIEW"
        ViewName
          Identifier "v"
      Semicolon ";"
      DropTriggerStmt
        KwDrop "DROP"
        KwTrigger "TRIGGER"
        TriggerName
          Identifier "trg"
    "#);
}

#[test]
fn transaction_statements() {
    let input = "BEGIN IMMEDIATE TRANSACTION; SAVEPOINT sp; RELEASE SAVEPOINT sp; ROLLBACK TO sp; COMMIT";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      BeginStmt
        KwBegin "BEGIN"
        KwImmediate "IMMEDIATE"
        KwTransaction "TRANSACTION"
      Semicolon ";"
      SavepointStmt
        KwSavepoint "SAVEPOINT"
        SavepointName
          Identifier "sp"
      Semicolon ";"
      ReleaseStmt
        KwRelease "RELEASE"
        KwSavepoint "SAVEPOINT"
        SavepointName
          Identifier "sp"
      Semicolon ";"
      RollbackStmt
        KwRollback "ROLLBACK"
        KwTo "TO"
        SavepointName
          Identifier "sp"
      Semicolon ";"
      CommitStmt
        KwCommit "COMMIT"
    "#);
}

#[test]
fn commit_accepts_end() {
    let input = "END TRANSACTION";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      CommitStmt
        KwEnd "END"
        KwTransaction "TRANSACTION"
    "#);
}

#[test]
fn attach_and_detach() {
    let input = "ATTACH DATABASE 'file.db' AS aux; DETACH aux";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      AttachStmt
        KwAttach "ATTACH"
        KwDatabase "DATABASE"
        ColumnRefExpr
          ColumnName
            SingleQuoteString "'file.db'"
        KwAs "AS"
        DatabaseName
          Identifier "aux"
      Semicolon ";"
      DetachStmt
        KwDetach "DETACH"
        DatabaseName
          Identifier "aux"
    "#);
}

#[test]
fn maintenance_statements() {
    let input = "ANALYZE; ANALYZE t; REINDEX nocase; VACUUM";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      AnalyzeStmt
        KwAnalyze "ANALYZE"
      Semicolon ";"
      AnalyzeStmt
        KwAnalyze "ANALYZE"
        DatabaseName
          Identifier "t"
      Semicolon ";"
      ReindexStmt
        KwReindex "REINDEX"
        CollationName
          Identifier "nocase"
      Semicolon ";"
      VacuumStmt
        KwVacuum "VACUUM"
    "#);
}

#[test]
fn pragma_statements() {
    let input = "PRAGMA main.cache_size = -2000; PRAGMA foreign_keys(ON)";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      PragmaStmt
        KwPragma "PRAGMA"
        DatabaseName
          Identifier "main"
        Dot "."
        PragmaName
          Identifier "cache_size"
        Eq "="
        PragmaValue
          SignedNumber
            Minus "-"
            NumericLiteral "2000"
      Semicolon ";"
      PragmaStmt
        KwPragma "PRAGMA"
        PragmaName
          Identifier "foreign_keys"
        ParenOpen "("
        PragmaValue
          KwOn "ON"
        ParenClose ")"
    "#);
}

#[test]
fn explain_query_plan() {
    let input = "EXPLAIN QUERY PLAN SELECT * FROM t";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Stmt
        KwExplain "EXPLAIN"
        KwQuery "QUERY"
        KwPlan "PLAN"
        SelectStmt
          SelectCore
            SelectCoreSelect
              KwSelect "SELECT"
              ResultColumns
                ResultColumn
                  Star "*"
              FromClause
                KwFrom "FROM"
                TableOrSubquery
                  FromTable
                    TableName
                      Identifier "t"
    "#);
}

#[test]
fn empty_statements_are_skipped() {
    let input = ";; VACUUM;";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Semicolon ";"
      Semicolon ";"
      VacuumStmt
        KwVacuum "VACUUM"
      Semicolon ";"
    "#);
}

#[test]
fn empty_input() {
    let res = Parse::expect_valid_cst("");

    assert_eq!(res, "Root\n");
}

#[test]
fn keywords_are_case_insensitive() {
    let input = "select 1 from t";

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "select"
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
            FromClause
              KwFrom "from"
              TableOrSubquery
                FromTable
                  TableName
                    Identifier "t"
    "#);
}

#[test]
fn trivia_attaches_to_enclosing_nodes() {
    let input = "SELECT 1 -- done\n";

    let res = Parse::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    Root
      SelectStmt
        SelectCore
          SelectCoreSelect
            KwSelect "SELECT"
            Whitespace " "
            ResultColumns
              ResultColumn
                LiteralExpr
                  LiteralValue
                    NumericLiteral "1"
      Whitespace " "
      LineComment "-- done"
      Newline "\n"
    "#);
}
