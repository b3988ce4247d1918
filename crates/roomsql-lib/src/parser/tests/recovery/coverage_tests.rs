use crate::parser::{Rule, parse, parse_statements};

const INPUTS: &[&str] = &[
    "SELECT a, b FROM t WHERE a > 1; DELETE FROM t",
    "CREATE TABLE t (a INT,) ; SELECT 1;",
    "SELECT FROM",
    "INSERT INTO t VALUES (1, 'x'",
    "CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE t SET a = 1; END",
    "  -- only a comment\n",
    "SELECT 1 # 2 /* unterminated",
    "))) ;;; (((",
];

#[test]
fn tree_text_is_the_source() {
    for input in INPUTS {
        let res = parse_statements(input).unwrap();
        assert_eq!(res.syntax().text().to_string(), *input);
    }
}

#[test]
fn expression_fragments_cover_the_source() {
    for input in ["a +", "CASE WHEN", "x NOT", "f(1, 2", "- - -"] {
        let res = parse(Rule::Expr, input).unwrap();
        assert_eq!(res.syntax().text().to_string(), input);
        assert!(!res.is_valid(), "{input}");
    }
}

#[test]
fn parsing_is_deterministic() {
    for input in INPUTS {
        let first = parse_statements(input).unwrap();
        let second = parse_statements(input).unwrap();
        assert_eq!(first.as_cst(), second.as_cst());
        assert_eq!(first.diagnostics().records(), second.diagnostics().records());
    }
}
