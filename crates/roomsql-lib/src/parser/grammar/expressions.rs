//! Precedence climbing for `expr`.
//!
//! An expression is one primary followed by any number of operators. Each
//! operator family has a level; the loop only applies an operator whose level
//! is above the floor it was called with and parses the right operand with
//! that level as the new floor. Equal levels therefore stop the inner call
//! and are picked up by the outer loop, which makes every binary family
//! left-associative without left recursion.
//!
//! | level | family                          | shape   |
//! |-------|---------------------------------|---------|
//! | 3     | `NOT? IN (...)`                 | postfix |
//! | 4     | `ISNULL`, `NOTNULL`, `NOT NULL` | postfix |
//! | 5     | `NOT? LIKE/GLOB/REGEXP/MATCH`   | binary, optional `ESCAPE` |
//! | 6     | `CAST(... AS type)`             | prefix  |
//! | 7     | `( expr )`                      | prefix  |
//! | 9     | `OR`                            | binary  |
//! | 10    | `AND`                           | binary  |
//! | 11    | `= == != <> IS NOT? IN LIKE ...`, `NOT? BETWEEN ... AND ...` | binary |
//! | 12    | `< <= > >=`                     | binary  |
//! | 13    | `<< >> & \|`                    | binary  |
//! | 14    | `+ -`                           | binary  |
//! | 15    | `* / %`                         | binary  |
//! | 16    | `\|\|`                          | binary  |
//! | 17    | `- + ~ NOT`                     | prefix  |
//! | 18    | `COLLATE name`                  | postfix |

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{
    ADD_OPERATORS, BIT_OPERATORS, COMPARISON_OPERATORS, LIKE_OPERATORS, MUL_OPERATORS,
    UNARY_OPERATORS,
};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::marker::CompletedMarker;
use crate::parser::rule::Rule;

/// Floor that lets every operator through.
pub(crate) const LOOSEST: i8 = -1;

mod level {
    pub(super) const IN: i8 = 3;
    pub(super) const ISNULL: i8 = 4;
    pub(super) const LIKE: i8 = 5;
    pub(super) const CAST: i8 = 6;
    pub(super) const PAREN: i8 = 7;
    pub(super) const OR: i8 = 9;
    pub(super) const AND: i8 = 10;
    pub(super) const EQUIVALENCE: i8 = 11;
    pub(super) const BETWEEN: i8 = 11;
    pub(super) const COMPARISON: i8 = 12;
    pub(super) const BIT: i8 = 13;
    pub(super) const ADD: i8 = 14;
    pub(super) const MUL: i8 = 15;
    pub(super) const CONCAT: i8 = 16;
    pub(super) const UNARY: i8 = 17;
    pub(super) const COLLATE: i8 = 18;
}

const SIMPLE_EQUIVALENCE: TokenSet = TokenSet::new(&[
    SyntaxKind::EqEq,
    SyntaxKind::Eq,
    SyntaxKind::NotEq,
    SyntaxKind::LtGt,
]);
const KEYWORD_EQUIVALENCE: TokenSet = TokenSet::new(&[
    SyntaxKind::KwIn,
    SyntaxKind::KwLike,
    SyntaxKind::KwGlob,
    SyntaxKind::KwMatch,
    SyntaxKind::KwRegexp,
]);
const RAISE_ACTIONS: TokenSet = TokenSet::new(&[
    SyntaxKind::KwRollback,
    SyntaxKind::KwAbort,
    SyntaxKind::KwFail,
]);

#[derive(Debug, Clone, Copy)]
enum Shape {
    /// The matcher consumes the whole suffix.
    Postfix,
    Binary,
    /// Binary with an optional `ESCAPE expr` tail.
    Like,
    /// Binary with a mandatory `AND expr` tail.
    Between,
}

struct Operator {
    level: i8,
    shape: Shape,
    kind: SyntaxKind,
    /// Consumes the operator tokens, or fails without side effects once
    /// wrapped in a section.
    matcher: fn(&mut Parser<'_>) -> bool,
}

/// Tried in this order at every step of the loop.
const OPERATORS: &[Operator] = &[
    Operator {
        level: level::IN,
        shape: Shape::Postfix,
        kind: SyntaxKind::InExpr,
        matcher: match_in,
    },
    Operator {
        level: level::ISNULL,
        shape: Shape::Postfix,
        kind: SyntaxKind::IsnullExpr,
        matcher: match_isnull,
    },
    Operator {
        level: level::LIKE,
        shape: Shape::Like,
        kind: SyntaxKind::LikeExpr,
        matcher: match_like,
    },
    Operator {
        level: level::OR,
        shape: Shape::Binary,
        kind: SyntaxKind::OrExpr,
        matcher: |p| p.consume_if(SyntaxKind::KwOr),
    },
    Operator {
        level: level::AND,
        shape: Shape::Binary,
        kind: SyntaxKind::AndExpr,
        matcher: |p| p.consume_if(SyntaxKind::KwAnd),
    },
    Operator {
        level: level::EQUIVALENCE,
        shape: Shape::Binary,
        kind: SyntaxKind::EquivalenceExpr,
        matcher: match_equivalence,
    },
    Operator {
        level: level::BETWEEN,
        shape: Shape::Between,
        kind: SyntaxKind::BetweenExpr,
        matcher: |p| {
            p.opt(|p| p.consume_if(SyntaxKind::KwNot)) && p.consume_if(SyntaxKind::KwBetween)
        },
    },
    Operator {
        level: level::COMPARISON,
        shape: Shape::Binary,
        kind: SyntaxKind::ComparisonExpr,
        matcher: |p| p.consume_any(COMPARISON_OPERATORS),
    },
    Operator {
        level: level::BIT,
        shape: Shape::Binary,
        kind: SyntaxKind::BitExpr,
        matcher: |p| p.consume_any(BIT_OPERATORS),
    },
    Operator {
        level: level::ADD,
        shape: Shape::Binary,
        kind: SyntaxKind::AddExpr,
        matcher: |p| p.consume_any(ADD_OPERATORS),
    },
    Operator {
        level: level::MUL,
        shape: Shape::Binary,
        kind: SyntaxKind::MulExpr,
        matcher: |p| p.consume_any(MUL_OPERATORS),
    },
    Operator {
        level: level::CONCAT,
        shape: Shape::Binary,
        kind: SyntaxKind::ConcatExpr,
        matcher: |p| p.consume_if(SyntaxKind::Concat),
    },
    Operator {
        level: level::COLLATE,
        shape: Shape::Postfix,
        kind: SyntaxKind::CollateExpr,
        matcher: |p| p.consume_if(SyntaxKind::KwCollate) && p.parse_collation_name(),
    },
];

type Primary = fn(&mut Parser<'_>) -> Option<CompletedMarker>;

/// Primary forms, in priority order.
const PRIMARIES: &[Primary] = &[
    |p| p.parse_raise_function_expr(),
    |p| p.parse_case_expr(),
    |p| p.parse_exists_expr(),
    |p| p.parse_cast_expr(),
    |p| p.parse_paren_expr(),
    |p| p.parse_function_call_expr(),
    |p| p.parse_unary_expr(),
    |p| p.parse_column_ref_expr(),
    |p| p.parse_literal_expr(),
];

/// `NOT? IN ('(' (select_stmt | expr (',' expr)*)? ')' | (database_name '.')? table_name)`
fn match_in(p: &mut Parser<'_>) -> bool {
    p.opt(|p| p.consume_if(SyntaxKind::KwNot))
        && p.consume_if(SyntaxKind::KwIn)
        && p.alt(&[
            |p| {
                p.eat(SyntaxKind::ParenOpen)
                    && p.opt(|p| p.alt(&[|p| p.parse_select_stmt(), |p| p.parse_expr_list()]))
                    && p.eat(SyntaxKind::ParenClose)
            },
            |p| p.parse_database_prefix() && p.parse_table_name(),
        ])
}

/// `ISNULL | NOTNULL | NOT NULL`
fn match_isnull(p: &mut Parser<'_>) -> bool {
    p.consume_if(SyntaxKind::KwIsnull)
        || p.consume_if(SyntaxKind::KwNotnull)
        || (p.consume_if(SyntaxKind::KwNot) && p.consume_if(SyntaxKind::KwNull))
}

/// `NOT? (LIKE | GLOB | REGEXP | MATCH)`
fn match_like(p: &mut Parser<'_>) -> bool {
    p.opt(|p| p.consume_if(SyntaxKind::KwNot)) && p.consume_any(LIKE_OPERATORS)
}

/// `'==' | '=' | '!=' | '<>' | IS NOT? | IN | LIKE | GLOB | MATCH | REGEXP`
fn match_equivalence(p: &mut Parser<'_>) -> bool {
    p.consume_any(SIMPLE_EQUIVALENCE)
        || (p.consume_if(SyntaxKind::KwIs) && p.opt(|p| p.consume_if(SyntaxKind::KwNot)))
        || p.consume_any(KEYWORD_EQUIVALENCE)
}

impl Parser<'_> {
    /// Parses an expression whose operators all bind tighter than `floor`.
    pub(crate) fn parse_expr(&mut self, floor: i8) -> bool {
        self.rule(Rule::Expr, |p| match p.parse_primary() {
            Some(lhs) => {
                p.parse_expr_tail(lhs, floor);
                true
            }
            None => false,
        })
    }

    fn parse_primary(&mut self) -> Option<CompletedMarker> {
        PRIMARIES.iter().find_map(|primary| primary(self))
    }

    /// Wraps `lhs` in operators above `floor` until none applies.
    fn parse_expr_tail(&mut self, mut lhs: CompletedMarker, floor: i8) {
        'climb: while !self.has_fatal_error() {
            for op in OPERATORS.iter().filter(|op| floor < op.level) {
                let m = lhs.precede(self);
                if !self.section(None, op.matcher) {
                    m.rollback(self);
                    continue;
                }

                match op.shape {
                    Shape::Postfix => {}
                    Shape::Binary => self.parse_operand(op.level),
                    Shape::Like => {
                        self.parse_operand(op.level);
                        self.opt(|p| p.eat(SyntaxKind::KwEscape) && p.parse_expr(LOOSEST));
                    }
                    Shape::Between => {
                        self.parse_operand(op.level);
                        if !self.section(None, |p| {
                            p.eat(SyntaxKind::KwAnd) && p.parse_expr(LOOSEST)
                        }) {
                            self.recover_operand();
                        }
                    }
                }

                lhs = m.complete(self, op.kind);
                continue 'climb;
            }
            break;
        }
    }

    /// Right operand of an operator that has already been consumed. The
    /// operator node is kept either way.
    fn parse_operand(&mut self, floor: i8) {
        if !self.parse_expr(floor) {
            self.recover_operand();
        }
    }

    fn recover_operand(&mut self) {
        if self.has_fatal_error() {
            return;
        }
        self.error_expected(DiagnosticKind::ExpectedSyntax);
        self.error_node(TokenSet::EMPTY);
    }

    /// `RAISE '(' (IGNORE | (ROLLBACK | ABORT | FAIL) ',' error_message) ')'`
    fn parse_raise_function_expr(&mut self) -> Option<CompletedMarker> {
        if !self.next_is(SyntaxKind::KwRaise) {
            return None;
        }
        self.node(Rule::RaiseFunctionExpr, |p| {
            p.eat_all(&[SyntaxKind::KwRaise, SyntaxKind::ParenOpen])
                && p.alt(&[
                    |p| p.eat(SyntaxKind::KwIgnore),
                    |p| {
                        p.eat_any(RAISE_ACTIONS)
                            && p.eat(SyntaxKind::Comma)
                            && p.parse_error_message()
                    },
                ])
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `CASE expr? (WHEN expr THEN expr)+ (ELSE expr)? END`
    fn parse_case_expr(&mut self) -> Option<CompletedMarker> {
        if !self.next_is(SyntaxKind::KwCase) {
            return None;
        }
        self.node(Rule::CaseExpr, |p| {
            p.eat(SyntaxKind::KwCase)
                && p.opt(|p| p.parse_expr(LOOSEST))
                && p.repeat1(|p| {
                    p.eat(SyntaxKind::KwWhen)
                        && p.parse_expr(LOOSEST)
                        && p.eat(SyntaxKind::KwThen)
                        && p.parse_expr(LOOSEST)
                })
                && p.opt(|p| p.eat(SyntaxKind::KwElse) && p.parse_expr(LOOSEST))
                && p.eat(SyntaxKind::KwEnd)
        })
    }

    /// `(NOT? EXISTS)? '(' select_stmt ')'`
    ///
    /// Without the keyword this is a scalar subquery, which shares the node.
    fn parse_exists_expr(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::ExistsExpr, |p| {
            p.opt(|p| {
                p.opt(|p| p.eat(SyntaxKind::KwNot)) && p.eat(SyntaxKind::KwExists)
            }) && p.eat(SyntaxKind::ParenOpen)
                && p.parse_select_stmt()
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `CAST '(' expr AS type_name ')'`
    fn parse_cast_expr(&mut self) -> Option<CompletedMarker> {
        if !self.next_is(SyntaxKind::KwCast) {
            return None;
        }
        self.node(Rule::CastExpr, |p| {
            p.eat_all(&[SyntaxKind::KwCast, SyntaxKind::ParenOpen])
                && p.pin()
                && p.parse_expr(level::CAST)
                && p.eat(SyntaxKind::KwAs)
                && p.parse_type_name()
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `'(' expr ')'`
    fn parse_paren_expr(&mut self) -> Option<CompletedMarker> {
        if !self.next_is(SyntaxKind::ParenOpen) {
            return None;
        }
        self.node(Rule::ParenExpr, |p| {
            p.eat(SyntaxKind::ParenOpen)
                && p.pin()
                && p.parse_expr(level::PAREN)
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `function_name '(' (DISTINCT? expr (',' expr)* | '*')? ')'`
    fn parse_function_call_expr(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::FunctionCallExpr, |p| {
            p.parse_function_name()
                && p.eat(SyntaxKind::ParenOpen)
                && p.opt(|p| {
                    p.alt(&[
                        |p| {
                            p.opt(|p| p.eat(SyntaxKind::KwDistinct)) && p.parse_expr_list()
                        },
                        |p| p.eat(SyntaxKind::Star),
                    ])
                })
                && p.eat(SyntaxKind::ParenClose)
        })
    }

    /// `('-' | '+' | '~' | NOT) expr`
    fn parse_unary_expr(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::UnaryExpr, |p| {
            p.eat_any(UNARY_OPERATORS) && p.pin() && p.parse_expr(level::UNARY)
        })
    }

    /// `database_name '.' table_name '.' column_name | table_name '.' column_name
    /// | column_name`
    fn parse_column_ref_expr(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::ColumnRefExpr, |p| {
            p.alt(&[
                |p| {
                    p.parse_database_name()
                        && p.eat(SyntaxKind::Dot)
                        && p.parse_table_name()
                        && p.eat(SyntaxKind::Dot)
                        && p.parse_column_name()
                },
                |p| p.parse_table_name() && p.eat(SyntaxKind::Dot) && p.parse_column_name(),
                |p| p.parse_column_name(),
            ])
        })
    }

    /// `literal_value | bind_parameter`
    fn parse_literal_expr(&mut self) -> Option<CompletedMarker> {
        self.node(Rule::LiteralExpr, |p| {
            p.alt(&[|p| p.parse_literal_value(), |p| p.parse_bind_parameter()])
        })
    }
}
