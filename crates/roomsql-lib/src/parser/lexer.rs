//! Tokenizer for the SQL dialect.
//!
//! Tokens are a kind plus a byte span into the source; the text itself is
//! sliced out on demand.
//!
//! Characters no token pattern accepts are merged into one `Garbage` token per
//! run. No grammar rule matches `Garbage`, so each run lands in an `Error` node.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn byte_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

/// Splits `source` into tokens. Whitespace and comments are kept.
pub fn lex(source: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut garbage_from: Option<usize> = None;
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        match next {
            Ok(kind) => {
                close_garbage(&mut out, &mut garbage_from, span.start);
                out.push(Token::new(kind, byte_range(span.start, span.end)));
            }
            Err(_) => {
                garbage_from.get_or_insert(span.start);
            }
        }
    }
    close_garbage(&mut out, &mut garbage_from, source.len());

    out
}

fn close_garbage(out: &mut Vec<Token>, garbage_from: &mut Option<usize>, end: usize) {
    if let Some(start) = garbage_from.take() {
        out.push(Token::new(SyntaxKind::Garbage, byte_range(start, end)));
    }
}

#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span]
}
