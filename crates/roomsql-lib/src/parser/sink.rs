//! Replays parse events into a Rowan green tree.
//!
//! The parser only sees significant tokens. Trivia is re-inserted here: it is
//! flushed before every significant token and before every nested node start,
//! so leading trivia belongs to the enclosing node.

use std::mem;

use rowan::{GreenNode, GreenNodeBuilder};

use super::cst::SyntaxKind;
use super::lexer::{Token, token_text};
use super::marker::Event;

pub(super) struct Sink<'a> {
    source: &'a str,
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> Sink<'a> {
    /// `tokens` is the full lexer output, trivia included.
    pub(super) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            cursor: 0,
            depth: 0,
            builder: GreenNodeBuilder::new(),
        }
    }

    pub(super) fn build(mut self, mut events: Vec<Event>) -> GreenNode {
        let mut parents = Vec::new();

        for i in 0..events.len() {
            match mem::replace(&mut events[i], Event::Tombstone) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    parents.push(kind);
                    let mut next = forward_parent;
                    while let Some(idx) = next {
                        next = match mem::replace(&mut events[idx], Event::Tombstone) {
                            Event::Start {
                                kind,
                                forward_parent,
                            } => {
                                parents.push(kind);
                                forward_parent
                            }
                            _ => None,
                        };
                    }
                    for kind in parents.drain(..).rev() {
                        self.start_node(kind);
                    }
                }
                Event::Token { kind } => self.token(kind),
                Event::Finish => self.finish_node(),
                Event::Tombstone => {}
            }
        }

        self.builder.finish()
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        if self.depth > 0 {
            self.flush_trivia();
        }
        self.builder.start_node(kind.into());
        self.depth += 1;
    }

    fn finish_node(&mut self) {
        self.depth -= 1;
        if self.depth == 0 {
            // Whatever the parser left behind is trailing trivia of the root.
            while self.cursor < self.tokens.len() {
                self.emit();
            }
        }
        self.builder.finish_node();
    }

    fn token(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        debug_assert_eq!(self.tokens.get(self.cursor).map(|t| t.kind), Some(kind));
        self.emit();
    }

    fn flush_trivia(&mut self) {
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.emit();
        }
    }

    fn emit(&mut self) {
        let token = self.tokens[self.cursor];
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
        self.cursor += 1;
    }
}
