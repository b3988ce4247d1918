//! Indented text dump of a parse tree.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::cst::{SyntaxElement, SyntaxNode};

/// Prints one node per line, tokens with their text.
///
/// ```text
/// Root
///   SelectStmt
///     SelectCore
///       SelectCoreSelect
///         KwSelect "SELECT"
/// ```
pub struct TreePrinter {
    root: SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl TreePrinter {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.write_element(NodeOrToken::Node(self.root.clone()), 0, w)
    }

    fn write_element(&self, element: SyntaxElement, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{:width$}{:?}", "", element.kind(), width = depth * 2)?;
        if self.spans {
            let range = element.text_range();
            write!(w, " [{}..{}]", u32::from(range.start()), u32::from(range.end()))?;
        }

        match element {
            NodeOrToken::Token(token) => writeln!(w, " {:?}", token.text()),
            NodeOrToken::Node(node) => {
                writeln!(w)?;
                for child in node.children_with_tokens() {
                    if self.trivia || !child.kind().is_trivia() {
                        self.write_element(child, depth + 1, w)?;
                    }
                }
                Ok(())
            }
        }
    }
}
