//! Generic syntax trees produced by the grammars.
//!
//! A tree node only knows the name of the rule that produced it and its ordered children.
//! Children are sub-trees, raw tokens, or placeholders standing for an optional part of the
//! rule that was not written (for instance the interval of `G p`). Consumers dispatch on
//! [`SyntaxTree::rule`] and [`Token::kind`] using the constants in [`rule`] and [`token`].
use std::ops::Range;

/// Rule names emitted by the grammars.
pub mod rule {
    pub const EQUIV: &str = "equiv";
    pub const IMPLIES: &str = "implies";
    pub const XOR: &str = "xor";
    pub const OR: &str = "add";
    pub const AND: &str = "mul";
    pub const NOT: &str = "neg";
    pub const VAR: &str = "var";
    pub const LITERAL: &str = "literal";
    pub const INTERVAL: &str = "interval";

    pub const NEXT: &str = "next";
    pub const ALWAYS: &str = "always";
    pub const EVENTUALLY: &str = "eventually";
    pub const UNTIL: &str = "until";

    pub const EVERYWHERE: &str = "everywhere";
    pub const SOMEWHERE: &str = "somewhere";
    pub const ESCAPE: &str = "escape";
    pub const REACH: &str = "reach";

    pub const GRAPH_INCOMING: &str = "graph_incoming";
    pub const GRAPH_OUTGOING: &str = "graph_outgoing";
    pub const GRAPH_LIST: &str = "graph_list";
}

/// Token kinds emitted by the grammars.
pub mod token {
    /// Identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub const CNAME: &str = "CNAME";
    /// Double-quoted string, quotes and escapes included.
    pub const ESCAPED_STRING: &str = "ESCAPED_STRING";
    /// Optionally signed decimal integer.
    pub const INT: &str = "INT";
    /// Boolean literal spelling (`0`, `1`, `TRUE`, `FALSE`, `true`, `false`).
    pub const LITERAL: &str = "LITERAL";
}

/// A raw lexeme with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: &'static str,
    pub text: String,
    pub span: Range<usize>,
}

/// One child slot of a [`SyntaxTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Tree(SyntaxTree),
    Token(Token),
    /// Optional part of the rule that is absent from the source.
    Absent,
}

/// A rule application: rule name plus ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub rule: &'static str,
    pub children: Vec<Child>,
    pub span: Range<usize>,
}

impl SyntaxTree {
    pub fn new(rule: &'static str, children: Vec<Child>, span: Range<usize>) -> Self {
        Self {
            rule,
            children,
            span,
        }
    }

    /// Number of nodes in this tree, tokens and placeholders included.
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                Child::Tree(tree) => tree.size(),
                Child::Token(_) | Child::Absent => 1,
            })
            .sum::<usize>()
    }
}

impl From<SyntaxTree> for Child {
    fn from(tree: SyntaxTree) -> Self {
        Child::Tree(tree)
    }
}

impl From<Token> for Child {
    fn from(token: Token) -> Self {
        Child::Token(token)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Absent, Into::into)
    }
}
