use serde::{Deserialize, Serialize};
use text_size::{TextRange, TextSize};

use crate::SyntaxKind;

/// Binding strength of an operator or container. Lower values bind tighter;
/// atomic values sit at the minimum, open brace groups at the maximum.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct Priority(pub u8);

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A classified slice of the source text. Tokens are plain values; the text
/// itself stays in the buffer and is recovered through [`Token::text`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: SyntaxKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Zero-width token, used for end-of-input and synthesized containers.
    pub fn empty(kind: SyntaxKind, offset: TextSize) -> Self {
        Self { kind, range: TextRange::empty(offset) }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

/// Index of a node in its [`SyntaxTree`](crate::SyntaxTree) pool. Stable for
/// the node's lifetime; the pool never reuses an index a live node holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub token: Token,
    pub priority: Priority,
    pub children: Vec<NodeId>,
}

impl SyntaxNode {
    pub fn new(token: Token, priority: Priority) -> Self {
        Self { token, priority, children: Vec::new() }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.token.kind
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
