//! Whitespace-preserving syntax tree over an append-only node pool.
//!
//! Nodes are addressed by stable `NodeId` indices into the pool; child lists
//! hold indices, never ownership. The tree is mutated through a `Walker`
//! during parsing and becomes a read-only artifact afterwards.

/// Binary cache of a parsed tree, replayable against the same source text.
pub mod binary;
mod node;
mod print;
mod syntax_kind;
mod tree;
mod walker;

pub use node::{NodeId, Priority, SyntaxNode, Token};
pub use print::TreePrint;
pub use syntax_kind::SyntaxKind;
pub use tree::SyntaxTree;
pub use walker::Walker;
