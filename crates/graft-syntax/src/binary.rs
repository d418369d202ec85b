use std::io::{Read, Write};

use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::SyntaxTree;

/// Why a tree cache could not be written or replayed.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode syntax tree")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode syntax tree")]
    Decode(#[source] bincode::Error),
    #[error("node {node} references child {child}, outside the pool of {len} nodes")]
    ChildOutOfBounds { node: u32, child: u32, len: u32 },
    #[error("node {node} spans {range:?}, beyond the paired source of {len} bytes")]
    SpanOutOfBounds { node: u32, range: TextRange, len: u32 },
}

/// Writes the tree in pool order: a node-count header, then each node's kind
/// tag, buffer-relative span, priority, and child index list.
pub fn save(tree: &SyntaxTree, writer: impl Write) -> Result<(), PersistError> {
    bincode::serialize_into(writer, tree).map_err(PersistError::Encode)
}

/// Replays a dump produced by [`save`]. The dump is a cache of a parse, not
/// an interchange format: it is only valid against byte-identical source
/// text, so every span and child index is checked against `source` and the
/// decoded pool before the tree is handed back.
pub fn load(reader: impl Read, source: &str) -> Result<SyntaxTree, PersistError> {
    let tree: SyntaxTree = bincode::deserialize_from(reader).map_err(PersistError::Decode)?;

    let len = tree.len() as u32;
    let end = TextSize::new(source.len() as u32);
    for (id, node) in tree.iter() {
        if node.token.range.end() > end {
            return Err(PersistError::SpanOutOfBounds {
                node: id.index(),
                range: node.token.range,
                len: end.into(),
            });
        }
        for &child in &node.children {
            if child.index() >= len {
                return Err(PersistError::ChildOutOfBounds {
                    node: id.index(),
                    child: child.index(),
                    len,
                });
            }
        }
    }

    Ok(tree)
}
