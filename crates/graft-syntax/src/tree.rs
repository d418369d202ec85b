use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use text_size::TextRange;

use crate::{NodeId, Priority, SyntaxNode, Token, TreePrint};

/// Append-only pool of syntax nodes. The first created node is the root;
/// children lists reference siblings in the same pool by index.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the root node. The tree must be non-empty.
    pub fn root(&self) -> NodeId {
        debug_assert!(!self.is_empty());
        NodeId::new(0)
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index() as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index() as usize]
    }

    pub fn create_node(&mut self, token: Token, priority: Priority) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode::new(token, priority));
        id
    }

    /// Deletes a node under the pool's LIFO discipline: only the most
    /// recently created node may be removed. Anything else is a programming
    /// error and panics rather than corrupting the pool.
    pub fn delete_node(&mut self, id: NodeId) {
        assert_eq!(
            id.index() as usize + 1,
            self.nodes.len(),
            "only the most recently created node can be deleted"
        );
        self.nodes.pop();
    }

    /// Moves the trailing children `parent.children[start..]` (order
    /// preserved) into a freshly created node, which becomes `parent`'s sole
    /// new trailing child. This is how an operator discovered late wraps the
    /// siblings it scopes over.
    pub fn splice_capture(
        &mut self,
        parent: NodeId,
        start: usize,
        token: Token,
        priority: Priority,
    ) -> NodeId {
        let captured = self.node_mut(parent).children.split_off(start);
        let id = self.create_node(token, priority);
        self.node_mut(id).children = captured;
        self.node_mut(parent).children.push(id);
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId::new(i as u32), node))
    }

    /// Smallest range covering the node's own token and all descendants.
    pub fn cover_range(&self, id: NodeId) -> TextRange {
        let node = self.node(id);
        if node.is_leaf() {
            return node.token.range;
        }
        let mut ranges = node.children.iter().map(|&child| self.cover_range(child));
        let first = ranges.next().expect("non-leaf node has children");
        ranges.fold(first, TextRange::cover)
    }

    /// Concatenation of every leaf token's text, in tree order. For a tree
    /// built without structural errors this reproduces the source exactly.
    pub fn leaf_text(&self, source: &str) -> String {
        let mut out = String::new();
        if !self.is_empty() {
            self.collect_leaf_text(self.root(), source, &mut out);
        }
        out
    }

    fn collect_leaf_text(&self, id: NodeId, source: &str, out: &mut String) {
        let node = self.node(id);
        if node.is_leaf() {
            if !node.kind().is_container() {
                out.push_str(node.token.text(source));
            }
            return;
        }
        for &child in &node.children {
            self.collect_leaf_text(child, source, out);
        }
    }

    pub fn display<'a>(&'a self, source: &'a str) -> TreePrint<'a> {
        TreePrint::new(self, source)
    }
}

impl Index<NodeId> for SyntaxTree {
    type Output = SyntaxNode;

    fn index(&self, id: NodeId) -> &SyntaxNode {
        self.node(id)
    }
}

impl IndexMut<NodeId> for SyntaxTree {
    fn index_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        self.node_mut(id)
    }
}
