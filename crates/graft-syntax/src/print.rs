use std::fmt;

use crate::{NodeId, SyntaxTree};

/// Indented dump of a tree: one `KIND@start..end` line per node, leaf lines
/// followed by their literal text. Works on partially built trees, so the
/// dump is available even after a failed parse.
pub struct TreePrint<'a> {
    tree: &'a SyntaxTree,
    source: &'a str,
}

impl<'a> TreePrint<'a> {
    pub(crate) fn new(tree: &'a SyntaxTree, source: &'a str) -> Self {
        Self { tree, source }
    }

    fn print(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = self.tree.node(id);
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        write!(f, "{:?}@{:?}", node.kind(), self.tree.cover_range(id))?;
        if !node.kind().is_container() {
            write!(f, " {:?}", node.token.text(self.source))?;
        }
        writeln!(f)?;

        for &child in &node.children {
            self.print(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreePrint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return Ok(());
        }
        self.print(f, self.tree.root(), 0)
    }
}

#[cfg(test)]
mod tests {
    use text_size::{TextRange, TextSize};

    use crate::SyntaxKind::*;
    use crate::{Priority, SyntaxTree, Token};

    fn token(kind: crate::SyntaxKind, start: u32, end: u32) -> Token {
        Token::new(kind, TextRange::new(TextSize::new(start), TextSize::new(end)))
    }

    #[test]
    fn dump_shows_kinds_ranges_and_leaf_text() {
        let source = "a+b";
        let mut tree = SyntaxTree::new();
        let root = tree.create_node(Token::empty(ROOT, 0.into()), Priority(0));
        let group = tree.create_node(Token::empty(OPERATOR_GROUP, 0.into()), Priority(5));
        let a = tree.create_node(token(STRING, 0, 1), Priority(0));
        let plus = tree.create_node(token(OPERATOR, 1, 2), Priority(5));
        let b = tree.create_node(token(STRING, 2, 3), Priority(0));
        tree.node_mut(group).children.extend([a, plus, b]);
        tree.node_mut(root).children.push(group);

        let dump = tree.display(source).to_string();
        let expected = "\
ROOT@0..3
  OPERATOR_GROUP@0..3
    STRING@0..1 \"a\"
    OPERATOR@1..2 \"+\"
    STRING@2..3 \"b\"
";
        assert_eq!(dump, expected);
    }

    #[test]
    fn empty_tree_prints_nothing() {
        let tree = SyntaxTree::new();
        assert_eq!(tree.display("").to_string(), "");
    }
}
