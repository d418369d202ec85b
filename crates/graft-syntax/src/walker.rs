use crate::{NodeId, Priority, SyntaxNode, SyntaxTree, Token};

/// Mutable cursor over a [`SyntaxTree`]. The selection stack holds the path
/// from the root to the node currently selected and is the only record of
/// ancestry; nodes carry no parent back-references.
pub struct Walker {
    tree: SyntaxTree,
    stack: Vec<NodeId>,
}

impl Walker {
    pub fn new(tree: SyntaxTree) -> Self {
        Self { tree, stack: Vec::new() }
    }

    pub fn into_tree(self) -> SyntaxTree {
        self.tree
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut SyntaxTree {
        &mut self.tree
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The selected node's index. A node must be selected.
    pub fn current(&self) -> NodeId {
        *self.stack.last().expect("walker has a selection")
    }

    pub fn node(&self) -> &SyntaxNode {
        self.tree.node(self.current())
    }

    pub fn node_mut(&mut self) -> &mut SyntaxNode {
        let current = self.current();
        self.tree.node_mut(current)
    }

    pub fn get(&self, id: NodeId) -> &SyntaxNode {
        self.tree.node(id)
    }

    pub fn select(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    pub fn select_child(&mut self, offset: usize) {
        let child = self.node().children[offset];
        self.select(child);
    }

    /// Pops the selection. Panics when already at the root; callers that
    /// ascend speculatively use [`Walker::try_go_up`] instead.
    pub fn go_up(&mut self) {
        assert!(self.depth() > 1, "walker cannot ascend past the root");
        self.stack.pop();
    }

    pub fn try_go_up(&mut self) -> bool {
        if self.depth() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn go_to_root(&mut self) {
        self.stack.truncate(1);
    }

    /// Appends an existing node to the selected node's children.
    pub fn push(&mut self, id: NodeId) {
        self.node_mut().children.push(id);
    }

    pub fn create(&mut self, token: Token, priority: Priority) -> NodeId {
        self.tree.create_node(token, priority)
    }

    pub fn create_push(&mut self, token: Token, priority: Priority) -> NodeId {
        let id = self.create(token, priority);
        self.push(id);
        id
    }

    pub fn create_select(&mut self, token: Token, priority: Priority) -> NodeId {
        let id = self.create(token, priority);
        self.select(id);
        id
    }

    pub fn create_push_select(&mut self, token: Token, priority: Priority) -> NodeId {
        let id = self.create_push(token, priority);
        self.select(id);
        id
    }

    /// Splices the selected node's trailing children from `start` onward
    /// into a new container and selects it.
    pub fn capture_trailing(&mut self, start: usize, token: Token, priority: Priority) -> NodeId {
        let parent = self.current();
        let id = self.tree.splice_capture(parent, start, token, priority);
        self.select(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;

    fn root_token() -> Token {
        Token::empty(ROOT, 0.into())
    }

    #[test]
    fn selection_stack_tracks_descent() {
        let mut walker = Walker::new(SyntaxTree::new());
        walker.create_select(root_token(), Priority(0));
        let group = walker.create_push_select(Token::empty(BRACE_GROUP, 0.into()), Priority(18));

        assert_eq!(walker.depth(), 2);
        assert_eq!(walker.current(), group);

        walker.go_up();
        assert_eq!(walker.depth(), 1);
    }

    #[test]
    fn try_go_up_stops_at_root() {
        let mut walker = Walker::new(SyntaxTree::new());
        walker.create_select(root_token(), Priority(0));

        assert!(!walker.try_go_up());
        assert_eq!(walker.depth(), 1);
    }

    #[test]
    fn go_to_root_unwinds_the_whole_stack() {
        let mut walker = Walker::new(SyntaxTree::new());
        let root = walker.create_select(root_token(), Priority(0));
        walker.create_push_select(Token::empty(BRACE_GROUP, 0.into()), Priority(18));
        walker.create_push_select(Token::empty(OPERATOR_GROUP, 0.into()), Priority(5));

        walker.go_to_root();
        assert_eq!(walker.depth(), 1);
        assert_eq!(walker.current(), root);
    }

    #[test]
    fn select_child_follows_child_list() {
        let mut walker = Walker::new(SyntaxTree::new());
        walker.create_select(root_token(), Priority(0));
        let child = walker.create_push(Token::empty(OPERATOR_GROUP, 0.into()), Priority(5));

        walker.select_child(0);
        assert_eq!(walker.current(), child);
    }

    #[test]
    fn capture_trailing_selects_new_container() {
        let mut walker = Walker::new(SyntaxTree::new());
        walker.create_select(root_token(), Priority(0));
        let a = walker.create_push(Token::empty(STRING, 0.into()), Priority(0));

        let group = walker.capture_trailing(0, Token::empty(OPERATOR_GROUP, 0.into()), Priority(5));

        assert_eq!(walker.current(), group);
        assert_eq!(walker.get(group).children, vec![a]);
        walker.go_up();
        assert_eq!(walker.node().children, vec![group]);
    }
}
