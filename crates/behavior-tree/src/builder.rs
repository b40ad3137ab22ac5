//! Append-only tree construction.
//!
//! The builder hands out [`NodeId`]s as nodes are pushed; composites may
//! only reference ids the builder has already produced, so children always
//! precede their parents in the arena and the finished tree is acyclic by
//! construction.

use crate::tree::{Node, NodeId, Tree};

/// Builds an immutable [`Tree`] bottom-up.
///
/// ```rust,ignore
/// let mut b = TreeBuilder::new();
/// let check = b.leaf(MyLeaf::EnemyVisible);
/// let fight = b.leaf(MyLeaf::Fight);
/// let root = b.sequence(vec![check, fight]);
/// let tree = b.build(root);
/// ```
pub struct TreeBuilder<L> {
    nodes: Vec<Node<L>>,
}

impl<L> TreeBuilder<L> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: Node<L>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn check_children(&self, children: &[NodeId]) {
        for child in children {
            assert!(
                child.index() < self.nodes.len(),
                "child {:?} does not exist in this builder",
                child
            );
        }
    }

    /// Adds a leaf node.
    pub fn leaf(&mut self, leaf: L) -> NodeId {
        self.push(Node::Leaf(leaf))
    }

    /// Adds a sequence node.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty or references an unknown id. A sequence
    /// with no children is meaningless and likely indicates a programming
    /// error.
    pub fn sequence(&mut self, children: Vec<NodeId>) -> NodeId {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        self.check_children(&children);
        self.push(Node::Sequence(children))
    }

    /// Adds a selector node.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty or references an unknown id.
    pub fn selector(&mut self, children: Vec<NodeId>) -> NodeId {
        assert!(!children.is_empty(), "Selector must have at least one child");
        self.check_children(&children);
        self.push(Node::Selector(children))
    }

    /// Adds an inverter wrapping `child`.
    pub fn inverter(&mut self, child: NodeId) -> NodeId {
        self.check_children(&[child]);
        self.push(Node::Inverter(child))
    }

    /// Adds an always-succeed wrapper around `child`.
    pub fn always_succeed(&mut self, child: NodeId) -> NodeId {
        self.check_children(&[child]);
        self.push(Node::AlwaysSucceed(child))
    }

    /// Finishes the tree with `root` as its entry point.
    ///
    /// # Panics
    ///
    /// Panics if `root` was not produced by this builder.
    pub fn build(self, root: NodeId) -> Tree<L> {
        assert!(
            root.index() < self.nodes.len(),
            "root {:?} does not exist in this builder",
            root
        );
        Tree::from_parts(self.nodes, root)
    }
}

impl<L> Default for TreeBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[test]
    #[should_panic(expected = "at least one child")]
    fn empty_sequence_panics() {
        let mut b: TreeBuilder<Noop> = TreeBuilder::new();
        b.sequence(vec![]);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn unknown_child_panics() {
        let mut b: TreeBuilder<Noop> = TreeBuilder::new();
        b.inverter(NodeId::new(7));
    }

    #[test]
    fn ids_are_arena_positions() {
        let mut b = TreeBuilder::new();
        let a = b.leaf(Noop);
        let c = b.leaf(Noop);
        let root = b.selector(vec![a, c]);
        assert_eq!(root.index(), 2);

        let tree = b.build(root);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), root);
    }
}
