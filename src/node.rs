//! Node store for the [`Trie`].
//!
//! Nodes live in a flat arena and refer to their children by index. Edges between nodes are
//! defined by characters, and traversal through the graph is done through those characters. Since
//! a child index is only ever created by pushing a fresh node, the graph is a strict tree: no
//! node is reachable by two different paths.
//!
//! [`Trie`]: crate::Trie

use hashbrown::HashMap;

/// Index of a [`Node`] within its arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Reference(usize);

impl Reference {
    /// The root node always occupies the first slot.
    pub(crate) const ROOT: Self = Self(0);
}

/// A single prefix position.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// Whether the path from the root to this node spells a complete keyword.
    pub(crate) terminal: bool,
    /// Child nodes, keyed by character edges.
    children: HashMap<char, Reference>,
}

/// Arena owning every [`Node`] of a trie.
#[derive(Debug)]
pub(crate) struct Nodes {
    nodes: Vec<Node>,
}

impl Nodes {
    /// Creates an arena containing only the root node.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn get(&self, reference: Reference) -> &Node {
        &self.nodes[reference.0]
    }

    /// Follow the edge labelled `c` out of `reference`, if there is one.
    #[inline]
    pub(crate) fn child(&self, reference: Reference, c: char) -> Option<Reference> {
        self.get(reference).children.get(&c).copied()
    }

    /// Follow the edge labelled `c` out of `reference`, creating the child if it is absent.
    pub(crate) fn child_or_insert(&mut self, reference: Reference, c: char) -> Reference {
        if let Some(child) = self.child(reference, c) {
            return child;
        }
        let child = Reference(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[reference.0].children.insert(c, child);
        child
    }

    #[inline]
    pub(crate) fn mark_terminal(&mut self, reference: Reference) {
        self.nodes[reference.0].terminal = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Nodes, Reference};

    #[test]
    fn new_has_only_root() {
        let nodes = Nodes::new();

        assert_eq!(nodes.len(), 1);
        assert!(!nodes.get(Reference::ROOT).terminal);
        assert_eq!(nodes.child(Reference::ROOT, 'a'), None);
    }

    #[test]
    fn child_or_insert_creates_once() {
        let mut nodes = Nodes::new();

        let first = nodes.child_or_insert(Reference::ROOT, 'a');
        let second = nodes.child_or_insert(Reference::ROOT, 'a');

        assert_eq!(first, second);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.child(Reference::ROOT, 'a'), Some(first));
    }

    #[test]
    fn distinct_edges_get_distinct_children() {
        let mut nodes = Nodes::new();

        let a = nodes.child_or_insert(Reference::ROOT, 'a');
        let b = nodes.child_or_insert(Reference::ROOT, 'b');
        let ab = nodes.child_or_insert(a, 'b');

        assert_ne!(a, b);
        assert_ne!(ab, b);
        assert_eq!(nodes.child(a, 'b'), Some(ab));
        assert_eq!(nodes.child(b, 'b'), None);
    }

    #[test]
    fn mark_terminal() {
        let mut nodes = Nodes::new();
        let a = nodes.child_or_insert(Reference::ROOT, 'a');
        nodes.mark_terminal(a);

        assert!(nodes.get(a).terminal);
        assert!(!nodes.get(Reference::ROOT).terminal);
    }
}
