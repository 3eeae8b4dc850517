//! Pre-order traversal and id lookup over a component tree.
//!
//! Traversal is lazy, finite, and restartable: each call to
//! [`Node::nodes`] starts a fresh walk, and iteration never mutates the
//! tree.

use crate::node::Node;

/// Lazy pre-order depth-first iterator over a subtree.
///
/// Yields a node before its descendants: the node itself, then its
/// children in document order, then the list template (`item_view`).
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse push keeps pop order equal to document order; the
        // template is pushed first so it comes out last.
        if let Some(item_view) = &node.item_view {
            self.stack.push(item_view);
        }
        if let Some(children) = &node.children {
            for child in children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}

impl Node {
    /// Iterate the subtree rooted at this node in pre-order.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// First pre-order node with the given id, if any.
    ///
    /// Duplicate ids within one tree are permitted (the decoder does not
    /// deduplicate); the first match in document order wins.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes().find(|node| node.id == id)
    }

    /// Number of nodes in the subtree rooted at this node.
    #[must_use]
    pub fn count(&self) -> usize {
        self.nodes().count()
    }
}
