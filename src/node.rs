//! The building block of a [`Tree`][crate::Tree].
//!
//! A `Node` is a plain structural container: it holds a value and owns up to two children.
//! It doesn't care how its children's values relate to its own.
//!
//! # Examples
//!
//! ```
//! use treecmp::Node;
//!
//! let mut root = Node::new(2);
//! root.set_left(Node::new(1));
//! root.set_right(Node::new(3));
//!
//! assert_eq!(root.left().map(Node::value), Some(1));
//! assert_eq!(root.right().map(Node::value), Some(3));
//! assert_eq!(root.len(), 3);
//!
//! // Replacing a child drops the old subtree.
//! root.set_left(Node::new(0));
//! assert_eq!(root.left().map(Node::value), Some(0));
//! assert_eq!(root.len(), 3);
//! ```

#[cfg(test)]
use std::cell::Cell;
use std::fmt;

use crate::inorder::InOrder;

#[cfg(test)]
thread_local! {
    /// How many `Node`s have been dropped on this thread. Lets tests prove that displaced
    /// subtrees are released.
    static DROPPED: Cell<usize> = Cell::new(0);
}

/// A binary tree node holding one integer and exclusively owning its children.
pub struct Node {
    value: i32,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl fmt::Debug for Node {
    // Shows the subtree as its in-order sequence, which is what equality looks at. Walking
    // with `InOrder` keeps this safe on chains of any depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("in_order", &InOrder::new(Some(self)).collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Node {
    // Dropping the `Box`es directly would recurse once per level, which overflows on long
    // chains. Instead, detach every descendant onto a heap allocated stack so each one is
    // dropped with no children left.
    fn drop(&mut self) {
        #[cfg(test)]
        DROPPED.with(|dropped| dropped.set(dropped.get() + 1));

        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Node {
    /// Creates a new `Node` with the given value and no children.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Makes `node` the left child of this node. Any existing left subtree is dropped.
    pub fn set_left(&mut self, node: Node) {
        self.left = Some(Box::new(node));
    }

    /// Makes `node` the right child of this node. Any existing right subtree is dropped.
    pub fn set_right(&mut self, node: Node) {
        self.right = Some(Box::new(node));
    }

    /// Detaches and returns the left subtree, leaving this node without a left child.
    pub fn take_left(&mut self) -> Option<Node> {
        self.left.take().map(|node| *node)
    }

    /// Detaches and returns the right subtree, leaving this node without a right child.
    pub fn take_right(&mut self) -> Option<Node> {
        self.right.take().map(|node| *node)
    }

    /// Counts the nodes in the subtree rooted at this node, including itself, so this is
    /// always at least 1 and there is no `is_empty` to go with it.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count
    }
}

#[cfg(test)]
pub(crate) fn dropped() -> usize {
    DROPPED.with(Cell::get)
}
