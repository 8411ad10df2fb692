//! A binary tree of integers that compares equal to any other tree with the same in-order
//! sequence of values, whatever its shape.
//!
//! # Examples
//!
//! ```
//! use treecmp::Tree;
//!
//! // Ascending inserts build a chain leaning right...
//! let chain: Tree = vec![1, 2, 3].into_iter().collect();
//! // ...while inserting the middle value first builds a balanced tree.
//! let balanced: Tree = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(chain, balanced);
//!
//! let different: Tree = vec![2, 1, 4].into_iter().collect();
//! assert_ne!(chain, different);
//! ```

use std::collections::VecDeque;
use std::iter::FromIterator;

use crate::inorder::InOrder;
use crate::node::Node;

/// A binary tree that tracks how many nodes it holds.
///
/// The tree never hands out mutable access to its nodes so every change to the node set goes
/// through a method that keeps [`len`][Tree::len] exact.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl From<Node> for Tree {
    /// Adopts an already built structure as the tree's root. The structure is taken as is and
    /// isn't checked for BST ordering.
    fn from(root: Node) -> Self {
        Self {
            len: root.len(),
            root: Some(Box::new(root)),
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Tree {}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// How many nodes are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` using plain (unbalanced) BST insertion. Values smaller than a node go
    /// to its left and everything else, including duplicates, goes to its right. Duplicates
    /// are kept so the tree holds a multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecmp::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().and_then(|root| root.right()).map(|n| n.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: i32) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Detaches the whole structure from the tree, leaving it empty.
    pub fn take_root(&mut self) -> Option<Node> {
        self.len = 0;
        self.root.take().map(|root| *root)
    }

    /// Returns whether `self` and `other` hold the same values in the same in-order sequence.
    /// The shape of the trees doesn't matter.
    ///
    /// This walks `self` once to queue up its values and then walks `other` comparing against
    /// that queue, stopping at the first mismatch. Trees of different sizes are rejected
    /// without walking either.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecmp::{Node, Tree};
    ///
    /// let mut root = Node::new(1);
    /// root.set_right(Node::new(2));
    /// let right_leaning = Tree::from(root);
    ///
    /// let mut root = Node::new(2);
    /// root.set_left(Node::new(1));
    /// let left_leaning = Tree::from(root);
    ///
    /// assert!(right_leaning.equals(&left_leaning));
    /// assert!(!right_leaning.equals(&Tree::new()));
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        if self.len != other.len {
            log::trace!(
                "Trees differ in size ({} vs {}), skipping traversal.",
                self.len,
                other.len
            );
            return false;
        }

        let (root, other_root) = match (self.root(), other.root()) {
            (Some(root), Some(other_root)) => (root, other_root),
            (root, other_root) => {
                log::trace!("At least one tree is empty.");
                return root.is_none() && other_root.is_none();
            }
        };

        let mut queue = VecDeque::with_capacity(self.len);
        enqueue_values(root, &mut queue);
        compare_values(other_root, &mut queue)
    }
}

/// Walks the subtree in-order pushing each value onto the back of `queue`.
fn enqueue_values(node: &Node, queue: &mut VecDeque<i32>) {
    queue.extend(InOrder::new(Some(node)));
}

/// Walks the subtree in-order popping a value off the front of `queue` for each node. Returns
/// `false` as soon as a popped value doesn't match the node's value (or there is nothing left
/// to pop). Anything left in `queue` after the walk is also a mismatch.
fn compare_values(node: &Node, queue: &mut VecDeque<i32>) -> bool {
    for (position, value) in InOrder::new(Some(node)).enumerate() {
        match queue.pop_front() {
            Some(expected) if expected == value => {}
            expected => {
                log::trace!(
                    "Mismatch at in-order position {}: expected {:?}, found {}.",
                    position,
                    expected,
                    value
                );
                return false;
            }
        }
    }

    queue.is_empty()
}
