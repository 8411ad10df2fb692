//! This crate compares binary trees of integers by content rather than by shape.
//!
//! ## Shape independent equality
//!
//! Two Binary Search Trees holding the same values can look very different. Inserting
//! `1, 2, 3` gives a chain leaning to the right while inserting `2, 1, 3` gives a balanced
//! tree. Comparing them node by node would call them different even though they store
//! exactly the same data.
//!
//! Visiting a BST's left subtree, then the subtree root, then the right subtree (an
//! "in-order" traversal) yields its values in sorted order. So two trees store the same
//! data exactly when their in-order sequences are the same. [`Tree`] compares that way:
//!
//! 1. Walk the first tree in-order, pushing each value onto the back of a queue.
//! 2. Walk the second tree in-order, popping values off the front of the queue and
//!    comparing. The first mismatch ends the comparison.
//!
//! Both walks are `O(N)` and the queue is `O(N)` extra space. The walks can't be done in
//! lock-step because the trees' shapes, and so their branch points, may differ.
//!
//! # Examples
//!
//! ```
//! use treecmp::{Node, Tree};
//!
//! // A balanced tree.
//! let mut root = Node::new(2);
//! root.set_left(Node::new(1));
//! root.set_right(Node::new(3));
//! let balanced = Tree::from(root);
//!
//! // A chain leaning left.
//! let mut two = Node::new(2);
//! two.set_left(Node::new(1));
//! let mut root = Node::new(3);
//! root.set_left(two);
//! let chain = Tree::from(root);
//!
//! assert!(balanced.equals(&chain));
//! assert_eq!(chain, [3, 2, 1].iter().copied().collect::<Tree>());
//! ```

#![deny(missing_docs)]

mod inorder;
pub mod node;
pub mod tree;

pub use node::Node;
pub use tree::Tree;
