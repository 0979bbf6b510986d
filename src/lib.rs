//! This crate exposes a parent-linked Binary Search Tree (BST) with
//! configurable traversal order and duplicate accounting.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s; here every `Node`
//! also keeps a back-reference to its parent, which is what lets deletion
//! rewire the tree around a node found by search. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! This tree is deliberately not self-balancing: its shape is a direct
//! function of insertion order. Equal values never create a second node;
//! instead the tree counts each repeat, and the counts can be inspected
//! through [`Tree::repeated_nodes`].
//!
//! ## Traversal orders
//!
//! [`Tree::in_order`], [`Tree::pre_order`], and [`Tree::post_order`] each
//! return a lazy iterator that walks the live tree as it is polled. A tree
//! also carries a default [`Traversal`] mode, used by `for value in &tree`;
//! it is picked at construction and can be changed at any time. Because the
//! iterators borrow the tree, the borrow checker rules out mutating the tree
//! mid-traversal.
//!
//! # Examples
//!
//! ```
//! use bstree::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for value in vec![5, 1, -1, 2, 10, 1] {
//!     tree.add(value);
//! }
//!
//! // Ascending by default.
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [&-1, &1, &2, &5, &10]);
//!
//! // The second `1` was counted, not stored twice.
//! assert_eq!(tree.repeated_nodes().get(&1), Some(&1));
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert!(tree.remove(&1));
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [&-1, &2, &5, &10]);
//!
//! // Default iteration follows the configured traversal mode.
//! tree.set_traversal(Traversal::PreOrder);
//! let visited: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(visited, [5, 2, -1, 10]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod duplicates;
mod iter;
mod node;
mod tree;

pub use crate::iter::{InOrder, Iter, PostOrder, PreOrder, Traversal};
pub use crate::tree::Tree;

#[cfg(test)]
mod test;
