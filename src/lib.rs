//! A Binary Search Tree (BST) whose nodes carry ancestor links, built
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. Each `Node` stores one value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have
//!    a value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have
//!    a value greater than its own value.
//!
//! Searching for a value then takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`), and visiting the
//! left subtree, then a `Node`, then the right subtree yields the values
//! in sorted order.
//!
//! ## What this crate adds
//!
//! On top of its children, every `Node` here also knows its *ancestor*
//! (its parent) and can report which *side* of that ancestor it hangs
//! from. Deletion works directly on that link structure by re-parenting
//! subtrees rather than splicing in an in-order successor, which makes it
//! a nice worked example of the four structural deletion cases. The tree
//! never rebalances itself, so inserting sorted input degrades it to a
//! linked list - a deliberate trade-off, not a bug.

#![deny(missing_docs)]

pub mod linked;

#[cfg(test)]
mod test;
