//! A mutable BST whose nodes keep links in three directions: left child,
//! right child, and *ancestor* (parent). The nodes live in a
//! [`generational_arena::Arena`] and reference each other by index, so the
//! back-references never fight the borrow checker and a handle to a removed
//! node is detectably stale instead of dangling.
//!
//! The tree never rebalances. Deletion keeps the link structure intact by
//! re-parenting whole subtrees: when a node with two children goes away, its
//! right subtree is promoted into its slot and its left subtree is grafted
//! back in wherever the ordering puts it beneath the promoted subtree. That
//! produces a valid but generally deeper tree than the textbook
//! successor-splice would.
//!
//! # Examples
//!
//! ```
//! use treelib::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! let node = tree.add(1);
//! assert_eq!(tree.get(node), Some(&1));
//!
//! // Adding an existing value hands back the existing node.
//! assert_eq!(tree.add(1), node);
//!
//! tree.remove(&1);
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};

/// Which child slot of its ancestor a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The node is its ancestor's left child, so its value is the smaller.
    Left,
    /// The node is its ancestor's right child, so its value is the larger.
    Right,
}

/// An opaque handle to a node in a [`Tree`].
///
/// Handles stay valid while their node is in the tree. Once the node is
/// removed, the handle goes stale and every accessor treats it as absent;
/// it can never accidentally resolve to a node inserted later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

/// One stored value plus its three links. The side a node hangs from is
/// never stored; it is recomputed from the ancestor's child links on demand
/// so it cannot drift out of sync with them.
#[derive(Clone, Debug)]
struct Node<T> {
    data: T,
    ancestor: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl<T> Node<T> {
    fn new(data: T, ancestor: Option<Index>) -> Self {
        Node {
            data,
            ancestor,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree with ancestor links. This can be used for adding,
/// finding, and removing values. Duplicate values collapse onto the
/// existing node.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<Index>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Adds the given value to the tree and returns a handle to its node.
    /// If the value is already present, nothing changes and the handle of
    /// the existing node is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelib::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let two = tree.add(2);
    /// let one = tree.add(1);
    ///
    /// assert_eq!(tree.add(1), one);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.ancestor(one), Some(two));
    /// ```
    pub fn add(&mut self, value: T) -> NodeId
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            let root = self.arena.insert(Node::new(value, None));
            self.root = Some(root);
            return NodeId(root);
        };
        loop {
            match value.cmp(&self.arena[current].data) {
                Ordering::Equal => return NodeId(current),
                Ordering::Less => match self.arena[current].left {
                    Some(left) => current = left,
                    None => {
                        let node = self.arena.insert(Node::new(value, Some(current)));
                        self.arena[current].left = Some(node);
                        return NodeId(node);
                    }
                },
                Ordering::Greater => match self.arena[current].right {
                    Some(right) => current = right,
                    None => {
                        let node = self.arena.insert(Node::new(value, Some(current)));
                        self.arena[current].right = Some(node);
                        return NodeId(node);
                    }
                },
            }
        }
    }

    /// Potentially finds the node holding the given value. If no node has
    /// the value - in particular, if the tree is empty - `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelib::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let node = tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(node));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root?;
        loop {
            match value.cmp(&self.arena[current].data) {
                Ordering::Equal => return Some(NodeId(current)),
                Ordering::Less => current = self.arena[current].left?,
                Ordering::Greater => current = self.arena[current].right?,
            }
        }
    }

    /// Removes the node holding the given value, if there is one. Removing
    /// an absent value is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelib::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// tree.remove(&1);
    /// assert_eq!(tree.find(&1), None);
    ///
    /// // Nothing to do for values that were never added.
    /// tree.remove(&42);
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        let node = self.find(value);
        self.remove_node(node);
    }

    /// Removes the node behind the given handle. `None` and stale handles
    /// are no-ops.
    ///
    /// Removal re-parents rather than rebalances. The four cases, keyed on
    /// the node's children:
    ///
    /// 1. No children: the ancestor's child slot is cleared.
    /// 2. Only a right child: the right child takes the node's slot.
    /// 3. Only a left child: the left child takes the node's slot.
    /// 4. Both children: the right subtree takes the node's slot and the
    ///    left subtree is grafted back in beneath it. When the node is the
    ///    root this is done in place: the root takes over its right child's
    ///    value and children, and the old left subtree is grafted starting
    ///    from the root itself.
    pub fn remove_node(&mut self, node: Option<NodeId>)
    where
        T: Ord,
    {
        let Some(NodeId(node)) = node else { return };
        if self.arena.get(node).is_none() {
            return;
        }
        let (ancestor, left, right) = {
            let n = &self.arena[node];
            (n.ancestor, n.left, n.right)
        };
        let side = self.side(NodeId(node));

        match (left, right) {
            (None, None) => {
                self.replace_child(ancestor, side, None);
                self.arena.remove(node);
            }
            (None, Some(child)) | (Some(child), None) => {
                self.replace_child(ancestor, side, Some(child));
                self.arena.remove(node);
            }
            (Some(left), Some(right)) => match side {
                Some(side) => {
                    // The right subtree is promoted into the removed node's
                    // slot; the left subtree is re-attached beneath it.
                    self.replace_child(ancestor, Some(side), Some(right));
                    self.arena.remove(node);
                    self.arena[left].ancestor = None;
                    self.graft(left, right);
                }
                None => {
                    // Root removal: take over the right child's value and
                    // children, then re-attach the old left subtree.
                    let successor = self
                        .arena
                        .remove(right)
                        .expect("right child of the root is in the arena");
                    let root = &mut self.arena[node];
                    root.data = successor.data;
                    root.left = successor.left;
                    root.right = successor.right;
                    if let Some(child) = successor.left {
                        self.arena[child].ancestor = Some(node);
                    }
                    if let Some(child) = successor.right {
                        self.arena[child].ancestor = Some(node);
                    }
                    self.arena[left].ancestor = None;
                    self.graft(left, node);
                }
            },
        }
    }

    /// Points the ancestor's child slot (or the root link, for nodes
    /// without an ancestor) at `child`, fixing `child`'s back-reference.
    fn replace_child(&mut self, ancestor: Option<Index>, side: Option<Side>, child: Option<Index>) {
        match (ancestor, side) {
            (Some(ancestor), Some(Side::Left)) => self.arena[ancestor].left = child,
            (Some(ancestor), Some(Side::Right)) => self.arena[ancestor].right = child,
            _ => self.root = child,
        }
        if let Some(child) = child {
            self.arena[child].ancestor = ancestor;
        }
    }

    /// Re-attaches a detached subtree, walking from `start` down to the
    /// empty slot the ordering dictates. The subtree's own links are kept
    /// intact; only its root gets a new ancestor.
    fn graft(&mut self, node: Index, start: Index)
    where
        T: Ord,
    {
        let mut current = start;
        loop {
            match self.arena[node].data.cmp(&self.arena[current].data) {
                Ordering::Equal => unreachable!("values in the tree are unique"),
                Ordering::Less => match self.arena[current].left {
                    Some(left) => current = left,
                    None => {
                        self.arena[current].left = Some(node);
                        self.arena[node].ancestor = Some(current);
                        return;
                    }
                },
                Ordering::Greater => match self.arena[current].right {
                    Some(right) => current = right,
                    None => {
                        self.arena[current].right = Some(node);
                        self.arena[node].ancestor = Some(current);
                        return;
                    }
                },
            }
        }
    }

    /// The handle of the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    /// The value behind a handle, or `None` if the handle is stale.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.arena.get(node.0).map(|n| &n.data)
    }

    /// The handle of a node's ancestor. `None` for the root and for stale
    /// handles.
    pub fn ancestor(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node.0)?.ancestor.map(NodeId)
    }

    /// The handle of a node's left child, if it has one.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node.0)?.left.map(NodeId)
    }

    /// The handle of a node's right child, if it has one.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node.0)?.right.map(NodeId)
    }

    /// Which side of its ancestor the node hangs from, recomputed from the
    /// ancestor's child links. `None` for the root and for stale handles.
    pub fn side(&self, node: NodeId) -> Option<Side> {
        let ancestor = self.arena.get(node.0)?.ancestor?;
        if self.arena[ancestor].left == Some(node.0) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Visits the values in order, smallest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelib::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 3, 1].iter() {
    ///     tree.add(*value);
    /// }
    ///
    /// let sorted: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            next: self.root,
        }
    }

    /// Renders the subtree under `from` (the whole tree when `from` is
    /// `None`) as an indented dump, one node per line. Indentation encodes
    /// depth and each node is annotated with the side it hangs from; the
    /// starting node is always annotated `+`. A stale `from` handle yields
    /// an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelib::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.dump(None), " [+]- 2\n    [L]- 1\n    [R]- 3\n");
    /// ```
    pub fn dump(&self, from: Option<NodeId>) -> String
    where
        T: fmt::Display,
    {
        let start = match from {
            Some(node) => self.arena.get(node.0).map(|_| node.0),
            None => self.root,
        };
        let mut out = String::new();
        if let Some(start) = start {
            self.fmt_node(&mut out, start, "", None)
                .expect("writing to a String cannot fail");
        }
        out
    }

    fn fmt_node<W: fmt::Write>(
        &self,
        w: &mut W,
        node: Index,
        indent: &str,
        side: Option<Side>,
    ) -> fmt::Result
    where
        T: fmt::Display,
    {
        let marker = match side {
            None => "+",
            Some(Side::Left) => "L",
            Some(Side::Right) => "R",
        };
        writeln!(w, "{} [{}]- {}", indent, marker, self.arena[node].data)?;
        let indent = format!("{}   ", indent);
        if let Some(left) = self.arena[node].left {
            self.fmt_node(w, left, &indent, Some(Side::Left))?;
        }
        if let Some(right) = self.arena[node].right {
            self.fmt_node(w, right, &indent, Some(Side::Right))?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root {
            self.fmt_node(f, root, "", None)?;
        }
        Ok(())
    }
}

/// In-order iterator over a [`Tree`], returned by [`Tree::iter`].
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<Index>,
    next: Option<Index>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = self.tree.arena[node].left;
        }
        let node = self.stack.pop()?;
        self.next = self.tree.arena[node].right;
        Some(&self.tree.arena[node].data)
    }
}
