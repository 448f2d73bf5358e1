//! Iterator implementations for BTree.
//!
//! Traversal keeps an explicit stack of `(node, position)` frames instead of
//! recursing, so the memory used by an iterator is bounded by the tree
//! height. Iterators borrow the tree, which rules out mutation while one is
//! alive.

use std::iter::FusedIterator;

use crate::types::{BTree, Node, NodeId};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over the elements of a [`BTree`].
pub struct Iter<'a, T> {
    tree: &'a BTree<T>,
    /// Each frame holds a node and the index of the next key to yield.
    stack: Vec<(&'a Node<T>, usize)>,
    remaining: usize,
}

// ============================================================================
// BTREE ITERATOR METHODS
// ============================================================================

impl<T> BTree<T> {
    /// Returns an iterator over all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let tree: BTree<i32> = [3, 1, 2].into_iter().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, T> Iter<'a, T> {
    pub fn new(tree: &'a BTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height + 1),
            remaining: tree.len,
        };
        iter.descend_leftmost(tree.root);
        iter
    }

    /// Push the path from `node_id` down to its leftmost leaf.
    fn descend_leftmost(&mut self, mut node_id: NodeId) {
        while let Some(node) = self.tree.arena.get(node_id) {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(&child) if !node.is_leaf => node_id = child,
                _ => break,
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let node: &'a Node<T> = frame.0;
            let index = frame.1;

            if index < node.keys.len() {
                frame.1 += 1;
                if !node.is_leaf {
                    self.descend_leftmost(node.children[index + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.keys[index]);
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// COLLECTION TRAITS
// ============================================================================

impl<'a, T> IntoIterator for &'a BTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for BTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for BTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> FromIterator<T> for BTree<T> {
    /// Collect into a tree of the default order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::with_default_order();
        tree.extend(iter);
        tree
    }
}
