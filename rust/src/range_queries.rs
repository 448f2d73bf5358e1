//! Range query operations for BTree.
//!
//! A range walk seeks to the lower bound once, pruning every key and subtree
//! that sits below it, then continues in order until the first key past the
//! upper bound ends the walk.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::types::{BTree, Node, NodeId};

/// Lazy ascending iterator over the elements inside a range.
///
/// Created by [`BTree::range`] and [`BTree::range_search`].
pub struct Range<'a, T, R> {
    tree: &'a BTree<T>,
    bounds: R,
    stack: Vec<(&'a Node<T>, usize)>,
    finished: bool,
}

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<T: Ord> BTree<T> {
    /// Returns the elements `e` with `min <= e <= max` in ascending order.
    ///
    /// If `min > max` the sequence is empty. Each call starts a fresh
    /// descent from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(5).unwrap();
    /// for value in (0..10).map(|v| v * 10) {
    ///     tree.insert(value);
    /// }
    ///
    /// let hits: Vec<_> = tree.range_search(&25, &75).copied().collect();
    /// assert_eq!(hits, vec![30, 40, 50, 60, 70]);
    /// assert_eq!(tree.range_search(&75, &25).count(), 0);
    /// ```
    pub fn range_search<'a>(
        &'a self,
        min: &'a T,
        max: &'a T,
    ) -> Range<'a, T, RangeInclusive<&'a T>> {
        self.range(min..=max)
    }

    /// Returns an iterator over the elements inside `bounds`, using Rust's
    /// range syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    /// use std::ops::Bound;
    ///
    /// let tree: BTree<i32> = (0..10).collect();
    ///
    /// assert_eq!(tree.range(3..6).copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert_eq!(tree.range(7..).copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    /// assert_eq!(tree.range(..=1).copied().collect::<Vec<_>>(), vec![0, 1]);
    ///
    /// let open = (Bound::Excluded(2), Bound::Excluded(5));
    /// assert_eq!(tree.range(open).copied().collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub fn range<R>(&self, bounds: R) -> Range<'_, T, R>
    where
        R: RangeBounds<T>,
    {
        Range::new(self, bounds)
    }

    /// Count the elements inside `bounds` without collecting them.
    pub fn count_range<R>(&self, bounds: R) -> usize
    where
        R: RangeBounds<T>,
    {
        self.range(bounds).count()
    }
}

// ============================================================================
// RANGE ITERATOR
// ============================================================================

impl<'a, T: Ord, R: RangeBounds<T>> Range<'a, T, R> {
    fn new(tree: &'a BTree<T>, bounds: R) -> Self {
        let mut range = Self {
            tree,
            bounds,
            stack: Vec::with_capacity(tree.height + 1),
            finished: false,
        };
        range.seek_lower_bound(tree.root);
        range
    }

    /// Position of the first key in `node` that is not below the lower bound.
    fn lower_position(&self, node: &Node<T>) -> usize {
        match self.bounds.start_bound() {
            Bound::Included(min) => node.keys.partition_point(|key| key < min),
            Bound::Excluded(min) => node.keys.partition_point(|key| key <= min),
            Bound::Unbounded => 0,
        }
    }

    fn below_upper_bound(&self, key: &T) -> bool {
        match self.bounds.end_bound() {
            Bound::Included(max) => key <= max,
            Bound::Excluded(max) => key < max,
            Bound::Unbounded => true,
        }
    }

    /// Descend toward the lower bound, skipping keys below it and the
    /// subtrees to their left.
    fn seek_lower_bound(&mut self, mut node_id: NodeId) {
        while let Some(node) = self.tree.arena.get(node_id) {
            let start = self.lower_position(node);
            self.stack.push((node, start));
            match node.children.get(start) {
                Some(&child) if !node.is_leaf => node_id = child,
                _ => break,
            }
        }
    }

    /// Everything right of a yielded key is already above the lower bound.
    fn descend_leftmost(&mut self, mut node_id: NodeId) {
        while let Some(node) = self.tree.arena.get(node_id) {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(&child) if !node.is_leaf => node_id = child,
                _ => break,
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.stack.clear();
    }
}

impl<'a, T: Ord, R: RangeBounds<T>> Iterator for Range<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(&(node, index)) = self.stack.last() else {
                self.finished = true;
                return None;
            };

            let Some(key) = node.keys.get(index) else {
                self.stack.pop();
                continue;
            };

            if !self.below_upper_bound(key) {
                self.finish();
                return None;
            }

            if let Some(frame) = self.stack.last_mut() {
                frame.1 += 1;
            }
            if !node.is_leaf {
                self.descend_leftmost(node.children[index + 1]);
            }
            return Some(key);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.tree.len))
        }
    }
}

impl<T: Ord, R: RangeBounds<T>> FusedIterator for Range<'_, T, R> {}
