//! Tree structure management operations for BTree.
//!
//! This module contains the tree-level operations that do not depend on
//! element ordering: size and shape queries, clearing, node counting, and
//! copying the elements out.

use std::fmt;

use crate::compact_arena::CompactArenaStats;
use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, Node, NodeId};

// ============================================================================
// SIZE AND SHAPE
// ============================================================================

impl<T> BTree<T> {
    /// Returns the number of stored elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of edges on any root-to-leaf path. A lone root leaf has height 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Maximum number of children per node.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Most keys a node may hold.
    pub fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Fewest keys a non-root node may hold.
    ///
    /// For even orders this is `order / 2 - 1`. Odd orders from 5 up get one
    /// less than the textbook bound: a node split at the median of
    /// `order - 1` keys leaves one half with `(order - 2) / 2` keys. Order 3
    /// keeps the textbook floor of one key.
    pub fn min_keys(&self) -> usize {
        ((self.order - 2) / 2).max(1)
    }

    /// True when a full node can be split, and two minimal siblings merged,
    /// before the descent enters them.
    ///
    /// Only order 3 fails this: splitting two keys ahead of time leaves a
    /// keyless half, and merging two one-key siblings overflows. Order 3
    /// trees split and repair on the way back up instead.
    pub(crate) fn rebalances_ahead(&self) -> bool {
        self.max_keys() > 2 * self.min_keys()
    }

    /// Remove every element, leaving an empty root leaf.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::new_leaf());
        self.len = 0;
        self.height = 0;
    }

    // ============================================================================
    // NODE COUNTING
    // ============================================================================

    /// Count the `(leaf, internal)` nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, node_id: NodeId) -> (usize, usize) {
        let Some(node) = self.arena.get(node_id) else {
            return (0, 0);
        };
        if node.is_leaf {
            return (1, 0);
        }

        node.children
            .iter()
            .map(|&child| self.count_nodes_recursive(child))
            .fold((0, 1), |(leaves, internals), (l, i)| {
                (leaves + l, internals + i)
            })
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes_in_tree().0
    }

    /// Get node arena statistics.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}

// ============================================================================
// COPYING OUT
// ============================================================================

impl<T: Clone> BTree<T> {
    /// Clone every element, in ascending order, into `buffer` starting at
    /// `offset`.
    ///
    /// Fails with [`BTreeError::InvalidArgument`] when `offset` lies past the
    /// end of the buffer or the space after it is smaller than [`len`].
    /// The buffer is left untouched on failure.
    ///
    /// [`len`]: BTree::len
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let tree: BTree<i32> = [3, 1, 2].into_iter().collect();
    /// let mut buffer = [0; 5];
    /// tree.copy_to(&mut buffer, 1).unwrap();
    /// assert_eq!(buffer, [0, 1, 2, 3, 0]);
    ///
    /// assert!(tree.copy_to(&mut buffer, 3).is_err());
    /// ```
    pub fn copy_to(&self, buffer: &mut [T], offset: usize) -> BTreeResult<()> {
        if offset > buffer.len() {
            return Err(BTreeError::invalid_argument(
                "offset",
                &format!("{} is past the end of a buffer of length {}", offset, buffer.len()),
            ));
        }

        let available = buffer.len() - offset;
        if available < self.len {
            return Err(BTreeError::invalid_argument(
                "buffer",
                &format!(
                    "{} slots after offset {} cannot hold {} elements",
                    available, offset, self.len
                ),
            ));
        }

        for (slot, value) in buffer[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Collect clones of every element in ascending order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.iter().cloned());
        values
    }
}

impl<T: Clone> Clone for BTree<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            root: self.root,
            len: self.len,
            height: self.height,
            arena: self.arena.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BTree<T> {
    /// Trees are equal when they hold the same elements in the same order,
    /// regardless of order parameter or node layout.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BTree<T> {}
