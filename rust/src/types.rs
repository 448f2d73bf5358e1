//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

use crate::compact_arena::CompactArena;

pub use crate::compact_arena::{NodeId, NULL_NODE};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest order a tree may be constructed with.
pub const MIN_ORDER: usize = 3;

/// Order used by `BTree::with_default_order` and `Default`.
pub const DEFAULT_ORDER: usize = 5;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Order-parameterized B-tree with sorted-collection semantics.
///
/// Every node stores elements, not just the leaves. An internal node with
/// `n` keys has `n + 1` children, and all leaves sit at the same depth.
/// Insertion splits full nodes on the way down and deletion refills thin
/// nodes on the way down, so neither operation ever walks back up. Order 3
/// trees split and repair on the way back up instead.
///
/// Duplicates are allowed and each instance is counted separately.
///
/// # Examples
///
/// ```
/// use btree_collection::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(5);
/// tree.insert(15);
///
/// assert_eq!(tree.len(), 4);
/// assert!(tree.contains(&15));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15, 20]);
///
/// let window: Vec<_> = tree.range_search(&6, &15).copied().collect();
/// assert_eq!(window, vec![10, 15]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Range queries**: O(log n + k) where k is the number of items in range
/// - **Iteration**: O(n), with a stack no deeper than the tree height
pub struct BTree<T> {
    /// Maximum number of children per node.
    pub(crate) order: usize,
    /// The root node of the tree.
    pub(crate) root: NodeId,
    /// Number of stored elements, duplicates included.
    pub(crate) len: usize,
    /// Edges from the root to any leaf.
    pub(crate) height: usize,
    /// Arena storage for every node reachable from `root`.
    pub(crate) arena: CompactArena<Node<T>>,
}

/// A tree node: sorted keys and, when internal, one more child than keys.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Sorted keys; equal keys stay adjacent.
    pub(crate) keys: Vec<T>,
    /// Child ids; empty for a leaf.
    pub(crate) children: Vec<NodeId>,
    pub(crate) is_leaf: bool,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new_leaf()
    }
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Outcome of locating a value among a node's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySearch {
    /// The value compares equal to `keys[index]`.
    Found(usize),
    /// The value is absent; it belongs at `index`, which for an internal
    /// node is also the child to descend into.
    InsertAt(usize),
}

impl KeySearch {
    /// The index carried by either variant.
    pub fn index(self) -> usize {
        match self {
            KeySearch::Found(index) | KeySearch::InsertAt(index) => index,
        }
    }

    /// Returns true for `Found`.
    pub fn is_found(self) -> bool {
        matches!(self, KeySearch::Found(_))
    }
}
