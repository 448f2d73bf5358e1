//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains order validation, arena initialization, and the
//! default implementations.

use crate::compact_arena::CompactArena;
use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, DEFAULT_ORDER, MIN_ORDER};

impl<T> BTree<T> {
    /// Create a B-tree with the specified order.
    ///
    /// # Arguments
    ///
    /// * `order` - Maximum number of children per node (minimum 3)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the order is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let tree = BTree::<i32>::new(4).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validation::validate_order(order)?;
        Ok(Self::with_checked_order(order))
    }

    /// Create a B-tree with the default order.
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let tree = BTree::<i32>::with_default_order();
    /// assert_eq!(tree.order(), 5);
    /// ```
    pub fn with_default_order() -> Self {
        Self::with_checked_order(DEFAULT_ORDER)
    }

    /// Empty tree with a single root leaf. `order` must already be valid.
    fn with_checked_order(order: usize) -> Self {
        let mut arena = CompactArena::new();
        let root = arena.allocate(Node::new_leaf());

        Self {
            order,
            root,
            len: 0,
            height: 0,
            arena,
        }
    }
}

impl<T> Node<T> {
    /// Creates an empty leaf node.
    pub fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates an empty internal node with room for `order` children.
    pub fn new_internal(order: usize) -> Self {
        Self {
            keys: Vec::with_capacity(order - 1),
            children: Vec::with_capacity(order),
            is_leaf: false,
        }
    }
}

impl<T> Default for BTree<T> {
    /// Create a B-tree with the default order.
    fn default() -> Self {
        Self::with_default_order()
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an order is usable for a B-tree.
    pub fn validate_order(order: usize) -> InitResult<()> {
        if order < MIN_ORDER {
            Err(BTreeError::invalid_order(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }

    /// Suggest an order for the expected number of elements.
    ///
    /// Small trees stay shallow with small nodes; large trees use wider nodes
    /// to keep the height down. Always returns an even order so that the
    /// minimum fill is `order / 2 - 1` and rebalancing stays single-pass.
    pub fn recommended_order(expected_elements: usize) -> usize {
        if expected_elements < 100 {
            4
        } else if expected_elements < 10_000 {
            16
        } else if expected_elements < 1_000_000 {
            32
        } else {
            64
        }
    }
}
