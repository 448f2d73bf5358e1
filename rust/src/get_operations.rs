//! GET operations for BTree.
//!
//! Read-only lookups: membership, retrieval of the stored instance, and the
//! smallest and largest elements.

use crate::types::{BTree, KeySearch, Node, NodeId};

impl<T: Ord> BTree<T> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check if an element equal to `value` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Get the stored element that compares equal to `value`.
    ///
    /// Ordering may look at only part of an element, so the returned
    /// instance can differ from the probe in its other fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert("pear".to_string());
    /// assert_eq!(tree.get(&"pear".to_string()).map(String::as_str), Some("pear"));
    /// assert_eq!(tree.get(&"grape".to_string()), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        self.get_recursive(self.root, value)
    }

    // ============================================================================
    // PRIVATE HELPER METHODS FOR GET OPERATIONS
    // ============================================================================

    fn get_recursive(&self, node_id: NodeId, value: &T) -> Option<&T> {
        let node = self.arena.get(node_id)?;
        match node.find_key_index(value) {
            KeySearch::Found(index) => node.keys.get(index),
            KeySearch::InsertAt(_) if node.is_leaf => None,
            KeySearch::InsertAt(child_index) => {
                let child = *node.children.get(child_index)?;
                self.get_recursive(child, value)
            }
        }
    }
}

impl<T> BTree<T> {
    /// Returns the smallest element, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.get_node(self.root)?;
        while let Some(&child) = node.children.first() {
            node = self.get_node(child)?;
        }
        node.keys.first()
    }

    /// Returns the largest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.get_node(self.root)?;
        while let Some(&child) = node.children.last() {
            node = self.get_node(child)?;
        }
        node.keys.last()
    }

    // ============================================================================
    // ARENA ACCESS METHODS
    // ============================================================================

    /// Get a reference to a node in the arena.
    pub fn get_node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// The id of the current root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }
}
