//! Node-level operations: key location, splitting, merging, and the
//! single-entry moves used when borrowing through a parent.

use std::cmp::Ordering;

use crate::types::{KeySearch, Node, NodeId};

// ============================================================================
// KEY LOCATION
// ============================================================================

impl<T: Ord> Node<T> {
    /// Binary search for `value` among this node's keys.
    ///
    /// Returns `Found` with the leftmost equal index, otherwise `InsertAt`
    /// with the sorted insertion position.
    pub fn find_key_index(&self, value: &T) -> KeySearch {
        let index = self.keys.partition_point(|key| key < value);
        match self.keys.get(index).map(|key| key.cmp(value)) {
            Some(Ordering::Equal) => KeySearch::Found(index),
            _ => KeySearch::InsertAt(index),
        }
    }

    /// Position just past every key that is `<= value`.
    ///
    /// New values land here so they follow any equal keys already present.
    pub fn upper_bound(&self, value: &T) -> usize {
        self.keys.partition_point(|key| key <= value)
    }
}

impl<T> Node<T> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Get a reference to the keys in this node.
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Get a reference to the child ids of this node.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if inserting another key would overflow the node.
    pub fn is_full(&self, max_keys: usize) -> bool {
        self.keys.len() >= max_keys
    }

    /// Returns true if the node can give up a key and stay at `min_keys`.
    pub fn can_lend(&self, min_keys: usize) -> bool {
        self.keys.len() > min_keys
    }

    // ============================================================================
    // SPLIT AND MERGE
    // ============================================================================

    /// Cut this node at `median`, returning the median key and a new right
    /// sibling holding everything after it.
    ///
    /// This node keeps `keys[..median]` and, if internal,
    /// `children[..=median]`.
    pub fn split_at_median(&mut self, median: usize) -> (T, Node<T>) {
        let right_keys = self.keys.split_off(median + 1);
        let right_children = if self.is_leaf {
            Vec::new()
        } else {
            self.children.split_off(median + 1)
        };

        // split_off(median + 1) leaves the median as the last key
        let promoted = match self.keys.pop() {
            Some(key) => key,
            None => unreachable!("split of a node with no median key"),
        };

        let right = Node {
            keys: right_keys,
            children: right_children,
            is_leaf: self.is_leaf,
        };

        (promoted, right)
    }

    /// Append the parent separator and all of `right` onto this node.
    pub fn merge_from(&mut self, separator: T, right: Node<T>) {
        let Node { keys, children, .. } = right;
        self.keys.push(separator);
        self.keys.extend(keys);
        self.children.extend(children);
    }

    // ============================================================================
    // BORROWING HELPERS
    // ============================================================================

    /// Take the last key and, if internal, the last child.
    pub fn pop_back_entry(&mut self) -> Option<(T, Option<NodeId>)> {
        let key = self.keys.pop()?;
        let child = if self.is_leaf { None } else { self.children.pop() };
        Some((key, child))
    }

    /// Take the first key and, if internal, the first child.
    pub fn pop_front_entry(&mut self) -> Option<(T, Option<NodeId>)> {
        if self.keys.is_empty() {
            return None;
        }
        let key = self.keys.remove(0);
        let child = if self.is_leaf {
            None
        } else {
            Some(self.children.remove(0))
        };
        Some((key, child))
    }

    /// Accept a key (and child) at the front, as when borrowing from the left.
    pub fn push_front_entry(&mut self, key: T, child: Option<NodeId>) {
        self.keys.insert(0, key);
        if let Some(child) = child {
            self.children.insert(0, child);
        }
    }

    /// Accept a key (and child) at the back, as when borrowing from the right.
    pub fn push_back_entry(&mut self, key: T, child: Option<NodeId>) {
        self.keys.push(key);
        if let Some(child) = child {
            self.children.push(child);
        }
    }
}
