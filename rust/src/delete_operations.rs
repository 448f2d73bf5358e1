//! DELETE operations for BTree.
//!
//! Deletion is single-pass like insertion. Before the descent enters a child
//! that sits at the minimum fill, the child is topped up by borrowing a key
//! through the parent or by merging it with a sibling, so a key can always
//! be taken out of the node the descent ends in.
//!
//! Order 3 cannot merge ahead of time, since two one-key siblings and their
//! separator overflow a node. Those trees remove first and repair each
//! child that fell below the minimum as the recursion unwinds.

use std::mem;

use crate::types::{BTree, KeySearch, NodeId};

impl<T: Ord> BTree<T> {
    // ============================================================================
    // PUBLIC DELETE OPERATIONS
    // ============================================================================

    /// Remove one instance of `value`.
    ///
    /// Returns `true` if an instance was removed. A missing value leaves the
    /// tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(10);
    /// tree.insert(20);
    /// assert!(tree.remove(&20));
    /// assert!(!tree.remove(&20));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove one instance of `value` and return the stored element.
    ///
    /// When several equal elements are stored, the one found highest on the
    /// search path is removed, and within a node the leftmost one.
    pub fn take(&mut self, value: &T) -> Option<T> {
        if !self.contains(value) {
            return None;
        }

        let removed = if self.rebalances_ahead() {
            self.delete_recursive(self.root, value)
        } else {
            self.delete_then_repair(self.root, value)
        };
        if removed.is_some() {
            self.len -= 1;
        }
        self.collapse_root_if_needed();
        removed
    }

    /// Remove and return the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let removed = if self.rebalances_ahead() {
            self.remove_min(self.root)
        } else {
            self.pop_min_then_repair(self.root)
        };
        if removed.is_some() {
            self.len -= 1;
        }
        self.collapse_root_if_needed();
        removed
    }

    /// Remove and return the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let removed = if self.rebalances_ahead() {
            self.remove_max(self.root)
        } else {
            self.pop_max_then_repair(self.root)
        };
        if removed.is_some() {
            self.len -= 1;
        }
        self.collapse_root_if_needed();
        removed
    }

    // ============================================================================
    // RECURSIVE DESCENT
    // ============================================================================

    fn delete_recursive(&mut self, node_id: NodeId, value: &T) -> Option<T> {
        let node = &mut self.arena[node_id];

        match node.find_key_index(value) {
            KeySearch::Found(index) if node.is_leaf => Some(node.keys.remove(index)),
            KeySearch::Found(index) => self.delete_separator(node_id, index, value),
            KeySearch::InsertAt(_) if node.is_leaf => None,
            KeySearch::InsertAt(mut child_index) => {
                let child_id = node.children[child_index];
                if self.arena[child_id].len() <= self.min_keys() {
                    self.fill(node_id, child_index);
                    // a merge may have pulled the child one slot to the left
                    child_index = self.arena[node_id].find_key_index(value).index();
                }

                let next = self.arena[node_id].children[child_index];
                self.delete_recursive(next, value)
            }
        }
    }

    /// Remove the separator at `index` of an internal node.
    ///
    /// The separator is replaced by its predecessor or successor when the
    /// corresponding child can spare a key; otherwise both children are
    /// merged around it and the deletion continues in the merged node.
    fn delete_separator(&mut self, node_id: NodeId, index: usize, value: &T) -> Option<T> {
        let min_keys = self.min_keys();
        let (left_id, right_id) = {
            let node = &self.arena[node_id];
            (node.children[index], node.children[index + 1])
        };

        if self.arena[left_id].can_lend(min_keys) {
            let predecessor = self.remove_max(left_id)?;
            Some(mem::replace(&mut self.arena[node_id].keys[index], predecessor))
        } else if self.arena[right_id].can_lend(min_keys) {
            let successor = self.remove_min(right_id)?;
            Some(mem::replace(&mut self.arena[node_id].keys[index], successor))
        } else {
            self.merge(node_id, index);
            self.delete_recursive(left_id, value)
        }
    }

    /// Remove the largest key in the subtree, filling the rightmost child
    /// before each step down.
    fn remove_max(&mut self, node_id: NodeId) -> Option<T> {
        if self.arena[node_id].is_leaf {
            return self.arena[node_id].keys.pop();
        }

        let last = self.arena[node_id].keys.len();
        let child_id = self.arena[node_id].children[last];
        if self.arena[child_id].len() <= self.min_keys() {
            self.fill(node_id, last);
        }

        let node = &self.arena[node_id];
        let next = node.children[node.keys.len()];
        self.remove_max(next)
    }

    /// Remove the smallest key in the subtree, filling the leftmost child
    /// before each step down.
    fn remove_min(&mut self, node_id: NodeId) -> Option<T> {
        if self.arena[node_id].is_leaf {
            return self.arena[node_id].pop_front_entry().map(|(key, _)| key);
        }

        let child_id = self.arena[node_id].children[0];
        if self.arena[child_id].len() <= self.min_keys() {
            self.fill(node_id, 0);
        }

        let next = self.arena[node_id].children[0];
        self.remove_min(next)
    }

    // ============================================================================
    // REMOVE, THEN REPAIR
    // ============================================================================

    /// Remove `value` below `node_id`, then repair the child the recursion
    /// came back from. A separator is replaced by its predecessor.
    fn delete_then_repair(&mut self, node_id: NodeId, value: &T) -> Option<T> {
        let node = &mut self.arena[node_id];

        match node.find_key_index(value) {
            KeySearch::Found(index) if node.is_leaf => Some(node.keys.remove(index)),
            KeySearch::InsertAt(_) if node.is_leaf => None,
            KeySearch::Found(index) => {
                let left_id = node.children[index];
                let predecessor = self.pop_max_then_repair(left_id)?;
                let removed = mem::replace(&mut self.arena[node_id].keys[index], predecessor);
                self.repair_child(node_id, index);
                Some(removed)
            }
            KeySearch::InsertAt(child_index) => {
                let child_id = node.children[child_index];
                let removed = self.delete_then_repair(child_id, value)?;
                self.repair_child(node_id, child_index);
                Some(removed)
            }
        }
    }

    fn pop_min_then_repair(&mut self, node_id: NodeId) -> Option<T> {
        if self.arena[node_id].is_leaf {
            return self.arena[node_id].pop_front_entry().map(|(key, _)| key);
        }

        let first = self.arena[node_id].children[0];
        let removed = self.pop_min_then_repair(first)?;
        self.repair_child(node_id, 0);
        Some(removed)
    }

    fn pop_max_then_repair(&mut self, node_id: NodeId) -> Option<T> {
        let node = &self.arena[node_id];
        if node.is_leaf {
            return self.arena[node_id].keys.pop();
        }

        let last = node.keys.len();
        let child_id = node.children[last];
        let removed = self.pop_max_then_repair(child_id)?;
        self.repair_child(node_id, last);
        Some(removed)
    }

    /// Borrow or merge for `children[index]` if a removal left it below the
    /// minimum. A merge can leave the parent below the minimum in turn; its
    /// own caller repairs it.
    fn repair_child(&mut self, node_id: NodeId, index: usize) {
        let child_id = self.arena[node_id].children[index];
        if self.arena[child_id].len() < self.min_keys() {
            self.fill(node_id, index);
        }
    }

    // ============================================================================
    // REBALANCING
    // ============================================================================

    /// Bring `children[index]` above the minimum fill before it is entered,
    /// or back up to it after a removal.
    ///
    /// Prefers borrowing from the left sibling, then the right sibling, and
    /// merges only when neither sibling can spare a key.
    pub(crate) fn fill(&mut self, node_id: NodeId, index: usize) {
        let min_keys = self.min_keys();
        let node = &self.arena[node_id];
        let last = node.keys.len();

        let left_can_lend =
            index > 0 && self.arena[node.children[index - 1]].can_lend(min_keys);
        let right_can_lend =
            index < last && self.arena[node.children[index + 1]].can_lend(min_keys);

        if left_can_lend {
            self.borrow_from_previous(node_id, index);
        } else if right_can_lend {
            self.borrow_from_next(node_id, index);
        } else if index < last {
            self.merge(node_id, index);
        } else if let Some(left) = index.checked_sub(1) {
            self.merge(node_id, left);
        }
    }

    /// Rotate the left sibling's last key up into the parent and the parent
    /// separator down into the front of `children[index]`.
    pub(crate) fn borrow_from_previous(&mut self, node_id: NodeId, index: usize) {
        let (sibling_id, child_id) = {
            let node = &self.arena[node_id];
            (node.children[index - 1], node.children[index])
        };

        let Some((sibling_key, moved_child)) = self.arena[sibling_id].pop_back_entry() else {
            return;
        };
        let separator = mem::replace(&mut self.arena[node_id].keys[index - 1], sibling_key);
        self.arena[child_id].push_front_entry(separator, moved_child);
    }

    /// Rotate the right sibling's first key up into the parent and the parent
    /// separator down onto the back of `children[index]`.
    pub(crate) fn borrow_from_next(&mut self, node_id: NodeId, index: usize) {
        let (child_id, sibling_id) = {
            let node = &self.arena[node_id];
            (node.children[index], node.children[index + 1])
        };

        let Some((sibling_key, moved_child)) = self.arena[sibling_id].pop_front_entry() else {
            return;
        };
        let separator = mem::replace(&mut self.arena[node_id].keys[index], sibling_key);
        self.arena[child_id].push_back_entry(separator, moved_child);
    }

    /// Fold `children[index + 1]` and the separator between them into
    /// `children[index]`, releasing the right node.
    pub(crate) fn merge(&mut self, node_id: NodeId, index: usize) {
        let node = &mut self.arena[node_id];
        let separator = node.keys.remove(index);
        let right_id = node.children.remove(index + 1);
        let left_id = node.children[index];

        if let Some(right) = self.arena.deallocate(right_id) {
            self.arena[left_id].merge_from(separator, right);
        }
    }

    /// Replace a keyless internal root with its only child.
    fn collapse_root_if_needed(&mut self) {
        let root = &self.arena[self.root];
        if !root.keys.is_empty() || root.is_leaf {
            return;
        }

        let only_child = root.children[0];
        self.arena.deallocate(self.root);
        self.root = only_child;
        self.height -= 1;
    }
}
