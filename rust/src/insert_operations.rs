//! INSERT operations for BTree.
//!
//! Insertion never revisits a node. Before the descent enters a child that
//! is already full, the child is split and its median moves into the parent,
//! so the leaf that finally receives the value always has room.
//!
//! Order 3 is the exception: a full node there holds two keys, which cannot
//! be split ahead of time into two non-empty halves. Those trees insert at
//! the leaf and split overflowing nodes as the recursion unwinds.

use crate::types::{BTree, Node, NodeId};

impl<T: Ord> BTree<T> {
    /// Insert a value, keeping any equal values already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(7);
    /// tree.insert(7);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        if self.rebalances_ahead() {
            if self.arena[self.root].is_full(self.max_keys()) {
                self.grow_root();
            }
            self.insert_non_full(self.root, value);
        } else if let Some((promoted, right_id)) = self.insert_then_split(self.root, value) {
            let mut new_root = Node::new_internal(self.order);
            new_root.keys.push(promoted);
            new_root.children.extend([self.root, right_id]);
            self.root = self.arena.allocate(new_root);
            self.height += 1;
        }
        self.len += 1;
    }

    /// Wrap the full root in a new root and split it.
    fn grow_root(&mut self) {
        let mut new_root = Node::new_internal(self.order);
        new_root.children.push(self.root);

        let new_root_id = self.arena.allocate(new_root);
        self.root = new_root_id;
        self.split_child(new_root_id, 0);
        self.height += 1;
    }

    fn insert_non_full(&mut self, node_id: NodeId, value: T) {
        let node = &mut self.arena[node_id];
        let mut child_index = node.upper_bound(&value);

        if node.is_leaf {
            node.keys.insert(child_index, value);
            return;
        }

        let child_id = node.children[child_index];
        if self.arena[child_id].is_full(self.max_keys()) {
            self.split_child(node_id, child_index);
            if self.arena[node_id].keys[child_index] < value {
                child_index += 1;
            }
        }

        let next = self.arena[node_id].children[child_index];
        self.insert_non_full(next, value);
    }

    /// Split the full child at `child_index`, promoting its median key into
    /// `parent_id` and linking the new right half after it.
    pub(crate) fn split_child(&mut self, parent_id: NodeId, child_index: usize) {
        let median = self.max_keys() / 2;
        let child_id = self.arena[parent_id].children[child_index];

        let (promoted, right) = self.arena[child_id].split_at_median(median);
        let right_id = self.arena.allocate(right);

        let parent = &mut self.arena[parent_id];
        parent.keys.insert(child_index, promoted);
        parent.children.insert(child_index + 1, right_id);
    }

    /// Insert below `node_id`, splitting on the way back up.
    ///
    /// Returns the promoted key and the new right sibling when `node_id`
    /// overflowed; the caller links them in after `node_id`.
    fn insert_then_split(&mut self, node_id: NodeId, value: T) -> Option<(T, NodeId)> {
        let node = &mut self.arena[node_id];
        let index = node.upper_bound(&value);

        if node.is_leaf {
            node.keys.insert(index, value);
        } else {
            let child_id = node.children[index];
            let (promoted, right_id) = self.insert_then_split(child_id, value)?;
            let node = &mut self.arena[node_id];
            node.keys.insert(index, promoted);
            node.children.insert(index + 1, right_id);
        }

        let max_keys = self.max_keys();
        let node = &mut self.arena[node_id];
        if node.len() <= max_keys {
            return None;
        }

        let median = node.len() / 2;
        let (promoted, right) = node.split_at_median(median);
        Some((promoted, self.arena.allocate(right)))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BTree;

    #[test]
    fn test_insert_into_root_leaf() {
        let mut tree = BTree::new(5).unwrap();
        for value in [30, 10, 20] {
            tree.insert(value);
        }
        assert_eq!(tree.height, 0);
        assert_eq!(tree.arena[tree.root].keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_root_split_order_3() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert(10);
        tree.insert(20);
        tree.insert(5);

        let root = &tree.arena[tree.root];
        assert_eq!(tree.height, 1);
        assert_eq!(root.keys, vec![10]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(tree.arena[root.children[0]].keys, vec![5]);
        assert_eq!(tree.arena[root.children[1]].keys, vec![20]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_descending_inserts_stay_shallow_order_3() {
        let mut tree = BTree::new(3).unwrap();
        for value in (0..10_000).rev() {
            tree.insert(value);
        }
        // every internal node has at least two children
        assert!(tree.height() <= 12, "height {}", tree.height());
        let (leaves, internals) = tree.count_nodes_in_tree();
        assert!(leaves + internals <= tree.len());
        tree.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_internal_split_order_3() {
        let mut tree = BTree::new(3).unwrap();
        for value in 1..=7 {
            tree.insert(value);
        }
        // full binary shape: [4] over [2] [6] over four single-key leaves
        assert_eq!(tree.height, 2);
        assert_eq!(tree.arena[tree.root].keys, vec![4]);
        assert_eq!(tree.leaf_sizes(), vec![1, 1, 1, 1]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_split_child_promotes_median() {
        let mut tree = BTree::new(6).unwrap();
        for value in 1..=5 {
            tree.insert(value);
        }
        // root leaf is full at five keys; the sixth insert splits at index 2
        tree.insert(6);

        let root = &tree.arena[tree.root];
        assert_eq!(root.keys, vec![3]);
        assert_eq!(tree.arena[root.children[0]].keys, vec![1, 2]);
        assert_eq!(tree.arena[root.children[1]].keys, vec![4, 5, 6]);
    }

    #[test]
    fn test_duplicates_follow_equal_keys() {
        let mut tree = BTree::new(4).unwrap();
        for value in [5, 5, 5, 5, 5, 5, 5] {
            tree.insert(value);
        }
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.iter().filter(|v| **v == 5).count(), 7);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_height_grows_logarithmically() {
        let mut tree = BTree::new(4).unwrap();
        for value in 0..1000 {
            tree.insert(value);
        }
        // minimum fanout of an order-4 node is 2
        assert!(tree.height() <= 10);
        assert!(tree.check_invariants());
    }
}
