//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, structure dumps, and test
//! helpers for the B-tree implementation.

use std::fmt::{self, Write};

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, NodeId};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T: Ord> BTree<T> {
    /// Check if the tree maintains its B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Covers key order within and across nodes, the node fill bounds, the
    /// child count of internal nodes, leaf depth against `height`, the
    /// element count, and that the arena holds exactly the reachable nodes.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let mut reachable = 0;
        let stored = self.check_node(self.root, None, None, 0, &mut reachable)?;

        if stored != self.len {
            return Err(format!(
                "len is {} but the tree stores {} keys",
                self.len, stored
            ));
        }

        if reachable != self.arena.len() {
            return Err(format!(
                "{} nodes reachable from the root vs {} allocated in the arena",
                reachable,
                self.arena.len()
            ));
        }

        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity(operation, &e))
    }

    /// Check one subtree and return the number of keys stored in it.
    ///
    /// Every key must lie within `[lower, upper]`; the bounds are inclusive
    /// because equal keys may sit on both sides of a separator.
    fn check_node(
        &self,
        node_id: NodeId,
        lower: Option<&T>,
        upper: Option<&T>,
        depth: usize,
        reachable: &mut usize,
    ) -> Result<usize, String> {
        let node = self
            .arena
            .get(node_id)
            .ok_or_else(|| format!("node {} is referenced but not allocated", node_id))?;
        *reachable += 1;

        if node.keys.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(format!("node {} keys are out of order", node_id));
        }

        if node.keys.len() > self.max_keys() {
            return Err(format!(
                "node {} holds {} keys, more than {}",
                node_id,
                node.keys.len(),
                self.max_keys()
            ));
        }

        if node_id == self.root && !node.is_leaf && node.keys.is_empty() {
            return Err(format!("internal root {} holds no keys", node_id));
        }

        if node_id != self.root && node.keys.len() < self.min_keys() {
            return Err(format!(
                "node {} holds {} keys, fewer than {}",
                node_id,
                node.keys.len(),
                self.min_keys()
            ));
        }

        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first < lower {
                return Err(format!("node {} has a key below its separator", node_id));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last > upper {
                return Err(format!("node {} has a key above its separator", node_id));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(format!("leaf {} has children", node_id));
            }
            if depth != self.height {
                return Err(format!(
                    "leaf {} is at depth {} but the height is {}",
                    node_id, depth, self.height
                ));
            }
            return Ok(node.keys.len());
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(format!(
                "internal node {} has {} keys and {} children",
                node_id,
                node.keys.len(),
                node.children.len()
            ));
        }

        let mut stored = node.keys.len();
        for (i, &child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == node.keys.len() {
                upper
            } else {
                node.keys.get(i)
            };
            stored += self.check_node(child, child_lower, child_upper, depth + 1, reachable)?;
        }

        Ok(stored)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<T> BTree<T> {
    /// Returns the number of keys in every leaf, left to right.
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        self.collect_leaf_sizes(self.root, &mut sizes);
        sizes
    }

    fn collect_leaf_sizes(&self, node_id: NodeId, sizes: &mut Vec<usize>) {
        let Some(node) = self.arena.get(node_id) else {
            return;
        };
        if node.is_leaf {
            sizes.push(node.keys.len());
            return;
        }
        for &child in &node.children {
            self.collect_leaf_sizes(child, sizes);
        }
    }
}

impl<T: fmt::Debug> BTree<T> {
    /// Render the node layout, one line per node, indented by depth.
    ///
    /// ```
    /// use btree_collection::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// for value in [10, 20, 5] {
    ///     tree.insert(value);
    /// }
    /// let dump = tree.render_structure();
    /// assert!(dump.starts_with("Internal"));
    /// assert!(dump.contains("  Leaf"));
    /// ```
    pub fn render_structure(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, 0, &mut out);
        out
    }

    /// Prints the node layout for debugging.
    pub fn print_node_chain(&self) {
        println!("Tree structure (order {}, height {}):", self.order, self.height);
        print!("{}", self.render_structure());
    }

    fn render_node(&self, node_id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let Some(node) = self.arena.get(node_id) else {
            let _ = writeln!(out, "{}Node[id={}]: <missing>", indent, node_id);
            return;
        };

        let kind = if node.is_leaf { "Leaf" } else { "Internal" };
        let _ = writeln!(out, "{}{}[id={}]: {:?}", indent, kind, node_id, node.keys);
        for &child in &node.children {
            self.render_node(child, depth + 1, out);
        }
    }
}
