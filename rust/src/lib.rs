//! B-tree implementation in Rust with a sorted-collection API.
//!
//! This crate provides an order-parameterized, in-memory B-tree that stores
//! elements in every node, keeps all leaves at the same depth, and supports
//! insertion, deletion, lookup, ordered traversal, and range queries.
//! Duplicate elements are kept and counted individually.
//!
//! Both insertion and deletion rebalance on the way down: full nodes are
//! split before they are entered and thin nodes are refilled before they
//! are entered, so neither operation walks back up the tree. Order 3 is
//! the one exception. Its two-key nodes cannot be split or merged ahead of
//! time, so order-3 trees split and repair as the recursion unwinds.
//!
//! ```
//! use btree_collection::BTree;
//!
//! let mut tree = BTree::new(5).unwrap();
//! for value in (0..10).map(|v| v * 10) {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.min(), Some(&0));
//! assert_eq!(tree.max(), Some(&90));
//! assert!(tree.remove(&40));
//! assert_eq!(
//!     tree.range_search(&25, &75).copied().collect::<Vec<_>>(),
//!     vec![30, 50, 60, 70]
//! );
//! ```

mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod range_queries;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use construction::validation as order_validation;
pub use error::{BTreeError, BTreeResult, InitResult};
pub use iteration::Iter;
pub use range_queries::Range;
pub use types::{BTree, KeySearch, Node, NodeId, DEFAULT_ORDER, MIN_ORDER, NULL_NODE};
