//! Randomized workloads replayed against a `std::collections::BTreeMap`
//! counting multiset.

use btree_collection::BTree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SEED: u64 = 42;
const OPERATIONS: usize = 5_000;
const KEY_SPACE: i32 = 500;

/// Multiset model: value -> number of stored instances.
#[derive(Default)]
struct Model {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl Model {
    fn insert(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    fn remove(&mut self, value: i32) -> bool {
        match self.counts.get_mut(&value) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&value);
                }
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    fn sorted(&self) -> Vec<i32> {
        self.counts
            .iter()
            .flat_map(|(value, count)| std::iter::repeat(*value).take(*count))
            .collect()
    }

    fn range(&self, min: i32, max: i32) -> Vec<i32> {
        if min > max {
            return Vec::new();
        }
        self.counts
            .range(min..=max)
            .flat_map(|(value, count)| std::iter::repeat(*value).take(*count))
            .collect()
    }
}

fn run_workload(order: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BTree::new(order).unwrap();
    let mut model = Model::default();

    for step in 0..OPERATIONS {
        let value = rng.gen_range(0..KEY_SPACE);
        match rng.gen_range(0..10) {
            0..=4 => {
                tree.insert(value);
                model.insert(value);
            }
            5..=7 => {
                assert_eq!(
                    tree.remove(&value),
                    model.remove(value),
                    "order {} step {}: remove({})",
                    order,
                    step,
                    value
                );
            }
            8 => {
                assert_eq!(
                    tree.contains(&value),
                    model.counts.contains_key(&value),
                    "order {} step {}: contains({})",
                    order,
                    step,
                    value
                );
            }
            _ => {
                let max = rng.gen_range(0..KEY_SPACE);
                let hits: Vec<i32> = tree.range_search(&value, &max).copied().collect();
                assert_eq!(hits, model.range(value, max), "order {} step {}", order, step);
            }
        }

        assert_eq!(tree.len(), model.len);
        if step % 500 == 0 {
            tree.check_invariants_detailed()
                .unwrap_or_else(|e| panic!("order {} step {}: {}", order, step, e));
        }
    }

    assert_eq!(tree.to_vec(), model.sorted());
    assert_eq!(tree.min().copied(), model.counts.keys().next().copied());
    assert_eq!(tree.max().copied(), model.counts.keys().next_back().copied());
    tree.check_invariants_detailed().unwrap();
}

#[test]
fn test_random_workload_small_orders() {
    for order in 3..=6 {
        run_workload(order, SEED + order as u64);
    }
}

#[test]
fn test_random_workload_wide_orders() {
    for order in [16, 32, 64] {
        run_workload(order, SEED + order as u64);
    }
}

#[test]
fn test_random_drain_matches_model() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = BTree::new(5).unwrap();
    let mut model = Model::default();

    let values: Vec<i32> = (0..2_000).map(|_| rng.gen_range(0..KEY_SPACE)).collect();
    for &value in &values {
        tree.insert(value);
        model.insert(value);
    }

    let mut removal_order = values.clone();
    removal_order.shuffle(&mut rng);

    for value in removal_order {
        assert!(tree.remove(&value));
        assert!(model.remove(value));
        assert_eq!(tree.len(), model.len);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    tree.check_invariants_detailed().unwrap();
}

#[test]
fn test_iteration_matches_btreeset() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = BTree::new(7).unwrap();
    let mut set = std::collections::BTreeSet::new();

    for _ in 0..3_000 {
        let value: i64 = rng.gen_range(-100_000..100_000);
        if set.insert(value) {
            tree.insert(value);
        }
    }

    assert!(tree.iter().eq(set.iter()));
    assert!(tree.range(-500..500).eq(set.range(-500..500)));
    assert!(tree.range(..0).eq(set.range(..0)));
}
