use btree_collection::BTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 42;

fn generate_test_data(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size)
        .map(|_| rng.gen_range(0..size as i32 * 2))
        .collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.sample_size(50);

    for size in [1000, 10000].iter() {
        let data = generate_test_data(*size);

        for order in [4, 16, 64] {
            group.bench_with_input(
                BenchmarkId::new(format!("btree_order_{}", order), size),
                size,
                |b, _| {
                    b.iter(|| {
                        let mut tree = BTree::new(order).unwrap();
                        for value in &data {
                            tree.insert(*value);
                        }
                        black_box(tree)
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), size, |b, _| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for value in &data {
                    set.insert(*value);
                }
                black_box(set)
            })
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let data = generate_test_data(10000);

    let mut tree = BTree::new(16).unwrap();
    tree.extend(data.iter().copied());
    let set: BTreeSet<i32> = data.iter().copied().collect();

    group.bench_function("btree_contains", |b| {
        b.iter(|| {
            for probe in (0..20000).step_by(7) {
                black_box(tree.contains(&probe));
            }
        })
    });

    group.bench_function("std_btreeset_contains", |b| {
        b.iter(|| {
            for probe in (0..20000).step_by(7) {
                black_box(set.contains(&probe));
            }
        })
    });

    group.finish();
}

fn bench_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("deletion");
    group.sample_size(30);
    let data = generate_test_data(10000);

    for order in [4, 16, 64] {
        group.bench_function(format!("btree_order_{}", order), |b| {
            b.iter_batched(
                || {
                    let mut tree = BTree::new(order).unwrap();
                    tree.extend(data.iter().copied());
                    tree
                },
                |mut tree| {
                    for value in &data {
                        tree.remove(value);
                    }
                    black_box(tree)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");
    let tree: BTree<i32> = (0..10000).collect();
    let set: BTreeSet<i32> = (0..10000).collect();

    group.bench_function("btree_iter", |b| {
        b.iter(|| black_box(tree.iter().sum::<i32>()))
    });

    group.bench_function("std_btreeset_iter", |b| {
        b.iter(|| black_box(set.iter().sum::<i32>()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_deletion,
    bench_iteration
);
criterion_main!(benches);
