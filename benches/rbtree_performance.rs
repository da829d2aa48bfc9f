//! Performance benchmarks for the red-black tree key set.
//!
//! This module benchmarks:
//! - Sequential (worst case for an unbalanced tree) and scattered insertions
//! - Deletions after bulk insertion
//! - In-order traversal
//!
//! `BTreeSet` runs alongside as a baseline.
//!
//! Run with: cargo bench

use std::collections::BTreeSet;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rbtree_set::RedBlackTree;

/// Deterministic scatter of `0..size` so runs are comparable.
fn scattered(size: i64) -> Vec<i64> {
    (0..size).map(|i| (i * 7_919) % size).collect()
}

fn filled(keys: &[i64]) -> RedBlackTree {
    let mut tree = RedBlackTree::new();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

fn bench_insertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertions");

    for size in [1_000i64, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, &size| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for key in 0..size {
                    tree.insert(black_box(key)).unwrap();
                }
                black_box(tree.height())
            });
        });

        let keys = scattered(*size);
        group.bench_with_input(BenchmarkId::new("scattered", size), &keys, |b, keys| {
            b.iter(|| black_box(filled(keys)));
        });
        group.bench_with_input(BenchmarkId::new("btreeset_scattered", size), &keys, |b, keys| {
            b.iter(|| black_box(keys.iter().copied().collect::<BTreeSet<_>>()));
        });
    }
    group.finish();
}

fn bench_deletions(c: &mut Criterion) {
    let mut group = c.benchmark_group("deletions");

    for size in [1_000i64, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let keys = scattered(*size);

        group.bench_with_input(BenchmarkId::new("delete_all", size), &keys, |b, keys| {
            b.iter_batched(
                || filled(keys),
                |mut tree| {
                    for &key in keys.iter().rev() {
                        tree.delete(black_box(key)).unwrap();
                    }
                    black_box(tree.is_empty())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [1_000i64, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let tree = filled(&scattered(*size));

        group.bench_with_input(BenchmarkId::new("keys", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.keys().sum::<i64>()));
        });
        group.bench_with_input(BenchmarkId::new("views", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.iter().filter(|view| view.is_leaf()).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertions, bench_deletions, bench_traversal);
criterion_main!(benches);
