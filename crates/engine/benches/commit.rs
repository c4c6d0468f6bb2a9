//! Commit cost benchmarks.
//!
//! Commit must be bounded by the closed scope's own write set. Varying
//! the base size while holding the scope size fixed should leave commit
//! time flat; varying the scope size should scale it linearly.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lamina_engine::TransactionalStore;

fn store_with_base(base_size: usize) -> TransactionalStore {
    let mut store = TransactionalStore::new();
    for i in 0..base_size {
        store.set(&format!("base{}", i), "v");
    }
    store
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");

    for base_size in [1_000usize, 100_000] {
        for scope_size in [10usize, 1_000] {
            group.bench_with_input(
                BenchmarkId::new(format!("base_{}", base_size), scope_size),
                &scope_size,
                |b, &scope_size| {
                    b.iter_batched(
                        || {
                            let mut store = store_with_base(base_size);
                            store.begin();
                            for i in 0..scope_size {
                                store.set(&format!("k{}", i), "v");
                            }
                            store
                        },
                        |mut store| {
                            store.commit().unwrap();
                            black_box(store)
                        },
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_commit);
criterion_main!(benches);
