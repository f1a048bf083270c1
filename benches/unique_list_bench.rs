//! UniqueList benchmarks.
//!
//! Every mutation scans the list for duplicates, so these track how the
//! linear checks scale across construction, appends, inserts and overwrites.
//!
//! Pre-generated Vec is reused via clone() in setup so each iteration starts
//! from the same data.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unique_list::{ListMode, UniqueList};

const SIZES: [i32; 3] = [100, 1000, 5000];

fn generate_vec(size: i32) -> Vec<i32> {
    (0..size).collect()
}

/// Half of the values repeat, so lenient construction has work to drop.
fn generate_vec_with_duplicates(size: i32) -> Vec<i32> {
    (0..size).map(|value| value % (size / 2).max(1)).collect()
}

fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_try_from_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_list_try_from_iter");

    for size in SIZES {
        let clean = generate_vec(size);
        let dirty = generate_vec_with_duplicates(size);

        group.bench_with_input(BenchmarkId::new("strict", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || clean.clone(),
                |elements| {
                    black_box(UniqueList::try_from_iter(
                        black_box(elements),
                        ListMode::strict(),
                    ))
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("lenient_with_duplicates", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || dirty.clone(),
                    |elements| black_box(elements.into_iter().collect::<UniqueList<i32>>()),
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_list_push");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("push", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = UniqueList::new();
                let mut appended = 0;
                for value in 0..size {
                    if list.push(black_box(value)) == Ok(true) {
                        appended += 1;
                    }
                }
                black_box((list, appended))
            });
        });

        let base: UniqueList<i32> = generate_vec(size).into();
        group.bench_with_input(
            BenchmarkId::new("push_all_overlapping", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (base.clone(), generate_vec_with_duplicates(size)),
                    |(mut list, batch)| {
                        let result = list.push_all(black_box(batch));
                        black_box((list, result))
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_list_insert");

    for size in SIZES {
        let base: UniqueList<i32> = generate_vec(size).into();

        group.bench_with_input(BenchmarkId::new("insert_front", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut list| {
                    let result = list.insert(0, black_box(size));
                    black_box((list, result))
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("insert_existing", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut list| {
                        let result = list.insert(0, black_box(size - 1));
                        black_box((list, result))
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_set_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_list_set_range");

    for size in SIZES {
        let base = UniqueList::try_from_iter(generate_vec(size), ListMode::strict())
            .expect("generated values are distinct");
        let quarter = usize::try_from(size / 4).expect("size is positive");

        group.bench_with_input(BenchmarkId::new("set_range", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut list| {
                    let replacement = (size..size + size / 4).collect::<Vec<_>>();
                    let result = list.set_range(0, quarter, black_box(replacement), 0);
                    black_box((list, result))
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_try_from_iter,
    benchmark_push,
    benchmark_insert,
    benchmark_set_range
);

criterion_main!(benches);
