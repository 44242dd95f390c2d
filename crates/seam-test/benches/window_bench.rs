//! Benchmarks for fixed-arity windowing

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seam_window::{apply, FixedWindows, Window};

fn bench_pair_windows(c: &mut Criterion) {
    let input: Vec<i64> = (0..1024).collect();

    c.bench_function("pair_windows_1024", |b| {
        b.iter(|| {
            let windows = FixedWindows::pairs(black_box(input.clone()).into_iter());
            black_box(windows.count())
        })
    });
}

fn bench_triplet_windows(c: &mut Criterion) {
    let input: Vec<i64> = (0..1024).collect();

    c.bench_function("triplet_windows_1024", |b| {
        b.iter(|| {
            let windows = FixedWindows::triplets(black_box(input.clone()).into_iter());
            black_box(windows.count())
        })
    });
}

fn bench_wide_windows(c: &mut Criterion) {
    let input: Vec<i64> = (0..1024).collect();

    c.bench_function("arity_16_windows_1024", |b| {
        b.iter(|| {
            let windows =
                FixedWindows::new(black_box(input.clone()).into_iter(), 16).unwrap();
            black_box(windows.count())
        })
    });
}

fn bench_apply_sum(c: &mut Criterion) {
    let input: Vec<i64> = (0..1024).collect();

    c.bench_function("apply_sum_pairs_1024", |b| {
        b.iter(|| {
            let windows = FixedWindows::pairs(black_box(input.clone()).into_iter());
            let sums = apply(|w: Window<i64>| w.present().copied().sum::<i64>(), windows);
            black_box(sums.sum::<i64>())
        })
    });
}

criterion_group!(
    benches,
    bench_pair_windows,
    bench_triplet_windows,
    bench_wide_windows,
    bench_apply_sum,
);
criterion_main!(benches);
