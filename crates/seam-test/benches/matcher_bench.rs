//! Benchmarks for out-of-order pair matching

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seam_core::Adjacent;
use seam_test::{ArrivalScrambler, ScrambleConfig};
use seam_window::PairMatcher;

fn scrambled_chain(n: i64) -> Vec<i64> {
    let mut scrambler = ArrivalScrambler::new(ScrambleConfig::shuffled());
    scrambler.scramble((1..=n).collect())
}

fn bench_match_in_order_chain(c: &mut Criterion) {
    let input: Vec<i64> = (1..=512).collect();

    c.bench_function("match_in_order_chain_512", |b| {
        b.iter(|| {
            let matcher = PairMatcher::new(black_box(input.clone()).into_iter(), Adjacent);
            black_box(matcher.count())
        })
    });
}

fn bench_match_scrambled_chain(c: &mut Criterion) {
    let input = scrambled_chain(512);

    c.bench_function("match_scrambled_chain_512", |b| {
        b.iter(|| {
            let matcher = PairMatcher::new(black_box(input.clone()).into_iter(), Adjacent);
            black_box(matcher.count())
        })
    });
}

fn bench_match_no_matches(c: &mut Criterion) {
    // Worst case for the cache: nothing ever pairs, every arrival scans
    // the whole working set and is then cached until the drain.
    let input: Vec<i64> = (0..256).map(|k| k * 10).collect();

    c.bench_function("match_no_matches_256", |b| {
        b.iter(|| {
            let matcher = PairMatcher::new(black_box(input.clone()).into_iter(), Adjacent);
            black_box(matcher.count())
        })
    });
}

fn bench_match_dense_repeats(c: &mut Criterion) {
    // Repeated labels retire quickly, keeping the cache small.
    let input: Vec<i64> = (0..512).map(|k| k % 4).collect();

    c.bench_function("match_dense_repeats_512", |b| {
        b.iter(|| {
            let matcher = PairMatcher::new(black_box(input.clone()).into_iter(), Adjacent);
            black_box(matcher.count())
        })
    });
}

criterion_group!(
    benches,
    bench_match_in_order_chain,
    bench_match_scrambled_chain,
    bench_match_no_matches,
    bench_match_dense_repeats,
);
criterion_main!(benches);
