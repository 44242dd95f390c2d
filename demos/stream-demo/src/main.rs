//! Walkthrough of the SEAM engines: fixed windows over an ordered stream,
//! then out-of-order pair matching over a scrambled one.

use tracing_subscriber::EnvFilter;

use seam_core::{Adjacent, SuppressLabel, Tagged};
use seam_window::{Pair, Window, WindowExt};
use seam_test::{ArrivalScrambler, ScrambleConfig};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    fixed_windows_walkthrough();
    matcher_walkthrough();
    sentinel_walkthrough();
}

/// Fixed-arity windows over an in-order stream: one window per element,
/// trailing windows padded with absent slots.
fn fixed_windows_walkthrough() {
    println!("=== Fixed windows ===");

    let readings = [3i64, 1, 4, 1, 5];
    println!("readings: {:?}", readings);

    let pair_sums: Vec<i64> = readings
        .into_iter()
        .pair_windows()
        .apply_windows(|w: Window<i64>| w.present().copied().sum())
        .collect();
    println!("pair sums:    {:?}", pair_sums);

    let triplet_sums: Vec<i64> = readings
        .into_iter()
        .triplet_windows()
        .apply_windows(|w: Window<i64>| w.present().copied().sum())
        .collect();
    println!("triplet sums: {:?}", triplet_sums);
    println!();
}

/// A chain of labeled frames delivered out of order still pairs up:
/// every adjacent link forms, and only the chain ends drain alone.
fn matcher_walkthrough() {
    println!("=== Out-of-order matching ===");

    let frames: Vec<Tagged<u64, &str>> = vec![
        Tagged::new(1, "alpha"),
        Tagged::new(2, "bravo"),
        Tagged::new(3, "charlie"),
        Tagged::new(4, "delta"),
        Tagged::new(5, "echo"),
        Tagged::new(6, "foxtrot"),
    ];

    let mut scrambler = ArrivalScrambler::new(ScrambleConfig::shuffled());
    let arrivals = scrambler.scramble(frames);
    let order: Vec<u64> = arrivals.iter().map(|frame| frame.label).collect();
    println!("arrival order: {:?}", order);

    for pair in arrivals.into_iter().match_pairs(Adjacent) {
        print_pair(&pair);
    }
    println!();
}

/// A zero-labeled sentinel primes the stream but is withheld from the
/// final drain by the flush policy.
fn sentinel_walkthrough() {
    println!("=== Sentinel suppression ===");

    let labels = [0u64, 3, 2, 4, 1];
    println!("labels: {:?}", labels);

    let pairs = labels
        .into_iter()
        .match_pairs(Adjacent)
        .with_flush_policy(SuppressLabel(0u64));

    for pair in pairs {
        match pair.second {
            Some(second) => println!("  matched  {} + {}", pair.first, second),
            None => println!("  drained  {}", pair.first),
        }
    }
}

fn print_pair(pair: &Pair<Tagged<u64, &str>>) {
    match &pair.second {
        Some(second) => println!(
            "  matched  #{} {} + #{} {}",
            pair.first.label, pair.first.value, second.label, second.value
        ),
        None => println!("  drained  #{} {}", pair.first.label, pair.first.value),
    }
}
