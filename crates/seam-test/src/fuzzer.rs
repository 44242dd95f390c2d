//! Matcher fuzzer - randomized validation of pairing invariants
//!
//! Tests:
//! - Arrival-order invariance of pair formation
//! - Label ordering within every emitted pair
//! - Use-count bounds (nothing appears in more than two tuples)
//! - Full cache drain on every completed run
//! - Chain completeness under scrambled delivery

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seam_core::{Adjacent, Labeled, Tagged};
use seam_window::{MatchPhase, Pair, PairMatcher};

use crate::shuffle::{ArrivalScrambler, ScrambleConfig};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of randomized runs per scenario family
    pub run_count: usize,
    /// Longest consecutive chain to scramble
    pub max_chain_len: usize,
    /// Longest repeated-label stream to generate
    pub max_stream_len: usize,
    /// Label range for repeated-label streams
    pub label_range: i64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            run_count: 128,
            max_chain_len: 48,
            max_stream_len: 64,
            label_range: 8,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            run_count: 32,
            max_chain_len: 16,
            max_stream_len: 24,
            label_range: 6,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            run_count: 512,
            max_chain_len: 96,
            max_stream_len: 160,
            label_range: 12,
            seed: 42,
        }
    }
}

/// Fuzzing result
#[derive(Clone, Debug, Default)]
pub struct FuzzReport {
    pub runs: u64,
    pub tuples_emitted: u64,
    pub ordering_violations: u64,
    pub link_violations: u64,
    pub flush_violations: u64,
    pub bound_violations: u64,
    pub drain_violations: u64,
}

impl FuzzReport {
    pub fn is_valid(&self) -> bool {
        self.ordering_violations == 0
            && self.link_violations == 0
            && self.flush_violations == 0
            && self.bound_violations == 0
            && self.drain_violations == 0
    }
}

/// Matcher fuzzer
///
/// Drives the pair matcher through seeded random scenarios and tallies
/// every invariant violation it observes. A report with all-zero
/// violation counters means the run found nothing.
pub struct MatcherFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl MatcherFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        MatcherFuzzer { config, rng }
    }

    /// Run every scenario family and collect a report.
    pub fn run(&mut self) -> FuzzReport {
        let mut report = FuzzReport::default();

        for _ in 0..self.config.run_count {
            self.chain_run(&mut report);
            self.repeat_run(&mut report);
        }

        report
    }

    /// Scrambles a consecutive chain and checks that every adjacent link
    /// still forms, with only the endpoints left to flush.
    fn chain_run(&mut self, report: &mut FuzzReport) {
        let n = self.rng.gen_range(2..=self.config.max_chain_len) as i64;
        let chain: Vec<i64> = (1..=n).collect();

        let scramble = ScrambleConfig {
            reorder_prob: 1.0,
            max_displacement: None,
            seed: self.rng.gen(),
        };
        let arrivals = ArrivalScrambler::new(scramble).scramble(chain);

        let mut matcher = PairMatcher::new(arrivals.into_iter(), Adjacent);
        let pairs: Vec<Pair<i64>> = matcher.by_ref().collect();

        report.runs += 1;
        report.tuples_emitted += pairs.len() as u64;

        if !properties::ordered_within_pair(&pairs) {
            report.ordering_violations += 1;
        }
        if !properties::chain_links_complete(&pairs, n) {
            report.link_violations += 1;
        }
        if !properties::endpoints_flushed(&pairs, n) {
            report.flush_violations += 1;
        }
        if matcher.cache_occupancy() != 0 || matcher.phase() != MatchPhase::Done {
            report.drain_violations += 1;
        }
    }

    /// Streams with repeated labels from a narrow range: checks the
    /// use-count bound per element identity and the final drain.
    fn repeat_run(&mut self, report: &mut FuzzReport) {
        let len = self.rng.gen_range(1..=self.config.max_stream_len);
        let elements: Vec<Tagged<i64, usize>> = (0..len)
            .map(|idx| Tagged::new(self.rng.gen_range(0..self.config.label_range), idx))
            .collect();
        let total = elements.len();

        let mut matcher = PairMatcher::new(elements.into_iter(), Adjacent);
        let pairs: Vec<Pair<Tagged<i64, usize>>> = matcher.by_ref().collect();

        report.runs += 1;
        report.tuples_emitted += pairs.len() as u64;

        if !properties::ordered_within_pair(&pairs) {
            report.ordering_violations += 1;
        }
        if !properties::appearances_bounded(&pairs, total) {
            report.bound_violations += 1;
        }
        if matcher.cache_occupancy() != 0 || matcher.phase() != MatchPhase::Done {
            report.drain_violations += 1;
        }
    }
}

/// Invariant predicates over emitted tuples
pub mod properties {
    use super::*;

    /// Property: every matched pair is emitted lower label first.
    pub fn ordered_within_pair<T: Labeled>(pairs: &[Pair<T>]) -> bool {
        pairs.iter().all(|pair| match &pair.second {
            Some(second) => pair.first.label() <= second.label(),
            None => true,
        })
    }

    /// Property: a scrambled chain `1..=n` forms each adjacent link
    /// exactly once, whatever the arrival order was.
    pub fn chain_links_complete(pairs: &[Pair<i64>], n: i64) -> bool {
        let mut links: Vec<(i64, i64)> = pairs
            .iter()
            .filter_map(|pair| pair.second.map(|second| (pair.first, second)))
            .collect();
        links.sort();

        let expected: Vec<(i64, i64)> = (1..n).map(|k| (k, k + 1)).collect();
        links == expected
    }

    /// Property: only the two chain endpoints drain as singletons.
    pub fn endpoints_flushed(pairs: &[Pair<i64>], n: i64) -> bool {
        let mut flushed: Vec<i64> = pairs
            .iter()
            .filter(|pair| !pair.is_matched())
            .map(|pair| pair.first)
            .collect();
        flushed.sort();
        flushed == vec![1, n]
    }

    /// Property: each element identity appears in one or two tuples.
    pub fn appearances_bounded(pairs: &[Pair<Tagged<i64, usize>>], total: usize) -> bool {
        let mut counts = vec![0usize; total];
        for pair in pairs {
            counts[pair.first.value] += 1;
            if let Some(second) = &pair.second {
                counts[second.value] += 1;
            }
        }
        counts.iter().all(|count| (1..=2).contains(count))
    }
}
