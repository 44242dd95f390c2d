//! Arrival scrambling for out-of-order delivery tests
//!
//! Simulates hostile arrival conditions for a stream:
//! - Bounded-displacement reordering
//! - Full shuffles
//! - Deterministic, seeded runs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Scramble configuration
#[derive(Clone, Debug)]
pub struct ScrambleConfig {
    /// Probability an element is pulled out of place (0.0 - 1.0)
    pub reorder_prob: f64,
    /// How far forward a displaced element may travel per swap;
    /// `None` removes the bound and allows full shuffles
    pub max_displacement: Option<usize>,
    /// Random seed
    pub seed: u64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig {
            reorder_prob: 0.5,
            max_displacement: Some(4),
            seed: 42,
        }
    }
}

impl ScrambleConfig {
    /// No reordering at all; arrivals keep their source order.
    pub fn in_order() -> Self {
        ScrambleConfig {
            reorder_prob: 0.0,
            max_displacement: Some(0),
            seed: 42,
        }
    }

    /// Mild reordering, as seen on a healthy transport.
    pub fn light() -> Self {
        ScrambleConfig {
            reorder_prob: 0.2,
            max_displacement: Some(2),
            seed: 42,
        }
    }

    /// Aggressive reordering with deep displacement.
    pub fn heavy() -> Self {
        ScrambleConfig {
            reorder_prob: 0.8,
            max_displacement: Some(8),
            seed: 42,
        }
    }

    /// Every arrival position is fair game: a full shuffle.
    pub fn shuffled() -> Self {
        ScrambleConfig {
            reorder_prob: 1.0,
            max_displacement: None,
            seed: 42,
        }
    }
}

/// Scramble statistics
#[derive(Clone, Debug, Default)]
pub struct ScrambleStats {
    pub elements_seen: u64,
    pub swaps_performed: u64,
    pub max_offset: u64,
}

/// Deterministic arrival-order scrambler.
///
/// The same config and seed always produce the same arrival order, so a
/// failing run can be replayed exactly.
pub struct ArrivalScrambler {
    config: ScrambleConfig,
    rng: StdRng,
    stats: ScrambleStats,
}

impl ArrivalScrambler {
    /// Create a new scrambler from a config (the seed lives inside it).
    pub fn new(config: ScrambleConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        ArrivalScrambler {
            config,
            rng,
            stats: ScrambleStats::default(),
        }
    }

    /// Reorders `elements` according to the config. The output is always
    /// a permutation of the input.
    pub fn scramble<T>(&mut self, mut elements: Vec<T>) -> Vec<T> {
        self.stats.elements_seen += elements.len() as u64;

        match self.config.max_displacement {
            None => {
                elements.shuffle(&mut self.rng);
                self.stats.swaps_performed += elements.len() as u64;
            }
            Some(depth) => {
                for idx in 0..elements.len() {
                    if self.rng.gen::<f64>() >= self.config.reorder_prob {
                        continue;
                    }
                    let limit = (idx + depth).min(elements.len().saturating_sub(1));
                    if limit <= idx {
                        continue;
                    }
                    let target = self.rng.gen_range(idx..=limit);
                    if target != idx {
                        elements.swap(idx, target);
                        self.stats.swaps_performed += 1;
                        self.stats.max_offset = self.stats.max_offset.max((target - idx) as u64);
                    }
                }
            }
        }

        elements
    }

    /// Get accumulated statistics.
    pub fn stats(&self) -> &ScrambleStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = ScrambleStats::default();
    }
}
