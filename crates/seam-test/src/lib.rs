//! SEAM Test Harness - Scrambled-delivery fuzzing and engine validation
//!
//! This crate provides:
//! - Deterministic arrival-order scrambling
//! - Randomized invariant fuzzing for the pair matcher
//! - Reusable invariant predicates over emitted tuples
//! - Criterion benchmarks for both engines

pub mod shuffle;
pub mod fuzzer;

pub use shuffle::*;
pub use fuzzer::*;
