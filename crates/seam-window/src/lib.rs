//! SEAM Window Engine - Fixed-arity windowing and out-of-order pairing
//!
//! This crate implements the two windowing engines and their glue:
//! - Fixed-arity sliding windows, one window per input element
//! - Out-of-order pair matching against a bounded working cache
//! - Flush draining of unmatched leftovers
//! - Lazy application of a caller function over emitted tuples

mod cache;

pub mod apply;
pub mod ext;
pub mod fixed;
pub mod pair;

pub use apply::*;
pub use ext::*;
pub use fixed::*;
pub use pair::*;
