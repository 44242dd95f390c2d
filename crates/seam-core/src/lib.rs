//! SEAM Core - Fundamental types and capabilities
//!
//! This crate defines the vocabulary shared by the SEAM engine crates:
//! - Arrival identity (SeqId)
//! - Element labeling (Labeled, Tagged)
//! - Matching and flush capabilities (Matcher, FlushPolicy)
//! - Error types

pub mod id;
pub mod label;
pub mod matcher;
pub mod flush;
pub mod error;

pub use id::*;
pub use label::*;
pub use matcher::*;
pub use flush::*;
pub use error::*;
