//! Identity types for the SEAM engine
//!
//! Cache entries are keyed by arrival order, never by label or payload
//! equality, so duplicate labels stay distinguishable.

use std::fmt;

/// Arrival identity - position of an element in its stream's arrival order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeqId(pub u64);

impl SeqId {
    pub const ZERO: SeqId = SeqId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        SeqId(id)
    }

    /// The identity assigned to the arrival after this one.
    #[inline]
    pub fn next(self) -> Self {
        SeqId(self.0 + 1)
    }
}

impl fmt::Debug for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
