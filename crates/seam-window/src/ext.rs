//! Iterator extension for windowing and matching
//!
//! Brings the engine's adapters onto any iterator as chainable methods.

use seam_core::{Labeled, Matcher, SeamResult};

use crate::apply::Apply;
use crate::fixed::FixedWindows;
use crate::pair::PairMatcher;

/// Windowing and matching adapters, available on every iterator.
pub trait WindowExt: Iterator + Sized {
    /// Fixed-arity windows over this sequence; `arity >= 1`.
    fn fixed_windows(self, arity: usize) -> SeamResult<FixedWindows<Self>>
    where
        Self::Item: Clone,
    {
        FixedWindows::new(self, arity)
    }

    /// Two-slot windows.
    fn pair_windows(self) -> FixedWindows<Self>
    where
        Self::Item: Clone,
    {
        FixedWindows::pairs(self)
    }

    /// Three-slot windows.
    fn triplet_windows(self) -> FixedWindows<Self>
    where
        Self::Item: Clone,
    {
        FixedWindows::triplets(self)
    }

    /// Pairs elements out of arrival order using `matcher`.
    fn match_pairs<M>(self, matcher: M) -> PairMatcher<Self, M>
    where
        Self::Item: Labeled + Clone,
        M: Matcher<<Self::Item as Labeled>::Label>,
    {
        PairMatcher::new(self, matcher)
    }

    /// Applies `func` to every tuple this iterator yields.
    fn apply_windows<F, U>(self, func: F) -> Apply<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        crate::apply::apply(func, self)
    }
}

impl<I: Iterator> WindowExt for I {}
