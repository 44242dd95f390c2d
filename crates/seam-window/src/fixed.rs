//! Fixed-arity sliding windows
//!
//! `FixedWindows` walks an ordered sequence and produces one window per
//! input element: the element itself plus the `arity - 1` elements that
//! follow it. Windows that run past the end of the input keep their
//! arity, with the missing positions left absent.

use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator};

use seam_core::{SeamError, SeamResult};

/// An ordered tuple of `arity` slots, trailing slots possibly absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<T> {
    slots: Vec<Option<T>>,
}

impl<T> Window<T> {
    fn from_slots(slots: Vec<Option<T>>) -> Self {
        Window { slots }
    }

    /// Number of slots, occupied or not.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The element at `idx`, if that slot is occupied.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    /// All slots in positional order.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Occupied slots in positional order.
    pub fn present(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// True when no slot is absent.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Consumes the window, yielding its slots.
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }
}

/// Sliding windows of a fixed arity over an ordered sequence.
///
/// One window is produced per input element, so the output length always
/// equals the input length. A pure function of its input: re-running over
/// the same sequence yields identical windows.
pub struct FixedWindows<I: Iterator> {
    source: Fuse<I>,
    lookahead: VecDeque<I::Item>,
    arity: usize,
}

impl<I> FixedWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Windows of `arity` consecutive elements. Rejects `arity` of zero
    /// before producing any output.
    pub fn new(source: I, arity: usize) -> SeamResult<Self> {
        if arity == 0 {
            return Err(SeamError::InvalidArity(arity));
        }
        Ok(Self::with_arity(source, arity))
    }

    /// Windows of two consecutive elements.
    pub fn pairs(source: I) -> Self {
        Self::with_arity(source, 2)
    }

    /// Windows of three consecutive elements.
    pub fn triplets(source: I) -> Self {
        Self::with_arity(source, 3)
    }

    fn with_arity(source: I, arity: usize) -> Self {
        FixedWindows {
            source: source.fuse(),
            lookahead: VecDeque::with_capacity(arity),
            arity,
        }
    }

    /// The configured window arity.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl<I> Iterator for FixedWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Window<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.lookahead.len() < self.arity {
            match self.source.next() {
                Some(element) => self.lookahead.push_back(element),
                None => break,
            }
        }

        let head = self.lookahead.pop_front()?;
        let mut slots = Vec::with_capacity(self.arity);
        slots.push(Some(head));
        for idx in 0..self.arity - 1 {
            slots.push(self.lookahead.get(idx).cloned());
        }
        Some(Window::from_slots(slots))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One window per remaining input element, buffered or not.
        let buffered = self.lookahead.len();
        let (lo, hi) = self.source.size_hint();
        (
            lo.saturating_add(buffered),
            hi.and_then(|hi| hi.checked_add(buffered)),
        )
    }
}

impl<I> FusedIterator for FixedWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn present_sum(window: &Window<i64>) -> i64 {
        window.present().copied().sum()
    }

    #[test]
    fn test_pair_sums_over_five_elements() {
        let sums: Vec<i64> = FixedWindows::pairs([1i64, 2, 3, 4, 5].into_iter())
            .map(|w| present_sum(&w))
            .collect();
        assert_eq!(sums, vec![3, 5, 7, 9, 5]);
    }

    #[test]
    fn test_triplet_sums_over_five_elements() {
        let sums: Vec<i64> = FixedWindows::triplets([1i64, 2, 3, 4, 5].into_iter())
            .map(|w| present_sum(&w))
            .collect();
        assert_eq!(sums, vec![6, 9, 12, 9, 5]);
    }

    #[test]
    fn test_single_element_keeps_arity() {
        let windows: Vec<Window<i64>> = FixedWindows::pairs([1i64].into_iter()).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].slots(), &[Some(1), None]);
        assert_eq!(present_sum(&windows[0]), 1);
    }

    #[test]
    fn test_empty_input_yields_no_windows() {
        let mut windows = FixedWindows::pairs(std::iter::empty::<i64>());
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn test_zero_arity_is_rejected_up_front() {
        let result = FixedWindows::new([1i64, 2].into_iter(), 0);
        assert!(matches!(result, Err(SeamError::InvalidArity(0))));
    }

    #[test]
    fn test_arity_one_wraps_each_element() {
        let windows: Vec<Window<i64>> = FixedWindows::new([7i64, 8].into_iter(), 1)
            .unwrap()
            .collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].slots(), &[Some(7)]);
        assert_eq!(windows[1].slots(), &[Some(8)]);
    }

    #[test]
    fn test_input_shorter_than_arity_pads_every_window() {
        let windows: Vec<Window<i64>> = FixedWindows::new([1i64, 2].into_iter(), 4)
            .unwrap()
            .collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].slots(), &[Some(1), Some(2), None, None]);
        assert_eq!(windows[1].slots(), &[Some(2), None, None, None]);
        assert!(!windows[0].is_full());
    }

    #[test]
    fn test_rerun_produces_identical_windows() {
        let input = vec![4i64, 1, 4, 2];
        let first: Vec<Window<i64>> = FixedWindows::triplets(input.clone().into_iter()).collect();
        let second: Vec<Window<i64>> = FixedWindows::triplets(input.into_iter()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_counts_remaining_elements() {
        let mut windows = FixedWindows::triplets([1i64, 2, 3, 4].into_iter());
        assert_eq!(windows.size_hint(), (4, Some(4)));
        windows.next();
        assert_eq!(windows.size_hint(), (3, Some(3)));
    }

    proptest! {
        #[test]
        fn prop_one_window_per_element(input in prop::collection::vec(any::<i64>(), 0..64), arity in 1usize..6) {
            let windows: Vec<Window<i64>> =
                FixedWindows::new(input.clone().into_iter(), arity).unwrap().collect();

            prop_assert_eq!(windows.len(), input.len());
            for (idx, window) in windows.iter().enumerate() {
                prop_assert_eq!(window.arity(), arity);
                // Slot 0 is always the element at this position.
                prop_assert_eq!(window.get(0), Some(&input[idx]));
                // Remaining slots mirror the following elements, then go absent.
                for offset in 1..arity {
                    prop_assert_eq!(window.get(offset), input.get(idx + offset));
                }
            }
        }
    }
}
