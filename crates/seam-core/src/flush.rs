//! End-of-stream flush policy
//!
//! When input runs dry the matcher drains whatever is still cached as
//! singleton tuples. A `FlushPolicy` can withhold specific labels from
//! that drain; the default lets everything through.

/// Decides whether a still-cached element may be emitted alone at flush.
pub trait FlushPolicy<L> {
    /// True when an element with this label may surface as a singleton.
    fn is_flushable(&self, label: &L) -> bool;
}

impl<L, F> FlushPolicy<L> for F
where
    F: Fn(&L) -> bool,
{
    #[inline]
    fn is_flushable(&self, label: &L) -> bool {
        self(label)
    }
}

/// Default policy: every unmatched element surfaces at flush.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlushAll;

impl<L> FlushPolicy<L> for FlushAll {
    #[inline]
    fn is_flushable(&self, _label: &L) -> bool {
        true
    }
}

/// Withholds one sentinel label from the flush drain.
///
/// Hosts that prime the stream with a virtual predecessor element use this
/// to keep the sentinel from surfacing as a singleton when it never found
/// a partner.
#[derive(Clone, Copy, Debug)]
pub struct SuppressLabel<L>(pub L);

impl<L: PartialEq> FlushPolicy<L> for SuppressLabel<L> {
    #[inline]
    fn is_flushable(&self, label: &L) -> bool {
        *label != self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_all_lets_everything_through() {
        assert!(FlushPolicy::<u64>::is_flushable(&FlushAll, &0));
        assert!(FlushPolicy::<u64>::is_flushable(&FlushAll, &99));
    }

    #[test]
    fn test_suppress_label_withholds_sentinel_only() {
        let policy = SuppressLabel(0u64);
        assert!(!policy.is_flushable(&0));
        assert!(policy.is_flushable(&1));
        assert!(policy.is_flushable(&7));
    }

    #[test]
    fn test_closure_is_a_policy() {
        let evens_only = |label: &u64| label % 2 == 0;
        assert!(evens_only.is_flushable(&4));
        assert!(!evens_only.is_flushable(&5));
    }
}
