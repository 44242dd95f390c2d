//! Matching capability
//!
//! The pairing engine never interprets labels itself; a `Matcher` decides
//! which labels belong together. Any `Fn(&L, &L) -> bool` closure is a
//! matcher, so callers rarely implement the trait by hand.

/// Decides whether two labels should form a pair.
///
/// Implementations are expected to be symmetric: the engine probes with
/// arguments in either order depending on which element arrived first.
pub trait Matcher<L> {
    /// True when the two labels belong in the same tuple.
    fn matches(&self, a: &L, b: &L) -> bool;
}

impl<L, F> Matcher<L> for F
where
    F: Fn(&L, &L) -> bool,
{
    #[inline]
    fn matches(&self, a: &L, b: &L) -> bool {
        self(a, b)
    }
}

/// Matches labels that differ by exactly one step.
///
/// The conventional criterion for streams labeled with consecutive
/// sequence numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adjacent;

macro_rules! adjacent_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matcher<$ty> for Adjacent {
                #[inline]
                fn matches(&self, a: &$ty, b: &$ty) -> bool {
                    a.abs_diff(*b) == 1
                }
            }
        )*
    };
}

adjacent_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_matcher() {
        let within_two = |a: &i64, b: &i64| (a - b).abs() <= 2;
        assert!(within_two.matches(&5, &7));
        assert!(!within_two.matches(&5, &8));
    }

    #[test]
    fn test_adjacent_matches_neighbors_only() {
        assert!(Adjacent.matches(&3, &4));
        assert!(Adjacent.matches(&4, &3));
        assert!(!Adjacent.matches(&3, &3));
        assert!(!Adjacent.matches(&3, &5));
    }
}
