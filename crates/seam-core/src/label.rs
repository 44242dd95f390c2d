//! Element labeling
//!
//! Every stream element exposes a label: a totally ordered key that drives
//! pairing decisions and the ordering of emitted tuples. Payloads stay
//! opaque to the engine; only labels are compared.

/// A stream element carrying a comparable label.
pub trait Labeled {
    /// The label type. A total order is required, nothing more.
    type Label: Ord;

    /// The element's label.
    fn label(&self) -> &Self::Label;
}

macro_rules! labeled_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Labeled for $ty {
                type Label = $ty;

                #[inline]
                fn label(&self) -> &$ty {
                    self
                }
            }
        )*
    };
}

// Bare integers label themselves, so quick experiments and tests can feed
// plain numbers through the engine.
labeled_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

/// A labeled carrier pairing an opaque payload with its matching key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tagged<L, V> {
    /// Matching and ordering key
    pub label: L,
    /// Payload, never inspected by the engine
    pub value: V,
}

impl<L, V> Tagged<L, V> {
    #[inline]
    pub fn new(label: L, value: V) -> Self {
        Tagged { label, value }
    }
}

impl<L: Ord, V> Labeled for Tagged<L, V> {
    type Label = L;

    #[inline]
    fn label(&self) -> &L {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_label_themselves() {
        let x: u32 = 7;
        assert_eq!(*x.label(), 7);
    }

    #[test]
    fn test_tagged_exposes_label_not_value() {
        let frame = Tagged::new(42u64, "payload");
        assert_eq!(*frame.label(), 42);
        assert_eq!(frame.value, "payload");
    }
}
