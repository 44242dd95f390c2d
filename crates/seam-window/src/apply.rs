//! Lazy application of a window function
//!
//! `Apply` pulls one tuple at a time from a windowing iterator and hands
//! it to the caller's function. Nothing is buffered beyond the tuple in
//! flight, and failures in the function surface at the pull that
//! triggered them.

use std::iter::FusedIterator;

/// Iterator adapter produced by [`apply`].
pub struct Apply<I, F> {
    windows: I,
    func: F,
}

impl<U, I, F> Iterator for Apply<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.windows.next().map(&mut self.func)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<U, I, F> FusedIterator for Apply<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}

/// Maps `func` lazily over the tuples of `windows`.
///
/// Works over either engine: fixed windows arrive as [`Window`]s, matched
/// pairs as [`Pair`]s. Output length equals the number of tuples the
/// underlying engine produces.
///
/// [`Window`]: crate::fixed::Window
/// [`Pair`]: crate::pair::Pair
pub fn apply<U, I, F>(func: F, windows: I) -> Apply<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Apply {
        windows: windows.into_iter(),
        func,
    }
}
