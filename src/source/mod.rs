//! Pull-based sources.
//!
//! A [`Source`] is a pure description of where items come from: `setup`
//! turns an initial value into a cursor, `unfold` advances the cursor by one
//! item or reports exhaustion. Sources hold no per-drive state and can be
//! reused across any number of drives.

mod basic;
mod generate;

pub use basic::{empty, once, Empty, IterSource, Once, VecSource};
pub use generate::{
    concat_identity, loop_source, product_identity, range, sum_identity, IdentitySource,
    LoopSource, Range,
};

use std::marker::PhantomData;

/// Descriptor of a pull-based origin.
///
/// # Example
///
/// ```rust
/// use beam::source::{Source, VecSource};
///
/// let source = VecSource::new();
/// let cursor = source.setup(vec!['a', 'b']);
/// let (cursor, first) = source.unfold(cursor).unwrap();
/// let (cursor, second) = source.unfold(cursor).unwrap();
/// assert_eq!((first, second), ('a', 'b'));
/// assert!(source.unfold(cursor).is_none());
/// ```
pub trait Source {
    /// Value a drive starts from.
    type Init;
    /// Position within one drive.
    type Cursor;
    /// Item produced on every successful unfold.
    type Item;

    /// Turn the initial value into a cursor. Called once per drive.
    fn setup(&self, init: Self::Init) -> Self::Cursor;

    /// Produce the next cursor and item, or `None` once exhausted.
    fn unfold(&self, cursor: Self::Cursor) -> Option<(Self::Cursor, Self::Item)>;
}

impl<S: Source + ?Sized> Source for &S {
    type Init = S::Init;
    type Cursor = S::Cursor;
    type Item = S::Item;

    fn setup(&self, init: Self::Init) -> Self::Cursor {
        (**self).setup(init)
    }

    fn unfold(&self, cursor: Self::Cursor) -> Option<(Self::Cursor, Self::Item)> {
        (**self).unfold(cursor)
    }
}

/// Source assembled from a `setup` and an `unfold` closure.
pub struct FnSource<S, U, I> {
    setup: S,
    unfold: U,
    _init: PhantomData<fn(I)>,
}

/// Build a source from a pair of closures.
///
/// # Example
///
/// ```rust
/// use beam::source::source;
///
/// // Counts down from the initial value to 1.
/// let countdown = source(
///     |start: u32| start,
///     |n: u32| if n == 0 { None } else { Some((n - 1, n)) },
/// );
/// let items = beam::drive(&countdown, 3).collect(beam::identity()).unwrap();
/// assert_eq!(items, vec![3, 2, 1]);
/// ```
pub fn source<S, U, I>(setup: S, unfold: U) -> FnSource<S, U, I> {
    FnSource {
        setup,
        unfold,
        _init: PhantomData,
    }
}

impl<S, U, I, C, T> Source for FnSource<S, U, I>
where
    S: Fn(I) -> C,
    U: Fn(C) -> Option<(C, T)>,
{
    type Init = I;
    type Cursor = C;
    type Item = T;

    fn setup(&self, init: I) -> C {
        (self.setup)(init)
    }

    fn unfold(&self, cursor: C) -> Option<(C, T)> {
        (self.unfold)(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_all<S: Source>(source: &S, init: S::Init) -> Vec<S::Item> {
        let mut out = Vec::new();
        let mut cursor = source.setup(init);
        while let Some((next, item)) = source.unfold(cursor) {
            out.push(item);
            cursor = next;
        }
        out
    }

    #[test]
    fn fn_source_unfolds_until_none() {
        let evens = source(|n: u32| n, |n: u32| (n <= 6).then_some((n + 2, n)));
        assert_eq!(drain_all(&evens, 0), vec![0, 2, 4, 6]);
    }

    #[test]
    fn fn_source_is_reusable() {
        let letters = source(
            |s: &'static str| s.chars(),
            |mut chars: std::str::Chars<'static>| chars.next().map(|c| (chars, c)),
        );
        assert_eq!(drain_all(&letters, "ab"), vec!['a', 'b']);
        assert_eq!(drain_all(&letters, "xyz"), vec!['x', 'y', 'z']);
    }

    #[test]
    fn reference_is_a_source() {
        let counter = source(|n: u8| n, |n: u8| (n < 3).then_some((n + 1, n)));
        let borrowed = &counter;
        assert_eq!(drain_all(&borrowed, 1), vec![1, 2]);
    }
}
