//! Sources over existing values: empty, single value, vectors and iterators.

use super::Source;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

// Copy for every item type; a derive would demand `T: Copy`.
macro_rules! marker_source_impls {
    ($($name:ident<$param:ident>),* $(,)?) => {
        $(
            impl<$param> Clone for $name<$param> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<$param> Copy for $name<$param> {}

            impl<$param> fmt::Debug for $name<$param> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )*
    };
}

marker_source_impls! {
    Empty<T>,
    Once<T>,
    VecSource<T>,
    IterSource<I>,
}

/// Source that never yields anything.
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// Create a source with no items.
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Source for Empty<T> {
    type Init = ();
    type Cursor = ();
    type Item = T;

    fn setup(&self, _init: ()) {}

    fn unfold(&self, _cursor: ()) -> Option<((), T)> {
        None
    }
}

/// Source that yields its initial value exactly once.
pub struct Once<T> {
    _item: PhantomData<fn() -> T>,
}

/// Create a single-value source.
pub fn once<T>() -> Once<T> {
    Once { _item: PhantomData }
}

impl<T> Source for Once<T> {
    type Init = T;
    type Cursor = Option<T>;
    type Item = T;

    fn setup(&self, init: T) -> Option<T> {
        Some(init)
    }

    fn unfold(&self, cursor: Option<T>) -> Option<(Option<T>, T)> {
        cursor.map(|item| (None, item))
    }
}

/// Array-backed source: yields the elements of a vector front to back.
pub struct VecSource<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> VecSource<T> {
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Default for VecSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Source for VecSource<T> {
    type Init = Vec<T>;
    type Cursor = VecDeque<T>;
    type Item = T;

    fn setup(&self, init: Vec<T>) -> VecDeque<T> {
        VecDeque::from(init)
    }

    fn unfold(&self, mut cursor: VecDeque<T>) -> Option<(VecDeque<T>, T)> {
        let item = cursor.pop_front()?;
        Some((cursor, item))
    }
}

/// Source wrapping any external iterator.
///
/// The iterator itself is the cursor, so pulling from it is the only effect
/// and `setup` is never needed again within a drive.
pub struct IterSource<I> {
    _init: PhantomData<fn(I)>,
}

impl<I: IntoIterator> IterSource<I> {
    pub fn new() -> Self {
        Self { _init: PhantomData }
    }
}

impl<I: IntoIterator> Default for IterSource<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IntoIterator> Source for IterSource<I> {
    type Init = I;
    type Cursor = I::IntoIter;
    type Item = I::Item;

    fn setup(&self, init: I) -> I::IntoIter {
        init.into_iter()
    }

    fn unfold(&self, mut cursor: I::IntoIter) -> Option<(I::IntoIter, I::Item)> {
        let item = cursor.next()?;
        Some((cursor, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items<S: Source>(source: &S, init: S::Init) -> Vec<S::Item> {
        let mut out = Vec::new();
        let mut cursor = source.setup(init);
        while let Some((next, item)) = source.unfold(cursor) {
            out.push(item);
            cursor = next;
        }
        out
    }

    #[test]
    fn empty_yields_nothing() {
        assert!(items(&empty::<i32>(), ()).is_empty());
    }

    #[test]
    fn once_yields_init_once() {
        assert_eq!(items(&once(), "solo"), vec!["solo"]);
    }

    #[test]
    fn once_keeps_absent_values() {
        assert_eq!(items(&once(), None::<u8>), vec![None]);
    }

    #[test]
    fn vec_source_preserves_order() {
        assert_eq!(items(&VecSource::new(), vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn vec_source_yields_zero_and_default_values() {
        assert_eq!(items(&VecSource::new(), vec![0, 0]), vec![0, 0]);
    }

    #[test]
    fn iter_source_pulls_from_iterator() {
        let source = IterSource::new();
        assert_eq!(items(&source, 1..4), vec![1, 2, 3]);
        assert_eq!(items(&source, 7..9), vec![7, 8]);
    }

    #[test]
    fn marker_sources_copy_for_any_item() {
        struct NotClone;

        let source: VecSource<NotClone> = VecSource::new();
        let copy = source;
        assert_eq!(items(&copy, vec![NotClone]).len(), 1);
        assert_eq!(items(&source, Vec::new()).len(), 0);
        assert_eq!(format!("{:?}", IterSource::<Vec<u8>>::new()), "IterSource");
        assert_eq!(format!("{:?}", once::<NotClone>()), "Once");
    }
}
