//! Stages that start a nested drive per item: chain, flatten, zip.
//!
//! `chain` and `flatten` fold every nested item straight into the parent
//! accumulator via [`transform`]. A stop raised by the nested chain itself
//! only ends that nested drive; a stop raised further down the parent chain
//! ends both.
//!
//! `zip` keeps one [`Pull`] over its secondary source for the whole drive
//! and cuts the parent as soon as that pull runs dry.
//!
//! Each of them accepts a stage for the nested items with `.through(..)`.

use crate::core::{Flow, Identity, Reducer, Stage, Then};
use crate::drive::{step, transform, Pull};
use crate::error::BeamError;
use crate::source::Source;
use std::collections::VecDeque;
use std::fmt;

/// Expand each item into a nested source via `f` and fold its items in place.
#[derive(Clone, Copy, Debug)]
pub struct Chain<Src, F, T> {
    source: Src,
    f: F,
    inner: T,
}

/// Expand each item into the initial value of `source`.
///
/// # Example
///
/// ```rust
/// use beam::from_vec;
/// use beam::source::IterSource;
/// use beam::stages::chain;
///
/// let out = from_vec(vec![1u32, 2, 3])
///     .collect(chain(IterSource::new(), |n: u32| 0..n))
///     .unwrap();
/// assert_eq!(out, vec![0, 0, 1, 0, 1, 2]);
/// ```
pub fn chain<Src, F>(source: Src, f: F) -> Chain<Src, F, Identity> {
    Chain {
        source,
        f,
        inner: Identity,
    }
}

impl<Src, F, T> Chain<Src, F, T> {
    /// Run every nested drive through `stage` as well.
    pub fn through<U>(self, stage: U) -> Chain<Src, F, Then<T, U>> {
        Chain {
            source: self.source,
            f: self.f,
            inner: Then::new(self.inner, stage),
        }
    }
}

struct ChainReducer<Src, F, T, R> {
    source: Src,
    f: F,
    inner: T,
    down: R,
}

impl<In, Src, F, T> Stage<In> for Chain<Src, F, T>
where
    Src: Source,
    F: FnMut(In) -> Src::Init,
    T: Stage<Src::Item> + Clone,
{
    type Out = T::Out;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        ChainReducer {
            source: self.source,
            f: self.f,
            inner: self.inner,
            down,
        }
    }
}

impl<In, Src, F, T, R> Reducer<In> for ChainReducer<Src, F, T, R>
where
    Src: Source,
    F: FnMut(In) -> Src::Init,
    T: Stage<Src::Item> + Clone,
    R: Reducer<T::Out>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        let init = (self.f)(item);
        transform(self.inner.clone(), init, &self.source, acc, &mut self.down)
    }
}

/// Treat each item as the initial value of `source` and fold its items in place.
#[derive(Clone, Copy, Debug)]
pub struct Flatten<Src, T> {
    source: Src,
    inner: T,
}

pub fn flatten<Src>(source: Src) -> Flatten<Src, Identity> {
    Flatten {
        source,
        inner: Identity,
    }
}

/// Alias for [`flatten`].
pub fn join<Src>(source: Src) -> Flatten<Src, Identity> {
    flatten(source)
}

impl<Src, T> Flatten<Src, T> {
    /// Run every nested drive through `stage` as well.
    pub fn through<U>(self, stage: U) -> Flatten<Src, Then<T, U>> {
        Flatten {
            source: self.source,
            inner: Then::new(self.inner, stage),
        }
    }
}

struct FlattenReducer<Src, T, R> {
    source: Src,
    inner: T,
    down: R,
}

impl<In, Src, T> Stage<In> for Flatten<Src, T>
where
    Src: Source<Init = In>,
    T: Stage<Src::Item> + Clone,
{
    type Out = T::Out;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        FlattenReducer {
            source: self.source,
            inner: self.inner,
            down,
        }
    }
}

impl<In, Src, T, R> Reducer<In> for FlattenReducer<Src, T, R>
where
    Src: Source<Init = In>,
    T: Stage<Src::Item> + Clone,
    R: Reducer<T::Out>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        transform(self.inner.clone(), item, &self.source, acc, &mut self.down)
    }
}

/// Pair each item with the next item of a secondary drive.
///
/// The parent is cut on the first item that finds the secondary drive
/// exhausted, so the output is as long as the shorter of the two.
pub struct Zip<F, Src: Source, T> {
    combine: F,
    source: Src,
    init: Src::Init,
    inner: T,
}

impl<F, Src, T> Clone for Zip<F, Src, T>
where
    F: Clone,
    Src: Source + Clone,
    Src::Init: Clone,
    T: Clone,
{
    fn clone(&self) -> Self {
        Zip {
            combine: self.combine.clone(),
            source: self.source.clone(),
            init: self.init.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<F, Src, T> fmt::Debug for Zip<F, Src, T>
where
    Src: Source + fmt::Debug,
    Src::Init: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("source", &self.source)
            .field("init", &self.init)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Combine each item with one item pulled from `source` started at `init`.
///
/// # Example
///
/// ```rust
/// use beam::from_vec;
/// use beam::source::VecSource;
/// use beam::stages::zip;
///
/// let pairs = from_vec(vec!['a', 'b', 'c'])
///     .collect(zip(|c: char, n: u8| (c, n), VecSource::new(), vec![1, 2]))
///     .unwrap();
/// assert_eq!(pairs, vec![('a', 1), ('b', 2)]);
/// ```
pub fn zip<F, Src: Source>(combine: F, source: Src, init: Src::Init) -> Zip<F, Src, Identity> {
    Zip {
        combine,
        source,
        init,
        inner: Identity,
    }
}

impl<F, Src: Source, T> Zip<F, Src, T> {
    /// Run the secondary drive through `stage` before pairing.
    pub fn through<U>(self, stage: U) -> Zip<F, Src, Then<T, U>> {
        Zip {
            combine: self.combine,
            source: self.source,
            init: self.init,
            inner: Then::new(self.inner, stage),
        }
    }
}

struct ZipReducer<F, P, R> {
    combine: F,
    right: P,
    down: R,
}

impl<In, C, F, Src, T> Stage<In> for Zip<F, Src, T>
where
    Src: Source,
    T: Stage<Src::Item>,
    F: FnMut(In, T::Out) -> C,
{
    type Out = C;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        ZipReducer {
            combine: self.combine,
            right: step(self.inner, self.init, self.source),
            down,
        }
    }
}

impl<In, C, F, Src, Rr, O, R> Reducer<In> for ZipReducer<F, Pull<Src, Rr, O>, R>
where
    Src: Source,
    Rr: Reducer<Src::Item, Acc = VecDeque<O>>,
    F: FnMut(In, O) -> C,
    R: Reducer<C>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        match self.right.pull()? {
            Some(other) => self.down.fold(acc, (self.combine)(item, other)),
            None => {
                tracing::trace!("zip secondary exhausted");
                Ok(Flow::Cut(acc))
            }
        }
    }
}
