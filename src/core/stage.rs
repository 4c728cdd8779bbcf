//! The reducing-context protocol and the stage trait built on it.

use super::flow::Flow;
use crate::error::BeamError;
use std::marker::PhantomData;

/// Downstream reducing context: the `fold` member of a drive.
///
/// A reducer receives the current accumulator and one item and hands back
/// the accumulator wrapped in a [`Flow`]. Returning [`Flow::Close`] asks the
/// drive to stop after this item; [`Flow::Cut`] asks it to stop and means the
/// item was not folded. Errors are never caught by the engine.
pub trait Reducer<In> {
    /// Accumulator threaded through the fold chain.
    type Acc;

    /// Fold one item into the accumulator.
    fn fold(&mut self, acc: Self::Acc, item: In) -> Result<Flow<Self::Acc>, BeamError>;
}

/// A transformation from a downstream reducer to an upstream one.
///
/// `In` is the item type the stage receives from upstream; [`Stage::Out`] is
/// what it passes downstream. Applying a stage consumes it and builds the
/// reducer holding that drive's private state, so every drive starts fresh.
/// Stages that must be applied more than once (inner stages of nested
/// combinators) are cloned for each application.
///
/// A stage must hand a non-`Continue` outcome from downstream back upstream
/// unchanged and must never fold again after receiving one.
///
/// # Example
///
/// ```rust
/// use beam::core::{Flow, Reducer, Stage};
/// use beam::BeamError;
///
/// /// Forwards every item twice.
/// struct Twice;
///
/// struct TwiceReducer<R> {
///     down: R,
/// }
///
/// impl<In: Clone, R: Reducer<In>> Reducer<In> for TwiceReducer<R> {
///     type Acc = R::Acc;
///
///     fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
///         match self.down.fold(acc, item.clone())? {
///             Flow::Continue(acc) => self.down.fold(acc, item),
///             stopped => Ok(stopped),
///         }
///     }
/// }
///
/// impl<In: Clone> Stage<In> for Twice {
///     type Out = In;
///
///     fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
///     where
///         R: Reducer<Self::Out>,
///     {
///         TwiceReducer { down }
///     }
/// }
///
/// let doubled = beam::from_vec(vec![1, 2]).collect(Twice).unwrap();
/// assert_eq!(doubled, vec![1, 1, 2, 2]);
/// ```
pub trait Stage<In> {
    /// Item type handed to the downstream reducer.
    type Out;

    /// Bind this stage to its downstream reducer for one drive.
    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>;
}

/// Stage that forwards every item unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Create the identity stage.
pub fn identity() -> Identity {
    Identity
}

impl<In> Stage<In> for Identity {
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        down
    }
}

/// Two stages applied left to right: `first` sees items before `second`.
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

/// Compose two stages, `first` running before `second`.
pub fn compose<A, B>(first: A, second: B) -> Then<A, B> {
    Then::new(first, second)
}

impl<In, A, B> Stage<In> for Then<A, B>
where
    A: Stage<In>,
    B: Stage<A::Out>,
{
    type Out = B::Out;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        self.first.apply(self.second.apply(down))
    }
}

/// Terminal reducer that folds into a plain closure and never stops.
pub struct FoldFn<F, A> {
    f: F,
    _acc: PhantomData<fn(A) -> A>,
}

impl<F, A> FoldFn<F, A> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _acc: PhantomData,
        }
    }
}

/// Wrap a plain `(acc, item) -> acc` function as a terminal reducer.
pub fn fold_fn<F, A>(f: F) -> FoldFn<F, A> {
    FoldFn::new(f)
}

impl<In, A, F> Reducer<In> for FoldFn<F, A>
where
    F: FnMut(A, In) -> A,
{
    type Acc = A;

    fn fold(&mut self, acc: A, item: In) -> Result<Flow<A>, BeamError> {
        Ok(Flow::Continue((self.f)(acc, item)))
    }
}
