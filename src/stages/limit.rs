//! Prefix and suffix stages: take, drop, take_while, drop_while.

use crate::core::{Flow, Reducer, Stage};
use crate::error::BeamError;

/// Forward the first `n` items, closing right after the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take {
    n: usize,
}

/// `take(0)` cuts on the first item without ever folding.
pub fn take(n: usize) -> Take {
    Take { n }
}

struct TakeReducer<R> {
    remaining: usize,
    down: R,
}

impl<In> Stage<In> for Take {
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        TakeReducer {
            remaining: self.n,
            down,
        }
    }
}

impl<In, R: Reducer<In>> Reducer<In> for TakeReducer<R> {
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if self.remaining == 0 {
            return Ok(Flow::Cut(acc));
        }
        self.remaining -= 1;
        let flow = self.down.fold(acc, item)?;
        if self.remaining == 0 {
            return Ok(flow.and_close());
        }
        Ok(flow)
    }
}

/// Suppress the first `n` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropFirst {
    n: usize,
}

pub fn drop(n: usize) -> DropFirst {
    DropFirst { n }
}

struct DropReducer<R> {
    remaining: usize,
    down: R,
}

impl<In> Stage<In> for DropFirst {
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        DropReducer {
            remaining: self.n,
            down,
        }
    }
}

impl<In, R: Reducer<In>> Reducer<In> for DropReducer<R> {
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Ok(Flow::Continue(acc));
        }
        self.down.fold(acc, item)
    }
}

/// Forward items while `pred` holds; cut on the first one that fails it.
#[derive(Clone, Copy, Debug)]
pub struct TakeWhile<P> {
    pred: P,
}

pub fn take_while<P>(pred: P) -> TakeWhile<P> {
    TakeWhile { pred }
}

struct TakeWhileReducer<P, R> {
    pred: P,
    down: R,
}

impl<In, P> Stage<In> for TakeWhile<P>
where
    P: FnMut(&In) -> bool,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        TakeWhileReducer {
            pred: self.pred,
            down,
        }
    }
}

impl<In, P, R> Reducer<In> for TakeWhileReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if (self.pred)(&item) {
            return self.down.fold(acc, item);
        }
        Ok(Flow::Cut(acc))
    }
}

/// Suppress items while `pred` holds, then forward everything.
///
/// Once an item fails `pred`, the predicate is never consulted again.
#[derive(Clone, Copy, Debug)]
pub struct DropWhile<P> {
    pred: P,
}

pub fn drop_while<P>(pred: P) -> DropWhile<P> {
    DropWhile { pred }
}

struct DropWhileReducer<P, R> {
    pred: P,
    dropping: bool,
    down: R,
}

impl<In, P> Stage<In> for DropWhile<P>
where
    P: FnMut(&In) -> bool,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        DropWhileReducer {
            pred: self.pred,
            dropping: true,
            down,
        }
    }
}

impl<In, P, R> Reducer<In> for DropWhileReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if self.dropping {
            self.dropping = (self.pred)(&item);
        }
        if self.dropping {
            return Ok(Flow::Continue(acc));
        }
        self.down.fold(acc, item)
    }
}
