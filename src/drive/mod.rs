//! Drivers: eager draining, nested transforms and lazy pulling.
//!
//! Every drive binds a stage chain to a fresh terminal reducer, asks the
//! source for a cursor and folds items until the source is exhausted or the
//! chain answers with [`Flow::Close`] or [`Flow::Cut`]. Both stops keep the
//! accumulator; they differ only in whether the last item was folded, which
//! the stage that stopped has already decided. Errors are returned as-is.
//!
//! - [`drain`]: full consumption into an arbitrary terminal reducer
//! - [`transform`]: nested drive folding into a parent's downstream reducer
//! - [`step`]: nested drive exposed as a one-item-per-call [`Pull`]
//! - [`Drive`]: a source paired with its initial value, the usual entry point

mod pull;
mod sink;

pub use pull::{step, Pull};

use crate::core::{Flow, Reducer, Stage};
use crate::error::BeamError;
use crate::form::{to_vec, Form};
use crate::source::{
    concat_identity, empty, loop_source, once, product_identity, range, sum_identity, Empty,
    IdentitySource, IterSource, LoopSource, Once, Range, Source, VecSource,
};
use sink::{Forward, FormSink};
use std::cell::Cell;
use std::collections::VecDeque;

/// Fold every item of one drive; returns the accumulator and the stop seen.
fn run<Src, R>(
    source: &Src,
    init: Src::Init,
    reducer: &mut R,
    mut acc: R::Acc,
) -> Result<Flow<R::Acc>, BeamError>
where
    Src: Source,
    R: Reducer<Src::Item>,
{
    let mut cursor = source.setup(init);
    while let Some((next, item)) = source.unfold(cursor) {
        cursor = next;
        match reducer.fold(acc, item) {
            Ok(Flow::Continue(next_acc)) => acc = next_acc,
            Ok(stopped) => {
                tracing::trace!(signal = ?stopped.signal(), "drive halted");
                return Ok(stopped);
            }
            Err(err) => {
                tracing::debug!(error = %err, "drive aborted by callback error");
                return Err(err);
            }
        }
    }
    Ok(Flow::Continue(acc))
}

/// Drive `stage` over `source` to completion, folding into `fold`.
///
/// Starts from `acc` and returns the final accumulator; the caller applies
/// any finalize step.
///
/// # Example
///
/// ```rust
/// use beam::core::fold_fn;
/// use beam::drive::drain;
/// use beam::source::VecSource;
/// use beam::stages::map;
///
/// let total = drain(
///     map(|x: u32| x * 10),
///     0,
///     fold_fn(|acc: u32, x: u32| acc + x),
///     vec![1, 2, 3],
///     &VecSource::new(),
/// )
/// .unwrap();
/// assert_eq!(total, 60);
/// ```
pub fn drain<Src, T, R>(
    stage: T,
    acc: R::Acc,
    fold: R,
    init: Src::Init,
    source: &Src,
) -> Result<R::Acc, BeamError>
where
    Src: Source,
    T: Stage<Src::Item>,
    R: Reducer<T::Out>,
{
    let mut reducer = stage.apply(fold);
    run(source, init, &mut reducer, acc).map(Flow::into_inner)
}

/// Run a nested drive whose output is folded by the parent's `outer` reducer.
///
/// The nested chain gets its own stop state: when it closes or cuts by
/// itself, only the nested drive ends and `Continue` is returned. When the
/// parent's downstream asks to stop, the nested drive ends too and the same
/// stop is returned so the parent drive halts as well.
pub fn transform<Src, T, R>(
    stage: T,
    init: Src::Init,
    source: &Src,
    acc: R::Acc,
    outer: &mut R,
) -> Result<Flow<R::Acc>, BeamError>
where
    Src: Source,
    T: Stage<Src::Item>,
    R: Reducer<T::Out>,
{
    let halt = Cell::new(None);
    let mut reducer = stage.apply(Forward::new(outer, &halt));
    let acc = run(source, init, &mut reducer, acc)?.into_inner();
    let signal = halt.get();
    if signal.is_some() {
        tracing::trace!(?signal, "nested drive forwarded parent stop");
    }
    Ok(Flow::with_signal(acc, signal))
}

/// A source paired with the value it starts from.
///
/// This is the main entry point: pick a consumption mode with
/// [`Drive::eager`] (fold everything into a [`Form`]) or [`Drive::lazy`]
/// (pull one item at a time).
///
/// # Example
///
/// ```rust
/// use beam::form::to_sum;
/// use beam::stages::{filter, map};
/// use beam::{from_vec, pipe};
///
/// let sum = from_vec(vec![1, 2, 3, 4])
///     .eager(&to_sum(), pipe![filter(|x: &i64| x % 2 == 0), map(|x: i64| x * x)])
///     .unwrap();
/// assert_eq!(sum, 20);
///
/// let mut squares = from_vec(vec![1, 2, 3]).lazy(map(|x: i64| x * x));
/// assert_eq!(squares.next().unwrap().unwrap(), 1);
/// assert_eq!(squares.next().unwrap().unwrap(), 4);
/// ```
pub struct Drive<Src: Source> {
    source: Src,
    init: Src::Init,
}

/// Pair a source with its initial value.
pub fn drive<Src: Source>(source: Src, init: Src::Init) -> Drive<Src> {
    Drive::new(source, init)
}

impl<Src: Source> Drive<Src> {
    pub fn new(source: Src, init: Src::Init) -> Self {
        Self { source, init }
    }

    /// Fold every item the stage produces into `form` and finalize it.
    pub fn eager<F, T>(self, form: &F, stage: T) -> Result<F::Output, BeamError>
    where
        T: Stage<Src::Item>,
        F: Form<T::Out>,
    {
        let acc = drain(
            stage,
            form.init(),
            FormSink::new(form),
            self.init,
            &self.source,
        )?;
        Ok(form.finalize(acc))
    }

    /// Shorthand for [`Drive::eager`] into a `Vec`.
    pub fn collect<T>(self, stage: T) -> Result<Vec<T::Out>, BeamError>
    where
        T: Stage<Src::Item>,
    {
        self.eager(&to_vec(), stage)
    }

    /// Bind `stage` and return a pull handle yielding one item per call.
    pub fn lazy<T>(
        self,
        stage: T,
    ) -> Pull<Src, impl Reducer<Src::Item, Acc = VecDeque<T::Out>>, T::Out>
    where
        T: Stage<Src::Item>,
    {
        step(stage, self.init, self.source)
    }
}

/// Drive over the items of any iterable.
pub fn from_iter<I: IntoIterator>(items: I) -> Drive<IterSource<I>> {
    drive(IterSource::new(), items)
}

/// Drive over the elements of a vector.
pub fn from_vec<T>(items: Vec<T>) -> Drive<VecSource<T>> {
    drive(VecSource::new(), items)
}

/// Drive over nothing.
pub fn from_empty<T>() -> Drive<Empty<T>> {
    drive(empty(), ())
}

/// Drive over a single value.
pub fn from_once<T>(item: T) -> Drive<Once<T>> {
    drive(once(), item)
}

/// Drive over `init`, `step(init)`, ... while `cond` holds.
pub fn from_loop<T, C, S>(init: T, cond: C, step: S) -> Drive<LoopSource<C, S, T>>
where
    C: Fn(&T) -> bool,
    S: Fn(&T) -> T,
{
    drive(loop_source(cond, step), init)
}

/// Drive over `from..=to` counting by `step`. Fails when `step` is zero.
pub fn from_range(from: i64, to: i64, step: i64) -> Result<Drive<Range>, BeamError> {
    Ok(drive(range(to, step)?, from))
}

/// Drive yielding `n` unless it is the additive identity.
pub fn from_sum(n: i64) -> Drive<IdentitySource<i64>> {
    drive(sum_identity(), n)
}

/// Drive yielding `n` unless it is the multiplicative identity.
pub fn from_product(n: i64) -> Drive<IdentitySource<i64>> {
    drive(product_identity(), n)
}

/// Drive yielding `s` unless it is empty.
pub fn from_concat(s: impl Into<String>) -> Drive<IdentitySource<String>> {
    drive(concat_identity(), s.into())
}
