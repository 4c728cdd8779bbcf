//! Stages that decide per item whether to forward it.

use crate::core::{Flow, Reducer, Stage};
use crate::error::{BeamError, CallbackError};

/// Forward items for which `pred` holds.
#[derive(Clone, Copy, Debug)]
pub struct Filter<P> {
    pred: P,
}

pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

struct FilterReducer<P, R> {
    pred: P,
    down: R,
}

impl<In, P> Stage<In> for Filter<P>
where
    P: FnMut(&In) -> bool,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        FilterReducer {
            pred: self.pred,
            down,
        }
    }
}

impl<In, P, R> Reducer<In> for FilterReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if (self.pred)(&item) {
            return self.down.fold(acc, item);
        }
        Ok(Flow::Continue(acc))
    }
}

/// [`filter`] with a fallible predicate.
#[derive(Clone, Copy, Debug)]
pub struct TryFilter<P> {
    pred: P,
}

pub fn try_filter<P>(pred: P) -> TryFilter<P> {
    TryFilter { pred }
}

struct TryFilterReducer<P, R> {
    pred: P,
    down: R,
}

impl<In, E, P> Stage<In> for TryFilter<P>
where
    P: FnMut(&In) -> Result<bool, E>,
    E: Into<CallbackError>,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        TryFilterReducer {
            pred: self.pred,
            down,
        }
    }
}

impl<In, E, P, R> Reducer<In> for TryFilterReducer<P, R>
where
    P: FnMut(&In) -> Result<bool, E>,
    E: Into<CallbackError>,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if (self.pred)(&item).map_err(BeamError::callback)? {
            return self.down.fold(acc, item);
        }
        Ok(Flow::Continue(acc))
    }
}

/// Forward the first item matching `pred`, then close.
#[derive(Clone, Copy, Debug)]
pub struct Find<P> {
    pred: P,
}

pub fn find<P>(pred: P) -> Find<P> {
    Find { pred }
}

struct FindReducer<P, R> {
    pred: P,
    down: R,
}

impl<In, P> Stage<In> for Find<P>
where
    P: FnMut(&In) -> bool,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        FindReducer {
            pred: self.pred,
            down,
        }
    }
}

impl<In, P, R> Reducer<In> for FindReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if (self.pred)(&item) {
            return Ok(self.down.fold(acc, item)?.and_close());
        }
        Ok(Flow::Continue(acc))
    }
}

/// Drop items equal to the one right before them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniq;

pub fn uniq() -> Uniq {
    Uniq
}

struct UniqReducer<T, R> {
    // `None` means nothing seen yet, distinct from any item (even `None` items).
    last: Option<T>,
    down: R,
}

impl<In> Stage<In> for Uniq
where
    In: Clone + PartialEq,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        UniqReducer { last: None, down }
    }
}

impl<In, R> Reducer<In> for UniqReducer<In, R>
where
    In: Clone + PartialEq,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        if self.last.as_ref() == Some(&item) {
            return Ok(Flow::Continue(acc));
        }
        self.last = Some(item.clone());
        self.down.fold(acc, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_vec;

    #[test]
    fn filter_keeps_matching_items() {
        let out = from_vec(vec![1, 2, 3, 4, 5])
            .collect(filter(|x: &i32| x % 2 == 1))
            .unwrap();
        assert_eq!(out, vec![1, 3, 5]);
    }

    #[test]
    fn filter_rejecting_everything_is_empty() {
        let out = from_vec(vec![1, 2]).collect(filter(|_: &i32| false)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn try_filter_error_aborts() {
        let positive = try_filter(|x: &i32| {
            if *x == 0 {
                Err("zero has no sign")
            } else {
                Ok(*x > 0)
            }
        });
        let err = from_vec(vec![3, -1, 0, 4]).collect(positive).unwrap_err();
        assert_eq!(err.to_string(), "zero has no sign");
    }

    #[test]
    fn find_forwards_first_match_then_stops() {
        let pulled = std::cell::Cell::new(0);
        let out = from_vec(vec![1, 4, 6, 8])
            .collect(crate::pipe![
                crate::stages::map(|x: i32| {
                    pulled.set(pulled.get() + 1);
                    x
                }),
                find(|x: &i32| x % 2 == 0),
            ])
            .unwrap();
        assert_eq!(out, vec![4]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn find_without_match_is_empty() {
        let out = from_vec(vec![1, 3]).collect(find(|x: &i32| *x > 10)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn uniq_drops_consecutive_duplicates() {
        let out = from_vec(vec![1, 1, 2, 2, 2, 1, 3, 3]).collect(uniq()).unwrap();
        assert_eq!(out, vec![1, 2, 1, 3]);
    }

    #[test]
    fn uniq_treats_absent_values_as_values() {
        let items = vec![None, Some(1), Some(1), None, None, Some(3), Some(1), Some(3)];
        let out = from_vec(items).collect(uniq()).unwrap();
        assert_eq!(out, vec![None, Some(1), None, Some(3), Some(1), Some(3)]);
    }

    #[test]
    fn uniq_first_item_always_passes() {
        let out = from_vec(vec![None::<u8>]).collect(uniq()).unwrap();
        assert_eq!(out, vec![None]);
    }
}
