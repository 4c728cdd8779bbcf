//! One-to-one stages: map, try_map, scan, try_scan, replace.

use crate::core::{Flow, Reducer, Stage};
use crate::error::{BeamError, CallbackError};

/// Transform every item with `f`.
#[derive(Clone, Copy, Debug)]
pub struct Map<F> {
    f: F,
}

pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

struct MapReducer<F, R> {
    f: F,
    down: R,
}

impl<In, B, F> Stage<In> for Map<F>
where
    F: FnMut(In) -> B,
{
    type Out = B;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        MapReducer { f: self.f, down }
    }
}

impl<In, B, F, R> Reducer<In> for MapReducer<F, R>
where
    F: FnMut(In) -> B,
    R: Reducer<B>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        self.down.fold(acc, (self.f)(item))
    }
}

/// Transform every item with a fallible `f`; its error aborts the drive.
#[derive(Clone, Copy, Debug)]
pub struct TryMap<F> {
    f: F,
}

pub fn try_map<F>(f: F) -> TryMap<F> {
    TryMap { f }
}

struct TryMapReducer<F, R> {
    f: F,
    down: R,
}

impl<In, B, E, F> Stage<In> for TryMap<F>
where
    F: FnMut(In) -> Result<B, E>,
    E: Into<CallbackError>,
{
    type Out = B;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        TryMapReducer { f: self.f, down }
    }
}

impl<In, B, E, F, R> Reducer<In> for TryMapReducer<F, R>
where
    F: FnMut(In) -> Result<B, E>,
    E: Into<CallbackError>,
    R: Reducer<B>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        let mapped = (self.f)(item).map_err(BeamError::callback)?;
        self.down.fold(acc, mapped)
    }
}

/// Forward every running fold value, starting the fold from `init`.
#[derive(Clone, Copy, Debug)]
pub struct Scan<F, S> {
    f: F,
    init: S,
}

/// Emit `f(init, x0)`, `f(f(init, x0), x1)`, ... one value per item.
pub fn scan<F, S>(f: F, init: S) -> Scan<F, S> {
    Scan { f, init }
}

struct ScanReducer<F, S, R> {
    f: F,
    state: S,
    down: R,
}

impl<In, S, F> Stage<In> for Scan<F, S>
where
    S: Clone,
    F: FnMut(S, In) -> S,
{
    type Out = S;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        ScanReducer {
            f: self.f,
            state: self.init,
            down,
        }
    }
}

impl<In, S, F, R> Reducer<In> for ScanReducer<F, S, R>
where
    S: Clone,
    F: FnMut(S, In) -> S,
    R: Reducer<S>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        self.state = (self.f)(self.state.clone(), item);
        self.down.fold(acc, self.state.clone())
    }
}

/// [`scan`] with a fallible step function.
#[derive(Clone, Copy, Debug)]
pub struct TryScan<F, S> {
    f: F,
    init: S,
}

pub fn try_scan<F, S>(f: F, init: S) -> TryScan<F, S> {
    TryScan { f, init }
}

struct TryScanReducer<F, S, R> {
    f: F,
    state: S,
    down: R,
}

impl<In, S, E, F> Stage<In> for TryScan<F, S>
where
    S: Clone,
    F: FnMut(S, In) -> Result<S, E>,
    E: Into<CallbackError>,
{
    type Out = S;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        TryScanReducer {
            f: self.f,
            state: self.init,
            down,
        }
    }
}

impl<In, S, E, F, R> Reducer<In> for TryScanReducer<F, S, R>
where
    S: Clone,
    F: FnMut(S, In) -> Result<S, E>,
    E: Into<CallbackError>,
    R: Reducer<S>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        self.state = (self.f)(self.state.clone(), item).map_err(BeamError::callback)?;
        self.down.fold(acc, self.state.clone())
    }
}

/// Substitute `value` for every item matching `pred`.
#[derive(Clone, Copy, Debug)]
pub struct Replace<P, V> {
    pred: P,
    value: V,
}

pub fn replace<P, V>(pred: P, value: V) -> Replace<P, V> {
    Replace { pred, value }
}

struct ReplaceReducer<P, V, R> {
    pred: P,
    value: V,
    down: R,
}

impl<In, P> Stage<In> for Replace<P, In>
where
    In: Clone,
    P: FnMut(&In) -> bool,
{
    type Out = In;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        ReplaceReducer {
            pred: self.pred,
            value: self.value,
            down,
        }
    }
}

impl<In, P, R> Reducer<In> for ReplaceReducer<P, In, R>
where
    In: Clone,
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        let item = if (self.pred)(&item) {
            self.value.clone()
        } else {
            item
        };
        self.down.fold(acc, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity;
    use crate::from_vec;
    use crate::pipe;
    use crate::stages::take;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Odd(i32);

    impl fmt::Display for Odd {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} is odd", self.0)
        }
    }

    impl std::error::Error for Odd {}

    #[test]
    fn map_transforms_each_item() {
        let out = from_vec(vec![1, 2, 3]).collect(map(|x: i32| x * 10)).unwrap();
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn map_can_change_type() {
        let out = from_vec(vec![1, 22]).collect(map(|x: u32| x.to_string())).unwrap();
        assert_eq!(out, vec!["1", "22"]);
    }

    #[test]
    #[should_panic(expected = "mapper blew up")]
    fn map_panics_propagate() {
        let _ = from_vec(vec![1, 2]).collect(map(|x: i32| {
            if x == 2 {
                panic!("mapper blew up");
            }
            x
        }));
    }

    #[test]
    fn try_map_error_propagates_unchanged() {
        let halve = try_map(|x: i32| if x % 2 == 0 { Ok(x / 2) } else { Err(Odd(x)) });
        let err = from_vec(vec![4, 2, 7, 8]).collect(halve).unwrap_err();
        assert_eq!(err.downcast::<Odd>().unwrap(), Odd(7));
    }

    #[test]
    fn try_map_passes_ok_values() {
        let parse = try_map(|s: &str| s.parse::<u8>());
        let out = from_vec(vec!["1", "20"]).collect(parse).unwrap();
        assert_eq!(out, vec![1, 20]);
    }

    #[test]
    fn scan_emits_every_running_value() {
        let out = from_vec(vec![1, 2, 3, 4])
            .collect(scan(|acc: i32, x: i32| acc + x, 0))
            .unwrap();
        assert_eq!(out, vec![1, 3, 6, 10]);
    }

    #[test]
    fn scan_state_is_fresh_per_drive() {
        let running = scan(|acc: String, c: char| format!("{acc}{c}"), String::new());
        let first = from_vec(vec!['a', 'b']).collect(running.clone()).unwrap();
        let second = from_vec(vec!['c']).collect(running).unwrap();
        assert_eq!(first, vec!["a", "ab"]);
        assert_eq!(second, vec!["c"]);
    }

    #[test]
    fn try_scan_stops_on_error() {
        let checked = try_scan(
            |acc: u8, x: u8| acc.checked_add(x).ok_or("overflow"),
            0,
        );
        let err = from_vec(vec![100, 100, 100]).collect(checked).unwrap_err();
        assert_eq!(err.to_string(), "overflow");
    }

    #[test]
    fn replace_substitutes_matches() {
        let out = from_vec(vec![1, -2, 3, -4])
            .collect(replace(|x: &i32| *x < 0, 0))
            .unwrap();
        assert_eq!(out, vec![1, 0, 3, 0]);
    }

    #[test]
    fn stages_compose_with_close() {
        let stage = pipe![identity(), map(|x: i32| x + 1), take(2)];
        assert_eq!(from_vec(vec![5, 6, 7]).collect(stage).unwrap(), vec![6, 7]);
    }
}
