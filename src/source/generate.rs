//! Generated sources: loops, numeric ranges and group-identity sources.

use super::Source;
use crate::error::BeamError;
use std::fmt;
use std::marker::PhantomData;

/// Source that keeps applying `step` while `cond` holds.
///
/// The initial value is the first item (if `cond` accepts it).
pub struct LoopSource<C, S, T> {
    cond: C,
    step: S,
    _item: PhantomData<fn(T) -> T>,
}

/// Create a loop source from a condition and a step function.
pub fn loop_source<C, S, T>(cond: C, step: S) -> LoopSource<C, S, T> {
    LoopSource {
        cond,
        step,
        _item: PhantomData,
    }
}

impl<C: Clone, S: Clone, T> Clone for LoopSource<C, S, T> {
    fn clone(&self) -> Self {
        loop_source(self.cond.clone(), self.step.clone())
    }
}

impl<C, S, T> fmt::Debug for LoopSource<C, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopSource").finish_non_exhaustive()
    }
}

impl<T, C, S> Source for LoopSource<C, S, T>
where
    C: Fn(&T) -> bool,
    S: Fn(&T) -> T,
{
    type Init = T;
    type Cursor = T;
    type Item = T;

    fn setup(&self, init: T) -> T {
        init
    }

    fn unfold(&self, cursor: T) -> Option<(T, T)> {
        if !(self.cond)(&cursor) {
            return None;
        }
        let next = (self.step)(&cursor);
        Some((next, cursor))
    }
}

/// Monotone integer range with an inclusive bound.
///
/// Counts from the initial value towards `to` by `step`. A positive step
/// stops once the value exceeds `to`, a negative one once it drops below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    to: i64,
    step: i64,
}

/// Create a range source. Fails when `step` is zero.
///
/// # Example
///
/// ```rust
/// use beam::source::range;
///
/// let down = range(0, -2).unwrap();
/// let items = beam::drive(down, 5).collect(beam::identity()).unwrap();
/// assert_eq!(items, vec![5, 3, 1]);
///
/// assert!(range(10, 0).is_err());
/// ```
pub fn range(to: i64, step: i64) -> Result<Range, BeamError> {
    if step == 0 {
        return Err(BeamError::invalid("step", "step cannot be 0"));
    }
    Ok(Range { to, step })
}

impl Source for Range {
    type Init = i64;
    type Cursor = Option<i64>;
    type Item = i64;

    fn setup(&self, init: i64) -> Option<i64> {
        Some(init)
    }

    fn unfold(&self, cursor: Option<i64>) -> Option<(Option<i64>, i64)> {
        let value = cursor?;
        let in_bounds = if self.step > 0 {
            value <= self.to
        } else {
            value >= self.to
        };
        if !in_bounds {
            return None;
        }
        // Overflow ends the range instead of wrapping around.
        Some((value.checked_add(self.step), value))
    }
}

/// Source used to check the identity law of a group form.
///
/// A value other than the identity unfolds to itself once; the identity
/// unfolds to nothing. Folding the result with the matching group form
/// therefore reproduces the initial value.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentitySource<T> {
    identity: T,
}

impl<T: Clone + PartialEq> IdentitySource<T> {
    pub fn new(identity: T) -> Self {
        Self { identity }
    }
}

impl<T: Clone + PartialEq> Source for IdentitySource<T> {
    type Init = T;
    type Cursor = T;
    type Item = T;

    fn setup(&self, init: T) -> T {
        init
    }

    fn unfold(&self, cursor: T) -> Option<(T, T)> {
        if cursor == self.identity {
            return None;
        }
        Some((self.identity.clone(), cursor))
    }
}

/// Identity source for integer addition.
pub fn sum_identity() -> IdentitySource<i64> {
    IdentitySource::new(0)
}

/// Identity source for integer multiplication.
pub fn product_identity() -> IdentitySource<i64> {
    IdentitySource::new(1)
}

/// Identity source for string concatenation.
pub fn concat_identity() -> IdentitySource<String> {
    IdentitySource::new(String::new())
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
    fn loop_source_stops_when_condition_fails() {
        let doubling = loop_source(|n: &u32| *n < 20, |n: &u32| n * 2);
        assert_eq!(items(&doubling, 1), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn cloned_loop_source_runs_independently() {
        let counting = loop_source(|n: &u8| *n < 3, |n: &u8| n + 1);
        let copy = counting.clone();
        assert_eq!(items(&counting, 0), vec![0, 1, 2]);
        assert_eq!(items(&copy, 2), vec![2]);
        assert_eq!(format!("{copy:?}"), "LoopSource { .. }");
    }

    #[test]
    fn loop_source_rejects_initial_value() {
        let never = loop_source(|_: &u32| false, |n: &u32| n + 1);
        assert!(items(&never, 0).is_empty());
    }

    #[test]
    fn range_counts_up_inclusively() {
        assert_eq!(items(&range(4, 1).unwrap(), 1), vec![1, 2, 3, 4]);
        assert_eq!(items(&range(5, 2).unwrap(), 0), vec![0, 2, 4]);
    }

    #[test]
    fn range_counts_down_inclusively() {
        assert_eq!(items(&range(-2, -1).unwrap(), 1), vec![1, 0, -1, -2]);
    }

    #[test]
    fn range_past_bound_is_empty() {
        assert!(items(&range(0, 1).unwrap(), 3).is_empty());
        assert!(items(&range(3, -1).unwrap(), 0).is_empty());
    }

    #[test]
    fn range_rejects_zero_step() {
        let err = range(10, 0).unwrap_err();
        assert!(matches!(
            err,
            BeamError::InvalidParameter { name: "step", .. }
        ));
    }

    #[test]
    fn range_stops_at_overflow() {
        let near_max = items(&range(i64::MAX, 1).unwrap(), i64::MAX - 1);
        assert_eq!(near_max, vec![i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn identity_sources_yield_non_identity_once() {
        assert_eq!(items(&sum_identity(), 5), vec![5]);
        assert!(items(&sum_identity(), 0).is_empty());
        assert_eq!(items(&product_identity(), 7), vec![7]);
        assert!(items(&product_identity(), 1).is_empty());
        assert_eq!(items(&concat_identity(), "ab".to_string()), vec!["ab"]);
        assert!(items(&concat_identity(), String::new()).is_empty());
    }
}
