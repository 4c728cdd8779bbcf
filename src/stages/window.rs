//! Grouping stages: fixed chunks and sliding windows.

use crate::core::{Flow, Reducer, Stage};
use crate::error::BeamError;
use std::collections::VecDeque;

/// Group items into non-overlapping chunks of `len`.
///
/// An incomplete trailing chunk is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slices {
    len: usize,
}

/// Create a chunking stage. Fails when `len` is zero.
pub fn slices(len: usize) -> Result<Slices, BeamError> {
    if len == 0 {
        return Err(BeamError::invalid("len", "must be positive"));
    }
    Ok(Slices { len })
}

struct SlicesReducer<T, R> {
    len: usize,
    chunk: Vec<T>,
    down: R,
}

impl<In> Stage<In> for Slices {
    type Out = Vec<In>;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        SlicesReducer {
            len: self.len,
            chunk: Vec::with_capacity(self.len),
            down,
        }
    }
}

impl<In, R> Reducer<In> for SlicesReducer<In, R>
where
    R: Reducer<Vec<In>>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        self.chunk.push(item);
        if self.chunk.len() < self.len {
            return Ok(Flow::Continue(acc));
        }
        let full = std::mem::replace(&mut self.chunk, Vec::with_capacity(self.len));
        self.down.fold(acc, full)
    }
}

/// Sliding window of `len` items, moving by one.
///
/// Emits once per item after the first `len - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apertures {
    len: usize,
}

/// Create a sliding-window stage. Fails when `len` is zero.
pub fn apertures(len: usize) -> Result<Apertures, BeamError> {
    if len == 0 {
        return Err(BeamError::invalid("len", "must be positive"));
    }
    Ok(Apertures { len })
}

struct AperturesReducer<T, R> {
    len: usize,
    window: VecDeque<T>,
    down: R,
}

impl<In: Clone> Stage<In> for Apertures {
    type Out = Vec<In>;

    fn apply<R>(self, down: R) -> impl Reducer<In, Acc = R::Acc>
    where
        R: Reducer<Self::Out>,
    {
        AperturesReducer {
            len: self.len,
            window: VecDeque::with_capacity(self.len),
            down,
        }
    }
}

impl<In, R> Reducer<In> for AperturesReducer<In, R>
where
    In: Clone,
    R: Reducer<Vec<In>>,
{
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: In) -> Result<Flow<R::Acc>, BeamError> {
        self.window.push_back(item);
        if self.window.len() < self.len {
            return Ok(Flow::Continue(acc));
        }
        let full: Vec<In> = self.window.iter().cloned().collect();
        self.window.pop_front();
        self.down.fold(acc, full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::take;
    use crate::{from_iter, from_vec, pipe};

    #[test]
    fn slices_drop_incomplete_tail() {
        let out = from_vec(vec![1, 2, 3, 4, 5]).collect(slices(2).unwrap()).unwrap();
        assert_eq!(out, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn slices_of_one() {
        let out = from_vec(vec!['a', 'b']).collect(slices(1).unwrap()).unwrap();
        assert_eq!(out, vec![vec!['a'], vec!['b']]);
    }

    #[test]
    fn slices_reject_zero() {
        assert!(matches!(
            slices(0),
            Err(BeamError::InvalidParameter { name: "len", .. })
        ));
    }

    #[test]
    fn apertures_slide_by_one() {
        let out = from_vec(vec![1, 2, 3]).collect(apertures(2).unwrap()).unwrap();
        assert_eq!(out, vec![vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn apertures_longer_than_source_are_empty() {
        let out = from_vec(vec![1, 2]).collect(apertures(3).unwrap()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn apertures_reject_zero() {
        assert!(apertures(0).is_err());
    }

    #[test]
    fn windows_compose_with_take() {
        let stage = pipe![apertures(3).unwrap(), take(2)];
        let out = from_iter(0u8..).collect(stage).unwrap();
        assert_eq!(out, vec![vec![0, 1, 2], vec![1, 2, 3]]);
    }
}
