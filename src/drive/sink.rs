//! Terminal reducers installed by the drives.

use crate::core::{Flow, Reducer, Signal};
use crate::error::BeamError;
use crate::form::Form;
use std::cell::Cell;
use std::collections::VecDeque;

/// Folds into a [`Form`]; never stops on its own.
pub(crate) struct FormSink<'f, F> {
    form: &'f F,
}

impl<'f, F> FormSink<'f, F> {
    pub(crate) fn new(form: &'f F) -> Self {
        Self { form }
    }
}

impl<'f, T, F: Form<T>> Reducer<T> for FormSink<'f, F> {
    type Acc = F::Acc;

    fn fold(&mut self, acc: F::Acc, item: T) -> Result<Flow<F::Acc>, BeamError> {
        Ok(Flow::Continue(self.form.fold(acc, item)))
    }
}

/// Appends every item to the FIFO buffer a pull handle drains.
pub(crate) struct Enqueue;

impl<T> Reducer<T> for Enqueue {
    type Acc = VecDeque<T>;

    fn fold(&mut self, mut acc: VecDeque<T>, item: T) -> Result<Flow<VecDeque<T>>, BeamError> {
        acc.push_back(item);
        Ok(Flow::Continue(acc))
    }
}

/// Feeds a nested drive's output into the parent's downstream reducer.
///
/// A stop coming back from the parent's downstream belongs to the parent
/// drive. It is recorded in `halt` so the nested drive can hand it upward
/// instead of absorbing it as its own.
pub(crate) struct Forward<'a, R> {
    outer: &'a mut R,
    halt: &'a Cell<Option<Signal>>,
}

impl<'a, R> Forward<'a, R> {
    pub(crate) fn new(outer: &'a mut R, halt: &'a Cell<Option<Signal>>) -> Self {
        Self { outer, halt }
    }
}

impl<'a, T, R: Reducer<T>> Reducer<T> for Forward<'a, R> {
    type Acc = R::Acc;

    fn fold(&mut self, acc: R::Acc, item: T) -> Result<Flow<R::Acc>, BeamError> {
        let flow = self.outer.fold(acc, item)?;
        if let Some(signal) = flow.signal() {
            self.halt.set(Some(signal));
        }
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fold_fn;
    use crate::form::to_vec;

    struct StopAt {
        limit: usize,
        signal: Signal,
    }

    impl Reducer<u8> for StopAt {
        type Acc = Vec<u8>;

        fn fold(&mut self, mut acc: Vec<u8>, item: u8) -> Result<Flow<Vec<u8>>, BeamError> {
            if acc.len() + 1 < self.limit {
                acc.push(item);
                return Ok(Flow::Continue(acc));
            }
            match self.signal {
                Signal::Close => {
                    acc.push(item);
                    Ok(Flow::Close(acc))
                }
                Signal::Cut => Ok(Flow::Cut(acc)),
            }
        }
    }

    #[test]
    fn form_sink_folds_through_form() {
        let form = to_vec();
        let mut sink = FormSink::new(&form);
        let flow = sink.fold(vec![1], 2).unwrap();
        assert_eq!(flow, Flow::Continue(vec![1, 2]));
    }

    #[test]
    fn enqueue_appends_to_back() {
        let mut queue = VecDeque::from(vec!['a']);
        queue = Enqueue.fold(queue, 'b').unwrap().into_inner();
        assert_eq!(queue, VecDeque::from(vec!['a', 'b']));
    }

    #[test]
    fn forward_passes_continue_without_recording() {
        let halt = Cell::new(None);
        let mut outer = fold_fn(|n: u32, x: u32| n + x);
        let mut forward = Forward::new(&mut outer, &halt);
        assert_eq!(forward.fold(1, 2).unwrap(), Flow::Continue(3));
        assert_eq!(halt.get(), None);
    }

    #[test]
    fn forward_records_parent_close() {
        let halt = Cell::new(None);
        let mut outer = StopAt {
            limit: 1,
            signal: Signal::Close,
        };
        let mut forward = Forward::new(&mut outer, &halt);
        assert_eq!(forward.fold(Vec::new(), 4).unwrap(), Flow::Close(vec![4]));
        assert_eq!(halt.get(), Some(Signal::Close));
    }

    #[test]
    fn forward_records_parent_cut() {
        let halt = Cell::new(None);
        let mut outer = StopAt {
            limit: 1,
            signal: Signal::Cut,
        };
        let mut forward = Forward::new(&mut outer, &halt);
        assert_eq!(forward.fold(Vec::new(), 4).unwrap(), Flow::Cut(vec![]));
        assert_eq!(halt.get(), Some(Signal::Cut));
    }
}
