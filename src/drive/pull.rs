//! On-demand pulling: one downstream item per call.

use super::sink::Enqueue;
use crate::core::{Flow, Reducer, Stage};
use crate::error::BeamError;
use crate::source::Source;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Pull handle over a stage chain bound to a source.
///
/// Items produced by the chain land in a FIFO buffer. Each call hands out
/// one buffered item, pulling more source items only when the buffer is
/// empty, so a single source item that fans out into several downstream
/// items is parcelled out across successive calls.
///
/// Once the source is exhausted, the chain stops, or an error is returned,
/// the handle never pulls again. Items already buffered when the chain
/// stopped are still handed out.
pub struct Pull<Src: Source, R, Out> {
    source: Src,
    cursor: Option<Src::Cursor>,
    reducer: R,
    buffer: VecDeque<Out>,
}

/// Bind `stage` to `source` started at `init` and return a pull handle.
///
/// This is the pull-driven nested drive: `zip` uses it for its secondary
/// source, and [`Drive::lazy`](super::Drive::lazy) uses it at the top level.
pub fn step<Src, T>(
    stage: T,
    init: Src::Init,
    source: Src,
) -> Pull<Src, impl Reducer<Src::Item, Acc = VecDeque<T::Out>>, T::Out>
where
    Src: Source,
    T: Stage<Src::Item>,
{
    let reducer = stage.apply(Enqueue);
    let cursor = source.setup(init);
    Pull {
        source,
        cursor: Some(cursor),
        reducer,
        buffer: VecDeque::new(),
    }
}

impl<Src, R, Out> Pull<Src, R, Out>
where
    Src: Source,
    R: Reducer<Src::Item, Acc = VecDeque<Out>>,
{
    /// Produce the next item, `Ok(None)` once finished.
    pub fn pull(&mut self) -> Result<Option<Out>, BeamError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            let Some(cursor) = self.cursor.take() else {
                return Ok(None);
            };
            let Some((next, item)) = self.source.unfold(cursor) else {
                tracing::trace!("pull source exhausted");
                return Ok(None);
            };
            let buffer = std::mem::take(&mut self.buffer);
            match self.reducer.fold(buffer, item) {
                Ok(Flow::Continue(buffer)) => {
                    self.buffer = buffer;
                    self.cursor = Some(next);
                }
                Ok(flow) => {
                    tracing::trace!(signal = ?flow.signal(), "pull halted");
                    self.buffer = flow.into_inner();
                }
                Err(err) => {
                    tracing::debug!(error = %err, "pull aborted by callback error");
                    return Err(err);
                }
            }
        }
    }

    /// Check if this handle will never pull from its source again.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_none()
    }

    /// Number of items produced but not handed out yet.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<Src, R, Out> Iterator for Pull<Src, R, Out>
where
    Src: Source,
    R: Reducer<Src::Item, Acc = VecDeque<Out>>,
{
    type Item = Result<Out, BeamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose()
    }
}

impl<Src, R, Out> FusedIterator for Pull<Src, R, Out>
where
    Src: Source,
    R: Reducer<Src::Item, Acc = VecDeque<Out>>,
{
}
