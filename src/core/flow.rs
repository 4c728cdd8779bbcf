//! Outcome of a single fold call.
//!
//! Every fold in a stage chain returns a [`Flow`] telling the drive whether
//! to keep pulling. This replaces an out-of-band stop flag: a stage that wants
//! to stop says so in its return value, and a drive can never miss it.

/// Result of folding one item through a stage chain.
///
/// # Example
///
/// ```rust
/// use beam::core::{Flow, Signal};
///
/// let flow = Flow::Continue(vec![1, 2]).and_close();
/// assert_eq!(flow.signal(), Some(Signal::Close));
/// assert_eq!(flow.into_inner(), vec![1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow<A> {
    /// Item handled, keep pulling.
    Continue(A),

    /// Item handled and folded, stop pulling (graceful stop).
    Close(A),

    /// Item discarded, stop pulling (abrupt stop).
    ///
    /// Carries the accumulator as it stood before the discarded item.
    Cut(A),
}

/// Which stop a drive observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Close,
    Cut,
}

impl<A> Flow<A> {
    /// Turn a `Continue` into a `Close`; stops already requested are kept.
    pub fn and_close(self) -> Self {
        match self {
            Flow::Continue(acc) => Flow::Close(acc),
            stopped => stopped,
        }
    }

    /// The stop carried by this outcome, if any.
    pub fn signal(&self) -> Option<Signal> {
        match self {
            Flow::Continue(_) => None,
            Flow::Close(_) => Some(Signal::Close),
            Flow::Cut(_) => Some(Signal::Cut),
        }
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue(_))
    }

    /// Unwrap the accumulator, forgetting the signal.
    pub fn into_inner(self) -> A {
        match self {
            Flow::Continue(acc) | Flow::Close(acc) | Flow::Cut(acc) => acc,
        }
    }

    /// Rebuild an outcome from an accumulator and an optional stop.
    pub fn with_signal(acc: A, signal: Option<Signal>) -> Self {
        match signal {
            None => Flow::Continue(acc),
            Some(Signal::Close) => Flow::Close(acc),
            Some(Signal::Cut) => Flow::Cut(acc),
        }
    }
}
