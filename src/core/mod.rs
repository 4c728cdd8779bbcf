//! Core protocol of the transducer engine.
//!
//! This module contains the pieces every drive and every stage speak:
//! - [`Flow`]: the outcome of one fold (continue, graceful close, abrupt cut)
//! - [`Reducer`]: the downstream reducing context a stage folds into
//! - [`Stage`]: a transformation from a downstream reducer to an upstream one
//!
//! Nothing here pulls from a source; driving lives in [`crate::drive`].

mod flow;
mod stage;

pub use flow::{Flow, Signal};
pub use stage::{compose, fold_fn, identity, FoldFn, Identity, Reducer, Stage, Then};
