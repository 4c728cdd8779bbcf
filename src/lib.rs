//! Beam: composable, pull-driven transducers
//!
//! Beam separates *where items come from*, *what happens to them* and *where
//! they end up*. Each of the three is a plain reusable value; a drive binds
//! them together for exactly one run.
//!
//! # Core Concepts
//!
//! - **Source**: pure description of a pull-based origin (`setup` + `unfold`)
//! - **Stage**: a composable transformation of a downstream reducer
//! - **Form**: a result container (`init` + `fold` + `finalize`)
//! - **Flow**: every fold says whether to continue, close (keep the item and
//!   stop) or cut (drop the item and stop)
//!
//! Stages compose left to right with [`pipe!`] or [`compose`]. A drive is
//! either eager ([`Drive::eager`]) or lazy ([`Drive::lazy`], a pull handle
//! that is also an [`Iterator`]). Both produce the same items in the same
//! order.
//!
//! # Example
//!
//! ```rust
//! use beam::form::to_concat;
//! use beam::source::IterSource;
//! use beam::stages::{chain, map, uniq};
//! use beam::{from_vec, pipe};
//!
//! let words = vec!["bee", "ear", "rat"];
//! let letters = pipe![
//!     chain(IterSource::new(), |w: &str| w.chars().collect::<Vec<_>>()),
//!     uniq(),
//!     map(|c: char| c.to_string()),
//! ];
//! let squeezed = from_vec(words).eager(&to_concat(), letters).unwrap();
//! assert_eq!(squeezed, "bearat");
//! ```
//!
//! Stopping early never pulls more than needed, so infinite sources are fine:
//!
//! ```rust
//! use beam::stages::{filter, take};
//! use beam::{from_loop, pipe};
//!
//! let mut evens = from_loop(0u64, |_: &u64| true, |n: &u64| n + 1)
//!     .lazy(pipe![filter(|n: &u64| n % 2 == 0), take(3)]);
//! assert_eq!(evens.next().unwrap().unwrap(), 0);
//! assert_eq!(evens.next().unwrap().unwrap(), 2);
//! assert_eq!(evens.next().unwrap().unwrap(), 4);
//! assert!(evens.next().is_none());
//! ```

pub mod core;
pub mod drive;
pub mod error;
pub mod form;
pub mod source;
pub mod stages;

mod macros;

// Re-export commonly used types
pub use crate::core::{compose, identity, Flow, Reducer, Signal, Stage};
pub use drive::{
    drive, from_concat, from_empty, from_iter, from_loop, from_once, from_product, from_range,
    from_sum, from_vec, Drive, Pull,
};
pub use error::BeamError;
pub use form::Form;
pub use source::Source;
