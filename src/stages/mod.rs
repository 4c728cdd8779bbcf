//! Combinator library.
//!
//! Every stage here is a plain value implementing [`Stage`](crate::core::Stage).
//! Its per-drive state (counters, buffers, last-seen item) lives in the
//! reducer built by `apply`, so one stage value can be cloned and bound to
//! any number of drives.
//!
//! - one-to-one: [`map`], [`try_map`], [`scan`], [`try_scan`], [`replace`]
//! - selection: [`filter`], [`try_filter`], [`find`], [`uniq`]
//! - limits: [`take`], [`drop`], [`take_while`], [`drop_while`]
//! - grouping: [`slices`], [`apertures`]
//! - nested drives: [`chain`], [`flatten`], [`join`], [`zip`]

mod limit;
mod map;
mod nested;
mod select;
mod window;

pub use crate::core::identity;
pub use limit::{drop, drop_while, take, take_while, DropFirst, DropWhile, Take, TakeWhile};
pub use map::{map, replace, scan, try_map, try_scan, Map, Replace, Scan, TryMap, TryScan};
pub use nested::{chain, flatten, join, zip, Chain, Flatten, Zip};
pub use select::{filter, find, try_filter, uniq, Filter, Find, TryFilter, Uniq};
pub use window::{apertures, slices, Apertures, Slices};
