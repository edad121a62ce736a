//! Single-pass helpers over iterators, built on push-based [`Collector`]s.
//!
//! If [`Iterator`] is the "source half" of a data pipeline, a collector is the
//! "sink half": it receives items one at a time and yields an output when finished.
//! Every reduction in this crate is a collector, and the common ones are also
//! reachable as methods of the [`SeqExt`](iter::SeqExt) extension trait.
//!
//! # Ordered reductions
//!
//! [`cmp`] finds the minimum, the maximum, or both in one pass, by the natural
//! order, by a comparison function, or by a key. Among equally extremal items
//! the **first** one always wins, for the maximum as well.
//!
//! ```
//! use seqkit::{prelude::*, cmp::MinMaxResult};
//!
//! let bounds = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().min_max();
//! assert_eq!(bounds, MinMaxResult::MinMax(1, 9));
//!
//! let shortest = ["bb", "a", "ccc"].into_iter().try_min_by_key(|s| s.len());
//! assert_eq!(shortest, Ok("a"));
//! ```
//!
//! Empty input is explicit. The lenient forms return `None` or
//! [`MinMaxResult::NoElements`](cmp::MinMaxResult::NoElements),
//! and the `try_` forms fail:
//!
//! ```
//! use seqkit::{prelude::*, Error};
//!
//! assert_eq!(std::iter::empty::<i32>().try_min_max(), Err(Error::EmptySequence));
//! ```
//!
//! Floating-point numbers have no total order, so they go through the
//! NaN-aware collectors, where a single NaN makes the bounds NaN:
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let (min, max) = [f64::NAN, 2.0, 3.0].into_iter().try_nan_min_max().unwrap();
//! assert!(min.is_nan() && max.is_nan());
//!
//! assert_eq!([2.5, -1.0].into_iter().nan_min_max(), Some((-1.0, 2.5)));
//! ```
//!
//! # Composing collectors
//!
//! Collectors can be adapted before being fed:
//!
//! ```
//! use seqkit::{prelude::*, cmp::Max, string::Join};
//!
//! // Maximum of the first three items only.
//! assert_eq!([1, 7, 3, 9].into_iter().feed_into(Max::new().take(3)), Some(7));
//!
//! // Items 1..3, joined.
//! let middle = ["a", "b", "c", "d"].into_iter().feed_into(Join::new("+").slice(1, 2));
//! assert_eq!(middle, "b+c");
//! ```
//!
//! # Features
//!
//! - `std` (default): everything below plus [`DistinctBy`](collections::DistinctBy)
//!   and [`SeqExt::distinct_by()`](iter::SeqExt::distinct_by).
//! - `alloc`: [`Join`](string::Join), [`SeqExt::join_with()`](iter::SeqExt::join_with)
//!   and the read-only conversions.
//! - `async`: the [`stream`] module, with cancellable asynchronous iteration.
//!
//! Without `std`, this crate is `no_std`.
//!
//! [`Collector`]: collector::Collector

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod cmp;
pub mod collections;
pub mod collector;
mod error;
pub mod iter;
pub mod prelude;
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod stream;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod string;

pub use error::Error;

#[cfg(all(test, feature = "std"))]
mod test_utils;
