//! Collection-building [`Collector`]s.
//!
//! [`DistinctBy`] needs hashing and is only available with the `std` feature.
//! The read-only conversions are [`SeqExt::to_read_only()`] and
//! [`SeqExt::to_shared()`].
//!
//! [`Collector`]: crate::collector::Collector
//! [`SeqExt::to_read_only()`]: crate::iter::SeqExt::to_read_only
//! [`SeqExt::to_shared()`]: crate::iter::SeqExt::to_shared

#[cfg(feature = "std")]
mod distinct_by;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use distinct_by::*;
