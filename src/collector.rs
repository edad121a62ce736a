//! Traits and adaptors for collectors.
//!
//! A collector is the "sink half" of a pipeline: where an [`Iterator`]
//! produces items, a collector consumes them one at a time and yields
//! an output when finished.
//!
//! # Unspecified behaviors
//!
//! Unless stated otherwise by the collector’s implementation, after any of
//! [`Collector::collect()`], [`Collector::collect_many()`], or
//! [`CollectorBase::break_hint()`] have returned [`Break(())`] once,
//! behaviors of subsequent calls to any method other than
//! [`finish()`](CollectorBase::finish) are unspecified.
//! Callers should call [`finish()`](CollectorBase::finish) once a collector
//! has signaled a stop, or wrap it with [`fuse()`](CollectorBase::fuse).
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use seqkit::prelude::*;
//!
//! /// Counts the words that start with an uppercase letter.
//! #[derive(Default)]
//! struct Capitalized(usize);
//!
//! impl CollectorBase for Capitalized {
//!     type Output = usize;
//!
//!     fn finish(self) -> Self::Output {
//!         self.0
//!     }
//! }
//!
//! impl<'a> Collector<&'a str> for Capitalized {
//!     fn collect(&mut self, word: &'a str) -> ControlFlow<()> {
//!         if word.starts_with(char::is_uppercase) {
//!             self.0 += 1;
//!         }
//!
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let count = "The quick Brown fox"
//!     .split_whitespace()
//!     .feed_into(Capitalized::default());
//!
//! assert_eq!(count, 2);
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

mod adapters;
#[allow(clippy::module_inception)]
mod collector;
mod collector_base;
mod into_collector;

pub use adapters::*;
pub use collector::*;
pub use collector_base::*;
pub use into_collector::*;

#[inline(always)]
pub(crate) const fn assert_collector_base<C>(collector: C) -> C
where
    C: CollectorBase,
{
    collector
}

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
