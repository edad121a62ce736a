//! String-related [`Collector`]s.
//!
//! [`Collector`]: crate::collector::Collector

mod join;

pub use join::*;
