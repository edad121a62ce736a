//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits.
//!
//! # Example
//!
//! ```
//! use seqkit::prelude::*;
//!
//! assert_eq!([4, 8, 15].into_iter().index_of(|&x| x > 5), Some(1));
//! ```

pub use crate::collector::{Collector, CollectorBase, IntoCollector};
pub use crate::iter::SeqExt;
#[cfg(feature = "async")]
pub use crate::stream::StreamSeqExt;
