//! Sequence helpers: the [`SeqExt`] extension trait and the collectors behind it.
//!
//! [`First`] and [`Position`] are plain [`Collector`]s, so they compose with
//! the adaptors of [`CollectorBase`] like every other collector of this crate.
//!
//! [`Collector`]: crate::collector::Collector
//! [`CollectorBase`]: crate::collector::CollectorBase

mod first;
mod is_none_or_empty;
mod position;
mod seq_ext;

pub use first::*;
pub use is_none_or_empty::*;
pub use position::*;
pub use seq_ext::*;
