use std::cmp::Ordering;
#[cfg(feature = "std")]
use std::hash::Hash;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{boxed::Box, string::String, sync::Arc};
#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "alloc")]
use itertools::Itertools;
#[cfg(feature = "std")]
use itertools::UniqueBy;

use super::{First, Position};
use crate::{
    Error,
    cmp::{Float, Max, Min, MinMax, MinMaxResult, NanMax, NanMin, NanMinMax},
    collector::{Collector, IntoCollector},
};

/// Extends [`Iterator`] with single-pass helpers built on [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
/// Every method may also be called as a plain function with the sequence as
/// the first argument, e.g. `SeqExt::min_max(items)`.
///
/// Methods prefixed with `try_` fail with [`Error::EmptySequence`] on an
/// empty sequence, while their counterparts return `None` or
/// [`MinMaxResult::NoElements`].
///
/// All comparisons keep the **first** item among equally extremal ones,
/// including the maximum (unlike [`Iterator::max()`]).
///
/// A sequence of `Option`s can be reduced over its `Some`s with
/// [`Iterator::flatten()`]:
///
/// ```
/// use seqkit::{prelude::*, cmp::MinMaxResult};
///
/// let readings = [Some(4), None, Some(-2), None];
/// assert_eq!(readings.into_iter().flatten().min_max(), MinMaxResult::MinMax(-2, 4));
///
/// let missing = [None::<i32>, None];
/// assert_eq!(missing.into_iter().flatten().min_max(), MinMaxResult::NoElements);
/// ```
pub trait SeqExt: Iterator {
    /// Feeds items from this iterator into the provided collector till
    /// the collector stops accumulating or the iterator is exhausted,
    /// and returns the collector's output.
    ///
    /// Items after the one on which the collector stopped stay in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Max};
    ///
    /// let max = [4, 2, 6, 3].into_iter().feed_into(Max::new());
    /// assert_eq!(max, Some(6));
    /// ```
    #[inline]
    fn feed_into<C>(&mut self, collector: C) -> C::Output
    where
        C: IntoCollector<Self::Item>,
    {
        collector.into_collector().collect_then_finish(self)
    }

    /// Returns the minimum item, or [`Error::EmptySequence`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, Error};
    ///
    /// assert_eq!([3, 1, 2].into_iter().try_min(), Ok(1));
    /// assert_eq!(std::iter::empty::<i32>().try_min(), Err(Error::EmptySequence));
    /// ```
    #[inline]
    fn try_min(mut self) -> Result<Self::Item, Error>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.feed_into(Min::new()).ok_or(Error::EmptySequence)
    }

    /// Returns the minimum item with respect to a comparison function,
    /// or [`Error::EmptySequence`] if there is none.
    #[inline]
    fn try_min_by<F>(mut self, cmp: F) -> Result<Self::Item, Error>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.feed_into(Min::by(cmp)).ok_or(Error::EmptySequence)
    }

    /// Returns the item that gives the minimum key,
    /// or [`Error::EmptySequence`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let shortest = ["bb", "a", "ccc"].into_iter().try_min_by_key(|s| s.len());
    /// assert_eq!(shortest, Ok("a"));
    /// ```
    #[inline]
    fn try_min_by_key<K, F>(mut self, f: F) -> Result<Self::Item, Error>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.feed_into(Min::by_key(f)).ok_or(Error::EmptySequence)
    }

    /// Returns the first maximum item, or [`Error::EmptySequence`] if there is none.
    #[inline]
    fn try_max(mut self) -> Result<Self::Item, Error>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.feed_into(Max::new()).ok_or(Error::EmptySequence)
    }

    /// Returns the first maximum item with respect to a comparison function,
    /// or [`Error::EmptySequence`] if there is none.
    #[inline]
    fn try_max_by<F>(mut self, cmp: F) -> Result<Self::Item, Error>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.feed_into(Max::by(cmp)).ok_or(Error::EmptySequence)
    }

    /// Returns the first item that gives the maximum key,
    /// or [`Error::EmptySequence`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let longest = ["ab", "cd", "e"].into_iter().try_max_by_key(|s| s.len());
    /// assert_eq!(longest, Ok("ab"));
    /// ```
    #[inline]
    fn try_max_by_key<K, F>(mut self, f: F) -> Result<Self::Item, Error>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.feed_into(Max::by_key(f)).ok_or(Error::EmptySequence)
    }

    /// Returns the minimum and the maximum items in a single pass.
    ///
    /// See [`MinMax`] for the shape of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::MinMaxResult};
    ///
    /// let bounds = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().min_max();
    /// assert_eq!(bounds, MinMaxResult::MinMax(1, 9));
    /// ```
    #[inline]
    fn min_max(mut self) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.feed_into(MinMax::new())
    }

    /// Returns the minimum and the maximum items with respect to a comparison function.
    #[inline]
    fn min_max_by<F>(mut self, cmp: F) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.feed_into(MinMax::by(cmp))
    }

    /// Returns the items that give the minimum and the maximum keys.
    ///
    /// The key-extraction function runs exactly once per item.
    #[inline]
    fn min_max_by_key<K, F>(mut self, f: F) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.feed_into(MinMax::by_key(f))
    }

    /// Returns `(min, max)`, or [`Error::EmptySequence`] if there is no item.
    ///
    /// If every item compares equal to the first ([`MinMaxResult::Same`]),
    /// both bounds are that item, hence the `Clone` bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, Error};
    ///
    /// assert_eq!([7].into_iter().try_min_max(), Ok((7, 7)));
    /// assert_eq!(Vec::<i32>::new().into_iter().try_min_max(), Err(Error::EmptySequence));
    /// ```
    #[inline]
    fn try_min_max(self) -> Result<(Self::Item, Self::Item), Error>
    where
        Self: Sized,
        Self::Item: Ord + Clone,
    {
        self.min_max().into_option().ok_or(Error::EmptySequence)
    }

    /// Returns the items giving the minimum and the maximum keys as `(min, max)`,
    /// or [`Error::EmptySequence`] if there is no item.
    #[inline]
    fn try_min_max_by_key<K, F>(self, f: F) -> Result<(Self::Item, Self::Item), Error>
    where
        Self: Sized,
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.min_max_by_key(f)
            .into_option()
            .ok_or(Error::EmptySequence)
    }

    /// Returns the minimum of floating-point numbers, or NaN if any NaN is present.
    ///
    /// See [`NanMin`].
    #[inline]
    fn nan_min(mut self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Float,
    {
        self.feed_into(NanMin::new())
    }

    /// Returns the maximum of floating-point numbers, or NaN if any NaN is present.
    ///
    /// See [`NanMax`].
    #[inline]
    fn nan_max(mut self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Float,
    {
        self.feed_into(NanMax::new())
    }

    /// Returns `(min, max)` of floating-point numbers in a single pass.
    /// Both are NaN if any NaN is present.
    ///
    /// See [`NanMinMax`].
    #[inline]
    fn nan_min_max(mut self) -> Option<(Self::Item, Self::Item)>
    where
        Self: Sized,
        Self::Item: Float,
    {
        self.feed_into(NanMinMax::new())
    }

    /// Strict form of [`nan_min_max()`](SeqExt::nan_min_max).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, Error};
    ///
    /// let (min, max) = [f64::NAN, 2.0, 3.0].into_iter().try_nan_min_max().unwrap();
    /// assert!(min.is_nan() && max.is_nan());
    ///
    /// assert_eq!(std::iter::empty::<f32>().try_nan_min_max(), Err(Error::EmptySequence));
    /// ```
    #[inline]
    fn try_nan_min_max(self) -> Result<(Self::Item, Self::Item), Error>
    where
        Self: Sized,
        Self::Item: Float,
    {
        self.nan_min_max().ok_or(Error::EmptySequence)
    }

    /// Returns the first item, or the default value if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// assert_eq!([5, 6].into_iter().first_or_default(), 5);
    /// assert_eq!(std::iter::empty::<u32>().first_or_default(), 0);
    /// ```
    #[inline]
    fn first_or_default(mut self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Default,
    {
        self.feed_into(First::new()).unwrap_or_default()
    }

    /// Returns the first item, or `default` if there is none.
    #[inline]
    fn first_or(mut self, default: Self::Item) -> Self::Item
    where
        Self: Sized,
    {
        self.feed_into(First::new()).unwrap_or(default)
    }

    /// Returns the zero-based index of the first item satisfying `pred`.
    ///
    /// See [`Position`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// assert_eq!([1, 4, 9].into_iter().index_of(|&x| x > 3), Some(1));
    /// assert_eq!([1, 4, 9].into_iter().index_of(|&x| x > 10), None);
    /// ```
    #[inline]
    fn index_of<F>(mut self, pred: F) -> Option<usize>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        self.feed_into(Position::new(pred))
    }

    /// Returns an iterator over the items with distinct keys, keeping the
    /// first item per key in order.
    ///
    /// Use [`DistinctBy`](crate::collections::DistinctBy) to collect them into a `Vec` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let firsts: Vec<_> = (1..=6).distinct_by(|x| x % 3).collect();
    /// assert_eq!(firsts, [1, 2, 3]);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[inline]
    fn distinct_by<K, F>(self, f: F) -> UniqueBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        Itertools::unique_by(self, f)
    }

    /// Formats every item and joins them with `sep` in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// assert_eq!([1, 2, 3].into_iter().join_with(", "), "1, 2, 3");
    /// assert_eq!(std::iter::empty::<u8>().join_with(", "), "");
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn join_with(mut self, sep: &str) -> String
    where
        Self: Sized,
        Self::Item: std::fmt::Display,
    {
        Itertools::join(&mut self, sep)
    }

    /// Collects the items into a boxed slice, which cannot grow or shrink.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let frozen = "a b c".split(' ').to_read_only();
    /// assert_eq!(&*frozen, ["a", "b", "c"]);
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn to_read_only(self) -> Box<[Self::Item]>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Collects the items into a shared, immutable slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let shared = (1..=3).to_shared();
    /// let other = shared.clone();
    /// assert_eq!(&*other, [1, 2, 3]);
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn to_shared(self) -> Arc<[Self::Item]>
    where
        Self: Sized,
    {
        self.collect()
    }
}

impl<I: Iterator> SeqExt for I {}
