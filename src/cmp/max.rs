use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

use super::{Comparator, MaxByKey, Min, OrdComparator, Reversed};

/// A [`Collector`] that computes the maximum value among the items it collects.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the maximum item otherwise.
///
/// This is [`Min`] under the inverted order. As a consequence, if several items
/// are equally maximum, the **first** one collected is returned.
/// This differs from [`Iterator::max()`], which returns the last one.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::Max};
///
/// let mut collector = Max::new();
///
/// assert!(collector.collect(1).is_continue());
/// assert!(collector.collect(3).is_continue());
/// assert!(collector.collect(2).is_continue());
/// assert!(collector.collect(5).is_continue());
/// assert!(collector.collect(3).is_continue());
///
/// assert_eq!(collector.finish(), Some(5));
/// ```
///
/// Ties keep the first maximum:
///
/// ```
/// use seqkit::{prelude::*, cmp::Max};
///
/// let max = [("a", 2), ("b", 7), ("c", 7)]
///     .into_iter()
///     .feed_into(Max::by(|x: &(&str, i32), y: &(&str, i32)| x.1.cmp(&y.1)));
///
/// assert_eq!(max, Some(("b", 7)));
/// ```
#[derive(Clone)]
pub struct Max<T, Cmp = OrdComparator> {
    min: Min<T, Reversed<Cmp>>,
}

impl<T> Max<T> {
    /// Creates a new instance of this collector, ordering items naturally.
    #[inline]
    pub const fn new() -> Self
    where
        T: Ord,
    {
        assert_collector::<_, T>(Self {
            min: Min::with_comparator(Reversed(OrdComparator)),
        })
    }

    /// Creates a new instance of this collector with a given comparison function.
    #[inline]
    pub const fn by<F>(f: F) -> Max<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        assert_collector::<_, T>(Max {
            min: Min::with_comparator(Reversed(f)),
        })
    }

    /// Creates a new instance of [`MaxByKey`] with a given key-extraction function.
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Max};
    ///
    /// let longest = ["bb", "a", "ccc", "ddd"]
    ///     .into_iter()
    ///     .feed_into(Max::by_key(|s: &&str| s.len()));
    ///
    /// assert_eq!(longest, Some("ccc"));
    /// ```
    #[inline]
    pub const fn by_key<K, F>(f: F) -> MaxByKey<T, K, F>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        assert_collector::<_, T>(MaxByKey::new(f, OrdComparator))
    }

    /// Creates a new instance of [`MaxByKey`] with a given key-extraction function
    /// and a comparison function over the keys.
    #[inline]
    pub const fn by_key_with<K, F, Cmp>(f: F, cmp: Cmp) -> MaxByKey<T, K, F, Cmp>
    where
        F: FnMut(&T) -> K,
        Cmp: FnMut(&K, &K) -> Ordering,
    {
        assert_collector::<_, T>(MaxByKey::new(f, cmp))
    }
}

impl<T: Ord> Default for Max<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Cmp> CollectorBase for Max<T, Cmp> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.min.finish()
    }
}

impl<T, Cmp> Collector<T> for Max<T, Cmp>
where
    Cmp: Comparator<T>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.min.collect(item)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.min.collect_many(items)
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.min.collect_then_finish(items)
    }
}

impl<T: Debug, Cmp> Debug for Max<T, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Max").field("max", &self.min.min).finish()
    }
}
