use std::ops::ControlFlow;

use super::CollectorBase;

/// Collects items of type `T` and produces a final output.
///
/// Implementors provide [`collect()`](Collector::collect). The other two
/// feeding methods have default implementations that may be overridden
/// for speed, as long as all three produce the same output and consume
/// the input identically:
///
/// - [`collect()`](Collector::collect): consumes one item and returns whether the
///   collector continues accumulating *after* this operation.
/// - [`collect_many()`](Collector::collect_many): consumes items until the collector
///   stops or the input is exhausted.
/// - [`collect_then_finish()`](Collector::collect_then_finish): same as
///   `collect_many()` followed by [`finish()`](CollectorBase::finish).
pub trait Collector<T>: CollectorBase {
    /// Collects an item and returns a [`ControlFlow`] indicating whether
    /// the collector has stopped accumulating right after this operation.
    ///
    /// Return [`Continue(())`] if the collector can still accumulate more items,
    /// or [`Break(())`] if it will not anymore and hence should no longer be fed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, iter::Position};
    ///
    /// let mut collector = Position::new(|&x: &i32| x > 2);
    ///
    /// assert!(collector.collect(1).is_continue());
    /// assert!(collector.collect(2).is_continue());
    /// // Found. Nothing more to do.
    /// assert!(collector.collect(3).is_break());
    ///
    /// assert_eq!(collector.finish(), Some(2));
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating
    /// whether the collector has stopped accumulating right after this operation.
    ///
    /// The iterator is not advanced past the item on which the collector stops.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, iter::First};
    ///
    /// let mut items = [1, 2, 3].into_iter();
    /// let mut collector = First::new();
    ///
    /// assert!(collector.collect_many(&mut items).is_break());
    /// assert_eq!(collector.finish(), Some(1));
    /// // Only the first item was taken.
    /// assert_eq!(items.next(), Some(2));
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        self.break_hint()?;
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator and returns the output.
    ///
    /// This is more efficient than calling [`collect_many()`](Collector::collect_many)
    /// then [`finish()`](CollectorBase::finish) since the collector does not
    /// need to track its state anymore.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::{MinMax, MinMaxResult}};
    ///
    /// let output = MinMax::new().collect_then_finish([3, 1, 4, 1, 5]);
    ///
    /// assert_eq!(output, MinMaxResult::MinMax(1, 5));
    /// ```
    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        let _ = self.collect_many(items);
        self.finish()
    }
}

// `Output` shouldn't be required to be specified.
fn _dyn_compatible<T>(_: &mut dyn Collector<T>) {}
