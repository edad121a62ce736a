use std::ops::ControlFlow;

use super::{Fuse, MapOutput, Skip, Take, assert_collector_base};

/// The part of a collector that does not depend on the item type.
///
/// It owns the [`Output`](CollectorBase::Output) type, the
/// [`finish()`](CollectorBase::finish) method and the adaptors that only
/// wrap the collector without touching its items.
pub trait CollectorBase {
    /// The result this collector yields, via the [`finish()`](CollectorBase::finish) method.
    type Output
    where
        Self: Sized;

    /// Consumes the collector and returns the accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Min};
    ///
    /// let mut collector = Min::new();
    /// let _ = collector.collect_many([4, 2, 8]);
    ///
    /// assert_eq!(collector.finish(), Some(2));
    /// ```
    fn finish(self) -> Self::Output
    where
        Self: Sized;

    /// Returns a hint whether the collector has stopped accumulating.
    ///
    /// Returns [`Break(())`] if it is guaranteed that the collector has stopped
    /// accumulating, or [`Continue(())`] otherwise.
    ///
    /// This method should be called once, before collecting items in a loop,
    /// to avoid consuming one item prematurely. It is not intended for repeatedly
    /// checking whether the collector has stopped. Use [`fuse()`](CollectorBase::fuse)
    /// if you need that.
    ///
    /// The default implementation always returns [`Continue(())`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Min};
    ///
    /// assert!(Min::<i32>::new().take(0).break_hint().is_break());
    /// assert!(Min::<i32>::new().take(1).break_hint().is_continue());
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Creates a collector that can "safely" collect items even after
    /// the underlying collector has stopped accumulating.
    ///
    /// Once the underlying collector has returned [`Break(())`], every further
    /// [`collect()`](super::Collector::collect) and similar call returns
    /// [`Break(())`] without forwarding the items.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, iter::First};
    ///
    /// let mut collector = First::new().fuse();
    ///
    /// assert!(collector.collect(1).is_break());
    /// assert!(collector.collect(2).is_break());
    /// assert!(collector.collect_many([3, 4]).is_break());
    ///
    /// assert_eq!(collector.finish(), Some(1));
    /// ```
    ///
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        assert_collector_base(Fuse::new(self))
    }

    /// Creates a collector that accumulates at most `n` items.
    ///
    /// It signals [`Break(())`] right after the `n`-th item is collected.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Max};
    ///
    /// let max = [3, 1, 9, 4].into_iter().feed_into(Max::new().take(2));
    ///
    /// assert_eq!(max, Some(3));
    /// ```
    ///
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_collector_base(Take::new(self, n))
    }

    /// Creates a collector that ignores the first `n` items it collects,
    /// then accumulates the rest normally.
    ///
    /// If the underlying collector has stopped accumulating while items are
    /// being skipped, this adaptor stops as soon as enough items are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Min};
    ///
    /// let min = [1, 2, 5, 4].into_iter().feed_into(Min::new().skip(2));
    ///
    /// assert_eq!(min, Some(4));
    /// ```
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        assert_collector_base(Skip::new(self, n))
    }

    /// Creates a collector that only accumulates the items at positions
    /// `start..start + len`.
    ///
    /// This is `take(len).skip(start)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, string::Join};
    ///
    /// let joined = ["a", "b", "c", "d", "e"]
    ///     .into_iter()
    ///     .feed_into(Join::new(", ").slice(1, 3));
    ///
    /// assert_eq!(joined, "b, c, d");
    /// ```
    #[inline]
    fn slice(self, start: usize, len: usize) -> Skip<Take<Self>>
    where
        Self: Sized,
    {
        self.take(len).skip(start)
    }

    /// Creates a collector that transforms the final accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Max};
    ///
    /// let collector = Max::new().map_output(|max| max.unwrap_or(0));
    ///
    /// assert_eq!([].into_iter().feed_into(collector), 0);
    /// ```
    #[inline]
    fn map_output<F, T>(self, f: F) -> MapOutput<Self, F>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> T,
    {
        assert_collector_base(MapOutput::new(self, f))
    }
}

// `Output` shouldn't be required to be specified.
fn _dyn_compatible(_: &mut dyn CollectorBase) {}
