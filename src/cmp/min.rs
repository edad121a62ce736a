use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

use super::{Comparator, MinByKey, OrdComparator};

/// A [`Collector`] that computes the minimum value among the items it collects.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the minimum item otherwise.
/// If several items are equally minimum, the first one collected is returned.
///
/// The order is the natural order of `T` by default, or the comparison
/// function given to [`Min::by()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::Min};
///
/// let mut collector = Min::new();
///
/// assert!(collector.collect(3).is_continue());
/// assert!(collector.collect(1).is_continue());
/// assert!(collector.collect(4).is_continue());
///
/// assert_eq!(collector.finish(), Some(1));
/// ```
///
/// The output is `None` if no items were collected.
///
/// ```
/// use seqkit::{prelude::*, cmp::Min};
///
/// assert_eq!(Min::<i32>::new().finish(), None);
/// ```
#[derive(Clone)]
pub struct Min<T, Cmp = OrdComparator> {
    pub(super) min: Option<T>,
    cmp: Cmp,
}

impl<T> Min<T> {
    /// Creates a new instance of this collector, ordering items naturally.
    #[inline]
    pub const fn new() -> Self
    where
        T: Ord,
    {
        assert_collector::<_, T>(Self {
            min: None,
            cmp: OrdComparator,
        })
    }

    /// Creates a new instance of this collector with a given comparison function.
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::Min};
    ///
    /// let min = [2.5, -1.0, 7.25]
    ///     .into_iter()
    ///     .feed_into(Min::by(f64::total_cmp));
    ///
    /// assert_eq!(min, Some(-1.0));
    /// ```
    #[inline]
    pub const fn by<F>(f: F) -> Min<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        assert_collector::<_, T>(Min::with_comparator(f))
    }

    /// Creates a new instance of [`MinByKey`] with a given key-extraction function.
    #[inline]
    pub const fn by_key<K, F>(f: F) -> MinByKey<T, K, F>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        assert_collector::<_, T>(MinByKey::new(f, OrdComparator))
    }

    /// Creates a new instance of [`MinByKey`] with a given key-extraction function
    /// and a comparison function over the keys.
    #[inline]
    pub const fn by_key_with<K, F, Cmp>(f: F, cmp: Cmp) -> MinByKey<T, K, F, Cmp>
    where
        F: FnMut(&T) -> K,
        Cmp: FnMut(&K, &K) -> Ordering,
    {
        assert_collector::<_, T>(MinByKey::new(f, cmp))
    }
}

impl<T, Cmp> Min<T, Cmp> {
    #[inline]
    pub(super) const fn with_comparator(cmp: Cmp) -> Self {
        Self { min: None, cmp }
    }
}

impl<T: Ord> Default for Min<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Cmp> CollectorBase for Min<T, Cmp> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.min
    }
}

impl<T, Cmp> Collector<T> for Min<T, Cmp>
where
    Cmp: Comparator<T>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.min {
            None => self.min = Some(item),
            Some(ref mut min) => self.cmp.min_assign(min, item),
        }

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let mut items = items.into_iter();

        if let Some(first) = self.min.take().or_else(|| items.next()) {
            let cmp = &mut self.cmp;
            self.min = Some(items.fold(first, |mut min, item| {
                cmp.min_assign(&mut min, item);
                min
            }));
        }

        ControlFlow::Continue(())
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self { min, mut cmp } = self;
        let mut items = items.into_iter();

        let first = min.or_else(|| items.next())?;
        Some(items.fold(first, |mut min, item| {
            cmp.min_assign(&mut min, item);
            min
        }))
    }
}

impl<T: Debug, Cmp> Debug for Min<T, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Min").field("min", &self.min).finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::cmp::test_utils::{Id, any_ids};
    use crate::prelude::*;
    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods_min(
            ids in any_ids(..6),
        ) {
            all_collect_methods_min_impl(ids)?;
        }
    }

    fn all_collect_methods_min_impl(ids: Vec<Id>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || ids.iter().copied(),
            collector_factory: || Min::new(),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                // `Iterator::min()` also keeps the first minimum.
                if !Id::full_eq_opt(iter.min(), output) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn all_collect_methods_min_by(
            nums in propvec(any::<i32>(), ..6),
        ) {
            all_collect_methods_min_by_impl(nums)?;
        }
    }

    fn all_collect_methods_min_by_impl(nums: Vec<i32>) -> TestCaseResult {
        // Order by absolute value.
        fn comparator(a: &i32, b: &i32) -> Ordering {
            a.unsigned_abs().cmp(&b.unsigned_abs())
        }

        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || Min::by(comparator),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if iter.min_by(comparator) != output {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn min_is_a_lower_bound_drawn_from_input(
            nums in propvec(any::<i64>(), 1..20),
        ) {
            let min = nums.iter().copied().feed_into(Min::new());
            let min = min.expect("input is not empty");

            prop_assert!(nums.contains(&min));
            prop_assert!(nums.iter().all(|&num| min <= num));
        }
    }
}
