use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

use super::{Comparator, MinByKey, OrdComparator, Reversed};

/// A [`Collector`] that computes the item among the items it collects
/// that gives the maximum value from a key-extraction function.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the maximum item otherwise.
/// If several items have an equally maximum key, the **first** one collected is returned,
/// unlike [`Iterator::max_by_key()`].
///
/// This collector is constructed by [`Max::by_key()`](super::Max::by_key)
/// or [`Max::by_key_with()`](super::Max::by_key_with).
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::Max};
///
/// let mut collector = Max::by_key(|s: &&str| s.len());
///
/// assert!(collector.collect("force").is_continue());
/// assert!(collector.collect("the").is_continue());
/// assert!(collector.collect("among").is_continue());
///
/// assert_eq!(collector.finish(), Some("force"));
/// ```
#[derive(Clone)]
pub struct MaxByKey<T, K, F, Cmp = OrdComparator> {
    min_by_key: MinByKey<T, K, F, Reversed<Cmp>>,
}

impl<T, K, F, Cmp> MaxByKey<T, K, F, Cmp> {
    #[inline]
    pub(super) const fn new(f: F, cmp: Cmp) -> Self {
        Self {
            min_by_key: MinByKey::new(f, Reversed(cmp)),
        }
    }
}

impl<T, K, F, Cmp> CollectorBase for MaxByKey<T, K, F, Cmp> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.min_by_key.finish()
    }
}

impl<T, K, F, Cmp> Collector<T> for MaxByKey<T, K, F, Cmp>
where
    F: FnMut(&T) -> K,
    Cmp: Comparator<K>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.min_by_key.collect(item)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.min_by_key.collect_many(items)
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.min_by_key.collect_then_finish(items)
    }
}

impl<T: Debug, K: Debug, F, Cmp> Debug for MaxByKey<T, K, F, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxByKey")
            .field("max_value_key", &self.min_by_key.min_value_key())
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::cmp::Max;
    use crate::test_utils::{BasicCollectorTester, PredError};

    proptest! {
        #[test]
        fn all_collect_methods_max_by_key(
            nums in propvec(-20..20_i32, ..6),
        ) {
            all_collect_methods_max_by_key_impl(nums)?;
        }
    }

    fn all_collect_methods_max_by_key_impl(nums: Vec<i32>) -> TestCaseResult {
        let key = |&(_, num): &(usize, i32)| num.unsigned_abs();

        BasicCollectorTester {
            iter_factory: || nums.iter().copied().enumerate(),
            collector_factory: || Max::by_key(key),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                // Among the maximal keys, the smallest index.
                let expected = iter.min_by_key(|&item| (std::cmp::Reverse(key(&item)), item.0));

                if expected != output {
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
}
