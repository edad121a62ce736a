use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase};

/// A collector that ignores every item once the underlying collector has
/// stopped accumulating.
///
/// This `struct` is created by [`CollectorBase::fuse()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Fuse<C> {
    collector: C,
    break_hint: ControlFlow<()>,
}

impl<C> Fuse<C>
where
    C: CollectorBase,
{
    #[inline]
    pub(in crate::collector) fn new(collector: C) -> Self {
        Self {
            break_hint: collector.break_hint(),
            collector,
        }
    }

    #[inline]
    fn collect_impl(&mut self, f: impl FnOnce(&mut C) -> ControlFlow<()>) -> ControlFlow<()> {
        self.break_hint?;

        self.break_hint = f(&mut self.collector);
        self.break_hint
    }
}

impl<C> CollectorBase for Fuse<C>
where
    C: CollectorBase,
{
    type Output = C::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.collector.finish()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.break_hint
    }
}

impl<C, T> Collector<T> for Fuse<C>
where
    C: Collector<T>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.collect_impl(|collector| collector.collect(item))
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.collect_impl(|collector| collector.collect_many(items))
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        if self.break_hint.is_break() {
            self.finish()
        } else {
            self.collector.collect_then_finish(items)
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::iter::Position;
    use crate::prelude::*;
    use crate::test_utils::{BasicCollectorTester, PredError};

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=5),
            extra in propvec(any::<i32>(), ..=3),
        ) {
            all_collect_methods_impl(nums, extra)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>, extra: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || Position::new(|&num: &i32| num > 0).fuse(),
            should_break_pred: |mut iter| iter.any(|num| num > 0),
            pred: |mut iter, output, remaining| {
                if iter.position(|num| num > 0) != output {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()?;

        // Feeding after a stop must neither panic nor change the output.
        let mut collector = Position::new(|&num: &i32| num > 0).fuse();
        let stopped = collector.collect_many(nums.iter().copied()).is_break();
        if stopped {
            for &num in &extra {
                prop_assert!(collector.collect(num).is_break());
            }
            prop_assert!(collector.collect_many(extra.iter().copied()).is_break());
        }
        prop_assert_eq!(
            collector.finish(),
            nums.iter().position(|&num| num > 0)
        );

        Ok(())
    }
}
