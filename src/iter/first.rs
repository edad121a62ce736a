use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that keeps the first item it collects, then stops.
///
/// Its [`Output`] is `None` if no items were collected, or `Some` containing
/// the first item otherwise. It returns [`Break`] as soon as it holds an item.
///
/// This collector backs [`SeqExt::first_or_default()`] and [`SeqExt::first_or()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::First};
///
/// let mut collector = First::new();
///
/// assert!(collector.collect("kept").is_break());
/// assert_eq!(collector.finish(), Some("kept"));
///
/// assert_eq!(std::iter::empty::<u8>().feed_into(First::new()), None);
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: CollectorBase::Output
/// [`SeqExt::first_or_default()`]: super::SeqExt::first_or_default
/// [`SeqExt::first_or()`]: super::SeqExt::first_or
#[derive(Clone)]
pub struct First<T> {
    first: Option<T>,
}

impl<T> First<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, T>(Self { first: None })
    }
}

impl<T> Default for First<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectorBase for First<T> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.first
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.first.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T> Collector<T> for First<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.first.is_none() {
            self.first = Some(item);
        }

        ControlFlow::Break(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        if self.first.is_none() {
            self.first = items.into_iter().next();
        }

        self.break_hint()
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.first.or_else(|| items.into_iter().next())
    }
}

impl<T: Debug> Debug for First<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("First").field("first", &self.first).finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=3),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || First::new(),
            should_break_pred: |mut iter| iter.next().is_some(),
            pred: |mut iter, output, remaining| {
                if iter.next() != output {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
