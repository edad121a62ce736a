use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that finds the zero-based index of the first item satisfying a predicate.
///
/// If no matching item has been found, its [`Output`] is `None`.
/// When the collector encounters an item that makes the predicate return `true`,
/// it returns [`Break`], and the [`Output`] becomes `Some` containing its index.
///
/// This collector corresponds to [`Iterator::position()`]
/// and backs [`SeqExt::index_of()`](super::SeqExt::index_of).
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::Position};
///
/// let index = ["ant", "bee", "cat"]
///     .into_iter()
///     .feed_into(Position::new(|s: &&str| s.starts_with('b')));
/// assert_eq!(index, Some(1));
///
/// let index = ["ant", "bee", "cat"]
///     .into_iter()
///     .feed_into(Position::new(|s: &&str| s.is_empty()));
/// assert_eq!(index, None);
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: CollectorBase::Output
#[derive(Clone)]
pub struct Position<F> {
    state: State,
    pred: F,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Searching { seen: usize },
    Found(usize),
}

impl<F> Position<F> {
    /// Creates an instance of this collector with a given predicate.
    #[inline]
    pub const fn new<T>(pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        assert_collector::<_, T>(Self {
            state: State::Searching { seen: 0 },
            pred,
        })
    }
}

impl<F> CollectorBase for Position<F> {
    type Output = Option<usize>;

    #[inline]
    fn finish(self) -> Self::Output {
        match self.state {
            State::Searching { .. } => None,
            State::Found(index) => Some(index),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if matches!(self.state, State::Found(_)) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, F> Collector<T> for Position<F>
where
    F: FnMut(&T) -> bool,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let State::Searching { seen } = self.state else {
            return ControlFlow::Break(());
        };

        if (self.pred)(&item) {
            self.state = State::Found(seen);
            ControlFlow::Break(())
        } else {
            self.state = State::Searching { seen: seen + 1 };
            ControlFlow::Continue(())
        }
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self { state, mut pred } = self;

        match state {
            State::Searching { seen } => items
                .into_iter()
                .position(|item| pred(&item))
                .map(|index| seen + index),
            State::Found(index) => Some(index),
        }
    }
}

impl<F> Debug for Position<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(-3..3_i32, ..=5),
            starting_nums in propvec(-3..=0_i32, ..=2),
        ) {
            all_collect_methods_impl(nums, starting_nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>, starting_nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            // The starting items never match, so indices must carry over.
            collector_factory: || {
                let mut collector = Position::new(|&num: &i32| num > 0);
                let _ = collector.collect_many(starting_nums.iter().copied());
                collector
            },
            should_break_pred: |mut iter| iter.any(|num| num > 0),
            pred: |mut iter, output, remaining| {
                let expected = iter
                    .position(|num| num > 0)
                    .map(|index| index + starting_nums.len());

                if expected != output {
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

    #[test]
    fn stops_at_the_first_match() {
        let mut items = [5, 7, 8, 9, 10].into_iter();
        let index = items.feed_into(Position::new(|&x: &i32| x % 2 == 0));

        assert_eq!(index, Some(2));
        assert_eq!(items.next(), Some(9));
    }
}
