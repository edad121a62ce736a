use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

use super::{Comparator, MinMaxByKey, MinMaxResult, OrdComparator};

/// A collector that computes the minimum and maximum values among the items it collects,
/// in a single pass.
///
/// Its [`Output`](CollectorBase::Output) is:
///
/// - [`MinMaxResult::NoElements`] if no items were collected.
/// - [`MinMaxResult::Same`] with the first item collected if every item compares
///   equal to it (in particular, if exactly one item was collected).
/// - [`MinMaxResult::MinMax`] containing the minimum and the maximum items (in order)
///   otherwise.
///
/// If there are multiple equally minimum items, the first one collected is returned.
/// The same holds for the maximum, so the output always agrees with
/// [`Min`](super::Min) and [`Max`](super::Max).
///
/// Use [`MinMaxResult::into_option()`] to get a `(min, max)` pair.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::{MinMax, MinMaxResult}};
///
/// assert_eq!(
///     [].into_iter().feed_into(MinMax::<i32>::new()),
///     MinMaxResult::NoElements,
/// );
/// assert_eq!(
///     [1].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::Same(1),
/// );
/// assert_eq!(
///     [1, 1].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::Same(1),
/// );
/// assert_eq!(
///     [3, 1, 4, 1, 5, 9, 2, 6].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::MinMax(1, 9),
/// );
/// ```
#[derive(Clone)]
pub struct MinMax<T, Cmp = OrdComparator> {
    state: State<T>,
    cmp: Cmp,
}

#[derive(Debug, Clone)]
enum State<T> {
    NoElements,
    Same(T),
    MinMax { min: T, max: T },
}

impl<T> MinMax<T> {
    /// Creates a new instance of this collector, ordering items naturally.
    #[inline]
    pub const fn new() -> Self
    where
        T: Ord,
    {
        assert_collector::<_, T>(Self::with_comparator(OrdComparator))
    }

    /// Creates a new instance of this collector with a given comparison function.
    ///
    /// ```
    /// use seqkit::{prelude::*, cmp::{MinMax, MinMaxResult}};
    ///
    /// let bounds = [-3, 2, -7, 5]
    ///     .into_iter()
    ///     .feed_into(MinMax::by(|a: &i32, b: &i32| a.abs().cmp(&b.abs())));
    ///
    /// assert_eq!(bounds, MinMaxResult::MinMax(2, -7));
    /// ```
    #[inline]
    pub const fn by<F>(f: F) -> MinMax<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        assert_collector::<_, T>(MinMax::with_comparator(f))
    }

    /// Creates a new instance of [`MinMaxByKey`] with a given key-extraction function.
    #[inline]
    pub const fn by_key<K, F>(f: F) -> MinMaxByKey<T, K, F>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        assert_collector::<_, T>(MinMaxByKey::new(f, OrdComparator))
    }

    /// Creates a new instance of [`MinMaxByKey`] with a given key-extraction function
    /// and a comparison function over the keys.
    #[inline]
    pub const fn by_key_with<K, F, Cmp>(f: F, cmp: Cmp) -> MinMaxByKey<T, K, F, Cmp>
    where
        F: FnMut(&T) -> K,
        Cmp: FnMut(&K, &K) -> Ordering,
    {
        assert_collector::<_, T>(MinMaxByKey::new(f, cmp))
    }
}

impl<T, Cmp> MinMax<T, Cmp> {
    #[inline]
    pub(super) const fn with_comparator(cmp: Cmp) -> Self {
        Self {
            state: State::NoElements,
            cmp,
        }
    }

    pub(super) fn debug_state(&self) -> &impl Debug
    where
        T: Debug,
    {
        &self.state
    }
}

impl<T, Cmp> MinMax<T, Cmp>
where
    Cmp: Comparator<T>,
{
    fn step(cmp: &mut Cmp, state: State<T>, item: T) -> State<T> {
        match state {
            State::NoElements => State::Same(item),
            State::Same(first) => {
                if cmp.lt(&item, &first) {
                    State::MinMax {
                        min: item,
                        max: first,
                    }
                } else if cmp.lt(&first, &item) {
                    State::MinMax {
                        min: first,
                        max: item,
                    }
                } else {
                    // Equal: the first item stays both the minimum and the maximum.
                    State::Same(first)
                }
            }
            State::MinMax { mut min, mut max } => {
                if cmp.lt(&item, &min) {
                    min = item;
                } else if cmp.lt(&max, &item) {
                    max = item;
                }

                State::MinMax { min, max }
            }
        }
    }
}

impl<T: Ord> Default for MinMax<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Cmp> CollectorBase for MinMax<T, Cmp> {
    type Output = MinMaxResult<T>;

    fn finish(self) -> Self::Output {
        match self.state {
            State::NoElements => MinMaxResult::NoElements,
            State::Same(item) => MinMaxResult::Same(item),
            State::MinMax { min, max } => MinMaxResult::MinMax(min, max),
        }
    }
}

impl<T, Cmp> Collector<T> for MinMax<T, Cmp>
where
    Cmp: Comparator<T>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let state = std::mem::replace(&mut self.state, State::NoElements);
        self.state = Self::step(&mut self.cmp, state, item);

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let cmp = &mut self.cmp;
        let state = std::mem::replace(&mut self.state, State::NoElements);
        self.state = items
            .into_iter()
            .fold(state, |state, item| Self::step(cmp, state, item));

        ControlFlow::Continue(())
    }
}

impl<T: Debug, Cmp> Debug for MinMax<T, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinMax")
            .field("state", &self.state)
            .finish()
    }
}
