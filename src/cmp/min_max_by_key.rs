use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

use super::{ByKey, Comparator, MinMax, MinMaxResult, OrdComparator, value_key::ValueKey};

/// A collector that computes the items among the items it collects
/// that give the minimum and the maximum values from a key-extraction function.
///
/// The key-extraction function runs exactly once per item, and the minimum
/// and maximum keys are tracked independently: every item is checked against both.
/// Ties keep the first item collected, for both bounds.
///
/// Its [`Output`](CollectorBase::Output) follows [`MinMax`].
///
/// This collector is constructed by [`MinMax::by_key()`] or [`MinMax::by_key_with()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::{MinMax, MinMaxResult}};
///
/// let bounds = ["bb", "a", "ccc", "dd", "eee"]
///     .into_iter()
///     .feed_into(MinMax::by_key(|s: &&str| s.len()));
///
/// assert_eq!(bounds, MinMaxResult::MinMax("a", "ccc"));
/// ```
#[derive(Clone)]
pub struct MinMaxByKey<T, K, F, Cmp = OrdComparator> {
    value_key_collector: MinMax<ValueKey<T, K>, ByKey<Cmp>>,
    f: F,
}

impl<T, K, F, Cmp> MinMaxByKey<T, K, F, Cmp> {
    #[inline]
    pub(super) const fn new(f: F, cmp: Cmp) -> Self {
        Self {
            value_key_collector: MinMax::with_comparator(ByKey(cmp)),
            f,
        }
    }
}

impl<T, K, F, Cmp> CollectorBase for MinMaxByKey<T, K, F, Cmp> {
    type Output = MinMaxResult<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.value_key_collector.finish().map(ValueKey::into_value)
    }
}

impl<T, K, F, Cmp> Collector<T> for MinMaxByKey<T, K, F, Cmp>
where
    F: FnMut(&T) -> K,
    Cmp: Comparator<K>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let item_value_key = ValueKey::new(item, &mut self.f);
        self.value_key_collector.collect(item_value_key)
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.value_key_collector.collect_many(
            items
                .into_iter()
                .map(|item| ValueKey::new(item, &mut self.f)),
        )
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self {
            value_key_collector,
            mut f,
        } = self;

        value_key_collector
            .collect_then_finish(
                items
                    .into_iter()
                    .map(move |item| ValueKey::new(item, &mut f)),
            )
            .map(ValueKey::into_value)
    }
}

impl<T: Debug, K: Debug, F, Cmp> Debug for MinMaxByKey<T, K, F, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinMaxByKey")
            .field("state", self.value_key_collector.debug_state())
            .finish()
    }
}
