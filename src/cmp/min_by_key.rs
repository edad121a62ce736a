use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

use super::{ByKey, Comparator, Min, OrdComparator, value_key::ValueKey};

/// A [`Collector`] that computes the item among the items it collects
/// that gives the minimum value from a key-extraction function.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the minimum item otherwise.
/// The key-extraction function runs exactly once per item.
/// If several items have an equally minimum key, the first one collected is returned.
///
/// This collector is constructed by [`Min::by_key()`] or [`Min::by_key_with()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::Min};
///
/// let mut collector = Min::by_key(|s: &&str| s.len());
///
/// assert!(collector.collect("bb").is_continue());
/// assert!(collector.collect("a").is_continue());
/// assert!(collector.collect("ccc").is_continue());
/// assert!(collector.collect("d").is_continue());
///
/// assert_eq!(collector.finish(), Some("a"));
/// ```
///
/// The output is `None` if no items were collected.
///
/// ```
/// use seqkit::{prelude::*, cmp::Min};
///
/// assert_eq!(Min::by_key(|s: &&str| s.len()).finish(), None);
/// ```
#[derive(Clone)]
pub struct MinByKey<T, K, F, Cmp = OrdComparator> {
    value_key_collector: Min<ValueKey<T, K>, ByKey<Cmp>>,
    f: F,
}

impl<T, K, F, Cmp> MinByKey<T, K, F, Cmp> {
    #[inline]
    pub(super) const fn new(f: F, cmp: Cmp) -> Self {
        Self {
            value_key_collector: Min::with_comparator(ByKey(cmp)),
            f,
        }
    }

    pub(super) fn min_value_key(&self) -> Option<&ValueKey<T, K>> {
        self.value_key_collector.min.as_ref()
    }
}

impl<T, K, F, Cmp> CollectorBase for MinByKey<T, K, F, Cmp> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.value_key_collector.finish().map(ValueKey::into_value)
    }
}

impl<T, K, F, Cmp> Collector<T> for MinByKey<T, K, F, Cmp>
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

impl<T: Debug, K: Debug, F, Cmp> Debug for MinByKey<T, K, F, Cmp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinByKey")
            .field("min_value_key", &self.min_value_key())
            .finish()
    }
}
