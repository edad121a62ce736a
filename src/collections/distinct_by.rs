use std::{collections::HashSet, fmt::Debug, hash::Hash, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that keeps the first item for every distinct key
/// from a key-extraction function, in the order collected.
/// Its [`Output`] is a [`Vec`] of the kept items.
///
/// The key-extraction function runs exactly once per item.
/// Only keys are remembered for later items, not the dropped items.
///
/// [`SeqExt::distinct_by()`](crate::iter::SeqExt::distinct_by) is the lazy counterpart.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, collections::DistinctBy};
///
/// let firsts = (1..=6).feed_into(DistinctBy::new(|x: &i32| x % 3));
/// assert_eq!(firsts, [1, 2, 3]);
/// ```
///
/// [`Output`]: CollectorBase::Output
#[derive(Clone)]
pub struct DistinctBy<T, K, F> {
    seen: HashSet<K>,
    kept: Vec<T>,
    f: F,
}

impl<T, K, F> DistinctBy<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    /// Creates a new instance of this collector with a given key-extraction function.
    #[inline]
    pub fn new(f: F) -> Self {
        assert_collector::<_, T>(Self {
            seen: HashSet::new(),
            kept: Vec::new(),
            f,
        })
    }
}

impl<T, K, F> CollectorBase for DistinctBy<T, K, F> {
    type Output = Vec<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.kept
    }
}

impl<T, K, F> Collector<T> for DistinctBy<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.seen.insert((self.f)(&item)) {
            self.kept.push(item);
        }

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let Self { seen, kept, f } = self;
        kept.extend(items.into_iter().filter(|item| seen.insert(f(item))));

        ControlFlow::Continue(())
    }

    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let _ = self.collect_many(items);
        self.kept
    }
}

impl<T: Debug, K, F> Debug for DistinctBy<T, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistinctBy")
            .field("kept", &self.kept)
            .field("distinct_keys", &self.seen.len())
            .finish()
    }
}
