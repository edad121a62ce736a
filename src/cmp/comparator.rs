use std::cmp::Ordering;

use super::value_key::ValueKey;

/// A total order over `T`, used by the reductions in this module.
///
/// It is implemented for [`OrdComparator`] (the natural order of `T: Ord`)
/// and for every `FnMut(&T, &T) -> Ordering`, so any closure or function
/// such as [`f64::total_cmp`] can be passed where a comparator is expected.
///
/// The order must be total. The reductions only rely on
/// [`lt()`](Comparator::lt), and replace a running bound on strict
/// comparison only, so the first-encountered extremal item is kept.
pub trait Comparator<T> {
    /// Compares `a` to `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;

    /// Whether `a` is strictly less than `b`.
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    /// Replaces `min` with `value` if `value` is strictly less.
    #[inline]
    fn min_assign(&mut self, min: &mut T, value: T) {
        if self.lt(&value, min) {
            *min = value;
        }
    }
}

/// The natural order of a `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<T> Comparator<T> for OrdComparator
where
    T: Ord,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The inverse of another comparator.
///
/// Hunting the minimum under `Reversed` finds the maximum, and since only a
/// strictly smaller item replaces the running bound, the first maximal item wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<Cmp>(pub Cmp);

impl<T, Cmp> Comparator<T> for Reversed<Cmp>
where
    Cmp: Comparator<T>,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }

    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        self.0.lt(b, a)
    }
}

/// Compares [`ValueKey`]s by their cached keys only.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ByKey<Cmp>(pub(super) Cmp);

impl<T, K, Cmp> Comparator<ValueKey<T, K>> for ByKey<Cmp>
where
    Cmp: Comparator<K>,
{
    #[inline]
    fn compare(&mut self, a: &ValueKey<T, K>, b: &ValueKey<T, K>) -> Ordering {
        self.0.compare(a.key(), b.key())
    }

    #[inline]
    fn lt(&mut self, a: &ValueKey<T, K>, b: &ValueKey<T, K>) -> bool {
        self.0.lt(a.key(), b.key())
    }
}
