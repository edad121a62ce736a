/// The output of [`MinMax`](super::MinMax) and [`MinMaxByKey`](super::MinMaxByKey).
///
/// Unlike [`itertools::MinMaxResult`], the single-item case is not about the
/// number of items collected: [`Same`](Self::Same) is returned whenever every
/// item compares equal to the first one, which is then both the first minimum
/// and the first maximum. This is why no `T: Clone` bound is needed to collect.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::MinMaxResult};
///
/// assert_eq!([7].into_iter().min_max(), MinMaxResult::Same(7));
/// assert_eq!([7, 7].into_iter().min_max(), MinMaxResult::Same(7));
/// assert_eq!([7, 2, 7].into_iter().min_max(), MinMaxResult::MinMax(2, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinMaxResult<T> {
    /// No items were collected.
    NoElements,
    /// Every item compared equal to this one, the first collected.
    Same(T),
    /// The first minimum and the first maximum, in that order.
    /// They never compare equal.
    MinMax(T, T),
}

impl<T> MinMaxResult<T> {
    /// Returns `(min, max)`, cloning the item in the [`Same`](Self::Same) case.
    ///
    /// ```
    /// use seqkit::cmp::MinMaxResult;
    ///
    /// assert_eq!(MinMaxResult::Same(3).into_option(), Some((3, 3)));
    /// assert_eq!(MinMaxResult::<i32>::NoElements.into_option(), None);
    /// ```
    pub fn into_option(self) -> Option<(T, T)>
    where
        T: Clone,
    {
        match self {
            Self::NoElements => None,
            Self::Same(item) => Some((item.clone(), item)),
            Self::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Maps every contained item with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MinMaxResult<U> {
        match self {
            Self::NoElements => MinMaxResult::NoElements,
            Self::Same(item) => MinMaxResult::Same(f(item)),
            Self::MinMax(min, max) => MinMaxResult::MinMax(f(min), f(max)),
        }
    }

    /// Returns `true` if no items were collected.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoElements)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn into_option() {
        assert_eq!(MinMaxResult::MinMax(1, 9).into_option(), Some((1, 9)));
        assert_eq!(MinMaxResult::Same("x").into_option(), Some(("x", "x")));
        assert_eq!(MinMaxResult::<u8>::NoElements.into_option(), None);
    }

    #[test]
    fn map_keeps_the_variant() {
        assert_eq!(MinMaxResult::Same(2).map(|x| x * 10), MinMaxResult::Same(20));
        assert_eq!(
            MinMaxResult::MinMax(1, 2).map(|x| x * 10),
            MinMaxResult::MinMax(10, 20)
        );
        assert!(MinMaxResult::<i32>::NoElements.map(|x| x * 10).is_empty());
    }
}
