use super::Collector;

/// Conversion into a [`Collector`] of `T`.
///
/// Using `IntoCollector` in trait bounds lets a function accept both
/// collectors and types that can be turned into one, so callers do not need
/// an extra call to [`IntoCollector::into_collector()`].
pub trait IntoCollector<T> {
    /// The output of the collector.
    type Output;

    /// Which collector being produced?
    type IntoCollector: Collector<T, Output = Self::Output>;

    /// Creates a collector from a value.
    fn into_collector(self) -> Self::IntoCollector;
}

impl<C, T> IntoCollector<T> for C
where
    C: Collector<T>,
{
    type Output = C::Output;

    type IntoCollector = C;

    #[inline]
    fn into_collector(self) -> Self::IntoCollector {
        self
    }
}
