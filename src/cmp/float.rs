use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, assert_collector};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point types supported by [`NanMin`], [`NanMax`] and [`NanMinMax`].
///
/// This trait is sealed and implemented for [`f32`] and [`f64`].
pub trait Float: Copy + PartialOrd + sealed::Sealed {
    /// Whether this value is NaN.
    fn is_nan(self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Float for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

// NaN always takes over. Once the bound is NaN, no number can beat it
// since every comparison against NaN is false.
#[inline]
fn nan_min_assign<T: Float>(min: &mut T, value: T) {
    if value.is_nan() || value < *min {
        *min = value;
    }
}

#[inline]
fn nan_max_assign<T: Float>(max: &mut T, value: T) {
    if value.is_nan() || value > *max {
        *max = value;
    }
}

/// A [`Collector`] that computes the minimum of floating-point numbers,
/// where NaN is smaller than every other value.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// NaN if any NaN was collected, or `Some` containing the minimum otherwise.
/// Between `-0.0` and `0.0`, which compare equal, the first one collected is kept.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::NanMin};
///
/// let min = [2.0, -1.5, 3.0].into_iter().feed_into(NanMin::new());
/// assert_eq!(min, Some(-1.5));
///
/// let min = [2.0, f64::NAN, -1.5].into_iter().feed_into(NanMin::new());
/// assert!(min.unwrap().is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NanMin<T> {
    min: Option<T>,
}

impl<T: Float> NanMin<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, T>(Self { min: None })
    }
}

impl<T> CollectorBase for NanMin<T> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.min
    }
}

impl<T: Float> Collector<T> for NanMin<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.min {
            None => self.min = Some(item),
            Some(ref mut min) => nan_min_assign(min, item),
        }

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let mut items = items.into_iter();

        if let Some(first) = self.min.or_else(|| items.next()) {
            self.min = Some(items.fold(first, |mut min, item| {
                nan_min_assign(&mut min, item);
                min
            }));
        }

        ControlFlow::Continue(())
    }
}

/// A [`Collector`] that computes the maximum of floating-point numbers,
/// where NaN is larger than every other value.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// NaN if any NaN was collected, or `Some` containing the maximum otherwise.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::NanMax};
///
/// let max = [2.0_f32, -1.5, 3.0].into_iter().feed_into(NanMax::new());
/// assert_eq!(max, Some(3.0));
///
/// let max = [2.0_f32, 3.0, f32::NAN].into_iter().feed_into(NanMax::new());
/// assert!(max.unwrap().is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NanMax<T> {
    max: Option<T>,
}

impl<T: Float> NanMax<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, T>(Self { max: None })
    }
}

impl<T> CollectorBase for NanMax<T> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.max
    }
}

impl<T: Float> Collector<T> for NanMax<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.max {
            None => self.max = Some(item),
            Some(ref mut max) => nan_max_assign(max, item),
        }

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let mut items = items.into_iter();

        if let Some(first) = self.max.or_else(|| items.next()) {
            self.max = Some(items.fold(first, |mut max, item| {
                nan_max_assign(&mut max, item);
                max
            }));
        }

        ControlFlow::Continue(())
    }
}

/// A [`Collector`] that computes both the minimum and the maximum of
/// floating-point numbers in a single pass, where NaN is both smaller and larger
/// than every other value.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some((min, max))` otherwise. The first item collected seeds both bounds.
/// If any NaN was collected, both bounds are NaN.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::NanMinMax};
///
/// let bounds = [1.0, -4.0, 9.5].into_iter().feed_into(NanMinMax::new());
/// assert_eq!(bounds, Some((-4.0, 9.5)));
///
/// let (min, max) = [f64::NAN, 2.0, 3.0]
///     .into_iter()
///     .feed_into(NanMinMax::new())
///     .unwrap();
/// assert!(min.is_nan() && max.is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NanMinMax<T> {
    bounds: Option<(T, T)>,
}

impl<T: Float> NanMinMax<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, T>(Self { bounds: None })
    }
}

impl<T> CollectorBase for NanMinMax<T> {
    type Output = Option<(T, T)>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.bounds
    }
}

impl<T: Float> Collector<T> for NanMinMax<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.bounds {
            None => self.bounds = Some((item, item)),
            Some((ref mut min, ref mut max)) => {
                nan_min_assign(min, item);
                nan_max_assign(max, item);
            }
        }

        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let mut items = items.into_iter();

        if let Some(first) = self
            .bounds
            .or_else(|| items.next().map(|item| (item, item)))
        {
            self.bounds = Some(items.fold(first, |(mut min, mut max), item| {
                nan_min_assign(&mut min, item);
                nan_max_assign(&mut max, item);
                (min, max)
            }));
        }

        ControlFlow::Continue(())
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

    fn any_float() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => -100.0..100.0_f64,
            1 => Just(f64::NAN),
            1 => Just(-0.0),
        ]
    }

    /// Bit equality, so that NaN equals NaN and `-0.0` differs from `0.0`.
    fn same(x: Option<f64>, y: Option<f64>) -> bool {
        x.map(f64::to_bits) == y.map(f64::to_bits)
    }

    fn reference_min(nums: impl Iterator<Item = f64>) -> Option<f64> {
        nums.reduce(|min, num| if num.is_nan() || num < min { num } else { min })
    }

    fn reference_max(nums: impl Iterator<Item = f64>) -> Option<f64> {
        nums.reduce(|max, num| if num.is_nan() || num > max { num } else { max })
    }

    proptest! {
        #[test]
        fn all_collect_methods_nan_min(
            nums in propvec(any_float(), ..6),
        ) {
            all_collect_methods_nan_min_impl(nums)?;
        }
    }

    fn all_collect_methods_nan_min_impl(nums: Vec<f64>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || NanMin::new(),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if !same(reference_min(iter), output) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn all_collect_methods_nan_max(
            nums in propvec(any_float(), ..6),
        ) {
            all_collect_methods_nan_max_impl(nums)?;
        }
    }

    fn all_collect_methods_nan_max_impl(nums: Vec<f64>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || NanMax::new(),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if !same(reference_max(iter), output) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn all_collect_methods_nan_min_max(
            nums in propvec(any_float(), ..6),
        ) {
            all_collect_methods_nan_min_max_impl(nums)?;
        }
    }

    fn all_collect_methods_nan_min_max_impl(nums: Vec<f64>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || NanMinMax::new(),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items = iter.collect::<Vec<_>>();
                let min = reference_min(items.iter().copied());
                let max = reference_max(items.iter().copied());

                if !same(min, output.map(|(min, _)| min)) || !same(max, output.map(|(_, max)| max))
                {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn any_nan_poisons_both_bounds(
            mut nums in propvec(-1e6..1e6_f64, ..8),
            nan_at in any::<prop::sample::Index>(),
        ) {
            let at = nan_at.index(nums.len() + 1);
            nums.insert(at, f64::NAN);

            let (min, max) = nums
                .iter()
                .copied()
                .feed_into(NanMinMax::new())
                .expect("input is not empty");

            prop_assert!(min.is_nan());
            prop_assert!(max.is_nan());
        }
    }

    #[test]
    fn nan_first_then_numbers() {
        let bounds = [f64::NAN, 2.0, 3.0].into_iter().feed_into(NanMinMax::new());
        let (min, max) = bounds.expect("input is not empty");

        assert!(min.is_nan());
        assert!(max.is_nan());
    }

    #[test]
    fn signed_zeros_keep_the_first() {
        let min = [0.0_f32, -0.0].into_iter().feed_into(NanMin::new());
        assert!(min.unwrap().is_sign_positive());

        let max = [-0.0_f32, 0.0].into_iter().feed_into(NanMax::new());
        assert!(max.unwrap().is_sign_negative());
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(std::iter::empty::<f32>().feed_into(NanMinMax::new()), None);
        assert_eq!(std::iter::empty::<f64>().feed_into(NanMin::new()), None);
    }
}
