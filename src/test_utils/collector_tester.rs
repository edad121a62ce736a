use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::collector::Collector;

/// An error returned when a feeding method of the collector misbehaves.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect [`Output`] produced by the collector.
    ///
    /// [`Output`]: crate::collector::CollectorBase::Output
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_method(self, name: &'static str) -> TestCaseError {
        TestCaseError::Fail(format!("`{name}()` is implemented incorrectly: {self:?}").into())
    }
}

/// Runs a collector through `collect()`, `collect_many()` and
/// `collect_then_finish()` on fresh inputs and checks each run with `pred`.
///
/// - `iter_factory` makes the input, once per run plus once per check.
/// - `collector_factory` makes a fresh collector per run.
/// - `should_break_pred` tells whether feeding the whole input must end in `Break`.
/// - `pred` receives a fresh input, the output, and what is left of the fed input.
pub struct BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub collector_factory: ClFac,
    pub should_break_pred: SbPred,
    pub pred: Pred,
}

impl<ItFac, ClFac, SbPred, Pred, I, C> BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub fn test_collector(&mut self) -> TestCaseResult {
        let should_break = (self.should_break_pred)((self.iter_factory)());

        // `collect()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            // Simulate that `break_hint()` is used before looping,
            // which is the intended use case.
            let has_stopped = (|| {
                collector.break_hint()?;
                iter.try_for_each(|item| collector.collect(item))
            })()
            .is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect()` didn't break correctly"
            );

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect"))?;
        }

        // `collect_many()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            // No `break_hint()` here. The method must work without it.
            let has_stopped = collector.collect_many(&mut iter).is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect_many()` didn't break correctly"
            );

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect_many"))?;
        }

        // `collect_then_finish()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let output = collector.collect_then_finish(&mut iter);

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("collect_then_finish"))?;
        }

        Ok(())
    }
}
