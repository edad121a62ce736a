use thiserror::Error;

/// Errors returned by the strict reductions and the cancellable helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A reduction that needs at least one item received none.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// Cancellation was requested before the next item was processed.
    #[cfg(feature = "async")]
    #[error("operation was cancelled")]
    Cancelled,
}
