//! Asynchronous iteration with cooperative cancellation (feature = `"async"`).
//!
//! [`for_each_async()`] drives a synchronous sequence through an
//! asynchronous action. [`StreamSeqExt`] adds the same for any
//! `futures::Stream`, plus [`collect_cancellable()`](StreamSeqExt::collect_cancellable)
//! to materialize a stream into a `Vec`.
//!
//! Cancellation goes through a [`CancellationToken`] and is observed before
//! each item. An item is never handed to the action after cancellation has
//! been seen, and the sequence is dropped on return.

use std::future::Future;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::Error;

/// Awaits `f` on every item in order, yielding to the scheduler after each one.
///
/// Before each item, `token` is checked. If it is cancelled,
/// [`Error::Cancelled`] is returned and `f` is not called again.
///
/// # Examples
///
/// ```
/// use seqkit::stream::for_each_async;
/// use tokio_util::sync::CancellationToken;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let token = CancellationToken::new();
/// let mut total = 0;
///
/// for_each_async([1, 2, 3], &token, |num| {
///     total += num;
///     std::future::ready(())
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(total, 6);
/// # });
/// ```
pub async fn for_each_async<I, F, Fut>(
    items: I,
    token: &CancellationToken,
    mut f: F,
) -> Result<(), Error>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = ()>,
{
    for (processed, item) in items.into_iter().enumerate() {
        if token.is_cancelled() {
            trace!(processed, "for_each_async cancelled");
            return Err(Error::Cancelled);
        }

        f(item).await;
        tokio::task::yield_now().await;
    }

    Ok(())
}

/// Extension trait for consuming `Stream`s under a [`CancellationToken`].
///
/// This trait is automatically implemented for all `Stream` types that are
/// `Unpin` and `Send`.
#[async_trait]
pub trait StreamSeqExt: Stream + Sized + Unpin + Send {
    /// Awaits `f` on every item of the stream in order, yielding to the
    /// scheduler after each one.
    ///
    /// Cancellation is also observed while waiting for the next item,
    /// so a stalled stream does not block the caller past cancellation.
    async fn for_each_cancellable<F, Fut>(
        self,
        token: &CancellationToken,
        mut f: F,
    ) -> Result<(), Error>
    where
        Self::Item: Send,
        F: FnMut(Self::Item) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let mut stream = self;
        let mut processed = 0_usize;

        while let Some(item) = next_or_cancel(&mut stream, token, processed).await? {
            f(item).await;
            processed += 1;
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Collects every item of the stream into a `Vec`, yielding to the
    /// scheduler after each one.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::stream;
    /// use seqkit::prelude::*;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let token = CancellationToken::new();
    /// let items = stream::iter(["a", "b"]).collect_cancellable(&token).await;
    ///
    /// assert_eq!(items, Ok(vec!["a", "b"]));
    /// # });
    /// ```
    async fn collect_cancellable(self, token: &CancellationToken) -> Result<Vec<Self::Item>, Error>
    where
        Self::Item: Send,
    {
        let mut stream = self;
        let mut items = Vec::with_capacity(stream.size_hint().0);

        while let Some(item) = next_or_cancel(&mut stream, token, items.len()).await? {
            items.push(item);
            tokio::task::yield_now().await;
        }

        Ok(items)
    }
}

impl<S> StreamSeqExt for S where S: Stream + Unpin + Send {}

async fn next_or_cancel<S>(
    stream: &mut S,
    token: &CancellationToken,
    processed: usize,
) -> Result<Option<S::Item>, Error>
where
    S: Stream + Unpin,
{
    tokio::select! {
        biased;

        () = token.cancelled() => {
            trace!(processed, "stream consumption cancelled");
            Err(Error::Cancelled)
        }
        item = stream.next() => Ok(item),
    }
}
