use std::{fmt::Debug, ops::ControlFlow};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use crate::collector::{Collector, CollectorBase};

/// A [`Collector`] that concatenates strings, inserting a separator
/// between every two consecutive ones.
/// Its [`Output`] is [`String`], empty if no items were collected.
///
/// Items can be anything that views as a `str`, such as `&str` or [`String`].
/// To join [`Display`](std::fmt::Display) values, use
/// [`SeqExt::join_with()`](crate::iter::SeqExt::join_with).
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, string::Join};
///
/// let csv = ["id", "name", "email"].into_iter().feed_into(Join::new(","));
/// assert_eq!(csv, "id,name,email");
///
/// let path = ["usr", "local", "bin"]
///     .map(String::from)
///     .into_iter()
///     .feed_into(Join::new('/'));
/// assert_eq!(path, "usr/local/bin");
/// ```
///
/// [`Output`]: CollectorBase::Output
#[derive(Clone)]
pub struct Join<S> {
    buf: String,
    sep: S,
    empty: bool,
}

/// A separator accepted by [`Join`].
///
/// This trait is sealed and implemented for `&str`, [`String`] and [`char`].
pub trait Separator: sealed::Sealed {
    #[doc(hidden)]
    fn push_to(&self, buf: &mut String);
}

mod sealed {
    #[cfg(all(feature = "alloc", not(feature = "std")))]
    use alloc::string::String;

    pub trait Sealed {}

    impl Sealed for &str {}
    impl Sealed for String {}
    impl Sealed for char {}
}

impl Separator for &str {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl Separator for String {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl Separator for char {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push(*self);
    }
}

impl<S: Separator> Join<S> {
    /// Creates a new instance of this collector with a given separator.
    #[inline]
    pub const fn new(sep: S) -> Self {
        Self {
            buf: String::new(),
            sep,
            empty: true,
        }
    }

    #[inline]
    fn push(&mut self, item: &str) {
        if self.empty {
            self.empty = false;
        } else {
            self.sep.push_to(&mut self.buf);
        }

        self.buf.push_str(item);
    }
}

impl<S> CollectorBase for Join<S> {
    type Output = String;

    #[inline]
    fn finish(self) -> Self::Output {
        self.buf
    }
}

impl<S, T> Collector<T> for Join<S>
where
    S: Separator,
    T: AsRef<str>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.push(item.as_ref());
        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        items.into_iter().for_each(|item| self.push(item.as_ref()));
        ControlFlow::Continue(())
    }

    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        items.into_iter().for_each(|item| self.push(item.as_ref()));
        self.buf
    }
}

impl<S: Debug> Debug for Join<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Join")
            .field("buf", &self.buf)
            .field("sep", &self.sep)
            .finish()
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

    proptest! {
        #[test]
        fn all_collect_methods(
            words in propvec("[a-z]{0,3}", ..=5),
            starting_words in propvec("[a-z]{0,3}", ..=2),
        ) {
            all_collect_methods_impl(words, starting_words)?;
        }
    }

    fn all_collect_methods_impl(words: Vec<String>, starting_words: Vec<String>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || words.iter(),
            collector_factory: || {
                let mut collector = Join::new(", ");
                let _ = collector.collect_many(&starting_words);
                collector
            },
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let expected = starting_words
                    .iter()
                    .chain(iter)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");

                if output != expected {
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

    #[test]
    fn empty_items_still_get_separators() {
        let joined = ["", "", "x"].into_iter().feed_into(Join::new('|'));
        assert_eq!(joined, "||x");
    }

    #[test]
    fn no_items() {
        let joined = std::iter::empty::<&str>().feed_into(Join::new(String::from("; ")));
        assert_eq!(joined, "");
    }
}
