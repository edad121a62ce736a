//! [`Collector`]s for comparing items.
//!
//! This module provides collectors that determine the minimum, the maximum,
//! or both, among the items they collect, in a single pass:
//!
//! - by the natural order ([`Min::new()`], [`Max::new()`], [`MinMax::new()`]),
//! - by a comparison function ([`Min::by()`] and the like),
//! - by a key-extraction function, optionally with a comparison function over the keys
//!   ([`Min::by_key()`], [`Min::by_key_with()`] and the like),
//! - for floating-point numbers, with NaN treated as both the smallest and the
//!   largest value ([`NanMin`], [`NanMax`], [`NanMinMax`]).
//!
//! Every collector here keeps the **first** item among equally extremal ones.
//! [`Max`] is [`Min`] under the inverted order ([`Reversed`]), which is
//! what makes the rule hold for the maximum too.
//!
//! Types without a natural order, such as `f64`, are rejected at compile time
//! by the `T: Ord` bound of the `new()` constructors:
//!
//! ```compile_fail
//! use seqkit::cmp::Min;
//!
//! let _ = Min::<f64>::new();
//! ```
//!
//! [`Collector`]: crate::collector::Collector

mod comparator;
mod float;
mod max;
mod max_by_key;
mod min;
mod min_by_key;
mod min_max;
mod min_max_by_key;
mod min_max_result;
mod value_key;

use comparator::ByKey;
pub use comparator::*;
pub use float::*;
pub use max::*;
pub use max_by_key::*;
pub use min::*;
pub use min_by_key::*;
pub use min_max::*;
pub use min_max_by_key::*;
pub use min_max_result::*;

#[cfg(all(test, feature = "std"))]
pub(crate) mod test_utils {
    use std::cmp::Ordering;

    use proptest::collection::{SizeRange, vec as propvec};
    use proptest::prelude::*;

    use super::MinMaxResult;

    /// A struct that never compares the ID.
    /// This is crucial to test that the correct item is kept
    /// if there are multiple equal maximal/minimal items.
    #[derive(Debug, Clone, Copy, Eq)]
    pub struct Id {
        pub id: usize,
        pub num: i32,
    }

    impl Id {
        pub fn full_eq(self, other: Self) -> bool {
            self.id == other.id && self.num == other.num
        }

        pub fn full_eq_opt(x: Option<Self>, y: Option<Self>) -> bool {
            match (x, y) {
                (Some(x), Some(y)) => x.full_eq(y),
                (None, None) => true,
                _ => false,
            }
        }

        pub fn full_eq_minmax_res(x: MinMaxResult<Self>, y: MinMaxResult<Self>) -> bool {
            match (x, y) {
                (MinMaxResult::NoElements, MinMaxResult::NoElements) => true,
                (MinMaxResult::Same(x), MinMaxResult::Same(y)) => x.full_eq(y),
                (MinMaxResult::MinMax(x_min, x_max), MinMaxResult::MinMax(y_min, y_max)) => {
                    x_min.full_eq(y_min) && x_max.full_eq(y_max)
                }
                _ => false,
            }
        }
    }

    impl PartialEq for Id {
        fn eq(&self, other: &Self) -> bool {
            self.num == other.num
        }
    }

    impl PartialOrd for Id {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Id {
        fn cmp(&self, other: &Self) -> Ordering {
            self.num.cmp(&other.num)
        }
    }

    /// Items numbered by position, with few distinct values so that ties are common.
    pub fn any_ids(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Id>> {
        propvec(-4..4_i32, size).prop_map(|nums| {
            nums.into_iter()
                .enumerate()
                .map(|(id, num)| Id { id, num })
                .collect()
        })
    }
}
