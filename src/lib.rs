//! # Millpond
//!
//! Pragmatic optional, alternative and fallible value types for everyday
//! Rust, plus sequence adaptors for joining, zipping and partially ordering
//! iterators.
//!
//! ## Philosophy
//!
//! Millpond does not try to replace `Option` and `Result`. It provides
//! wrappers with a deliberately explicit vocabulary (`has_value`,
//! `value_or`, `and_then_with`) for codebases that want reading a call
//! site to spell out intent, conversions to and from the std types at
//! every seam, and combinators that std leaves out, such as comprehension
//! style binds and async-aware chaining.
//!
//! ## The wrapper types
//!
//! - [`Maybe<T>`]: a value that may be absent. Converts losslessly to and
//!   from `Option<T>`.
//! - [`Either<L, R>`]: exactly one of two equally legitimate values, with
//!   no success/failure connotation.
//! - [`Outcome<V, E>`]: a success value or a failure error, with sync and
//!   async combinator chains. Converts losslessly to and from
//!   `Result<V, E>`.
//!
//! ```rust
//! use millpond::{Maybe, Outcome};
//!
//! let price = Maybe::new(120)
//!     .filter(|p| *p > 100)
//!     .map(|p| p * 2)
//!     .value_or(0);
//! assert_eq!(price, 240);
//!
//! let parsed: Outcome<i32, String> = Outcome::success("42")
//!     .and_then(|s: &str| s.parse::<i32>().map_err(|e| e.to_string()).into());
//! assert_eq!(parsed, Outcome::success(42));
//! ```
//!
//! ## Sequence adaptors
//!
//! [`seq::SequenceExt`] extends every iterator with hash joins whose
//! absent sides are [`Maybe`], a length-padding [`zip_all`], counting
//! checks that stop early, subsequence enumeration and partial top-K
//! ordering:
//!
//! ```rust
//! use millpond::seq::SequenceExt;
//!
//! let three_cheapest: Vec<u32> = [120, 45, 310, 18, 99, 250]
//!     .into_iter()
//!     .partial_order_by_key(|price| *price, 3)
//!     .collect();
//! assert_eq!(three_cheapest, vec![18, 45, 99]);
//! ```
//!
//! [`zip_all`]: seq::SequenceExt::zip_all
//!
//! ## Async
//!
//! [`Outcome`] carries async combinators (`map_value_async`,
//! `and_then_async` and friends), and [`outcome::future::OutcomeFutureExt`]
//! chains combinators directly onto any `Future<Output = Outcome<V, E>>`
//! without awaiting in between. Everything is built on `std::future` alone,
//! so the combinators run under any executor and pull in no runtime.
//!
//! ## Feature flags
//!
//! - `proptest`: `Arbitrary` instances and strategy constructors in
//!   [`testing`].
//! - `serde`: `Serialize`/`Deserialize` for the wrapper types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod maybe;
pub mod outcome;
pub mod partial_order;
pub mod render;
pub mod seq;
pub mod testing;

pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use partial_order::{Direction, PartialOrdered};
pub use render::Render;
pub use seq::SequenceExt;

/// Everything most users want in scope, in one import.
///
/// ```rust
/// use millpond::prelude::*;
///
/// let found = [1, 2, 3].into_iter().index_of(&2);
/// assert_eq!(found, Some(1));
/// let wrapped = Maybe::from(found);
/// assert_eq!(wrapped.render(), "Maybe(1)");
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::future::OutcomeFutureExt;
    pub use crate::outcome::Outcome;
    pub use crate::partial_order::{Direction, PartialOrdered};
    pub use crate::render::Render;
    pub use crate::seq::{cartesian_product, SequenceExt};
}
