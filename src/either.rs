//! A tagged union of exactly one of two values.
//!
//! `Either<L, R>` carries no success/failure semantics: both variants are
//! equally valid outcomes. When one side clearly means failure, use
//! [`Outcome`](crate::Outcome) instead.
//!
//! Consumption is by exhaustive case dispatch: [`Either::fold`] for
//! value-producing handlers, [`Either::visit`] for side effects. Both
//! handlers are always required by the signatures, so a missing handler is a
//! compile error rather than a runtime condition.
//!
//! # Examples
//!
//! ```rust
//! use millpond::Either;
//!
//! fn lookup(cached: bool) -> Either<String, i32> {
//!     if cached {
//!         Either::left("from-cache".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! let description = lookup(true).fold(
//!     |tag| format!("cache hit: {tag}"),
//!     |fresh| format!("computed: {fresh}"),
//! );
//! assert_eq!(description, "cache hit: from-cache");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Fixed at construction: there is no transition between variants, only the
/// production of new values through [`Either::map_left`], [`Either::map_right`]
/// and friends.
///
/// Equality and hashing are variant-aware: a `Left` is only ever equal to
/// another `Left` with an equal payload. `Either::<i32, i32>::left(1)` and
/// `Either::<i32, i32>::right(1)` are unequal even though the payloads match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a `Left` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Case Dispatch ==========

    /// Dispatch on the variant, returning the handler's result.
    ///
    /// Exactly one of the two handlers runs, determined by the variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.fold(|n| n.to_string(), |s| s.to_string()), "42");
    /// assert_eq!(right.fold(|n| n.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, of_left: F, of_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => of_left(l),
            Either::Right(r) => of_right(r),
        }
    }

    /// Dispatch on the variant for a side effect, borrowing the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let mut seen = Vec::new();
    /// let e: Either<i32, &str> = Either::left(42);
    /// e.visit(|n| seen.push(n.to_string()), |s| seen.push(s.to_string()));
    /// assert_eq!(seen, vec!["42"]);
    /// ```
    #[inline]
    pub fn visit<F, G>(&self, of_left: F, of_right: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Either::Left(l) => of_left(l),
            Either::Right(r) => of_right(r),
        }
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(21);
    /// assert_eq!(e.map_left(|x| x * 2), Either::left(42));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map_right(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform both variants at once.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Swap `Left` and `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result` (`Right` becomes `Ok`, `Left` becomes `Err`).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from `Result` (`Ok` becomes `Right`, `Err` becomes `Left`).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({l})"),
            Either::Right(r) => write!(f, "Right({r})"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_left_never_equals_right(x: i32) {
            let left: Either<i32, i32> = Either::left(x);
            let right: Either<i32, i32> = Either::right(x);
            prop_assert_ne!(left, right);
        }

        #[test]
        fn prop_swap_involution(x: i32) {
            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.swap().swap(), e);

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_fold_picks_the_active_side(x: i32) {
            let left: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(left.fold(|l| (l, true), |r| (r, false)), (x, true));

            let right: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(right.fold(|l| (l, true), |r| (r, false)), (x, false));
        }

        #[test]
        fn prop_bimap_swap_commutes(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.bimap(f, g).swap(), e.swap().bimap(g, f));
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let e: Either<(), i32> = Either::right(x);
            let r: Result<i32, ()> = e.into();
            prop_assert_eq!(Either::from(r), e);
        }
    }
}
