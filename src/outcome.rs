//! Success-with-value or failure-with-error, with channel-independent mapping.
//!
//! `Outcome<V, E>` has the shape of [`Either`](crate::Either) but the
//! semantics of a result: one variant is the happy path. It exists alongside
//! `std::result::Result` because its combinator surface is the one the rest
//! of this crate composes against — dual `map_value` / `map_error` channels,
//! projector-style binding via [`Outcome::and_then_with`], and asynchronous
//! chaining in [`future`] that preserves the tag without intermediate
//! unwrapping. Conversion to and from `Result` is lossless at the boundary.
//!
//! # Examples
//!
//! ```rust
//! use millpond::Outcome;
//!
//! let doubled = Outcome::<i32, String>::success(5).map_value(|x| x * 2);
//! assert_eq!(doubled, Outcome::success(10));
//!
//! let failed = Outcome::<i32, String>::fail("boom".to_string()).map_value(|x| x * 2);
//! assert!(failed.is_fail());
//! assert_eq!(failed.error(), "boom");
//! ```

use std::fmt;

pub mod future;

/// A two-state tagged value: `Success(V)` or `Fail(E)`.
///
/// The state is fixed at construction. Combinators never mutate; they consume
/// the outcome and produce a new one, short-circuiting on the inactive
/// channel (a `map_value` on a failure is a no-op that never runs the
/// function, and vice versa).
///
/// Equality compares the tag first and then the matching payload, so
/// `success(v)` and `fail(e)` are always unequal regardless of payloads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    /// The computation produced a value.
    Success(V),
    /// The computation produced an error.
    Fail(E),
}

impl<V, E> Outcome<V, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::fail("denied");
    /// assert!(o.is_fail());
    /// ```
    #[inline]
    pub fn fail(error: E) -> Self {
        Outcome::Fail(error)
    }

    // ========== Predicates ==========

    /// Returns `true` for a successful outcome.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for a failed outcome.
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    // ========== Accessors ==========

    /// Borrow the success value, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Fail`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(5);
    /// assert_eq!(o.value(), &5);
    /// ```
    #[inline]
    pub fn value(&self) -> &V {
        match self {
            Outcome::Success(v) => v,
            Outcome::Fail(_) => panic!("called `Outcome::value()` on a `Fail` value"),
        }
    }

    /// Borrow the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::fail("denied");
    /// assert_eq!(o.error(), &"denied");
    /// ```
    #[inline]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::error()` on a `Success` value"),
            Outcome::Fail(e) => e,
        }
    }

    /// Borrow the success value if present.
    #[inline]
    pub fn try_value(&self) -> Option<&V> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Fail(_) => None,
        }
    }

    /// Borrow the error if present.
    #[inline]
    pub fn try_error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Fail(e) => Some(e),
        }
    }

    /// Extract the success value, consuming self and panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Fail`.
    #[inline]
    pub fn into_value(self) -> V {
        match self {
            Outcome::Success(v) => v,
            Outcome::Fail(_) => panic!("called `Outcome::into_value()` on a `Fail` value"),
        }
    }

    /// Extract the error, consuming self and panicking on success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    #[inline]
    pub fn into_error(self) -> E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::into_error()` on a `Success` value"),
            Outcome::Fail(e) => e,
        }
    }

    /// Return the success value or `default`. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(5).value_or(0), 5);
    /// assert_eq!(Outcome::<i32, &str>::fail("e").value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Outcome::Success(v) => v,
            Outcome::Fail(_) => default,
        }
    }

    /// Return the success value or compute one from the error.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Fail(e) => f(e),
        }
    }

    /// Return the success value or `V::default()`. Never panics.
    #[inline]
    pub fn value_or_default(self) -> V
    where
        V: Default,
    {
        self.value_or_else(|_| V::default())
    }

    // ========== Channel Mapping ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// The function is never invoked on a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(5).map_value(|x| x * 2);
    /// assert_eq!(o, Outcome::success(10));
    ///
    /// let o = Outcome::<i32, &str>::fail("err").map_value(|x| x * 2);
    /// assert_eq!(o, Outcome::fail("err"));
    /// ```
    #[inline]
    pub fn map_value<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Transform the error, passing successes through unchanged.
    ///
    /// Independent of [`Outcome::map_value`]: the two channels never
    /// interfere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::fail("err").map_error(|e| e.len());
    /// assert_eq!(o, Outcome::fail(3));
    ///
    /// let o = Outcome::<i32, &str>::success(5).map_error(|e| e.len());
    /// assert_eq!(o, Outcome::success(5));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Fail(e) => Outcome::Fail(f(e)),
        }
    }

    // ========== Binding ==========

    /// Chain a second outcome-producing computation; it only runs on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, String> {
    ///     if x > 0 {
    ///         Outcome::success(x)
    ///     } else {
    ///         Outcome::fail(format!("{x} is not positive"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(5).and_then(positive), Outcome::success(5));
    /// assert!(Outcome::success(-1).and_then(positive).is_fail());
    /// ```
    #[inline]
    pub fn and_then<V2, F>(self, selector: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Outcome::Success(v) => selector(v),
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Chain with a projector over both the original and intermediate values.
    ///
    /// The selector only runs on success, and the projector only runs when
    /// the selected outcome also succeeded; the first failure short-circuits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(3)
    ///     .and_then_with(|x| Outcome::success(x * 10), |x, y| x + y);
    /// assert_eq!(o, Outcome::success(33));
    /// ```
    #[inline]
    pub fn and_then_with<U, V2, F, P>(self, selector: F, projector: P) -> Outcome<V2, E>
    where
        V: Clone,
        F: FnOnce(V) -> Outcome<U, E>,
        P: FnOnce(V, U) -> V2,
    {
        match self {
            Outcome::Success(v) => match selector(v.clone()) {
                Outcome::Success(u) => Outcome::Success(projector(v, u)),
                Outcome::Fail(e) => Outcome::Fail(e),
            },
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Recover from a failure with a second outcome-producing computation.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Fail(e) => f(e),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Fail(e) => Err(e),
        }
    }

    /// Convert to `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }
}

// ========== Trait Implementations ==========

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Fail(e),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(v) => write!(f, "Success({v})"),
            Outcome::Fail(e) => write!(f, "Fail({e})"),
        }
    }
}
