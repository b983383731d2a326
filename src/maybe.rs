//! An explicit optional value with monadic composition.
//!
//! # Maybe vs Option
//!
//! `Maybe<T>` is deliberately a distinct nominal type rather than an alias for
//! `Option<T>`. It carries the rendering and composition conventions of this
//! crate (`Display` as `Maybe(x)` / `Maybe.Empty`, `and_then_with` projection,
//! `zip_with` lifting) and converts losslessly to and from `Option` at the
//! boundary where callers prefer the standard type.
//!
//! # Examples
//!
//! ```rust
//! use millpond::Maybe;
//!
//! let present = Maybe::new(3);
//! let empty = Maybe::<i32>::empty();
//!
//! // Left-biased fallback: self wins when present
//! assert_eq!(present.or(Maybe::new(7)).value(), &3);
//! assert_eq!(empty.or(Maybe::new(7)).value(), &7);
//!
//! // Mapping only runs when a value is present
//! assert_eq!(Maybe::new(2).map(|x| x * 10), Maybe::new(20));
//! assert_eq!(Maybe::<i32>::empty().map(|x| x * 10), Maybe::empty());
//! ```

use std::fmt;

/// A value that is either `Present(T)` or `Empty`.
///
/// Immutable once constructed: every combinator consumes or borrows the
/// wrapper and produces a new one, never mutating in place.
///
/// # Example
///
/// ```rust
/// use millpond::Maybe;
///
/// fn head(items: &[i32]) -> Maybe<i32> {
///     match items.first() {
///         Some(x) => Maybe::new(*x),
///         None => Maybe::empty(),
///     }
/// }
///
/// assert_eq!(head(&[1, 2, 3]), Maybe::new(1));
/// assert_eq!(head(&[]), Maybe::empty());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value.
    Empty,
    /// A present value.
    Present(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Wrap a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// let m = Maybe::new(42);
    /// assert!(m.has_value());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Maybe::Present(value)
    }

    /// The missing value for `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// let m = Maybe::<i32>::empty();
    /// assert!(m.is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Maybe::Empty
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Empty)
    }

    // ========== Accessors ==========

    /// Borrow the wrapped value, panicking when empty.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(5).value(), &5);
    /// ```
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Empty => panic!("called `Maybe::value()` on an `Empty` value"),
        }
    }

    /// Borrow the wrapped value if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(5).try_value(), Some(&5));
    /// assert_eq!(Maybe::<i32>::empty().try_value(), None);
    /// ```
    #[inline]
    pub fn try_value(&self) -> Option<&T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Empty => None,
        }
    }

    /// Extract the wrapped value, consuming self and panicking when empty.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Empty`.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Empty => panic!("called `Maybe::into_value()` on an `Empty` value"),
        }
    }

    /// Return the value if present, or `default` otherwise. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(5).value_or(0), 5);
    /// assert_eq!(Maybe::<i32>::empty().value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Empty => default,
        }
    }

    /// Return the value if present, or compute one otherwise.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(v) => v,
            Maybe::Empty => f(),
        }
    }

    /// Return the value if present, or `T::default()` otherwise. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::empty().value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    // ========== Combinators ==========

    /// Return self if present, else `other`.
    ///
    /// Both sides are already evaluated; neither branch runs code. Use
    /// [`Maybe::or_else_with`] for a lazily computed fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(3).or(Maybe::new(7)), Maybe::new(3));
    /// assert_eq!(Maybe::empty().or(Maybe::new(7)), Maybe::new(7));
    /// ```
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Empty => other,
        }
    }

    /// Return self if present, else compute the fallback.
    #[inline]
    pub fn or_else_with<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Empty => f(),
        }
    }

    /// Transform the value when present, propagating emptiness otherwise.
    ///
    /// The function is never invoked on an empty wrapper.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(21).map(|x| x * 2), Maybe::new(42));
    /// assert_eq!(Maybe::<i32>::empty().map(|x| x * 2), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Chain a computation that itself returns a `Maybe`.
    ///
    /// Short-circuits to empty as soon as any step is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// fn checked_half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::new(x / 2) } else { Maybe::empty() }
    /// }
    ///
    /// assert_eq!(Maybe::new(8).and_then(checked_half), Maybe::new(4));
    /// assert_eq!(Maybe::new(7).and_then(checked_half), Maybe::empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Two-step chaining: select an intermediate `Maybe`, then project from
    /// both the original and the intermediate values.
    ///
    /// This is the comprehension-style bind. Empty anywhere short-circuits,
    /// and the projector runs only when both values are present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// let m = Maybe::new(3).and_then_with(
    ///     |x| Maybe::new(x * 10),
    ///     |x, y| x + y,
    /// );
    /// assert_eq!(m, Maybe::new(33));
    /// ```
    #[inline]
    pub fn and_then_with<U, V, F, P>(self, selector: F, projector: P) -> Maybe<V>
    where
        T: Clone,
        F: FnOnce(T) -> Maybe<U>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Maybe::Present(v) => match selector(v.clone()) {
                Maybe::Present(u) => Maybe::Present(projector(v, u)),
                Maybe::Empty => Maybe::Empty,
            },
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Keep the value only if the predicate holds, else yield empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(4).filter(|x| x % 2 == 0), Maybe::new(4));
    /// assert_eq!(Maybe::new(3).filter(|x| x % 2 == 0), Maybe::empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(v) if predicate(&v) => Maybe::Present(v),
            _ => Maybe::Empty,
        }
    }

    /// Combine two wrappers with a binary function; present only when both
    /// are present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::Maybe;
    ///
    /// assert_eq!(Maybe::new(2).zip_with(Maybe::new(3), |a, b| a + b), Maybe::new(5));
    /// assert_eq!(Maybe::new(2).zip_with(Maybe::<i32>::empty(), |a, b| a + b), Maybe::empty());
    /// ```
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, f: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(f(a, b)),
            _ => Maybe::Empty,
        }
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Convert into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Empty => None,
        }
    }
}

/// Lift a plain function into one over `Maybe` values.
///
/// # Example
///
/// ```rust
/// use millpond::maybe::{lift, Maybe};
///
/// let double = lift(|x: i32| x * 2);
/// assert_eq!(double(Maybe::new(21)), Maybe::new(42));
/// assert_eq!(double(Maybe::empty()), Maybe::empty());
/// ```
pub fn lift<T, U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> U,
{
    move |input| input.map(&f)
}

/// Lift a binary function into one over pairs of `Maybe` values.
///
/// # Example
///
/// ```rust
/// use millpond::maybe::{lift2, Maybe};
///
/// let add = lift2(|a: i32, b: i32| a + b);
/// assert_eq!(add(Maybe::new(1), Maybe::new(2)), Maybe::new(3));
/// assert_eq!(add(Maybe::new(1), Maybe::empty()), Maybe::empty());
/// ```
pub fn lift2<A, B, C, F>(f: F) -> impl Fn(Maybe<A>, Maybe<B>) -> Maybe<C>
where
    F: Fn(A, B) -> C,
{
    move |a, b| a.zip_with(b, &f)
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::Empty`.
    fn default() -> Self {
        Maybe::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Maybe::Present(v),
            None => Maybe::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => write!(f, "Maybe({v})"),
            Maybe::Empty => write!(f, "Maybe.Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn constructors_and_predicates() {
        assert!(Maybe::new(1).has_value());
        assert!(!Maybe::new(1).is_empty());
        assert!(Maybe::<i32>::empty().is_empty());
        assert!(!Maybe::<i32>::empty().has_value());
    }

    #[test]
    fn value_access() {
        assert_eq!(Maybe::new(5).value(), &5);
        assert_eq!(Maybe::new(5).into_value(), 5);
        assert_eq!(Maybe::new(5).try_value(), Some(&5));
        assert_eq!(Maybe::<i32>::empty().try_value(), None);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::value()` on an `Empty` value")]
    fn value_panics_on_empty() {
        Maybe::<i32>::empty().value();
    }

    #[test]
    fn or_prefers_present_side() {
        assert_eq!(Maybe::<i32>::empty().or(Maybe::new(7)).into_value(), 7);
        assert_eq!(Maybe::new(3).or(Maybe::new(7)).into_value(), 3);
        assert_eq!(
            Maybe::<i32>::empty().or(Maybe::empty()),
            Maybe::<i32>::empty()
        );
    }

    #[test]
    fn or_else_with_computes_fallback_lazily() {
        let called = Cell::new(false);
        let m = Maybe::new(3).or_else_with(|| {
            called.set(true);
            Maybe::new(7)
        });
        assert_eq!(m, Maybe::new(3));
        assert!(!called.get());

        assert_eq!(
            Maybe::<i32>::empty().or_else_with(|| Maybe::new(7)),
            Maybe::new(7)
        );
        assert_eq!(
            Maybe::<i32>::empty().or_else_with(Maybe::empty),
            Maybe::empty()
        );
    }

    #[test]
    fn value_or_variants_never_panic() {
        assert_eq!(Maybe::new(5).value_or(0), 5);
        assert_eq!(Maybe::<i32>::empty().value_or(9), 9);
        assert_eq!(Maybe::<i32>::empty().value_or_default(), 0);
        assert_eq!(Maybe::<i32>::empty().value_or_else(|| 4), 4);
    }

    #[test]
    fn map_propagates_emptiness() {
        assert_eq!(Maybe::new(21).map(|x| x * 2), Maybe::new(42));
        assert_eq!(Maybe::<i32>::empty().map(|x| x * 2), Maybe::empty());
    }

    #[test]
    fn map_never_invokes_function_on_empty() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::empty().map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(result, Maybe::empty());
        assert!(!called.get());
    }

    #[test]
    fn and_then_short_circuits() {
        let even_half = |x: i32| {
            if x % 2 == 0 {
                Maybe::new(x / 2)
            } else {
                Maybe::empty()
            }
        };
        assert_eq!(Maybe::new(8).and_then(even_half), Maybe::new(4));
        assert_eq!(Maybe::new(7).and_then(even_half), Maybe::empty());
        assert_eq!(Maybe::<i32>::empty().and_then(even_half), Maybe::empty());
    }

    #[test]
    fn and_then_with_projects_both_values() {
        let m = Maybe::new(3).and_then_with(|x| Maybe::new(x * 10), |x, y| x + y);
        assert_eq!(m, Maybe::new(33));
    }

    #[test]
    fn and_then_with_short_circuits_on_empty_intermediate() {
        let m = Maybe::new(3).and_then_with(|_| Maybe::<i32>::empty(), |x, y| x + y);
        assert_eq!(m, Maybe::empty());
    }

    #[test]
    fn filter_keeps_matching_values() {
        assert_eq!(Maybe::new(4).filter(|x| x % 2 == 0), Maybe::new(4));
        assert_eq!(Maybe::new(3).filter(|x| x % 2 == 0), Maybe::empty());
        assert_eq!(
            Maybe::<i32>::empty().filter(|x| x % 2 == 0),
            Maybe::empty()
        );
    }

    #[test]
    fn zip_with_needs_both_values() {
        assert_eq!(Maybe::new(2).zip_with(Maybe::new(3), |a, b| a + b), Maybe::new(5));
        assert_eq!(
            Maybe::<i32>::empty().zip_with(Maybe::new(3), |a, b| a + b),
            Maybe::empty()
        );
        assert_eq!(
            Maybe::new(2).zip_with(Maybe::<i32>::empty(), |a, b| a + b),
            Maybe::empty()
        );
    }

    #[test]
    fn lift_wraps_plain_functions() {
        let double = lift(|x: i32| x * 2);
        assert_eq!(double(Maybe::new(21)), Maybe::new(42));
        assert_eq!(double(Maybe::empty()), Maybe::empty());

        let add = lift2(|a: i32, b: i32| a + b);
        assert_eq!(add(Maybe::new(1), Maybe::new(2)), Maybe::new(3));
        assert_eq!(add(Maybe::empty(), Maybe::new(2)), Maybe::empty());
    }

    #[test]
    fn equality_is_value_level() {
        assert_eq!(Maybe::new(1), Maybe::new(1));
        assert_ne!(Maybe::new(1), Maybe::new(2));
        assert_ne!(Maybe::new(1), Maybe::empty());
        assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
    }

    #[test]
    fn display_rendering() {
        assert_eq!(Maybe::new(3).to_string(), "Maybe(3)");
        assert_eq!(Maybe::<i32>::empty().to_string(), "Maybe.Empty");
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some(1)), Maybe::new(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::empty());
        assert_eq!(Option::from(Maybe::new(1)), Some(1));
        assert_eq!(Maybe::new(1).into_option(), Some(1));
    }

    #[test]
    fn into_iter_yields_at_most_one() {
        assert_eq!(Maybe::new(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert!(Maybe::<i32>::empty().into_iter().next().is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_functor_identity(x: i32) {
            prop_assert_eq!(Maybe::new(x).map(|v| v), Maybe::new(x));
        }

        #[test]
        fn prop_functor_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(
                Maybe::new(x).map(f).map(g),
                Maybe::new(x).map(|v| g(f(v)))
            );
        }

        #[test]
        fn prop_monad_left_identity(x: i32) {
            let f = |v: i32| Maybe::new(v.wrapping_mul(3));
            prop_assert_eq!(Maybe::new(x).and_then(f), f(x));
        }

        #[test]
        fn prop_monad_right_identity(x: i32) {
            prop_assert_eq!(Maybe::new(x).and_then(Maybe::new), Maybe::new(x));
        }

        #[test]
        fn prop_or_is_left_biased(x: i32, y: i32) {
            prop_assert_eq!(Maybe::new(x).or(Maybe::new(y)), Maybe::new(x));
            prop_assert_eq!(Maybe::empty().or(Maybe::new(y)), Maybe::new(y));
        }

        #[test]
        fn prop_option_roundtrip(x in proptest::option::of(any::<i32>())) {
            let maybe: Maybe<i32> = x.into();
            let back: Option<i32> = maybe.into();
            prop_assert_eq!(back, x);
        }
    }
}
