//! Test utilities: assertion macros for the wrapper types and, behind the
//! `proptest` feature, `Arbitrary` instances and strategy constructors.
//!
//! The macros unwrap the expected variant and panic with a readable message
//! otherwise, so a failing test names the variant it actually got instead of
//! a bare `assert!` line number.
//!
//! # Examples
//!
//! ```rust
//! use millpond::{assert_present, assert_success, Maybe, Outcome};
//!
//! let value = assert_present!(Maybe::new(42));
//! assert_eq!(value, 42);
//!
//! let value = assert_success!(Outcome::<i32, String>::success(7));
//! assert_eq!(value, 7);
//! ```

/// Unwrap a [`Maybe::Present`](crate::Maybe), panicking on
/// [`Maybe::Empty`](crate::Maybe).
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(value) => value,
            $crate::Maybe::Empty => panic!("expected Maybe(..), got Maybe.Empty"),
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) is empty, panicking with the
/// present value otherwise.
#[macro_export]
macro_rules! assert_empty {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Empty => {}
            $crate::Maybe::Present(value) => {
                panic!("expected Maybe.Empty, got Maybe({:?})", value)
            }
        }
    };
}

/// Unwrap an [`Outcome::Success`](crate::Outcome), panicking on
/// [`Outcome::Fail`](crate::Outcome) with the error.
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Fail(error) => {
                panic!("expected Success(..), got Fail({:?})", error)
            }
        }
    };
}

/// Unwrap an [`Outcome::Fail`](crate::Outcome), panicking on
/// [`Outcome::Success`](crate::Outcome) with the value.
#[macro_export]
macro_rules! assert_fail {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Fail(error) => error,
            $crate::Outcome::Success(value) => {
                panic!("expected Fail(..), got Success({:?})", value)
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::either::Either;
    use crate::maybe::Maybe;
    use crate::outcome::Outcome;

    /// Strategy over [`Maybe`] values: roughly one empty in four.
    pub fn maybe_of<T>(value: impl Strategy<Value = T> + 'static) -> BoxedStrategy<Maybe<T>>
    where
        T: Clone + std::fmt::Debug + 'static,
    {
        prop_oneof![
            1 => Just(Maybe::Empty),
            3 => value.prop_map(Maybe::new),
        ]
        .boxed()
    }

    /// Strategy over [`Either`] values, evenly split between sides.
    pub fn either_of<L, R>(
        left: impl Strategy<Value = L> + 'static,
        right: impl Strategy<Value = R> + 'static,
    ) -> BoxedStrategy<Either<L, R>>
    where
        L: std::fmt::Debug + 'static,
        R: std::fmt::Debug + 'static,
    {
        prop_oneof![
            left.prop_map(Either::Left),
            right.prop_map(Either::Right),
        ]
        .boxed()
    }

    /// Strategy over [`Outcome`] values: roughly one failure in four.
    pub fn outcome_of<V, E>(
        value: impl Strategy<Value = V> + 'static,
        error: impl Strategy<Value = E> + 'static,
    ) -> BoxedStrategy<Outcome<V, E>>
    where
        V: std::fmt::Debug + 'static,
        E: std::fmt::Debug + 'static,
    {
        prop_oneof![
            3 => value.prop_map(Outcome::Success),
            1 => error.prop_map(Outcome::Fail),
        ]
        .boxed()
    }

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + Clone + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Maybe<T>>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            maybe_of(any_with::<T>(args))
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Either<L, R>>;

        fn arbitrary_with((left, right): Self::Parameters) -> Self::Strategy {
            either_of(any_with::<L>(left), any_with::<R>(right))
        }
    }

    impl<V, E> Arbitrary for Outcome<V, E>
    where
        V: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (V::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Outcome<V, E>>;

        fn arbitrary_with((value, error): Self::Parameters) -> Self::Strategy {
            outcome_of(any_with::<V>(value), any_with::<E>(error))
        }
    }
}

#[cfg(feature = "proptest")]
pub use strategies::{either_of, maybe_of, outcome_of};
