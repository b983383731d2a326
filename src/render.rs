//! Uniform textual rendering for the wrapper types.
//!
//! Each wrapper already implements [`std::fmt::Display`]; [`Render`] exposes
//! the same notation as an owned `String`, which is convenient in log lines
//! and test assertions where a trait object or generic bound over "things
//! that can describe themselves" reads better than a `format!` call.
//!
//! The notation is stable:
//!
//! - `Maybe(value)` / `Maybe.Empty`
//! - `Left(value)` / `Right(value)`
//! - `Success(value)` / `Fail(error)`
//!
//! # Examples
//!
//! ```rust
//! use millpond::render::Render;
//! use millpond::{Either, Maybe, Outcome};
//!
//! assert_eq!(Maybe::new(42).render(), "Maybe(42)");
//! assert_eq!(Maybe::<i32>::empty().render(), "Maybe.Empty");
//! assert_eq!(Either::<i32, &str>::left(7).render(), "Left(7)");
//! assert_eq!(Outcome::<i32, &str>::fail("boom").render(), "Fail(boom)");
//! ```

use std::fmt::Display;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Render a value to its canonical textual notation.
pub trait Render {
    /// The textual form of this value.
    fn render(&self) -> String;
}

impl<T: Display> Render for Maybe<T> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<L: Display, R: Display> Render for Either<L, R> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<V: Display, E: Display> Render for Outcome<V, E> {
    fn render(&self) -> String {
        self.to_string()
    }
}
