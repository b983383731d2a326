//! Asynchronous combinators for [`Outcome`].
//!
//! Two surfaces cover the sync/async combinations of source, selector and
//! projector:
//!
//! - inherent `*_async` methods on [`Outcome`] for a synchronous source with
//!   asynchronous transforms;
//! - [`OutcomeFutureExt`] for an asynchronous source (any
//!   `Future<Output = Outcome<V, E>>`), with both synchronous and
//!   asynchronous transforms.
//!
//! Every combinator awaits its upstream before running the transform, and
//! propagates the success/fail tag without forcing an intermediate unwrap.
//! The wrappers add no synchronization of their own; ordering is exactly the
//! sequential dependency of the chain.
//!
//! # Examples
//!
//! ```rust
//! use futures::future::ready;
//! use millpond::Outcome;
//! use millpond::outcome::future::OutcomeFutureExt;
//!
//! futures::executor::block_on(async {
//!     // Sync source, async transform
//!     let o = Outcome::<i32, String>::success(5)
//!         .map_value_async(|x| ready(x * 2))
//!         .await;
//!     assert_eq!(o, Outcome::success(10));
//!
//!     // Async source, sync transform
//!     let o = ready(Outcome::<i32, String>::success(5))
//!         .map_value(|x| x + 1)
//!         .await;
//!     assert_eq!(o, Outcome::success(6));
//! });
//! ```

use std::future::Future;

use super::Outcome;

impl<V, E> Outcome<V, E> {
    // ========== Async Channel Mapping ==========

    /// Transform the success value with an asynchronous function.
    ///
    /// The function is never invoked on a failure, and the failure is
    /// returned without awaiting anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::future::ready;
    /// use millpond::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let o = Outcome::<i32, &str>::success(21)
    ///         .map_value_async(|x| ready(x * 2))
    ///         .await;
    ///     assert_eq!(o, Outcome::success(42));
    /// });
    /// ```
    pub async fn map_value_async<V2, F, Fut>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = V2>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v).await),
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Transform the error with an asynchronous function.
    pub async fn map_error_async<E2, F, Fut>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Fail(e) => Outcome::Fail(f(e).await),
        }
    }

    // ========== Async Binding ==========

    /// Chain an asynchronous outcome-producing computation; it only runs on
    /// success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::future::ready;
    /// use millpond::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let o = Outcome::<i32, &str>::success(21)
    ///         .and_then_async(|x| ready(Outcome::success(x * 2)))
    ///         .await;
    ///     assert_eq!(o, Outcome::success(42));
    /// });
    /// ```
    pub async fn and_then_async<V2, F, Fut>(self, selector: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<V2, E>>,
    {
        match self {
            Outcome::Success(v) => selector(v).await,
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Asynchronous selector with a synchronous projector.
    ///
    /// The projector runs only after the selected outcome completes and only
    /// when it succeeded.
    pub async fn and_then_with_async<U, V2, F, Fut, P>(
        self,
        selector: F,
        projector: P,
    ) -> Outcome<V2, E>
    where
        V: Clone,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
        P: FnOnce(V, U) -> V2,
    {
        match self {
            Outcome::Success(v) => match selector(v.clone()).await {
                Outcome::Success(u) => Outcome::Success(projector(v, u)),
                Outcome::Fail(e) => Outcome::Fail(e),
            },
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Synchronous selector with an asynchronous projector.
    pub async fn and_then_with_project_async<U, V2, F, P, Fut>(
        self,
        selector: F,
        projector: P,
    ) -> Outcome<V2, E>
    where
        V: Clone,
        F: FnOnce(V) -> Outcome<U, E>,
        P: FnOnce(V, U) -> Fut,
        Fut: Future<Output = V2>,
    {
        match self {
            Outcome::Success(v) => match selector(v.clone()) {
                Outcome::Success(u) => Outcome::Success(projector(v, u).await),
                Outcome::Fail(e) => Outcome::Fail(e),
            },
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }

    /// Asynchronous selector and asynchronous projector.
    pub async fn and_then_with_all_async<U, V2, F, SFut, P, PFut>(
        self,
        selector: F,
        projector: P,
    ) -> Outcome<V2, E>
    where
        V: Clone,
        F: FnOnce(V) -> SFut,
        SFut: Future<Output = Outcome<U, E>>,
        P: FnOnce(V, U) -> PFut,
        PFut: Future<Output = V2>,
    {
        match self {
            Outcome::Success(v) => match selector(v.clone()).await {
                Outcome::Success(u) => Outcome::Success(projector(v, u).await),
                Outcome::Fail(e) => Outcome::Fail(e),
            },
            Outcome::Fail(e) => Outcome::Fail(e),
        }
    }
}

/// Combinators over a future that resolves to an [`Outcome`].
///
/// Blanket-implemented for every `Future<Output = Outcome<V, E>>`, so a
/// chain of async steps can be composed without awaiting between them:
///
/// ```rust
/// use futures::future::ready;
/// use millpond::Outcome;
/// use millpond::outcome::future::OutcomeFutureExt;
///
/// futures::executor::block_on(async {
///     let o = ready(Outcome::<i32, String>::success(3))
///         .map_value(|x| x + 1)
///         .and_then(|x| Outcome::success(x * 10))
///         .await;
///     assert_eq!(o, Outcome::success(40));
/// });
/// ```
pub trait OutcomeFutureExt<V, E>: Future<Output = Outcome<V, E>> + Sized {
    /// Transform the eventual success value with a synchronous function.
    fn map_value<V2, F>(self, f: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> V2,
    {
        async move { self.await.map_value(f) }
    }

    /// Transform the eventual success value with an asynchronous function.
    fn map_value_async<V2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = V2>,
    {
        async move { self.await.map_value_async(f).await }
    }

    /// Transform the eventual error with a synchronous function.
    fn map_error<E2, F>(self, f: F) -> impl Future<Output = Outcome<V, E2>>
    where
        F: FnOnce(E) -> E2,
    {
        async move { self.await.map_error(f) }
    }

    /// Chain a synchronous outcome-producing computation onto the eventual
    /// success value.
    fn and_then<V2, F>(self, selector: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        async move { self.await.and_then(selector) }
    }

    /// Chain an asynchronous outcome-producing computation onto the eventual
    /// success value.
    fn and_then_async<V2, F, Fut>(self, selector: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<V2, E>>,
    {
        async move { self.await.and_then_async(selector).await }
    }

    /// Chain with a synchronous selector and projector over both success
    /// values.
    fn and_then_with<U, V2, F, P>(
        self,
        selector: F,
        projector: P,
    ) -> impl Future<Output = Outcome<V2, E>>
    where
        V: Clone,
        F: FnOnce(V) -> Outcome<U, E>,
        P: FnOnce(V, U) -> V2,
    {
        async move { self.await.and_then_with(selector, projector) }
    }

    /// Chain with an asynchronous selector and a synchronous projector.
    fn and_then_with_async<U, V2, F, Fut, P>(
        self,
        selector: F,
        projector: P,
    ) -> impl Future<Output = Outcome<V2, E>>
    where
        V: Clone,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
        P: FnOnce(V, U) -> V2,
    {
        async move { self.await.and_then_with_async(selector, projector).await }
    }
}

impl<T, V, E> OutcomeFutureExt<V, E> for T where T: Future<Output = Outcome<V, E>> + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::Cell;

    #[test]
    fn map_value_async_transforms_success() {
        let o = block_on(Outcome::<i32, &str>::success(21).map_value_async(|x| ready(x * 2)));
        assert_eq!(o, Outcome::success(42));
    }

    #[test]
    fn map_value_async_skips_failure() {
        let called = Cell::new(false);
        let o = block_on(Outcome::<i32, &str>::fail("err").map_value_async(|x| {
            called.set(true);
            ready(x * 2)
        }));
        assert_eq!(o, Outcome::fail("err"));
        assert!(!called.get());
    }

    #[test]
    fn map_error_async_transforms_failure() {
        let o = block_on(Outcome::<i32, &str>::fail("err").map_error_async(|e| ready(e.len())));
        assert_eq!(o, Outcome::fail(3));

        let o = block_on(Outcome::<i32, &str>::success(5).map_error_async(|e| ready(e.len())));
        assert_eq!(o, Outcome::success(5));
    }

    #[test]
    fn and_then_async_short_circuits() {
        let called = Cell::new(false);
        let o = block_on(Outcome::<i32, &str>::fail("err").and_then_async(|x| {
            called.set(true);
            ready(Outcome::success(x * 2))
        }));
        assert_eq!(o, Outcome::fail("err"));
        assert!(!called.get());
    }

    #[test]
    fn and_then_with_async_projects_both_values() {
        let o = block_on(
            Outcome::<i32, &str>::success(3)
                .and_then_with_async(|x| ready(Outcome::success(x * 10)), |x, y| x + y),
        );
        assert_eq!(o, Outcome::success(33));
    }

    #[test]
    fn and_then_with_project_async_runs_projector_after_selection() {
        let o = block_on(
            Outcome::<i32, &str>::success(3)
                .and_then_with_project_async(|x| Outcome::success(x * 10), |x, y| ready(x + y)),
        );
        assert_eq!(o, Outcome::success(33));
    }

    #[test]
    fn and_then_with_all_async_short_circuits_on_intermediate_failure() {
        let projected = Cell::new(false);
        let o = block_on(Outcome::<i32, &str>::success(3).and_then_with_all_async(
            |_| ready(Outcome::<i32, &str>::fail("mid")),
            |x, y| {
                projected.set(true);
                ready(x + y)
            },
        ));
        assert_eq!(o, Outcome::fail("mid"));
        assert!(!projected.get());
    }

    #[test]
    fn future_ext_composes_without_intermediate_awaits() {
        let o = block_on(
            ready(Outcome::<i32, &str>::success(3))
                .map_value(|x| x + 1)
                .and_then(|x| Outcome::success(x * 10))
                .map_error(|e: &str| e.len()),
        );
        assert_eq!(o, Outcome::success(40));
    }

    #[test]
    fn future_ext_propagates_failure_through_the_chain() {
        let selected = Cell::new(false);
        let o = block_on(
            ready(Outcome::<i32, &str>::fail("upstream"))
                .map_value(|x| x + 1)
                .and_then_async(|x| {
                    selected.set(true);
                    ready(Outcome::success(x * 10))
                }),
        );
        assert_eq!(o, Outcome::fail("upstream"));
        assert!(!selected.get());
    }

    #[test]
    fn future_ext_and_then_with_async() {
        let o = block_on(
            ready(Outcome::<i32, &str>::success(2))
                .and_then_with_async(|x| ready(Outcome::success(x * 100)), |x, y| x + y),
        );
        assert_eq!(o, Outcome::success(202));
    }
}
