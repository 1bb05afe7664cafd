//! Asynchronous bridges between failures and `Outcome`.
//!
//! - [`wrap_future`]: a future that may panic while it is polled
//! - [`try_call_async`]: a future factory that may panic before or after
//!   producing its future
//! - [`wrap_async`]: the reusable form of `try_call_async`, as `wrap` is of
//!   `try_call`
//! - [`wrap_promise`]: a future settling to `Result`, where `Err` is the
//!   rejection reason
//!
//! None of these spawn, cancel or time out anything. They only observe how
//! the caller's computation settles.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{FutureExt, TryFuture, TryFutureExt};
use pin_project_lite::pin_project;

use super::{Outcome, Thrown};

pin_project! {
    /// Future returned by [`wrap_future`].
    ///
    /// Resolves to `Ok(value)` when the inner future completes, or to
    /// `Err(Thrown)` when polling it panics.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct WrapFuture<F> {
        #[pin]
        inner: F,
    }
}

impl<F: Future> Future for WrapFuture<F> {
    type Output = Outcome<F::Output, Thrown>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let inner = self.project().inner;
        match catch_unwind(AssertUnwindSafe(|| inner.poll(context))) {
            Ok(Poll::Ready(value)) => Poll::Ready(Outcome::Ok(value)),
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => Poll::Ready(Outcome::Err(Thrown::new(payload))),
        }
    }
}

pin_project! {
    /// Future returned by [`try_call_async`] and the [`wrap_async`] adapter.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct WrapAsync<F> {
        #[pin]
        state: WrapAsyncState<F>,
    }
}

pin_project! {
    #[project = WrapAsyncStateProjection]
    enum WrapAsyncState<F> {
        Running {
            #[pin]
            future: WrapFuture<F>,
        },
        Failed {
            thrown: Option<Thrown>,
        },
    }
}

impl<F: Future> Future for WrapAsync<F> {
    type Output = Outcome<F::Output, Thrown>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().state.project() {
            WrapAsyncStateProjection::Running { future } => future.poll(context),
            WrapAsyncStateProjection::Failed { thrown } => match thrown.take() {
                Some(thrown) => Poll::Ready(Outcome::Err(thrown)),
                None => panic!("`WrapAsync` polled after completion"),
            },
        }
    }
}

/// Captures a panic raised while `future` is polled.
///
/// In particular a panic in the synchronous prelude of an `async` block,
/// before its first `.await`, happens during the first poll and is captured.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome;
///
/// async fn explode() -> i32 {
///     panic!("x")
/// }
///
/// # futures::executor::block_on(async {
/// let settled = outcome::wrap_future(async { 5 }).await;
/// assert_eq!(settled.unwrap(), 5);
///
/// let failed = outcome::wrap_future(explode()).await;
/// assert_eq!(failed.unwrap_err().message(), Some("x"));
/// # });
/// ```
pub fn wrap_future<F: Future>(future: F) -> WrapFuture<F> {
    WrapFuture { inner: future }
}

/// Runs an asynchronous computation once, capturing a panic at any point.
///
/// `factory` is called immediately. A panic while calling it, before any
/// future exists, and a panic while polling the future it returns both
/// resolve to `Err(Thrown)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome;
///
/// fn eager(fail: bool) -> impl Future<Output = i32> {
///     assert!(!fail, "failed before the future existed");
///     async { 1 }
/// }
///
/// # futures::executor::block_on(async {
/// assert_eq!(outcome::try_call_async(|| eager(false)).await.unwrap(), 1);
/// let failed = outcome::try_call_async(|| eager(true)).await;
/// assert_eq!(failed.unwrap_err().message(), Some("failed before the future existed"));
/// # });
/// ```
pub fn try_call_async<Fut, F>(factory: F) -> WrapAsync<Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let state = match catch_unwind(AssertUnwindSafe(factory)) {
        Ok(future) => WrapAsyncState::Running {
            future: wrap_future(future),
        },
        Err(payload) => WrapAsyncState::Failed {
            thrown: Some(Thrown::new(payload)),
        },
    };
    WrapAsync { state }
}

/// Adapts an asynchronous function that may panic into one whose future
/// resolves to an `Outcome`.
///
/// Each call of the returned function goes through [`try_call_async`], so a
/// panic before the future exists and a panic while it is polled both
/// become `Err(Thrown)`. Functions of several arguments can take a tuple.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome;
///
/// fn halve(value: i32) -> impl Future<Output = i32> {
///     assert!(value % 2 == 0, "odd input");
///     async move { value / 2 }
/// }
///
/// # futures::executor::block_on(async {
/// let mut checked_halve = outcome::wrap_async(halve);
/// assert_eq!(checked_halve(8).await.unwrap(), 4);
/// assert_eq!(checked_halve(3).await.unwrap_err().message(), Some("odd input"));
/// assert_eq!(checked_halve(10).await.unwrap(), 5);
/// # });
/// ```
pub fn wrap_async<A, Fut, F>(mut function: F) -> impl FnMut(A) -> WrapAsync<Fut>
where
    F: FnMut(A) -> Fut,
    Fut: Future,
{
    move |argument| try_call_async(|| function(argument))
}

/// Settles a fallible future into an `Outcome`.
///
/// Resolves to `Ok(value)` on success and to `Err(reason)` when the future
/// settles with `Err(reason)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{self, Outcome};
///
/// # futures::executor::block_on(async {
/// let rejected = outcome::wrap_promise(async { Err::<i32, _>("x") }).await;
/// assert_eq!(rejected, Outcome::Err("x"));
///
/// let resolved = outcome::wrap_promise(async { Ok::<_, &str>("y") }).await;
/// assert_eq!(resolved, Outcome::Ok("y"));
/// # });
/// ```
pub fn wrap_promise<F>(future: F) -> impl Future<Output = Outcome<F::Ok, F::Error>>
where
    F: TryFuture,
{
    TryFutureExt::into_future(future).map(Outcome::from)
}

static_assertions::assert_impl_all!(WrapFuture<std::future::Ready<i32>>: Send, Unpin);
