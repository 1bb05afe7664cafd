//! Outcome type - a computation that either succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, which is either `Ok(T)`
//! or `Err(E)`. Expected failures travel as ordinary values; a caller decides
//! whether to inspect, transform or fold over them.
//!
//! The bridges back into panic-based control flow are explicit and opt-in:
//!
//! - [`Outcome::unwrap_or_throw`] and [`throw_err`] raise the error payload
//! - [`try_call`] and [`wrap`] capture a panic as `Err(Thrown)`
//! - `try_call_async`, `wrap_async`, `wrap_future` and `wrap_promise` do
//!   the same for futures (feature `async`)
//!
//! # Examples
//!
//! ```rust
//! use outcomes::outcome::{self, Outcome};
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(20);
//! let doubled = parsed.map(|n| n * 2).map_err(|e| e.len());
//! assert_eq!(doubled, Outcome::Ok(40));
//!
//! let collected = outcome::all([Outcome::Ok(1), Outcome::Err("a"), Outcome::Err("b")]);
//! assert_eq!(collected, Outcome::Err(vec!["a", "b"]));
//! ```

mod wrap;
#[cfg(feature = "async")]
mod wrap_async;

pub use wrap::{Thrown, try_call, wrap};
#[cfg(feature = "async")]
pub use wrap_async::{
    WrapAsync, WrapFuture, try_call_async, wrap_async, wrap_future, wrap_promise,
};

use std::any::Any;
use std::fmt;

use crate::error::ContractViolation;
use crate::maybe::Maybe;

/// The result of a computation that either produced a value or failed.
///
/// Exactly one payload is present, matching the variant, and the variant
/// never changes after construction.
///
/// # Type Parameters
///
/// * `T` - The success payload
/// * `E` - The error payload
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::Err("boom");
/// let message = failed.fold(|n| n.to_string(), |e| format!("failed: {e}"));
/// assert_eq!(message, "failed: boom");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Ok(T),
    /// The computation failed.
    Err(E),
}

/// Creates a successful outcome.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates a failed outcome.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// Always the negation of [`Outcome::is_ok`].
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the predicate holds for the value.
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the predicate holds for the error.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, passing an error through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.map(|n| n + 1), Outcome::Ok(3));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("nope");
    /// assert_eq!(failure.map(|n| n + 1), Outcome::Err("nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error value, passing a success through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("nope");
    /// assert_eq!(failure.map_err(str::len), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<U, G, F, H>(self, ok_function: F, err_function: H) -> Outcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(error) => Outcome::Err(err_function(error)),
        }
    }

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// Both branches return the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.fold(|n| n.to_string(), |e| e), "42");
    /// ```
    #[inline]
    pub fn fold<U, F, H>(self, ok_function: F, err_function: H) -> U
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }

    /// Calls a function on the success value for its side effect.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls a function on the error value for its side effect.
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    /// Chains a fallible computation on the success value.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error with a fallible computation.
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with "Tried to unwrap Err" if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use outcomes::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("boom");
    /// failure.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => ContractViolation::UnwrapErr.raise(),
        }
    }

    /// Returns the error value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with "Tried to unwrapErr Ok" if this is an `Ok` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => ContractViolation::UnwrapErrOnOk.raise(),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or `alternative` on error.
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => alternative,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let failure: Outcome<usize, &str> = Outcome::Err("four");
    /// assert_eq!(failure.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, alternative: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => alternative(error),
        }
    }

    /// Returns the success value, or raises the error payload itself as a
    /// panic.
    ///
    /// The payload can be recovered with [`try_call`] and
    /// [`Thrown::downcast`]. Prefer [`Outcome::into_result`] and `?` where
    /// the caller can propagate a `Result` instead.
    ///
    /// # Panics
    ///
    /// Panics with the error payload if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::{self, Outcome};
    ///
    /// let captured = outcome::try_call(|| {
    ///     let failure: Outcome<i32, u16> = Outcome::Err(404);
    ///     failure.unwrap_or_throw()
    /// });
    /// assert_eq!(captured.unwrap_err().downcast::<u16>().ok(), Some(404));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_or_throw(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => wrap::throw(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns the success value as a `Maybe`, discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Returns the error value as a `Maybe`, discarding any success.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Converts into the standard library `Result` so `?` can propagate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// fn double(input: Outcome<i32, String>) -> Result<i32, String> {
    ///     Ok(input.into_result()? * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::Ok(4)), Ok(8));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Collects outcomes, keeping every error rather than stopping at the
    /// first one. See [`all`].
    #[inline]
    pub fn all<I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        all(outcomes)
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` on error.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(|_| T::default())
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// An outer error is returned without inspecting anything else. Only
    /// nested outcomes can be flattened; anything else is rejected at
    /// compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Err("inner"));
    /// ```
    ///
    /// ```rust,compile_fail
    /// use outcomes::outcome::Outcome;
    ///
    /// let plain: Outcome<i32, &str> = Outcome::Ok(1);
    /// let _ = plain.flatten();
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E, I> Outcome<Outcome<T, I>, E> {
    /// Removes one level of nesting, converting the inner error into the
    /// outer error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, u8>, u32> = Outcome::Ok(Outcome::Err(7));
    /// assert_eq!(nested.flatten_into(), Outcome::Err(7_u32));
    /// ```
    #[inline]
    pub fn flatten_into(self) -> Outcome<T, E>
    where
        I: Into<E>,
    {
        match self {
            Self::Ok(inner) => inner.map_err(Into::into),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

// =============================================================================
// Namespace Helpers
// =============================================================================

/// Collects a sequence of outcomes.
///
/// If every element is `Ok`, returns `Ok` of the values in order. Otherwise
/// returns `Err` of every error found, in order, not just the first.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{self, Outcome};
///
/// let values: [Outcome<i32, &str>; 2] = [Outcome::Ok(1), Outcome::Ok(2)];
/// assert_eq!(outcome::all(values), Outcome::Ok(vec![1, 2]));
/// ```
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) if errors.is_empty() => values.push(value),
            Outcome::Ok(_) => {}
            Outcome::Err(error) => {
                values.clear();
                errors.push(error);
            }
        }
    }
    if errors.is_empty() {
        Outcome::Ok(values)
    } else {
        Outcome::Err(errors)
    }
}

/// Returns the success value, or raises the error payload as a panic.
///
/// Use this at a trust boundary where a failure should propagate as a panic.
///
/// # Panics
///
/// Panics with the error payload if `outcome` is an `Err` value.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{self, Outcome};
///
/// let success: Outcome<i32, String> = Outcome::Ok(3);
/// assert_eq!(outcome::throw_err(success), 3);
/// ```
#[inline]
#[track_caller]
pub fn throw_err<T, E>(outcome: Outcome<T, E>) -> T
where
    E: Any + Send,
{
    outcome.unwrap_or_throw()
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, Vec<E>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        all(iter)
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<u8, u8>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_discriminants_disagree() {
        let success: Outcome<i32, &str> = Outcome::Ok(1);
        let failure: Outcome<i32, &str> = Outcome::Err("e");
        assert!(success.is_ok() && !success.is_err());
        assert!(failure.is_err() && !failure.is_ok());
    }

    #[rstest]
    fn test_map_never_calls_function_on_error() {
        let mut called = false;
        let failure: Outcome<i32, &str> = Outcome::Err("e");
        let mapped = failure.map(|n| {
            called = true;
            n
        });
        assert_eq!(mapped, Outcome::Err("e"));
        assert!(!called);
    }

    #[rstest]
    fn test_map_err_passes_success_through() {
        let success: Outcome<i32, &str> = Outcome::Ok(5);
        assert_eq!(success.map_err(str::len), Outcome::Ok(5));
    }

    #[rstest]
    fn test_bimap_applies_matching_function() {
        let success: Outcome<i32, &str> = Outcome::Ok(5);
        let failure: Outcome<i32, &str> = Outcome::Err("abc");
        assert_eq!(success.bimap(|n| n * 2, str::len), Outcome::Ok(10));
        assert_eq!(failure.bimap(|n| n * 2, str::len), Outcome::Err(3));
    }

    #[rstest]
    #[case(Outcome::Ok(2), "ok:2")]
    #[case(Outcome::Err("bad"), "err:bad")]
    fn test_fold(#[case] input: Outcome<i32, &str>, #[case] expected: &str) {
        let folded = input.fold(|n| format!("ok:{n}"), |e| format!("err:{e}"));
        assert_eq!(folded, expected);
    }

    #[rstest]
    #[should_panic(expected = "Tried to unwrap Err")]
    fn test_unwrap_on_err_panics() {
        let failure: Outcome<i32, &str> = Outcome::Err("e");
        let _ = failure.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "Tried to unwrapErr Ok")]
    fn test_unwrap_err_on_ok_panics() {
        let success: Outcome<i32, &str> = Outcome::Ok(1);
        let _ = success.unwrap_err();
    }

    #[rstest]
    fn test_unwrap_variants() {
        let success: Outcome<i32, &str> = Outcome::Ok(1);
        let failure: Outcome<i32, &str> = Outcome::Err("four");
        assert_eq!(success.unwrap(), 1);
        assert_eq!(failure.unwrap_err(), "four");
        assert_eq!(failure.unwrap_or(9), 9);
        assert_eq!(failure.unwrap_or_else(|e| i32::try_from(e.len()).unwrap_or(0)), 4);
        assert_eq!(failure.unwrap_or_default(), 0);
    }

    #[rstest]
    fn test_unwrap_or_throw_raises_payload() {
        let failure: Outcome<i32, String> = Outcome::Err("payload".to_string());
        let captured = try_call(move || failure.unwrap_or_throw());
        let thrown = captured.unwrap_err();
        assert_eq!(thrown.downcast::<String>().ok(), Some("payload".to_string()));
    }

    #[rstest]
    fn test_throw_err_returns_success_value() {
        let success: Outcome<&str, String> = Outcome::Ok("fine");
        assert_eq!(throw_err(success), "fine");
    }

    #[rstest]
    fn test_throw_err_raises_error_payload() {
        let captured = try_call(|| throw_err(Outcome::<i32, u32>::Err(7)));
        assert_eq!(captured.unwrap_err().downcast_ref::<u32>(), Some(&7));
    }

    #[rstest]
    fn test_flatten_laws() {
        let ok_ok: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Ok(1));
        let ok_err: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
        let outer_err: Outcome<Outcome<i32, &str>, &str> = Outcome::Err("outer");
        assert_eq!(ok_ok.flatten(), Outcome::Ok(1));
        assert_eq!(ok_err.flatten(), Outcome::Err("inner"));
        assert_eq!(outer_err.flatten(), Outcome::Err("outer"));
    }

    #[rstest]
    fn test_flatten_into_converts_inner_error() {
        let nested: Outcome<Outcome<i32, u8>, u64> = Outcome::Ok(Outcome::Err(3));
        assert_eq!(nested.flatten_into(), Outcome::Err(3_u64));
        let outer: Outcome<Outcome<i32, u8>, u64> = Outcome::Err(9);
        assert_eq!(outer.flatten_into(), Outcome::Err(9_u64));
    }

    #[rstest]
    fn test_all_success_preserves_order() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
        assert_eq!(all(outcomes), Outcome::Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_all_collects_every_error() {
        let outcomes = vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Ok(2), Outcome::Err("b")];
        assert_eq!(all(outcomes), Outcome::Err(vec!["a", "b"]));
    }

    #[rstest]
    fn test_all_empty_is_ok() {
        let outcomes: Vec<Outcome<i32, &str>> = Vec::new();
        assert_eq!(Outcome::all(outcomes), Outcome::Ok(Vec::new()));
    }

    #[rstest]
    fn test_collect_matches_all() {
        let collected: Outcome<Vec<i32>, Vec<&str>> =
            vec![Outcome::Err("x"), Outcome::Ok(1)].into_iter().collect();
        assert_eq!(collected, Outcome::Err(vec!["x"]));
    }

    #[rstest]
    fn test_projection_to_maybe() {
        let success: Outcome<i32, &str> = Outcome::Ok(1);
        let failure: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(success.ok(), Maybe::Some(1));
        assert_eq!(success.err(), Maybe::NONE);
        assert_eq!(failure.ok(), Maybe::NONE);
        assert_eq!(failure.err(), Maybe::Some("e"));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let result: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = result.into();
        assert_eq!(outcome, Outcome::Err("error".to_string()));
        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Err("error".to_string()));
    }

    #[rstest]
    fn test_and_then_and_or_else() {
        let half = |n: i32| if n % 2 == 0 { Outcome::Ok(n / 2) } else { Outcome::Err("odd") };
        assert_eq!(Outcome::Ok(8).and_then(half), Outcome::Ok(4));
        assert_eq!(Outcome::Ok(3).and_then(half), Outcome::Err("odd"));
        let recovered: Outcome<i32, ()> = Outcome::<i32, &str>::Err("odd").or_else(|_| Outcome::Ok(0));
        assert_eq!(recovered, Outcome::Ok(0));
    }

    #[rstest]
    fn test_inspect_err_only_sees_errors() {
        let mut seen = Vec::new();
        let _ = Outcome::<i32, &str>::Ok(1).inspect_err(|e| seen.push(*e));
        let _ = Outcome::<i32, &str>::Err("x").inspect_err(|e| seen.push(*e));
        assert_eq!(seen, vec!["x"]);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Outcome::<i32, &str>::Ok(1)), "Ok(1)");
        assert_eq!(format!("{:?}", Outcome::<i32, &str>::Err("e")), "Err(\"e\")");
    }
}
