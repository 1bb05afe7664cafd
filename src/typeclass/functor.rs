//! Functor type class - mapping over a container's payload.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! `Maybe::None` and `Outcome::Err` pass through unchanged; the function is
//! only called on a present or successful payload.

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Types whose payload can be transformed while preserving their shape.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::Maybe;
/// use outcomes::typeclass::Functor;
///
/// let shown: Maybe<String> = Maybe::Some(5).fmap(|n| n.to_string());
/// assert_eq!(shown, Maybe::Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value)
    }

    /// Discards the payload.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
