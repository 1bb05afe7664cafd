//! Monad type class - sequencing computations that produce containers.
//!
//! # Laws
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! m.flat_map(Self::pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Types that can sequence a computation on their payload.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::Outcome;
/// use outcomes::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Outcome::Ok(n / 2) } else { Outcome::Err("odd") };
/// assert_eq!(Outcome::pure(8).flat_map(halve).flat_map(halve), Outcome::Ok(2));
/// assert_eq!(Outcome::pure(6).flat_map(halve).flat_map(halve), Outcome::Err("odd"));
/// ```
pub trait Monad: Functor {
    /// Lifts a payload into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Applies `function` to the payload and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first payload.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn pure(value: T) -> Self {
        Self::Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
