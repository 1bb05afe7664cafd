//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`. It replaces null-based absence with a closed two-variant sum type
//! whose discriminant never changes after construction.
//!
//! Alongside the combinators on [`Maybe`], the module exposes namespace-level
//! helpers that operate over containers generically:
//!
//! - [`eq`] / [`eq_by`]: structural equality with an optional comparator
//! - [`falsy`]: absence for falsy values (see [`Truthy`])
//! - [`nullish`]: absence only for a missing value
//!
//! # Examples
//!
//! ```rust
//! use outcomes::maybe::{self, Maybe};
//!
//! let present = Maybe::Some(21).map(|x| x * 2);
//! assert_eq!(present, Maybe::Some(42));
//!
//! let absent: Maybe<i32> = Maybe::NONE;
//! assert_eq!(absent.unwrap_or(0), 0);
//!
//! assert!(maybe::eq(&maybe::nullish(Some(0)), &Maybe::Some(0)));
//! assert!(maybe::falsy(0).is_none());
//! ```

mod truthy;

pub use truthy::Truthy;

use std::fmt;

use crate::error::ContractViolation;
use crate::outcome::Outcome;

/// A value that may or may not be present.
///
/// Instances are immutable: every combinator consumes or borrows the
/// container and returns a new one. `None` carries no payload, so the
/// absence value is the same for every call site (see [`Maybe::NONE`]).
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::Maybe;
///
/// let name = Maybe::Some("ferris");
/// assert!(name.is_some());
/// assert_eq!(name.filter(|s| s.len() > 10), Maybe::NONE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

/// Creates a present value.
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Returns the shared absence value.
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::NONE
}

impl<T> Maybe<T> {
    /// The absence value.
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// const MISSING: Maybe<u8> = Maybe::NONE;
    /// assert!(MISSING.is_none());
    /// ```
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// Always the negation of [`Maybe::is_some`].
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if a value is present and the predicate holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// assert!(Maybe::Some(4).is_some_and(|n| n % 2 == 0));
    /// assert!(!Maybe::Some(3).is_some_and(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::NONE.is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some("four").map(str::len), Maybe::Some(4));
    /// assert_eq!(Maybe::<&str>::NONE.map(str::len), Maybe::NONE);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if the predicate holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Calls a function on the value for its side effect and returns the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::Some(7).inspect(|n| seen.push(*n));
    /// assert_eq!(value, Maybe::Some(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Chains a computation that may itself produce no value.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns this container if a value is present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).or(Maybe::Some(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::NONE.or(Maybe::Some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns this container if a value is present, otherwise the result
    /// of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => alternative(),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the value, consuming the container.
    ///
    /// Only call this when presence is already established.
    ///
    /// # Panics
    ///
    /// Panics with "Tried to unwrap None" if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(3).unwrap(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use outcomes::maybe::Maybe;
    ///
    /// Maybe::<i32>::NONE.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => ContractViolation::UnwrapNone.raise(),
        }
    }

    /// Returns the value, or `alternative` if absent.
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => alternative,
        }
    }

    /// Returns the value, or computes one if absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, alternative: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => alternative(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Outcome`, using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    /// use outcomes::outcome::Outcome;
    ///
    /// assert_eq!(Maybe::Some(1).ok_or("missing"), Outcome::Ok(1));
    /// assert_eq!(Maybe::<i32>::NONE.ok_or("missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into an `Outcome`, computing the error for the absent case.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error()),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns an iterator over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value, or `T::default()` if absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// Only nested containers can be flattened; anything else is rejected
    /// at compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(1)).flatten(), Maybe::Some(1));
    /// assert_eq!(Maybe::Some(Maybe::<i32>::NONE).flatten(), Maybe::NONE);
    /// assert_eq!(Maybe::<Maybe<i32>>::NONE.flatten(), Maybe::NONE);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use outcomes::maybe::Maybe;
    ///
    /// let _ = Maybe::Some(1).flatten();
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

// =============================================================================
// Namespace Helpers
// =============================================================================

/// Compares two containers with `==` on their payloads.
///
/// Two absent values are equal; a present and an absent value are not.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::{self, Maybe};
///
/// assert!(maybe::eq(&Maybe::Some(1), &Maybe::Some(1)));
/// assert!(!maybe::eq(&Maybe::Some(1), &Maybe::NONE));
/// assert!(maybe::eq::<i32>(&Maybe::NONE, &Maybe::NONE));
/// ```
#[inline]
pub fn eq<T: PartialEq>(left: &Maybe<T>, right: &Maybe<T>) -> bool {
    eq_by(left, right, |a, b| a == b)
}

/// Compares two containers with a custom payload comparator.
///
/// The comparator is only called when both values are present.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::{self, Maybe};
///
/// let same_length = |a: &&str, b: &&str| a.len() == b.len();
/// assert!(maybe::eq_by(&Maybe::Some("abc"), &Maybe::Some("xyz"), same_length));
/// ```
#[inline]
pub fn eq_by<A, B, F>(left: &Maybe<A>, right: &Maybe<B>, comparator: F) -> bool
where
    F: FnOnce(&A, &B) -> bool,
{
    match (left, right) {
        (Maybe::Some(a), Maybe::Some(b)) => comparator(a, b),
        (Maybe::None, Maybe::None) => true,
        _ => false,
    }
}

/// Converts a falsy value into `None` and any truthy value into `Some`.
///
/// See [`Truthy`] for which values count as falsy.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::{self, Maybe};
///
/// assert_eq!(maybe::falsy(0), Maybe::NONE);
/// assert_eq!(maybe::falsy(1), Maybe::Some(1));
/// assert_eq!(maybe::falsy(""), Maybe::NONE);
/// ```
#[inline]
pub fn falsy<T: Truthy>(value: T) -> Maybe<T> {
    if value.is_truthy() {
        Maybe::Some(value)
    } else {
        Maybe::None
    }
}

/// Converts a missing value into `None` and anything else into `Some`,
/// including falsy values such as `0`, `""` and `false`.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::{self, Maybe};
///
/// assert_eq!(maybe::nullish(Some(0)), Maybe::Some(0));
/// assert_eq!(maybe::nullish::<i32>(None), Maybe::NONE);
/// ```
#[inline]
pub fn nullish<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from(value)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_discriminants_disagree() {
        let present = Maybe::Some(1);
        let absent: Maybe<i32> = Maybe::NONE;
        assert!(present.is_some() && !present.is_none());
        assert!(absent.is_none() && !absent.is_some());
    }

    #[rstest]
    fn test_map_present_and_absent() {
        assert_eq!(Maybe::Some(2).map(|x| x + 1), Maybe::Some(3));
        assert_eq!(Maybe::<i32>::NONE.map(|x| x + 1), Maybe::NONE);
    }

    #[rstest]
    fn test_map_does_not_call_function_on_none() {
        let mut called = false;
        let _ = Maybe::<i32>::NONE.map(|x| {
            called = true;
            x
        });
        assert!(!called);
    }

    #[rstest]
    #[case(Maybe::Some(4), Maybe::Some(4))]
    #[case(Maybe::Some(3), Maybe::NONE)]
    #[case(Maybe::NONE, Maybe::NONE)]
    fn test_filter_even(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|n| n % 2 == 0), expected);
    }

    #[rstest]
    fn test_inspect_skips_none() {
        let mut count = 0;
        let result = Maybe::<i32>::NONE.inspect(|_| count += 1);
        assert_eq!(result, Maybe::NONE);
        assert_eq!(count, 0);
    }

    #[rstest]
    fn test_or_keeps_first_present_value() {
        assert_eq!(Maybe::Some(1).or(Maybe::NONE), Maybe::Some(1));
        assert_eq!(Maybe::<i32>::NONE.or(Maybe::NONE), Maybe::NONE);
        assert_eq!(Maybe::NONE.or_else(|| Maybe::Some(9)), Maybe::Some(9));
    }

    #[rstest]
    #[should_panic(expected = "Tried to unwrap None")]
    fn test_unwrap_none_panics() {
        let _ = Maybe::<String>::NONE.unwrap();
    }

    #[rstest]
    fn test_unwrap_fallbacks() {
        assert_eq!(Maybe::Some(1).unwrap_or(5), 1);
        assert_eq!(Maybe::NONE.unwrap_or(5), 5);
        assert_eq!(Maybe::NONE.unwrap_or_else(|| 6), 6);
        assert_eq!(Maybe::<String>::NONE.unwrap_or_default(), String::new());
    }

    #[rstest]
    fn test_flatten_nested() {
        assert_eq!(Maybe::Some(Maybe::Some("x")).flatten(), Maybe::Some("x"));
        assert_eq!(Maybe::Some(Maybe::<&str>::NONE).flatten(), Maybe::NONE);
        assert_eq!(Maybe::<Maybe<&str>>::NONE.flatten(), Maybe::NONE);
    }

    #[rstest]
    fn test_and_then_chains() {
        let parse = |s: &str| Maybe::from(s.parse::<i32>().ok());
        assert_eq!(Maybe::Some("12").and_then(parse), Maybe::Some(12));
        assert_eq!(Maybe::Some("x").and_then(parse), Maybe::NONE);
    }

    #[rstest]
    fn test_eq_helpers() {
        assert!(eq(&Maybe::Some(1), &Maybe::Some(1)));
        assert!(!eq(&Maybe::Some(1), &Maybe::Some(2)));
        assert!(!eq(&Maybe::Some(1), &Maybe::NONE));
        assert!(!eq(&Maybe::NONE, &Maybe::Some(1)));
        assert!(eq::<i32>(&Maybe::NONE, &Maybe::NONE));
    }

    #[rstest]
    fn test_eq_by_honors_comparator() {
        let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert!(eq_by(&Maybe::Some("Rust"), &Maybe::Some("RUST"), ignore_case));
        assert!(!eq(&Maybe::Some("Rust"), &Maybe::Some("RUST")));
    }

    #[rstest]
    fn test_eq_by_skips_comparator_when_absent() {
        let mut called = false;
        let equal = eq_by(&Maybe::<i32>::NONE, &Maybe::<i32>::NONE, |_, _| {
            called = true;
            false
        });
        assert!(equal);
        assert!(!called);
    }

    #[rstest]
    #[case(0, Maybe::NONE)]
    #[case(1, Maybe::Some(1))]
    #[case(-3, Maybe::Some(-3))]
    fn test_falsy_integers(#[case] input: i32, #[case] expected: Maybe<i32>) {
        assert_eq!(falsy(input), expected);
    }

    #[rstest]
    #[case(Some(0), Maybe::Some(0))]
    #[case(Some(7), Maybe::Some(7))]
    #[case(None, Maybe::NONE)]
    fn test_nullish(#[case] input: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(nullish(input), expected);
    }

    #[rstest]
    fn test_nullish_keeps_falsy_values() {
        assert_eq!(nullish(Some(false)), Maybe::Some(false));
        assert_eq!(nullish(Some("")), Maybe::Some(""));
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let option: Option<i32> = Maybe::Some(3).into();
        assert_eq!(option, Some(3));
        assert_eq!(Maybe::from(option), Maybe::Some(3));
        assert_eq!(Option::<i32>::from(Maybe::NONE), None);
    }

    #[rstest]
    fn test_iteration() {
        let collected: Vec<i32> = Maybe::Some(5).into_iter().collect();
        assert_eq!(collected, vec![5]);
        assert_eq!(Maybe::<i32>::NONE.iter().count(), 0);
        assert_eq!((&Maybe::Some(5)).into_iter().next(), Some(&5));
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::Some(1)), "Some(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::NONE), "None");
    }

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Maybe::<i32>::default(), Maybe::NONE);
        assert_eq!(none::<i32>(), Maybe::NONE);
        assert_eq!(some(1), Maybe::Some(1));
    }
}
