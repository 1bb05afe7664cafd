//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] records the payload type and
//! how to re-apply the constructor to another payload, which is enough to
//! state [`Functor`](super::Functor) and [`Monad`](super::Monad) once for
//! both containers.

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type constructor applied to a payload type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use outcomes::maybe::Maybe;
/// use outcomes::typeclass::TypeConstructor;
///
/// fn absent<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let none_string: Maybe<String> = absent(Maybe::Some(42));
/// assert!(none_string.is_none());
/// ```
pub trait TypeConstructor {
    /// The payload type, `T` for `Maybe<T>` and for `Outcome<T, E>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn outcome_inner_type_is_success_payload() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Outcome<String, u8>>();
    }

    #[test]
    fn outcome_with_type_keeps_error_type() {
        fn rebuild<T: TypeConstructor>() -> Option<T::WithType<bool>> {
            None
        }
        let rebuilt: Option<Outcome<bool, u8>> = rebuild::<Outcome<String, u8>>();
        assert!(rebuilt.is_none());
    }
}
