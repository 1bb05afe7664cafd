//! Truthiness of loosely-typed values.
//!
//! Backs [`falsy`](super::falsy), which bridges values whose "emptiness"
//! stands for absence (a zero count, an empty string, a `false` flag) into
//! a [`Maybe`](super::Maybe).

/// Types that have a notion of being falsy.
///
/// Falsy values are `false`, numeric zero, `NaN`, the empty string and a
/// missing `Option`. Everything else is truthy.
///
/// # Examples
///
/// ```rust
/// use outcomes::maybe::Truthy;
///
/// assert!(!0_u8.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!("text".is_truthy());
/// assert!(!Some("").is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
