//! Synchronous bridges between panics and `Outcome`.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any, resume_unwind};

use super::Outcome;
use crate::trace::trace_event;

/// A panic captured by [`try_call`], [`wrap`] or one of the async adapters.
///
/// Holds the original panic payload. Payloads raised by `panic!` with a
/// message are readable through [`Thrown::message`]; payloads raised by
/// [`Outcome::unwrap_or_throw`] are recovered with [`Thrown::downcast`].
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome;
///
/// let captured = outcome::try_call(|| -> i32 { panic!("boom") });
/// assert_eq!(captured.unwrap_err().message(), Some("boom"));
/// ```
pub struct Thrown {
    payload: Box<dyn Any + Send>,
}

impl Thrown {
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
        trace_event!(
            panic_message = payload_message(payload.as_ref()).unwrap_or("<non-string payload>"),
            "captured panic as Err"
        );
        Self { payload }
    }

    /// Returns the panic message if the payload is a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        payload_message(self.payload.as_ref())
    }

    /// Returns `true` if the payload is of type `E`.
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Returns a reference to the payload if it is of type `E`.
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Recovers the payload as `E`, or returns `self` unchanged if it has a
    /// different type.
    ///
    /// # Errors
    ///
    /// Returns the original `Thrown` when the payload is not an `E`.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        self.payload
            .downcast::<E>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload })
    }

    /// Returns the raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the captured panic without invoking the panic hook.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.debug_tuple("Thrown").field(&message).finish(),
            None => formatter.write_str("Thrown(<non-string payload>)"),
        }
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message().unwrap_or("panic with a non-string payload"))
    }
}

impl std::error::Error for Thrown {}

/// Raises `error` itself as the panic payload.
#[track_caller]
pub(crate) fn throw<E: Any + Send>(error: E) -> ! {
    trace_event!(
        payload = std::any::type_name::<E>(),
        "raising error payload as panic"
    );
    panic_any(error)
}

/// Runs `function` once, capturing a panic as `Err(Thrown)`.
///
/// A normal return becomes `Ok(value)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{self, Outcome};
///
/// assert!(matches!(outcome::try_call(|| 5), Outcome::Ok(5)));
/// assert!(outcome::try_call(|| -> i32 { panic!("boom") }).is_err());
/// ```
pub fn try_call<T, F>(function: F) -> Outcome<T, Thrown>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(Thrown::new(payload)),
    }
}

/// Adapts a function that may panic into one that returns an `Outcome`.
///
/// Each call of the returned function goes through [`try_call`].
/// Functions of several arguments can take a tuple.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome;
///
/// let mut parse = outcome::wrap(|text: &str| text.parse::<i32>().expect("a number"));
/// assert_eq!(parse("5").unwrap(), 5);
/// assert!(parse("five").is_err());
/// ```
pub fn wrap<A, T, F>(mut function: F) -> impl FnMut(A) -> Outcome<T, Thrown>
where
    F: FnMut(A) -> T,
{
    move |argument| try_call(|| function(argument))
}
