//! Contract-violation errors.
//!
//! Expected failures are modeled as data (`Maybe::None`, `Outcome::Err`).
//! The errors in this module are different: they describe misuse of the API
//! against its own preconditions, such as unwrapping the wrong variant.
//! They are raised with `panic!` at the call site and are never converted
//! back into a modeled failure by this crate.

/// Misuse of a container against a documented precondition.
///
/// The `Display` text of each variant is the exact panic message produced
/// when the violation happens.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::ContractViolation;
///
/// assert_eq!(ContractViolation::UnwrapNone.to_string(), "Tried to unwrap None");
/// assert_eq!(ContractViolation::UnwrapErr.to_string(), "Tried to unwrap Err");
/// assert_eq!(ContractViolation::UnwrapErrOnOk.to_string(), "Tried to unwrapErr Ok");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// `Maybe::unwrap` was called on `None`.
    UnwrapNone,
    /// `Outcome::unwrap` was called on `Err`.
    UnwrapErr,
    /// `Outcome::unwrap_err` was called on `Ok`.
    UnwrapErrOnOk,
}

impl ContractViolation {
    /// Returns the message associated with this violation.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnwrapNone => "Tried to unwrap None",
            Self::UnwrapErr => "Tried to unwrap Err",
            Self::UnwrapErrOnOk => "Tried to unwrapErr Ok",
        }
    }

    /// Raises this violation as a panic.
    ///
    /// # Panics
    ///
    /// Always.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self.message())
    }
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for ContractViolation {}
