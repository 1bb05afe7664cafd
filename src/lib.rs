//! # outcomes
//!
//! Immutable optionality and fallible-result containers for Rust, with a
//! tagged JSON wire form that keeps the present/absent and success/failure
//! distinction across a serialization boundary.
//!
//! ## Overview
//!
//! - **[`Maybe`](maybe::Maybe)**: `Some(value)` or `None`, with `map`,
//!   `filter`, `inspect`, `or`, `flatten` and the unwrap family
//! - **[`Outcome`](outcome::Outcome)**: `Ok(value)` or `Err(error)`, with
//!   `map`, `map_err`, `fold`, `flatten`, fail-slow [`all`](outcome::all) and
//!   the bridges to and from panics
//! - **Wire form**: `{"#some": v}` / `null`, `{"#ok": v}` / `{"#err": e}`
//! - **Type classes**: `Functor` and `Monad` for both containers
//!
//! Expected failures are values. Misusing the API, such as unwrapping the
//! wrong variant, is a contract violation and panics at the call site
//! (see [`error::ContractViolation`]).
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Functor`, `Monad`
//! - `serde`: wire form and `Serialize`/`Deserialize` impls
//! - `async`: `wrap_async`, `try_call_async`, `wrap_future`, `wrap_promise`
//! - `tracing`: trace events at the panic bridges
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! let port = maybe::nullish(Some(8080))
//!     .filter(|port| *port > 1024)
//!     .ok_or("privileged port");
//! assert_eq!(port, Outcome::Ok(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports both containers, their free constructors, and the enabled
/// type classes.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ContractViolation;
    pub use crate::maybe::{self, Maybe, Truthy, none, some};
    pub use crate::outcome::{self, Outcome, Thrown, err, ok};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod maybe;
pub mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "serde")]
pub mod wire;

mod trace;
