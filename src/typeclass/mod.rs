//! Type classes implemented by both containers.
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation via GAT
//! - [`Functor`]: mapping over the payload
//! - [`Monad`]: sequencing computations on the payload
//!
//! # Examples
//!
//! ```rust
//! use outcomes::maybe::Maybe;
//! use outcomes::outcome::Outcome;
//! use outcomes::typeclass::{Functor, Monad};
//!
//! fn increment<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Maybe::Some(1)), Maybe::Some(2));
//! assert_eq!(increment(Outcome::<i32, ()>::Ok(1)), Outcome::Ok(2));
//! assert_eq!(Maybe::pure(1).flat_map(|n| Maybe::Some(n * 3)), Maybe::Some(3));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
