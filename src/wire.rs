//! Tagged JSON wire form for `Maybe` and `Outcome`.
//!
//! | value         | wire form            |
//! |---------------|----------------------|
//! | `Maybe::Some` | `{"#some": payload}` |
//! | `Maybe::None` | `null`               |
//! | `Outcome::Ok` | `{"#ok": payload}`   |
//! | `Outcome::Err`| `{"#err": payload}`  |
//!
//! The tag keys are reserved. A payload that is itself an object with one
//! of these keys is encoded as-is and is not escaped, so a generic JSON
//! consumer cannot tell it apart from a nested container.
//!
//! Both containers implement `Serialize` and `Deserialize` through this
//! form, so they can be embedded directly in other serde types.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::maybe::Maybe;
//! use outcomes::outcome::Outcome;
//!
//! let present = serde_json::to_string(&Maybe::Some(1)).unwrap();
//! assert_eq!(present, r##"{"#some":1}"##);
//!
//! let failed: Outcome<i32, String> = serde_json::from_str(r##"{"#err":"boom"}"##).unwrap();
//! assert_eq!(failed, Outcome::Err("boom".to_string()));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Key tagging a present `Maybe` payload.
pub const SOME_TAG: &str = "#some";
/// Key tagging a successful `Outcome` payload.
pub const OK_TAG: &str = "#ok";
/// Key tagging a failed `Outcome` payload.
pub const ERR_TAG: &str = "#err";

/// The object `{"#some": value}`.
///
/// The `#some` key is required even when `T` is itself nullable, so `{}`
/// never decodes as a present absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "T: Deserialize<'de>"))]
pub struct SomeTagged<T> {
    /// The present payload.
    #[serde(rename = "#some", deserialize_with = "deserialize_required")]
    pub value: T,
}

// A field with `deserialize_with` reports `missing_field` instead of
// falling back to `deserialize_option` for nullable payloads.
fn deserialize_required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

/// Wire form of a `Maybe<T>`: `null` for absence, a tagged object otherwise.
pub type SerializedMaybe<T> = Option<SomeTagged<T>>;

/// Wire form of an `Outcome<T, E>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerializedOutcome<T, E> {
    /// `{"#ok": value}`
    #[serde(rename = "#ok")]
    Ok(T),
    /// `{"#err": error}`
    #[serde(rename = "#err")]
    Err(E),
}

impl<T> Maybe<T> {
    /// Projects into the wire form.
    ///
    /// Use `as_ref().json()` to project without consuming.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::maybe::Maybe;
    /// use outcomes::wire::SomeTagged;
    ///
    /// assert_eq!(Maybe::Some(3).json(), Some(SomeTagged { value: 3 }));
    /// assert_eq!(Maybe::<i32>::NONE.json(), None);
    /// ```
    #[inline]
    pub fn json(self) -> SerializedMaybe<T> {
        self.into_option().map(|value| SomeTagged { value })
    }

    /// Rebuilds a `Maybe` from its wire form.
    #[inline]
    pub fn parse(wire: SerializedMaybe<T>) -> Self {
        Self::from(wire.map(|tagged| tagged.value))
    }
}

impl<T, E> Outcome<T, E> {
    /// Projects into the wire form.
    ///
    /// Use `as_ref().json()` to project without consuming.
    #[inline]
    pub fn json(self) -> SerializedOutcome<T, E> {
        match self {
            Self::Ok(value) => SerializedOutcome::Ok(value),
            Self::Err(error) => SerializedOutcome::Err(error),
        }
    }

    /// Rebuilds an `Outcome` from its wire form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    /// use outcomes::wire::SerializedOutcome;
    ///
    /// let wire: SerializedOutcome<i32, String> = serde_json::from_str(r##"{"#ok":5}"##).unwrap();
    /// assert_eq!(Outcome::parse(wire), Outcome::Ok(5));
    /// ```
    #[inline]
    pub fn parse(wire: SerializedOutcome<T, E>) -> Self {
        match wire {
            SerializedOutcome::Ok(value) => Self::Ok(value),
            SerializedOutcome::Err(error) => Self::Err(error),
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().json().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        SerializedMaybe::<T>::deserialize(deserializer).map(Self::parse)
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().json().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        SerializedOutcome::<T, E>::deserialize(deserializer).map(Self::parse)
    }
}
