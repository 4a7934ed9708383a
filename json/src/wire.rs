//! Serde integration for embedding Results in larger documents.
//!
//! [`Wire`] is a transparent newtype whose `Serialize`/`Deserialize` impls
//! use the envelope format. For a field of plain [`Result`] type use
//! `#[serde(with = "algebra_json::as_envelope")]` instead.

use algebra_core::Result;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A [`Result`] that serializes as an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wire<S, E>(pub Result<S, E>);

impl<S, E> Wire<S, E> {
    /// Unwrap the inner Result.
    pub fn into_inner(self) -> Result<S, E> {
        self.0
    }
}

impl<S, E> From<Result<S, E>> for Wire<S, E> {
    fn from(result: Result<S, E>) -> Self {
        Self(result)
    }
}

impl<S, E> From<Wire<S, E>> for Result<S, E> {
    fn from(wire: Wire<S, E>) -> Self {
        wire.0
    }
}

impl<S, E> Serialize for Wire<S, E>
where
    S: Serialize,
    E: Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        as_envelope::serialize(&self.0, serializer)
    }
}

impl<'de, S, E> Deserialize<'de> for Wire<S, E>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        as_envelope::deserialize(deserializer).map(Self)
    }
}

/// `#[serde(with = "...")]` adapter for [`Result`] fields.
pub mod as_envelope {
    use crate::decode::decode;
    use crate::encode::EnvelopeRef;
    use algebra_core::Result;
    use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
    use serde::ser::{Serialize, Serializer};
    use serde_json::Value;

    /// Serialize a Result as an envelope with inlining enabled.
    ///
    /// # Errors
    ///
    /// Propagates the payload's own serialization error.
    pub fn serialize<S, E, Z>(
        result: &Result<S, E>,
        serializer: Z,
    ) -> std::result::Result<Z::Ok, Z::Error>
    where
        S: Serialize,
        E: Serialize,
        Z: Serializer,
    {
        EnvelopeRef::new(result, true).serialize(serializer)
    }

    /// Deserialize a Result from an envelope.
    ///
    /// The envelope is buffered as a JSON tree first, so this works with any
    /// self-describing format.
    ///
    /// # Errors
    ///
    /// Fails when the input is not a well-formed envelope or a payload does
    /// not match its type.
    pub fn deserialize<'de, S, E, D>(
        deserializer: D,
    ) -> std::result::Result<Result<S, E>, D::Error>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let envelope = Value::deserialize(deserializer)?;
        decode(envelope).map_err(de::Error::custom)
    }
}
