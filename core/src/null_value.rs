//! The "no value" payload sentinel.
//!
//! [`NullValue`] fills a side of a [`Result`](crate::Result) that has nothing
//! meaningful to carry. It serializes as an explicit JSON `null`, and it
//! deserializes from `null` or from an empty object without looking any
//! further, so an envelope whose payload key was dropped still decodes.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unit payload standing in for "no value" on either side of a Result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NullValue;

impl NullValue {
    /// The single instance.
    pub const INSTANCE: Self = Self;

    /// Returns the single instance.
    #[must_use]
    pub const fn get() -> Self {
        Self
    }
}

impl fmt::Display for NullValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

impl Serialize for NullValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for NullValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NullValueVisitor)
    }
}

struct NullValueVisitor;

impl<'de> Visitor<'de> for NullValueVisitor {
    type Value = NullValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or an empty object")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NullValue)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NullValue)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        match map.next_key::<de::IgnoredAny>()? {
            None => Ok(NullValue),
            Some(_) => Err(de::Error::invalid_length(1, &self)),
        }
    }
}
