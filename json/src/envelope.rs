//! Fixed tokens of the wire envelope.
//!
//! An envelope is a JSON object carrying the discriminator [`CASE_FIELD`]
//! plus one payload: either inlined as sibling fields or nested under
//! [`OK_FIELD`] / [`ERROR_FIELD`].
//!
//! ```text
//! {"value":"test","@result":"OK"}        record payload, inlined
//! {"@ok":["val0","val1"],"@result":"OK"} sequence payload, keyed
//! {"@error":"ERROR","@result":"ERR"}     scalar payload, keyed
//! ```

use crate::error::CodecError;
use serde_json::Value;
use std::fmt;

/// Name of the discriminator field.
pub const CASE_FIELD: &str = "@result";

/// Key for a success payload that is not inlined.
pub const OK_FIELD: &str = "@ok";

/// Key for an error payload that is not inlined.
pub const ERROR_FIELD: &str = "@error";

/// Discriminator value naming the variant an envelope encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Success
    Ok,
    /// Error
    Err,
}

impl Case {
    /// Canonical (upper-case) label written on encode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Err => "ERR",
        }
    }

    /// Parse a discriminator label, ignoring ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case(Self::Ok.label()) {
            Some(Self::Ok)
        } else if label.eq_ignore_ascii_case(Self::Err.label()) {
            Some(Self::Err)
        } else {
            None
        }
    }

    /// Read the discriminator out of its JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDiscriminator`] when the value is not a
    /// string or names neither case.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .and_then(Self::from_label)
            .ok_or_else(|| CodecError::InvalidDiscriminator(value.to_string()))
    }

    /// The payload side this case selects.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Ok => Side::Ok,
            Self::Err => Side::Err,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two payload slots of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Success payload slot
    Ok,
    /// Error payload slot
    Err,
}

impl Side {
    /// Key used when the payload is not inlined.
    #[must_use]
    pub const fn payload_field(self) -> &'static str {
        match self {
            Self::Ok => OK_FIELD,
            Self::Err => ERROR_FIELD,
        }
    }

    /// Discriminator written for this side.
    #[must_use]
    pub const fn case(self) -> Case {
        match self {
            Self::Ok => Case::Ok,
            Self::Err => Case::Err,
        }
    }

    /// Whether an inlined field named `key` would make the envelope ambiguous.
    #[must_use]
    pub fn is_reserved(self, key: &str) -> bool {
        key == CASE_FIELD || key == self.payload_field()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Err => f.write_str("error"),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
