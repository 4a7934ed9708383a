//! Error types for envelope encoding and decoding.

use crate::envelope::Side;
use thiserror::Error;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while turning a Result into an envelope or back.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is valid JSON but not an object.
    #[error("Could not decode input as a Result: expected an object, found {found}")]
    NotAnObject {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// The discriminator field is absent.
    #[error("Could not decode input as a Result. The required @result field is missing.")]
    MissingDiscriminator,

    /// The discriminator is not a string naming one of the two cases.
    #[error("Could not decode input as a Result: invalid @result value {0}")]
    InvalidDiscriminator(String),

    /// The payload cannot be decoded into the requested type.
    #[error("Failed to decode {side} payload: {source}")]
    Payload {
        /// Side the payload belongs to
        side: Side,
        /// Underlying decoder failure
        #[source]
        source: serde_json::Error,
    },

    /// A payload's own serialization failed.
    #[error("Failed to encode Result: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input bytes are not JSON.
    #[error("Failed to parse JSON: {0}")]
    Syntax(#[source] serde_json::Error),
}

impl CodecError {
    /// `true` for every failure raised while decoding.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        !self.is_encode()
    }

    /// `true` when a payload failed to serialize.
    #[must_use]
    pub const fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }
}
