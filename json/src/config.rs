//! Configurable codec.
//!
//! [`ResultCodec`] bundles the encode and decode paths behind a
//! [`CodecConfig`]. The free functions at the crate root use the default
//! configuration.

use crate::decode::decode;
use crate::encode::EnvelopeRef;
use crate::error::{self, CodecError};
use algebra_core::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Codec options.
///
/// # Example
///
/// ```
/// use algebra_json::CodecConfig;
///
/// let config = CodecConfig::default()
///     .with_inline_payloads(false)
///     .with_pretty(true);
/// assert!(!config.inline_payloads);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Write map and record payloads as sibling fields of the discriminator
    pub inline_payloads: bool,
    /// Indent text output
    pub pretty: bool,
}

impl CodecConfig {
    /// Create a configuration with explicit values
    #[must_use]
    pub const fn new(inline_payloads: bool, pretty: bool) -> Self {
        Self {
            inline_payloads,
            pretty,
        }
    }

    /// Set payload inlining
    #[must_use]
    pub const fn with_inline_payloads(mut self, inline_payloads: bool) -> Self {
        self.inline_payloads = inline_payloads;
        self
    }

    /// Set pretty printing
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            inline_payloads: true,
            pretty: false,
        }
    }
}

/// Envelope encoder/decoder with a fixed configuration.
///
/// Decoding accepts both inlined and keyed payloads regardless of
/// [`CodecConfig::inline_payloads`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCodec {
    config: CodecConfig,
}

impl ResultCodec {
    /// Create a codec with the given configuration
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode into a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] when a payload fails to serialize.
    pub fn encode_value<S, E>(&self, result: &Result<S, E>) -> error::Result<Value>
    where
        S: Serialize,
        E: Serialize,
    {
        tracing::trace!(
            ok = result.is_ok(),
            inline = self.config.inline_payloads,
            "Encoding Result"
        );
        serde_json::to_value(self.envelope(result)).map_err(CodecError::Encode)
    }

    /// Encode into JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] when a payload fails to serialize.
    pub fn encode_string<S, E>(&self, result: &Result<S, E>) -> error::Result<String>
    where
        S: Serialize,
        E: Serialize,
    {
        tracing::trace!(
            ok = result.is_ok(),
            pretty = self.config.pretty,
            "Encoding Result"
        );
        let envelope = self.envelope(result);
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(&envelope)
        } else {
            serde_json::to_string(&envelope)
        };
        encoded.map_err(CodecError::Encode)
    }

    /// Encode into UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] when a payload fails to serialize.
    pub fn encode_vec<S, E>(&self, result: &Result<S, E>) -> error::Result<Vec<u8>>
    where
        S: Serialize,
        E: Serialize,
    {
        let envelope = self.envelope(result);
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        };
        encoded.map_err(CodecError::Encode)
    }

    /// Decode a JSON tree.
    ///
    /// # Errors
    ///
    /// Fails when the tree is not an envelope or a payload does not match
    /// its type.
    #[allow(clippy::unused_self)]
    pub fn decode_value<S, E>(&self, value: Value) -> error::Result<Result<S, E>>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        decode(value)
    }

    /// Decode JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] for malformed JSON, otherwise as
    /// [`ResultCodec::decode_value`].
    pub fn decode_str<S, E>(&self, text: &str) -> error::Result<Result<S, E>>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        let value = serde_json::from_str(text).map_err(CodecError::Syntax)?;
        self.decode_value(value)
    }

    /// Decode UTF-8 JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] for malformed JSON, otherwise as
    /// [`ResultCodec::decode_value`].
    pub fn decode_slice<S, E>(&self, bytes: &[u8]) -> error::Result<Result<S, E>>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        let value = serde_json::from_slice(bytes).map_err(CodecError::Syntax)?;
        self.decode_value(value)
    }

    const fn envelope<'a, S, E>(&self, result: &'a Result<S, E>) -> EnvelopeRef<'a, S, E> {
        EnvelopeRef::new(result, self.config.inline_payloads)
    }
}

impl From<CodecConfig> for ResultCodec {
    fn from(config: CodecConfig) -> Self {
        Self::new(config)
    }
}
