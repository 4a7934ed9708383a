//! # Algebra JSON
//!
//! A self-describing JSON envelope for [`algebra_core::Result`].
//!
//! Every envelope is an object with an `@result` discriminator (`"OK"` or
//! `"ERR"`). Map and record payloads are inlined next to it; any other
//! payload is nested under `@ok` or `@error`:
//!
//! ```
//! use algebra_core::Result;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Bean {
//!     value: String,
//! }
//!
//! let result: Result<Bean, String> = Result::ok(Bean { value: "test".into() });
//! let text = algebra_json::to_string(&result)?;
//! assert_eq!(text, r#"{"value":"test","@result":"OK"}"#);
//!
//! let back: Result<Bean, String> = algebra_json::from_str(&text)?;
//! assert_eq!(back, result);
//!
//! let failed: Result<Bean, String> = Result::err("ERROR".into());
//! assert_eq!(
//!     algebra_json::to_string(&failed)?,
//!     r#"{"@error":"ERROR","@result":"ERR"}"#
//! );
//! # Ok::<(), algebra_json::CodecError>(())
//! ```
//!
//! Decoding looks the discriminator up case-insensitively and accepts both
//! the inlined and the keyed form.
//!
//! ## Surfaces
//!
//! - Free functions ([`to_string`], [`from_str`], ...) using the default
//!   [`CodecConfig`]
//! - [`ResultCodec`] for a custom configuration
//! - [`Wire`] and [`as_envelope`] for Results inside larger serde documents
//! - [`HttpResultWrapper`] for HTTP response bodies

mod decode;
mod encode;

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod shape;
pub mod wire;

pub use config::{CodecConfig, ResultCodec};
pub use envelope::{CASE_FIELD, Case, ERROR_FIELD, OK_FIELD, Side};
pub use error::CodecError;
pub use http::HttpResultWrapper;
pub use shape::PayloadShape;
pub use wire::{Wire, as_envelope};

use algebra_core::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const DEFAULT_CODEC: ResultCodec = ResultCodec::new(CodecConfig::new(true, false));

/// Encode a Result into a JSON tree.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when a payload fails to serialize.
pub fn to_value<S, E>(result: &Result<S, E>) -> error::Result<Value>
where
    S: Serialize,
    E: Serialize,
{
    DEFAULT_CODEC.encode_value(result)
}

/// Encode a Result into compact JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when a payload fails to serialize.
pub fn to_string<S, E>(result: &Result<S, E>) -> error::Result<String>
where
    S: Serialize,
    E: Serialize,
{
    DEFAULT_CODEC.encode_string(result)
}

/// Encode a Result into indented JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when a payload fails to serialize.
pub fn to_string_pretty<S, E>(result: &Result<S, E>) -> error::Result<String>
where
    S: Serialize,
    E: Serialize,
{
    ResultCodec::new(CodecConfig::default().with_pretty(true)).encode_string(result)
}

/// Encode a Result into compact UTF-8 bytes.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when a payload fails to serialize.
pub fn to_vec<S, E>(result: &Result<S, E>) -> error::Result<Vec<u8>>
where
    S: Serialize,
    E: Serialize,
{
    DEFAULT_CODEC.encode_vec(result)
}

/// Decode a Result from a JSON tree.
///
/// # Errors
///
/// Fails when the tree is not an envelope or a payload does not match its
/// type.
pub fn from_value<S, E>(value: Value) -> error::Result<Result<S, E>>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    DEFAULT_CODEC.decode_value(value)
}

/// Decode a Result from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Syntax`] for malformed JSON, otherwise as
/// [`from_value`].
pub fn from_str<S, E>(text: &str) -> error::Result<Result<S, E>>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    DEFAULT_CODEC.decode_str(text)
}

/// Decode a Result from UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Syntax`] for malformed JSON, otherwise as
/// [`from_value`].
pub fn from_slice<S, E>(bytes: &[u8]) -> error::Result<Result<S, E>>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    DEFAULT_CODEC.decode_slice(bytes)
}
