//! Envelope → Result.
//!
//! The discriminator is located by name and removed; whatever remains is the
//! payload. A payload key for the selected side wins when present, otherwise
//! the remaining object as a whole is decoded as the payload type. That one
//! fallback covers both flattened maps and inlined records.

use crate::envelope::{CASE_FIELD, Case, Side, kind};
use crate::error::{self, CodecError};
use algebra_core::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decode an envelope tree into a Result.
pub(crate) fn decode<S, E>(envelope: Value) -> error::Result<Result<S, E>>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    let mut fields = match envelope {
        Value::Object(fields) => fields,
        other => {
            let found = kind(&other);
            tracing::debug!(found, "Rejected envelope: not an object");
            return Err(CodecError::NotAnObject { found });
        },
    };

    let Some(discriminator) = fields.shift_remove(CASE_FIELD) else {
        tracing::debug!("Rejected envelope: no {CASE_FIELD} field");
        return Err(CodecError::MissingDiscriminator);
    };

    match Case::from_value(&discriminator)? {
        Case::Ok => decode_payload(fields, Side::Ok).map(Result::Ok),
        Case::Err => decode_payload(fields, Side::Err).map(Result::Err),
    }
}

fn decode_payload<T>(mut fields: Map<String, Value>, side: Side) -> error::Result<T>
where
    T: DeserializeOwned,
{
    let payload = if let Some(payload) = fields.shift_remove(side.payload_field()) {
        tracing::trace!(%side, keyed = true, "Decoding payload");
        payload
    } else {
        tracing::trace!(%side, keyed = false, fields = fields.len(), "Decoding payload");
        Value::Object(fields)
    };

    serde_json::from_value(payload).map_err(|source| CodecError::Payload { side, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_core::NullValue;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Bean {
        value: String,
    }

    #[test]
    fn keyed_payload() {
        let decoded: error::Result<Result<String, String>> =
            decode(json!({"@ok": "test", "@result": "OK"}));
        assert_eq!(decoded.ok(), Some(Result::ok("test".to_string())));
    }

    #[test]
    fn inlined_record() {
        let decoded: error::Result<Result<Bean, String>> =
            decode(json!({"@result": "ok", "value": "test"}));
        assert_eq!(
            decoded.ok(),
            Some(Result::ok(Bean {
                value: "test".to_string()
            }))
        );
    }

    #[test]
    fn inlined_map_without_discriminator_entry() {
        let decoded: error::Result<Result<String, HashMap<String, i32>>> =
            decode(json!({"a": 1, "@result": "ERR", "b": 2}));
        let expected: HashMap<String, i32> =
            [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
        assert_eq!(decoded.ok(), Some(Result::err(expected)));
    }

    #[test]
    fn null_payloads() {
        let keyed: error::Result<Result<NullValue, String>> =
            decode(json!({"@ok": null, "@result": "OK"}));
        assert_eq!(keyed.ok(), Some(Result::<NullValue, String>::null_ok()));

        let bare: error::Result<Result<String, NullValue>> = decode(json!({"@result": "ERR"}));
        assert_eq!(bare.ok(), Some(Result::<String, NullValue>::null_err()));
    }

    #[test]
    fn missing_discriminator_is_an_error() {
        let decoded: error::Result<Result<String, String>> = decode(json!({"@ok": "test"}));
        assert!(matches!(decoded, Err(CodecError::MissingDiscriminator)));
    }

    #[test]
    fn nested_discriminator_does_not_count() {
        let decoded: error::Result<Result<Value, String>> =
            decode(json!({"@ok": {"@result": "OK"}}));
        assert!(matches!(decoded, Err(CodecError::MissingDiscriminator)));
    }

    #[test]
    fn unknown_case_is_an_error() {
        let decoded: error::Result<Result<String, String>> =
            decode(json!({"@ok": "test", "@result": "MAYBE"}));
        assert!(matches!(decoded, Err(CodecError::InvalidDiscriminator(_))));
    }

    #[test]
    fn non_object_is_an_error() {
        let decoded: error::Result<Result<String, String>> = decode(json!(["OK"]));
        assert!(matches!(
            decoded,
            Err(CodecError::NotAnObject { found: "an array" })
        ));
    }

    #[test]
    fn payload_type_mismatch_reports_the_side() {
        let decoded: error::Result<Result<String, u32>> =
            decode(json!({"@error": "not a number", "@result": "ERR"}));
        assert!(matches!(
            decoded,
            Err(CodecError::Payload { side: Side::Err, .. })
        ));
    }
}
