//! Result → envelope.
//!
//! The payload of the active side is written first, then the discriminator.
//! Map and record payloads are inlined field by field; everything else is
//! nested under the side's key. An inlinable payload that would emit a
//! reserved key is nested instead, so decoding never misreads it.

use crate::envelope::{CASE_FIELD, Side};
use crate::shape::PayloadShape;
use algebra_core::Result;
use serde::ser::{self, Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Borrowed view that serializes a Result as an envelope.
#[derive(Debug)]
pub(crate) struct EnvelopeRef<'a, S, E> {
    result: &'a Result<S, E>,
    inline: bool,
}

impl<'a, S, E> EnvelopeRef<'a, S, E> {
    pub(crate) const fn new(result: &'a Result<S, E>, inline: bool) -> Self {
        Self { result, inline }
    }
}

impl<S, E> Serialize for EnvelopeRef<'_, S, E>
where
    S: Serialize,
    E: Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        let side = match self.result {
            Result::Ok(value) => {
                write_payload(&mut map, Side::Ok, value, self.inline)?;
                Side::Ok
            },
            Result::Err(error) => {
                write_payload(&mut map, Side::Err, error, self.inline)?;
                Side::Err
            },
        };
        map.serialize_entry(CASE_FIELD, side.case().label())?;
        map.end()
    }
}

fn write_payload<M, T>(
    map: &mut M,
    side: Side,
    payload: &T,
    inline: bool,
) -> std::result::Result<(), M::Error>
where
    M: SerializeMap,
    T: Serialize + ?Sized,
{
    if !inline {
        return map.serialize_entry(side.payload_field(), payload);
    }

    let shape = PayloadShape::of(payload).map_err(<M::Error as ser::Error>::custom)?;
    if !shape.is_inlinable() {
        return map.serialize_entry(side.payload_field(), payload);
    }

    match serde_json::to_value(payload).map_err(<M::Error as ser::Error>::custom)? {
        Value::Object(fields) if !fields.keys().any(|key| side.is_reserved(key)) => {
            for (key, value) in &fields {
                map.serialize_entry(key, value)?;
            }
            Ok(())
        },
        Value::Object(fields) => {
            tracing::debug!(
                %side,
                ?shape,
                "Payload uses a reserved envelope key; nesting it under {}",
                side.payload_field()
            );
            map.serialize_entry(side.payload_field(), &fields)
        },
        other => map.serialize_entry(side.payload_field(), &other),
    }
}
