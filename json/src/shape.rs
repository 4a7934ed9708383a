//! Top-level shape of a payload, as reported by its `Serialize` impl.
//!
//! The encoder asks each payload how it serializes before deciding whether
//! to inline it into the envelope. [`PayloadShape::of`] drives the payload's
//! `Serialize` impl into [`ShapeProbe`], a serializer that records which
//! data-model entry point was used and ignores everything nested below it.
//!
//! | `Serialize` calls                          | Shape      | Inlined |
//! |--------------------------------------------|------------|---------|
//! | `serialize_map`                            | `Map`      | yes     |
//! | `serialize_struct`                         | `Record`   | yes     |
//! | `serialize_none` / `serialize_unit(_struct)` | `Null`   | no      |
//! | scalars, `serialize_unit_variant`          | `Scalar`   | no      |
//! | `serialize_seq` / `serialize_tuple(_struct)` | `Sequence` | no    |
//! | newtype, tuple and struct variants         | `Variant`  | no      |
//!
//! `serialize_some` and `serialize_newtype_struct` are transparent: the
//! shape is the shape of the wrapped value.

use serde::ser::{self, Serialize};
use std::fmt;
use thiserror::Error;

/// How a payload presents itself at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// `null`
    Null,
    /// A bool, number, string, byte string or unit enum variant
    Scalar,
    /// An array
    Sequence,
    /// An associative container with arbitrary keys
    Map,
    /// A struct with named fields
    Record,
    /// An externally tagged enum variant carrying data
    Variant,
}

impl PayloadShape {
    /// Probe `payload` for its top-level shape.
    ///
    /// # Errors
    ///
    /// Propagates a custom error raised by the payload's own `Serialize` impl.
    pub fn of<T>(payload: &T) -> Result<Self, ShapeError>
    where
        T: Serialize + ?Sized,
    {
        payload.serialize(ShapeProbe)
    }

    /// Whether the payload's fields can live directly in the envelope.
    #[must_use]
    pub const fn is_inlinable(self) -> bool {
        matches!(self, Self::Map | Self::Record)
    }
}

/// Error raised by a payload's `Serialize` impl while being probed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ShapeError(String);

impl ser::Error for ShapeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

/// Serializer that only reports the top-level [`PayloadShape`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeProbe;

/// Compound state for [`ShapeProbe`]: discards elements, keeps the shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeCompound(PayloadShape);

impl ser::Serializer for ShapeProbe {
    type Ok = PayloadShape;
    type Error = ShapeError;
    type SerializeSeq = ShapeCompound;
    type SerializeTuple = ShapeCompound;
    type SerializeTupleStruct = ShapeCompound;
    type SerializeTupleVariant = ShapeCompound;
    type SerializeMap = ShapeCompound;
    type SerializeStruct = ShapeCompound;
    type SerializeStructVariant = ShapeCompound;

    fn serialize_bool(self, _v: bool) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_i8(self, _v: i8) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_i16(self, _v: i16) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_i32(self, _v: i32) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_i64(self, _v: i64) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_i128(self, _v: i128) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_u8(self, _v: u8) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_u16(self, _v: u16) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_u32(self, _v: u32) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_u64(self, _v: u64) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_u128(self, _v: u128) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_f32(self, _v: f32) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_f64(self, _v: f64) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_char(self, _v: char) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_str(self, _v: &str) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_none(self) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<PayloadShape, ShapeError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<PayloadShape, ShapeError> {
        Ok(PayloadShape::Scalar)
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<PayloadShape, ShapeError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<PayloadShape, ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(PayloadShape::Variant)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Sequence))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Sequence))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Map))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Record))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<ShapeCompound, ShapeError> {
        Ok(ShapeCompound(PayloadShape::Variant))
    }
}

impl ser::SerializeSeq for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_element<T>(&mut self, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeTuple for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_element<T>(&mut self, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleStruct for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleVariant for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeMap for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_key<T>(&mut self, _key: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn serialize_value<T>(&mut self, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeStruct for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}

impl ser::SerializeStructVariant for ShapeCompound {
    type Ok = PayloadShape;
    type Error = ShapeError;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<(), ShapeError>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<PayloadShape, ShapeError> {
        Ok(self.0)
    }
}
