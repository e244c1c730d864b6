//! serde integration.
//!
//! [`Value`] trees implement `Serialize` and `Deserialize` against serde's
//! self-describing data model, and [`to_vec`]/[`from_slice`] drive arbitrary
//! serde types over the classic wire format by way of a `Value` tree.
//!
//! Mapping notes:
//! - Strings and chars become `Bytes` (the classic format has no text type);
//!   deserializing a `String` from a `Bytes` value re-checks UTF-8.
//! - Integers normalize through the same split as the wire: non-negative
//!   values are unsigned, `Int` holds negatives only.
//! - Unit variants serialize as the variant name in `Bytes`; data-carrying
//!   variants serialize as a single-entry map keyed by the variant name.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, Visitor};
use serde::ser::{
    self, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant,
};
use serde::{forward_to_deserialize_any, Deserialize, Serialize, Serializer};

use crate::decode::{decode_with_limits, Decoded};
use crate::encode::encode;
use crate::error::{Error, ErrorCode};
use crate::limits::DecodeLimits;
use crate::value::Value;

/// Error produced by the serde adapters.
#[derive(Debug)]
pub enum SerdeError {
    /// Wire-level codec failure.
    Codec(Error),
    /// serde-originated failure.
    Message(String),
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(err) => fmt::Display::fmt(err, f),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for SerdeError {}

impl From<Error> for SerdeError {
    fn from(err: Error) -> Self {
        Self::Codec(err)
    }
}

impl ser::Error for SerdeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }
}

impl de::Error for SerdeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }
}

/// Serialize `value` to classic MessagePack bytes.
///
/// # Errors
///
/// Returns an error if `value` does not map onto the wire's data model or if
/// encoding fails.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, SerdeError>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    encode(&tree).map_err(SerdeError::Codec)
}

/// Serialize `value` into an owned [`Value`] tree.
///
/// # Errors
///
/// Returns an error if `value` does not map onto the wire's data model.
pub fn to_value<T>(value: &T) -> Result<Value, SerdeError>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserialize a `T` from a buffer holding exactly one encoded value.
///
/// # Errors
///
/// Returns `UnexpectedEof` for a truncated buffer, `TrailingBytes` if input
/// follows the value, any decode error, or a serde error if the decoded tree
/// does not fit `T`.
pub fn from_slice<T>(bytes: &[u8], limits: DecodeLimits) -> Result<T, SerdeError>
where
    T: de::DeserializeOwned,
{
    match decode_with_limits(bytes, limits).map_err(SerdeError::Codec)? {
        Decoded::Complete(value, rest) => {
            if !rest.is_empty() {
                let off = bytes.len() - rest.len();
                return Err(SerdeError::Codec(Error::decode(
                    ErrorCode::TrailingBytes,
                    off,
                )));
            }
            from_value(value)
        }
        Decoded::Incomplete => Err(SerdeError::Codec(Error::decode(ErrorCode::UnexpectedEof, 0))),
    }
}

/// Deserialize a `T` from a decoded [`Value`] tree.
///
/// # Errors
///
/// Returns a serde error if the tree does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T, SerdeError>
where
    T: de::DeserializeOwned,
{
    T::deserialize(value)
}

fn int_value(v: i64) -> Value {
    u64::try_from(v).map_or(Value::Int(v), Value::UInt)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Bytes(b) => serializer.serialize_bytes(b),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a classic MessagePack value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(int_value(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::UInt(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Value, E> {
        Ok(Value::Bytes(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D: serde::Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(Value::Map(entries))
    }
}

/// Serializer that builds an owned [`Value`] tree.
struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerdeError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = VariantSeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = VariantMapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, SerdeError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, SerdeError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, SerdeError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, SerdeError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, SerdeError> {
        Ok(int_value(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, SerdeError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, SerdeError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, SerdeError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, SerdeError> {
        Ok(Value::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, SerdeError> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, SerdeError> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, SerdeError> {
        let mut buf = [0u8; 4];
        Ok(Value::Bytes(v.encode_utf8(&mut buf).as_bytes().to_vec()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, SerdeError> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, SerdeError> {
        Ok(Value::from(v))
    }

    fn serialize_none(self) -> Result<Value, SerdeError> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, SerdeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, SerdeError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, SerdeError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, SerdeError> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value, SerdeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, SerdeError>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(Self)?;
        Ok(Value::Map(alloc::vec![(Value::from(variant), inner)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, SerdeError> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, SerdeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, SerdeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqBuilder, SerdeError> {
        Ok(VariantSeqBuilder {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, SerdeError> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapBuilder, SerdeError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantMapBuilder, SerdeError> {
        Ok(VariantMapBuilder {
            variant,
            entries: Vec::with_capacity(len),
        })
    }
}

struct SeqBuilder {
    items: Vec<Value>,
}

impl SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, SerdeError> {
        Ok(Value::Array(self.items))
    }
}

impl SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, SerdeError> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, SerdeError> {
        SerializeSeq::end(self)
    }
}

struct VariantSeqBuilder {
    variant: &'static str,
    items: Vec<Value>,
}

impl SerializeTupleVariant for VariantSeqBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, SerdeError> {
        Ok(Value::Map(alloc::vec![(
            Value::from(self.variant),
            Value::Array(self.items),
        )]))
    }
}

struct MapBuilder {
    entries: Vec<(Value, Value)>,
    pending: Option<Value>,
}

impl SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        self.pending = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending
            .take()
            .ok_or_else(|| SerdeError::Message("map value serialized before key".to_string()))?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, SerdeError> {
        Ok(Value::Map(self.entries))
    }
}

impl SerializeStruct for MapBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        self.entries.push((Value::from(key), to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, SerdeError> {
        Ok(Value::Map(self.entries))
    }
}

struct VariantMapBuilder {
    variant: &'static str,
    entries: Vec<(Value, Value)>,
}

impl SerializeStructVariant for VariantMapBuilder {
    type Ok = Value;
    type Error = SerdeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), SerdeError>
    where
        T: ?Sized + Serialize,
    {
        self.entries.push((Value::from(key), to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, SerdeError> {
        Ok(Value::Map(alloc::vec![(
            Value::from(self.variant),
            Value::Map(self.entries),
        )]))
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = SerdeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, SerdeError> {
        match self {
            Self::Nil => visitor.visit_unit(),
            Self::Bool(v) => visitor.visit_bool(v),
            Self::Int(v) => visitor.visit_i64(v),
            Self::UInt(v) => visitor.visit_u64(v),
            Self::Float(v) => visitor.visit_f64(v),
            Self::Bytes(b) => visitor.visit_byte_buf(b),
            Self::Array(items) => visitor.visit_seq(SeqDeserializer {
                iter: items.into_iter(),
            }),
            Self::Map(entries) => visitor.visit_map(MapDeserializer {
                iter: entries.into_iter(),
                pending: None,
            }),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, SerdeError> {
        match self {
            Self::Nil => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, SerdeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, SerdeError> {
        match self {
            bytes @ Self::Bytes(_) => visitor.visit_enum(EnumDeserializer {
                variant: bytes,
                value: None,
            }),
            Self::Map(mut entries) if entries.len() == 1 => {
                let (variant, value) = entries.remove(0);
                visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: Some(value),
                })
            }
            _ => Err(de::Error::custom(
                "enum must be a variant name or a single-entry map",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: alloc::vec::IntoIter<Value>,
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = SerdeError;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, SerdeError> {
        self.iter.next().map(|v| seed.deserialize(v)).transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: alloc::vec::IntoIter<(Value, Value)>,
    pending: Option<Value>,
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = SerdeError;

    fn next_key_seed<K: de::DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, SerdeError> {
        match self.iter.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: de::DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> Result<V::Value, SerdeError> {
        match self.pending.take() {
            Some(value) => seed.deserialize(value),
            None => Err(de::Error::custom("map value requested before key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: Value,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = SerdeError;
    type Variant = VariantDeserializer;

    fn variant_seed<V: de::DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, VariantDeserializer), SerdeError> {
        let tag = seed.deserialize(self.variant)?;
        Ok((tag, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = SerdeError;

    fn unit_variant(self) -> Result<(), SerdeError> {
        match self.value {
            None => Ok(()),
            Some(_) => Err(de::Error::custom("unexpected payload for unit variant")),
        }
    }

    fn newtype_variant_seed<T: de::DeserializeSeed<'de>>(
        self,
        seed: T,
    ) -> Result<T::Value, SerdeError> {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => Err(de::Error::custom("missing payload for newtype variant")),
        }
    }

    fn tuple_variant<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, SerdeError> {
        match self.value {
            Some(Value::Array(items)) => visitor.visit_seq(SeqDeserializer {
                iter: items.into_iter(),
            }),
            _ => Err(de::Error::custom("tuple variant payload must be an array")),
        }
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, SerdeError> {
        match self.value {
            Some(Value::Map(entries)) => visitor.visit_map(MapDeserializer {
                iter: entries.into_iter(),
                pending: None,
            }),
            _ => Err(de::Error::custom("struct variant payload must be a map")),
        }
    }
}
