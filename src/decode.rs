use alloc::vec::Vec;

use crate::error::{Error, ErrorCode};
use crate::limits::DecodeLimits;
use crate::value::Value;
use crate::wire::{Cursor, Halt};

/// Cap on up-front element reservations, so a hostile 32-bit count cannot
/// force a huge allocation before any element bytes exist.
const PREALLOC_CAP: usize = 4096;

/// Outcome of a single decode step.
///
/// `Incomplete` is not an error: it means the buffer holds a valid but
/// incomplete prefix of some value, and the caller should retry once more
/// bytes have been appended. It is distinct from both success and the
/// malformed-input [`Error`] so buffering loops can branch on it without
/// conflating "wait" with "fail".
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<'a> {
    /// One complete value, plus the input bytes that follow it.
    Complete(Value, &'a [u8]),
    /// The buffer ends before the leading value is complete.
    Incomplete,
}

/// Decode one value from the front of `input`.
///
/// Consumes as many leading bytes as form one complete value (recursing
/// through containers) and returns the unconsumed remainder. No partial
/// container is ever surfaced: `Incomplete` anywhere inside a nested
/// array/map aborts the whole step.
///
/// # Errors
///
/// Returns an error if the input can never decode, no matter how many bytes
/// arrive: a reserved tag byte, or a [`DecodeLimits`] violation.
pub fn decode(input: &[u8]) -> Result<Decoded<'_>, Error> {
    decode_with_limits(input, DecodeLimits::default())
}

/// Decode one value from the front of `input`, enforcing `limits`.
///
/// # Errors
///
/// Same conditions as [`decode`].
pub fn decode_with_limits(input: &[u8], limits: DecodeLimits) -> Result<Decoded<'_>, Error> {
    let mut cursor = Cursor::new(input);
    match decode_one(&mut cursor, &limits, 0) {
        Ok(value) => Ok(Decoded::Complete(value, cursor.rest())),
        Err(Halt::Incomplete) => Ok(Decoded::Incomplete),
        Err(Halt::Failed(err)) => Err(err),
    }
}

/// Single-step dispatch on the leading tag byte.
///
/// The match covers all 256 byte values with no wildcard arm, so a missing
/// tag is a compile-time gap rather than a silent fallthrough.
fn decode_one(cur: &mut Cursor<'_>, limits: &DecodeLimits, depth: usize) -> Result<Value, Halt> {
    let off = cur.position();
    let tag = cur.take_u8()?;
    match tag {
        0x00..=0x7f => Ok(Value::UInt(u64::from(tag))),
        0x80..=0x8f => decode_map(cur, limits, usize::from(tag & 0x0f), depth, off),
        0x90..=0x9f => decode_array(cur, limits, usize::from(tag & 0x0f), depth, off),
        // The decoder accepts the full 5-bit fixraw length, 0 through 31,
        // even though the encoder stops at 5.
        0xa0..=0xbf => decode_raw(cur, limits, usize::from(tag & 0x1f), off),
        0xc0 => Ok(Value::Nil),
        // No valid continuation exists for a reserved tag, so it is malformed
        // immediately, however few bytes are on hand.
        0xc1 | 0xc4..=0xc9 | 0xd5..=0xd9 => {
            Err(Halt::Failed(Error::decode(ErrorCode::ReservedTag(tag), off)))
        }
        0xc2 => Ok(Value::Bool(false)),
        0xc3 => Ok(Value::Bool(true)),
        // float32 is never emitted but is accepted and widened on decode.
        0xca => {
            let bits = cur.take_be_u32()?;
            Ok(Value::Float(f64::from(f32::from_bits(bits))))
        }
        0xcb => {
            let bits = cur.take_be_u64()?;
            Ok(Value::Float(f64::from_bits(bits)))
        }
        0xcc => Ok(Value::UInt(u64::from(cur.take_u8()?))),
        0xcd => Ok(Value::UInt(u64::from(cur.take_be_u16()?))),
        0xce => Ok(Value::UInt(u64::from(cur.take_be_u32()?))),
        0xcf => Ok(Value::UInt(cur.take_be_u64()?)),
        0xd0 => Ok(int_value(i64::from(cur.take_be_i8()?))),
        0xd1 => Ok(int_value(i64::from(cur.take_be_i16()?))),
        0xd2 => Ok(int_value(i64::from(cur.take_be_i32()?))),
        0xd3 => Ok(int_value(cur.take_be_i64()?)),
        // 0xD4 carries no assigned form and is not reserved; it falls to the
        // optimistic default and waits for a format revision that never
        // arrives. The caller's transport timeout owns that case.
        0xd4 => Err(Halt::Incomplete),
        0xda => {
            let len = cur.take_be_u16()?;
            decode_raw(cur, limits, usize::from(len), off)
        }
        0xdb => {
            let len = cur.take_be_u32()?;
            decode_raw(cur, limits, len_to_usize(len, off)?, off)
        }
        0xdc => {
            let len = cur.take_be_u16()?;
            decode_array(cur, limits, usize::from(len), depth, off)
        }
        0xdd => {
            let len = cur.take_be_u32()?;
            decode_array(cur, limits, len_to_usize(len, off)?, depth, off)
        }
        0xde => {
            let len = cur.take_be_u16()?;
            decode_map(cur, limits, usize::from(len), depth, off)
        }
        0xdf => {
            let len = cur.take_be_u32()?;
            decode_map(cur, limits, len_to_usize(len, off)?, depth, off)
        }
        0xe0..=0xff => Ok(Value::Int(i64::from(i8::from_be_bytes([tag])))),
    }
}

/// Signed wire forms carrying a non-negative payload normalize to `UInt`, so
/// `Int` holds negative values only in every decoder-produced tree.
fn int_value(v: i64) -> Value {
    u64::try_from(v).map_or(Value::Int(v), Value::UInt)
}

fn len_to_usize(len: u32, off: usize) -> Result<usize, Halt> {
    usize::try_from(len).map_err(|_| Halt::Failed(Error::decode(ErrorCode::LengthOverflow, off)))
}

fn enter(limits: &DecodeLimits, depth: usize, off: usize) -> Result<usize, Halt> {
    let next = depth + 1;
    if next > limits.max_depth {
        return Err(Halt::Failed(Error::decode(
            ErrorCode::DepthLimitExceeded,
            off,
        )));
    }
    Ok(next)
}

fn decode_raw(
    cur: &mut Cursor<'_>,
    limits: &DecodeLimits,
    len: usize,
    off: usize,
) -> Result<Value, Halt> {
    if len > limits.max_bytes_len {
        return Err(Halt::Failed(Error::decode(
            ErrorCode::BytesLenLimitExceeded,
            off,
        )));
    }
    let bytes = cur.take(len)?;
    Ok(Value::Bytes(bytes.to_vec()))
}

/// Decode exactly `len` elements by repeated single-step decode.
/// `Incomplete` and malformed errors propagate unchanged.
fn decode_array(
    cur: &mut Cursor<'_>,
    limits: &DecodeLimits,
    len: usize,
    depth: usize,
    off: usize,
) -> Result<Value, Halt> {
    if len > limits.max_array_len {
        return Err(Halt::Failed(Error::decode(
            ErrorCode::ArrayLenLimitExceeded,
            off,
        )));
    }
    let depth = enter(limits, depth, off)?;
    let mut items = Vec::with_capacity(len.min(PREALLOC_CAP));
    for _ in 0..len {
        items.push(decode_one(cur, limits, depth)?);
    }
    Ok(Value::Array(items))
}

/// Decode exactly `len` key/value pairs, preserving pair order as encoded.
fn decode_map(
    cur: &mut Cursor<'_>,
    limits: &DecodeLimits,
    len: usize,
    depth: usize,
    off: usize,
) -> Result<Value, Halt> {
    if len > limits.max_map_len {
        return Err(Halt::Failed(Error::decode(
            ErrorCode::MapLenLimitExceeded,
            off,
        )));
    }
    let depth = enter(limits, depth, off)?;
    let mut entries = Vec::with_capacity(len.min(PREALLOC_CAP));
    for _ in 0..len {
        let key = decode_one(cur, limits, depth)?;
        let value = decode_one(cur, limits, depth)?;
        entries.push((key, value));
    }
    Ok(Value::Map(entries))
}
