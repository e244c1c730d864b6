use alloc::vec::Vec;

use crate::error::{Error, ErrorCode};
use crate::limits::DEFAULT_MAX_DEPTH;
use crate::value::Value;

/// Encode a single value into a fresh buffer.
///
/// Encoding always produces a complete buffer for a complete value; there is
/// no streaming encoder.
///
/// # Errors
///
/// Returns `DepthLimitExceeded` if containers nest deeper than
/// [`DEFAULT_MAX_DEPTH`], or `LengthOverflow` for a byte string or container
/// longer than the wire's 32-bit length fields can carry.
pub fn encode(value: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Encode a single value, appending to `out`.
///
/// On error, `out` is restored to its original length.
///
/// # Errors
///
/// Same conditions as [`encode`].
pub fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<(), Error> {
    let start = out.len();
    encode_value(value, out, 0).map_err(|err| {
        out.truncate(start);
        err
    })
}

fn encode_value(value: &Value, out: &mut Vec<u8>, depth: usize) -> Result<(), Error> {
    match value {
        Value::Nil => out.push(0xc0),
        Value::Bool(false) => out.push(0xc2),
        Value::Bool(true) => out.push(0xc3),
        Value::UInt(n) => put_uint(out, *n),
        // Non-negative integers always take the unsigned forms, even when
        // constructed as `Int`.
        Value::Int(v) => match u64::try_from(*v) {
            Ok(n) => put_uint(out, n),
            Err(_) => put_int(out, *v),
        },
        Value::Float(x) => {
            let mut buf = [0u8; 9];
            buf[0] = 0xcb;
            buf[1..9].copy_from_slice(&x.to_bits().to_be_bytes());
            out.extend_from_slice(&buf);
        }
        Value::Bytes(bytes) => {
            put_raw_header(out, bytes.len())?;
            out.extend_from_slice(bytes);
        }
        Value::Array(items) => {
            let depth = enter(depth)?;
            put_array_header(out, items.len())?;
            for item in items {
                encode_value(item, out, depth)?;
            }
        }
        Value::Map(entries) => {
            let depth = enter(depth)?;
            put_map_header(out, entries.len())?;
            for (key, value) in entries {
                encode_value(key, out, depth)?;
                encode_value(value, out, depth)?;
            }
        }
    }
    Ok(())
}

fn enter(depth: usize) -> Result<usize, Error> {
    let next = depth + 1;
    if next > DEFAULT_MAX_DEPTH {
        return Err(Error::encode(ErrorCode::DepthLimitExceeded));
    }
    Ok(next)
}

fn put_uint(out: &mut Vec<u8>, n: u64) {
    if let Ok(b) = u8::try_from(n) {
        if b < 0x80 {
            out.push(b);
        } else {
            out.push(0xcc);
            out.push(b);
        }
        return;
    }
    if let Ok(w) = u16::try_from(n) {
        out.push(0xcd);
        out.extend_from_slice(&w.to_be_bytes());
        return;
    }
    // The legacy wire keeps u32::MAX out of the 4-byte form.
    match u32::try_from(n) {
        Ok(w) if w != u32::MAX => {
            out.push(0xce);
            out.extend_from_slice(&w.to_be_bytes());
        }
        _ => {
            out.push(0xcf);
            out.extend_from_slice(&n.to_be_bytes());
        }
    }
}

/// Negative integers. Widths follow the legacy thresholds at
/// -32/-256/-65536/-(2^32-1); the payload is the low bits of the
/// two's-complement value at the selected width.
fn put_int(out: &mut Vec<u8>, v: i64) {
    debug_assert!(v < 0);
    let be = v.to_be_bytes();
    if v >= -32 {
        out.push(be[7]);
    } else if v >= -256 {
        out.push(0xd0);
        out.push(be[7]);
    } else if v >= -65_536 {
        out.push(0xd1);
        out.extend_from_slice(&be[6..8]);
    } else if v >= -0xffff_ffff {
        out.push(0xd2);
        out.extend_from_slice(&be[4..8]);
    } else {
        out.push(0xd3);
        out.extend_from_slice(&be);
    }
}

fn put_raw_header(out: &mut Vec<u8>, len: usize) -> Result<(), Error> {
    match u8::try_from(len) {
        // fixraw stops at 5 bytes even though its length field holds 31.
        Ok(small) if small < 6 => out.push(0xa0 | small),
        _ => {
            if let Ok(w) = u16::try_from(len) {
                out.push(0xda);
                out.extend_from_slice(&w.to_be_bytes());
            } else if let Ok(w) = u32::try_from(len) {
                out.push(0xdb);
                out.extend_from_slice(&w.to_be_bytes());
            } else {
                return Err(Error::encode(ErrorCode::LengthOverflow));
            }
        }
    }
    Ok(())
}

fn put_array_header(out: &mut Vec<u8>, len: usize) -> Result<(), Error> {
    match u8::try_from(len) {
        Ok(small) if small < 16 => out.push(0x90 | small),
        _ => {
            if let Ok(w) = u16::try_from(len) {
                out.push(0xdc);
                out.extend_from_slice(&w.to_be_bytes());
            } else if let Ok(w) = u32::try_from(len) {
                out.push(0xdd);
                out.extend_from_slice(&w.to_be_bytes());
            } else {
                return Err(Error::encode(ErrorCode::LengthOverflow));
            }
        }
    }
    Ok(())
}

fn put_map_header(out: &mut Vec<u8>, len: usize) -> Result<(), Error> {
    match u8::try_from(len) {
        Ok(small) if small < 16 => out.push(0x80 | small),
        _ => {
            if let Ok(w) = u16::try_from(len) {
                out.push(0xde);
                out.extend_from_slice(&w.to_be_bytes());
            } else if let Ok(w) = u32::try_from(len) {
                out.push(0xdf);
                out.extend_from_slice(&w.to_be_bytes());
            } else {
                return Err(Error::encode(ErrorCode::LengthOverflow));
            }
        }
    }
    Ok(())
}
