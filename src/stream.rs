use alloc::vec::Vec;

use crate::decode::{decode_with_limits, Decoded};
use crate::error::{Error, ErrorCode};
use crate::limits::DecodeLimits;
use crate::value::Value;

/// Decode every value in a buffer of back-to-back complete encodings.
///
/// Intended for batch/offline decoding of a buffer known to contain only
/// complete values. An empty buffer yields an empty sequence.
///
/// # Errors
///
/// A buffer ending in a partial value is a caller contract violation and
/// surfaces as `UnexpectedEof` at the offset where the partial value began.
/// Malformed input errors propagate with their offset into the full buffer.
pub fn decode_all(input: &[u8]) -> Result<Vec<Value>, Error> {
    decode_all_with_limits(input, DecodeLimits::default())
}

/// Decode every value in a buffer, enforcing `limits` on each.
///
/// # Errors
///
/// Same conditions as [`decode_all`].
pub fn decode_all_with_limits(input: &[u8], limits: DecodeLimits) -> Result<Vec<Value>, Error> {
    let mut values = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let off = input.len() - rest.len();
        match decode_with_limits(rest, limits) {
            Ok(Decoded::Complete(value, remainder)) => {
                values.push(value);
                rest = remainder;
            }
            Ok(Decoded::Incomplete) => {
                return Err(Error::decode(ErrorCode::UnexpectedEof, off));
            }
            // Rebase the offset from the current tail to the full buffer.
            Err(err) => return Err(Error::decode(err.code, off + err.offset)),
        }
    }
    Ok(values)
}
