use core::fmt;

/// The high-level class of an error.
///
/// The codec distinguishes:
/// - **Decode** errors: the input can never form a valid value, no matter how
///   many bytes arrive.
/// - **Encode** errors: the value cannot be represented on the classic wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Decode failure.
    Decode,
    /// Encode failure.
    Encode,
}

/// A structured error code identifying the reason a value was rejected.
///
/// This enum is intentionally stable and string-free to support `no_std` and to remain hot-path friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A reserved tag byte (0xC1, 0xC4–0xC9, 0xD5–0xD9) has no valid
    /// interpretation. Carries the offending byte; the error offset locates
    /// it in the input.
    ReservedTag(u8),
    /// The input ended where a complete value was required.
    UnexpectedEof,
    /// Input contains bytes after the expected single value.
    TrailingBytes,
    /// Arithmetic overflow while computing a length/offset, or a byte-string
    /// or container too long for the wire's 32-bit length fields.
    LengthOverflow,

    /// Nesting depth limit exceeded.
    DepthLimitExceeded,
    /// Byte-string length exceeds limits.
    BytesLenLimitExceeded,
    /// Array length exceeds limits.
    ArrayLenLimitExceeded,
    /// Map length exceeds limits.
    MapLenLimitExceeded,
}

/// A codec error with structured classification, a stable code, and a byte offset.
///
/// Offsets are meaningful for `Decode` errors. For `Encode` errors, `offset` is `0`.
/// For [`ErrorCode::ReservedTag`], `&input[err.offset..]` is the offending
/// suffix of the input, starting at the bad tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The error kind.
    pub kind: ErrorKind,
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input where the error was detected (0 for encode errors).
    pub offset: usize,
}

impl Error {
    /// Construct a decode error at `offset`.
    #[inline]
    #[must_use]
    pub const fn decode(code: ErrorCode, offset: usize) -> Self {
        Self {
            kind: ErrorKind::Decode,
            code,
            offset,
        }
    }

    /// Construct an encoding error.
    #[inline]
    #[must_use]
    pub const fn encode(code: ErrorCode) -> Self {
        Self {
            kind: ErrorKind::Encode,
            code,
            offset: 0,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Encode => write!(f, "msgpack encode failed: ")?,
            ErrorKind::Decode => write!(f, "msgpack decode failed at {}: ", self.offset)?,
        }

        match self.code {
            ErrorCode::ReservedTag(byte) => write!(f, "reserved tag byte 0x{byte:02x}"),
            ErrorCode::UnexpectedEof => f.write_str("unexpected end of input"),
            ErrorCode::TrailingBytes => f.write_str("trailing bytes after value"),
            ErrorCode::LengthOverflow => f.write_str("length overflow"),

            ErrorCode::DepthLimitExceeded => f.write_str("nesting depth limit exceeded"),
            ErrorCode::BytesLenLimitExceeded => {
                f.write_str("byte-string length exceeds decode limits")
            }
            ErrorCode::ArrayLenLimitExceeded => f.write_str("array length exceeds decode limits"),
            ErrorCode::MapLenLimitExceeded => f.write_str("map length exceeds decode limits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
