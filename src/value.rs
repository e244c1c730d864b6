use alloc::string::String;
use alloc::vec::Vec;

/// A value representable on the classic MessagePack wire.
///
/// This is a closed sum type: the variant set is fixed by the wire format,
/// and the decoder dispatches over it exhaustively. Map entries are an
/// ordered list of pairs; keys are not required to be unique and entry order
/// survives encode/decode exactly. Map semantics (key uniqueness, lookup) are
/// a caller concern.
///
/// `Int` carries negative values only by convention: non-negative integers
/// always take the unsigned forms on the wire, and the decoder normalizes
/// signed wire forms carrying a non-negative payload into `UInt`. Encoding a
/// caller-constructed `Int(n)` with `n >= 0` likewise emits the unsigned
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The nil value (tag 0xC0).
    Nil,
    /// A boolean (tags 0xC2/0xC3).
    Bool(bool),
    /// A negative integer (negative fixint, tags 0xD0–0xD3).
    Int(i64),
    /// An unsigned integer (positive fixint, tags 0xCC–0xCF).
    UInt(u64),
    /// An IEEE-754 double (tag 0xCB). Always encoded at 64-bit width.
    Float(f64),
    /// An opaque byte string (fixraw, tags 0xDA/0xDB). The classic format
    /// has no separate text type; strings travel as raw bytes.
    Bytes(Vec<u8>),
    /// An ordered sequence of values (fixarray, tags 0xDC/0xDD).
    Array(Vec<Value>),
    /// An ordered sequence of key/value pairs (fixmap, tags 0xDE/0xDF).
    Map(Vec<(Value, Value)>),
}

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Nil.
    Nil,
    /// Boolean.
    Bool,
    /// Negative integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// Float64.
    Float,
    /// Raw byte string.
    Bytes,
    /// Array.
    Array,
    /// Map.
    Map,
}

impl Value {
    /// The kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::UInt(_) => Kind::UInt,
            Self::Float(_) => Kind::Float,
            Self::Bytes(_) => Kind::Bytes,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns `true` iff this is `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Return the boolean value if this is a `Bool`.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the unsigned value if this is a `UInt`.
    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the integer as an `i64` if this is an `Int`, or a `UInt` small
    /// enough to fit.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Return the float value if this is a `Float`.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the raw bytes if this is a `Bytes`.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Return the elements if this is an `Array`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Return the entries if this is a `Map`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Non-negative integers take the `UInt` variant, mirroring the wire's
/// single-integer semantics.
fn from_i64(v: i64) -> Value {
    u64::try_from(v).map_or(Value::Int(v), Value::UInt)
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::UInt(u64::from(v))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                from_i64(i64::from(v))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Bytes(v.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Bytes(v.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(v: &[u8; N]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(v: Vec<(Value, Value)>) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
