//! # msgpack-classic
//!
//! Encode/decode engine for the **classic** (pre-2013) MessagePack wire
//! format: the revision with a single `raw` family (no str/bin split, no
//! ext types).
//!
//! ## Design principles
//!
//! - **Byte-exact form selection.**
//!   The legacy width thresholds are normative, not "one valid form among
//!   several": two conforming encoders must produce identical bytes for
//!   identical values. [`encode`] reproduces them exactly, including the
//!   quirks (fixraw only below 6 bytes, `u32::MAX` in the 8-byte form).
//! - **Incremental decode.**
//!   [`decode`] consumes one complete value from the front of a buffer and
//!   returns the remainder. When the buffer holds a valid but incomplete
//!   prefix it reports [`Decoded::Incomplete`], which is distinct from both
//!   success and error. The caller owns the transport buffer: append newly
//!   arrived bytes and retry.
//! - **The codec is pure.**
//!   Encode and decode are synchronous functions of their input with no
//!   shared state; calls may run concurrently across threads with no
//!   coordination.
//!
//! ## Wire format
//!
//! | Tag | Form |
//! |------------|------|
//! | 0x00–0x7F  | positive fixint |
//! | 0x80–0x8F  | fixmap (4-bit pair count) |
//! | 0x90–0x9F  | fixarray (4-bit length) |
//! | 0xA0–0xBF  | fixraw (5-bit length) |
//! | 0xC0       | nil |
//! | 0xC2/0xC3  | false/true |
//! | 0xCA/0xCB  | float32 (decode only) / float64 |
//! | 0xCC–0xCF  | uint 8/16/32/64 |
//! | 0xD0–0xD3  | int 8/16/32/64 |
//! | 0xDA/0xDB  | raw 16/32 |
//! | 0xDC/0xDD  | array 16/32 |
//! | 0xDE/0xDF  | map 16/32 |
//!
//! Multi-byte integers, lengths, and counts are big-endian. Tags 0xC1,
//! 0xC4–0xC9, and 0xD5–0xD9 are reserved and always malformed; 0xD4 is
//! unassigned and reported as incomplete.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`Error`].
//! - `serde`: [`Value`] implements `Serialize`/`Deserialize`, plus
//!   `to_vec`/`from_slice` adapters over the wire format (implies `std`).
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible. Owned `Value` trees require `alloc`
//! and therefore an allocator provided by your environment.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod limits;
mod macros;
#[cfg(feature = "serde")]
mod serde_impl;
mod stream;
mod value;
mod wire;

pub use crate::decode::{decode, decode_with_limits, Decoded};
pub use crate::encode::{encode, encode_into};
pub use crate::error::{Error, ErrorCode, ErrorKind};
pub use crate::limits::{DecodeLimits, DEFAULT_MAX_CONTAINER_LEN, DEFAULT_MAX_DEPTH};
pub use crate::stream::{decode_all, decode_all_with_limits};
pub use crate::value::{Kind, Value};

#[doc(hidden)]
pub use crate::macros::__value_macro;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use crate::serde_impl::{from_slice, from_value, to_value, to_vec, SerdeError};
