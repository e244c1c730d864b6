//! Value construction macro.
//!
//! This module provides [`value!`], a convenient macro to build
//! [`crate::Value`] trees.
//!
//! Design notes:
//! - The macro is infallible: the classic wire format accepts every
//!   constructible tree, so it returns `Value` directly.
//! - Map keys are full values and use `key => value` syntax; entry order is
//!   kept exactly as written.
//! - String literals become `Bytes` (the classic format has no text type).
//! - Multi-token expressions used as array elements, map keys, or map values
//!   must be parenthesized: `value!([(-1), (2 + 2)])`.

/// Construct a [`crate::Value`] using a JSON-like literal syntax.
///
/// Supported forms:
/// - `value!(nil)` / `value!(null)`
/// - `value!(true)` / `value!(false)`
/// - `value!("text")` (raw bytes)
/// - `value!(b"bytes")`
/// - `value!([ ... ])`
/// - `value!({ key => value, ... })` with arbitrary value-typed keys
/// - `value!(expr)` for any `expr` with an `Into<Value>` conversion
#[macro_export]
macro_rules! value {
    (nil) => {
        $crate::Value::Nil
    };
    (null) => {
        $crate::Value::Nil
    };

    // Array literal: value!([ ... ])
    ([ $($elem:tt),* $(,)? ]) => {{
        let mut items = $crate::__value_macro::Vec::new();
        items.reserve_exact(0usize $(+ { let _ = stringify!($elem); 1usize })*);
        $(
            items.push($crate::value!($elem));
        )*
        $crate::Value::Array(items)
    }};

    // Map literal: value!({ k => v, ... })
    ({ $($key:tt => $val:tt),* $(,)? }) => {{
        let mut entries = $crate::__value_macro::Vec::new();
        entries.reserve_exact(0usize $(+ { let _ = stringify!($key); 1usize })*);
        $(
            entries.push(($crate::value!($key), $crate::value!($val)));
        )*
        $crate::Value::Map(entries)
    }};

    // Fallback: convert an expression into Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Hidden support module used by `value!` expansions.
#[doc(hidden)]
#[allow(missing_docs)]
pub mod __value_macro {
    pub use alloc::vec::Vec;
}
