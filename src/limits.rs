/// Default maximum nesting depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum container length limit for arrays/maps.
///
/// This is a safety limit; adjust explicitly for your deployment.
pub const DEFAULT_MAX_CONTAINER_LEN: usize = 1 << 16;

/// Decode-time resource limits.
///
/// Limits are enforced deterministically and must not depend on background
/// timers. A limit violation is a definitive decode error, never
/// `Incomplete`: waiting for more input cannot repair an oversized header
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum nesting depth.
    pub max_depth: usize,
    /// Maximum byte-string length.
    pub max_bytes_len: usize,
    /// Maximum array length.
    pub max_array_len: usize,
    /// Maximum map length (pairs).
    pub max_map_len: usize,
}

impl Default for DecodeLimits {
    /// Pure wire semantics: depth guarded at [`DEFAULT_MAX_DEPTH`], lengths
    /// bounded only by the format's 32-bit fields.
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bytes_len: usize::MAX,
            max_array_len: usize::MAX,
            max_map_len: usize::MAX,
        }
    }
}

impl DecodeLimits {
    /// Construct conservative limits derived from a maximum message size.
    ///
    /// The defaults are:
    /// - `max_bytes_len = max_message_bytes`
    /// - `max_array_len` and `max_map_len` are capped by [`DEFAULT_MAX_CONTAINER_LEN`]
    ///
    /// This is a pragmatic baseline. Production deployments should tune these explicitly.
    #[must_use]
    pub fn for_bytes(max_message_bytes: usize) -> Self {
        let max_container_len = max_message_bytes.min(DEFAULT_MAX_CONTAINER_LEN);
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bytes_len: max_message_bytes,
            max_array_len: max_container_len,
            max_map_len: max_container_len,
        }
    }
}
