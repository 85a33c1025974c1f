//! # Constants
//!
//! Byte layouts of the provider's envelope scheme and the RSA key-size floor.

/// AES-256 content-encryption key length in bytes.
pub const CEK_LEN: usize = 32;

/// AES-GCM nonce length in bytes.
///
/// Any IV that does not decode to exactly this many bytes is rejected before
/// a cipher is ever constructed.
pub const IV_LEN: usize = 12;

/// Length of the GCM authentication tag appended to every encrypted payload.
pub const TAG_LEN: usize = 16;

/// Minimum accepted RSA modulus size in bits for OAEP-SHA256 unwrapping.
pub const MIN_RSA_KEY_BITS: usize = 2048;

/// OAEP-SHA256 overhead: `2 * hLen + 2` bytes of every RSA block.
pub const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;
