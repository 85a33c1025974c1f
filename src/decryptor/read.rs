//! src/decryptor/read.rs
//! Input decoding and shape checks: run before any key is touched

use crate::aliases::Iv12;
use crate::consts::{IV_LEN, TAG_LEN};
use crate::error::EnvelopeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decode a standard base64 field; surrounding whitespace is ignored.
///
/// An empty or whitespace-only field is [`EnvelopeError::MalformedInput`].
/// `field` only names the input in the error message.
#[inline]
pub fn decode_b64(field: &str, value: &str) -> Result<Vec<u8>, EnvelopeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EnvelopeError::MalformedInput(format!("{field} is empty")));
    }
    STANDARD
        .decode(value)
        .map_err(|e| EnvelopeError::MalformedInput(format!("{field} is not valid base64: {e}")))
}

/// Decode a base64 IV and enforce the 12-byte GCM nonce length.
#[inline]
pub fn decode_iv(iv_b64: &str) -> Result<Iv12, EnvelopeError> {
    let raw = decode_b64("iv", iv_b64)?;
    let bytes: [u8; IV_LEN] = raw.as_slice().try_into().map_err(|_| {
        EnvelopeError::MalformedInput(format!(
            "iv must decode to {IV_LEN} bytes, got {}",
            raw.len()
        ))
    })?;
    Ok(Iv12::new(bytes))
}

/// Split `ciphertext ‖ tag` into its two parts; the tag is the trailing 16 bytes.
#[inline]
pub fn split_tag(payload: &[u8]) -> Result<(&[u8], &[u8; TAG_LEN]), EnvelopeError> {
    let split_at = payload.len().checked_sub(TAG_LEN).ok_or_else(|| {
        EnvelopeError::MalformedInput(format!(
            "payload is {} bytes, shorter than the {TAG_LEN}-byte tag",
            payload.len()
        ))
    })?;
    let (ciphertext, tag) = payload.split_at(split_at);
    let tag: &[u8; TAG_LEN] = tag
        .try_into()
        .map_err(|_| EnvelopeError::MalformedInput("tag length mismatch".into()))?;
    Ok((ciphertext, tag))
}
