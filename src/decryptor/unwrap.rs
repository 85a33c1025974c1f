//! src/decryptor/unwrap.rs
//! CEK unwrap: RSA-OAEP(SHA-256/MGF1-SHA-256) under the recipient key

use crate::aliases::Cek32;
use crate::consts::CEK_LEN;
use crate::crypto::oaep::oaep_decrypt;
use crate::decryptor::read::decode_b64;
use crate::error::EnvelopeError;
use rsa::RsaPrivateKey;

/// Unwrap the base64 `wrapped_key_b64` into a 32-byte AES-256 CEK.
///
/// - Invalid base64 → [`EnvelopeError::MalformedInput`]
/// - OAEP failure (wrong key, corruption, hash mismatch) → [`EnvelopeError::UnwrapFailed`]
/// - Recovered key that is not exactly 32 bytes → [`EnvelopeError::UnwrapFailed`]
///
/// The recovered bytes never leave a zeroizing buffer.
#[inline]
pub fn unwrap_key(wrapped_key_b64: &str, private_key: &RsaPrivateKey) -> Result<Cek32, EnvelopeError> {
    let wrapped = decode_b64("wrapped key", wrapped_key_b64)?;

    let recovered = oaep_decrypt(private_key, &wrapped)
        .map_err(|e| EnvelopeError::UnwrapFailed(format!("RSA-OAEP-SHA256 decryption failed: {e}")))?;

    let bytes = recovered.expose_secret();
    if bytes.len() != CEK_LEN {
        return Err(EnvelopeError::UnwrapFailed(format!(
            "unwrapped key is {} bytes, expected {CEK_LEN}",
            bytes.len()
        )));
    }

    let mut cek = Cek32::new([0u8; CEK_LEN]);
    cek.expose_secret_mut().copy_from_slice(bytes);
    Ok(cek)
}
