//! src/decryptor/direct.rs
//! Direct RSA mode: the whole payload is one RSA-OAEP-SHA256 block, no CEK

use crate::crypto::oaep::oaep_decrypt;
use crate::error::EnvelopeError;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

/// Decrypt a payload that was RSA-OAEP-SHA256-encrypted directly.
///
/// Only meaningful for small control payloads: a single block carries at most
/// `modulus_bytes - 66` bytes of plaintext. The payload must be exactly one
/// modulus-sized block.
pub fn decrypt_direct(payload: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>, EnvelopeError> {
    let block_len = private_key.size();
    if payload.len() != block_len {
        return Err(EnvelopeError::MalformedInput(format!(
            "direct RSA payload is {} bytes, expected one {block_len}-byte block",
            payload.len()
        )));
    }

    let plaintext = oaep_decrypt(private_key, payload)
        .map_err(|e| EnvelopeError::UnwrapFailed(format!("RSA-OAEP-SHA256 decryption failed: {e}")))?;

    Ok(plaintext.expose_secret().clone())
}
