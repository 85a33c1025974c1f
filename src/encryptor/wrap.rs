//! src/encryptor/wrap.rs
//! CEK wrap: inverse of `decryptor::unwrap_key`

use crate::aliases::Cek32;
use crate::crypto::oaep::oaep_encrypt;
use crate::error::EnvelopeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::RsaPublicKey;

/// RSA-OAEP-SHA256-wrap `cek` under `public_key` and base64-encode the result.
#[inline]
pub fn wrap_key(cek: &Cek32, public_key: &RsaPublicKey) -> Result<String, EnvelopeError> {
    let wrapped = oaep_encrypt(public_key, cek.expose_secret()).map_err(|e| {
        EnvelopeError::MalformedInput(format!("RSA-OAEP-SHA256 wrap failed: {e}"))
    })?;
    Ok(STANDARD.encode(wrapped))
}
