//! src/decryptor/payload.rs
//! AES-256-GCM payload decryption: tag verified before a single byte is released

use crate::aliases::{Cek32, Iv12};
use crate::decryptor::read::split_tag;
use crate::error::EnvelopeError;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce, Tag};

/// Decrypt `ciphertext ‖ tag` with the unwrapped CEK and 12-byte IV.
///
/// Associated data is empty. `decrypt_in_place_detached` checks the tag over the
/// ciphertext first and only then applies the keystream, so on
/// [`EnvelopeError::AuthenticationFailed`] the working buffer still holds
/// ciphertext and is dropped without being returned.
#[inline]
pub fn decrypt_payload(
    ciphertext_with_tag: &[u8],
    iv: &Iv12,
    cek: &Cek32,
) -> Result<Vec<u8>, EnvelopeError> {
    let (ciphertext, tag) = split_tag(ciphertext_with_tag)?;

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(cek.expose_secret()));
    let mut buffer = ciphertext.to_vec();

    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(iv.expose_secret()),
            b"",
            &mut buffer,
            Tag::from_slice(tag),
        )
        .map_err(|_| EnvelopeError::AuthenticationFailed)?;

    Ok(buffer)
}
