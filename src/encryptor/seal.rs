//! src/encryptor/seal.rs
//! AES-256-GCM sealing with a fresh CEK/IV per recording

use crate::aliases::{Cek32, Iv12};
use crate::consts::{CEK_LEN, IV_LEN};
use crate::crypto::oaep::{oaep_capacity, oaep_encrypt};
use crate::decryptor::RecordingInput;
use crate::encryptor::wrap::wrap_key;
use crate::error::EnvelopeError;
use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::RsaPublicKey;

/// A hybrid envelope ready to hand to the decryptor.
#[derive(Debug, Clone)]
pub struct SealedRecording {
    /// `ciphertext ‖ tag`
    pub payload: Vec<u8>,
    pub wrapped_key_b64: String,
    pub iv_b64: String,
}

impl SealedRecording {
    #[must_use]
    pub fn into_input(self) -> RecordingInput {
        RecordingInput::new(self.payload)
            .with_wrapped_key(self.wrapped_key_b64)
            .with_iv(self.iv_b64)
    }
}

/// AES-256-GCM encrypt with empty associated data; returns `ciphertext ‖ tag`.
pub fn encrypt_payload(plaintext: &[u8], iv: &Iv12, cek: &Cek32) -> Result<Vec<u8>, EnvelopeError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(cek.expose_secret()));
    let mut buffer = plaintext.to_vec();

    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(iv.expose_secret()), b"", &mut buffer)
        .map_err(|_| EnvelopeError::MalformedInput("plaintext too large for AES-GCM".into()))?;

    buffer.extend_from_slice(&tag);
    Ok(buffer)
}

/// Seal `plaintext` under a freshly generated CEK and IV, wrapping the CEK for `public_key`.
pub fn seal_recording(
    plaintext: &[u8],
    public_key: &RsaPublicKey,
) -> Result<SealedRecording, EnvelopeError> {
    let mut cek = Cek32::new([0u8; CEK_LEN]);
    OsRng.fill_bytes(cek.expose_secret_mut());
    let mut iv = Iv12::new([0u8; IV_LEN]);
    OsRng.fill_bytes(iv.expose_secret_mut());

    let payload = encrypt_payload(plaintext, &iv, &cek)?;
    let wrapped_key_b64 = wrap_key(&cek, public_key)?;

    Ok(SealedRecording {
        payload,
        wrapped_key_b64,
        iv_b64: STANDARD.encode(iv.expose_secret()),
    })
}

/// RSA-OAEP-SHA256-encrypt a small payload directly (direct RSA mode).
///
/// Fails with [`EnvelopeError::MalformedInput`] when `plaintext` exceeds one
/// OAEP block (`modulus_bytes - 66`).
pub fn seal_direct(plaintext: &[u8], public_key: &RsaPublicKey) -> Result<Vec<u8>, EnvelopeError> {
    let capacity = oaep_capacity(public_key);
    if plaintext.len() > capacity {
        return Err(EnvelopeError::MalformedInput(format!(
            "direct RSA payload is {} bytes, at most {capacity} fit in one block",
            plaintext.len()
        )));
    }

    oaep_encrypt(public_key, plaintext).map_err(|e| {
        EnvelopeError::MalformedInput(format!("RSA-OAEP-SHA256 encryption failed: {e}"))
    })
}
