//! src/crypto/oaep.rs
//! RSA-OAEP with SHA-256 as both the label hash and the MGF1 hash.
//!
//! OAEP decryption is not tolerant of hash mismatches: a wrapped key produced
//! with any other digest pairing fails here instead of yielding garbage.

use crate::aliases::SecretBytes;
use crate::consts::OAEP_SHA256_OVERHEAD;
use aes_gcm::aead::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

/// `Oaep::new` uses the same digest for the label hash and MGF1.
#[inline(always)]
fn padding() -> Oaep {
    Oaep::new::<Sha256>()
}

/// RSA-OAEP-SHA256 decrypt; output is wrapped for zeroize-on-drop.
#[inline]
pub fn oaep_decrypt(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<SecretBytes, rsa::Error> {
    key.decrypt(padding(), ciphertext).map(SecretBytes::new)
}

/// RSA-OAEP-SHA256 encrypt under `key` with fresh OS randomness.
#[inline]
pub fn oaep_encrypt(key: &RsaPublicKey, message: &[u8]) -> Result<Vec<u8>, rsa::Error> {
    key.encrypt(&mut OsRng, padding(), message)
}

/// Largest message a single OAEP-SHA256 block can carry under `key`.
#[inline]
pub fn oaep_capacity(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(OAEP_SHA256_OVERHEAD)
}
