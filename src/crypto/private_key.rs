//! src/crypto/private_key.rs
//! Recipient private key loading.
//!
//! Keys are read fresh on every call; nothing here caches a parsed key, so a
//! rotated key file is picked up by the next recording.

use crate::aliases::PemString;
use crate::consts::MIN_RSA_KEY_BITS;
use crate::error::EnvelopeError;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use std::fmt;
use std::path::{Path, PathBuf};

const PKCS1_LABEL: &str = "RSA PRIVATE KEY";
const PKCS8_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PKCS8_LABEL: &str = "ENCRYPTED PRIVATE KEY";

/// Where the recipient private key comes from.
pub enum KeySource {
    /// PEM file on disk, read once per decryption call.
    Path(PathBuf),
    /// PEM text supplied by the caller (secret manager, test fixture).
    Pem(PemString),
}

impl KeySource {
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    #[must_use]
    pub fn pem(text: impl Into<String>) -> Self {
        Self::Pem(PemString::new(text.into()))
    }

    /// Resolve a key path from the environment variable `var`.
    ///
    /// Only consulted when the caller asks for it; the decryptor itself never
    /// reads process state.
    pub fn from_env(var: &str) -> Result<Self, EnvelopeError> {
        match std::env::var_os(var) {
            Some(value) if !value.is_empty() => Ok(Self::Path(PathBuf::from(value))),
            _ => Err(EnvelopeError::KeyLoadFailed(format!(
                "environment variable {var} is not set"
            ))),
        }
    }
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Pem(_) => f.write_str("Pem([REDACTED])"),
        }
    }
}

/// Load and validate the RSA private key named by `source`.
///
/// Every failure, including a missing file, is [`EnvelopeError::KeyLoadFailed`].
pub fn load_private_key(source: &KeySource, min_bits: usize) -> Result<RsaPrivateKey, EnvelopeError> {
    match source {
        KeySource::Path(path) => {
            let pem = read_pem_file(path)?;
            parse_private_key_pem(pem.expose_secret(), min_bits)
        }
        KeySource::Pem(pem) => parse_private_key_pem(pem.expose_secret(), min_bits),
    }
}

fn read_pem_file(path: &Path) -> Result<PemString, EnvelopeError> {
    std::fs::read_to_string(path)
        .map(PemString::new)
        .map_err(|e| EnvelopeError::KeyLoadFailed(format!("cannot read {}: {e}", path.display())))
}

/// Parse a PKCS#8 (`PRIVATE KEY`) or PKCS#1 (`RSA PRIVATE KEY`) PEM container.
///
/// Text around the PEM block is ignored. The modulus must be at least
/// `max(min_bits, MIN_RSA_KEY_BITS)` bits.
pub fn parse_private_key_pem(pem: &str, min_bits: usize) -> Result<RsaPrivateKey, EnvelopeError> {
    if pem_block(pem, ENCRYPTED_PKCS8_LABEL).is_some() {
        return Err(EnvelopeError::KeyLoadFailed(
            "encrypted private keys are not supported".into(),
        ));
    }

    let key = if let Some(block) = pem_block(pem, PKCS1_LABEL) {
        RsaPrivateKey::from_pkcs1_pem(block)
            .map_err(|e| EnvelopeError::KeyLoadFailed(format!("invalid PKCS#1 RSA key: {e}")))?
    } else if let Some(block) = pem_block(pem, PKCS8_LABEL) {
        RsaPrivateKey::from_pkcs8_pem(block)
            .map_err(|e| EnvelopeError::KeyLoadFailed(format!("invalid PKCS#8 RSA key: {e}")))?
    } else {
        return Err(EnvelopeError::KeyLoadFailed(
            "no RSA private key PEM block found".into(),
        ));
    };

    let required = min_bits.max(MIN_RSA_KEY_BITS);
    let bits = key.n().bits();
    if bits < required {
        return Err(EnvelopeError::KeyLoadFailed(format!(
            "RSA key is {bits} bits, at least {required} required"
        )));
    }

    key.validate()
        .map_err(|e| EnvelopeError::KeyLoadFailed(format!("RSA key failed validation: {e}")))?;

    Ok(key)
}

/// Slice out the first `BEGIN label` … `END label` block, boundaries and final EOL included.
///
/// This only locates the block. Label, encapsulation and base64 body are
/// checked by the `pkcs1`/`pkcs8` PEM decoders the slice is handed to.
fn pem_block<'a>(pem: &'a str, label: &str) -> Option<&'a str> {
    let begin = format!("-----BEGIN {label}-----");
    let end = format!("-----END {label}-----");
    let start = pem.find(&begin)?;
    let mut stop = start + pem[start..].find(&end)? + end.len();
    if pem[stop..].starts_with("\r\n") {
        stop += 2;
    } else if pem[stop..].starts_with('\n') {
        stop += 1;
    }
    Some(&pem[start..stop])
}
