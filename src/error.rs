//! # Error Types
//!
//! This module defines the error type returned by every decryption step.
//! All operations return [`Result<T, EnvelopeError>`](EnvelopeError).

use thiserror::Error;

/// The error type for all envelope operations.
///
/// The first four variants are the decryption failure kinds a caller must be
/// able to tell apart. None of them is retryable with the same inputs.
/// Messages carry context only, never key, CEK or plaintext bytes.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Input does not have the expected shape.
    ///
    /// Raised for:
    /// - base64 decode failures (wrapped key, IV)
    /// - payloads shorter than the 16-byte GCM tag
    /// - IVs that do not decode to exactly 12 bytes
    /// - a wrapped key / IV combination that does not match the selected mode
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The recipient private key could not be loaded.
    ///
    /// Missing file, unreadable PEM, non-RSA or encrypted key material, or a
    /// modulus below the configured bit floor.
    #[error("Key load failed: {0}")]
    KeyLoadFailed(String),

    /// RSA-OAEP decryption of the wrapped key failed.
    ///
    /// Wrong private key, corrupted wrapped key, OAEP hash mismatch between
    /// sender and receiver, or a recovered key of unexpected length.
    #[error("Key unwrap failed: {0}")]
    UnwrapFailed(String),

    /// GCM tag verification failed. No plaintext was produced.
    #[error("Authentication failed: ciphertext or tag did not verify")]
    AuthenticationFailed,

    /// Writing the decrypted output file failed.
    ///
    /// Only raised by the optional persistence step; key-file I/O is reported
    /// as [`EnvelopeError::KeyLoadFailed`].
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvelopeError {
    /// Stable, secret-free label for structured log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::KeyLoadFailed(_) => "key_load_failed",
            Self::UnwrapFailed(_) => "unwrap_failed",
            Self::AuthenticationFailed => "authentication_failed",
            Self::Io(_) => "io",
        }
    }
}
