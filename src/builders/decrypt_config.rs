//! src/builders/decrypt_config.rs
//! Per-call decryption configuration

use crate::consts::MIN_RSA_KEY_BITS;
use crate::crypto::private_key::KeySource;
use crate::decryptor::Mode;
use std::path::{Path, PathBuf};

/// Everything `decrypt_recording` needs besides the recording itself.
///
/// Defaults: [`Mode::Auto`], no output file, [`MIN_RSA_KEY_BITS`] key floor.
///
/// # Thread Safety
///
/// This type is `Send + Sync` and holds no mutable state; one config can be
/// shared by concurrent decryptions of different recordings.
#[derive(Debug)]
pub struct DecryptConfig {
    key_source: KeySource,
    mode: Mode,
    output_path: Option<PathBuf>,
    min_key_bits: usize,
}

impl DecryptConfig {
    #[must_use]
    pub fn new(key_source: KeySource) -> Self {
        Self {
            key_source,
            mode: Mode::Auto,
            output_path: None,
            min_key_bits: MIN_RSA_KEY_BITS,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Persist verified plaintext here (temp file + atomic rename).
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Raise the minimum RSA modulus size; values below 2048 are ignored.
    #[must_use]
    pub fn with_min_key_bits(mut self, bits: usize) -> Self {
        self.min_key_bits = bits.max(MIN_RSA_KEY_BITS);
        self
    }

    #[must_use]
    pub fn key_source(&self) -> &KeySource {
        &self.key_source
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    #[must_use]
    pub const fn min_key_bits(&self) -> usize {
        self.min_key_bits
    }
}
