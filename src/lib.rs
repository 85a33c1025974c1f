// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod details;
pub mod encryptor;
pub mod error;

// High-level API
pub use builders::DecryptConfig;
pub use crypto::private_key::KeySource;
pub use decryptor::{decrypt_recording, Mode, RecordingInput};
pub use details::EncryptionDetails;
pub use error::EnvelopeError;

// Building blocks for custom flows
pub use crypto::private_key::{load_private_key, parse_private_key_pem};
pub use decryptor::{decode_iv, decrypt_direct, decrypt_payload, persist_plaintext, unwrap_key};
pub use encryptor::{encrypt_payload, seal_direct, seal_recording, wrap_key, SealedRecording};

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;

pub use rsa::{RsaPrivateKey, RsaPublicKey};
