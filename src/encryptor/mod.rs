// src/encryptor/mod.rs

//! Sender-side sealing: the exact mirror of `decryptor`.
//!
//! Produces envelopes in the provider's layout (`ciphertext ‖ tag`, base64
//! OAEP-wrapped CEK, base64 IV) for fixtures, round-trip checks and benchmarks.

pub(crate) mod seal;
pub(crate) mod wrap;

pub use seal::{encrypt_payload, seal_direct, seal_recording, SealedRecording};
pub use wrap::wrap_key;
