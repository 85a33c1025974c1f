// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_recording(&input, &config)?` for one provider recording.
//! Building blocks: `unwrap_key`, `decrypt_payload`, `decrypt_direct`, `persist_plaintext`
//! and the input helpers in `read` for custom flows.

pub(crate) mod direct;
pub(crate) mod payload;
pub(crate) mod read;
pub(crate) mod recording;
pub(crate) mod unwrap;
pub(crate) mod write;

pub use direct::decrypt_direct;
pub use payload::decrypt_payload;
pub use read::{decode_b64, decode_iv, split_tag};
pub use recording::{decrypt_recording, Mode, RecordingInput, Stage};
pub use unwrap::unwrap_key;
pub use write::persist_plaintext;
