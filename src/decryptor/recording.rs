//! src/decryptor/recording.rs
//! Decrypt one recording: mode selection, key load, unwrap, verify, persist

use crate::builders::DecryptConfig;
use crate::crypto::private_key::load_private_key;
use crate::decryptor::direct::decrypt_direct;
use crate::decryptor::payload::decrypt_payload;
use crate::decryptor::read::{decode_iv, split_tag};
use crate::decryptor::unwrap::unwrap_key;
use crate::decryptor::write::persist_plaintext;
use crate::details::EncryptionDetails;
use crate::error::EnvelopeError;
use std::fmt;
use std::path::Path;
use tracing::{debug, instrument, warn, Span};

/// How `decrypt_recording` picks between hybrid and direct RSA decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Hybrid when a wrapped key is present, direct RSA otherwise.
    #[default]
    Auto,
    /// Wrapped key and IV are both required.
    Hybrid,
    /// Neither wrapped key nor IV may be supplied.
    Direct,
}

/// Progress of a single recording through the decryptor.
///
/// A failure at any step is terminal for that call; the error is returned to
/// the caller together with a log line naming the last stage reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    KeyLoaded,
    KeyUnwrapped,
    PayloadVerified,
    Decrypted,
}

/// One encrypted recording as handed over by the provider.
#[derive(Clone, Default)]
pub struct RecordingInput {
    recording_id: Option<String>,
    payload: Vec<u8>,
    wrapped_key_b64: Option<String>,
    iv_b64: Option<String>,
}

impl RecordingInput {
    /// Raw payload bytes: `ciphertext ‖ tag` in hybrid mode, one RSA block in direct mode.
    #[must_use]
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Identifier used only as log context.
    #[must_use]
    pub fn with_recording_id(mut self, recording_id: impl Into<String>) -> Self {
        self.recording_id = Some(recording_id.into());
        self
    }

    #[must_use]
    pub fn with_wrapped_key(mut self, wrapped_key_b64: impl Into<String>) -> Self {
        self.wrapped_key_b64 = Some(wrapped_key_b64.into());
        self
    }

    #[must_use]
    pub fn with_iv(mut self, iv_b64: impl Into<String>) -> Self {
        self.iv_b64 = Some(iv_b64.into());
        self
    }

    /// Attach the wrapped key and IV from a provider recording resource.
    #[must_use]
    pub fn with_encryption_details(self, details: EncryptionDetails) -> Self {
        let EncryptionDetails { encrypted_cek, iv } = details;
        self.with_wrapped_key(encrypted_cek).with_iv(iv)
    }

    #[must_use]
    pub fn recording_id(&self) -> Option<&str> {
        self.recording_id.as_deref()
    }

    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    #[must_use]
    pub fn wrapped_key(&self) -> Option<&str> {
        self.wrapped_key_b64.as_deref()
    }

    #[must_use]
    pub fn iv(&self) -> Option<&str> {
        self.iv_b64.as_deref()
    }
}

impl fmt::Debug for RecordingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingInput")
            .field("recording_id", &self.recording_id)
            .field("payload_len", &self.payload.len())
            .field("has_wrapped_key", &self.wrapped_key_b64.is_some())
            .field("has_iv", &self.iv_b64.is_some())
            .finish()
    }
}

enum Envelope<'a> {
    Hybrid { wrapped_key_b64: &'a str, iv_b64: &'a str },
    Direct,
}

impl Envelope<'_> {
    const fn label(&self) -> &'static str {
        match self {
            Self::Hybrid { .. } => "hybrid",
            Self::Direct => "direct",
        }
    }
}

fn select_envelope(mode: Mode, input: &RecordingInput) -> Result<Envelope<'_>, EnvelopeError> {
    for (field, value) in [("wrapped key", input.wrapped_key()), ("iv", input.iv())] {
        if value.is_some_and(|v| v.trim().is_empty()) {
            return Err(EnvelopeError::MalformedInput(format!("{field} is empty")));
        }
    }

    match (mode, input.wrapped_key(), input.iv()) {
        (Mode::Auto | Mode::Hybrid, Some(wrapped_key_b64), Some(iv_b64)) => Ok(Envelope::Hybrid {
            wrapped_key_b64,
            iv_b64,
        }),
        (Mode::Auto | Mode::Direct, None, None) => Ok(Envelope::Direct),
        (Mode::Auto, Some(_), None) => Err(EnvelopeError::MalformedInput(
            "wrapped key supplied without an iv".into(),
        )),
        (Mode::Auto, None, Some(_)) => Err(EnvelopeError::MalformedInput(
            "iv supplied without a wrapped key".into(),
        )),
        (Mode::Hybrid, _, _) => Err(EnvelopeError::MalformedInput(
            "hybrid mode requires both a wrapped key and an iv".into(),
        )),
        (Mode::Direct, _, _) => Err(EnvelopeError::MalformedInput(
            "direct mode does not accept a wrapped key or iv".into(),
        )),
    }
}

/// Decrypt one recording and, if the config names an output path, persist it.
///
/// The mode comes from [`DecryptConfig::mode`]; with [`Mode::Auto`] a present
/// wrapped key selects hybrid decryption and its absence selects direct RSA.
/// AES-GCM is never attempted without an unwrapped CEK.
///
/// The private key is loaded inside this call and dropped before it returns.
/// The output file is written only after the plaintext is fully verified, and
/// atomically, so a failed call never creates or modifies it.
pub fn decrypt_recording(
    input: &RecordingInput,
    config: &DecryptConfig,
) -> Result<Vec<u8>, EnvelopeError> {
    decrypt_recording_to(input, config, config.output_path())
}

#[instrument(
    skip_all,
    fields(recording = input.recording_id().unwrap_or("-"), mode = tracing::field::Empty)
)]
pub(crate) fn decrypt_recording_to(
    input: &RecordingInput,
    config: &DecryptConfig,
    output: Option<&Path>,
) -> Result<Vec<u8>, EnvelopeError> {
    let mut stage = Stage::Received;
    let result = run(input, config, output, &mut stage);
    if let Err(e) = &result {
        warn!(kind = e.kind(), reached = ?stage, "recording decryption failed");
    }
    result
}

fn advance(stage: &mut Stage, next: Stage) {
    *stage = next;
    debug!(stage = ?next, "recording stage");
}

fn run(
    input: &RecordingInput,
    config: &DecryptConfig,
    output: Option<&Path>,
    stage: &mut Stage,
) -> Result<Vec<u8>, EnvelopeError> {
    let envelope = select_envelope(config.mode(), input)?;
    Span::current().record("mode", envelope.label());
    debug!(payload_len = input.payload().len(), "recording received");

    let plaintext = match envelope {
        Envelope::Hybrid {
            wrapped_key_b64,
            iv_b64,
        } => {
            // Shape checks happen before any key material is touched.
            let iv = decode_iv(iv_b64)?;
            split_tag(input.payload())?;

            let private_key = load_private_key(config.key_source(), config.min_key_bits())?;
            advance(stage, Stage::KeyLoaded);

            let cek = unwrap_key(wrapped_key_b64, &private_key)?;
            drop(private_key);
            advance(stage, Stage::KeyUnwrapped);

            let plaintext = decrypt_payload(input.payload(), &iv, &cek)?;
            advance(stage, Stage::PayloadVerified);
            plaintext
        }
        Envelope::Direct => {
            let private_key = load_private_key(config.key_source(), config.min_key_bits())?;
            advance(stage, Stage::KeyLoaded);

            let plaintext = decrypt_direct(input.payload(), &private_key)?;
            advance(stage, Stage::PayloadVerified);
            plaintext
        }
    };

    if let Some(path) = output {
        persist_plaintext(path, &plaintext)?;
    }

    advance(stage, Stage::Decrypted);
    Ok(plaintext)
}
