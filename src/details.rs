//! # Provider Encryption Details
//!
//! The provider's recording resource carries the wrapped CEK and IV under an
//! `encryption_details` object:
//!
//! ```json
//! { "sid": "RE…", "encryption_details": { "encrypted_cek": "<base64>", "iv": "<base64>" } }
//! ```
//!
//! Only those two fields are read; everything else in the resource is ignored.

use crate::error::EnvelopeError;
use serde::{Deserialize, Serialize};

/// Wrapped CEK and IV for one recording, both still base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionDetails {
    pub encrypted_cek: String,
    pub iv: String,
}

#[derive(Deserialize)]
struct RecordingResource {
    #[serde(default)]
    encryption_details: Option<EncryptionDetails>,
}

impl EncryptionDetails {
    /// Extract the encryption details from a recording resource JSON document.
    ///
    /// Invalid JSON, a missing or null `encryption_details` object, or an empty
    /// `encrypted_cek`/`iv` all yield [`EnvelopeError::MalformedInput`].
    pub fn from_recording_json(json: &str) -> Result<Self, EnvelopeError> {
        let resource: RecordingResource = serde_json::from_str(json).map_err(|e| {
            EnvelopeError::MalformedInput(format!("recording resource is not valid JSON: {e}"))
        })?;

        match resource.encryption_details {
            Some(details) if !details.encrypted_cek.is_empty() && !details.iv.is_empty() => {
                Ok(details)
            }
            _ => Err(EnvelopeError::MalformedInput(
                "encryption details not found in recording resource".into(),
            )),
        }
    }
}
