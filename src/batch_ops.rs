//! src/batch_ops.rs
//! Parallel decryption of independent recordings

use rayon::prelude::*;

use crate::builders::DecryptConfig;
use crate::decryptor::recording::decrypt_recording_to;
use crate::decryptor::RecordingInput;
use crate::error::EnvelopeError;

/// Decrypt every recording in parallel, one result per input, in input order.
///
/// Recordings share nothing but the config; a failure in one does not affect
/// the others. Each call loads the private key itself. Results stay in memory:
/// the config's output path is not used here, persist individual results with
/// [`persist_plaintext`](crate::decryptor::persist_plaintext).
pub fn decrypt_batch(
    batch: &[RecordingInput],
    config: &DecryptConfig,
) -> Vec<Result<Vec<u8>, EnvelopeError>> {
    batch
        .par_iter()
        .map(|input| decrypt_recording_to(input, config, None))
        .collect()
}
