//! tests/unwrap_tests.rs
//! Key unwrap failure modes: wrong key, hash mismatch, bad length, bad encoding

mod common;
use common::{key_source, load_vectors, private_key, RECIPIENT_KEY, STRANGER_KEY};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use vmenvelope_rs::{decrypt_recording, unwrap_key, DecryptConfig, EnvelopeError, RecordingInput};

#[test]
fn unwrapping_with_a_different_private_key_fails() {
    let v = load_vectors().hybrid;
    let err = unwrap_key(&v.wrapped_cek_b64, &private_key(STRANGER_KEY)).unwrap_err();
    assert!(matches!(err, EnvelopeError::UnwrapFailed(_)), "got {err:?}");
}

#[test]
fn recording_with_a_different_private_key_never_reaches_gcm() {
    let v = load_vectors().hybrid;
    let input = RecordingInput::new(v.payload())
        .with_wrapped_key(&v.wrapped_cek_b64)
        .with_iv(&v.iv_b64);

    let err = decrypt_recording(&input, &DecryptConfig::new(key_source(STRANGER_KEY))).unwrap_err();
    assert!(matches!(err, EnvelopeError::UnwrapFailed(_)), "got {err:?}");
}

#[test]
fn oaep_sha1_wrapped_key_is_rejected() {
    let vectors = load_vectors();
    let err = unwrap_key(&vectors.wrapped_with_sha1, &private_key(RECIPIENT_KEY)).unwrap_err();
    assert!(matches!(err, EnvelopeError::UnwrapFailed(_)), "got {err:?}");
}

#[test]
fn recovered_key_of_wrong_length_is_an_unwrap_failure() {
    let vectors = load_vectors();
    let err = unwrap_key(&vectors.wrapped_short_cek, &private_key(RECIPIENT_KEY)).unwrap_err();
    match err {
        EnvelopeError::UnwrapFailed(msg) => assert!(msg.contains("16 bytes"), "{msg}"),
        other => panic!("expected UnwrapFailed, got {other:?}"),
    }
}

#[test]
fn corrupted_wrapped_key_fails_to_unwrap() {
    let v = load_vectors().hybrid;
    let key = private_key(RECIPIENT_KEY);
    let wrapped = STANDARD.decode(&v.wrapped_cek_b64).unwrap();

    for index in [0, wrapped.len() / 2, wrapped.len() - 1] {
        let mut corrupted = wrapped.clone();
        corrupted[index] ^= 0x01;
        let err = unwrap_key(&STANDARD.encode(&corrupted), &key).unwrap_err();
        assert!(
            matches!(err, EnvelopeError::UnwrapFailed(_)),
            "byte {index}: got {err:?}"
        );
    }
}

#[test]
fn truncated_wrapped_key_fails_to_unwrap() {
    let v = load_vectors().hybrid;
    let wrapped = STANDARD.decode(&v.wrapped_cek_b64).unwrap();
    let truncated = STANDARD.encode(&wrapped[..wrapped.len() - 1]);

    let err = unwrap_key(&truncated, &private_key(RECIPIENT_KEY)).unwrap_err();
    assert!(matches!(err, EnvelopeError::UnwrapFailed(_)), "got {err:?}");
}

#[test]
fn invalid_base64_is_malformed_input() {
    let key = private_key(RECIPIENT_KEY);
    for bad in ["not base64!", "abc", "====", "QUJD*"] {
        let err = unwrap_key(bad, &key).unwrap_err();
        assert!(
            matches!(err, EnvelopeError::MalformedInput(_)),
            "{bad:?}: got {err:?}"
        );
    }
}

#[test]
fn surrounding_whitespace_in_wrapped_key_is_tolerated() {
    let v = load_vectors().hybrid;
    let padded = format!("  {}\n", v.wrapped_cek_b64);
    let cek = unwrap_key(&padded, &private_key(RECIPIENT_KEY)).unwrap();
    assert_eq!(cek.expose_secret(), v.cek().expose_secret());
}

#[test]
fn empty_wrapped_key_is_malformed_input() {
    let key = private_key(RECIPIENT_KEY);
    for empty in ["", "   ", "\r\n"] {
        let err = unwrap_key(empty, &key).unwrap_err();
        assert!(
            matches!(err, EnvelopeError::MalformedInput(_)),
            "{empty:?}: got {err:?}"
        );
    }
}
