//! tests/details_tests.rs
//! Provider recording resource → EncryptionDetails → decrypted recording

mod common;
use common::{key_source, load_vectors, RECIPIENT_KEY};

use serde_json::json;
use vmenvelope_rs::{decrypt_recording, DecryptConfig, EncryptionDetails, EnvelopeError, RecordingInput};

#[test]
fn details_from_recording_resource_decrypt_the_payload() {
    let v = load_vectors().hybrid;
    let resource = json!({
        "sid": "RE0123456789abcdef0123456789abcdef",
        "duration": "7",
        "encryption_details": {
            "type": "rsa-aes",
            "encrypted_cek": v.wrapped_cek_b64,
            "iv": v.iv_b64,
        },
    })
    .to_string();

    let details = EncryptionDetails::from_recording_json(&resource).unwrap();
    assert_eq!(details.encrypted_cek, v.wrapped_cek_b64);
    assert_eq!(details.iv, v.iv_b64);

    let input = RecordingInput::new(v.payload()).with_encryption_details(details);
    let plaintext = decrypt_recording(&input, &DecryptConfig::new(key_source(RECIPIENT_KEY))).unwrap();
    assert_eq!(plaintext, b"test-audio-bytes");
}

#[test]
fn missing_or_incomplete_details_are_malformed_input() {
    let cases = [
        json!({ "sid": "RE1" }),
        json!({ "sid": "RE1", "encryption_details": null }),
        json!({ "encryption_details": { "encrypted_cek": "AAAA" } }),
        json!({ "encryption_details": { "iv": "AAAA" } }),
        json!({ "encryption_details": { "encrypted_cek": "", "iv": "AAAA" } }),
        json!({ "encryption_details": { "encrypted_cek": "AAAA", "iv": "" } }),
    ];

    for case in cases {
        let err = EncryptionDetails::from_recording_json(&case.to_string()).unwrap_err();
        assert!(
            matches!(err, EnvelopeError::MalformedInput(_)),
            "{case}: got {err:?}"
        );
    }
}

#[test]
fn invalid_json_is_malformed_input() {
    let err = EncryptionDetails::from_recording_json("{ not json").unwrap_err();
    assert!(matches!(err, EnvelopeError::MalformedInput(_)));
}

#[test]
fn details_serialize_with_provider_field_names() {
    let details = EncryptionDetails {
        encrypted_cek: "Y2Vr".into(),
        iv: "aXY=".into(),
    };
    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(value, json!({ "encrypted_cek": "Y2Vr", "iv": "aXY=" }));
}
