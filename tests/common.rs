//! tests/common.rs
//! Fixture keys and vectors shared across test files
//!
//! Keys and vectors live in tests/test_data/. The hybrid vector is AES-256-GCM over
//! "test-audio-bytes" with a fixed CEK/IV, the CEK RSA-OAEP-SHA256-wrapped under
//! recipient_key.pem. recipient_key_pkcs1.pem is the same key in PKCS#1 form.

use serde::Deserialize;
use std::path::PathBuf;
use vmenvelope_rs::aliases::Cek32;
use vmenvelope_rs::{parse_private_key_pem, KeySource, RsaPrivateKey, RsaPublicKey};

#[allow(dead_code)] // Used across multiple test files
pub const RECIPIENT_KEY: &str = "recipient_key.pem";
#[allow(dead_code)]
pub const RECIPIENT_KEY_PKCS1: &str = "recipient_key_pkcs1.pem";
#[allow(dead_code)]
pub const STRANGER_KEY: &str = "stranger_key.pem";
#[allow(dead_code)]
pub const WEAK_KEY: &str = "weak_key.pem";
/// 2047-bit modulus: 256 bytes wide, one bit short of the floor
#[allow(dead_code)]
pub const SHORT_MODULUS_KEY: &str = "short_modulus_key.pem";

#[derive(Debug, Deserialize)]
pub struct HybridVector {
    pub plaintext: String,
    pub cek_hex: String,
    pub iv_b64: String,
    pub wrapped_cek_b64: String,
    pub payload_hex: String,
}

#[derive(Debug, Deserialize)]
pub struct DirectVector {
    pub plaintext: String,
    pub payload_hex: String,
}

#[derive(Debug, Deserialize)]
pub struct Vectors {
    pub hybrid: HybridVector,
    /// Same CEK wrapped with OAEP-SHA1/MGF1-SHA1
    pub wrapped_with_sha1: String,
    /// 16-byte key wrapped with OAEP-SHA256
    pub wrapped_short_cek: String,
    pub direct: DirectVector,
}

impl HybridVector {
    #[allow(dead_code)]
    pub fn payload(&self) -> Vec<u8> {
        hex::decode(&self.payload_hex).expect("hybrid payload hex")
    }

    #[allow(dead_code)]
    pub fn cek(&self) -> Cek32 {
        let bytes: [u8; 32] = hex::decode(&self.cek_hex)
            .expect("cek hex")
            .try_into()
            .expect("cek is 32 bytes");
        Cek32::new(bytes)
    }
}

impl DirectVector {
    #[allow(dead_code)]
    pub fn payload(&self) -> Vec<u8> {
        hex::decode(&self.payload_hex).expect("direct payload hex")
    }
}

#[allow(dead_code)]
pub fn test_data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(name)
}

#[allow(dead_code)]
pub fn load_vectors() -> Vectors {
    let path = test_data_path("envelope_vectors.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {path:?}: {e}"))
}

#[allow(dead_code)]
pub fn key_source(name: &str) -> KeySource {
    KeySource::path(test_data_path(name))
}

#[allow(dead_code)]
pub fn private_key(name: &str) -> RsaPrivateKey {
    let pem = std::fs::read_to_string(test_data_path(name))
        .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"));
    parse_private_key_pem(&pem, 2048).unwrap_or_else(|e| panic!("Failed to parse {name}: {e}"))
}

#[allow(dead_code)]
pub fn public_key(name: &str) -> RsaPublicKey {
    RsaPublicKey::from(&private_key(name))
}
