//! # Secure-Gate Type Aliases
//!
//! Type aliases over [`secure-gate`](https://github.com/Slurp9187/secure-gate) wrappers for
//! every buffer that carries key material during envelope decryption.
//! All of them are zeroized on drop and only reachable through `.expose_secret()`.
//!
//! ## Fixed-Size Secrets
//! - [`Cek32`] - 32-byte AES-256 content-encryption key (unwrapped CEK)
//! - [`Iv12`] - 12-byte AES-GCM nonce
//!
//! ## Dynamic Secrets
//! - [`PemString`] - PEM text of a recipient private key
//! - [`SecretBytes`] - transient RSA-OAEP output before it is length-checked

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(PemString, String);
dynamic_alias!(SecretBytes, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets: alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Cek32, 32); // unwrapped AES-256 CEK
fixed_alias!(Iv12, 12); // per-recording GCM nonce
