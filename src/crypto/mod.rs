// src/crypto/mod.rs

//! Low-level asymmetric primitives.
//!
//! `private_key` turns a [`KeySource`](private_key::KeySource) into a validated RSA key;
//! `oaep` is the single place the RSA-OAEP (SHA-256 / MGF1-SHA-256) pairing is chosen.

pub mod oaep;
pub mod private_key;
