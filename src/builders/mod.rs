//! # Builders
//!
//! Builder patterns for configuring decryption.
//!
//! ## Modules
//!
//! - [`decrypt_config`] - Key source, mode selector, output path and key-size floor
//!
//! ## Usage
//!
//! Builders provide a fluent API with safe defaults; everything the decryptor
//! needs is passed in explicitly at call time.

pub mod decrypt_config;

pub use decrypt_config::DecryptConfig;
