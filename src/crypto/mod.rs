//! Cryptographic primitives for sealed messages.
//!
//! Provides password-based key derivation and AES-256-GCM encryption.

pub mod aead;
pub mod kdf;

pub use aead::{decrypt, encrypt, generate_nonce, generate_salt};
pub use kdf::{DerivedKey, KdfParams, derive_key};

/// Length of the salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the nonce (12 bytes for AES-GCM).
pub const NONCE_LEN: usize = 12;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;
/// PBKDF2-SHA256 rounds used for every published message.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
