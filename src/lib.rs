//! Password-encrypted text that travels as emoji.
//!
//! ```text
//! password ──PBKDF2──▶ key ──AES-256-GCM──▶ salt|nonce|ciphertext ──▶ emoji
//! ```
//!
//! The four functions at the crate root are the whole surface a front end
//! needs; the modules expose the individual steps.

pub mod codec;
pub mod container;
pub mod crypto;
mod error;
pub mod password;

pub use crate::container::EncryptedMessage;
pub use crate::crypto::KdfParams;
pub use crate::error::{Error, Result};
pub use crate::password::Validation;

use tracing::debug;
use zeroize::Zeroizing;

/// Checks a candidate password. See [`password::validate`].
pub fn validate_password(password: &str) -> Validation {
    password::validate(password)
}

/// Encrypts `plaintext` under `password` and returns it as emoji.
///
/// Salt and nonce are fresh for every call, so encrypting the same text
/// twice gives two different outputs.
///
/// # Errors
///
/// [`Error::InvalidPassword`] if the password breaks the rules; no key is
/// derived in that case.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    encrypt_with_kdf(plaintext, password, KdfParams::default())
}

/// [`encrypt`] with an explicit iteration count. Meant for tests; published
/// messages must use `KdfParams::default()`.
pub fn encrypt_with_kdf(plaintext: &str, password: &str, kdf: KdfParams) -> Result<String> {
    password::ensure_valid(password)?;

    let message = seal(plaintext.as_bytes(), password, kdf)?;
    let bytes = message.to_bytes();

    debug!(container = bytes.len(), "encrypted message");
    Ok(codec::encode(&bytes))
}

/// Decrypts emoji produced by [`encrypt`].
///
/// Every failure here satisfies [`Error::is_decryption_failure`]; a wrong
/// password and a damaged message are indistinguishable.
pub fn decrypt(symbols: &str, password: &str) -> Result<String> {
    decrypt_with_kdf(symbols, password, KdfParams::default())
}

/// [`decrypt`] with an explicit iteration count. Meant for tests; published
/// messages must use `KdfParams::default()`.
pub fn decrypt_with_kdf(symbols: &str, password: &str, kdf: KdfParams) -> Result<String> {
    let result = codec::decode(symbols)
        .and_then(|bytes| EncryptedMessage::from_bytes(&bytes))
        .and_then(|message| open(&message, password, kdf))
        .and_then(|plaintext| {
            String::from_utf8(plaintext.to_vec()).map_err(|_| Error::InvalidUtf8)
        });

    if let Err(e) = &result {
        debug!(error = %e, "decryption failed");
    }
    result
}

/// Expected symbol count for a plaintext of `plaintext_len` bytes. Size
/// hint only.
pub fn estimate_symbol_count(plaintext_len: usize) -> usize {
    codec::estimate_length(plaintext_len)
}

/// Encrypts raw bytes with a key freshly derived from `password`.
///
/// The password is not checked against the policy here.
pub fn seal(plaintext: &[u8], password: &str, kdf: KdfParams) -> Result<EncryptedMessage> {
    let (key, salt) = crypto::derive_key(password.as_bytes(), None, kdf)?;
    let nonce = crypto::generate_nonce()?;
    let ciphertext = crypto::encrypt(&key, &nonce, plaintext)?;

    Ok(EncryptedMessage::new(salt, nonce, ciphertext))
}

/// Decrypts a message sealed with [`seal`].
pub fn open(
    message: &EncryptedMessage,
    password: &str,
    kdf: KdfParams,
) -> Result<Zeroizing<Vec<u8>>> {
    let (key, _) = crypto::derive_key(password.as_bytes(), Some(*message.salt()), kdf)?;
    crypto::decrypt(&key, message.nonce(), message.ciphertext())
}
