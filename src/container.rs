//! Binary and text layout of a sealed message.
//!
//! ```text
//! SALT (16) | NONCE (12) | CIPHERTEXT + TAG
//! ```
//!
//! There is no magic, version or length prefix. Salt and nonce sizes are
//! protocol constants and the algorithms (AES-256-GCM, PBKDF2-SHA256 with
//! 100 000 rounds) are implied by the layout.

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::trace;

use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::error::{Error, Result};

/// Smallest blob that can hold a salt and a nonce.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// The (salt, nonce, ciphertext) triple produced by one encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
}

impl EncryptedMessage {
    pub fn new(salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext with the authentication tag appended.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total length of the binary form.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());

        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.ciphertext);

        buf
    }

    /// Splits a blob positionally: `[0..16]` salt, `[16..28]` nonce, rest
    /// ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedContainer`] if the blob is shorter than
    /// [`HEADER_LEN`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(Error::MalformedContainer(format!(
                "{} bytes is too short to hold salt and nonce",
                data.len()
            )));
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        trace!(len = data.len(), "parsed message container");

        Ok(Self {
            salt: salt
                .try_into()
                .map_err(|_| Error::MalformedContainer("invalid salt length".into()))?,
            nonce: nonce
                .try_into()
                .map_err(|_| Error::MalformedContainer("invalid nonce length".into()))?,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Printable form: standard padded base64 of [`Self::to_bytes`].
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| Error::MalformedContainer(format!("invalid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncryptedMessage {
        EncryptedMessage::new([1u8; SALT_LEN], [2u8; NONCE_LEN], vec![3u8; 21])
    }

    #[test]
    fn layout_is_salt_nonce_ciphertext() {
        let bytes = sample().to_bytes();

        assert_eq!(bytes.len(), 16 + 12 + 21);
        assert!(bytes[..16].iter().all(|&b| b == 1));
        assert!(bytes[16..28].iter().all(|&b| b == 2));
        assert!(bytes[28..].iter().all(|&b| b == 3));
    }

    #[test]
    fn bytes_roundtrip() {
        let message = sample();
        let parsed = EncryptedMessage::from_bytes(&message.to_bytes()).unwrap();

        assert_eq!(parsed, message);
        assert_eq!(parsed.encoded_len(), 49);
    }

    #[test]
    fn base64_roundtrip() {
        let message = sample();
        let text = message.to_base64();

        assert!(text.is_ascii());
        assert_eq!(EncryptedMessage::from_base64(&text).unwrap(), message);
    }

    #[test]
    fn header_only_blob_has_empty_ciphertext() {
        let parsed = EncryptedMessage::from_bytes(&[0u8; HEADER_LEN]).unwrap();
        assert!(parsed.ciphertext().is_empty());
    }

    #[test]
    fn too_short_fails() {
        let data = vec![0u8; HEADER_LEN - 1];
        assert!(matches!(
            EncryptedMessage::from_bytes(&data),
            Err(Error::MalformedContainer(_))
        ));
        assert!(matches!(
            EncryptedMessage::from_bytes(&[]),
            Err(Error::MalformedContainer(_))
        ));
    }

    #[test]
    fn invalid_base64_fails() {
        assert!(matches!(
            EncryptedMessage::from_base64("not base64!"),
            Err(Error::MalformedContainer(_))
        ));
    }
}
