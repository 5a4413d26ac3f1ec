use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroize;

use super::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN, generate_salt};
use crate::error::{Error, Result};

/// A 256-bit AES key derived from a password.
///
/// Lives only for one encrypt or decrypt call and is zeroized on drop.
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32) -> Result<Self> {
        let params = Self { iterations };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(Error::KeyDerivation(
                "pbkdf2 iterations must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Derive an AES-256 key from `secret` with PBKDF2-HMAC-SHA256.
///
/// A fresh random salt is generated when `salt` is `None`. The salt that was
/// actually used is returned so it can travel with the ciphertext.
pub fn derive_key(
    secret: &[u8],
    salt: Option<[u8; SALT_LEN]>,
    kdf: KdfParams,
) -> Result<(DerivedKey, [u8; SALT_LEN])> {
    kdf.validate()?;

    let salt = match salt {
        Some(salt) => salt,
        None => generate_salt()?,
    };

    debug!(iterations = kdf.iterations, "deriving message key");

    let mut key = DerivedKey {
        bytes: [0u8; KEY_LEN],
    };
    pbkdf2_hmac::<Sha256>(secret, &salt, kdf.iterations, &mut key.bytes);

    Ok((key, salt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> KdfParams {
        KdfParams::new(1_000).unwrap()
    }

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; SALT_LEN];

        let (k1, s1) = derive_key(b"secr3t", Some(salt), fast()).unwrap();
        let (k2, s2) = derive_key(b"secr3t", Some(salt), fast()).unwrap();

        assert_eq!(k1.as_bytes(), k2.as_bytes());
        assert_eq!(s1, salt);
        assert_eq!(s2, salt);
    }

    #[test]
    fn missing_salt_is_generated() {
        let (_, s1) = derive_key(b"secr3t", None, fast()).unwrap();
        let (_, s2) = derive_key(b"secr3t", None, fast()).unwrap();

        assert_ne!(s1, s2);
    }

    #[test]
    fn salt_affects_output() {
        let (k1, _) = derive_key(b"secr3t", Some([1u8; SALT_LEN]), fast()).unwrap();
        let (k2, _) = derive_key(b"secr3t", Some([2u8; SALT_LEN]), fast()).unwrap();

        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn iterations_affect_output() {
        let salt = [7u8; SALT_LEN];

        let (k1, _) = derive_key(b"pw123", Some(salt), KdfParams::new(1).unwrap()).unwrap();
        let (k2, _) = derive_key(b"pw123", Some(salt), KdfParams::new(2).unwrap()).unwrap();

        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn matches_pbkdf2_sha256_reference_vector() {
        // RFC 7914 section 11, PBKDF2-HMAC-SHA256 with P="passwd", S="salt", c=1.
        let mut out = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(b"passwd", b"salt", 1, &mut out);
        assert_eq!(
            &out[..8],
            &[0x55u8, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f]
        );
    }

    #[test]
    fn zero_iterations_fail_gracefully() {
        assert!(KdfParams::new(0).is_err());
    }

    #[test]
    fn default_uses_published_iteration_count() {
        assert_eq!(KdfParams::default().iterations(), 100_000);
    }

    #[test]
    fn debug_output_is_redacted() {
        let (key, _) = derive_key(b"pw123", Some([0u8; SALT_LEN]), fast()).unwrap();
        assert!(format!("{key:?}").contains("REDACTED"));
    }
}
