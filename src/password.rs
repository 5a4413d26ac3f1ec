//! Password rules shared by both ends of a conversation.
//!
//! Passwords are short on purpose: they are read out or typed next to the
//! emoji they unlock. Only ASCII letters and digits, 5 to 8 of them.

use getrandom::fill;
use serde::Serialize;

use crate::error::{Error, Result};

pub const MIN_LEN: usize = 5;
pub const MAX_LEN: usize = 8;

const CHARSET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: &'static str,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: "is valid",
        }
    }

    fn rejected(reason: &'static str) -> Self {
        Self {
            valid: false,
            reason,
        }
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password {}", self.reason)
    }
}

/// Checks `password` against the rules in order; the first failure wins.
pub fn validate(password: &str) -> Validation {
    if password.is_empty() || !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Validation::rejected("must contain only letters and numbers");
    }

    // every char is ASCII here, so bytes == chars
    if password.len() < MIN_LEN {
        return Validation::rejected("must be at least 5 characters long");
    }
    if password.len() > MAX_LEN {
        return Validation::rejected("must be at most 8 characters long");
    }

    Validation::ok()
}

/// Like [`validate`], but as a `Result` for use before any crypto work.
pub fn ensure_valid(password: &str) -> Result<()> {
    let verdict = validate(password);
    if verdict.valid {
        Ok(())
    } else {
        Err(Error::InvalidPassword(verdict.reason.to_string()))
    }
}

/// Generates a random password of [`MAX_LEN`] letters and digits.
pub fn generate() -> Result<String> {
    // largest multiple of 62 that fits in a byte; higher bytes are redrawn
    const LIMIT: u8 = 248;

    let mut password = String::with_capacity(MAX_LEN);
    let mut buf = [0u8; MAX_LEN * 2];

    while password.len() < MAX_LEN {
        fill(&mut buf).map_err(|_| Error::Random)?;
        for &b in buf.iter().filter(|&&b| b < LIMIT) {
            if password.len() == MAX_LEN {
                break;
            }
            password.push(CHARSET[usize::from(b) % CHARSET.len()] as char);
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_is_rejected() {
        let v = validate("ab12");
        assert!(!v.valid);
        assert_eq!(v.reason, "must be at least 5 characters long");
    }

    #[test]
    fn too_long_is_rejected() {
        let v = validate("abcdefghi");
        assert!(!v.valid);
        assert_eq!(v.reason, "must be at most 8 characters long");
    }

    #[test]
    fn non_alphanumeric_is_rejected() {
        let v = validate("abc 12");
        assert!(!v.valid);
        assert_eq!(v.reason, "must contain only letters and numbers");

        assert!(!validate("pässw0rd").valid);
        assert!(!validate("abc-12").valid);
    }

    #[test]
    fn charset_rule_wins_over_length() {
        assert_eq!(
            validate("a b").reason,
            "must contain only letters and numbers"
        );
        assert_eq!(
            validate("a_very_long_one").reason,
            "must contain only letters and numbers"
        );
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(validate("").reason, "must contain only letters and numbers");
    }

    #[test]
    fn boundaries_are_valid() {
        assert!(validate("abc12").valid);
        assert!(validate("abcd1234").valid);
        assert!(validate("SECR3T").valid);
    }

    #[test]
    fn display_reads_as_sentence() {
        assert_eq!(
            validate("ab12").to_string(),
            "Password must be at least 5 characters long"
        );
    }

    #[test]
    fn ensure_valid_maps_to_error() {
        assert!(ensure_valid("abc12").is_ok());
        match ensure_valid("ab") {
            Err(Error::InvalidPassword(reason)) => {
                assert_eq!(reason, "must be at least 5 characters long")
            }
            other => panic!("expected InvalidPassword, got: {other:?}"),
        }
    }

    #[test]
    fn generated_passwords_pass_validation() {
        for _ in 0..50 {
            let pw = generate().unwrap();
            assert_eq!(pw.len(), MAX_LEN);
            assert!(validate(&pw).valid, "{pw} rejected");
        }
    }

    #[test]
    fn generated_passwords_differ() {
        assert_ne!(generate().unwrap(), generate().unwrap());
    }
}
