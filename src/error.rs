use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Password {0}")]
    InvalidPassword(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("Invalid password or corrupted data")]
    Authentication,

    #[error("malformed message: {0}")]
    MalformedContainer(String),

    #[error("Invalid emoji sequence: must have even number of emojis (got {0})")]
    InvalidSequenceLength(usize),

    #[error("Invalid emoji in encrypted message: {0}")]
    UnknownSymbol(String),

    #[error("Invalid emoji pair in encrypted message: {0}")]
    InvalidSymbolPair(String),

    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,

    #[error("OS random generator unavailable")]
    Random,
}

impl Error {
    /// Returns `true` for every failure a caller should report as
    /// "decryption failed". None of these are worth retrying.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            Error::Authentication
                | Error::MalformedContainer(_)
                | Error::InvalidSequenceLength(_)
                | Error::UnknownSymbol(_)
                | Error::InvalidSymbolPair(_)
                | Error::InvalidUtf8
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
