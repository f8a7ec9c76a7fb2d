use crate::brute::{break_cipher, Candidate};
use crate::shift::{decode, encode, Shift};
use std::{error::Error, fmt::{self, Display, Formatter}};
use tracing::debug;

/// Error returned when a text cannot be processed under a [`CipherConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The text has more characters than the configured limit.
    InputTooLong { len: usize, max: usize },
}

impl Display for CipherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooLong { len, max } => {
                write!(f, "input is {} characters long, but at most {} are allowed", len, max)
            },
        }
    }
}

impl Error for CipherError {}

/// Limits applied before encoding, decoding, or breaking a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CipherConfig {
    /// The maximum number of characters accepted, if limited.
    pub max_len: Option<usize>,
}

impl CipherConfig {
    /// The input limit of the fixed-size buffers the cipher was first written with.
    pub const LEGACY_MAX_LEN: usize = 200;

    /// A configuration accepting texts of any length.
    pub fn unlimited() -> Self {
        Self { max_len: None }
    }

    /// A configuration limited to [`CipherConfig::LEGACY_MAX_LEN`] characters.
    pub fn legacy() -> Self {
        Self { max_len: Some(Self::LEGACY_MAX_LEN) }
    }

    /// Checks `text` against the configured limit.
    pub fn check(&self, text: &str) -> Result<(), CipherError> {
        let Some(max) = self.max_len else {
            return Ok(());
        };

        let len = text.chars().count();
        if len > max {
            debug!(len, max, "input too long");
            return Err(CipherError::InputTooLong { len, max });
        }
        Ok(())
    }

    /// Encodes `text` with `shift`, after checking its length.
    pub fn encode(&self, text: &str, shift: Shift) -> Result<String, CipherError> {
        self.check(text)?;
        Ok(encode(text, shift))
    }

    /// Decodes `text` that was encoded with `shift`, after checking its length.
    pub fn decode(&self, text: &str, shift: Shift) -> Result<String, CipherError> {
        self.check(text)?;
        Ok(decode(text, shift))
    }

    /// Guesses the decryption of `ciphertext`, after checking its length.
    pub fn break_cipher(&self, ciphertext: &str) -> Result<Candidate, CipherError> {
        self.check(ciphertext)?;
        Ok(break_cipher(ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn unlimited_by_default() {
        let config = CipherConfig::default();
        assert_eq!(config, CipherConfig::unlimited());
        assert!(config.check(&"a".repeat(10_000)).is_ok());
    }

    #[test]
    fn legacy_limit() {
        let config = CipherConfig::legacy();
        assert!(config.check(&"a".repeat(200)).is_ok());
        assert_eq!(
            config.encode(&"a".repeat(201), Shift::new(1)),
            Err(CipherError::InputTooLong { len: 201, max: 200 }),
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let config = CipherConfig { max_len: Some(3) };
        assert_eq!(config.decode("éé!", Shift::new(1)), Ok("éé!".to_string()));
        assert!(config.break_cipher("éééé").is_err());
    }

    #[test]
    fn message() {
        let err = CipherError::InputTooLong { len: 5, max: 3 };
        assert_eq!(err.to_string(), "input is 5 characters long, but at most 3 are allowed");
    }
}
