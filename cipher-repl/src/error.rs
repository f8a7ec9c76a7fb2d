use sci_cipher::CipherError;
use std::num::ParseIntError;

/// Utility enum to package any error that can occur while coding a line.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The shift is not an integer.
    Shift(ParseIntError),

    /// The text was rejected by the cipher configuration.
    Cipher(CipherError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shift(err) => write!(f, "invalid shift value: {}", err),
            Self::Cipher(err) => write!(f, "{}", err),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Self::Shift(error)
    }
}

impl From<CipherError> for Error {
    fn from(error: CipherError) -> Self {
        Self::Cipher(error)
    }
}
