//! A Caesar shift cipher.
//!
//! Letters are rotated through the alphabet by a fixed [`Shift`], keeping their case; everything
//! else passes through untouched. [`break_cipher`] recovers the shift of a ciphertext by trying
//! every shift and keeping the decoding with the most vowels.
//!
//! ```
//! use sci_cipher::{break_cipher, decode, encode, Shift};
//!
//! let secret = encode("meet me at the old oak", Shift::new(5));
//! assert_eq!(secret, "rjjy rj fy ymj tqi tfp");
//! assert_eq!(decode(&secret, Shift::new(5)), "meet me at the old oak");
//! assert_eq!(break_cipher(&secret).shift, Shift::new(5));
//! ```

pub mod brute;
pub mod config;
pub mod shift;

pub use brute::{break_cipher, candidates, vowel_score, Candidate};
pub use config::{CipherConfig, CipherError};
pub use shift::{decode, encode, rotate, Shift};
