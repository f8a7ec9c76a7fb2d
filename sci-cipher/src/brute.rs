//! Breaking a Caesar cipher without the key.
//!
//! English text is rich in vowels, so the shift whose decoding contains the most vowels is a good
//! guess for the key. Every shift from 1 to 25 is tried.

use crate::shift::{decode, Shift, ALPHABET_LEN};
use tracing::{debug, trace};

/// Returns true if `c` is one of `a e i o u`, in either case.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Counts the vowels in `text`.
pub fn vowel_score(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// A possible decryption of a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The shift the ciphertext is assumed to have been encoded with.
    pub shift: Shift,

    /// The ciphertext decoded with [`Candidate::shift`].
    pub plaintext: String,

    /// The number of vowels in [`Candidate::plaintext`].
    pub score: usize,
}

impl Candidate {
    /// Decodes `ciphertext` with `shift` and scores the result.
    pub fn new(ciphertext: &str, shift: Shift) -> Self {
        let plaintext = decode(ciphertext, shift);
        let score = vowel_score(&plaintext);
        Self { shift, plaintext, score }
    }
}

/// Returns every candidate decryption, for shifts 1 to 25 in order.
pub fn candidates(ciphertext: &str) -> impl Iterator<Item = Candidate> + '_ {
    (1..ALPHABET_LEN as i64).map(move |amount| Candidate::new(ciphertext, Shift::new(amount)))
}

/// Guesses the decryption of `ciphertext` by picking the candidate with the most vowels.
///
/// Ties go to the lowest shift. A ciphertext without letters decodes to itself with shift 1.
pub fn break_cipher(ciphertext: &str) -> Candidate {
    let best = candidates(ciphertext)
        .inspect(|candidate| {
            trace!(shift = %candidate.shift, score = candidate.score, "scored candidate");
        })
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
        .unwrap_or_else(|| Candidate::new(ciphertext, Shift::new(1)));

    debug!(shift = %best.shift, score = best.score, "best candidate");
    best
}

#[cfg(test)]
mod tests {
    use crate::shift::encode;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn vowels() {
        assert_eq!(vowel_score("hello world"), 3);
        assert_eq!(vowel_score("AEIOU aeiou"), 10);
        assert_eq!(vowel_score("rhythm"), 0);
        assert_eq!(vowel_score(""), 0);
    }

    #[test]
    fn every_shift_is_tried() {
        let shifts = candidates("abc").map(|c| c.shift.get()).collect::<Vec<_>>();
        assert_eq!(shifts, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn recovers_known_shift() {
        let plaintext = "a quiet audio idea evokes aeolian euphoria";
        let ciphertext = encode(plaintext, Shift::new(7));
        let best = break_cipher(&ciphertext);
        assert_eq!(best.shift, Shift::new(7));
        assert_eq!(best.plaintext, plaintext);
        assert_eq!(best.score, vowel_score(plaintext));
    }

    #[test]
    fn ties_go_to_lowest_shift() {
        // no letters, so every shift scores zero
        let best = break_cipher("123 !?");
        assert_eq!(best.shift, Shift::new(1));
        assert_eq!(best.plaintext, "123 !?");
        assert_eq!(best.score, 0);
    }

    #[test]
    fn first_of_equal_scores() {
        // "b" decodes to "a" with shift 1 and to "e" with shift 23
        let best = break_cipher("b");
        assert_eq!(best.shift, Shift::new(1));
        assert_eq!(best.plaintext, "a");
    }

    #[test]
    fn uppercase_letters_count() {
        let ciphertext = encode("EUOUAE", Shift::new(4));
        assert_eq!(break_cipher(&ciphertext).plaintext, "EUOUAE");
    }
}
