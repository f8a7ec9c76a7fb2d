use std::{fmt::{self, Display, Formatter}, num::ParseIntError, ops::Neg, str::FromStr};

/// Number of letters in the alphabet being rotated.
pub const ALPHABET_LEN: u8 = 26;

/// A Caesar shift, normalized into `0..26`.
///
/// Any integer is accepted; shifts that differ by a multiple of 26 are the same shift, so `-3` and
/// `23` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    /// Creates a shift from any integer amount.
    pub fn new(amount: i64) -> Self {
        Self(amount.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    /// Returns the normalized amount, in `0..26`.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Neg for Shift {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-(self.0 as i64))
    }
}

impl FromStr for Shift {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::new)
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotates a single character, keeping its case. Characters other than ASCII letters are returned
/// unchanged.
fn rotate_char(c: char, shift: Shift) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base + shift.get()) % ALPHABET_LEN;
    (base + offset) as char
}

/// Rotates every ASCII letter in `text` forward by `shift`.
pub fn rotate(text: &str, shift: Shift) -> String {
    text.chars().map(|c| rotate_char(c, shift)).collect()
}

/// Encodes `text` by rotating it forward by `shift`.
pub fn encode(text: &str, shift: Shift) -> String {
    rotate(text, shift)
}

/// Decodes `text` that was encoded with `shift`.
pub fn decode(text: &str, shift: Shift) -> String {
    rotate(text, -shift)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(Shift::new(3).get(), 3);
        assert_eq!(Shift::new(-3), Shift::new(23));
        assert_eq!(Shift::new(26), Shift::new(0));
        assert_eq!(Shift::new(-53).get(), 25);
        assert_eq!(-Shift::new(3), Shift::new(23));
        assert_eq!(-Shift::new(0), Shift::new(0));
    }

    #[test]
    fn parse() {
        assert_eq!(" -3 ".parse::<Shift>(), Ok(Shift::new(23)));
        assert_eq!("29".parse::<Shift>(), Ok(Shift::new(3)));
        assert!("three".parse::<Shift>().is_err());
    }

    #[test]
    fn keeps_case_and_punctuation() {
        assert_eq!(encode("Attack at dawn!", Shift::new(3)), "Dwwdfn dw gdzq!");
        assert_eq!(encode("xyz XYZ", Shift::new(3)), "abc ABC");
        assert_eq!(encode("héllo, 123", Shift::new(1)), "iémmp, 123");
    }

    #[test]
    fn attack_round_trip() {
        let encoded = encode("Attack", Shift::new(3));
        assert_eq!(encoded, "Dwwdfn");
        assert_eq!(encode(&encoded, Shift::new(-3)), "Attack");
        assert_eq!(decode(&encoded, Shift::new(3)), "Attack");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(text in "[ -~]{0,64}", amount in -1000i64..1000) {
            let shift = Shift::new(amount);
            prop_assert_eq!(decode(&encode(&text, shift), shift), text);
        }
    }
}
