//! Classical cipher transforms over the 26-letter Latin alphabet
//!
//! Only ASCII letters are transformed. Everything else, including
//! non-ASCII characters, is copied through untouched and never consumes
//! a position of a repeating key.

pub mod caesar;
pub mod substitution;
pub mod vigenere;

pub use caesar::{caesar_decrypt, caesar_encrypt, normalize_shift};
pub use substitution::{substitution_decrypt, substitution_encrypt, SubstitutionKey};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt, VigenereKey};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Reference alphabet; index `i` is plaintext letter `'A' + i`
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Shift an ASCII letter forward by `offset` places, keeping its case.
///
/// `offset` must already be reduced to 0..26. Non-letters are returned as-is.
pub(crate) fn shift_letter(c: char, offset: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let index = c as u8 - base;
    ((index + offset) % ALPHABET_LEN + base) as char
}

/// Zero-based alphabet index of an ASCII letter (case-folded)
pub(crate) fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Put `upper` (an uppercase letter) into the case of `like`
pub(crate) fn match_case(upper: char, like: char) -> char {
    if like.is_ascii_lowercase() {
        upper.to_ascii_lowercase()
    } else {
        upper
    }
}

/// Which way a cipher is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Cipher family, without key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Substitution,
}

impl std::fmt::Display for CipherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "Caesar"),
            CipherKind::Vigenere => write!(f, "Vigenere"),
            CipherKind::Substitution => write!(f, "Substitution"),
        }
    }
}

/// A cipher together with a validated key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar { shift: i64 },
    Vigenere(VigenereKey),
    Substitution(SubstitutionKey),
}

impl Cipher {
    pub fn caesar(shift: i64) -> Self {
        Cipher::Caesar { shift }
    }

    /// Vigenere with a validated keyword
    pub fn vigenere(key: &str) -> Result<Self> {
        Ok(Cipher::Vigenere(VigenereKey::new(key)?))
    }

    /// Substitution with a validated 26-letter key
    pub fn substitution(key: &str) -> Result<Self> {
        Ok(Cipher::Substitution(SubstitutionKey::new(key)?))
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Caesar { .. } => CipherKind::Caesar,
            Cipher::Vigenere(_) => CipherKind::Vigenere,
            Cipher::Substitution(_) => CipherKind::Substitution,
        }
    }

    /// Encrypt or decrypt `text`
    pub fn apply(&self, direction: Direction, text: &str) -> String {
        log::debug!(
            "{} {} over {} chars",
            self.kind(),
            direction,
            text.chars().count()
        );
        match (self, direction) {
            (Cipher::Caesar { shift }, Direction::Encrypt) => caesar_encrypt(text, *shift),
            (Cipher::Caesar { shift }, Direction::Decrypt) => caesar_decrypt(text, *shift),
            (Cipher::Vigenere(key), Direction::Encrypt) => vigenere_encrypt(text, key),
            (Cipher::Vigenere(key), Direction::Decrypt) => vigenere_decrypt(text, key),
            (Cipher::Substitution(key), Direction::Encrypt) => substitution_encrypt(text, key),
            (Cipher::Substitution(key), Direction::Decrypt) => substitution_decrypt(text, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn shift_letter_wraps_and_keeps_case() {
        assert_eq!(shift_letter('Z', 1), 'A');
        assert_eq!(shift_letter('y', 3), 'b');
        assert_eq!(shift_letter('7', 3), '7');
        assert_eq!(shift_letter('é', 3), 'é');
    }

    #[test]
    fn alphabet_constant_is_in_order() {
        assert_eq!(ALPHABET.len(), ALPHABET_LEN as usize);
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(letter_index(c), Some(i as u8));
        }
    }

    #[test]
    fn caesar_constructor_round_trips() {
        let cipher = Cipher::caesar(3);
        assert_eq!(cipher, Cipher::Caesar { shift: 3 });
        assert_eq!(cipher.kind(), CipherKind::Caesar);
        assert_eq!(cipher.apply(Direction::Encrypt, "HELLO"), "KHOOR");
        assert_eq!(cipher.apply(Direction::Decrypt, "KHOOR"), "HELLO");
    }

    #[test]
    fn vigenere_without_key_is_empty_key() {
        let err = Cipher::vigenere("").unwrap_err();
        assert!(matches!(err, CipherError::EmptyKey));
    }

    #[test]
    fn substitution_with_short_key_is_length_error() {
        let err = Cipher::substitution("ABC").unwrap_err();
        assert!(matches!(
            err,
            CipherError::KeyLength {
                expected: 26,
                actual: 3
            }
        ));
    }

    #[test]
    fn apply_dispatches_vigenere() {
        let cipher = Cipher::vigenere("LEMON").unwrap();
        assert_eq!(cipher.kind(), CipherKind::Vigenere);
        assert_eq!(
            cipher.apply(Direction::Encrypt, "ATTACKATDAWN"),
            "LXFOPVEFRNHR"
        );
    }
}
