//! Monoalphabetic substitution cipher

use super::{letter_index, match_case, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, Result};

const KEY_LEN: usize = ALPHABET_LEN as usize;

/// A validated substitution alphabet: position `i` is the cipher letter for `'A' + i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionKey {
    forward: [char; KEY_LEN],
    inverse: [char; KEY_LEN],
}

impl SubstitutionKey {
    /// Validate a 26-letter key. Length is checked first, then that every
    /// letter of A-Z appears exactly once (case-insensitive).
    pub fn new(key: &str) -> Result<Self> {
        let actual = key.chars().count();
        if actual != KEY_LEN {
            return Err(CipherError::KeyLength {
                expected: KEY_LEN,
                actual,
            });
        }

        let mut forward = ['A'; KEY_LEN];
        let mut inverse = ['\0'; KEY_LEN];
        for ((position, c), plain) in key.chars().enumerate().zip(ALPHABET.chars()) {
            let index = letter_index(c).ok_or_else(|| CipherError::InvalidPermutation {
                reason: format!("{c:?} at position {position} is not a letter"),
            })? as usize;
            if inverse[index] != '\0' {
                return Err(CipherError::InvalidPermutation {
                    reason: format!("letter {} appears more than once", c.to_ascii_uppercase()),
                });
            }
            forward[position] = c.to_ascii_uppercase();
            inverse[index] = plain;
        }

        Ok(Self { forward, inverse })
    }

    /// The key as an uppercase 26-letter string
    pub fn as_alphabet(&self) -> String {
        self.forward.iter().collect()
    }
}

fn apply(text: &str, table: &[char; KEY_LEN]) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some(index) => match_case(table[index as usize], c),
            None => c,
        })
        .collect()
}

pub fn substitution_encrypt(text: &str, key: &SubstitutionKey) -> String {
    apply(text, &key.forward)
}

pub fn substitution_decrypt(text: &str, key: &SubstitutionKey) -> String {
    apply(text, &key.inverse)
}

/// Validate `key` and encrypt in one step
pub fn encrypt_with(text: &str, key: &str) -> Result<String> {
    Ok(substitution_encrypt(text, &SubstitutionKey::new(key)?))
}

/// Validate `key` and decrypt in one step
pub fn decrypt_with(text: &str, key: &str) -> Result<String> {
    Ok(substitution_decrypt(text, &SubstitutionKey::new(key)?))
}
