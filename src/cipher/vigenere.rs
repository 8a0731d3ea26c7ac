//! Vigenere polyalphabetic cipher

use super::{letter_index, shift_letter, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// A non-empty keyword of letters, stored as shifts 0..26
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Validate a keyword. Case is ignored; anything but A-Z / a-z is rejected.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let shifts = key
            .chars()
            .enumerate()
            .map(|(position, character)| {
                letter_index(character).ok_or(CipherError::InvalidKeyCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { shifts })
    }

    /// Number of letters in the keyword
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false, since `new` rejects an empty keyword. Present only to
    /// pair with `len` (clippy `len_without_is_empty`).
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    fn shift_at(&self, index: usize) -> u8 {
        self.shifts[index % self.shifts.len()]
    }
}

/// Map each letter through the key shift selected by a running letter count.
/// Non-letters are copied and do not advance the count.
fn apply(text: &str, key: &VigenereKey, encrypt: bool) -> String {
    let mut key_index = 0usize;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let shift = key.shift_at(key_index);
            key_index += 1;
            let offset = if encrypt { shift } else { (ALPHABET_LEN - shift) % ALPHABET_LEN };
            shift_letter(c, offset)
        })
        .collect()
}

pub fn vigenere_encrypt(text: &str, key: &VigenereKey) -> String {
    apply(text, key, true)
}

pub fn vigenere_decrypt(text: &str, key: &VigenereKey) -> String {
    apply(text, key, false)
}

/// Validate `key` and encrypt in one step
pub fn encrypt_with(text: &str, key: &str) -> Result<String> {
    Ok(vigenere_encrypt(text, &VigenereKey::new(key)?))
}

/// Validate `key` and decrypt in one step
pub fn decrypt_with(text: &str, key: &str) -> Result<String> {
    Ok(vigenere_decrypt(text, &VigenereKey::new(key)?))
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn decrypt_inverts_encrypt(ref text in ".{0,200}", ref key in "[A-Za-z]{1,12}") {
            let key = VigenereKey::new(key).unwrap();
            prop_assert_eq!(&vigenere_decrypt(&vigenere_encrypt(text, &key), &key), text);
        }
    }
}
