//! Caesar shift cipher

use super::{shift_letter, ALPHABET_LEN};

/// Reduce any shift, negative included, into 0..26
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Move every letter `shift` places forward, wrapping within its case
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    let offset = normalize_shift(shift);
    text.chars().map(|c| shift_letter(c, offset)).collect()
}

/// Inverse of [`caesar_encrypt`] for the same shift
pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    // i64::MIN has no negation; its residue is what matters
    caesar_encrypt(text, -(shift % ALPHABET_LEN as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_vector() {
        assert_eq!(caesar_encrypt("HELLO", 3), "KHOOR");
    }

    #[test]
    fn lowercase_wraps_around() {
        assert_eq!(caesar_encrypt("xyz", 3), "abc");
    }

    #[test]
    fn punctuation_and_digits_pass_through() {
        assert_eq!(caesar_encrypt("Hi, 2 you!", 1), "Ij, 2 zpv!");
    }

    #[test]
    fn full_cycle_is_identity() {
        let text = "The Quick Brown Fox";
        assert_eq!(caesar_encrypt(text, 26), text);
        assert_eq!(caesar_encrypt(text, 0), text);
        assert_eq!(caesar_encrypt(text, -52), text);
    }

    #[test]
    fn negative_shift_matches_complement() {
        assert_eq!(caesar_encrypt("abcXYZ", -1), caesar_encrypt("abcXYZ", 25));
        assert_eq!(normalize_shift(-1), 25);
        assert_eq!(normalize_shift(27), 1);
    }

    #[test]
    fn decrypt_by_one_is_encrypt_by_twenty_five() {
        assert_eq!(caesar_decrypt("Bcd", 1), caesar_encrypt("Bcd", 25));
        assert_eq!(caesar_decrypt("Bcd", 1), "Abc");
    }

    #[test]
    fn extreme_shifts_do_not_overflow() {
        let text = "Attack at dawn";
        assert_eq!(caesar_decrypt(&caesar_encrypt(text, i64::MIN), i64::MIN), text);
        assert_eq!(caesar_decrypt(&caesar_encrypt(text, i64::MAX), i64::MAX), text);
    }

    #[test]
    fn empty_text() {
        assert_eq!(caesar_encrypt("", 5), "");
    }
}
