//! Exhaustive Caesar decryption

use super::frequency::chi_squared;
use crate::cipher::caesar_decrypt;
use serde::Serialize;

/// Smallest and largest shift tried; shift 0 is the ciphertext itself
pub const FIRST_SHIFT: i64 = 1;
pub const LAST_SHIFT: i64 = 25;

/// One decryption attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub shift: i64,
    pub plaintext: String,
}

/// Lazy iterator over the 25 candidate plaintexts of a Caesar ciphertext.
///
/// A clone replays from the current shift; call [`brute_force`] again
/// for a fresh pass.
#[derive(Debug, Clone)]
pub struct BruteForce<'a> {
    ciphertext: &'a str,
    next_shift: i64,
}

/// Try every non-zero shift against `ciphertext`
pub fn brute_force(ciphertext: &str) -> BruteForce<'_> {
    BruteForce {
        ciphertext,
        next_shift: FIRST_SHIFT,
    }
}

impl BruteForce<'_> {
    /// The candidate whose letters look most like English.
    ///
    /// Ties go to the smaller shift; `None` only when the iterator is exhausted.
    pub fn most_likely(self) -> Option<Candidate> {
        self.map(|candidate| (chi_squared(&candidate.plaintext), candidate))
            .fold(None, |best: Option<(f64, Candidate)>, (score, candidate)| match best {
                Some((best_score, _)) if best_score <= score => best,
                _ => Some((score, candidate)),
            })
            .map(|(_, candidate)| candidate)
    }
}

impl Iterator for BruteForce<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.next_shift > LAST_SHIFT {
            return None;
        }
        let shift = self.next_shift;
        self.next_shift += 1;
        Some(Candidate {
            shift,
            plaintext: caesar_decrypt(self.ciphertext, shift),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (LAST_SHIFT - self.next_shift + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BruteForce<'_> {}

impl std::iter::FusedIterator for BruteForce<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::caesar_encrypt;

    #[test]
    fn yields_twenty_five_shifts_in_order() {
        let candidates: Vec<Candidate> = brute_force("KHOOR").collect();
        assert_eq!(candidates.len(), 25);
        assert_eq!(candidates.first().map(|c| c.shift), Some(1));
        assert_eq!(candidates.last().map(|c| c.shift), Some(25));
        for candidate in &candidates {
            assert_eq!(candidate.plaintext, caesar_decrypt("KHOOR", candidate.shift));
        }
    }

    #[test]
    fn original_plaintext_is_among_candidates() {
        let ciphertext = caesar_encrypt("Meet me at noon", 11);
        let hit = brute_force(&ciphertext).find(|c| c.plaintext == "Meet me at noon");
        assert_eq!(hit.map(|c| c.shift), Some(11));
    }

    #[test]
    fn exact_size_tracks_progress() {
        let mut iter = brute_force("abc");
        assert_eq!(iter.len(), 25);
        iter.next();
        assert_eq!(iter.len(), 24);
        assert_eq!(iter.by_ref().count(), 24);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }

    #[test]
    fn restartable() {
        let first: Vec<Candidate> = brute_force("Xyz").collect();
        let second: Vec<Candidate> = brute_force("Xyz").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn most_likely_finds_english() {
        let plaintext = "It was the best of times, it was the worst of times";
        let ciphertext = caesar_encrypt(plaintext, 17);
        let best = brute_force(&ciphertext).most_likely().unwrap();
        assert_eq!(best.shift, 17);
        assert_eq!(best.plaintext, plaintext);
    }

    #[test]
    fn most_likely_without_letters_picks_first_shift() {
        let best = brute_force("1234").most_likely().unwrap();
        assert_eq!(best.shift, 1);
        assert_eq!(best.plaintext, "1234");
    }
}
