//! Secure Text: a classical cipher tool
//!
//! Caesar, monoalphabetic substitution and Vigenere ciphers, plus two
//! cryptanalysis aids: letter frequency counting and Caesar brute force.
//! These ciphers are for teaching and offer no real security.

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod files;
pub mod menu;
pub mod reporter;

pub use analysis::{analyze, brute_force, Candidate, FrequencyReport};
pub use cipher::{Cipher, CipherKind, Direction};
pub use error::CipherError;

use serde::Serialize;

/// Text produced by one encrypt or decrypt call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub cipher: CipherKind,
    pub direction: Direction,
    pub text: String,
}

impl TransformOutput {
    /// Run `cipher` over `text`
    pub fn run(cipher: &Cipher, direction: Direction, text: &str) -> Self {
        Self {
            cipher: cipher.kind(),
            direction,
            text: cipher.apply(direction, text),
        }
    }
}

/// All 25 Caesar candidates for a ciphertext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BruteForceReport {
    pub candidates: Vec<Candidate>,
    /// Shift of the most English-like candidate
    pub most_likely: Option<i64>,
}

impl BruteForceReport {
    pub fn new(ciphertext: &str) -> Self {
        let attempts = brute_force(ciphertext);
        Self {
            most_likely: attempts.clone().most_likely().map(|c| c.shift),
            candidates: attempts.collect(),
        }
    }
}
