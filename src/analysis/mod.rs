//! Cryptanalysis aids: letter frequencies and Caesar brute force

pub mod brute_force;
pub mod frequency;

pub use brute_force::{brute_force, BruteForce, Candidate};
pub use frequency::{analyze, chi_squared, FrequencyReport, LetterCount, ENGLISH_ORDER};
