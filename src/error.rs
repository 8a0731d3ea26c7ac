//! Error types for cipher keys and file access

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by key validation and file operations
#[derive(Debug, Error)]
pub enum CipherError {
    /// Substitution key has the wrong number of characters
    #[error("Key must be exactly {expected} characters (got {actual})")]
    KeyLength { expected: usize, actual: usize },

    /// Vigenere key is empty
    #[error("Key must not be empty")]
    EmptyKey,

    /// Vigenere key contains something other than A-Z / a-z
    #[error("Key character {character:?} at position {position} is not a letter")]
    InvalidKeyCharacter { character: char, position: usize },

    /// Substitution key is not a permutation of A-Z
    #[error("Key is not a permutation of the alphabet: {reason}")]
    InvalidPermutation { reason: String },

    /// Input file unreadable or output file unwritable
    #[error("Could not access file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CipherError {
    /// True for errors caused by a malformed key rather than the environment
    pub fn is_key_error(&self) -> bool {
        !matches!(self, CipherError::FileAccess { .. })
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
