//! Whole-file read, transform and write

use crate::cipher::{Cipher, Direction};
use crate::error::{CipherError, Result};
use std::fs;
use std::path::Path;

/// Read the entire file into one string
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CipherError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the file's contents with `content`
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| CipherError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `input`, apply `cipher`, write the result to `output`.
///
/// The output file is only opened once the full result exists, so a failed
/// read never creates or truncates it.
pub fn transform_file(
    input: &Path,
    output: &Path,
    cipher: &Cipher,
    direction: Direction,
) -> Result<String> {
    let content = read_text(input)?;
    let result = cipher.apply(direction, &content);
    write_text(output, &result)?;
    log::debug!(
        "wrote {} bytes from {} to {}",
        result.len(),
        input.display(),
        output.display()
    );
    Ok(result)
}
