//! Keypair file reading and output writing.
//!
//! Both adapters surface any failure as a single wrapped error carrying the
//! context the CLI prints, and emit debug-level traces for diagnostics.

use crate::error::{KeyConvError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a keypair file and parse its content as JSON.
///
/// Any read or parse failure surfaces as one wrapped error with the
/// `Error reading keypair file: …` context. The returned value is not yet
/// validated as a keypair; that is the codec's job.
///
/// # Example
///
/// ```rust,no_run
/// use sol_keyconv::storage::keyfile::read_keypair_file;
/// use std::path::Path;
///
/// let keypair_data = read_keypair_file(Path::new("keypair.json")).unwrap();
/// assert!(keypair_data.is_array());
/// ```
pub fn read_keypair_file(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).map_err(|e| KeyConvError::ReadFile(e.to_string()))?;

    log::debug!("read {} bytes from {}", contents.len(), path.display());

    serde_json::from_str(&contents).map_err(|e| KeyConvError::ReadFile(e.to_string()))
}

/// Write a Base58 string to the output path, overwriting any existing file.
pub fn write_base58_file(path: &Path, base58_string: &str) -> Result<()> {
    fs::write(path, base58_string).map_err(|e| KeyConvError::WriteFile(e.to_string()))?;

    log::debug!("wrote {} bytes to {}", base58_string.len(), path.display());

    Ok(())
}
