//! Error types for sol-keyconv.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and carry the exact context
//! string that the CLI prints to standard error.

use thiserror::Error;

/// The main error type for sol-keyconv operations.
///
/// This enum covers all possible errors that can occur during keypair
/// validation, Base58 conversion, and file I/O.
#[derive(Error, Debug)]
pub enum KeyConvError {
    /// Keypair array failed shape validation
    #[error("Invalid keypair format: {0}")]
    InvalidKeypair(String),

    /// Reading or parsing the input keypair file failed
    #[error("Error reading keypair file: {0}")]
    ReadFile(String),

    /// Writing the output file failed
    #[error("Error writing output file: {0}")]
    WriteFile(String),

    /// Validation failure surfaced through the full-keypair conversion path
    #[error("Error converting to Base58: {0}")]
    Base58Conversion(String),

    /// Base58 decode utility failure (bad alphabet or non-JSON payload)
    #[error("Invalid base58 string or JSON format")]
    Decode,

    /// Embedded public key does not match the secret half
    #[error("Keypair verification failed: {0}")]
    Verification(String),
}

/// A specialized Result type for sol-keyconv operations.
pub type Result<T> = std::result::Result<T, KeyConvError>;
