//! sol-keyconv: Solana keypair JSON to Base58 conversion.
//!
//! This library converts a 64-byte Solana keypair stored as a JSON array of
//! integers into a Base58-encoded string, and can extract the embedded
//! public key. It enables users to:
//!
//! - Validate the 64-integer keypair file format
//! - Encode the full keypair or just the public key with Base58
//! - Decode Base58-wrapped JSON payloads
//!
//! # Architecture
//!
//! The conversion logic is composed from small, testable functions. All
//! operations return `Result` types with the exact error context the CLI
//! prints - no `unwrap()` or panic outside tests.
//!
//! # Example
//!
//! ```
//! use sol_keyconv::codec::base58::keypair_to_base58;
//! use serde_json::json;
//!
//! let keypair = json!(vec![0u8; 64]);
//! let encoded = keypair_to_base58(&keypair).unwrap();
//! assert_eq!(encoded, "1".repeat(64));
//! ```

pub mod codec;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use error::{KeyConvError, Result};
