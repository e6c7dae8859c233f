//! Keypair codec module.
//!
//! This module provides the core conversion logic of sol-keyconv:
//!
//! - Validation of the 64-integer JSON keypair format
//! - Base58 encoding of the full keypair or the embedded public key
//! - A standalone Base58-to-JSON decode utility
//!
//! All operations are pure functions over parsed JSON values; file access
//! lives in [`crate::storage`].

pub mod base58;
pub mod keypair;
