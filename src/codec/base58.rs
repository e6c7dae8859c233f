//! Base58 conversion.
//!
//! This module provides the conversion entry points used by the CLI: full
//! keypair to Base58, public key extraction, and the standalone
//! Base58-to-JSON decode utility.

use crate::codec::keypair::KeypairBytes;
use crate::error::{KeyConvError, Result};
use serde_json::Value;

/// Convert a parsed keypair array to its Base58 string.
///
/// Validation failures are wrapped with the conversion context, so the
/// resulting message reads
/// `Error converting to Base58: Invalid keypair format: …`.
///
/// # Example
///
/// ```
/// use sol_keyconv::codec::base58::keypair_to_base58;
/// use serde_json::json;
///
/// let keypair = json!(vec![0u8; 64]);
/// let encoded = keypair_to_base58(&keypair).unwrap();
/// assert_eq!(encoded, "1".repeat(64));
/// ```
pub fn keypair_to_base58(value: &Value) -> Result<String> {
    let keypair = KeypairBytes::from_json(value)
        .map_err(|e| KeyConvError::Base58Conversion(e.to_string()))?;

    Ok(bs58::encode(keypair.as_bytes()).into_string())
}

/// Extract the embedded public key and return it as a Base58 string.
///
/// In Solana keypairs the last 32 bytes are the public key; only those
/// bytes are encoded. Validation failures surface unwrapped.
///
/// # Example
///
/// ```
/// use sol_keyconv::codec::base58::public_key_to_base58;
/// use serde_json::json;
///
/// let keypair = json!(vec![0u8; 64]);
/// let public_key = public_key_to_base58(&keypair).unwrap();
/// assert_eq!(public_key, "1".repeat(32));
/// ```
pub fn public_key_to_base58(value: &Value) -> Result<String> {
    let keypair = KeypairBytes::from_json(value)?;

    Ok(bs58::encode(keypair.public_key_bytes()).into_string())
}

/// Decode a Base58 string whose payload is JSON text.
///
/// This is a standalone utility and not the inverse of
/// [`keypair_to_base58`]: encoding operates on raw keypair bytes, while
/// this function expects the decoded bytes to be UTF-8 JSON text. Any
/// invalid Base58 character, non-UTF-8 payload, or malformed JSON yields
/// the same [`KeyConvError::Decode`] error.
///
/// # Example
///
/// ```
/// use sol_keyconv::codec::base58::base58_to_json;
/// use serde_json::json;
///
/// let encoded = bs58::encode(b"[1,2,3]").into_string();
/// let value = base58_to_json(&encoded).unwrap();
/// assert_eq!(value, json!([1, 2, 3]));
/// ```
pub fn base58_to_json(encoded: &str) -> Result<Value> {
    let bytes = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| KeyConvError::Decode)?;

    let text = String::from_utf8(bytes).map_err(|_| KeyConvError::Decode)?;

    serde_json::from_str(&text).map_err(|_| KeyConvError::Decode)
}
