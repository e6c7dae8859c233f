//! Keypair format validation.
//!
//! Solana keypair files store the secret seed and the public key as a single
//! JSON array of 64 integers. This module validates that shape and exposes
//! the validated bytes.

use crate::error::{KeyConvError, Result};
use ed25519_dalek::SigningKey;
use serde_json::Value;

/// Total length of a keypair in bytes.
pub const KEYPAIR_LENGTH: usize = 64;

/// Length of the public key portion in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// A validated 64-byte keypair.
///
/// Bytes `[0, 32)` are the secret seed; bytes `[32, 64)` are the public key.
/// Values of this type can only be obtained through [`KeypairBytes::from_json`],
/// so holding one implies the format invariants hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairBytes([u8; KEYPAIR_LENGTH]);

impl KeypairBytes {
    /// Validate a parsed JSON value as a 64-integer keypair array.
    ///
    /// The checks run in order and the first failing one is reported:
    /// the value must be an array, it must hold exactly 64 elements, and
    /// every element must be an integer between 0 and 255.
    ///
    /// # Example
    ///
    /// ```
    /// use sol_keyconv::codec::keypair::KeypairBytes;
    /// use serde_json::json;
    ///
    /// let value = json!((0u8..=63).collect::<Vec<_>>());
    /// let keypair = KeypairBytes::from_json(&value).unwrap();
    /// assert_eq!(keypair.public_key_bytes()[0], 32);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let elements = value
            .as_array()
            .ok_or_else(|| KeyConvError::InvalidKeypair("Data must be an array".to_string()))?;

        if elements.len() != KEYPAIR_LENGTH {
            return Err(KeyConvError::InvalidKeypair(
                "Array must contain exactly 64 numbers".to_string(),
            ));
        }

        let mut bytes = [0u8; KEYPAIR_LENGTH];
        for (slot, element) in bytes.iter_mut().zip(elements) {
            let byte = element
                .as_u64()
                .filter(|n| *n <= u8::MAX as u64)
                .ok_or_else(|| {
                    KeyConvError::InvalidKeypair(
                        "Array must contain integers between 0 and 255".to_string(),
                    )
                })?;
            *slot = byte as u8;
        }

        Ok(Self(bytes))
    }

    /// All 64 bytes of the keypair.
    pub fn as_bytes(&self) -> &[u8; KEYPAIR_LENGTH] {
        &self.0
    }

    /// The secret seed, bytes `[0, 32)`.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.0[..PUBLIC_KEY_LENGTH]
    }

    /// The public key, bytes `[32, 64)`.
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.0[PUBLIC_KEY_LENGTH..]
    }

    /// Check that the embedded public key matches the one derived from the
    /// secret seed.
    ///
    /// A keypair file whose halves disagree would still encode to a valid
    /// Base58 string, so this check is opt-in rather than part of
    /// [`KeypairBytes::from_json`].
    pub fn verify_consistency(&self) -> Result<()> {
        let mut seed = [0u8; PUBLIC_KEY_LENGTH];
        seed.copy_from_slice(self.secret_bytes());

        let derived = SigningKey::from_bytes(&seed).verifying_key();
        if derived.as_bytes() != self.public_key_bytes() {
            return Err(KeyConvError::Verification(
                "public key does not match secret key".to_string(),
            ));
        }

        Ok(())
    }
}
