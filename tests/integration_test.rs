//! Integration tests for sol-keyconv.
//!
//! These tests verify the complete conversion workflows of the system.

use ed25519_dalek::SigningKey;
use rand::RngCore;
use serde_json::json;
use sol_keyconv::codec::base58::{base58_to_json, keypair_to_base58, public_key_to_base58};
use sol_keyconv::codec::keypair::KeypairBytes;
use sol_keyconv::error::{KeyConvError, Result};
use sol_keyconv::storage::keyfile::{read_keypair_file, write_base58_file};
use std::fs;
use tempfile::TempDir;

fn write_keypair_fixture(dir: &TempDir, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("keypair.json");
    let contents = serde_json::to_string(&bytes.to_vec()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_complete_conversion_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let bytes: Vec<u8> = (0u8..=63).collect();

    // 1. Read the keypair file
    let input_path = write_keypair_fixture(&temp_dir, &bytes);
    let keypair_data = read_keypair_file(&input_path)?;

    // 2. Convert to Base58
    let base58_string = keypair_to_base58(&keypair_data)?;
    assert_eq!(base58_string, bs58::encode(&bytes).into_string());

    // 3. Write the output file and read it back
    let output_path = temp_dir.path().join("keypair.b58");
    write_base58_file(&output_path, &base58_string)?;
    assert_eq!(fs::read_to_string(&output_path).unwrap(), base58_string);

    // 4. The encoded string decodes back to the original bytes
    let decoded = bs58::decode(&base58_string).into_vec().unwrap();
    assert_eq!(decoded, bytes);

    Ok(())
}

#[test]
fn test_public_key_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let bytes: Vec<u8> = (0u8..=63).collect();

    let input_path = write_keypair_fixture(&temp_dir, &bytes);
    let keypair_data = read_keypair_file(&input_path)?;

    let public_key = public_key_to_base58(&keypair_data)?;

    // Only bytes [32, 64) are encoded
    assert_eq!(public_key, bs58::encode(&bytes[32..]).into_string());

    Ok(())
}

#[test]
fn test_zero_keypair_has_fixed_encoding() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    let input_path = write_keypair_fixture(&temp_dir, &[0u8; 64]);
    let keypair_data = read_keypair_file(&input_path)?;

    assert_eq!(keypair_to_base58(&keypair_data)?, "1".repeat(64));
    assert_eq!(
        public_key_to_base58(&keypair_data)?,
        "11111111111111111111111111111111"
    );

    Ok(())
}

#[test]
fn test_missing_input_file_error_context() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = read_keypair_file(&missing).unwrap_err();
    assert!(err.to_string().starts_with("Error reading keypair file:"));
}

#[test]
fn test_invalid_keypair_file_fails_conversion() {
    let temp_dir = TempDir::new().unwrap();

    let input_path = write_keypair_fixture(&temp_dir, &[0u8; 63]);
    let keypair_data = read_keypair_file(&input_path).unwrap();

    match keypair_to_base58(&keypair_data) {
        Err(err @ KeyConvError::Base58Conversion(_)) => {
            assert_eq!(
                err.to_string(),
                "Error converting to Base58: Invalid keypair format: \
                 Array must contain exactly 64 numbers"
            );
        }
        _ => panic!("Expected Base58Conversion"),
    }
}

#[test]
fn test_verification_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    // Generate a real keypair so the halves agree
    let mut seed = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed);
    let signing_key = SigningKey::from_bytes(&seed);

    let mut bytes = Vec::with_capacity(64);
    bytes.extend_from_slice(&signing_key.to_bytes());
    bytes.extend_from_slice(signing_key.verifying_key().as_bytes());

    let input_path = write_keypair_fixture(&temp_dir, &bytes);
    let keypair_data = read_keypair_file(&input_path)?;

    let keypair = KeypairBytes::from_json(&keypair_data)?;
    keypair.verify_consistency()?;

    // The printed public key matches the derived one
    let public_key = public_key_to_base58(&keypair_data)?;
    assert_eq!(
        public_key,
        bs58::encode(signing_key.verifying_key().as_bytes()).into_string()
    );

    Ok(())
}

#[test]
fn test_decode_utility_is_independent_of_encode() {
    // base58_to_json expects a JSON-text payload, so it round-trips with
    // encoded JSON text but not with keypair_to_base58 output.
    let payload = json!([7, 8, 9]);
    let encoded = bs58::encode(payload.to_string().as_bytes()).into_string();
    assert_eq!(base58_to_json(&encoded).unwrap(), payload);

    let keypair_encoded = keypair_to_base58(&json!(vec![1u8; 64])).unwrap();
    match base58_to_json(&keypair_encoded) {
        Err(KeyConvError::Decode) => {}
        _ => panic!("Expected Decode error for raw keypair payload"),
    }
}
