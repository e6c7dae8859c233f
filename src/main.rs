//! sol-keyconv CLI application.
//!
//! This binary converts a Solana keypair JSON file (a 64-integer array) to
//! its Base58 string, or prints the embedded public key.

use clap::Parser;
use sol_keyconv::codec::base58::{keypair_to_base58, public_key_to_base58};
use sol_keyconv::codec::keypair::KeypairBytes;
use sol_keyconv::error::Result;
use sol_keyconv::storage::keyfile::{read_keypair_file, write_base58_file};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sol-keyconv")]
#[command(version)]
#[command(about = "Convert Solana keypair JSON file to Base58 format", long_about = None)]
struct Cli {
    /// Input keypair JSON file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display public key only
    #[arg(short = 'p', long)]
    public_key: bool,

    /// Check that the embedded public key matches the secret half
    #[arg(long)]
    verify: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let keypair_data = read_keypair_file(&cli.input)?;

    if cli.verify {
        KeypairBytes::from_json(&keypair_data)?.verify_consistency()?;
    }

    if cli.public_key {
        let public_key = public_key_to_base58(&keypair_data)?;
        println!("Public Key (Base58):");
        println!("{}", public_key);
        return Ok(());
    }

    let base58_string = keypair_to_base58(&keypair_data)?;

    if let Some(output) = cli.output {
        write_base58_file(&output, &base58_string)?;
        println!(
            "Successfully converted keypair to Base58 and saved to {}",
            output.display()
        );
    } else {
        println!("Keypair Base58:");
        println!("{}", base58_string);
    }

    Ok(())
}
