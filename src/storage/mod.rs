//! File storage module.
//!
//! This module provides the thin file adapters around the keypair codec:
//! reading JSON keypair files and writing Base58 output.

pub mod keyfile;
