//! # hubwire-core
//!
//! Shared codec primitives for the Z-Wave and Zigbee stacks.
//!
//! This crate provides:
//! - Hex text conversions and byte-order reversal
//! - Bit and byte addressed payload reading/writing
//! - CRC-16 calculation
//! - The error type shared by the codec crates

pub mod checksum;
pub mod error;
pub mod hex;
pub mod payload;

pub use error::{Error, Result};
pub use payload::{PayloadReader, PayloadWriter};
