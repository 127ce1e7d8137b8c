//! # hubwire
//!
//! Codec for the text a home automation hub exchanges with its Z-Wave and
//! Zigbee radios.
//!
//! ## Features
//!
//! - Typed Z-Wave commands across command class versions
//! - Version-aware dispatch with configurable fallback
//! - Zigbee attribute reads, catchalls and IAS zone status
//! - ZCL data type packing to and from hex
//!
//! ## Quick Start
//!
//! ```
//! use hubwire::{Decoder, Message, VersionMap};
//!
//! let decoder = Decoder::new();
//! let versions = VersionMap::from([(0x71, 2)]);
//!
//! match decoder.decode("zw device: 0A, command: 7105, payload: 15 01", &versions)? {
//!     Message::ZWave(command) => println!("{command}"),
//!     Message::Zigbee(description) => println!("{description:?}"),
//! }
//! # Ok::<(), hubwire::Error>(())
//! ```

pub mod decoder;
pub mod error;

// Re-exports
pub use decoder::{Decoder, Message};
pub use error::{Error, Result};

pub use hubwire_core::hex;
pub use hubwire_zigbee::{DataType, Description, ZoneStatus};
pub use hubwire_zwave::{
    Command, CommandFrame, CommandRegistry, DispatchConfig, Dispatcher, VersionFallback,
    VersionMap, ZwaveCommand,
};

// Re-export the stacks
pub use hubwire_zigbee as zigbee;
pub use hubwire_zwave as zwave;
