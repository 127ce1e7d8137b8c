//! # hubwire-zwave
//!
//! Z-Wave command codec for hub wire text.
//!
//! This crate provides:
//! - Parsing of inbound `zw device: .., command: .., payload: ..` lines
//! - Typed command layouts for each command class version
//! - A registry keyed by class, command and version
//! - Version-aware dispatch of frames into [`Command`] values
//!
//! ## Example
//!
//! ```
//! use hubwire_zwave::{Command, Dispatcher, VersionMap};
//!
//! let dispatcher = Dispatcher::standard();
//! let command = dispatcher
//!     .parse("zw device: 0D, command: 8003, payload: 5A", &VersionMap::new())
//!     .unwrap();
//!
//! assert_eq!(command.to_string(), "BatteryReport(battery_level: 90)");
//! assert_eq!(command.format(), "80035A");
//! ```

#[macro_use]
mod macros;

pub mod catalog;
pub mod command;
pub mod command_classes;
pub mod dispatcher;
pub mod frame;
pub mod registry;

pub use catalog::Command;
pub use command::{UnrecognizedCommand, ZwaveCommand};
pub use dispatcher::{DispatchConfig, Dispatcher, VersionFallback, VersionMap};
pub use frame::CommandFrame;
pub use registry::{CommandRegistry, RegistryBuilder, RegistryEntry};
