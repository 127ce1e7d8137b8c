//! Z-Wave command classes
//!
//! One module per command class, with a `vN` submodule for each version
//! that introduces or changes a command layout. Commands that do not
//! change keep living in the version that introduced them.

pub mod alarm;
pub mod application_status;
pub mod association;
pub mod basic;
pub mod battery;
pub mod configuration;
pub mod crc16_encap;
pub mod door_lock;
pub mod hail;
pub mod manufacturer_specific;
pub mod network_management_basic;
pub mod network_management_inclusion;
pub mod network_management_proxy;
pub mod security;
pub mod switch_binary;
pub mod switch_multilevel;
pub mod thermostat_fan_mode;
pub mod time;
pub mod user_code;
pub mod version;
pub mod zip;
pub mod zip_gateway;
pub mod zip_nd;
