//! # hubwire-zigbee
//!
//! Zigbee Cluster Library codec pieces:
//! - Primitive data type table with pack/unpack to hex
//! - IAS Zone status bit view
//! - Parsing of inbound description lines (attribute reads, catchalls,
//!   zone status notifications)
//! - Profile, cluster and attribute constants

pub mod constants;
pub mod data_type;
pub mod description;
pub mod zone_status;

pub use data_type::{DataLength, DataType};
pub use description::{AttributeEvent, Catchall, Description, ReadAttribute};
pub use zone_status::{ZoneStatus, ZoneStatusChange, ZoneStatusFlags};
