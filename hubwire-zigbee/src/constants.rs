//! Zigbee protocol constants

/// Application profiles
pub mod profiles {
    /// Home Automation
    pub const HOME_AUTOMATION: u16 = 0x0104;

    /// Zigbee Light Link
    pub const LIGHT_LINK: u16 = 0xC05E;
}

/// Cluster identifiers
pub mod clusters {
    pub const BASIC: u16 = 0x0000;
    pub const POWER_CONFIGURATION: u16 = 0x0001;
    pub const IDENTIFY: u16 = 0x0003;
    pub const GROUPS: u16 = 0x0004;
    pub const SCENES: u16 = 0x0005;
    pub const ON_OFF: u16 = 0x0006;
    pub const LEVEL_CONTROL: u16 = 0x0008;
    pub const POLL_CONTROL: u16 = 0x0020;
    pub const COLOR_CONTROL: u16 = 0x0300;
    pub const ILLUMINANCE_MEASUREMENT: u16 = 0x0400;
    pub const TEMPERATURE_MEASUREMENT: u16 = 0x0402;
    pub const RELATIVE_HUMIDITY: u16 = 0x0405;
    pub const OCCUPANCY_SENSING: u16 = 0x0406;
    pub const IAS_ZONE: u16 = 0x0500;
    pub const ELECTRICAL_MEASUREMENT: u16 = 0x0B04;
    pub const DIAGNOSTICS: u16 = 0x0B05;
}

/// Attribute identifiers, scoped by cluster
pub mod attributes {
    /// On/Off cluster: current state
    pub const ON_OFF: u16 = 0x0000;

    /// Level Control cluster: current level
    pub const CURRENT_LEVEL: u16 = 0x0000;

    /// Measurement clusters: measured value
    pub const MEASURED_VALUE: u16 = 0x0000;

    /// Power Configuration cluster: battery voltage
    pub const BATTERY_VOLTAGE: u16 = 0x0020;

    /// IAS Zone cluster: zone status
    pub const ZONE_STATUS: u16 = 0x0002;
}

/// IAS Zone cluster commands (server to client)
pub mod ias_zone {
    /// Zone status change notification
    pub const ZONE_STATUS_CHANGE_NOTIFICATION: u8 = 0x00;

    /// Zone enroll request
    pub const ZONE_ENROLL_REQUEST: u8 = 0x01;
}

/// Frame direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    ClientToServer = 0,
    ServerToClient = 1,
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Self::ClientToServer),
            1 => Ok(Self::ServerToClient),
            other => Err(other),
        }
    }
}
