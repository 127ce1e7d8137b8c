//! The closed set of known commands
//!
//! Every command layout is listed once below. The list generates the
//! [`Command`] sum type, conversions to and from each layout, and the
//! static [`CATALOG`] the standard registry is built from.

use std::fmt;

use crate::command::{UnrecognizedCommand, ZwaveCommand};
use crate::command_classes::*;
use crate::frame::CommandFrame;
use crate::registry::RegistryEntry;

macro_rules! catalog {
    ($( $variant:ident => $ty:ty ),* $(,)?) => {
        /// A decoded Z-Wave command
        ///
        /// Variants carrying a version suffix name the same command at
        /// different command class versions.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Command {
            $( $variant($ty), )*

            /// No layout registered at any version
            Unrecognized(UnrecognizedCommand),
        }

        $(
            impl From<$ty> for Command {
                fn from(command: $ty) -> Self {
                    Command::$variant(command)
                }
            }

            impl TryFrom<Command> for $ty {
                type Error = Command;

                fn try_from(command: Command) -> Result<Self, Command> {
                    match command {
                        Command::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*

        impl Command {
            /// Command class identifier
            pub fn command_class(&self) -> u8 {
                match self {
                    $( Self::$variant(_) => <$ty as ZwaveCommand>::COMMAND_CLASS, )*
                    Self::Unrecognized(command) => command.command_class,
                }
            }

            /// Command identifier within the class
            pub fn command(&self) -> u8 {
                match self {
                    $( Self::$variant(_) => <$ty as ZwaveCommand>::COMMAND, )*
                    Self::Unrecognized(command) => command.command,
                }
            }

            /// Command class version of the decoded layout
            pub fn version(&self) -> Option<u8> {
                match self {
                    $( Self::$variant(_) => Some(<$ty as ZwaveCommand>::VERSION), )*
                    Self::Unrecognized(_) => None,
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$ty as ZwaveCommand>::NAME, )*
                    Self::Unrecognized(_) => "Unrecognized",
                }
            }

            /// Payload bytes; the raw payload for unrecognized commands
            pub fn payload(&self) -> Vec<u8> {
                match self {
                    $( Self::$variant(command) => command.payload(), )*
                    Self::Unrecognized(command) => command.payload.to_vec(),
                }
            }
        }

        impl fmt::Display for Command {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(command) => fmt::Display::fmt(command, f), )*
                    Self::Unrecognized(command) => fmt::Display::fmt(command, f),
                }
            }
        }

        /// Registration entry for every known layout
        pub static CATALOG: &[RegistryEntry] = &[
            $( RegistryEntry::of::<$ty>(), )*
        ];
    };
}

catalog! {
    // Basic
    BasicSet => basic::v1::BasicSet,
    BasicGet => basic::v1::BasicGet,
    BasicReportV1 => basic::v1::BasicReport,
    BasicReportV2 => basic::v2::BasicReport,

    // Application status
    ApplicationBusy => application_status::v1::ApplicationBusy,
    ApplicationRejectedRequest => application_status::v1::ApplicationRejectedRequest,

    // Z/IP
    ZipPacket => zip::v2::ZipPacket,
    ZipKeepAlive => zip::v2::ZipKeepAlive,

    // Binary switch
    SwitchBinarySetV1 => switch_binary::v1::SwitchBinarySet,
    SwitchBinaryGet => switch_binary::v1::SwitchBinaryGet,
    SwitchBinaryReportV1 => switch_binary::v1::SwitchBinaryReport,
    SwitchBinarySetV2 => switch_binary::v2::SwitchBinarySet,
    SwitchBinaryReportV2 => switch_binary::v2::SwitchBinaryReport,

    // Multilevel switch
    SwitchMultilevelSetV1 => switch_multilevel::v1::SwitchMultilevelSet,
    SwitchMultilevelGet => switch_multilevel::v1::SwitchMultilevelGet,
    SwitchMultilevelReportV1 => switch_multilevel::v1::SwitchMultilevelReport,
    SwitchMultilevelStartLevelChangeV1 => switch_multilevel::v1::SwitchMultilevelStartLevelChange,
    SwitchMultilevelStopLevelChange => switch_multilevel::v1::SwitchMultilevelStopLevelChange,
    SwitchMultilevelSetV2 => switch_multilevel::v2::SwitchMultilevelSet,
    SwitchMultilevelStartLevelChangeV2 => switch_multilevel::v2::SwitchMultilevelStartLevelChange,
    SwitchMultilevelReportV3 => switch_multilevel::v3::SwitchMultilevelReport,
    SwitchMultilevelStartLevelChangeV3 => switch_multilevel::v3::SwitchMultilevelStartLevelChange,
    SwitchMultilevelSupportedGet => switch_multilevel::v3::SwitchMultilevelSupportedGet,
    SwitchMultilevelSupportedReport => switch_multilevel::v3::SwitchMultilevelSupportedReport,

    // Network management inclusion
    NodeAdd => network_management_inclusion::v1::NodeAdd,
    NodeAddStatusV1 => network_management_inclusion::v1::NodeAddStatus,
    NodeRemove => network_management_inclusion::v1::NodeRemove,
    NodeRemoveStatus => network_management_inclusion::v1::NodeRemoveStatus,
    NodeAddStatusV2 => network_management_inclusion::v2::NodeAddStatus,

    // Thermostat fan mode
    ThermostatFanModeSetV1 => thermostat_fan_mode::v1::ThermostatFanModeSet,
    ThermostatFanModeGet => thermostat_fan_mode::v1::ThermostatFanModeGet,
    ThermostatFanModeReportV1 => thermostat_fan_mode::v1::ThermostatFanModeReport,
    ThermostatFanModeSupportedGet => thermostat_fan_mode::v1::ThermostatFanModeSupportedGet,
    ThermostatFanModeSupportedReportV1 => thermostat_fan_mode::v1::ThermostatFanModeSupportedReport,
    ThermostatFanModeSetV2 => thermostat_fan_mode::v2::ThermostatFanModeSet,
    ThermostatFanModeReportV2 => thermostat_fan_mode::v2::ThermostatFanModeReport,
    ThermostatFanModeSupportedReportV2 => thermostat_fan_mode::v2::ThermostatFanModeSupportedReport,

    // Network management basic node
    LearnModeSet => network_management_basic::v1::LearnModeSet,
    LearnModeSetStatusV1 => network_management_basic::v1::LearnModeSetStatus,
    NetworkUpdateRequest => network_management_basic::v1::NetworkUpdateRequest,
    NetworkUpdateRequestStatus => network_management_basic::v1::NetworkUpdateRequestStatus,
    NodeInformationSend => network_management_basic::v1::NodeInformationSend,
    DefaultSet => network_management_basic::v1::DefaultSet,
    DefaultSetComplete => network_management_basic::v1::DefaultSetComplete,
    LearnModeSetStatusV2 => network_management_basic::v2::LearnModeSetStatus,
    DskGet => network_management_basic::v2::DskGet,
    DskReport => network_management_basic::v2::DskReport,

    // Network management proxy
    NodeListGet => network_management_proxy::v1::NodeListGet,
    NodeListReport => network_management_proxy::v1::NodeListReport,
    NodeInfoCachedGet => network_management_proxy::v1::NodeInfoCachedGet,
    NodeInfoCachedReportV1 => network_management_proxy::v1::NodeInfoCachedReport,
    FailedNodeListGet => network_management_proxy::v1::FailedNodeListGet,
    FailedNodeListReport => network_management_proxy::v1::FailedNodeListReport,
    NodeInfoCachedReportV3 => network_management_proxy::v3::NodeInfoCachedReport,

    // CRC-16 encapsulation
    Crc16Encap => crc16_encap::v1::Crc16Encap,

    // Z/IP neighbor discovery
    ZipNodeAdvertisement => zip_nd::v1::ZipNodeAdvertisement,
    ZipNodeSolicitation => zip_nd::v1::ZipNodeSolicitation,
    ZipInvNodeSolicitation => zip_nd::v1::ZipInvNodeSolicitation,

    // Z/IP gateway
    UnsolicitedDestinationSet => zip_gateway::v1::UnsolicitedDestinationSet,
    UnsolicitedDestinationGet => zip_gateway::v1::UnsolicitedDestinationGet,
    UnsolicitedDestinationReport => zip_gateway::v1::UnsolicitedDestinationReport,

    // Door lock
    DoorLockOperationSet => door_lock::v1::DoorLockOperationSet,
    DoorLockOperationGet => door_lock::v1::DoorLockOperationGet,
    DoorLockOperationReport => door_lock::v1::DoorLockOperationReport,

    // User code
    UserCodeSet => user_code::v1::UserCodeSet,
    UserCodeGet => user_code::v1::UserCodeGet,
    UserCodeReport => user_code::v1::UserCodeReport,
    UsersNumberGet => user_code::v1::UsersNumberGet,
    UsersNumberReportV1 => user_code::v1::UsersNumberReport,
    UsersNumberReportV2 => user_code::v2::UsersNumberReport,
    UserCodeCapabilitiesGet => user_code::v2::UserCodeCapabilitiesGet,

    // Configuration
    ConfigurationSet => configuration::v1::ConfigurationSet,
    ConfigurationGet => configuration::v1::ConfigurationGet,
    ConfigurationReport => configuration::v1::ConfigurationReport,

    // Alarm
    AlarmGetV1 => alarm::v1::AlarmGet,
    AlarmReportV1 => alarm::v1::AlarmReport,
    AlarmGetV2 => alarm::v2::AlarmGet,
    AlarmReportV2 => alarm::v2::AlarmReport,
    AlarmSet => alarm::v2::AlarmSet,
    AlarmTypeSupportedGet => alarm::v2::AlarmTypeSupportedGet,
    AlarmTypeSupportedReport => alarm::v2::AlarmTypeSupportedReport,

    // Manufacturer specific
    ManufacturerSpecificGet => manufacturer_specific::v1::ManufacturerSpecificGet,
    ManufacturerSpecificReport => manufacturer_specific::v1::ManufacturerSpecificReport,
    DeviceSpecificGet => manufacturer_specific::v2::DeviceSpecificGet,
    DeviceSpecificReport => manufacturer_specific::v2::DeviceSpecificReport,

    // Battery
    BatteryGet => battery::v1::BatteryGet,
    BatteryReport => battery::v1::BatteryReport,

    // Hail
    Hail => hail::v1::Hail,

    // Association
    AssociationSet => association::v1::AssociationSet,
    AssociationGet => association::v1::AssociationGet,
    AssociationReport => association::v1::AssociationReport,
    AssociationRemove => association::v1::AssociationRemove,
    AssociationGroupingsGet => association::v1::AssociationGroupingsGet,
    AssociationGroupingsReport => association::v1::AssociationGroupingsReport,
    AssociationSpecificGroupGet => association::v2::AssociationSpecificGroupGet,
    AssociationSpecificGroupReport => association::v2::AssociationSpecificGroupReport,

    // Version
    VersionGet => version::v1::VersionGet,
    VersionReportV1 => version::v1::VersionReport,
    VersionCommandClassGet => version::v1::VersionCommandClassGet,
    VersionCommandClassReport => version::v1::VersionCommandClassReport,
    VersionReportV2 => version::v2::VersionReport,
    VersionCapabilitiesGet => version::v3::VersionCapabilitiesGet,
    VersionCapabilitiesReport => version::v3::VersionCapabilitiesReport,
    VersionZWaveSoftwareGet => version::v3::VersionZWaveSoftwareGet,
    VersionZWaveSoftwareReport => version::v3::VersionZWaveSoftwareReport,

    // Time
    TimeGet => time::v1::TimeGet,
    TimeReport => time::v1::TimeReport,
    DateGet => time::v1::DateGet,
    DateReport => time::v1::DateReport,

    // Security (S0)
    SecurityCommandsSupportedGet => security::v1::SecurityCommandsSupportedGet,
    SecurityCommandsSupportedReport => security::v1::SecurityCommandsSupportedReport,
    SecuritySchemeGet => security::v1::SecuritySchemeGet,
    SecuritySchemeReport => security::v1::SecuritySchemeReport,
    NetworkKeySet => security::v1::NetworkKeySet,
    NetworkKeyVerify => security::v1::NetworkKeyVerify,
    SecuritySchemeInherit => security::v1::SecuritySchemeInherit,
    SecurityNonceGet => security::v1::SecurityNonceGet,
    SecurityNonceReport => security::v1::SecurityNonceReport,
    SecurityMessageEncapsulation => security::v1::SecurityMessageEncapsulation,
}

impl Command {
    /// Four hex digit class and command code
    pub fn code(&self) -> String {
        format!("{:02X}{:02X}", self.command_class(), self.command())
    }

    /// Outbound wire text: code followed by payload hex
    pub fn format(&self) -> String {
        format!("{}{}", self.code(), hubwire_core::hex::bytes_to_hex(self.payload()))
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Frame carrying this command from `device`
    pub fn to_frame(&self, device: impl Into<String>) -> CommandFrame {
        CommandFrame::new(device, self.command_class(), self.command(), self.payload())
    }
}

impl From<UnrecognizedCommand> for Command {
    fn from(command: UnrecognizedCommand) -> Self {
        Command::Unrecognized(command)
    }
}
