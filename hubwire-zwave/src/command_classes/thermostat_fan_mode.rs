//! Thermostat Fan Mode command class (0x44)

/// Fan modes
pub mod mode {
    pub const AUTO_LOW: u8 = 0x00;
    pub const LOW: u8 = 0x01;
    pub const AUTO_HIGH: u8 = 0x02;
    pub const HIGH: u8 = 0x03;
    pub const AUTO_MEDIUM: u8 = 0x04;
    pub const MEDIUM: u8 = 0x05;
}

pub mod v1 {
    zwave_commands! {
        ThermostatFanModeSet(0x44, 0x01, version = 1) {
            fan_mode: u8 => bits(0, 0, 4),
        }

        ThermostatFanModeGet(0x44, 0x02, version = 1) {}

        ThermostatFanModeReport(0x44, 0x03, version = 1) {
            fan_mode: u8 => bits(0, 0, 4),
        }

        ThermostatFanModeSupportedGet(0x44, 0x04, version = 1) {}

        /// Supported fan modes as a bit mask
        ThermostatFanModeSupportedReport(0x44, 0x05, version = 1) {
            auto: bool => flag(0, 0),
            low: bool => flag(0, 1),
            auto_high: bool => flag(0, 2),
            high: bool => flag(0, 3),
        }
    }
}

pub mod v2 {
    zwave_commands! {
        ThermostatFanModeSet(0x44, 0x01, version = 2) {
            fan_mode: u8 => bits(0, 0, 4),
            off: bool => flag(0, 7),
        }

        ThermostatFanModeReport(0x44, 0x03, version = 2) {
            fan_mode: u8 => bits(0, 0, 4),
            off: bool => flag(0, 7),
        }

        ThermostatFanModeSupportedReport(0x44, 0x05, version = 2) {
            auto: bool => flag(0, 0),
            low: bool => flag(0, 1),
            auto_high: bool => flag(0, 2),
            high: bool => flag(0, 3),
            auto_medium: bool => flag(0, 4),
            medium: bool => flag(0, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_supported_report_decode() {
        let none = v1::ThermostatFanModeSupportedReport::from_payload(&[0x00]);
        assert!(!none.auto && !none.low && !none.auto_high && !none.high);

        let all = v1::ThermostatFanModeSupportedReport::from_payload(&[0x0F]);
        assert!(all.auto && all.low && all.auto_high && all.high);
    }

    #[test]
    fn test_supported_report_encode() {
        let mut report = v1::ThermostatFanModeSupportedReport::default();

        report.auto = true;
        assert_eq!(report.payload(), vec![1]);
        report.low = true;
        assert_eq!(report.payload(), vec![3]);
        report.auto_high = true;
        assert_eq!(report.payload(), vec![7]);
        report.high = true;
        assert_eq!(report.payload(), vec![15]);
    }

    #[test]
    fn test_fan_mode_off() {
        let report = v2::ThermostatFanModeReport::from_payload(&[0x83]);

        assert!(report.off);
        assert_eq!(report.fan_mode, mode::HIGH);
        assert_eq!(
            v2::ThermostatFanModeSet { fan_mode: mode::LOW, off: false }.format(),
            "440101"
        );
    }
}
