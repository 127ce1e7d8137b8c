//! IAS Zone status word
//!
//! The IAS Zone cluster reports sensor state as a 16-bit bitmap. Bit 0 is
//! the least significant bit.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use hubwire_core::{hex, Error, Result};

bitflags! {
    /// Defined bits of the zone status word
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ZoneStatusFlags: u16 {
        const ALARM1 = 1 << 0;
        const ALARM2 = 1 << 1;
        const TAMPER = 1 << 2;
        const BATTERY = 1 << 3;
        const SUPERVISION_REPORTS = 1 << 4;
        const RESTORE_REPORTS = 1 << 5;
        const TROUBLE = 1 << 6;
        const AC = 1 << 7;
        const TEST = 1 << 8;
        const BATTERY_DEFECT = 1 << 9;
    }
}

/// Read-only view over a zone status word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZoneStatus(u16);

macro_rules! zone_flags {
    ($( $(#[$meta:meta])* $flag:ident: $raw:ident, $is_set:ident; )*) => {
        impl ZoneStatus {
            $(
                $(#[$meta])*
                pub fn $raw(&self) -> u8 {
                    u8::from(self.$is_set())
                }

                $(#[$meta])*
                pub fn $is_set(&self) -> bool {
                    self.flags().contains(ZoneStatusFlags::$flag)
                }
            )*
        }
    };
}

zone_flags! {
    /// Alarm 1 (opened or alarmed)
    ALARM1: alarm1, is_alarm1_set;
    /// Alarm 2 (opened or alarmed)
    ALARM2: alarm2, is_alarm2_set;
    /// Tampered
    TAMPER: tamper, is_tamper_set;
    /// Battery low
    BATTERY: battery, is_battery_set;
    /// Device sends periodic supervision reports
    SUPERVISION_REPORTS: supervision_reports, is_supervision_reports_set;
    /// Device reports alarm restore
    RESTORE_REPORTS: restore_reports, is_restore_reports_set;
    /// Trouble or failure
    TROUBLE: trouble, is_trouble_set;
    /// AC mains fault
    AC: ac, is_ac_set;
    /// Sensor in test mode
    TEST: test, is_test_set;
    /// Battery defective
    BATTERY_DEFECT: battery_defect, is_battery_defect_set;
}

impl ZoneStatus {
    pub fn new(word: u16) -> Self {
        Self(word)
    }

    /// Raw status word
    pub fn word(&self) -> u16 {
        self.0
    }

    /// Defined flags, ignoring reserved bits
    pub fn flags(&self) -> ZoneStatusFlags {
        ZoneStatusFlags::from_bits_truncate(self.0)
    }

    /// Check if either alarm bit is set
    pub fn is_alarmed(&self) -> bool {
        self.flags()
            .intersects(ZoneStatusFlags::ALARM1 | ZoneStatusFlags::ALARM2)
    }
}

impl From<u16> for ZoneStatus {
    fn from(word: u16) -> Self {
        Self(word)
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneStatus(0x{:04X}", self.0)?;
        for (name, _) in self.flags().iter_names() {
            write!(f, " {}", name)?;
        }
        write!(f, ")")
    }
}

/// Zone status change notification as rendered by the radio
///
/// `"zone status 0x0021 -- extended status 0x00 -- zone ID 0x01 -- delay 0x0000"`
///
/// Only the zone status part is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneStatusChange {
    pub zone_status: ZoneStatus,
    pub extended_status: u8,
    pub zone_id: u8,
    pub delay: u16,
}

impl ZoneStatusChange {
    pub const PREFIX: &'static str = "zone status ";
}

fn narrow<T: TryFrom<u64>>(line: &str, name: &str, text: &str) -> Result<T> {
    let value = hex::hex_to_int(text)?;
    T::try_from(value).map_err(|_| Error::malformed_frame(line, format!("{name} out of range")))
}

impl FromStr for ZoneStatusChange {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split("--").map(str::trim);
        let status = parts
            .next()
            .and_then(|part| part.strip_prefix(Self::PREFIX))
            .ok_or_else(|| Error::malformed_frame(line, "missing zone status"))?;

        let mut change = Self {
            zone_status: ZoneStatus(narrow(line, "zone status", status)?),
            ..Self::default()
        };

        for part in parts {
            if let Some(value) = part.strip_prefix("extended status ") {
                change.extended_status = narrow(line, "extended status", value)?;
            } else if let Some(value) = part.strip_prefix("zone ID ") {
                change.zone_id = narrow(line, "zone ID", value)?;
            } else if let Some(value) = part.strip_prefix("delay ") {
                change.delay = narrow(line, "delay", value)?;
            }
        }

        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_bits(status: ZoneStatus) -> [u8; 10] {
        [
            status.alarm1(),
            status.alarm2(),
            status.tamper(),
            status.battery(),
            status.supervision_reports(),
            status.restore_reports(),
            status.trouble(),
            status.ac(),
            status.test(),
            status.battery_defect(),
        ]
    }

    #[test]
    fn test_no_flags() {
        let status = ZoneStatus::new(0x0000);
        assert_eq!(all_bits(status), [0; 10]);
        assert!(!status.is_alarmed());
    }

    #[test]
    fn test_all_flags() {
        let status = ZoneStatus::new(0x03FF);
        assert_eq!(all_bits(status), [1; 10]);
        assert!(status.is_battery_defect_set());
        assert!(status.is_supervision_reports_set());
        assert_eq!(status.flags(), ZoneStatusFlags::all());
    }

    #[test]
    fn test_alarm1_only() {
        let status = ZoneStatus::new(0x0001);
        assert_eq!(all_bits(status), [1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(status.is_alarm1_set());
        assert!(status.is_alarmed());
    }

    #[test]
    fn test_alarm1_and_trouble() {
        let status = ZoneStatus::new(0x0041);
        assert_eq!(all_bits(status), [1, 0, 0, 0, 0, 0, 1, 0, 0, 0]);
        assert!(status.is_trouble_set());
        assert!(!status.is_tamper_set());
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let status = ZoneStatus::new(0xFC00);
        assert_eq!(all_bits(status), [0; 10]);
        assert_eq!(status.word(), 0xFC00);
    }

    #[test]
    fn test_display() {
        assert_eq!(ZoneStatus::new(0x0041).to_string(), "ZoneStatus(0x0041 ALARM1 TROUBLE)");
    }

    #[test]
    fn test_parse_change_notification() {
        let change: ZoneStatusChange =
            "zone status 0x0021 -- extended status 0x00 -- zone ID 0x01 -- delay 0x0010"
                .parse()
                .unwrap();

        assert_eq!(change.zone_status.word(), 0x0021);
        assert!(change.zone_status.is_alarm1_set());
        assert!(change.zone_status.is_restore_reports_set());
        assert_eq!(change.zone_id, 1);
        assert_eq!(change.delay, 0x10);
    }

    #[test]
    fn test_parse_status_only() {
        let change: ZoneStatusChange = "zone status 0x0004".parse().unwrap();
        assert!(change.zone_status.is_tamper_set());
        assert_eq!(change.extended_status, 0);
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!("catchall: 0104 0500".parse::<ZoneStatusChange>().is_err());
        assert!("zone status 0xZZ".parse::<ZoneStatusChange>().is_err());
        assert!("zone status 0x10000".parse::<ZoneStatusChange>().is_err());
    }
}
