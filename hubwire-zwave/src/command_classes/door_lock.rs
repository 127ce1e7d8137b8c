//! Door Lock command class (0x62)

pub mod v1 {
    zwave_commands! {
        DoorLockOperationSet(0x62, 0x01, version = 1) {
            door_lock_mode: u8 => u8(0),
        }

        DoorLockOperationGet(0x62, 0x02, version = 1) {}

        DoorLockOperationReport(0x62, 0x03, version = 1) {
            door_lock_mode: u8 => u8(0),
            /// Outside handles able to open the door, one bit per handle
            outside_door_handles_mode: u8 => bits(1, 4, 4),
            inside_door_handles_mode: u8 => bits(1, 0, 4),
            door_condition: u8 => u8(2),
            lock_timeout_minutes: u8 => u8(3),
            lock_timeout_seconds: u8 => u8(4),
        }
    }

    /// Door lock modes
    pub mod mode {
        pub const UNSECURED: u8 = 0x00;
        pub const UNSECURED_WITH_TIMEOUT: u8 = 0x01;
        pub const UNSECURED_INSIDE: u8 = 0x10;
        pub const UNSECURED_INSIDE_WITH_TIMEOUT: u8 = 0x11;
        pub const UNSECURED_OUTSIDE: u8 = 0x20;
        pub const UNSECURED_OUTSIDE_WITH_TIMEOUT: u8 = 0x21;
        pub const UNKNOWN: u8 = 0xFE;
        pub const SECURED: u8 = 0xFF;
    }

    impl DoorLockOperationReport {
        /// Check if the bolt is thrown
        pub fn is_secured(&self) -> bool {
            self.door_lock_mode == mode::SECURED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operation_report() {
        let report = v1::DoorLockOperationReport::from_payload(&[0xFF, 0x21, 0x02, 0xFE, 0xFE]);

        assert!(report.is_secured());
        assert_eq!(report.outside_door_handles_mode, 0x02);
        assert_eq!(report.inside_door_handles_mode, 0x01);
        assert_eq!(report.door_condition, 0x02);
        assert_eq!(report.payload(), vec![0xFF, 0x21, 0x02, 0xFE, 0xFE]);
    }

    #[test]
    fn test_operation_set() {
        let set = v1::DoorLockOperationSet {
            door_lock_mode: v1::mode::UNSECURED,
        };
        assert_eq!(set.format(), "620100");
    }
}
