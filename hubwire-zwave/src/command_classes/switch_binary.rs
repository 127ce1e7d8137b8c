//! Binary Switch command class (0x25)

pub mod v1 {
    zwave_commands! {
        SwitchBinarySet(0x25, 0x01, version = 1) {
            switch_value: u8 => u8(0),
        }

        SwitchBinaryGet(0x25, 0x02, version = 1) {}

        SwitchBinaryReport(0x25, 0x03, version = 1) {
            value: u8 => u8(0),
        }
    }
}

pub mod v2 {
    zwave_commands! {
        SwitchBinarySet(0x25, 0x01, version = 2) {
            target_value: u8 => u8(0),
            duration: u8 => u8(1),
        }

        SwitchBinaryReport(0x25, 0x03, version = 2) {
            current_value: u8 => u8(0),
            target_value: u8 => u8(1),
            duration: u8 => u8(2),
        }
    }
}
