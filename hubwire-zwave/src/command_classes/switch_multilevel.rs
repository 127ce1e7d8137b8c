//! Multilevel Switch command class (0x26)
//!
//! Levels run 0x00 (off) to 0x63 (99%); 0xFF restores the last level.

pub mod v1 {
    zwave_commands! {
        SwitchMultilevelSet(0x26, 0x01, version = 1) {
            value: u8 => u8(0),
        }

        SwitchMultilevelGet(0x26, 0x02, version = 1) {}

        SwitchMultilevelReport(0x26, 0x03, version = 1) {
            value: u8 => u8(0),
        }

        /// Start dimming up or down
        SwitchMultilevelStartLevelChange(0x26, 0x04, version = 1) {
            ignore_start_level: bool => flag(0, 5),
            up_down: bool => flag(0, 6),
            start_level: u8 => u8(1),
        }

        SwitchMultilevelStopLevelChange(0x26, 0x05, version = 1) {}
    }
}

pub mod v2 {
    zwave_commands! {
        SwitchMultilevelSet(0x26, 0x01, version = 2) {
            value: u8 => u8(0),
            dimming_duration: u8 => u8(1),
        }

        SwitchMultilevelStartLevelChange(0x26, 0x04, version = 2) {
            ignore_start_level: bool => flag(0, 5),
            up_down: bool => flag(0, 6),
            start_level: u8 => u8(1),
            dimming_duration: u8 => u8(2),
        }
    }
}

pub mod v3 {
    zwave_commands! {
        SwitchMultilevelReport(0x26, 0x03, version = 3) {
            value: u8 => u8(0),
        }

        /// Start dimming on the primary and, optionally, secondary switch
        SwitchMultilevelStartLevelChange(0x26, 0x04, version = 3) {
            inc_dec: u8 => bits(0, 3, 2),
            ignore_start_level: bool => flag(0, 5),
            up_down: u8 => bits(0, 6, 2),
            start_level: u8 => u8(1),
            dimming_duration: u8 => u8(2),
            step_size: u8 => u8(3),
        }

        SwitchMultilevelSupportedGet(0x26, 0x06, version = 3) {}

        SwitchMultilevelSupportedReport(0x26, 0x07, version = 3) {
            primary_switch_type: u8 => bits(0, 0, 5),
            secondary_switch_type: u8 => bits(1, 0, 5),
        }
    }

    impl SwitchMultilevelStartLevelChange {
        pub const UP_DOWN_UP: u8 = 0x00;
        pub const UP_DOWN_DOWN: u8 = 0x01;
        pub const UP_DOWN_NONE: u8 = 0x03;
        pub const INC_DEC_INCREMENT: u8 = 0x00;
        pub const INC_DEC_DECREMENT: u8 = 0x01;
        pub const INC_DEC_NONE: u8 = 0x03;
    }
}
