//! Basic command class (0x20)

pub mod v1 {
    zwave_commands! {
        /// Set the basic value
        BasicSet(0x20, 0x01, version = 1) {
            value: u8 => u8(0),
        }

        BasicGet(0x20, 0x02, version = 1) {}

        /// Report the basic value
        BasicReport(0x20, 0x03, version = 1) {
            value: u8 => u8(0),
        }
    }

    impl BasicSet {
        pub const OFF: u8 = 0x00;
        pub const ON: u8 = 0xFF;
    }
}

pub mod v2 {
    zwave_commands! {
        /// Report current and target value with transition duration
        BasicReport(0x20, 0x03, version = 2) {
            current_value: u8 => u8(0),
            target_value: u8 => u8(1),
            duration: u8 => u8(2),
        }
    }
}
