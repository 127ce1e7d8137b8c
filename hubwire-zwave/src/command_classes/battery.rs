//! Battery command class (0x80)

pub mod v1 {
    zwave_commands! {
        BatteryGet(0x80, 0x02, version = 1) {}

        /// Battery level in percent, or [`BatteryReport::LOW_BATTERY`]
        BatteryReport(0x80, 0x03, version = 1) {
            battery_level: u8 => u8(0),
        }
    }

    impl BatteryReport {
        pub const LOW_BATTERY: u8 = 0xFF;

        /// Check for the low battery warning value
        pub fn is_low(&self) -> bool {
            self.battery_level == Self::LOW_BATTERY
        }
    }
}
