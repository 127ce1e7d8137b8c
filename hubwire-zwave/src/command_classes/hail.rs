//! Hail command class (0x82), obsoleted but still sent by older devices

pub mod v1 {
    zwave_commands! {
        Hail(0x82, 0x01, version = 1) {}
    }
}
