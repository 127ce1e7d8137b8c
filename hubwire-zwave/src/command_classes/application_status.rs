//! Application Status command class (0x22)

pub mod v1 {
    zwave_commands! {
        /// Device is busy and cannot process the request now
        ApplicationBusy(0x22, 0x01, version = 1) {
            status: u8 => u8(0),
            /// Seconds to wait when `status` is [`ApplicationBusy::TRY_AGAIN_IN_WAIT_TIME`]
            wait_time: u8 => u8(1),
        }

        ApplicationRejectedRequest(0x22, 0x02, version = 1) {
            status: u8 => u8(0),
        }
    }

    impl ApplicationBusy {
        pub const TRY_AGAIN_LATER: u8 = 0x00;
        pub const TRY_AGAIN_IN_WAIT_TIME: u8 = 0x01;
        pub const REQUEST_QUEUED: u8 = 0x02;
    }
}
