//! Network Management Basic Node command class (0x4D)

pub mod v1 {
    zwave_commands! {
        LearnModeSet(0x4D, 0x01, version = 1) {
            seq_no: u8 => u8(0),
            mode: u8 => u8(2),
        }

        LearnModeSetStatus(0x4D, 0x02, version = 1) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
            new_node_id: u8 => u8(3),
        }

        NetworkUpdateRequest(0x4D, 0x03, version = 1) {
            seq_no: u8 => u8(0),
        }

        NetworkUpdateRequestStatus(0x4D, 0x04, version = 1) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
        }

        NodeInformationSend(0x4D, 0x05, version = 1) {
            seq_no: u8 => u8(0),
            destination_node_id: u8 => u8(2),
            tx_options: u8 => u8(3),
        }

        /// Reset the controller to factory defaults
        DefaultSet(0x4D, 0x06, version = 1) {
            seq_no: u8 => u8(0),
        }

        DefaultSetComplete(0x4D, 0x07, version = 1) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
        }
    }

    impl LearnModeSet {
        pub const MODE_DISABLE: u8 = 0x00;
        pub const MODE_CLASSIC: u8 = 0x01;
        pub const MODE_NWI: u8 = 0x02;
    }
}

pub mod v2 {
    zwave_commands! {
        /// Learn mode result with the S2 bootstrapping outcome
        LearnModeSetStatus(0x4D, 0x02, version = 2) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
            new_node_id: u8 => u8(3),
            granted_keys: u8 => u8(4),
            kex_fail_type: u8 => u8(5),
            dsk: [u8; 16] => array(6),
        }

        DskGet(0x4D, 0x08, version = 2) {
            seq_no: u8 => u8(0),
            add: bool => flag(1, 0),
        }

        /// Device specific key used for S2 inclusion
        DskReport(0x4D, 0x09, version = 2) {
            seq_no: u8 => u8(0),
            add: bool => flag(1, 0),
            dsk: [u8; 16] => array(2),
        }
    }

    impl DskReport {
        /// DSK in its printed form: eight dash separated five digit blocks
        pub fn dsk_text(&self) -> String {
            self.dsk
                .chunks_exact(2)
                .map(|pair| format!("{:05}", u16::from_be_bytes([pair[0], pair[1]])))
                .collect::<Vec<_>>()
                .join("-")
        }
    }
}
