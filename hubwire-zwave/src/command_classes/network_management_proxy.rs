//! Network Management Proxy command class (0x52)

pub mod v1 {
    zwave_commands! {
        NodeListGet(0x52, 0x01, version = 1) {
            seq_no: u8 => u8(0),
        }

        /// Node list as a 29 byte bit mask, bit 0 of byte 0 is node 1
        NodeListReport(0x52, 0x02, version = 1) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
            node_list_controller_id: u8 => u8(2),
            node_list_data: Vec<u8> => rest(3),
        }

        NodeInfoCachedGet(0x52, 0x03, version = 1) {
            seq_no: u8 => u8(0),
            max_age: u8 => bits(1, 0, 4),
            node_id: u8 => u8(2),
        }

        NodeInfoCachedReport(0x52, 0x04, version = 1) {
            seq_no: u8 => u8(0),
            age: u8 => bits(1, 0, 4),
            status: u8 => bits(1, 4, 4),
            capability: u8 => bits(2, 0, 7),
            listening: bool => flag(2, 7),
            security: u8 => bits(3, 0, 7),
            opt: bool => flag(3, 7),
            basic_device_class: u8 => u8(5),
            generic_device_class: u8 => u8(6),
            specific_device_class: u8 => u8(7),
            command_classes: Vec<u8> => rest(8),
        }

        FailedNodeListGet(0x52, 0x0B, version = 1) {
            seq_no: u8 => u8(0),
        }

        FailedNodeListReport(0x52, 0x0C, version = 1) {
            seq_no: u8 => u8(0),
            failed_node_list_data: Vec<u8> => rest(1),
        }
    }

    /// Node ids set in a node list bit mask
    pub fn node_ids(mask: &[u8]) -> Vec<u8> {
        mask.iter()
            .enumerate()
            .flat_map(|(index, byte)| {
                (0..8usize)
                    .filter(move |bit| byte & (1u8 << bit) != 0)
                    .filter_map(move |bit| u8::try_from(index * 8 + bit + 1).ok())
            })
            .collect()
    }

    impl NodeListReport {
        pub const STATUS_LATEST: u8 = 0x00;
        pub const STATUS_MAY_NOT_BE_LATEST: u8 = 0x01;

        pub fn node_ids(&self) -> Vec<u8> {
            node_ids(&self.node_list_data)
        }
    }

    impl FailedNodeListReport {
        pub fn node_ids(&self) -> Vec<u8> {
            node_ids(&self.failed_node_list_data)
        }
    }
}

pub mod v3 {
    zwave_commands! {
        /// Cached node information with the granted security keys
        NodeInfoCachedReport(0x52, 0x04, version = 3) {
            seq_no: u8 => u8(0),
            age: u8 => bits(1, 0, 4),
            status: u8 => bits(1, 4, 4),
            capability: u8 => bits(2, 0, 7),
            listening: bool => flag(2, 7),
            security: u8 => bits(3, 0, 7),
            opt: bool => flag(3, 7),
            granted_keys: u8 => u8(4),
            basic_device_class: u8 => u8(5),
            generic_device_class: u8 => u8(6),
            specific_device_class: u8 => u8(7),
            command_classes: Vec<u8> => rest(8),
        }
    }
}
