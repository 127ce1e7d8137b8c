//! Network Management Inclusion command class (0x34)

use hubwire_core::{PayloadReader, PayloadWriter};

use crate::command::assign;

/// Node information block shared by the add-status layouts
///
/// Byte 4 holds the length of the block starting at byte 4 itself: five
/// fixed capability bytes plus one byte per supported command class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeInfo {
    pub listening: bool,
    pub capability: u8,
    pub opt: bool,
    pub security: u8,
    pub basic_device_class: u8,
    pub generic_device_class: u8,
    pub specific_device_class: u8,
    pub command_classes: Vec<u8>,
}

impl NodeInfo {
    const LENGTH_AT: usize = 4;
    const COMMAND_CLASSES_AT: usize = 10;
    const FIXED_LENGTH: usize = Self::COMMAND_CLASSES_AT - Self::LENGTH_AT;
    const MAX_COMMAND_CLASSES: usize = u8::MAX as usize - Self::FIXED_LENGTH;

    /// Number of command classes that fit the length byte
    fn command_class_count(&self) -> usize {
        self.command_classes.len().min(Self::MAX_COMMAND_CLASSES)
    }

    /// Value of the node info length byte
    pub fn length(&self) -> u8 {
        (Self::FIXED_LENGTH + self.command_class_count()) as u8
    }

    /// Decode the block, returning the offset just past it
    fn read(&mut self, reader: &PayloadReader<'_>) -> usize {
        let length = reader
            .u8(Self::LENGTH_AT)
            .map_or(Self::FIXED_LENGTH, usize::from)
            .max(Self::FIXED_LENGTH);

        assign(&mut self.listening, reader.flag(5, 7));
        assign(&mut self.capability, reader.bits(5, 0, 7));
        assign(&mut self.opt, reader.flag(6, 7));
        assign(&mut self.security, reader.bits(6, 0, 7));
        assign(&mut self.basic_device_class, reader.u8(7));
        assign(&mut self.generic_device_class, reader.u8(8));
        assign(&mut self.specific_device_class, reader.u8(9));
        assign(
            &mut self.command_classes,
            reader.take(Self::COMMAND_CLASSES_AT, length - Self::FIXED_LENGTH),
        );

        Self::LENGTH_AT + length
    }

    fn write(&self, writer: &mut PayloadWriter) {
        writer.u8(Self::LENGTH_AT, &self.length());
        writer.flag(5, 7, &self.listening);
        writer.bits(5, 0, 7, &self.capability);
        writer.flag(6, 7, &self.opt);
        writer.bits(6, 0, 7, &self.security);
        writer.u8(7, &self.basic_device_class);
        writer.u8(8, &self.generic_device_class);
        writer.u8(9, &self.specific_device_class);
        writer.rest(
            Self::COMMAND_CLASSES_AT,
            &self.command_classes[..self.command_class_count()],
        );
    }
}

/// Add status codes
pub mod status {
    pub const ADD_NODE_STATUS_DONE: u8 = 0x06;
    pub const ADD_NODE_STATUS_FAILED: u8 = 0x07;
    pub const ADD_NODE_STATUS_SECURITY_FAILED: u8 = 0x09;
}

pub mod v1 {
    use super::*;
    use crate::command::ZwaveCommand;

    zwave_commands! {
        /// Start or stop adding a node to the network
        NodeAdd(0x34, 0x01, version = 1) {
            seq_no: u8 => u8(0),
            mode: u8 => u8(2),
            tx_options: u8 => u8(3),
        }

        NodeRemove(0x34, 0x03, version = 1) {
            seq_no: u8 => u8(0),
            mode: u8 => u8(2),
        }

        NodeRemoveStatus(0x34, 0x04, version = 1) {
            seq_no: u8 => u8(0),
            status: u8 => u8(1),
            node_id: u8 => u8(2),
        }
    }

    impl NodeRemoveStatus {
        pub const STATUS_DONE: u8 = 0x06;
        pub const STATUS_FAILED: u8 = 0x07;
    }

    /// Result of an add-node operation
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct NodeAddStatus {
        pub seq_no: u8,
        pub status: u8,
        pub reserved: u8,
        pub new_node_id: u8,
        pub node_info: NodeInfo,
    }

    impl ZwaveCommand for NodeAddStatus {
        const COMMAND_CLASS: u8 = 0x34;
        const COMMAND: u8 = 0x02;
        const VERSION: u8 = 1;
        const NAME: &'static str = "NodeAddStatus";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.seq_no);
            writer.u8(1, &self.status);
            writer.u8(2, &self.reserved);
            writer.u8(3, &self.new_node_id);
            self.node_info.write(&mut writer);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.seq_no, reader.u8(0));
            assign(&mut self.status, reader.u8(1));
            assign(&mut self.reserved, reader.u8(2));
            assign(&mut self.new_node_id, reader.u8(3));
            self.node_info.read(&reader);
        }
    }

    display_fields!(NodeAddStatus {
        seq_no,
        status,
        reserved,
        new_node_id,
        node_info,
    });
}

pub mod v2 {
    use super::*;
    use crate::command::ZwaveCommand;

    /// Result of an add-node operation, with S2 bootstrapping outcome
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct NodeAddStatus {
        pub seq_no: u8,
        pub status: u8,
        pub reserved: u8,
        pub new_node_id: u8,
        pub node_info: NodeInfo,
        pub granted_keys: u8,
        pub kex_fail_type: u8,
    }

    impl ZwaveCommand for NodeAddStatus {
        const COMMAND_CLASS: u8 = 0x34;
        const COMMAND: u8 = 0x02;
        const VERSION: u8 = 2;
        const NAME: &'static str = "NodeAddStatus";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.seq_no);
            writer.u8(1, &self.status);
            writer.u8(2, &self.reserved);
            writer.u8(3, &self.new_node_id);
            self.node_info.write(&mut writer);
            writer.extend(&[self.granted_keys, self.kex_fail_type]);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.seq_no, reader.u8(0));
            assign(&mut self.status, reader.u8(1));
            assign(&mut self.reserved, reader.u8(2));
            assign(&mut self.new_node_id, reader.u8(3));
            let end = self.node_info.read(&reader);
            assign(&mut self.granted_keys, reader.u8(end));
            assign(&mut self.kex_fail_type, reader.u8(end + 1));
        }
    }

    display_fields!(NodeAddStatus {
        seq_no,
        status,
        reserved,
        new_node_id,
        node_info,
        granted_keys,
        kex_fail_type,
    });
}
