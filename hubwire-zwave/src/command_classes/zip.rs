//! Z/IP command class (0x23)

pub mod v2 {
    use hubwire_core::{PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};
    use crate::frame::CommandFrame;

    /// Z/IP packet carrying an optional header extension and an
    /// encapsulated Z-Wave command
    ///
    /// # Payload
    ///
    /// ```text
    /// byte 0    ack/nack flags
    /// byte 1    header ext | command included | more info | secure origin
    /// byte 2    sequence number
    /// byte 3    source end point (7 bits)
    /// byte 4    bit address | destination end point (7 bits)
    /// byte 5..  header extension, first byte is its own length
    /// ...       encapsulated command
    /// ```
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct ZipPacket {
        pub ack_request: bool,
        pub ack_response: bool,
        pub nack_response: bool,
        pub nack_waiting: bool,
        pub nack_queue_full: bool,
        pub nack_option_error: bool,
        pub header_ext_included: bool,
        pub z_wave_cmd_included: bool,
        pub more_information: bool,
        pub secure_origin: bool,
        pub seq_no: u8,
        pub source_end_point: u8,
        pub bit_address: bool,
        pub destination_end_point: u8,
        /// Header extension including its leading length byte
        pub header_extension: Vec<u8>,
        /// Encapsulated class, command and payload bytes
        pub z_wave_command: Vec<u8>,
    }

    impl ZipPacket {
        const HEADER_EXTENSION: usize = 5;

        /// Unwrap the encapsulated command as a frame from `device`
        pub fn encapsulated_frame(&self, device: &str) -> Option<CommandFrame> {
            match self.z_wave_command.as_slice() {
                [command_class, command, payload @ ..] => Some(CommandFrame::new(
                    device,
                    *command_class,
                    *command,
                    payload.to_vec(),
                )),
                _ => None,
            }
        }
    }

    impl ZwaveCommand for ZipPacket {
        const COMMAND_CLASS: u8 = 0x23;
        const COMMAND: u8 = 0x02;
        const VERSION: u8 = 2;
        const NAME: &'static str = "ZipPacket";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.flag(0, 7, &self.ack_request);
            writer.flag(0, 6, &self.ack_response);
            writer.flag(0, 5, &self.nack_response);
            writer.flag(0, 4, &self.nack_waiting);
            writer.flag(0, 3, &self.nack_queue_full);
            writer.flag(0, 2, &self.nack_option_error);
            writer.flag(1, 7, &self.header_ext_included);
            writer.flag(1, 6, &self.z_wave_cmd_included);
            writer.flag(1, 5, &self.more_information);
            writer.flag(1, 4, &self.secure_origin);
            writer.u8(2, &self.seq_no);
            writer.bits(3, 0, 7, &self.source_end_point);
            writer.flag(4, 7, &self.bit_address);
            writer.bits(4, 0, 7, &self.destination_end_point);

            if self.header_ext_included {
                writer.rest(Self::HEADER_EXTENSION, &self.header_extension);
            }
            writer.extend(&self.z_wave_command);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.ack_request, reader.flag(0, 7));
            assign(&mut self.ack_response, reader.flag(0, 6));
            assign(&mut self.nack_response, reader.flag(0, 5));
            assign(&mut self.nack_waiting, reader.flag(0, 4));
            assign(&mut self.nack_queue_full, reader.flag(0, 3));
            assign(&mut self.nack_option_error, reader.flag(0, 2));
            assign(&mut self.header_ext_included, reader.flag(1, 7));
            assign(&mut self.z_wave_cmd_included, reader.flag(1, 6));
            assign(&mut self.more_information, reader.flag(1, 5));
            assign(&mut self.secure_origin, reader.flag(1, 4));
            assign(&mut self.seq_no, reader.u8(2));
            assign(&mut self.source_end_point, reader.bits(3, 0, 7));
            assign(&mut self.bit_address, reader.flag(4, 7));
            assign(&mut self.destination_end_point, reader.bits(4, 0, 7));

            let mut command_at = Self::HEADER_EXTENSION;
            if self.header_ext_included {
                let length = usize::from(reader.u8(Self::HEADER_EXTENSION).unwrap_or_default());
                assign(
                    &mut self.header_extension,
                    reader.take(Self::HEADER_EXTENSION, length),
                );
                command_at += length;
            }
            assign(&mut self.z_wave_command, reader.rest(command_at));
        }
    }

    display_fields!(ZipPacket {
        ack_request,
        ack_response,
        nack_response,
        nack_waiting,
        nack_queue_full,
        nack_option_error,
        header_ext_included,
        z_wave_cmd_included,
        more_information,
        secure_origin,
        seq_no,
        source_end_point,
        bit_address,
        destination_end_point,
        header_extension,
        z_wave_command,
    });

    zwave_commands! {
        /// Keep-alive on a Z/IP session
        ZipKeepAlive(0x23, 0x03, version = 2) {
            ack_response: bool => flag(0, 6),
            ack_request: bool => flag(0, 7),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use hubwire_core::hex::hex_to_bytes;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_zip_packet_with_header_extension() {
            let payload = hex_to_bytes("00D006000005840200012503FF").unwrap();
            let packet = ZipPacket::from_payload(&payload);

            assert!(packet.header_ext_included);
            assert!(packet.z_wave_cmd_included);
            assert!(packet.secure_origin);
            assert_eq!(packet.seq_no, 0x06);
            assert_eq!(packet.header_extension, vec![0x05, 0x84, 0x02, 0x00, 0x01]);
            assert_eq!(packet.z_wave_command, vec![0x25, 0x03, 0xFF]);
            assert_eq!(packet.payload(), payload);
        }

        #[test]
        fn test_zip_packet_encapsulated_frame() {
            let payload = hex_to_bytes("00D006000005840200012503FF").unwrap();
            let frame = ZipPacket::from_payload(&payload)
                .encapsulated_frame("07")
                .unwrap();

            assert_eq!(frame.to_string(), "zw device: 07, command: 2503, payload: FF");
        }

        #[test]
        fn test_zip_packet_without_header_extension() {
            let packet = ZipPacket {
                ack_request: true,
                z_wave_cmd_included: true,
                seq_no: 0x11,
                destination_end_point: 0x02,
                z_wave_command: vec![0x20, 0x02],
                ..Default::default()
            };

            assert_eq!(packet.payload(), vec![0x80, 0x40, 0x11, 0x00, 0x02, 0x20, 0x02]);
            assert_eq!(ZipPacket::from_payload(&packet.payload()), packet);
        }

        #[test]
        fn test_zip_packet_truncated_extension() {
            let packet = ZipPacket::from_payload(&[0x00, 0x80, 0x01, 0x00, 0x00, 0x08, 0x84]);

            assert_eq!(packet.header_extension, vec![0x08, 0x84]);
            assert!(packet.z_wave_command.is_empty());
        }

        #[test]
        fn test_keep_alive() {
            let keep_alive = ZipKeepAlive::from_payload(&[0x80]);

            assert!(keep_alive.ack_request);
            assert!(!keep_alive.ack_response);
            assert_eq!(ZipKeepAlive::code(), "2303");
        }
    }
}
