//! CRC-16 Encapsulation command class (0x56)

pub mod v1 {
    use byteorder::{BigEndian, ByteOrder};
    use hubwire_core::{checksum, PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};
    use crate::frame::CommandFrame;

    /// Command wrapped with a CRC-16 trailer
    ///
    /// The checksum covers the encapsulation header (`56 01`), the inner
    /// class and command, and the inner payload. It occupies the last two
    /// bytes whenever at least four bytes are present.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct Crc16Encap {
        pub command_class: u8,
        pub command: u8,
        pub data: Vec<u8>,
        pub checksum: u16,
    }

    impl Crc16Encap {
        const TRAILER: usize = 2;

        /// Wrap a frame's command and compute its checksum
        pub fn wrap(frame: &CommandFrame) -> Self {
            let mut encap = Self {
                command_class: frame.command_class,
                command: frame.command,
                data: frame.payload.to_vec(),
                checksum: 0,
            };
            encap.checksum = encap.compute_checksum();
            encap
        }

        fn covered(&self) -> Vec<u8> {
            let mut covered = Vec::with_capacity(4 + self.data.len());
            covered.extend_from_slice(&[Self::COMMAND_CLASS, Self::COMMAND]);
            covered.extend_from_slice(&[self.command_class, self.command]);
            covered.extend_from_slice(&self.data);
            covered
        }

        /// CRC-16 over the header and inner command bytes
        pub fn compute_checksum(&self) -> u16 {
            checksum::calculate(&self.covered())
        }

        /// Check the carried checksum against the content
        pub fn is_valid(&self) -> bool {
            checksum::verify(&self.covered(), self.checksum)
        }

        /// Unwrap the inner command as a frame from `device`
        pub fn encapsulated_frame(&self, device: &str) -> CommandFrame {
            CommandFrame::new(device, self.command_class, self.command, self.data.clone())
        }
    }

    impl ZwaveCommand for Crc16Encap {
        const COMMAND_CLASS: u8 = 0x56;
        const COMMAND: u8 = 0x01;
        const VERSION: u8 = 1;
        const NAME: &'static str = "Crc16Encap";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.command_class);
            writer.u8(1, &self.command);
            writer.rest(2, &self.data);

            let mut trailer = [0; Self::TRAILER];
            BigEndian::write_u16(&mut trailer, self.checksum);
            writer.extend(&trailer);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.command_class, reader.u8(0));
            assign(&mut self.command, reader.u8(1));
            if reader.len() >= 2 + Self::TRAILER {
                let trailer_at = reader.len() - Self::TRAILER;
                assign(&mut self.data, reader.take(2, trailer_at - 2));
                assign(&mut self.checksum, reader.u16(trailer_at));
            }
        }
    }

    display_fields!(Crc16Encap {
        command_class,
        command,
        data,
        checksum,
    });

}
