//! Manufacturer Specific command class (0x72)

pub mod v1 {
    zwave_commands! {
        ManufacturerSpecificGet(0x72, 0x04, version = 1) {}

        ManufacturerSpecificReport(0x72, 0x05, version = 1) {
            manufacturer_id: u16 => u16(0),
            product_type_id: u16 => u16(2),
            product_id: u16 => u16(4),
        }
    }

    impl ManufacturerSpecificReport {
        /// `mfr-type-id` fingerprint, e.g. `"0086-0003-0062"`
        pub fn fingerprint(&self) -> String {
            format!(
                "{:04X}-{:04X}-{:04X}",
                self.manufacturer_id, self.product_type_id, self.product_id
            )
        }
    }
}

pub mod v2 {
    use hubwire_core::{hex, PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};

    zwave_commands! {
        DeviceSpecificGet(0x72, 0x06, version = 2) {
            device_id_type: u8 => bits(0, 0, 3),
        }
    }

    /// Device identifier such as a serial number
    ///
    /// Byte 1 packs the data format (3 bits) above the data length
    /// (5 bits). The length is derived from `device_id_data` on encode.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct DeviceSpecificReport {
        pub device_id_type: u8,
        pub device_id_data_format: u8,
        pub device_id_data: Vec<u8>,
    }

    impl DeviceSpecificReport {
        pub const DEVICE_ID_DATA_FORMAT_UTF8: u8 = 0x00;
        pub const DEVICE_ID_DATA_FORMAT_BINARY: u8 = 0x01;
        pub const DEVICE_ID_TYPE_OEM: u8 = 0x00;
        pub const DEVICE_ID_TYPE_SERIAL_NUMBER: u8 = 0x01;
        pub const DEVICE_ID_TYPE_PSEUDO_RANDOM: u8 = 0x02;

        const MAX_LENGTH: usize = 0x1F;

        /// Data length carried in the header
        pub fn device_id_data_length(&self) -> u8 {
            self.device_id_data.len().min(Self::MAX_LENGTH) as u8
        }

        /// Identifier rendered per its data format
        ///
        /// UTF-8 data is decoded lossily; binary data is rendered as
        /// `h'` followed by upper-case hex.
        pub fn device_id(&self) -> String {
            match self.device_id_data_format {
                Self::DEVICE_ID_DATA_FORMAT_UTF8 => {
                    String::from_utf8_lossy(&self.device_id_data).into_owned()
                }
                _ => format!("h'{}", hex::bytes_to_hex(&self.device_id_data)),
            }
        }
    }

    impl ZwaveCommand for DeviceSpecificReport {
        const COMMAND_CLASS: u8 = 0x72;
        const COMMAND: u8 = 0x07;
        const VERSION: u8 = 2;
        const NAME: &'static str = "DeviceSpecificReport";

        fn payload(&self) -> Vec<u8> {
            let data = &self.device_id_data[..usize::from(self.device_id_data_length())];

            let mut writer = PayloadWriter::new();
            writer.bits(0, 0, 3, &self.device_id_type);
            writer.bits(1, 5, 3, &self.device_id_data_format);
            writer.bits(1, 0, 5, &self.device_id_data_length());
            writer.rest(2, data);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.device_id_type, reader.bits(0, 0, 3));
            assign(&mut self.device_id_data_format, reader.bits(1, 5, 3));
            let length = reader.bits(1, 0, 5).unwrap_or_default();
            assign(&mut self.device_id_data, reader.take(2, usize::from(length)));
        }
    }

    display_fields!(DeviceSpecificReport {
        device_id_type,
        device_id_data_format,
        device_id_data,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_manufacturer_report() {
        let report = v1::ManufacturerSpecificReport::from_payload(&[0x00, 0x86, 0x00, 0x03, 0x00, 0x62]);

        assert_eq!(report.fingerprint(), "0086-0003-0062");
        assert_eq!(report.format(), "7205008600030062");
    }

    #[test]
    fn test_device_specific_report_serial() {
        let report = v2::DeviceSpecificReport::from_payload(&[0x01, 0x04, b'A', b'B', b'1', b'2', 0xEE]);

        assert_eq!(report.device_id_type, v2::DeviceSpecificReport::DEVICE_ID_TYPE_SERIAL_NUMBER);
        assert_eq!(report.device_id_data, b"AB12".to_vec());
        assert_eq!(report.device_id(), "AB12");
        assert_eq!(report.payload(), vec![0x01, 0x04, b'A', b'B', b'1', b'2']);
    }

    #[test]
    fn test_device_specific_report_binary() {
        let report = v2::DeviceSpecificReport {
            device_id_type: v2::DeviceSpecificReport::DEVICE_ID_TYPE_PSEUDO_RANDOM,
            device_id_data_format: v2::DeviceSpecificReport::DEVICE_ID_DATA_FORMAT_BINARY,
            device_id_data: vec![0xDE, 0xAD],
        };

        assert_eq!(report.payload(), vec![0x02, 0x22, 0xDE, 0xAD]);
        assert_eq!(report.device_id(), "h'DEAD");
    }
}
