//! Configuration command class (0x70)

pub mod v1 {
    use byteorder::{BigEndian, ByteOrder};
    use hubwire_core::{Error, PayloadReader, PayloadWriter, Result};

    use crate::command::{assign, ZwaveCommand};

    const MAX_SIZE: usize = 0x07;

    /// Signed big-endian value of 1 to 8 bytes
    fn scaled(value: &[u8]) -> Option<i64> {
        (1..=8)
            .contains(&value.len())
            .then(|| BigEndian::read_int(value, value.len()))
    }

    /// Smallest of 1, 2 or 4 bytes holding `value`
    fn scaled_bytes(value: i64) -> Result<Vec<u8>> {
        let size = if i8::try_from(value).is_ok() {
            1
        } else if i16::try_from(value).is_ok() {
            2
        } else if i32::try_from(value).is_ok() {
            4
        } else {
            return Err(Error::value_too_large(value, 4));
        };
        let mut bytes = vec![0; size];
        BigEndian::write_int(&mut bytes, value, size);
        Ok(bytes)
    }

    zwave_commands! {
        ConfigurationGet(0x70, 0x05, version = 1) {
            parameter_number: u8 => u8(0),
        }
    }

    /// Set a configuration parameter
    ///
    /// Byte 1 packs the default flag (bit 7) and the value size (low 3
    /// bits). The size is derived from `configuration_value` on encode.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct ConfigurationSet {
        pub parameter_number: u8,
        pub default: bool,
        pub configuration_value: Vec<u8>,
    }

    impl ConfigurationSet {
        /// Set `parameter_number` to `value` in the narrowest size
        ///
        /// # Errors
        ///
        /// Returns [`Error::ValueTooLarge`] if `value` does not fit in four
        /// signed bytes.
        pub fn with_scaled_value(parameter_number: u8, value: i64) -> Result<Self> {
            Ok(Self {
                parameter_number,
                default: false,
                configuration_value: scaled_bytes(value)?,
            })
        }

        pub fn size(&self) -> u8 {
            self.configuration_value.len().min(MAX_SIZE) as u8
        }

        pub fn scaled_configuration_value(&self) -> Option<i64> {
            scaled(&self.configuration_value)
        }
    }

    impl ZwaveCommand for ConfigurationSet {
        const COMMAND_CLASS: u8 = 0x70;
        const COMMAND: u8 = 0x04;
        const VERSION: u8 = 1;
        const NAME: &'static str = "ConfigurationSet";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.parameter_number);
            writer.flag(1, 7, &self.default);
            writer.bits(1, 0, 3, &self.size());
            writer.rest(2, &self.configuration_value[..usize::from(self.size())]);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.parameter_number, reader.u8(0));
            assign(&mut self.default, reader.flag(1, 7));
            let size = reader.bits(1, 0, 3).unwrap_or_default();
            assign(&mut self.configuration_value, reader.take(2, usize::from(size)));
        }
    }

    display_fields!(ConfigurationSet {
        parameter_number,
        default,
        configuration_value,
    });

    /// Current value of a configuration parameter
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct ConfigurationReport {
        pub parameter_number: u8,
        pub configuration_value: Vec<u8>,
    }

    impl ConfigurationReport {
        pub fn size(&self) -> u8 {
            self.configuration_value.len().min(MAX_SIZE) as u8
        }

        /// Value as a signed integer, `None` when empty
        pub fn scaled_configuration_value(&self) -> Option<i64> {
            scaled(&self.configuration_value)
        }
    }

    impl ZwaveCommand for ConfigurationReport {
        const COMMAND_CLASS: u8 = 0x70;
        const COMMAND: u8 = 0x06;
        const VERSION: u8 = 1;
        const NAME: &'static str = "ConfigurationReport";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.parameter_number);
            writer.bits(1, 0, 3, &self.size());
            writer.rest(2, &self.configuration_value[..usize::from(self.size())]);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.parameter_number, reader.u8(0));
            let size = reader.bits(1, 0, 3).unwrap_or_default();
            assign(&mut self.configuration_value, reader.take(2, usize::from(size)));
        }
    }

    display_fields!(ConfigurationReport {
        parameter_number,
        configuration_value,
    });

}
