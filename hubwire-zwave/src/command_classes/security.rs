//! Security (S0) command class (0x98)

pub mod v1 {
    use hubwire_core::{PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};

    zwave_commands! {
        SecurityCommandsSupportedGet(0x98, 0x02, version = 1) {}

        SecuritySchemeGet(0x98, 0x04, version = 1) {
            supported_security_schemes: u8 => u8(0),
        }

        SecuritySchemeReport(0x98, 0x05, version = 1) {
            supported_security_schemes: u8 => u8(0),
        }

        NetworkKeySet(0x98, 0x06, version = 1) {
            network_key_byte: Vec<u8> => rest(0),
        }

        NetworkKeyVerify(0x98, 0x07, version = 1) {}

        SecuritySchemeInherit(0x98, 0x08, version = 1) {
            supported_security_schemes: u8 => u8(0),
        }

        SecurityNonceGet(0x98, 0x40, version = 1) {}

        SecurityNonceReport(0x98, 0x80, version = 1) {
            nonce_byte: [u8; 8] => array(0),
        }
    }

    /// Command classes supported and controlled under S0
    ///
    /// ```text
    /// reports | supported ... | EF | controlled ...
    /// ```
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct SecurityCommandsSupportedReport {
        pub reports_to_follow: u8,
        pub command_class_support: Vec<u8>,
        pub command_class_control: Vec<u8>,
    }

    impl SecurityCommandsSupportedReport {
        pub const COMMAND_CLASS_MARK: u8 = 0xEF;
    }

    impl ZwaveCommand for SecurityCommandsSupportedReport {
        const COMMAND_CLASS: u8 = 0x98;
        const COMMAND: u8 = 0x03;
        const VERSION: u8 = 1;
        const NAME: &'static str = "SecurityCommandsSupportedReport";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.reports_to_follow);
            writer.rest(1, &self.command_class_support);
            if !self.command_class_control.is_empty() {
                writer.extend(&[Self::COMMAND_CLASS_MARK]);
                writer.extend(&self.command_class_control);
            }
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.reports_to_follow, reader.u8(0));
            let classes = reader.rest(1).unwrap_or_default();
            match classes.iter().position(|&class| class == Self::COMMAND_CLASS_MARK) {
                Some(mark) => {
                    self.command_class_support = classes[..mark].to_vec();
                    self.command_class_control = classes[mark + 1..].to_vec();
                }
                None => self.command_class_support = classes,
            }
        }
    }

    display_fields!(SecurityCommandsSupportedReport {
        reports_to_follow,
        command_class_support,
        command_class_control,
    });

    /// Encrypted command with its initialization vector and MAC
    ///
    /// ```text
    /// iv (8) | encrypted payload | receiver nonce id (1) | mac (8)
    /// ```
    ///
    /// The encrypted part is only present when the frame is long enough
    /// to hold both trailers.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct SecurityMessageEncapsulation {
        pub initialization_vector: [u8; 8],
        pub encrypted_payload: Vec<u8>,
        pub receivers_nonce_identifier: u8,
        pub message_authentication_code: [u8; 8],
    }

    impl SecurityMessageEncapsulation {
        const IV_LENGTH: usize = 8;
        const MAC_LENGTH: usize = 8;
        const TRAILER: usize = Self::MAC_LENGTH + 1;
    }

    impl ZwaveCommand for SecurityMessageEncapsulation {
        const COMMAND_CLASS: u8 = 0x98;
        const COMMAND: u8 = 0x81;
        const VERSION: u8 = 1;
        const NAME: &'static str = "SecurityMessageEncapsulation";

        fn payload(&self) -> Vec<u8> {
            let mut writer = PayloadWriter::new();
            writer.array(0, &self.initialization_vector);
            writer.extend(&self.encrypted_payload);
            writer.extend(&[self.receivers_nonce_identifier]);
            writer.extend(&self.message_authentication_code);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.initialization_vector, reader.array(0));
            if reader.len() >= Self::IV_LENGTH + Self::TRAILER {
                let nonce_at = reader.len() - Self::TRAILER;
                assign(
                    &mut self.encrypted_payload,
                    reader.take(Self::IV_LENGTH, nonce_at - Self::IV_LENGTH),
                );
                assign(&mut self.receivers_nonce_identifier, reader.u8(nonce_at));
                assign(&mut self.message_authentication_code, reader.array(nonce_at + 1));
            }
        }
    }

    display_fields!(SecurityMessageEncapsulation {
        initialization_vector,
        encrypted_payload,
        receivers_nonce_identifier,
        message_authentication_code,
    });

}
