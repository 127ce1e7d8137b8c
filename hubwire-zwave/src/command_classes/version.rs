//! Version command class (0x86)

pub mod v1 {
    zwave_commands! {
        VersionGet(0x86, 0x11, version = 1) {}

        VersionReport(0x86, 0x12, version = 1) {
            z_wave_library_type: u8 => u8(0),
            z_wave_protocol_version: u8 => u8(1),
            z_wave_protocol_sub_version: u8 => u8(2),
            application_version: u8 => u8(3),
            application_sub_version: u8 => u8(4),
        }

        VersionCommandClassGet(0x86, 0x13, version = 1) {
            requested_command_class: u8 => u8(0),
        }

        VersionCommandClassReport(0x86, 0x14, version = 1) {
            requested_command_class: u8 => u8(0),
            command_class_version: u8 => u8(1),
        }
    }

    impl VersionReport {
        /// Application version as `major.minor`
        pub fn application(&self) -> String {
            format!("{}.{:02}", self.application_version, self.application_sub_version)
        }
    }
}

pub mod v2 {
    use hubwire_core::{PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};

    /// Version report listing every firmware target
    ///
    /// Byte 6 holds the number of additional targets, each a
    /// version/sub-version pair. It is derived on encode.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct VersionReport {
        pub z_wave_library_type: u8,
        pub z_wave_protocol_version: u8,
        pub z_wave_protocol_sub_version: u8,
        pub firmware0_version: u8,
        pub firmware0_sub_version: u8,
        pub hardware_version: u8,
        /// `(version, sub_version)` of firmware targets 1 and up
        pub firmware_targets: Vec<(u8, u8)>,
    }

    impl VersionReport {
        const TARGETS_AT: usize = 7;

        pub fn number_of_firmware_targets(&self) -> u8 {
            self.firmware_targets.len().min(usize::from(u8::MAX)) as u8
        }
    }

    impl ZwaveCommand for VersionReport {
        const COMMAND_CLASS: u8 = 0x86;
        const COMMAND: u8 = 0x12;
        const VERSION: u8 = 2;
        const NAME: &'static str = "VersionReport";

        fn payload(&self) -> Vec<u8> {
            let count = self.number_of_firmware_targets();

            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.z_wave_library_type);
            writer.u8(1, &self.z_wave_protocol_version);
            writer.u8(2, &self.z_wave_protocol_sub_version);
            writer.u8(3, &self.firmware0_version);
            writer.u8(4, &self.firmware0_sub_version);
            writer.u8(5, &self.hardware_version);
            writer.u8(6, &count);
            for (version, sub_version) in self.firmware_targets.iter().take(usize::from(count)) {
                writer.extend(&[*version, *sub_version]);
            }
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.z_wave_library_type, reader.u8(0));
            assign(&mut self.z_wave_protocol_version, reader.u8(1));
            assign(&mut self.z_wave_protocol_sub_version, reader.u8(2));
            assign(&mut self.firmware0_version, reader.u8(3));
            assign(&mut self.firmware0_sub_version, reader.u8(4));
            assign(&mut self.hardware_version, reader.u8(5));

            let count = usize::from(reader.u8(6).unwrap_or_default());
            self.firmware_targets = reader
                .take(Self::TARGETS_AT, count * 2)
                .unwrap_or_default()
                .chunks_exact(2)
                .map(|pair| (pair[0], pair[1]))
                .collect();
        }
    }

    display_fields!(VersionReport {
        z_wave_library_type,
        z_wave_protocol_version,
        z_wave_protocol_sub_version,
        firmware0_version,
        firmware0_sub_version,
        hardware_version,
        firmware_targets,
    });
}

pub mod v3 {
    zwave_commands! {
        VersionCapabilitiesGet(0x86, 0x15, version = 3) {}

        VersionCapabilitiesReport(0x86, 0x16, version = 3) {
            version: bool => flag(0, 0),
            command_class: bool => flag(0, 1),
            z_wave_software: bool => flag(0, 2),
        }

        VersionZWaveSoftwareGet(0x86, 0x17, version = 3) {}

        /// Versions and build numbers of each firmware component
        VersionZWaveSoftwareReport(0x86, 0x18, version = 3) {
            sdk_version: [u8; 3] => array(0),
            application_framework_api_version: [u8; 3] => array(3),
            application_framework_build_number: u16 => u16(6),
            host_interface_version: [u8; 3] => array(8),
            host_interface_build_number: u16 => u16(11),
            z_wave_protocol_version: [u8; 3] => array(13),
            z_wave_protocol_build_number: u16 => u16(16),
            application_version: [u8; 3] => array(18),
            application_build_number: u16 => u16(21),
        }
    }

    /// Render a three byte version as `major.minor.patch`
    pub fn dotted(version: &[u8; 3]) -> String {
        format!("{}.{}.{}", version[0], version[1], version[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capabilities_report() {
        let report = v3::VersionCapabilitiesReport::from_payload(&[0x07]);
        assert!(report.version && report.command_class && report.z_wave_software);

        let report = v3::VersionCapabilitiesReport {
            version: true,
            command_class: true,
            z_wave_software: false,
        };
        assert_eq!(report.payload(), vec![0x03]);
    }

    #[test]
    fn test_version_report_v2_targets() {
        let payload = [0x03, 0x04, 0x05, 0x01, 0x02, 0x0A, 0x02, 0x07, 0x08, 0x09];
        let report = v2::VersionReport::from_payload(&payload);

        assert_eq!(report.hardware_version, 0x0A);
        assert_eq!(report.firmware_targets, vec![(0x07, 0x08)]);
        assert_eq!(report.number_of_firmware_targets(), 1);
        assert_eq!(report.payload(), vec![0x03, 0x04, 0x05, 0x01, 0x02, 0x0A, 0x01, 0x07, 0x08]);
    }

    #[test]
    fn test_version_report_v1() {
        let report = v1::VersionReport::from_payload(&[0x03, 0x04, 0x05, 0x01, 0x02]);
        assert_eq!(report.application(), "1.02");
    }

    #[test]
    fn test_software_report() {
        let mut payload = vec![0u8; 23];
        payload[..3].copy_from_slice(&[7, 18, 1]);
        payload[21..].copy_from_slice(&[0x01, 0x00]);
        let report = v3::VersionZWaveSoftwareReport::from_payload(&payload);

        assert_eq!(v3::dotted(&report.sdk_version), "7.18.1");
        assert_eq!(report.application_build_number, 256);
        assert_eq!(report.payload(), payload);
    }
}
