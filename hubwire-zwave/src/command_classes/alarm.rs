//! Alarm command class (0x71), later renamed Notification

pub mod v1 {
    zwave_commands! {
        AlarmGet(0x71, 0x04, version = 1) {
            alarm_type: u8 => u8(0),
        }

        AlarmReport(0x71, 0x05, version = 1) {
            alarm_type: u8 => u8(0),
            alarm_level: u8 => u8(1),
        }
    }
}

pub mod v2 {
    use hubwire_core::{PayloadReader, PayloadWriter};

    use crate::command::{assign, ZwaveCommand};

    zwave_commands! {
        AlarmGet(0x71, 0x04, version = 2) {
            alarm_type: u8 => u8(0),
            zwave_alarm_type: u8 => u8(1),
        }

        AlarmSet(0x71, 0x06, version = 2) {
            zwave_alarm_type: u8 => u8(0),
            zwave_alarm_status: u8 => u8(1),
        }

        AlarmTypeSupportedGet(0x71, 0x07, version = 2) {}
    }

    /// Alarm notification with Z-Wave alarm type, event and parameters
    ///
    /// Byte 6 carries the number of event parameters that follow; it is
    /// derived from `event_parameters` on encode.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct AlarmReport {
        pub alarm_type: u8,
        pub alarm_level: u8,
        pub zensor_net_source_node_id: u8,
        pub zwave_alarm_status: u8,
        pub zwave_alarm_type: u8,
        pub zwave_alarm_event: u8,
        pub event_parameters: Vec<u8>,
    }

    impl AlarmReport {
        pub const ZWAVE_ALARM_STATUS_OFF: u8 = 0x00;
        pub const ZWAVE_ALARM_STATUS_ON: u8 = 0xFF;

        pub const ZWAVE_ALARM_TYPE_SMOKE: u8 = 0x01;
        pub const ZWAVE_ALARM_TYPE_CO: u8 = 0x02;
        pub const ZWAVE_ALARM_TYPE_CO2: u8 = 0x03;
        pub const ZWAVE_ALARM_TYPE_HEAT: u8 = 0x04;
        pub const ZWAVE_ALARM_TYPE_WATER: u8 = 0x05;
        pub const ZWAVE_ALARM_TYPE_ACCESS_CONTROL: u8 = 0x06;
        pub const ZWAVE_ALARM_TYPE_BURGLAR: u8 = 0x07;
        pub const ZWAVE_ALARM_TYPE_POWER_MANAGEMENT: u8 = 0x08;
        pub const ZWAVE_ALARM_TYPE_SYSTEM: u8 = 0x09;
        pub const ZWAVE_ALARM_TYPE_EMERGENCY: u8 = 0x0A;
        pub const ZWAVE_ALARM_TYPE_CLOCK: u8 = 0x0B;
        pub const ZWAVE_ALARM_TYPE_FIRST: u8 = 0xFF;

        const PARAMETERS_AT: usize = 7;

        pub fn number_of_event_parameters(&self) -> u8 {
            self.event_parameters.len().min(usize::from(u8::MAX)) as u8
        }
    }

    impl ZwaveCommand for AlarmReport {
        const COMMAND_CLASS: u8 = 0x71;
        const COMMAND: u8 = 0x05;
        const VERSION: u8 = 2;
        const NAME: &'static str = "AlarmReport";

        fn payload(&self) -> Vec<u8> {
            let count = self.number_of_event_parameters();

            let mut writer = PayloadWriter::new();
            writer.u8(0, &self.alarm_type);
            writer.u8(1, &self.alarm_level);
            writer.u8(2, &self.zensor_net_source_node_id);
            writer.u8(3, &self.zwave_alarm_status);
            writer.u8(4, &self.zwave_alarm_type);
            writer.u8(5, &self.zwave_alarm_event);
            writer.u8(6, &count);
            writer.rest(Self::PARAMETERS_AT, &self.event_parameters[..usize::from(count)]);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.alarm_type, reader.u8(0));
            assign(&mut self.alarm_level, reader.u8(1));
            assign(&mut self.zensor_net_source_node_id, reader.u8(2));
            assign(&mut self.zwave_alarm_status, reader.u8(3));
            assign(&mut self.zwave_alarm_type, reader.u8(4));
            assign(&mut self.zwave_alarm_event, reader.u8(5));
            let count = reader.u8(6).unwrap_or_default();
            assign(
                &mut self.event_parameters,
                reader.take(Self::PARAMETERS_AT, usize::from(count)),
            );
        }
    }

    display_fields!(AlarmReport {
        alarm_type,
        alarm_level,
        zensor_net_source_node_id,
        zwave_alarm_status,
        zwave_alarm_type,
        zwave_alarm_event,
        event_parameters,
    });

    /// Z-Wave alarm types supported by the device as bit masks
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct AlarmTypeSupportedReport {
        /// Device also sends proprietary version 1 alarms
        pub v1_alarm: bool,
        pub bit_masks: Vec<u8>,
    }

    impl AlarmTypeSupportedReport {
        const MAX_MASKS: usize = 0x1F;

        pub fn number_of_bit_masks(&self) -> u8 {
            self.bit_masks.len().min(Self::MAX_MASKS) as u8
        }

        /// Alarm types whose bit is set, bit 0 of mask 0 being type 0
        pub fn supported_types(&self) -> Vec<u8> {
            self.bit_masks
                .iter()
                .enumerate()
                .flat_map(|(index, mask)| {
                    (0..8usize)
                        .filter(move |bit| mask & (1u8 << bit) != 0)
                        .filter_map(move |bit| u8::try_from(index * 8 + bit).ok())
                })
                .collect()
        }
    }

    impl ZwaveCommand for AlarmTypeSupportedReport {
        const COMMAND_CLASS: u8 = 0x71;
        const COMMAND: u8 = 0x08;
        const VERSION: u8 = 2;
        const NAME: &'static str = "AlarmTypeSupportedReport";

        fn payload(&self) -> Vec<u8> {
            let count = self.number_of_bit_masks();

            let mut writer = PayloadWriter::new();
            writer.flag(0, 7, &self.v1_alarm);
            writer.bits(0, 0, 5, &count);
            writer.rest(1, &self.bit_masks[..usize::from(count)]);
            writer.finish()
        }

        fn set_payload(&mut self, payload: &[u8]) {
            *self = Self::default();
            let reader = PayloadReader::new(payload);

            assign(&mut self.v1_alarm, reader.flag(0, 7));
            let count = reader.bits(0, 0, 5).unwrap_or_default();
            assign(&mut self.bit_masks, reader.take(1, usize::from(count)));
        }
    }

    display_fields!(AlarmTypeSupportedReport { v1_alarm, bit_masks });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alarm_report_v1_fields_only() {
        let report = v2::AlarmReport::from_payload(&[0x15, 0x01]);

        assert_eq!(report.alarm_type, 0x15);
        assert_eq!(report.alarm_level, 0x01);
        assert!(report.event_parameters.is_empty());
    }

    #[test]
    fn test_alarm_report_event_parameters() {
        let payload = [0x00, 0x00, 0x00, 0xFF, 0x06, 0x06, 0x01, 0x03, 0xAA];
        let report = v2::AlarmReport::from_payload(&payload);

        assert_eq!(report.zwave_alarm_type, v2::AlarmReport::ZWAVE_ALARM_TYPE_ACCESS_CONTROL);
        assert_eq!(report.zwave_alarm_event, 0x06);
        assert_eq!(report.event_parameters, vec![0x03]);
        assert_eq!(report.payload(), payload[..8].to_vec());
    }

    #[test]
    fn test_alarm_type_supported_report() {
        let report = v2::AlarmTypeSupportedReport::from_payload(&[0x82, 0xF8, 0x01]);

        assert!(report.v1_alarm);
        assert_eq!(report.supported_types(), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(report.payload(), vec![0x82, 0xF8, 0x01]);
    }

    #[test]
    fn test_alarm_report_v1_display() {
        let report = v1::AlarmReport {
            alarm_type: 2,
            alarm_level: 255,
        };

        assert_eq!(report.to_string(), "AlarmReport(alarm_type: 2, alarm_level: 255)");
    }
}
