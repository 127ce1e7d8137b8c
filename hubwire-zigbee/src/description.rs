//! Inbound Zigbee message descriptions
//!
//! The radio renders each inbound message as one line of text. Three shapes
//! are understood:
//!
//! ```text
//! read attr - raw: 0B040104000A0900002001, dni: 0B04, endpoint: 01, cluster: 0402, size: 0A, attrId: 0000, encoding: 29, command: 01, value: 9907
//! catchall: 0104 0500 01 01 0040 00 ACFE 01 00 0000 00 01 010000000000
//! zone status 0x0001 -- extended status 0x00 -- zone ID 0x00 -- delay 0x0000
//! ```

use std::collections::HashMap;

use hubwire_core::{hex, Error, Result};
use tracing::trace;

use crate::constants::{attributes, clusters, ias_zone, Direction};
use crate::data_type::{self, DataLength, DataType};
use crate::zone_status::{ZoneStatus, ZoneStatusChange};

fn narrow<T: TryFrom<u64>>(line: &str, name: &str, text: &str) -> Result<T> {
    let value = hex::hex_to_int(text)
        .map_err(|_| Error::malformed_frame(line, format!("{name} is not hex")))?;
    T::try_from(value).map_err(|_| Error::malformed_frame(line, format!("{name} out of range")))
}

/// Attribute read response or report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadAttribute {
    pub raw: String,
    pub dni: String,
    pub endpoint: u8,
    pub cluster: u16,
    pub size: u8,
    pub attr_id: u16,
    /// Data type code of `value`
    pub encoding: u8,
    pub command: u8,
    /// Value hex, big-endian
    pub value: String,
}

impl ReadAttribute {
    pub const PREFIX: &'static str = "read attr - ";

    fn parse(line: &str) -> Result<Self> {
        let body = line
            .trim_start()
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| Error::malformed_frame(line, "missing read attr prefix"))?;

        let fields: HashMap<&str, &str> = body
            .split(',')
            .filter_map(|pair| pair.split_once(':'))
            .map(|(key, value)| (key.trim(), value.trim()))
            .collect();
        let field = |name: &str| {
            fields
                .get(name)
                .copied()
                .ok_or_else(|| Error::malformed_frame(line, format!("missing {name}")))
        };

        let encoding: u8 = narrow(line, "encoding", field("encoding")?)?;
        let value = field("value")?.to_ascii_uppercase();
        if hex::hex_to_bytes(&value).is_err() {
            return Err(Error::malformed_frame(line, "value is not hex"));
        }

        // Fixed-width numbers arrive least significant byte first
        let value = match data_type::length_of(encoding) {
            DataLength::Fixed(width) if width > 1 && value.len() == width * 2 => {
                hex::reverse_byte_order(&value)?
            }
            _ => value,
        };

        Ok(Self {
            raw: field("raw")?.to_string(),
            dni: field("dni")?.to_string(),
            endpoint: narrow(line, "endpoint", field("endpoint")?)?,
            cluster: narrow(line, "cluster", field("cluster")?)?,
            size: narrow(line, "size", field("size")?)?,
            attr_id: narrow(line, "attrId", field("attrId")?)?,
            encoding,
            command: narrow(line, "command", field("command")?)?,
            value,
        })
    }

    /// Data type of the value, if the code is known
    pub fn data_type(&self) -> Option<DataType> {
        DataType::try_from(self.encoding).ok()
    }

    /// Value as an unsigned integer, for fixed-width types
    pub fn value_as_int(&self) -> Result<u64> {
        data_type::unpack(&self.value, self.encoding, false)
    }

    /// Device event carried by this attribute, if any
    pub fn event(&self) -> Option<AttributeEvent> {
        let value = self.value_as_int().ok()?;

        match (self.cluster, self.attr_id, self.data_type()?) {
            (clusters::LEVEL_CONTROL, attributes::CURRENT_LEVEL, DataType::Uint8) => {
                let percent = (value as f64 / 2.55).round() as u8;
                Some(AttributeEvent::Level(percent))
            }
            (clusters::ON_OFF, attributes::ON_OFF, DataType::Boolean) => {
                Some(AttributeEvent::Switch(value == 1))
            }
            (clusters::IAS_ZONE, attributes::ZONE_STATUS, DataType::Bitmap16) => {
                u16::try_from(value).ok().map(|word| AttributeEvent::Zone(ZoneStatus::new(word)))
            }
            _ => None,
        }
    }
}

/// Device state derived from an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeEvent {
    /// Level in percent
    Level(u8),
    /// Switch on (`true`) or off
    Switch(bool),
    Zone(ZoneStatus),
}

/// Any cluster message not rendered as an attribute read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catchall {
    pub profile_id: u16,
    pub cluster_id: u16,
    pub source_endpoint: u8,
    pub destination_endpoint: u8,
    pub options: u16,
    pub message_type: u8,
    pub dni: String,
    pub cluster_specific: bool,
    pub manufacturer_specific: bool,
    pub manufacturer_id: u16,
    pub command: u8,
    pub direction: Direction,
    pub data: Vec<u8>,
}

impl Catchall {
    pub const PREFIX: &'static str = "catchall: ";

    fn parse(line: &str) -> Result<Self> {
        let body = line
            .trim_start()
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| Error::malformed_frame(line, "missing catchall prefix"))?;

        let tokens: Vec<&str> = body.split_whitespace().collect();
        if tokens.len() < 12 {
            return Err(Error::malformed_frame(
                line,
                format!("expected at least 12 fields, got {}", tokens.len()),
            ));
        }

        let flag = |name: &str, text: &str| narrow::<u8>(line, name, text).map(|value| value == 1);
        let direction: u8 = narrow(line, "direction", tokens[11])?;
        let data = match tokens.get(12) {
            Some(text) => hex::hex_to_bytes(text)
                .map_err(|_| Error::malformed_frame(line, "data is not hex"))?,
            None => Vec::new(),
        };

        Ok(Self {
            profile_id: narrow(line, "profile", tokens[0])?,
            cluster_id: narrow(line, "cluster", tokens[1])?,
            source_endpoint: narrow(line, "source endpoint", tokens[2])?,
            destination_endpoint: narrow(line, "destination endpoint", tokens[3])?,
            options: narrow(line, "options", tokens[4])?,
            message_type: narrow(line, "message type", tokens[5])?,
            dni: tokens[6].to_string(),
            cluster_specific: flag("cluster specific", tokens[7])?,
            manufacturer_specific: flag("manufacturer specific", tokens[8])?,
            manufacturer_id: narrow(line, "manufacturer", tokens[9])?,
            command: narrow(line, "command", tokens[10])?,
            direction: Direction::try_from(direction)
                .map_err(|_| Error::malformed_frame(line, "direction out of range"))?,
            data,
        })
    }

    /// Zone status carried by an IAS Zone status change notification
    pub fn zone_status(&self) -> Option<ZoneStatus> {
        let is_notification = self.cluster_id == clusters::IAS_ZONE
            && self.cluster_specific
            && self.command == ias_zone::ZONE_STATUS_CHANGE_NOTIFICATION;

        match self.data.as_slice() {
            [low, high, ..] if is_notification => {
                Some(ZoneStatus::new(u16::from_le_bytes([*low, *high])))
            }
            _ => None,
        }
    }
}

/// One parsed inbound Zigbee line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    ReadAttribute(ReadAttribute),
    Catchall(Catchall),
    ZoneStatus(ZoneStatusChange),
}

impl Description {
    /// Check if `line` has one of the Zigbee description shapes
    pub fn matches(line: &str) -> bool {
        let line = line.trim_start();
        [ReadAttribute::PREFIX, Catchall::PREFIX, ZoneStatusChange::PREFIX]
            .iter()
            .any(|prefix| line.starts_with(prefix))
    }

    /// Parse a description line
    ///
    /// # Errors
    ///
    /// [`Error::MalformedFrame`] if the line has none of the known shapes
    /// or a field does not parse.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim_start();
        trace!(line = line, "Parsing Zigbee description");

        if trimmed.starts_with(ReadAttribute::PREFIX) {
            ReadAttribute::parse(line).map(Self::ReadAttribute)
        } else if trimmed.starts_with(Catchall::PREFIX) {
            Catchall::parse(line).map(Self::Catchall)
        } else if trimmed.starts_with(ZoneStatusChange::PREFIX) {
            trimmed.parse().map(Self::ZoneStatus)
        } else {
            Err(Error::malformed_frame(line, "unrecognized description"))
        }
    }

    /// Zone status, from whichever shape carries one
    pub fn zone_status(&self) -> Option<ZoneStatus> {
        match self {
            Self::ZoneStatus(change) => Some(change.zone_status),
            Self::Catchall(catchall) => catchall.zone_status(),
            Self::ReadAttribute(attribute) => match attribute.event() {
                Some(AttributeEvent::Zone(status)) => Some(status),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const READ_ATTR: &str = "read attr - raw: 0B040104000A0900002001, dni: 0B04, endpoint: 01, \
        cluster: 0402, size: 0A, attrId: 0000, encoding: 29, command: 01, value: 9907";

    const CATCHALL: &str = "catchall: 0104 0500 01 01 0040 00 ACFE 01 00 0000 00 01 010000000000";

    fn read_attr(cluster: &str, encoding: &str, value: &str) -> ReadAttribute {
        let line = format!(
            "read attr - raw: 00, dni: ACFE, endpoint: 01, cluster: {cluster}, size: 01, \
             attrId: 0000, encoding: {encoding}, command: 0A, value: {value}"
        );
        match Description::parse(&line).unwrap() {
            Description::ReadAttribute(attribute) => attribute,
            other => panic!("unexpected description {other:?}"),
        }
    }

    #[test]
    fn test_parse_read_attr() {
        let Description::ReadAttribute(attribute) = Description::parse(READ_ATTR).unwrap() else {
            panic!("expected read attr");
        };

        assert_eq!(attribute.raw, "0B040104000A0900002001");
        assert_eq!(attribute.dni, "0B04");
        assert_eq!(attribute.endpoint, 1);
        assert_eq!(attribute.cluster, 1026);
        assert_eq!(attribute.size, 0x0A);
        assert_eq!(attribute.attr_id, 0);
        assert_eq!(attribute.encoding, 0x29);
        assert_eq!(attribute.command, 1);
        assert_eq!(attribute.value, "0799");
        assert_eq!(attribute.value_as_int().unwrap(), 0x0799);
        assert_eq!(attribute.data_type(), Some(DataType::Int16));
    }

    #[test]
    fn test_single_byte_value_is_not_reversed() {
        assert_eq!(read_attr("0008", "20", "fe").value, "FE");
    }

    #[test]
    fn test_string_value_is_not_reversed() {
        assert_eq!(read_attr("0000", "42", "4142").value, "4142");
    }

    #[test]
    fn test_read_attr_missing_field() {
        let result = Description::parse("read attr - cluster: 0006, encoding: 10");
        assert!(matches!(result, Err(Error::MalformedFrame { .. })));
    }

    #[test]
    fn test_level_event() {
        assert_eq!(read_attr("0008", "20", "FE").event(), Some(AttributeEvent::Level(100)));
        assert_eq!(read_attr("0008", "20", "80").event(), Some(AttributeEvent::Level(50)));
        assert_eq!(read_attr("0008", "20", "00").event(), Some(AttributeEvent::Level(0)));
    }

    #[test]
    fn test_switch_event() {
        assert_eq!(read_attr("0006", "10", "01").event(), Some(AttributeEvent::Switch(true)));
        assert_eq!(read_attr("0006", "10", "00").event(), Some(AttributeEvent::Switch(false)));
    }

    #[test]
    fn test_no_event_for_other_clusters() {
        assert_eq!(read_attr("0402", "29", "9907").event(), None);
    }

    #[test]
    fn test_parse_catchall() {
        let Description::Catchall(catchall) = Description::parse(CATCHALL).unwrap() else {
            panic!("expected catchall");
        };

        assert_eq!(catchall.profile_id, 0x0104);
        assert_eq!(catchall.cluster_id, 1280);
        assert_eq!(catchall.source_endpoint, 1);
        assert_eq!(catchall.destination_endpoint, 1);
        assert_eq!(catchall.options, 0x0040);
        assert_eq!(catchall.message_type, 0);
        assert_eq!(catchall.dni, "ACFE");
        assert!(catchall.cluster_specific);
        assert!(!catchall.manufacturer_specific);
        assert_eq!(catchall.manufacturer_id, 0);
        assert_eq!(catchall.command, 0);
        assert_eq!(catchall.direction, Direction::ServerToClient);
        assert_eq!(catchall.data, vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(catchall.zone_status(), Some(ZoneStatus::new(0x0001)));
    }

    #[test]
    fn test_catchall_without_data() {
        let Description::Catchall(catchall) =
            Description::parse("catchall: 0104 0006 01 01 0040 00 ACFE 00 00 0000 0B 01").unwrap()
        else {
            panic!("expected catchall");
        };

        assert!(catchall.data.is_empty());
        assert_eq!(catchall.zone_status(), None);
    }

    #[test]
    fn test_catchall_too_short() {
        assert!(Description::parse("catchall: 0104 0500 01").is_err());
    }

    #[test]
    fn test_parse_zone_status_description() {
        let description =
            Description::parse("zone status 0x0041 -- extended status 0x00 -- zone ID 0x00 -- delay 0x0000")
                .unwrap();

        let status = description.zone_status().unwrap();
        assert!(status.is_alarm1_set());
        assert!(status.is_trouble_set());
    }

    #[test]
    fn test_matches() {
        assert!(Description::matches(READ_ATTR));
        assert!(Description::matches(CATCHALL));
        assert!(Description::matches("zone status 0x0000"));
        assert!(!Description::matches("zw device: 03, command: 2603, payload: 10"));
        assert!(Description::parse("zw device: 03, command: 2603, payload: 10").is_err());
    }
}
