//! Inbound Z-Wave frame text

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use hubwire_core::{hex, Error, Result};
use tracing::trace;

/// One raw Z-Wave message as rendered by the radio
///
/// # Wire Format
///
/// ```text
/// zw device: 03, command: 2603, payload: 10 FF
/// └┬┘        └┬┘          └┬─┘└┬┘       └──┬──┘
/// protocol  device    class  command   payload bytes
/// ```
///
/// The device id is opaque. Hex is case-insensitive on input and
/// upper-case on output.
///
/// # Examples
///
/// ```
/// use hubwire_zwave::CommandFrame;
///
/// let frame: CommandFrame = "zw device: 03, command: 2603, payload: 10".parse().unwrap();
/// assert_eq!(frame.command_class, 0x26);
/// assert_eq!(frame.command, 0x03);
/// assert_eq!(frame.payload.as_ref(), &[0x10]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CommandFrame {
    /// Protocol prefix, normally `"zw"`
    pub protocol: String,

    /// Source device reference
    pub device: String,

    /// Command class identifier
    pub command_class: u8,

    /// Command identifier
    pub command: u8,

    /// Payload bytes after the class/command header
    pub payload: Bytes,
}

impl CommandFrame {
    /// Protocol prefix used by Z-Wave lines
    pub const PROTOCOL: &'static str = "zw";

    /// Create a Z-Wave frame
    pub fn new(
        device: impl Into<String>,
        command_class: u8,
        command: u8,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            protocol: Self::PROTOCOL.to_string(),
            device: device.into(),
            command_class,
            command,
            payload: payload.into(),
        }
    }

    /// Parse a frame line
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFrame`] if a field is missing, the command
    /// code is not four hex digits, or a payload token is not a single hex
    /// byte.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::malformed_frame(line, reason);

        let (protocol, rest) = line
            .split_once("device:")
            .ok_or_else(|| malformed("missing device"))?;
        let (device, rest) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing command"))?;
        let device = device.trim();
        if device.is_empty() {
            return Err(malformed("empty device"));
        }

        let rest = rest
            .trim_start()
            .strip_prefix("command:")
            .ok_or_else(|| malformed("missing command"))?;
        let (code, rest) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing payload"))?;
        let code = hex::hex_to_bytes(code.trim()).map_err(|_| malformed("command is not hex"))?;
        let &[command_class, command] = code.as_slice() else {
            return Err(malformed("command must be four hex digits"));
        };

        let payload = rest
            .trim_start()
            .strip_prefix("payload:")
            .ok_or_else(|| malformed("missing payload"))?;
        let payload = payload
            .split_whitespace()
            .map(|token| match hex::hex_to_bytes(token).as_deref() {
                Ok(&[byte]) => Ok(byte),
                _ => Err(malformed("payload token is not a hex byte")),
            })
            .collect::<Result<Vec<u8>>>()?;

        let frame = Self {
            protocol: protocol.trim().to_string(),
            device: device.to_string(),
            command_class,
            command,
            payload: Bytes::from(payload),
        };

        trace!(
            device = %frame.device,
            code = %frame.code(),
            payload_len = frame.payload.len(),
            "Parsed frame"
        );

        Ok(frame)
    }

    /// Four hex digit class and command code
    pub fn code(&self) -> String {
        format!("{:02X}{:02X}", self.command_class, self.command)
    }
}

impl FromStr for CommandFrame {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        Self::parse(line)
    }
}

impl fmt::Debug for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandFrame")
            .field("device", &self.device)
            .field("command_class", &format!("0x{:02X}", self.command_class))
            .field("command", &format!("0x{:02X}", self.command))
            .field("payload", &hex::bytes_to_hex(&self.payload))
            .finish()
    }
}

impl fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} device: {}, command: {}, payload: {}",
            self.protocol,
            self.device,
            self.code(),
            hex::bytes_to_hex_delimited(&self.payload, " ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_frame() {
        let frame = CommandFrame::parse("zw device: 03, command: 2603, payload: 10").unwrap();

        assert_eq!(frame.protocol, "zw");
        assert_eq!(frame.device, "03");
        assert_eq!(frame.command_class, 0x26);
        assert_eq!(frame.command, 0x03);
        assert_eq!(frame.payload.as_ref(), &[0x10]);
    }

    #[test]
    fn test_parse_trailing_whitespace() {
        let frame = CommandFrame::parse("zw device: 0A, command: 7105, payload: 15 01 ").unwrap();
        assert_eq!(frame.payload.as_ref(), &[0x15, 0x01]);
    }

    #[test]
    fn test_parse_lower_case() {
        let frame = CommandFrame::parse("zw device: 1f, command: 8a04, payload: 07 e6 0c 1f").unwrap();

        assert_eq!(frame.code(), "8A04");
        assert_eq!(frame.payload.as_ref(), &[0x07, 0xE6, 0x0C, 0x1F]);
    }

    #[test]
    fn test_parse_empty_payload() {
        let frame = CommandFrame::parse("zw device: 03, command: 8A03, payload: ").unwrap();
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        let lines = [
            "",
            "zw device: 03",
            "zw device: , command: 2603, payload: 10",
            "zw device: 03, payload: 10",
            "zw device: 03, command: 2603",
            "zw device: 03, command: 26, payload: 10",
            "zw device: 03, command: 260301, payload: 10",
            "zw device: 03, command: 26XZ, payload: 10",
            "zw device: 03, command: 2603, payload: 1G",
            "zw device: 03, command: 2603, payload: 1 0",
            "zw device: 03, command: 2603, payload: 10FF",
            "zw device: 03, command: 2603, payload: 10 FF01",
        ];

        for line in lines {
            let result = CommandFrame::parse(line);
            assert!(
                matches!(result, Err(Error::MalformedFrame { .. })),
                "expected MalformedFrame for {line:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_display_matches_wire_format() {
        let frame = CommandFrame::new("03", 0x26, 0x03, vec![0x10, 0xff]);
        let line = frame.to_string();

        assert_eq!(line, "zw device: 03, command: 2603, payload: 10 FF");
        assert_eq!(CommandFrame::parse(&line).unwrap(), frame);
    }
}
