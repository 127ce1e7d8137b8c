//! Command trait and the unrecognized-command value

use std::fmt;

use bytes::Bytes;
use hubwire_core::hex;

use crate::frame::CommandFrame;

/// One Z-Wave command layout at one command class version
///
/// Implementations are plain structs with public fields. Decoding starts
/// from `Default` and hydrates with [`ZwaveCommand::set_payload`];
/// encoding fills the fields and calls [`ZwaveCommand::payload`].
///
/// For every legal set of field values,
/// `T::from_payload(&command.payload()) == command`.
pub trait ZwaveCommand: fmt::Debug + fmt::Display + Clone + Default + PartialEq {
    /// Command class identifier
    const COMMAND_CLASS: u8;

    /// Command identifier within the class
    const COMMAND: u8;

    /// Command class version this layout belongs to
    const VERSION: u8;

    /// Command name
    const NAME: &'static str;

    /// Serialize fields into payload bytes
    fn payload(&self) -> Vec<u8>;

    /// Replace all fields with those decoded from `payload`
    ///
    /// Fields whose bytes are missing are left at their defaults.
    fn set_payload(&mut self, payload: &[u8]);

    /// Decode a new command from payload bytes
    fn from_payload(payload: &[u8]) -> Self {
        let mut command = Self::default();
        command.set_payload(payload);
        command
    }

    /// Four hex digit class and command code, e.g. `"8506"`
    fn code() -> String {
        format!("{:02X}{:02X}", Self::COMMAND_CLASS, Self::COMMAND)
    }

    /// Outbound wire text: code followed by payload hex
    fn format(&self) -> String {
        format!("{}{}", Self::code(), hex::bytes_to_hex(self.payload()))
    }
}

/// Store a decoded field when its bytes were present
pub(crate) fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Writes `Name(field: value, ...)`
pub(crate) fn fmt_fields(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    fields: &[(&str, &dyn fmt::Debug)],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (index, (field, value)) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{field}: {value:?}")?;
    }
    f.write_str(")")
}

/// Frame with no registered decoder at any version
///
/// Unknown traffic from real hardware is expected, so it is carried as a
/// value rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnrecognizedCommand {
    pub command_class: u8,
    pub command: u8,
    pub payload: Bytes,
}

impl UnrecognizedCommand {
    /// Four hex digit class and command code
    pub fn code(&self) -> String {
        format!("{:02X}{:02X}", self.command_class, self.command)
    }
}

impl From<CommandFrame> for UnrecognizedCommand {
    fn from(frame: CommandFrame) -> Self {
        Self {
            command_class: frame.command_class,
            command: frame.command,
            payload: frame.payload,
        }
    }
}

impl fmt::Display for UnrecognizedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized(code: {}, payload: {})",
            self.code(),
            hex::bytes_to_hex_delimited(&self.payload, " ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fields;

    impl fmt::Display for Fields {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let nodes = vec![1u8, 2];
            fmt_fields(
                f,
                "Sample",
                &[("level", &5u8 as &dyn fmt::Debug), ("nodes", &nodes as &dyn fmt::Debug)],
            )
        }
    }

    #[test]
    fn test_fmt_fields() {
        assert_eq!(Fields.to_string(), "Sample(level: 5, nodes: [1, 2])");
    }

    #[test]
    fn test_unrecognized_from_frame() {
        let frame = CommandFrame::new("03", 0xEE, 0x01, vec![0x10, 0xFF]);
        let command = UnrecognizedCommand::from(frame);

        assert_eq!(command.code(), "EE01");
        assert_eq!(command.payload.as_ref(), &[0x10, 0xFF]);
        assert_eq!(command.to_string(), "Unrecognized(code: EE01, payload: 10 FF)");
    }
}
