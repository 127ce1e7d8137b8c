//! Error types for hubwire-core

/// Result type alias for hubwire codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Hex text has odd length or contains non-hex characters
    #[error("Malformed hex {input:?}: {reason}")]
    MalformedHex {
        input: String,
        reason: &'static str,
    },

    /// Wire text does not match the expected frame shape
    #[error("Malformed frame {line:?}: {reason}")]
    MalformedFrame {
        line: String,
        reason: String,
    },

    /// Value does not fit the declared byte width
    #[error("Value {value} does not fit in {width} byte(s)")]
    ValueTooLarge {
        value: String,
        width: usize,
    },

    /// Data type has no fixed width to pack into
    #[error("Data type 0x{0:02X} has no fixed width")]
    UnsupportedDataType(u8),

    /// Registry already holds an entry for this key
    #[error("Command 0x{command_class:02X}{command:02X} version {version} registered twice")]
    DuplicateRegistration {
        command_class: u8,
        command: u8,
        version: u8,
    },
}

impl Error {
    /// Build a hex error for `input`
    pub fn malformed_hex(input: &str, reason: &'static str) -> Self {
        Self::MalformedHex {
            input: input.to_string(),
            reason,
        }
    }

    /// Build a width error for `value`
    pub fn value_too_large(value: impl ToString, width: usize) -> Self {
        Self::ValueTooLarge {
            value: value.to_string(),
            width,
        }
    }

    /// Build a frame error for `line`
    pub fn malformed_frame(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedFrame {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if the error was caused by bad inbound text
    ///
    /// Callers typically log and drop such frames.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedHex { .. } | Self::MalformedFrame { .. }
        )
    }
}
