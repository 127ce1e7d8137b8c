//! Line decoder for both radio stacks

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use hubwire_zigbee::Description;
use hubwire_zwave::{Command, CommandRegistry, DispatchConfig, Dispatcher, VersionMap};

use crate::error::{Error, Result};

/// One decoded inbound line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ZWave(Command),
    Zigbee(Description),
}

impl Message {
    pub fn as_zwave(&self) -> Option<&Command> {
        match self {
            Self::ZWave(command) => Some(command),
            Self::Zigbee(_) => None,
        }
    }

    pub fn as_zigbee(&self) -> Option<&Description> {
        match self {
            Self::Zigbee(description) => Some(description),
            Self::ZWave(_) => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZWave(command) => write!(f, "zwave {command}"),
            Self::Zigbee(description) => write!(f, "zigbee {description:?}"),
        }
    }
}

/// Decodes hub wire text from either stack
///
/// Zigbee descriptions are recognized by their prefixes; anything else
/// carrying a `device:` field is treated as a Z-Wave frame.
///
/// # Examples
///
/// ```
/// use hubwire::{Decoder, Message, VersionMap};
///
/// let decoder = Decoder::new();
/// let message = decoder
///     .decode("zw device: 03, command: 2503, payload: FF", &VersionMap::new())
///     .unwrap();
///
/// assert!(matches!(message, Message::ZWave(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    dispatcher: Dispatcher,
}

impl Decoder {
    /// Decoder over the full command catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Decoder over the full catalog with custom dispatch options
    pub fn with_config(config: DispatchConfig) -> Self {
        Self::with_dispatcher(Dispatcher::with_config(
            Arc::new(CommandRegistry::standard()),
            config,
        ))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Decode one line
    ///
    /// `versions` maps Z-Wave command classes to the version the device
    /// reported; it is ignored for Zigbee lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Core`] if the line is malformed and
    /// [`Error::UnsupportedMessage`] if it matches neither stack.
    pub fn decode(&self, line: &str, versions: &VersionMap) -> Result<Message> {
        if Description::matches(line) {
            let description = Description::parse(line)?;
            debug!(kind = description_kind(&description), "Decoded Zigbee line");
            return Ok(Message::Zigbee(description));
        }

        if line.contains("device:") {
            let command = self.dispatcher.parse(line, versions)?;
            if command.is_unrecognized() {
                warn!(code = %command.code(), "No decoder for Z-Wave command");
            } else {
                debug!(command = command.name(), version = ?command.version(), "Decoded Z-Wave line");
            }
            return Ok(Message::ZWave(command));
        }

        Err(Error::UnsupportedMessage(line.to_string()))
    }
}

fn description_kind(description: &Description) -> &'static str {
    match description {
        Description::ReadAttribute(_) => "read_attr",
        Description::Catchall(_) => "catchall",
        Description::ZoneStatus(_) => "zone_status",
    }
}
