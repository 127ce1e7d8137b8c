//! Version-aware decoding of frames into commands

use std::collections::HashMap;
use std::sync::Arc;

use hubwire_core::Result;
use tracing::debug;

use crate::catalog::Command;
use crate::command::UnrecognizedCommand;
use crate::frame::CommandFrame;
use crate::registry::{CommandRegistry, RegistryEntry};

/// Command class version negotiated with a device, keyed by class
pub type VersionMap = HashMap<u8, u8>;

/// What to do when no layout exists at the negotiated version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionFallback {
    /// Highest registered version below, then version 1, then lowest
    #[default]
    NearestBelow,

    /// Retry only at the configured default version
    DefaultVersion,
}

/// Dispatcher options
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Version assumed for classes missing from the version map
    pub default_version: u8,

    pub fallback: VersionFallback,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_version: 1,
            fallback: VersionFallback::NearestBelow,
        }
    }
}

impl DispatchConfig {
    pub fn with_default_version(mut self, version: u8) -> Self {
        self.default_version = version;
        self
    }

    pub fn with_fallback(mut self, fallback: VersionFallback) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Decodes frames using a shared registry
///
/// # Examples
///
/// ```
/// use hubwire_zwave::{Command, Dispatcher, VersionMap};
///
/// let dispatcher = Dispatcher::standard();
/// let versions = VersionMap::from([(0x26, 3)]);
///
/// let command = dispatcher
///     .parse("zw device: 03, command: 2603, payload: 10", &versions)
///     .unwrap();
/// assert!(matches!(command, Command::SwitchMultilevelReportV3(_)));
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self::with_config(registry, DispatchConfig::default())
    }

    /// Dispatcher over the full catalog
    pub fn standard() -> Self {
        Self::new(Arc::new(CommandRegistry::standard()))
    }

    pub fn with_config(registry: Arc<CommandRegistry>, config: DispatchConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Entry used for a class and command under `versions`
    pub fn resolve(&self, command_class: u8, command: u8, versions: &VersionMap) -> Option<&RegistryEntry> {
        let version = versions
            .get(&command_class)
            .copied()
            .unwrap_or(self.config.default_version);

        let entry = match self.config.fallback {
            VersionFallback::NearestBelow => self.registry.resolve(command_class, command, version),
            VersionFallback::DefaultVersion => self
                .registry
                .lookup(command_class, command, version)
                .or_else(|| {
                    self.registry
                        .lookup(command_class, command, self.config.default_version)
                }),
        };

        if let Some(entry) = entry.filter(|entry| entry.version != version) {
            debug!(
                code = %entry.code(),
                requested = version,
                resolved = entry.version,
                "Falling back to another command version"
            );
        }
        entry
    }

    /// Decode a frame
    ///
    /// Frames with no registered layout come back as
    /// [`Command::Unrecognized`].
    pub fn dispatch(&self, frame: CommandFrame, versions: &VersionMap) -> Command {
        match self.resolve(frame.command_class, frame.command, versions) {
            Some(entry) => entry.decode(&frame.payload),
            None => {
                debug!(device = %frame.device, code = %frame.code(), "Unrecognized command");
                Command::Unrecognized(UnrecognizedCommand::from(frame))
            }
        }
    }

    /// Parse a frame line and decode it
    ///
    /// # Errors
    ///
    /// Returns [`hubwire_core::Error::MalformedFrame`] if the line is not
    /// a frame.
    pub fn parse(&self, line: &str, versions: &VersionMap) -> Result<Command> {
        let frame = CommandFrame::parse(line)?;
        Ok(self.dispatch(frame, versions))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::command::ZwaveCommand;
    use crate::command_classes::battery;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const DIMMER_REPORT: &str = "zw device: 03, command: 2603, payload: 10";

    #[test]
    fn test_versioned_dispatch() {
        let dispatcher = Dispatcher::standard();

        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::from([(0x26, 1)])).unwrap();
        assert!(matches!(command, Command::SwitchMultilevelReportV1(_)));

        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::from([(0x26, 3)])).unwrap();
        assert!(matches!(command, Command::SwitchMultilevelReportV3(ref report) if report.value == 0x10));
    }

    #[test]
    fn test_missing_version_uses_default() {
        let dispatcher = Dispatcher::standard();
        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::new()).unwrap();

        assert!(matches!(command, Command::SwitchMultilevelReportV1(_)));
        assert_eq!(command.version(), Some(1));
    }

    #[test]
    fn test_nearest_lower_version() {
        let dispatcher = Dispatcher::standard();
        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::from([(0x26, 2)])).unwrap();

        assert!(matches!(command, Command::SwitchMultilevelReportV1(_)));
    }

    #[test]
    fn test_alarm_and_user_code() {
        let dispatcher = Dispatcher::standard();

        let alarm = dispatcher
            .parse("zw device: 0A, command: 7105, payload: 15 01 ", &VersionMap::from([(0x71, 2)]))
            .unwrap();
        assert!(matches!(alarm, Command::AlarmReportV2(_)));

        let code = dispatcher
            .parse("zw device: 0D, command: 6303, payload: 31 FF ", &VersionMap::from([(0x63, 1)]))
            .unwrap();
        let Command::UserCodeReport(report) = code else {
            panic!("expected UserCodeReport");
        };
        assert_eq!(report.user_identifier, 0x31);
        assert_eq!(report.user_id_status, 0xFF);
    }

    #[test]
    fn test_unknown_command_is_unrecognized() {
        let dispatcher = Dispatcher::standard();
        let command = dispatcher
            .parse("zw device: 03, command: EE01, payload: 01 02", &VersionMap::new())
            .unwrap();

        let Command::Unrecognized(unrecognized) = command else {
            panic!("expected Unrecognized");
        };
        assert_eq!(unrecognized.code(), "EE01");
        assert_eq!(unrecognized.payload.as_ref(), &[0x01, 0x02]);
    }

    #[test]
    fn test_malformed_line() {
        let result = Dispatcher::standard().parse("zw device: 03", &VersionMap::new());
        assert!(result.unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_default_version_fallback() {
        let dispatcher = Dispatcher::with_config(
            Arc::new(CommandRegistry::standard()),
            DispatchConfig::default().with_fallback(VersionFallback::DefaultVersion),
        );

        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::from([(0x26, 2)])).unwrap();
        assert!(matches!(command, Command::SwitchMultilevelReportV1(_)));

        let supported = dispatcher
            .parse("zw device: 03, command: 2607, payload: 01", &VersionMap::new())
            .unwrap();
        assert!(supported.is_unrecognized());
    }

    #[test]
    fn test_configured_default_version() {
        let dispatcher = Dispatcher::with_config(
            Arc::new(CommandRegistry::standard()),
            DispatchConfig::default().with_default_version(3),
        );

        let command = dispatcher.parse(DIMMER_REPORT, &VersionMap::new()).unwrap();
        assert!(matches!(command, Command::SwitchMultilevelReportV3(_)));
    }

    #[test]
    fn test_subset_registry() {
        let registry = CommandRegistry::builder()
            .register::<battery::v1::BatteryReport>()
            .unwrap()
            .build();
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let battery = dispatcher
            .parse("zw device: 05, command: 8003, payload: FF", &VersionMap::new())
            .unwrap();
        assert!(matches!(battery, Command::BatteryReport(ref report) if report.is_low()));

        let dimmer = dispatcher.parse(DIMMER_REPORT, &VersionMap::new()).unwrap();
        assert!(dimmer.is_unrecognized());
    }

    #[test]
    fn test_dispatch_round_trips_frame() {
        let dispatcher = Dispatcher::standard();
        let report = battery::v1::BatteryReport { battery_level: 42 };
        let frame = Command::from(report.clone()).to_frame("05");

        let decoded = dispatcher.dispatch(frame, &VersionMap::new());
        assert_eq!(battery::v1::BatteryReport::try_from(decoded).unwrap(), report);
        assert_eq!(battery::v1::BatteryReport::code(), "8003");
    }

    proptest! {
        #[test]
        fn prop_catalog_payload_round_trip(
            index in 0..CATALOG.len(),
            payload in proptest::collection::vec(any::<u8>(), 0..48),
        ) {
            let entry = &CATALOG[index];
            let command = entry.decode(&payload);
            let again = entry.decode(&command.payload());

            prop_assert_eq!(&again, &command);
            prop_assert_eq!(command.version(), Some(entry.version));
        }
    }
}
