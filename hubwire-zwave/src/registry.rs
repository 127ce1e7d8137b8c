//! Lookup table from `(class, command, version)` to a decoder

use std::collections::BTreeMap;
use std::fmt;

use hubwire_core::{Error, Result};
use tracing::{debug, warn};

use crate::catalog::{Command, CATALOG};
use crate::command::ZwaveCommand;

type Key = (u8, u8, u8);

fn decode_as<T>(payload: &[u8]) -> Command
where
    T: ZwaveCommand + Into<Command>,
{
    T::from_payload(payload).into()
}

/// One registered command layout
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub command_class: u8,
    pub command: u8,
    pub version: u8,
    pub name: &'static str,
    decode: fn(&[u8]) -> Command,
}

impl RegistryEntry {
    /// Entry for the layout `T`
    pub const fn of<T>() -> Self
    where
        T: ZwaveCommand + Into<Command>,
    {
        Self {
            command_class: T::COMMAND_CLASS,
            command: T::COMMAND,
            version: T::VERSION,
            name: T::NAME,
            decode: decode_as::<T>,
        }
    }

    /// Decode `payload` with this entry's layout
    pub fn decode(&self, payload: &[u8]) -> Command {
        (self.decode)(payload)
    }

    /// Four hex digit class and command code
    pub fn code(&self) -> String {
        format!("{:02X}{:02X}", self.command_class, self.command)
    }

    fn key(&self) -> Key {
        (self.command_class, self.command, self.version)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("code", &self.code())
            .field("version", &self.version)
            .field("name", &self.name)
            .finish()
    }
}

/// Immutable set of command layouts
///
/// Built once, then shared read-only (typically behind an `Arc`).
///
/// # Examples
///
/// ```
/// use hubwire_zwave::CommandRegistry;
///
/// let registry = CommandRegistry::standard();
/// assert!(registry.lookup(0x26, 0x03, 3).is_some());
/// assert_eq!(registry.versions_of(0x26, 0x03), vec![1, 3]);
/// assert_eq!(registry.max_version(0x26), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: BTreeMap<Key, RegistryEntry>,
}

impl CommandRegistry {
    /// Registry holding every layout in the catalog
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        for entry in CATALOG {
            if let Some(existing) = entries.get(&entry.key()) {
                warn!(
                    code = %entry.code(),
                    version = entry.version,
                    kept = ?existing,
                    "Duplicate catalog entry ignored"
                );
                continue;
            }
            entries.insert(entry.key(), *entry);
        }

        debug!(entries = entries.len(), "Built standard command registry");
        Self { entries }
    }

    /// Start an empty registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Exact entry for `(class, command, version)`
    pub fn lookup(&self, command_class: u8, command: u8, version: u8) -> Option<&RegistryEntry> {
        self.entries.get(&(command_class, command, version))
    }

    /// Highest registered version at or below `version`
    pub fn nearest_below(
        &self,
        command_class: u8,
        command: u8,
        version: u8,
    ) -> Option<&RegistryEntry> {
        self.entries
            .range((command_class, command, 0)..=(command_class, command, version))
            .next_back()
            .map(|(_, entry)| entry)
    }

    /// Lowest registered version of the command
    pub fn lowest(&self, command_class: u8, command: u8) -> Option<&RegistryEntry> {
        self.entries
            .range((command_class, command, 0)..=(command_class, command, u8::MAX))
            .next()
            .map(|(_, entry)| entry)
    }

    /// Entry used for `version`: exact, else nearest below, else
    /// version 1, else the lowest registered
    pub fn resolve(&self, command_class: u8, command: u8, version: u8) -> Option<&RegistryEntry> {
        self.nearest_below(command_class, command, version)
            .or_else(|| self.lookup(command_class, command, 1))
            .or_else(|| self.lowest(command_class, command))
    }

    /// Registered versions of a command, ascending
    pub fn versions_of(&self, command_class: u8, command: u8) -> Vec<u8> {
        self.entries
            .range((command_class, command, 0)..=(command_class, command, u8::MAX))
            .map(|(&(_, _, version), _)| version)
            .collect()
    }

    /// Highest version registered for any command of the class
    pub fn max_version(&self, command_class: u8) -> Option<u8> {
        self.entries
            .range((command_class, 0, 0)..=(command_class, u8::MAX, u8::MAX))
            .map(|(&(_, _, version), _)| version)
            .max()
    }

    pub fn contains(&self, command_class: u8, command: u8) -> bool {
        self.lowest(command_class, command).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by class, command and version
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }
}

/// Builds a registry from a chosen subset of layouts
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<Key, RegistryEntry>,
}

impl RegistryBuilder {
    /// Register the layout `T`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if a layout is already
    /// registered for the same class, command and version.
    pub fn register<T>(self) -> Result<Self>
    where
        T: ZwaveCommand + Into<Command>,
    {
        self.register_entry(RegistryEntry::of::<T>())
    }

    /// Register a prepared entry
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] on a key collision.
    pub fn register_entry(mut self, entry: RegistryEntry) -> Result<Self> {
        if self.entries.contains_key(&entry.key()) {
            return Err(Error::DuplicateRegistration {
                command_class: entry.command_class,
                command: entry.command,
                version: entry.version,
            });
        }
        self.entries.insert(entry.key(), entry);
        Ok(self)
    }

    /// Register every catalog layout of one command class
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if any of them is already
    /// registered.
    pub fn catalog_class(self, command_class: u8) -> Result<Self> {
        CATALOG
            .iter()
            .filter(|entry| entry.command_class == command_class)
            .try_fold(self, |builder, entry| builder.register_entry(*entry))
    }

    pub fn build(self) -> CommandRegistry {
        debug!(entries = self.entries.len(), "Built command registry");
        CommandRegistry {
            entries: self.entries,
        }
    }
}
