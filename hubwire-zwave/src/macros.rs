//! Declarative command layouts
//!
//! ```text
//! zwave_commands! {
//!     /// Doc
//!     NodeInfoCachedGet(0x52, 0x03, version = 1) {
//!         seq_no: u8 => u8(0),
//!         max_age: u8 => bits(1, 0, 4),
//!         node_id: u8 => u8(2),
//!     }
//! }
//! ```
//!
//! Each field names a [`PayloadReader`]/[`PayloadWriter`] accessor and its
//! position: `u8(byte)`, `bits(byte, shift, width)`, `flag(byte, bit)`,
//! `u16(byte)`, `u32(byte)`, `array(byte)` or `rest(byte)`.
//!
//! [`PayloadReader`]: hubwire_core::PayloadReader
//! [`PayloadWriter`]: hubwire_core::PayloadWriter

macro_rules! zwave_commands {
    ($(
        $(#[$meta:meta])*
        $name:ident ($class:literal, $command:literal, version = $version:literal) {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $kind:ident ( $($arg:expr),* ) ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $crate::command::ZwaveCommand for $name {
            const COMMAND_CLASS: u8 = $class;
            const COMMAND: u8 = $command;
            const VERSION: u8 = $version;
            const NAME: &'static str = stringify!($name);

            fn payload(&self) -> Vec<u8> {
                #[allow(unused_mut)]
                let mut writer = hubwire_core::PayloadWriter::new();
                $( writer.$kind($($arg,)* &self.$field); )*
                writer.finish()
            }

            fn set_payload(&mut self, payload: &[u8]) {
                *self = Self::default();
                let reader = hubwire_core::PayloadReader::new(payload);
                $( $crate::command::assign(&mut self.$field, reader.$kind($($arg),*)); )*
                let _ = reader;
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::command::fmt_fields(
                    f,
                    stringify!($name),
                    &[ $( (stringify!($field), &self.$field as &dyn std::fmt::Debug), )* ],
                )
            }
        }
    )*};
}

/// Implements `Display` for hand-written commands
macro_rules! display_fields {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::command::fmt_fields(
                    f,
                    stringify!($name),
                    &[ $( (stringify!($field), &self.$field as &dyn std::fmt::Debug), )* ],
                )
            }
        }
    };
}
