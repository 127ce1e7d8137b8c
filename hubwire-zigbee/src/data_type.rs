//! Zigbee Cluster Library primitive data types
//!
//! Every attribute value on the wire is tagged with a one-byte type code.
//! The table here gives each code its fixed width (or marks it as carrying
//! its length in-band) and whether its values are discrete.

use std::fmt;

use hubwire_core::hex;
use hubwire_core::{Error, Result};

/// Byte width of a data type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DataLength {
    /// Always this many bytes (zero for no-data types)
    Fixed(usize),
    /// Length carried in-band (strings, collections)
    Variable,
}

impl DataLength {
    /// Width in bytes, if fixed
    pub fn fixed(self) -> Option<usize> {
        match self {
            Self::Fixed(len) => Some(len),
            Self::Variable => None,
        }
    }
}

/// ZCL data type codes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    NoData = 0x00,

    // General data
    Data8 = 0x08,
    Data16 = 0x09,
    Data24 = 0x0A,
    Data32 = 0x0B,
    Data40 = 0x0C,
    Data48 = 0x0D,
    Data56 = 0x0E,
    Data64 = 0x0F,

    Boolean = 0x10,

    // Bitmaps
    Bitmap8 = 0x18,
    Bitmap16 = 0x19,
    Bitmap24 = 0x1A,
    Bitmap32 = 0x1B,
    Bitmap40 = 0x1C,
    Bitmap48 = 0x1D,
    Bitmap56 = 0x1E,
    Bitmap64 = 0x1F,

    // Unsigned integers
    Uint8 = 0x20,
    Uint16 = 0x21,
    Uint24 = 0x22,
    Uint32 = 0x23,
    Uint40 = 0x24,
    Uint48 = 0x25,
    Uint56 = 0x26,
    Uint64 = 0x27,

    // Signed integers
    Int8 = 0x28,
    Int16 = 0x29,
    Int24 = 0x2A,
    Int32 = 0x2B,
    Int40 = 0x2C,
    Int48 = 0x2D,
    Int56 = 0x2E,
    Int64 = 0x2F,

    // Enumerations
    Enum8 = 0x30,
    Enum16 = 0x31,

    // Floating point
    SemiPrecision = 0x38,
    SinglePrecision = 0x39,
    DoublePrecision = 0x3A,

    // Strings
    OctetString = 0x41,
    CharString = 0x42,
    LongOctetString = 0x43,
    LongCharString = 0x44,

    // Collections
    Array = 0x48,
    Structure = 0x4C,
    Set = 0x50,
    Bag = 0x51,

    // Time
    TimeOfDay = 0xE0,
    Date = 0xE1,
    UtcTime = 0xE2,

    // Identifiers
    ClusterId = 0xE8,
    AttributeId = 0xE9,
    BacnetOid = 0xEA,

    // Miscellaneous
    IeeeAddress = 0xF0,
    SecurityKey128 = 0xF1,

    Unknown = 0xFF,
}

impl DataType {
    /// Type code on the wire
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Byte width of values of this type
    pub fn length(self) -> DataLength {
        use DataType::*;

        match self {
            NoData | Unknown => DataLength::Fixed(0),
            Data8 | Boolean | Bitmap8 | Uint8 | Int8 | Enum8 => DataLength::Fixed(1),
            Data16 | Bitmap16 | Uint16 | Int16 | Enum16 | SemiPrecision | ClusterId
            | AttributeId => DataLength::Fixed(2),
            Data24 | Bitmap24 | Uint24 | Int24 => DataLength::Fixed(3),
            Data32 | Bitmap32 | Uint32 | Int32 | SinglePrecision | TimeOfDay | Date | UtcTime
            | BacnetOid => DataLength::Fixed(4),
            Data40 | Bitmap40 | Uint40 | Int40 => DataLength::Fixed(5),
            Data48 | Bitmap48 | Uint48 | Int48 => DataLength::Fixed(6),
            Data56 | Bitmap56 | Uint56 | Int56 => DataLength::Fixed(7),
            Data64 | Bitmap64 | Uint64 | Int64 | DoublePrecision | IeeeAddress => {
                DataLength::Fixed(8)
            }
            SecurityKey128 => DataLength::Fixed(16),
            OctetString | CharString | LongOctetString | LongCharString | Array | Structure
            | Set | Bag => DataLength::Variable,
        }
    }

    /// Check if values of this type come from a finite set
    pub fn is_discrete(self) -> bool {
        is_discrete(self.code())
    }

    /// Check if this is a signed integer type
    pub fn is_signed(self) -> bool {
        (0x28..=0x2F).contains(&self.code())
    }

    /// Get data type name
    pub fn name(self) -> &'static str {
        use DataType::*;

        match self {
            NoData => "NO_DATA",
            Data8 => "DATA8",
            Data16 => "DATA16",
            Data24 => "DATA24",
            Data32 => "DATA32",
            Data40 => "DATA40",
            Data48 => "DATA48",
            Data56 => "DATA56",
            Data64 => "DATA64",
            Boolean => "BOOLEAN",
            Bitmap8 => "BITMAP8",
            Bitmap16 => "BITMAP16",
            Bitmap24 => "BITMAP24",
            Bitmap32 => "BITMAP32",
            Bitmap40 => "BITMAP40",
            Bitmap48 => "BITMAP48",
            Bitmap56 => "BITMAP56",
            Bitmap64 => "BITMAP64",
            Uint8 => "UINT8",
            Uint16 => "UINT16",
            Uint24 => "UINT24",
            Uint32 => "UINT32",
            Uint40 => "UINT40",
            Uint48 => "UINT48",
            Uint56 => "UINT56",
            Uint64 => "UINT64",
            Int8 => "INT8",
            Int16 => "INT16",
            Int24 => "INT24",
            Int32 => "INT32",
            Int40 => "INT40",
            Int48 => "INT48",
            Int56 => "INT56",
            Int64 => "INT64",
            Enum8 => "ENUM8",
            Enum16 => "ENUM16",
            SemiPrecision => "FLOAT2",
            SinglePrecision => "FLOAT4",
            DoublePrecision => "FLOAT8",
            OctetString => "STRING_OCTET",
            CharString => "STRING_CHAR",
            LongOctetString => "STRING_LONG_OCTET",
            LongCharString => "STRING_LONG_CHAR",
            Array => "ARRAY",
            Structure => "STRUCTURE",
            Set => "SET",
            Bag => "BAG",
            TimeOfDay => "TIME_OF_DAY",
            Date => "DATE",
            UtcTime => "UTCTIME",
            ClusterId => "CLUSTER_ID",
            AttributeId => "ATTRIBUTE_ID",
            BacnetOid => "BACNET_OID",
            IeeeAddress => "IEEE_ADDRESS",
            SecurityKey128 => "SECKEY128",
            Unknown => "UNKNOWN",
        }
    }

    /// Pack `value` as hex of exactly this type's width
    pub fn pack(self, value: u64, little_endian: bool) -> Result<String> {
        pack(value, self.code(), little_endian)
    }

    /// Inverse of [`DataType::pack`]
    pub fn unpack(self, text: &str, little_endian: bool) -> Result<u64> {
        unpack(text, self.code(), little_endian)
    }
}

impl From<DataType> for u8 {
    fn from(data_type: DataType) -> u8 {
        data_type as u8
    }
}

impl TryFrom<u8> for DataType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        use DataType::*;

        Ok(match value {
            0x00 => NoData,
            0x08 => Data8,
            0x09 => Data16,
            0x0A => Data24,
            0x0B => Data32,
            0x0C => Data40,
            0x0D => Data48,
            0x0E => Data56,
            0x0F => Data64,
            0x10 => Boolean,
            0x18 => Bitmap8,
            0x19 => Bitmap16,
            0x1A => Bitmap24,
            0x1B => Bitmap32,
            0x1C => Bitmap40,
            0x1D => Bitmap48,
            0x1E => Bitmap56,
            0x1F => Bitmap64,
            0x20 => Uint8,
            0x21 => Uint16,
            0x22 => Uint24,
            0x23 => Uint32,
            0x24 => Uint40,
            0x25 => Uint48,
            0x26 => Uint56,
            0x27 => Uint64,
            0x28 => Int8,
            0x29 => Int16,
            0x2A => Int24,
            0x2B => Int32,
            0x2C => Int40,
            0x2D => Int48,
            0x2E => Int56,
            0x2F => Int64,
            0x30 => Enum8,
            0x31 => Enum16,
            0x38 => SemiPrecision,
            0x39 => SinglePrecision,
            0x3A => DoublePrecision,
            0x41 => OctetString,
            0x42 => CharString,
            0x43 => LongOctetString,
            0x44 => LongCharString,
            0x48 => Array,
            0x4C => Structure,
            0x50 => Set,
            0x51 => Bag,
            0xE0 => TimeOfDay,
            0xE1 => Date,
            0xE2 => UtcTime,
            0xE8 => ClusterId,
            0xE9 => AttributeId,
            0xEA => BacnetOid,
            0xF0 => IeeeAddress,
            0xF1 => SecurityKey128,
            0xFF => Unknown,
            _ => return Err(Error::UnsupportedDataType(value)),
        })
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), self.code())
    }
}

/// Byte width for a type code
///
/// Codes outside the table have zero width.
pub fn length_of(code: u8) -> DataLength {
    DataType::try_from(code).map_or(DataLength::Fixed(0), DataType::length)
}

/// Check if a type code is discrete
///
/// Discrete types (bitmaps, booleans, enumerations, strings, collections,
/// identifiers) have no meaningful "reportable change" threshold.
pub fn is_discrete(code: u8) -> bool {
    matches!(
        code,
        0x08..=0x1F | 0x30..=0x31 | 0x41..=0x44 | 0x48 | 0x4C | 0x50..=0x51 | 0xE8..=0xEA | 0xF0..=0xF1
    )
}

fn fixed_width(code: u8) -> Result<usize> {
    match length_of(code) {
        DataLength::Fixed(width) if width > 0 => Ok(width),
        _ => Err(Error::UnsupportedDataType(code)),
    }
}

/// Pack an unsigned value as hex of exactly the type's width
///
/// # Errors
///
/// - [`Error::UnsupportedDataType`] for zero-width and variable types
/// - [`Error::ValueTooLarge`] if `value` needs more bytes than the type has
///
/// # Examples
///
/// ```
/// use hubwire_zigbee::data_type::{self, DataType};
///
/// assert_eq!(data_type::pack(100, DataType::Uint16.into(), true).unwrap(), "6400");
/// assert_eq!(data_type::pack(100, DataType::Uint16.into(), false).unwrap(), "0064");
/// assert!(data_type::pack(600, DataType::Uint8.into(), false).is_err());
/// ```
pub fn pack(value: u64, code: u8, little_endian: bool) -> Result<String> {
    let width = fixed_width(code)?;
    if hex::byte_len(value) > width {
        return Err(Error::value_too_large(value, width));
    }

    let text = hex::int_to_hex(value, width);
    if little_endian {
        hex::reverse_byte_order(&text)
    } else {
        Ok(text)
    }
}

/// Pack a signed value in two's complement
///
/// Widths above eight bytes are not supported for signed values.
pub fn pack_signed(value: i64, code: u8, little_endian: bool) -> Result<String> {
    let width = fixed_width(code)?;
    if width > 8 {
        return Err(Error::UnsupportedDataType(code));
    }

    let bits = width as u32 * 8;
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << (bits - 1)) - 1;
    let wide = i128::from(value);
    if wide < min || wide > max {
        return Err(Error::value_too_large(value, width));
    }

    let unsigned = (wide & ((1i128 << bits) - 1)) as u64;
    pack(unsigned, code, little_endian)
}

/// Unpack hex of exactly the type's width
///
/// # Errors
///
/// [`Error::MalformedHex`] if `text` is not exactly the type's width in
/// hex digits.
pub fn unpack(text: &str, code: u8, little_endian: bool) -> Result<u64> {
    let width = fixed_width(code)?;
    if text.len() != width * 2 {
        return Err(Error::malformed_hex(text, "length does not match data type width"));
    }

    let ordered = if little_endian {
        hex::reverse_byte_order(text)?
    } else {
        text.to_string()
    };
    hex::bytes_to_int(&hex::hex_to_bytes(&ordered)?)
}

/// Unpack a two's complement value, sign-extending from the type's width
pub fn unpack_signed(text: &str, code: u8, little_endian: bool) -> Result<i64> {
    let width = fixed_width(code)?;
    if width > 8 {
        return Err(Error::UnsupportedDataType(code));
    }

    let raw = unpack(text, code, little_endian)?;
    let shift = 64 - width as u32 * 8;
    Ok(((raw << shift) as i64) >> shift)
}
