//! Primitive SWF value types.
//!
//! Every type here is a [`FileElement`]: besides its value it records the
//! bit position it was read from and how many bits it occupies.

use crate::element::FileElement;
use encoding_rs::Encoding;
use serde::Serialize;
use std::borrow::Cow;

/// Unsigned bit field (`UB[n]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UBits {
    value: u32,
    width: u8,
    position: u64,
}

impl UBits {
    /// Create a bit field value.
    pub fn new(value: u32, width: u8, position: u64) -> Self {
        Self {
            value,
            width,
            position,
        }
    }

    /// Decoded value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Width of the field in bits.
    pub fn width(&self) -> u8 {
        self.width
    }
}

impl FileElement for UBits {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.width as u64
    }
}

/// Signed bit field (`SB[n]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SBits {
    value: i32,
    width: u8,
    position: u64,
}

impl SBits {
    /// Create a signed bit field value.
    pub fn new(value: i32, width: u8, position: u64) -> Self {
        Self {
            value,
            width,
            position,
        }
    }

    /// Decoded value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Width of the field in bits.
    pub fn width(&self) -> u8 {
        self.width
    }
}

impl FileElement for SBits {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.width as u64
    }
}

/// Single-bit flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    value: bool,
    position: u64,
}

impl Flag {
    /// Create a flag value.
    pub fn new(value: bool, position: u64) -> Self {
        Self { value, position }
    }

    /// Whether the flag is set.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl FileElement for Flag {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        1
    }
}

/// Fixed-point fractional bit field (`FB[n]`), 16.16 format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatFBits {
    value: f64,
    raw: i32,
    width: u8,
    position: u64,
}

impl FloatFBits {
    /// Create a fixed-point value from the raw signed field.
    pub fn from_raw(raw: i32, width: u8, position: u64) -> Self {
        Self {
            value: raw as f64 / 65536.0,
            raw,
            width,
            position,
        }
    }

    /// Decoded value (raw / 65536).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Raw signed field as read from the stream.
    pub fn raw(&self) -> i32 {
        self.raw
    }

    /// Width of the field in bits.
    pub fn width(&self) -> u8 {
        self.width
    }
}

impl FileElement for FloatFBits {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.width as u64
    }
}

/// Byte-aligned little-endian integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Integer<T> {
    value: T,
    byte_length: u8,
    position: u64,
}

impl<T: Copy> Integer<T> {
    /// Create an integer value occupying `byte_length` bytes.
    pub fn new(value: T, byte_length: u8, position: u64) -> Self {
        Self {
            value,
            byte_length,
            position,
        }
    }

    /// Decoded value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Number of bytes the integer occupies.
    pub fn byte_length(&self) -> u8 {
        self.byte_length
    }
}

impl<T> FileElement for Integer<T> {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.byte_length as u64 * 8
    }
}

/// Unsigned 8-bit integer (`UI8`).
pub type UInt8 = Integer<u8>;
/// Unsigned 16-bit integer (`UI16`).
pub type UInt16 = Integer<u16>;
/// Unsigned 24-bit integer (`UI24`).
pub type UInt24 = Integer<u32>;
/// Unsigned 32-bit integer (`UI32`).
pub type UInt32 = Integer<u32>;
/// Signed 8-bit integer (`SI8`).
pub type Int8 = Integer<i8>;
/// Signed 16-bit integer (`SI16`).
pub type Int16 = Integer<i16>;
/// Signed 24-bit integer (`SI24`).
pub type Int24 = Integer<i32>;
/// Signed 32-bit integer (`SI32`).
pub type Int32 = Integer<i32>;

/// Byte-aligned IEEE floating point value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Float<T> {
    value: T,
    byte_length: u8,
    position: u64,
}

impl<T: Copy> Float<T> {
    /// Create a float value occupying `byte_length` bytes.
    pub fn new(value: T, byte_length: u8, position: u64) -> Self {
        Self {
            value,
            byte_length,
            position,
        }
    }

    /// Decoded value.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> FileElement for Float<T> {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.byte_length as u64 * 8
    }
}

/// Half precision float (`FLOAT16`), widened to `f32`.
pub type Float16 = Float<f32>;
/// Single precision float (`FLOAT`).
pub type Float32 = Float<f32>;
/// Double precision float (`DOUBLE`).
pub type Float64 = Float<f64>;

/// Signed 8.8 fixed-point value (`FIXED8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fixed8 {
    raw: i16,
    position: u64,
}

impl Fixed8 {
    /// Create a fixed-point value from its raw 16-bit representation.
    pub fn from_raw(raw: i16, position: u64) -> Self {
        Self { raw, position }
    }

    /// Decoded value (raw / 256).
    pub fn value(&self) -> f32 {
        self.raw as f32 / 256.0
    }

    /// Raw 16-bit representation.
    pub fn raw(&self) -> i16 {
        self.raw
    }
}

impl FileElement for Fixed8 {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        16
    }
}

/// Fixed-length run of raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteArray {
    bytes: Vec<u8>,
    position: u64,
}

impl ByteArray {
    /// Create a byte array value.
    pub fn new(bytes: Vec<u8>, position: u64) -> Self {
        Self { bytes, position }
    }

    /// The bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl FileElement for ByteArray {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }
}

/// Text string (`STRING`), either fixed-length or zero-terminated.
///
/// Bytes are kept as read; a terminator counts toward the bit length but is
/// not part of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwfString {
    bytes: Vec<u8>,
    terminated: bool,
    position: u64,
}

impl SwfString {
    /// Create a fixed-length string value.
    pub fn fixed(bytes: Vec<u8>, position: u64) -> Self {
        Self {
            bytes,
            terminated: false,
            position,
        }
    }

    /// Create a zero-terminated string value (terminator excluded from `bytes`).
    pub fn terminated(bytes: Vec<u8>, position: u64) -> Self {
        Self {
            bytes,
            terminated: true,
            position,
        }
    }

    /// Raw bytes of the string.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the string was read up to a zero terminator.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Decode as UTF-8 (SWF 6 and later), replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Decode with a legacy encoding (SWF 5 and earlier store locale text).
    pub fn decode(&self, encoding: &'static Encoding) -> Cow<'_, str> {
        let (text, _, _) = encoding.decode(&self.bytes);
        text
    }
}

impl FileElement for SwfString {
    fn bit_position(&self) -> u64 {
        self.position
    }

    fn bit_length(&self) -> u64 {
        (self.bytes.len() as u64 + self.terminated as u64) * 8
    }
}
