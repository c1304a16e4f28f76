//! Primitive decoders and conditional helpers.
//!
//! Each `parse_*` function checks capacity first and fails with a
//! [`SwfError::Truncated`] carrying the call site's [`ErrorCode`] and field
//! path, then reads through the [`BitCursor`] and wraps the raw value with
//! the position it was read from.
//!
//! # Example
//!
//! ```
//! use oxiswf_core::bitstream::BitCursor;
//! use oxiswf_core::error::ErrorCode;
//! use oxiswf_core::parse::{parse_flag, parse_ubits_if};
//! use oxiswf_core::path::FieldPath;
//!
//! let data = [0b0110_0000];
//! let mut cursor = BitCursor::new(&data);
//! let root = FieldPath::root("Example").unwrap();
//! let code = ErrorCode(6);
//!
//! let has_width = parse_flag(&mut cursor, code, &root.child("HasWidth")).unwrap();
//! let width = parse_ubits_if(&mut cursor, has_width, 5, code, &root.child("Width")).unwrap();
//!
//! assert!(!has_width.value());
//! assert!(width.is_none());
//! assert_eq!(cursor.bit_position(), 1);
//! ```

use crate::bitstream::{BitCursor, MAX_BIT_WIDTH};
use crate::error::{ErrorCode, Result, SwfError};
use crate::path::FieldPath;
use crate::types::{
    ByteArray, Fixed8, Flag, Float16, Float32, Float64, FloatFBits, Int8, Int16, Int24, Int32,
    SBits, SwfString, UBits, UInt8, UInt16, UInt24, UInt32,
};

fn truncated(cursor: &BitCursor<'_>, code: ErrorCode, field: &FieldPath<'_>) -> SwfError {
    SwfError::truncated(code, cursor.byte_position() as u64, field.to_string())
}

fn ensure_bits(
    cursor: &BitCursor<'_>,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<()> {
    if width > MAX_BIT_WIDTH {
        return Err(SwfError::invalid_argument(
            "width",
            format!(
                "{} requested {} bits (max {})",
                field, width, MAX_BIT_WIDTH
            ),
        ));
    }
    if !cursor.has_bits_left(width as u64) {
        return Err(truncated(cursor, code, field));
    }
    Ok(())
}

fn ensure_bytes(
    cursor: &BitCursor<'_>,
    count: usize,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<()> {
    if !cursor.has_bytes_left(count as u64) {
        return Err(truncated(cursor, code, field));
    }
    Ok(())
}

/// Decode an unsigned bit field of `width` bits.
pub fn parse_ubits(
    cursor: &mut BitCursor<'_>,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<UBits> {
    ensure_bits(cursor, width, code, field)?;
    let position = cursor.bit_position();
    let value = cursor.read_ubits(width)?;
    Ok(UBits::new(value, width, position))
}

/// Decode a signed bit field of `width` bits.
pub fn parse_sbits(
    cursor: &mut BitCursor<'_>,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<SBits> {
    ensure_bits(cursor, width, code, field)?;
    let position = cursor.bit_position();
    let value = cursor.read_sbits(width)?;
    Ok(SBits::new(value, width, position))
}

/// Decode a single-bit flag.
pub fn parse_flag(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Flag> {
    ensure_bits(cursor, 1, code, field)?;
    let position = cursor.bit_position();
    let value = cursor.read_bit()?;
    Ok(Flag::new(value, position))
}

/// Decode a 16.16 fixed-point value stored as a signed bit field.
pub fn parse_fbits(
    cursor: &mut BitCursor<'_>,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<FloatFBits> {
    ensure_bits(cursor, width, code, field)?;
    let position = cursor.bit_position();
    let raw = cursor.read_sbits(width)?;
    Ok(FloatFBits::from_raw(raw, width, position))
}

/// Decode an unsigned 8-bit integer.
pub fn parse_u8(cursor: &mut BitCursor<'_>, code: ErrorCode, field: &FieldPath<'_>) -> Result<UInt8> {
    ensure_bytes(cursor, 1, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(UInt8::new(cursor.read_u8()?, 1, position))
}

/// Decode a little-endian unsigned 16-bit integer.
pub fn parse_u16(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<UInt16> {
    ensure_bytes(cursor, 2, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(UInt16::new(cursor.read_u16()?, 2, position))
}

/// Decode a little-endian unsigned 24-bit integer.
pub fn parse_u24(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<UInt24> {
    ensure_bytes(cursor, 3, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(UInt24::new(cursor.read_u24()?, 3, position))
}

/// Decode a little-endian unsigned 32-bit integer.
pub fn parse_u32(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<UInt32> {
    ensure_bytes(cursor, 4, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(UInt32::new(cursor.read_u32()?, 4, position))
}

/// Decode a signed 8-bit integer.
pub fn parse_i8(cursor: &mut BitCursor<'_>, code: ErrorCode, field: &FieldPath<'_>) -> Result<Int8> {
    ensure_bytes(cursor, 1, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Int8::new(cursor.read_i8()?, 1, position))
}

/// Decode a little-endian signed 16-bit integer.
pub fn parse_i16(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Int16> {
    ensure_bytes(cursor, 2, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Int16::new(cursor.read_i16()?, 2, position))
}

/// Decode a little-endian signed 24-bit integer.
pub fn parse_i24(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Int24> {
    ensure_bytes(cursor, 3, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Int24::new(cursor.read_i24()?, 3, position))
}

/// Decode a little-endian signed 32-bit integer.
pub fn parse_i32(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Int32> {
    ensure_bytes(cursor, 4, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Int32::new(cursor.read_i32()?, 4, position))
}

/// Decode an IEEE binary16 value.
pub fn parse_f16(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Float16> {
    ensure_bytes(cursor, 2, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Float16::new(cursor.read_f16()?, 2, position))
}

/// Decode an IEEE binary32 value.
pub fn parse_f32(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Float32> {
    ensure_bytes(cursor, 4, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Float32::new(cursor.read_f32()?, 4, position))
}

/// Decode an IEEE binary64 value.
pub fn parse_f64(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Float64> {
    ensure_bytes(cursor, 8, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Float64::new(cursor.read_f64()?, 8, position))
}

/// Decode a signed 8.8 fixed-point value.
pub fn parse_fixed8(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Fixed8> {
    ensure_bytes(cursor, 2, code, field)?;
    let position = cursor.aligned_bit_position();
    Ok(Fixed8::from_raw(cursor.read_i16()?, position))
}

/// Decode `length` raw bytes.
pub fn parse_byte_array(
    cursor: &mut BitCursor<'_>,
    length: usize,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<ByteArray> {
    ensure_bytes(cursor, length, code, field)?;
    let position = cursor.aligned_bit_position();
    let bytes = cursor.read_bytes(length)?;
    Ok(ByteArray::new(bytes.to_vec(), position))
}

/// Decode a string of exactly `length` bytes.
pub fn parse_string(
    cursor: &mut BitCursor<'_>,
    length: usize,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<SwfString> {
    ensure_bytes(cursor, length, code, field)?;
    let position = cursor.aligned_bit_position();
    let bytes = cursor.read_string(length)?;
    Ok(SwfString::fixed(bytes.to_vec(), position))
}

/// Decode a zero-terminated string.
///
/// A string that runs to the end of the buffer without a terminator is
/// truncated input.
pub fn parse_cstring(
    cursor: &mut BitCursor<'_>,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<SwfString> {
    let position = cursor.aligned_bit_position();
    match cursor.read_cstring() {
        Ok(bytes) => Ok(SwfString::terminated(bytes.to_vec(), position)),
        Err(SwfError::Truncated { .. }) => Err(truncated(cursor, code, field)),
        Err(e) => Err(e),
    }
}

/// A condition that decides whether an optional field is present.
pub trait Gate {
    /// Whether the gated field should be decoded.
    fn is_open(&self) -> bool;
}

impl Gate for bool {
    fn is_open(&self) -> bool {
        *self
    }
}

impl Gate for Flag {
    fn is_open(&self) -> bool {
        self.value()
    }
}

/// An absent gate is closed.
impl<G: Gate> Gate for Option<G> {
    fn is_open(&self) -> bool {
        self.as_ref().is_some_and(Gate::is_open)
    }
}

impl<G: Gate + ?Sized> Gate for &G {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Run `decode` only when `gate` is open.
///
/// A closed gate consumes nothing and yields `None`.
pub fn parse_if<G, T, F>(gate: G, decode: F) -> Result<Option<T>>
where
    G: Gate,
    F: FnOnce() -> Result<T>,
{
    if gate.is_open() {
        decode().map(Some)
    } else {
        Ok(None)
    }
}

/// Decode an unsigned bit field when `gate` is open.
pub fn parse_ubits_if(
    cursor: &mut BitCursor<'_>,
    gate: impl Gate,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Option<UBits>> {
    parse_if(gate, || parse_ubits(cursor, width, code, field))
}

/// Decode a signed bit field when `gate` is open.
pub fn parse_sbits_if(
    cursor: &mut BitCursor<'_>,
    gate: impl Gate,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Option<SBits>> {
    parse_if(gate, || parse_sbits(cursor, width, code, field))
}

/// Decode a fixed-point bit field when `gate` is open.
pub fn parse_fbits_if(
    cursor: &mut BitCursor<'_>,
    gate: impl Gate,
    width: u8,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Option<FloatFBits>> {
    parse_if(gate, || parse_fbits(cursor, width, code, field))
}

/// Decode a flag when `gate` is open.
pub fn parse_flag_if(
    cursor: &mut BitCursor<'_>,
    gate: impl Gate,
    code: ErrorCode,
    field: &FieldPath<'_>,
) -> Result<Option<Flag>> {
    parse_if(gate, || parse_flag(cursor, code, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::FileElement;

    const CODE: ErrorCode = ErrorCode(6);

    #[test]
    fn test_parse_records_position() {
        let data = [0b1010_0000, 0x34, 0x12];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Test").unwrap();

        let a = parse_ubits(&mut cursor, 3, CODE, &root.child("A")).unwrap();
        assert_eq!(a.value(), 0b101);
        assert_eq!(a.bit_position(), 0);
        assert_eq!(a.bit_length(), 3);

        let b = parse_u16(&mut cursor, CODE, &root.child("B")).unwrap();
        assert_eq!(b.value(), 0x1234);
        assert_eq!(b.bit_position(), 8);
        assert_eq!(b.bit_length(), 16);
    }

    #[test]
    fn test_truncated_carries_code_and_path() {
        let data = [0xFF];
        let mut cursor = BitCursor::new(&data);
        cursor.read_ubits(4).unwrap();
        let root = FieldPath::root("Matrix").unwrap();

        let err = parse_sbits(&mut cursor, 5, CODE, &root.child("TranslateX")).unwrap_err();
        assert_eq!(
            err,
            SwfError::truncated(CODE, 0, "Matrix::TranslateX")
        );
        assert_eq!(cursor.bit_position(), 4);
    }

    #[test]
    fn test_width_over_limit_is_invalid_argument() {
        let data = [0u8; 8];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Test").unwrap();

        let err = parse_ubits(&mut cursor, 33, CODE, &root).unwrap_err();
        assert!(matches!(err, SwfError::InvalidArgument { argument: "width", .. }));
    }

    #[test]
    fn test_gate_closed_consumes_nothing() {
        let data = [0xFF];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Test").unwrap();

        let value = parse_sbits_if(&mut cursor, false, 8, CODE, &root).unwrap();
        assert!(value.is_none());
        assert_eq!(cursor.bit_position(), 0);

        let flag = Flag::new(true, 0);
        let value = parse_sbits_if(&mut cursor, flag, 8, CODE, &root).unwrap();
        assert_eq!(value.map(|v| v.value()), Some(-1));
    }

    #[test]
    fn test_zero_width_is_present() {
        let data: [u8; 0] = [];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Test").unwrap();

        let value = parse_ubits_if(&mut cursor, true, 0, CODE, &root).unwrap();
        assert_eq!(value.map(|v| v.bit_length()), Some(0));
    }

    #[test]
    fn test_option_gate() {
        let absent: Option<Flag> = None;
        assert!(!absent.is_open());
        assert!(Some(Flag::new(true, 3)).is_open());
        assert!(!Some(false).is_open());
    }

    #[test]
    fn test_cstring_without_terminator() {
        let data = *b"abc";
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Name").unwrap();

        let err = parse_cstring(&mut cursor, CODE, &root).unwrap_err();
        assert_eq!(err.field(), Some("Name"));
        assert_eq!(err.code(), Some(CODE));
        assert_eq!(cursor.byte_position(), 0);
    }

    #[test]
    fn test_fixed8() {
        let data = [0x80, 0x01];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("FocalPoint").unwrap();

        let value = parse_fixed8(&mut cursor, CODE, &root).unwrap();
        assert_eq!(value.value(), 1.5);
    }
}
