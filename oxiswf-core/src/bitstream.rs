//! Bit-precise cursor over an in-memory SWF buffer.
//!
//! SWF packs most structure fields as bit fields of arbitrary width, stored
//! MSB-first: bit index 0 of a byte is its most significant bit, and fields
//! run across byte boundaries. Byte-level values (integers and floats) are
//! little-endian and start on a byte boundary.
//!
//! Every read is all-or-nothing: the capacity check happens before the
//! position moves, so a failed read leaves the cursor where it was.
//!
//! # Example
//!
//! ```
//! use oxiswf_core::bitstream::BitCursor;
//!
//! let data = [0b1011_1000, 0x34, 0x12];
//! let mut cursor = BitCursor::new(&data);
//!
//! assert_eq!(cursor.read_ubits(3).unwrap(), 0b101);
//! assert_eq!(cursor.read_sbits(2).unwrap(), -1);
//! cursor.align();
//! assert_eq!(cursor.read_u16().unwrap(), 0x1234);
//! ```

use crate::error::{ErrorCode, Result, SwfError};

/// Maximum width of a single bit field read.
pub const MAX_BIT_WIDTH: u8 = 32;

/// A cursor that reads bit fields and aligned values from a byte slice.
///
/// The cursor borrows the buffer and owns only its position, so decoding
/// several buffers concurrently needs one cursor per buffer.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the current byte.
    byte_pos: usize,
    /// Bit index within the current byte (0 = MSB).
    bit_pos: u8,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Create a cursor positioned at `byte_offset` within `data`.
    ///
    /// An offset equal to the buffer length yields an exhausted cursor; a
    /// larger one is rejected.
    pub fn at(data: &'a [u8], byte_offset: usize) -> Result<Self> {
        if byte_offset > data.len() {
            return Err(SwfError::invalid_argument(
                "byte_offset",
                format!(
                    "offset {} is beyond the end of a {}-byte buffer",
                    byte_offset,
                    data.len()
                ),
            ));
        }

        Ok(Self {
            data,
            byte_pos: byte_offset,
            bit_pos: 0,
        })
    }

    /// Get the underlying buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Get the index of the current byte.
    pub fn byte_position(&self) -> usize {
        self.byte_pos
    }

    /// Get the bit index within the current byte (0 = most significant).
    pub fn bit_offset(&self) -> u8 {
        self.bit_pos
    }

    /// Get the absolute bit position from the start of the buffer.
    pub fn bit_position(&self) -> u64 {
        self.byte_pos as u64 * 8 + self.bit_pos as u64
    }

    /// Get the absolute bit position the next byte-level read starts at.
    pub fn aligned_bit_position(&self) -> u64 {
        self.aligned_byte_position() as u64 * 8
    }

    /// Check whether the cursor sits on a byte boundary.
    pub fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }

    /// Number of unread bits.
    pub fn bits_left(&self) -> u64 {
        self.data.len() as u64 * 8 - self.bit_position()
    }

    /// Number of whole bytes available from the next byte boundary.
    pub fn bytes_left(&self) -> usize {
        self.data.len().saturating_sub(self.aligned_byte_position())
    }

    /// Check whether at least `count` bits remain.
    pub fn has_bits_left(&self, count: u64) -> bool {
        self.bits_left() >= count
    }

    /// Check whether at least `count` whole bytes remain after alignment.
    pub fn has_bytes_left(&self, count: u64) -> bool {
        self.bytes_left() as u64 >= count
    }

    /// Check whether every bit has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.bits_left() == 0
    }

    fn aligned_byte_position(&self) -> usize {
        if self.bit_pos == 0 {
            self.byte_pos
        } else {
            self.byte_pos + 1
        }
    }

    fn eof(&self, operation: &'static str) -> SwfError {
        SwfError::truncated(ErrorCode::UNCLASSIFIED, self.byte_pos as u64, operation)
    }

    fn check_width(width: u8) -> Result<()> {
        if width > MAX_BIT_WIDTH {
            return Err(SwfError::invalid_argument(
                "width",
                format!("cannot read {} bits at once (max {})", width, MAX_BIT_WIDTH),
            ));
        }
        Ok(())
    }

    /// Assemble `width` bits starting at the current position, MSB-first.
    ///
    /// Capacity must have been checked by the caller.
    fn extract(&self, width: u8) -> u32 {
        let mut value = 0u64;
        let mut byte_pos = self.byte_pos;
        let mut bit_pos = self.bit_pos;
        let mut remaining = width;

        while remaining > 0 {
            let available = 8 - bit_pos;
            let take = remaining.min(available);
            let shift = available - take;
            let mask = ((1u16 << take) - 1) as u8;
            let bits = (self.data[byte_pos] >> shift) & mask;

            value = (value << take) | bits as u64;
            remaining -= take;
            bit_pos += take;
            if bit_pos == 8 {
                bit_pos = 0;
                byte_pos += 1;
            }
        }

        value as u32
    }

    fn advance_bits(&mut self, count: u64) {
        let position = self.bit_position() + count;
        self.byte_pos = (position / 8) as usize;
        self.bit_pos = (position % 8) as u8;
    }

    /// Read an unsigned bit field of `width` bits (0-32).
    ///
    /// A zero width yields 0 and consumes nothing.
    #[inline]
    pub fn read_ubits(&mut self, width: u8) -> Result<u32> {
        let value = self.peek_ubits(width)?;
        self.advance_bits(width as u64);
        Ok(value)
    }

    /// Read a two's-complement signed bit field of `width` bits (0-32).
    ///
    /// The most significant bit of the field is the sign bit.
    #[inline]
    pub fn read_sbits(&mut self, width: u8) -> Result<i32> {
        let raw = self.read_ubits(width)?;
        Ok(sign_extend(raw, width))
    }

    /// Peek at an unsigned bit field without consuming it.
    #[inline]
    pub fn peek_ubits(&self, width: u8) -> Result<u32> {
        Self::check_width(width)?;

        if width == 0 {
            return Ok(0);
        }
        if !self.has_bits_left(width as u64) {
            return Err(self.eof("bit field"));
        }

        Ok(self.extract(width))
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_ubits(1)? != 0)
    }

    /// Skip `count` bits.
    pub fn skip_bits(&mut self, count: u64) -> Result<()> {
        if !self.has_bits_left(count) {
            return Err(self.eof("skipped bits"));
        }
        self.advance_bits(count);
        Ok(())
    }

    /// Align to the next byte boundary by discarding partial bits.
    ///
    /// Does nothing if the cursor is already aligned.
    pub fn align(&mut self) {
        if self.bit_pos != 0 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }
    }

    /// Take `count` bytes starting at the next byte boundary.
    fn take_aligned(&mut self, count: usize, operation: &'static str) -> Result<&'a [u8]> {
        if !self.has_bytes_left(count as u64) {
            return Err(self.eof(operation));
        }

        self.align();
        let bytes = &self.data[self.byte_pos..self.byte_pos + count];
        self.byte_pos += count;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, operation: &'static str) -> Result<[u8; N]> {
        let bytes = self.take_aligned(N, operation)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    /// Read an unsigned 8-bit integer.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>("UI8")?[0])
    }

    /// Read a little-endian unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take_array("UI16")?))
    }

    /// Read a little-endian unsigned 24-bit integer.
    pub fn read_u24(&mut self) -> Result<u32> {
        let [b0, b1, b2] = self.take_array::<3>("UI24")?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// Read a little-endian unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array("UI32")?))
    }

    /// Read a signed 8-bit integer.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take_array::<1>("SI8")?[0] as i8)
    }

    /// Read a little-endian signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take_array("SI16")?))
    }

    /// Read a little-endian signed 24-bit integer.
    pub fn read_i24(&mut self) -> Result<i32> {
        let [b0, b1, b2] = self.take_array::<3>("SI24")?;
        Ok(sign_extend(u32::from_le_bytes([b0, b1, b2, 0]), 24))
    }

    /// Read a little-endian signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array("SI32")?))
    }

    /// Read a little-endian IEEE binary16 value, widened to `f32`.
    pub fn read_f16(&mut self) -> Result<f32> {
        Ok(f16_to_f32(u16::from_le_bytes(self.take_array("FLOAT16")?)))
    }

    /// Read a little-endian IEEE binary32 value.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.take_array("FLOAT")?))
    }

    /// Read a little-endian IEEE binary64 value.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array("DOUBLE")?))
    }

    /// Read `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take_aligned(count, "byte array")
    }

    /// Read a string of exactly `length` bytes.
    pub fn read_string(&mut self, length: usize) -> Result<&'a [u8]> {
        self.take_aligned(length, "string")
    }

    /// Read a zero-terminated string.
    ///
    /// The terminator is consumed but not included in the returned bytes.
    /// A string without a terminator is treated as truncated input.
    pub fn read_cstring(&mut self) -> Result<&'a [u8]> {
        let start = self.aligned_byte_position().min(self.data.len());
        let length = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.eof("string"))?;

        let bytes = self.take_aligned(length + 1, "string")?;
        Ok(&bytes[..length])
    }
}

/// Sign-extend the low `width` bits of `raw`.
#[inline]
pub fn sign_extend(raw: u32, width: u8) -> i32 {
    if width == 0 {
        return 0;
    }
    let shift = 32 - width as u32;
    ((raw << shift) as i32) >> shift
}

/// Convert IEEE binary16 bits to `f32`.
pub fn f16_to_f32(bits: u16) -> f32 {
    let sign = (bits as u32 >> 15) << 31;
    let exponent = (bits as u32 >> 10) & 0x1F;
    let mantissa = bits as u32 & 0x3FF;

    match exponent {
        0 => {
            // Zero or subnormal: mantissa * 2^-24
            let magnitude = mantissa as f32 / 16_777_216.0;
            if sign != 0 { -magnitude } else { magnitude }
        }
        0x1F => f32::from_bits(sign | 0x7F80_0000 | (mantissa << 13)),
        _ => f32::from_bits(sign | ((exponent + 112) << 23) | (mantissa << 13)),
    }
}
