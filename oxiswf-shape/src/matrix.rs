//! `MATRIX` records.
//!
//! A matrix is a 2D affine transform. Scale and rotate/skew are each
//! optional and carry their own 5-bit width; translation is always present.
//! The record is byte-aligned on exit.

use crate::codes;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::{Gate, parse_fbits_if, parse_flag, parse_sbits, parse_ubits, parse_ubits_if};
use oxiswf_core::types::{Flag, FloatFBits, SBits, UBits};
use oxiswf_core::{BitCursor, FieldPath, Result};
use serde::Serialize;

/// A decoded `MATRIX` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    has_scale: Flag,
    n_scale_bits: Option<UBits>,
    scale_x: Option<FloatFBits>,
    scale_y: Option<FloatFBits>,
    has_rotate: Flag,
    n_rotate_bits: Option<UBits>,
    rotate_skew0: Option<FloatFBits>,
    rotate_skew1: Option<FloatFBits>,
    n_translate_bits: UBits,
    translate_x: SBits,
    translate_y: SBits,
}

/// Width carried by an optional `UB[5]` width field, 0 when absent.
fn width_of(bits: Option<UBits>) -> u8 {
    bits.map_or(0, |b| b.value() as u8)
}

impl Matrix {
    /// Decode a matrix at the cursor.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let code = codes::MATRIX;

        let has_scale = parse_flag(cursor, code, &field.child("HasScale"))?;
        let n_scale_bits = parse_ubits_if(cursor, has_scale, 5, code, &field.child("NScaleBits"))?;
        let scale_bits = width_of(n_scale_bits);
        let scale_x = parse_fbits_if(cursor, has_scale, scale_bits, code, &field.child("ScaleX"))?;
        let scale_y = parse_fbits_if(cursor, has_scale, scale_bits, code, &field.child("ScaleY"))?;

        let has_rotate = parse_flag(cursor, code, &field.child("HasRotate"))?;
        let n_rotate_bits =
            parse_ubits_if(cursor, has_rotate, 5, code, &field.child("NRotateBits"))?;
        let rotate_bits = width_of(n_rotate_bits);
        let rotate_skew0 =
            parse_fbits_if(cursor, has_rotate, rotate_bits, code, &field.child("RotateSkew0"))?;
        let rotate_skew1 =
            parse_fbits_if(cursor, has_rotate, rotate_bits, code, &field.child("RotateSkew1"))?;

        let n_translate_bits = parse_ubits(cursor, 5, code, &field.child("NTranslateBits"))?;
        let translate_bits = n_translate_bits.value() as u8;
        let translate_x = parse_sbits(cursor, translate_bits, code, &field.child("TranslateX"))?;
        let translate_y = parse_sbits(cursor, translate_bits, code, &field.child("TranslateY"))?;

        cursor.align();

        Ok(Self {
            has_scale,
            n_scale_bits,
            scale_x,
            scale_y,
            has_rotate,
            n_rotate_bits,
            rotate_skew0,
            rotate_skew1,
            n_translate_bits,
            translate_x,
            translate_y,
        })
    }

    /// Decode a matrix only when `gate` is open.
    pub fn parse_if(
        cursor: &mut BitCursor<'_>,
        gate: impl Gate,
        field: &FieldPath<'_>,
    ) -> Result<Option<Self>> {
        if gate.is_open() {
            Self::parse(cursor, field).map(Some)
        } else {
            Ok(None)
        }
    }

    /// `HasScale` flag.
    pub fn has_scale(&self) -> Flag {
        self.has_scale
    }

    /// `NScaleBits`, present when scaled.
    pub fn n_scale_bits(&self) -> Option<UBits> {
        self.n_scale_bits
    }

    /// `ScaleX`, present when scaled.
    pub fn scale_x(&self) -> Option<FloatFBits> {
        self.scale_x
    }

    /// `ScaleY`, present when scaled.
    pub fn scale_y(&self) -> Option<FloatFBits> {
        self.scale_y
    }

    /// `HasRotate` flag.
    pub fn has_rotate(&self) -> Flag {
        self.has_rotate
    }

    /// `NRotateBits`, present when rotated.
    pub fn n_rotate_bits(&self) -> Option<UBits> {
        self.n_rotate_bits
    }

    /// `RotateSkew0`, present when rotated.
    pub fn rotate_skew0(&self) -> Option<FloatFBits> {
        self.rotate_skew0
    }

    /// `RotateSkew1`, present when rotated.
    pub fn rotate_skew1(&self) -> Option<FloatFBits> {
        self.rotate_skew1
    }

    /// `NTranslateBits`.
    pub fn n_translate_bits(&self) -> UBits {
        self.n_translate_bits
    }

    /// `TranslateX` in twips.
    pub fn translate_x(&self) -> SBits {
        self.translate_x
    }

    /// `TranslateY` in twips.
    pub fn translate_y(&self) -> SBits {
        self.translate_y
    }

    /// Effective `(a, b, c, d, tx, ty)` coefficients, with identity defaults
    /// for absent components.
    pub fn coefficients(&self) -> [f64; 6] {
        let value = |v: Option<FloatFBits>, default: f64| v.map_or(default, |v| v.value());
        [
            value(self.scale_x, 1.0),
            value(self.rotate_skew0, 0.0),
            value(self.rotate_skew1, 0.0),
            value(self.scale_y, 1.0),
            self.translate_x.value() as f64,
            self.translate_y.value() as f64,
        ]
    }
}

impl FileElement for Matrix {
    fn bit_position(&self) -> u64 {
        self.has_scale.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.has_scale,
            &self.n_scale_bits,
            &self.scale_x,
            &self.scale_y,
            &self.has_rotate,
            &self.n_rotate_bits,
            &self.rotate_skew0,
            &self.rotate_skew1,
            &self.n_translate_bits,
            &self.translate_x,
            &self.translate_y,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_only() {
        // HasScale=0 HasRotate=0 NTranslateBits=00011 TranslateX=011 TranslateY=101
        let data = [0b0000_0110, 0b1110_1000];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Matrix").unwrap();

        let matrix = Matrix::parse(&mut cursor, &root).unwrap();

        assert!(matrix.scale_x().is_none());
        assert!(matrix.rotate_skew0().is_none());
        assert_eq!(matrix.translate_x().value(), 3);
        assert_eq!(matrix.translate_y().value(), -3);
        assert_eq!(matrix.bit_length(), 13);
        assert_eq!(cursor.bit_position(), 16);
        assert_eq!(matrix.coefficients(), [1.0, 0.0, 0.0, 1.0, 3.0, -3.0]);
    }

    #[test]
    fn test_parse_if_closed() {
        let data = [0xFF];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Matrix").unwrap();

        assert!(Matrix::parse_if(&mut cursor, false, &root).unwrap().is_none());
        assert_eq!(cursor.bit_position(), 0);
    }

    #[test]
    fn test_truncated_translation_names_field() {
        // NTranslateBits = 31 but only a few bits follow
        let data = [0b0011_1110];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Matrix").unwrap();

        let err = Matrix::parse(&mut cursor, &root).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.field(), Some("Matrix::TranslateX"));
        assert_eq!(err.code(), Some(codes::MATRIX));
    }
}
