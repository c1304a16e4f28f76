//! `GRADIENT`, `FOCALGRADIENT` and `GRADRECORD` records.

use crate::codes;
use crate::color::Color;
use crate::version::ShapeVersion;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::{parse_fixed8, parse_u8, parse_ubits};
use oxiswf_core::types::{Fixed8, UBits, UInt8};
use oxiswf_core::{BitCursor, FieldPath, Result};
use serde::Serialize;

/// How a gradient fills the area outside its defined range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpreadMode {
    /// Extend the end colours.
    Pad,
    /// Mirror the gradient.
    Reflect,
    /// Repeat the gradient.
    Repeat,
    /// Reserved value 3.
    Reserved,
}

impl SpreadMode {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => Self::Pad,
            1 => Self::Reflect,
            2 => Self::Repeat,
            _ => Self::Reserved,
        }
    }
}

/// Colour space used to interpolate between gradient records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InterpolationMode {
    /// Normal RGB interpolation.
    Normal,
    /// Linear RGB interpolation.
    Linear,
    /// Reserved values 2 and 3.
    Reserved,
}

impl InterpolationMode {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => Self::Normal,
            1 => Self::Linear,
            _ => Self::Reserved,
        }
    }
}

/// A single gradient control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientRecord {
    ratio: UInt8,
    color: Color,
}

impl GradientRecord {
    /// Decode a `GRADRECORD`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let ratio = parse_u8(cursor, codes::GRADIENT, &field.child("Ratio"))?;
        let color = Color::parse(cursor, version, &field.child("Color"))?;
        Ok(Self { ratio, color })
    }

    /// Position of the control point (0-255).
    pub fn ratio(&self) -> UInt8 {
        self.ratio
    }

    /// Colour at the control point.
    pub fn color(&self) -> &Color {
        &self.color
    }
}

impl FileElement for GradientRecord {
    fn bit_position(&self) -> u64 {
        self.ratio.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.ratio, &self.color])
    }
}

/// A decoded `GRADIENT` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    spread_mode: UBits,
    interpolation_mode: UBits,
    num_gradients: UBits,
    records: Vec<GradientRecord>,
}

impl Gradient {
    /// Decode a gradient. The header bit fields start on a byte boundary.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::GRADIENT;
        cursor.align();

        let spread_mode = parse_ubits(cursor, 2, code, &field.child("SpreadMode"))?;
        let interpolation_mode = parse_ubits(cursor, 2, code, &field.child("InterpolationMode"))?;
        let num_gradients = parse_ubits(cursor, 4, code, &field.child("NumGradients"))?;

        let records = (0..num_gradients.value() as usize)
            .map(|i| GradientRecord::parse(cursor, version, &field.indexed("GradientRecords", i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            spread_mode,
            interpolation_mode,
            num_gradients,
            records,
        })
    }

    /// `SpreadMode` field.
    pub fn spread_mode(&self) -> UBits {
        self.spread_mode
    }

    /// `InterpolationMode` field.
    pub fn interpolation_mode(&self) -> UBits {
        self.interpolation_mode
    }

    /// Decoded spread mode.
    pub fn spread(&self) -> SpreadMode {
        SpreadMode::from_bits(self.spread_mode.value())
    }

    /// Decoded interpolation mode.
    pub fn interpolation(&self) -> InterpolationMode {
        InterpolationMode::from_bits(self.interpolation_mode.value())
    }

    /// `NumGradients` field.
    pub fn num_gradients(&self) -> UBits {
        self.num_gradients
    }

    /// Control points in stream order.
    pub fn records(&self) -> &[GradientRecord] {
        &self.records
    }
}

impl FileElement for Gradient {
    fn bit_position(&self) -> u64 {
        self.spread_mode.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.spread_mode,
            &self.interpolation_mode,
            &self.num_gradients,
            &self.records,
        ])
    }
}

/// A decoded `FOCALGRADIENT` record (shape version 4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocalGradient {
    gradient: Gradient,
    focal_point: Fixed8,
}

impl FocalGradient {
    /// Decode a focal gradient.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let gradient = Gradient::parse(cursor, version, field)?;
        let focal_point = parse_fixed8(cursor, codes::GRADIENT, &field.child("FocalPoint"))?;
        Ok(Self {
            gradient,
            focal_point,
        })
    }

    /// The common gradient fields.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Focal point location, -1.0 to 1.0.
    pub fn focal_point(&self) -> Fixed8 {
        self.focal_point
    }
}

impl FileElement for FocalGradient {
    fn bit_position(&self) -> u64 {
        self.gradient.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.gradient, &self.focal_point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_stop_gradient() {
        // Reflect, Linear, 2 records, RGB colours
        let data = [
            0b0101_0010,
            0x00,
            0xFF,
            0x00,
            0x00,
            0xFF,
            0x00,
            0x00,
            0xFF,
        ];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Gradient").unwrap();

        let gradient = Gradient::parse(&mut cursor, ShapeVersion::Shape1, &root).unwrap();

        assert_eq!(gradient.spread(), SpreadMode::Reflect);
        assert_eq!(gradient.interpolation(), InterpolationMode::Linear);
        assert_eq!(gradient.records().len(), 2);
        assert_eq!(gradient.records()[1].ratio().value(), 0xFF);
        assert_eq!(gradient.bit_length(), 8 + 2 * 32);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_focal_gradient() {
        let data = [0x00, 0x80, 0xFF];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Gradient").unwrap();

        let gradient = FocalGradient::parse(&mut cursor, ShapeVersion::Shape4, &root).unwrap();

        assert_eq!(gradient.focal_point().value(), -0.5);
        assert_eq!(gradient.bit_length(), 24);
    }

    #[test]
    fn test_truncated_record() {
        let data = [0x01, 0x00, 0x10];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Gradient").unwrap();

        let err = Gradient::parse(&mut cursor, ShapeVersion::Shape3, &root).unwrap_err();
        assert_eq!(err.field(), Some("Gradient::GradientRecords[0]::Color::Green"));
    }
}
