//! `FILLSTYLE` and `FILLSTYLEARRAY` records.

use crate::codes;
use crate::color::Color;
use crate::gradient::{FocalGradient, Gradient};
use crate::matrix::Matrix;
use crate::version::ShapeVersion;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::{parse_if, parse_u8, parse_u16};
use oxiswf_core::types::{UInt8, UInt16};
use oxiswf_core::{BitCursor, FieldPath, Result, SwfError};
use serde::Serialize;

/// The fill style type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FillStyleType {
    /// `0x00`
    Solid,
    /// `0x10`
    LinearGradient,
    /// `0x12`
    RadialGradient,
    /// `0x13`, shape version 4 only.
    FocalRadialGradient,
    /// `0x40`
    RepeatingBitmap,
    /// `0x41`
    ClippedBitmap,
    /// `0x42`
    NonSmoothedRepeatingBitmap,
    /// `0x43`
    NonSmoothedClippedBitmap,
}

impl FillStyleType {
    /// Classify a type byte; unknown values yield `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Solid),
            0x10 => Some(Self::LinearGradient),
            0x12 => Some(Self::RadialGradient),
            0x13 => Some(Self::FocalRadialGradient),
            0x40 => Some(Self::RepeatingBitmap),
            0x41 => Some(Self::ClippedBitmap),
            0x42 => Some(Self::NonSmoothedRepeatingBitmap),
            0x43 => Some(Self::NonSmoothedClippedBitmap),
            _ => None,
        }
    }

    /// The type byte.
    pub fn byte(self) -> u8 {
        match self {
            Self::Solid => 0x00,
            Self::LinearGradient => 0x10,
            Self::RadialGradient => 0x12,
            Self::FocalRadialGradient => 0x13,
            Self::RepeatingBitmap => 0x40,
            Self::ClippedBitmap => 0x41,
            Self::NonSmoothedRepeatingBitmap => 0x42,
            Self::NonSmoothedClippedBitmap => 0x43,
        }
    }
}

/// Type-specific payload of a fill style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FillStyleKind {
    /// Solid colour fill.
    Solid {
        /// Fill colour.
        color: Color,
    },
    /// Linear or radial gradient fill.
    Gradient {
        /// Gradient transform.
        matrix: Matrix,
        /// Gradient definition.
        gradient: Gradient,
    },
    /// Focal radial gradient fill.
    FocalGradient {
        /// Gradient transform.
        matrix: Matrix,
        /// Gradient definition.
        gradient: FocalGradient,
    },
    /// Bitmap fill.
    Bitmap {
        /// Character id of the bitmap.
        bitmap_id: UInt16,
        /// Bitmap transform.
        matrix: Matrix,
    },
}

impl FileElement for FillStyleKind {
    fn bit_position(&self) -> u64 {
        match self {
            Self::Solid { color } => color.bit_position(),
            Self::Gradient { matrix, .. } | Self::FocalGradient { matrix, .. } => {
                matrix.bit_position()
            }
            Self::Bitmap { bitmap_id, .. } => bitmap_id.bit_position(),
        }
    }

    fn bit_length(&self) -> u64 {
        match self {
            Self::Solid { color } => color.bit_length(),
            Self::Gradient { matrix, gradient } => add_bit_lengths(&[matrix, gradient]),
            Self::FocalGradient { matrix, gradient } => add_bit_lengths(&[matrix, gradient]),
            Self::Bitmap { bitmap_id, matrix } => add_bit_lengths(&[bitmap_id, matrix]),
        }
    }
}

/// A decoded `FILLSTYLE` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillStyle {
    fill_style_type: UInt8,
    style_type: FillStyleType,
    kind: FillStyleKind,
}

impl FillStyle {
    /// Decode a fill style.
    ///
    /// An unknown type byte, or a focal gradient before shape version 4, is
    /// a malformed structure.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::FILL_STYLE;
        let type_field = field.child("FillStyleType");
        let fill_style_type = parse_u8(cursor, code, &type_field)?;
        let type_offset = fill_style_type.bit_position() / 8;

        let style_type = FillStyleType::from_byte(fill_style_type.value()).ok_or_else(|| {
            SwfError::malformed(
                code,
                type_offset,
                type_field.to_string(),
                format!("unknown fill style type {:#04X}", fill_style_type.value()),
            )
        })?;

        let kind = match style_type {
            FillStyleType::Solid => FillStyleKind::Solid {
                color: Color::parse(cursor, version, &field.child("Color"))?,
            },
            FillStyleType::LinearGradient | FillStyleType::RadialGradient => {
                let matrix = Matrix::parse(cursor, &field.child("GradientMatrix"))?;
                let gradient = Gradient::parse(cursor, version, &field.child("Gradient"))?;
                FillStyleKind::Gradient { matrix, gradient }
            }
            FillStyleType::FocalRadialGradient => {
                if !version.supports_focal_gradients() {
                    return Err(SwfError::malformed(
                        code,
                        type_offset,
                        type_field.to_string(),
                        format!("focal radial gradient fill in {}", version),
                    ));
                }
                let matrix = Matrix::parse(cursor, &field.child("GradientMatrix"))?;
                let gradient = FocalGradient::parse(cursor, version, &field.child("Gradient"))?;
                FillStyleKind::FocalGradient { matrix, gradient }
            }
            FillStyleType::RepeatingBitmap
            | FillStyleType::ClippedBitmap
            | FillStyleType::NonSmoothedRepeatingBitmap
            | FillStyleType::NonSmoothedClippedBitmap => {
                let bitmap_id = parse_u16(cursor, code, &field.child("BitmapId"))?;
                let matrix = Matrix::parse(cursor, &field.child("BitmapMatrix"))?;
                FillStyleKind::Bitmap { bitmap_id, matrix }
            }
        };

        Ok(Self {
            fill_style_type,
            style_type,
            kind,
        })
    }

    /// The raw `FillStyleType` byte.
    pub fn fill_style_type(&self) -> UInt8 {
        self.fill_style_type
    }

    /// The classified fill type.
    pub fn style_type(&self) -> FillStyleType {
        self.style_type
    }

    /// Type-specific payload.
    pub fn kind(&self) -> &FillStyleKind {
        &self.kind
    }
}

impl FileElement for FillStyle {
    fn bit_position(&self) -> u64 {
        self.fill_style_type.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.fill_style_type, &self.kind])
    }
}

/// A decoded `FILLSTYLEARRAY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillStyleArray {
    count: UInt8,
    count_extended: Option<UInt16>,
    styles: Vec<FillStyle>,
}

impl FillStyleArray {
    /// Decode a fill style array.
    ///
    /// A count byte of `0xFF` is followed by the real count as a `UI16`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::FILL_STYLE;
        let count = parse_u8(cursor, code, &field.child("FillStyleCount"))?;
        let count_extended = parse_if(count.value() == 0xFF, || {
            parse_u16(cursor, code, &field.child("FillStyleCountExtended"))
        })?;

        let total = count_extended.map_or(count.value() as usize, |c| c.value() as usize);
        let styles = (0..total)
            .map(|i| FillStyle::parse(cursor, version, &field.indexed("FillStyles", i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            count,
            count_extended,
            styles,
        })
    }

    /// `FillStyleCount` byte.
    pub fn count(&self) -> UInt8 {
        self.count
    }

    /// `FillStyleCountExtended`, present when the count byte is `0xFF`.
    pub fn count_extended(&self) -> Option<UInt16> {
        self.count_extended
    }

    /// The fill styles.
    pub fn styles(&self) -> &[FillStyle] {
        &self.styles
    }

    /// Number of fill styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FileElement for FillStyleArray {
    fn bit_position(&self) -> u64 {
        self.count.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.count, &self.count_extended, &self.styles])
    }
}
