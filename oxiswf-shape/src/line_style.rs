//! `LINESTYLE`, `LINESTYLE2` and `LINESTYLEARRAY` records.

use crate::codes;
use crate::color::Color;
use crate::fill_style::FillStyle;
use crate::version::ShapeVersion;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::{parse_fixed8, parse_flag, parse_if, parse_u8, parse_u16, parse_ubits};
use oxiswf_core::types::{Fixed8, Flag, UBits, UInt8, UInt16};
use oxiswf_core::{BitCursor, FieldPath, Result};
use serde::Serialize;

/// Line cap style of a `LINESTYLE2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CapStyle {
    /// Round cap.
    Round,
    /// No cap.
    None,
    /// Square cap.
    Square,
    /// Reserved value 3.
    Reserved,
}

impl CapStyle {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => Self::Round,
            1 => Self::None,
            2 => Self::Square,
            _ => Self::Reserved,
        }
    }
}

/// Line join style of a `LINESTYLE2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinStyle {
    /// Round join.
    Round,
    /// Bevel join.
    Bevel,
    /// Miter join; the style carries a miter limit.
    Miter,
    /// Reserved value 3.
    Reserved,
}

impl JoinStyle {
    const MITER: u32 = 2;

    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => Self::Round,
            1 => Self::Bevel,
            Self::MITER => Self::Miter,
            _ => Self::Reserved,
        }
    }
}

/// A `LINESTYLE` record (shape versions 1-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    width: UInt16,
    color: Color,
}

impl LineStyle {
    /// Decode a `LINESTYLE`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let width = parse_u16(cursor, codes::LINE_STYLE, &field.child("Width"))?;
        let color = Color::parse(cursor, version, &field.child("Color"))?;
        Ok(Self { width, color })
    }

    /// Line width in twips.
    pub fn width(&self) -> UInt16 {
        self.width
    }

    /// Line colour.
    pub fn color(&self) -> &Color {
        &self.color
    }
}

impl FileElement for LineStyle {
    fn bit_position(&self) -> u64 {
        self.width.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.width, &self.color])
    }
}

/// A `LINESTYLE2` record (shape version 4).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle2 {
    width: UInt16,
    start_cap_style: UBits,
    join_style: UBits,
    has_fill: Flag,
    no_h_scale: Flag,
    no_v_scale: Flag,
    pixel_hinting: Flag,
    reserved: UBits,
    no_close: Flag,
    end_cap_style: UBits,
    miter_limit_factor: Option<Fixed8>,
    color: Option<Color>,
    fill_type: Option<FillStyle>,
}

impl LineStyle2 {
    /// Decode a `LINESTYLE2`.
    ///
    /// The miter limit is present only for miter joins; the line is painted
    /// either with a colour or, when `HasFill` is set, with a fill style.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::LINE_STYLE;

        let width = parse_u16(cursor, code, &field.child("Width"))?;
        let start_cap_style = parse_ubits(cursor, 2, code, &field.child("StartCapStyle"))?;
        let join_style = parse_ubits(cursor, 2, code, &field.child("JoinStyle"))?;
        let has_fill = parse_flag(cursor, code, &field.child("HasFillFlag"))?;
        let no_h_scale = parse_flag(cursor, code, &field.child("NoHScaleFlag"))?;
        let no_v_scale = parse_flag(cursor, code, &field.child("NoVScaleFlag"))?;
        let pixel_hinting = parse_flag(cursor, code, &field.child("PixelHintingFlag"))?;
        let reserved = parse_ubits(cursor, 5, code, &field.child("Reserved"))?;
        let no_close = parse_flag(cursor, code, &field.child("NoClose"))?;
        let end_cap_style = parse_ubits(cursor, 2, code, &field.child("EndCapStyle"))?;

        let miter_limit_factor = parse_if(join_style.value() == JoinStyle::MITER, || {
            parse_fixed8(cursor, code, &field.child("MiterLimitFactor"))
        })?;
        let color = parse_if(!has_fill.value(), || {
            Color::parse(cursor, version, &field.child("Color"))
        })?;
        let fill_type = parse_if(has_fill, || {
            FillStyle::parse(cursor, version, &field.child("FillType"))
        })?;

        Ok(Self {
            width,
            start_cap_style,
            join_style,
            has_fill,
            no_h_scale,
            no_v_scale,
            pixel_hinting,
            reserved,
            no_close,
            end_cap_style,
            miter_limit_factor,
            color,
            fill_type,
        })
    }

    /// Line width in twips.
    pub fn width(&self) -> UInt16 {
        self.width
    }

    /// `StartCapStyle` field.
    pub fn start_cap_style(&self) -> UBits {
        self.start_cap_style
    }

    /// Decoded start cap.
    pub fn start_cap(&self) -> CapStyle {
        CapStyle::from_bits(self.start_cap_style.value())
    }

    /// `JoinStyle` field.
    pub fn join_style(&self) -> UBits {
        self.join_style
    }

    /// Decoded join style.
    pub fn join(&self) -> JoinStyle {
        JoinStyle::from_bits(self.join_style.value())
    }

    /// `HasFillFlag`.
    pub fn has_fill(&self) -> Flag {
        self.has_fill
    }

    /// `NoHScaleFlag`.
    pub fn no_h_scale(&self) -> Flag {
        self.no_h_scale
    }

    /// `NoVScaleFlag`.
    pub fn no_v_scale(&self) -> Flag {
        self.no_v_scale
    }

    /// `PixelHintingFlag`.
    pub fn pixel_hinting(&self) -> Flag {
        self.pixel_hinting
    }

    /// `Reserved` bits.
    pub fn reserved(&self) -> UBits {
        self.reserved
    }

    /// `NoClose` flag.
    pub fn no_close(&self) -> Flag {
        self.no_close
    }

    /// `EndCapStyle` field.
    pub fn end_cap_style(&self) -> UBits {
        self.end_cap_style
    }

    /// Decoded end cap.
    pub fn end_cap(&self) -> CapStyle {
        CapStyle::from_bits(self.end_cap_style.value())
    }

    /// Miter limit, present for miter joins.
    pub fn miter_limit_factor(&self) -> Option<Fixed8> {
        self.miter_limit_factor
    }

    /// Line colour, present without a fill.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Line fill, present when `HasFillFlag` is set.
    pub fn fill_type(&self) -> Option<&FillStyle> {
        self.fill_type.as_ref()
    }
}

impl FileElement for LineStyle2 {
    fn bit_position(&self) -> u64 {
        self.width.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.width,
            &self.start_cap_style,
            &self.join_style,
            &self.has_fill,
            &self.no_h_scale,
            &self.no_v_scale,
            &self.pixel_hinting,
            &self.reserved,
            &self.no_close,
            &self.end_cap_style,
            &self.miter_limit_factor,
            &self.color,
            &self.fill_type,
        ])
    }
}

/// A line style of either record layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineStyleRecord {
    /// Shape versions 1-3.
    LineStyle(LineStyle),
    /// Shape version 4.
    LineStyle2(LineStyle2),
}

impl LineStyleRecord {
    /// Decode the line style layout used by `version`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        if version.uses_line_style2() {
            LineStyle2::parse(cursor, version, field).map(Self::LineStyle2)
        } else {
            LineStyle::parse(cursor, version, field).map(Self::LineStyle)
        }
    }

    /// Line width in twips.
    pub fn width(&self) -> u16 {
        match self {
            Self::LineStyle(style) => style.width.value(),
            Self::LineStyle2(style) => style.width.value(),
        }
    }
}

impl FileElement for LineStyleRecord {
    fn bit_position(&self) -> u64 {
        match self {
            Self::LineStyle(style) => style.bit_position(),
            Self::LineStyle2(style) => style.bit_position(),
        }
    }

    fn bit_length(&self) -> u64 {
        match self {
            Self::LineStyle(style) => style.bit_length(),
            Self::LineStyle2(style) => style.bit_length(),
        }
    }
}

/// A decoded `LINESTYLEARRAY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyleArray {
    count: UInt8,
    count_extended: Option<UInt16>,
    styles: Vec<LineStyleRecord>,
}

impl LineStyleArray {
    /// Decode a line style array.
    ///
    /// A count byte of `0xFF` is followed by the real count as a `UI16`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::LINE_STYLE;
        let count = parse_u8(cursor, code, &field.child("LineStyleCount"))?;
        let count_extended = parse_if(count.value() == 0xFF, || {
            parse_u16(cursor, code, &field.child("LineStyleCountExtended"))
        })?;

        let total = count_extended.map_or(count.value() as usize, |c| c.value() as usize);
        let styles = (0..total)
            .map(|i| LineStyleRecord::parse(cursor, version, &field.indexed("LineStyles", i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            count,
            count_extended,
            styles,
        })
    }

    /// `LineStyleCount` byte.
    pub fn count(&self) -> UInt8 {
        self.count
    }

    /// `LineStyleCountExtended`, present when the count byte is `0xFF`.
    pub fn count_extended(&self) -> Option<UInt16> {
        self.count_extended
    }

    /// The line styles.
    pub fn styles(&self) -> &[LineStyleRecord] {
        &self.styles
    }

    /// Number of line styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FileElement for LineStyleArray {
    fn bit_position(&self) -> u64 {
        self.count.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.count, &self.count_extended, &self.styles])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_rgb() {
        let data = [0x14, 0x00, 0x01, 0x02, 0x03];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("LineStyle").unwrap();

        let style = LineStyleRecord::parse(&mut cursor, ShapeVersion::Shape1, &root).unwrap();

        assert_eq!(style.width(), 20);
        assert_eq!(style.bit_length(), 40);
    }

    #[test]
    fn test_line_style2_miter_with_color() {
        // width 40, round start cap, miter join, no flags, end cap square
        let data = [
            0x28,
            0x00,
            0b0010_0000,
            0b0000_0010,
            0x00,
            0x03,
            0x11,
            0x22,
            0x33,
            0x44,
        ];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("LineStyle").unwrap();

        let style = LineStyle2::parse(&mut cursor, ShapeVersion::Shape4, &root).unwrap();

        assert_eq!(style.join(), JoinStyle::Miter);
        assert_eq!(style.end_cap(), CapStyle::Square);
        assert_eq!(style.miter_limit_factor().map(|m| m.value()), Some(3.0));
        assert_eq!(style.color().map(Color::to_rgba), Some([0x11, 0x22, 0x33, 0x44]));
        assert!(style.fill_type().is_none());
        assert_eq!(style.bit_length(), 80);
    }

    #[test]
    fn test_line_style2_with_fill() {
        // round join, HasFill set, solid fill
        let data = [0x01, 0x00, 0b0000_1000, 0x00, 0x00, 0xAA, 0xBB, 0xCC, 0xDD];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("LineStyle").unwrap();

        let style = LineStyle2::parse(&mut cursor, ShapeVersion::Shape4, &root).unwrap();

        assert!(style.has_fill().value());
        assert!(style.miter_limit_factor().is_none());
        assert!(style.color().is_none());
        assert_eq!(style.fill_type().map(|f| f.bit_length()), Some(40));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_extended_count_truncated() {
        let data = [0xFF, 0x05];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("LineStyles").unwrap();

        let err = LineStyleArray::parse(&mut cursor, ShapeVersion::Shape2, &root).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.field(), Some("LineStyles::LineStyleCountExtended"));
    }
}
