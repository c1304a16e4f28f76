//! Shape records: the polymorphic elements of a shape outline.
//!
//! The record type is not tagged by a byte. The first six bits are peeked
//! and classified, then decoded again as the leading fields of the chosen
//! record:
//!
//! | Peeked bits      | Record        |
//! |------------------|---------------|
//! | `000000`         | end of shape  |
//! | `11xxxx`         | straight edge |
//! | `10xxxx`         | curved edge   |
//! | anything else    | style change  |

use crate::codes;
use crate::fill_style::FillStyleArray;
use crate::line_style::LineStyleArray;
use crate::version::ShapeVersion;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::{
    parse_flag, parse_flag_if, parse_if, parse_sbits, parse_sbits_if, parse_ubits, parse_ubits_if,
};
use oxiswf_core::types::{Flag, SBits, UBits};
use oxiswf_core::{BitCursor, FieldPath, Result, SwfError};
use serde::Serialize;

/// Number of bits peeked to classify a record.
const DISCRIMINATOR_BITS: u8 = 6;

/// Bit widths of style indices in style-change records.
///
/// An outline starts with the widths from its header; a style-change
/// record carrying new styles replaces them for the rest of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StyleWidths {
    /// Width of `FillStyle0` / `FillStyle1` indices.
    pub fill_bits: u8,
    /// Width of `LineStyle` indices.
    pub line_bits: u8,
}

impl StyleWidths {
    /// Create a widths value.
    pub fn new(fill_bits: u8, line_bits: u8) -> Self {
        Self {
            fill_bits,
            line_bits,
        }
    }

    /// Widths carried by a `NumFillBits` / `NumLineBits` pair.
    pub fn from_fields(num_fill_bits: UBits, num_line_bits: UBits) -> Self {
        Self::new(num_fill_bits.value() as u8, num_line_bits.value() as u8)
    }
}

/// Which record variant follows in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeRecordKind {
    /// `ENDSHAPERECORD`
    EndShape,
    /// `STRAIGHTEDGERECORD`
    StraightEdge,
    /// `CURVEDEDGERECORD`
    CurvedEdge,
    /// `STYLECHANGERECORD`
    StyleChange,
}

impl ShapeRecordKind {
    /// Classify the six leading bits of a record.
    ///
    /// Patterns are tested in priority order; the first match wins.
    pub fn from_bits(bits: u32) -> Self {
        if bits == 0 {
            Self::EndShape
        } else if bits & 0x30 == 0x30 {
            Self::StraightEdge
        } else if bits & 0x20 == 0x20 {
            Self::CurvedEdge
        } else {
            Self::StyleChange
        }
    }

    /// Peek at the cursor and classify the next record without consuming it.
    pub fn classify(cursor: &BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        if !cursor.has_bits_left(DISCRIMINATOR_BITS as u64) {
            return Err(SwfError::truncated(
                codes::SHAPE_RECORD,
                cursor.byte_position() as u64,
                field.to_string(),
            ));
        }
        Ok(Self::from_bits(cursor.peek_ubits(DISCRIMINATOR_BITS)?))
    }

    /// Record type name as shown in dissector output.
    pub fn name(self) -> &'static str {
        match self {
            Self::EndShape => "EndShapeRecord",
            Self::StraightEdge => "StraightEdgeRecord",
            Self::CurvedEdge => "CurvedEdgeRecord",
            Self::StyleChange => "StyleChangeRecord",
        }
    }
}

/// `ENDSHAPERECORD`: the outline sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndShapeRecord {
    type_flag: Flag,
    end_of_shape: UBits,
}

impl EndShapeRecord {
    /// Decode an end-of-shape record.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let code = codes::SHAPE_RECORD;
        let type_flag = parse_flag(cursor, code, &field.child("TypeFlag"))?;
        let end_of_shape = parse_ubits(cursor, 5, code, &field.child("EndOfShape"))?;
        Ok(Self {
            type_flag,
            end_of_shape,
        })
    }

    /// `TypeFlag` (always 0).
    pub fn type_flag(&self) -> Flag {
        self.type_flag
    }

    /// `EndOfShape` (always 0).
    pub fn end_of_shape(&self) -> UBits {
        self.end_of_shape
    }
}

impl FileElement for EndShapeRecord {
    fn bit_position(&self) -> u64 {
        self.type_flag.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.type_flag, &self.end_of_shape])
    }
}

/// `STRAIGHTEDGERECORD`: a line segment relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StraightEdgeRecord {
    type_flag: Flag,
    straight_flag: Flag,
    num_bits: UBits,
    general_line_flag: Flag,
    vert_line_flag: Option<Flag>,
    delta_x: Option<SBits>,
    delta_y: Option<SBits>,
}

impl StraightEdgeRecord {
    /// Decode a straight edge.
    ///
    /// General lines carry both deltas; otherwise `VertLineFlag` selects
    /// which single delta is present.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let code = codes::SHAPE_RECORD;

        let type_flag = parse_flag(cursor, code, &field.child("TypeFlag"))?;
        let straight_flag = parse_flag(cursor, code, &field.child("StraightFlag"))?;
        let num_bits = parse_ubits(cursor, 4, code, &field.child("NumBits"))?;
        let delta_bits = num_bits.value() as u8 + 2;

        let general_line_flag = parse_flag(cursor, code, &field.child("GeneralLineFlag"))?;
        let general = general_line_flag.value();
        let vert_line_flag = parse_flag_if(cursor, !general, code, &field.child("VertLineFlag"))?;
        let vertical = vert_line_flag.is_some_and(|f| f.value());

        let delta_x = parse_sbits_if(
            cursor,
            general || !vertical,
            delta_bits,
            code,
            &field.child("DeltaX"),
        )?;
        let delta_y = parse_sbits_if(
            cursor,
            general || vertical,
            delta_bits,
            code,
            &field.child("DeltaY"),
        )?;

        Ok(Self {
            type_flag,
            straight_flag,
            num_bits,
            general_line_flag,
            vert_line_flag,
            delta_x,
            delta_y,
        })
    }

    /// `TypeFlag` (always 1).
    pub fn type_flag(&self) -> Flag {
        self.type_flag
    }

    /// `StraightFlag` (always 1).
    pub fn straight_flag(&self) -> Flag {
        self.straight_flag
    }

    /// `NumBits`; deltas are two bits wider.
    pub fn num_bits(&self) -> UBits {
        self.num_bits
    }

    /// `GeneralLineFlag`.
    pub fn general_line_flag(&self) -> Flag {
        self.general_line_flag
    }

    /// `VertLineFlag`, present for non-general lines.
    pub fn vert_line_flag(&self) -> Option<Flag> {
        self.vert_line_flag
    }

    /// `DeltaX`.
    pub fn delta_x(&self) -> Option<SBits> {
        self.delta_x
    }

    /// `DeltaY`.
    pub fn delta_y(&self) -> Option<SBits> {
        self.delta_y
    }

    /// `(dx, dy)` in twips, with absent deltas as zero.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.delta_x.map_or(0, |d| d.value()),
            self.delta_y.map_or(0, |d| d.value()),
        )
    }
}

impl FileElement for StraightEdgeRecord {
    fn bit_position(&self) -> u64 {
        self.type_flag.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.type_flag,
            &self.straight_flag,
            &self.num_bits,
            &self.general_line_flag,
            &self.vert_line_flag,
            &self.delta_x,
            &self.delta_y,
        ])
    }
}

/// `CURVEDEDGERECORD`: a quadratic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurvedEdgeRecord {
    type_flag: Flag,
    straight_flag: Flag,
    num_bits: UBits,
    control_delta_x: SBits,
    control_delta_y: SBits,
    anchor_delta_x: SBits,
    anchor_delta_y: SBits,
}

impl CurvedEdgeRecord {
    /// Decode a curved edge.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let code = codes::SHAPE_RECORD;

        let type_flag = parse_flag(cursor, code, &field.child("TypeFlag"))?;
        let straight_flag = parse_flag(cursor, code, &field.child("StraightFlag"))?;
        let num_bits = parse_ubits(cursor, 4, code, &field.child("NumBits"))?;
        let delta_bits = num_bits.value() as u8 + 2;

        let control_delta_x = parse_sbits(cursor, delta_bits, code, &field.child("ControlDeltaX"))?;
        let control_delta_y = parse_sbits(cursor, delta_bits, code, &field.child("ControlDeltaY"))?;
        let anchor_delta_x = parse_sbits(cursor, delta_bits, code, &field.child("AnchorDeltaX"))?;
        let anchor_delta_y = parse_sbits(cursor, delta_bits, code, &field.child("AnchorDeltaY"))?;

        Ok(Self {
            type_flag,
            straight_flag,
            num_bits,
            control_delta_x,
            control_delta_y,
            anchor_delta_x,
            anchor_delta_y,
        })
    }

    /// `TypeFlag` (always 1).
    pub fn type_flag(&self) -> Flag {
        self.type_flag
    }

    /// `StraightFlag` (always 0).
    pub fn straight_flag(&self) -> Flag {
        self.straight_flag
    }

    /// `NumBits`; deltas are two bits wider.
    pub fn num_bits(&self) -> UBits {
        self.num_bits
    }

    /// `ControlDeltaX`.
    pub fn control_delta_x(&self) -> SBits {
        self.control_delta_x
    }

    /// `ControlDeltaY`.
    pub fn control_delta_y(&self) -> SBits {
        self.control_delta_y
    }

    /// `AnchorDeltaX`.
    pub fn anchor_delta_x(&self) -> SBits {
        self.anchor_delta_x
    }

    /// `AnchorDeltaY`.
    pub fn anchor_delta_y(&self) -> SBits {
        self.anchor_delta_y
    }
}

impl FileElement for CurvedEdgeRecord {
    fn bit_position(&self) -> u64 {
        self.type_flag.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.type_flag,
            &self.straight_flag,
            &self.num_bits,
            &self.control_delta_x,
            &self.control_delta_y,
            &self.anchor_delta_x,
            &self.anchor_delta_y,
        ])
    }
}

/// Style tables introduced mid-outline by a style-change record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStyles {
    fill_styles: FillStyleArray,
    line_styles: LineStyleArray,
    num_fill_bits: UBits,
    num_line_bits: UBits,
}

impl NewStyles {
    /// Decode the new-styles payload. The style arrays start on a byte
    /// boundary; the skipped padding is not part of any element.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::SHAPE_RECORD;
        cursor.align();

        let fill_styles = FillStyleArray::parse(cursor, version, &field.child("FillStyles"))?;
        let line_styles = LineStyleArray::parse(cursor, version, &field.child("LineStyles"))?;
        let num_fill_bits = parse_ubits(cursor, 4, code, &field.child("NumFillBits"))?;
        let num_line_bits = parse_ubits(cursor, 4, code, &field.child("NumLineBits"))?;

        Ok(Self {
            fill_styles,
            line_styles,
            num_fill_bits,
            num_line_bits,
        })
    }

    /// Replacement fill style table.
    pub fn fill_styles(&self) -> &FillStyleArray {
        &self.fill_styles
    }

    /// Replacement line style table.
    pub fn line_styles(&self) -> &LineStyleArray {
        &self.line_styles
    }

    /// `NumFillBits` for subsequent records.
    pub fn num_fill_bits(&self) -> UBits {
        self.num_fill_bits
    }

    /// `NumLineBits` for subsequent records.
    pub fn num_line_bits(&self) -> UBits {
        self.num_line_bits
    }

    /// Widths adopted by subsequent records.
    pub fn widths(&self) -> StyleWidths {
        StyleWidths::from_fields(self.num_fill_bits, self.num_line_bits)
    }
}

impl FileElement for NewStyles {
    fn bit_position(&self) -> u64 {
        self.fill_styles.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.fill_styles,
            &self.line_styles,
            &self.num_fill_bits,
            &self.num_line_bits,
        ])
    }
}

/// `STYLECHANGERECORD`: moves the pen and/or selects styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleChangeRecord {
    type_flag: Flag,
    state_new_styles: Flag,
    state_line_style: Flag,
    state_fill_style1: Flag,
    state_fill_style0: Flag,
    state_move_to: Flag,
    move_bits: Option<UBits>,
    move_delta_x: Option<SBits>,
    move_delta_y: Option<SBits>,
    fill_style0: Option<UBits>,
    fill_style1: Option<UBits>,
    line_style: Option<UBits>,
    new_styles: Option<NewStyles>,
}

impl StyleChangeRecord {
    /// Decode a style-change record using the current index widths.
    ///
    /// `styles_version` is the shape version used to decode new style
    /// tables. With `None` (basic outline generation) the new-styles payload
    /// is never decoded, even when `StateNewStyles` is set.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        widths: StyleWidths,
        styles_version: Option<ShapeVersion>,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        let code = codes::SHAPE_RECORD;

        let type_flag = parse_flag(cursor, code, &field.child("TypeFlag"))?;
        let state_new_styles = parse_flag(cursor, code, &field.child("StateNewStyles"))?;
        let state_line_style = parse_flag(cursor, code, &field.child("StateLineStyle"))?;
        let state_fill_style1 = parse_flag(cursor, code, &field.child("StateFillStyle1"))?;
        let state_fill_style0 = parse_flag(cursor, code, &field.child("StateFillStyle0"))?;
        let state_move_to = parse_flag(cursor, code, &field.child("StateMoveTo"))?;

        let move_bits = parse_ubits_if(cursor, state_move_to, 5, code, &field.child("MoveBits"))?;
        let move_width = move_bits.map_or(0, |b| b.value() as u8);
        let move_delta_x =
            parse_sbits_if(cursor, state_move_to, move_width, code, &field.child("MoveDeltaX"))?;
        let move_delta_y =
            parse_sbits_if(cursor, state_move_to, move_width, code, &field.child("MoveDeltaY"))?;

        let fill_style0 = parse_ubits_if(
            cursor,
            state_fill_style0,
            widths.fill_bits,
            code,
            &field.child("FillStyle0"),
        )?;
        let fill_style1 = parse_ubits_if(
            cursor,
            state_fill_style1,
            widths.fill_bits,
            code,
            &field.child("FillStyle1"),
        )?;
        let line_style = parse_ubits_if(
            cursor,
            state_line_style,
            widths.line_bits,
            code,
            &field.child("LineStyle"),
        )?;

        let new_styles = match styles_version {
            Some(version) => parse_if(state_new_styles, || {
                NewStyles::parse(cursor, version, field)
            })?,
            None => None,
        };

        Ok(Self {
            type_flag,
            state_new_styles,
            state_line_style,
            state_fill_style1,
            state_fill_style0,
            state_move_to,
            move_bits,
            move_delta_x,
            move_delta_y,
            fill_style0,
            fill_style1,
            line_style,
            new_styles,
        })
    }

    /// `TypeFlag` (always 0).
    pub fn type_flag(&self) -> Flag {
        self.type_flag
    }

    /// `StateNewStyles`.
    pub fn state_new_styles(&self) -> Flag {
        self.state_new_styles
    }

    /// `StateLineStyle`.
    pub fn state_line_style(&self) -> Flag {
        self.state_line_style
    }

    /// `StateFillStyle1`.
    pub fn state_fill_style1(&self) -> Flag {
        self.state_fill_style1
    }

    /// `StateFillStyle0`.
    pub fn state_fill_style0(&self) -> Flag {
        self.state_fill_style0
    }

    /// `StateMoveTo`.
    pub fn state_move_to(&self) -> Flag {
        self.state_move_to
    }

    /// `MoveBits`.
    pub fn move_bits(&self) -> Option<UBits> {
        self.move_bits
    }

    /// `MoveDeltaX`.
    pub fn move_delta_x(&self) -> Option<SBits> {
        self.move_delta_x
    }

    /// `MoveDeltaY`.
    pub fn move_delta_y(&self) -> Option<SBits> {
        self.move_delta_y
    }

    /// `FillStyle0` index.
    pub fn fill_style0(&self) -> Option<UBits> {
        self.fill_style0
    }

    /// `FillStyle1` index.
    pub fn fill_style1(&self) -> Option<UBits> {
        self.fill_style1
    }

    /// `LineStyle` index.
    pub fn line_style(&self) -> Option<UBits> {
        self.line_style
    }

    /// New style tables and widths, extended generation only.
    pub fn new_styles(&self) -> Option<&NewStyles> {
        self.new_styles.as_ref()
    }
}

impl FileElement for StyleChangeRecord {
    fn bit_position(&self) -> u64 {
        self.type_flag.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[
            &self.type_flag,
            &self.state_new_styles,
            &self.state_line_style,
            &self.state_fill_style1,
            &self.state_fill_style0,
            &self.state_move_to,
            &self.move_bits,
            &self.move_delta_x,
            &self.move_delta_y,
            &self.fill_style0,
            &self.fill_style1,
            &self.line_style,
            &self.new_styles,
        ])
    }
}

/// One element of a shape outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ShapeRecord {
    /// Outline sentinel.
    EndShape(EndShapeRecord),
    /// Line segment.
    StraightEdge(StraightEdgeRecord),
    /// Quadratic curve segment.
    CurvedEdge(CurvedEdgeRecord),
    /// Pen move and/or style selection.
    StyleChange(StyleChangeRecord),
}

impl ShapeRecord {
    /// Classify and decode the next record.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        widths: StyleWidths,
        styles_version: Option<ShapeVersion>,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        Ok(match ShapeRecordKind::classify(cursor, field)? {
            ShapeRecordKind::EndShape => Self::EndShape(EndShapeRecord::parse(cursor, field)?),
            ShapeRecordKind::StraightEdge => {
                Self::StraightEdge(StraightEdgeRecord::parse(cursor, field)?)
            }
            ShapeRecordKind::CurvedEdge => {
                Self::CurvedEdge(CurvedEdgeRecord::parse(cursor, field)?)
            }
            ShapeRecordKind::StyleChange => Self::StyleChange(StyleChangeRecord::parse(
                cursor,
                widths,
                styles_version,
                field,
            )?),
        })
    }

    /// The record variant.
    pub fn kind(&self) -> ShapeRecordKind {
        match self {
            Self::EndShape(_) => ShapeRecordKind::EndShape,
            Self::StraightEdge(_) => ShapeRecordKind::StraightEdge,
            Self::CurvedEdge(_) => ShapeRecordKind::CurvedEdge,
            Self::StyleChange(_) => ShapeRecordKind::StyleChange,
        }
    }

    /// Check whether this is the outline sentinel.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::EndShape(_))
    }

    /// Index widths this record imposes on the records after it, if any.
    pub fn new_widths(&self) -> Option<StyleWidths> {
        match self {
            Self::StyleChange(record) => record.new_styles().map(NewStyles::widths),
            _ => None,
        }
    }
}

impl FileElement for ShapeRecord {
    fn bit_position(&self) -> u64 {
        match self {
            Self::EndShape(r) => r.bit_position(),
            Self::StraightEdge(r) => r.bit_position(),
            Self::CurvedEdge(r) => r.bit_position(),
            Self::StyleChange(r) => r.bit_position(),
        }
    }

    fn bit_length(&self) -> u64 {
        match self {
            Self::EndShape(r) => r.bit_length(),
            Self::StraightEdge(r) => r.bit_length(),
            Self::CurvedEdge(r) => r.bit_length(),
            Self::StyleChange(r) => r.bit_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> FieldPath<'static> {
        FieldPath::root("ShapeRecord").unwrap()
    }

    #[test]
    fn test_discriminator_priority() {
        assert_eq!(ShapeRecordKind::from_bits(0), ShapeRecordKind::EndShape);
        assert_eq!(ShapeRecordKind::from_bits(0x30), ShapeRecordKind::StraightEdge);
        assert_eq!(ShapeRecordKind::from_bits(0x3F), ShapeRecordKind::StraightEdge);
        assert_eq!(ShapeRecordKind::from_bits(0x20), ShapeRecordKind::CurvedEdge);
        assert_eq!(ShapeRecordKind::from_bits(0x2F), ShapeRecordKind::CurvedEdge);
        assert_eq!(ShapeRecordKind::from_bits(0x01), ShapeRecordKind::StyleChange);
        assert_eq!(ShapeRecordKind::from_bits(0x1F), ShapeRecordKind::StyleChange);
    }

    #[test]
    fn test_classify_does_not_consume() {
        let data = [0b1100_0000];
        let cursor = BitCursor::new(&data);

        let kind = ShapeRecordKind::classify(&cursor, &root()).unwrap();
        assert_eq!(kind, ShapeRecordKind::StraightEdge);
        assert_eq!(cursor.bit_position(), 0);
    }

    #[test]
    fn test_vertical_line() {
        // 1 1 0000 0 1 DeltaY=01 (2 bits)
        let data = [0b1100_0001, 0b0100_0000];
        let mut cursor = BitCursor::new(&data);

        let record = StraightEdgeRecord::parse(&mut cursor, &root()).unwrap();

        assert!(record.delta_x().is_none());
        assert_eq!(record.delta(), (0, 1));
        assert_eq!(record.bit_length(), 10);
    }

    #[test]
    fn test_general_line() {
        // 1 1 0001 1 DeltaX=111 DeltaY=001
        let data = [0b1100_0111, 0b1100_1000];
        let mut cursor = BitCursor::new(&data);

        let record = StraightEdgeRecord::parse(&mut cursor, &root()).unwrap();

        assert!(record.vert_line_flag().is_none());
        assert_eq!(record.delta(), (-1, 1));
        assert_eq!(record.bit_length(), 13);
    }

    #[test]
    fn test_curved_edge() {
        // 1 0 0000, four 2-bit deltas: 01 11 10 00
        let data = [0b1000_0001, 0b1110_0000];
        let mut cursor = BitCursor::new(&data);

        let record = CurvedEdgeRecord::parse(&mut cursor, &root()).unwrap();

        assert_eq!(record.control_delta_x().value(), 1);
        assert_eq!(record.control_delta_y().value(), -1);
        assert_eq!(record.anchor_delta_x().value(), -2);
        assert_eq!(record.anchor_delta_y().value(), 0);
        assert_eq!(record.bit_length(), 14);
    }

    #[test]
    fn test_style_change_move_and_fill() {
        // 0 0 0 0 1 1 | MoveBits=00010 | dx=01 dy=11 | FillStyle0=10 (2 bits)
        let data = [0b0000_1100, 0b0100_1111, 0b0000_0000];
        let mut cursor = BitCursor::new(&data);

        let record =
            StyleChangeRecord::parse(&mut cursor, StyleWidths::new(2, 0), None, &root()).unwrap();

        assert_eq!(record.move_delta_x().map(|d| d.value()), Some(1));
        assert_eq!(record.move_delta_y().map(|d| d.value()), Some(-1));
        assert_eq!(record.fill_style0().map(|f| f.value()), Some(2));
        assert!(record.fill_style1().is_none());
        assert_eq!(record.bit_length(), 6 + 5 + 4 + 2);
    }

    #[test]
    fn test_basic_generation_ignores_new_styles() {
        // 0 1 0 0 0 0: StateNewStyles set, nothing else
        let data = [0b0100_0000];
        let mut cursor = BitCursor::new(&data);

        let record =
            StyleChangeRecord::parse(&mut cursor, StyleWidths::default(), None, &root()).unwrap();

        assert!(record.state_new_styles().value());
        assert!(record.new_styles().is_none());
        assert_eq!(cursor.bit_position(), 6);
    }

    #[test]
    fn test_truncated_discriminator() {
        let data = [0b1100_0000];
        let mut cursor = BitCursor::new(&data);
        cursor.read_ubits(4).unwrap();

        let err = ShapeRecordKind::classify(&cursor, &root()).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.code(), Some(codes::SHAPE_RECORD));
    }
}
