//! Shape outlines (`SHAPE`) and `SHAPEWITHSTYLE`.

use crate::codes;
use crate::fill_style::FillStyleArray;
use crate::limits::DecodeLimits;
use crate::line_style::LineStyleArray;
use crate::shape_record::{ShapeRecord, StyleWidths};
use crate::version::{OutlineGeneration, ShapeVersion};
use log::{debug, trace};
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::parse_ubits;
use oxiswf_core::types::UBits;
use oxiswf_core::{BitCursor, FieldPath, Result, SwfError};
use serde::Serialize;

/// The records of an outline, ending with the end-of-shape sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeRecordList {
    records: Vec<ShapeRecord>,
}

impl ShapeRecordList {
    /// Records in stream order.
    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    /// Number of records, sentinel included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ShapeRecordList {
    type Item = &'a ShapeRecord;
    type IntoIter = std::slice::Iter<'a, ShapeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FileElement for ShapeRecordList {
    fn bit_position(&self) -> u64 {
        self.records.first().map_or(0, FileElement::bit_position)
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.records])
    }
}

/// A decoded `SHAPE` outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    num_fill_bits: UBits,
    num_line_bits: UBits,
    records: ShapeRecordList,
    generation: OutlineGeneration,
}

impl Shape {
    /// Decode an outline of the basic generation (`DefineShape`).
    ///
    /// Style-change records never carry new style tables here.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        field: &FieldPath<'_>,
        limits: &DecodeLimits,
    ) -> Result<Self> {
        Self::parse_outline(cursor, None, field, limits)
    }

    /// Decode an outline of the extended generation (`DefineShape2` and
    /// later), where style-change records may introduce new style tables
    /// decoded for `version`.
    pub fn parse_extended(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
        limits: &DecodeLimits,
    ) -> Result<Self> {
        Self::parse_outline(cursor, Some(version), field, limits)
    }

    /// Decode the outline generation that `version` uses.
    pub fn parse_for(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
        limits: &DecodeLimits,
    ) -> Result<Self> {
        match version.outline_generation() {
            OutlineGeneration::Basic => Self::parse(cursor, field, limits),
            OutlineGeneration::Extended => Self::parse_extended(cursor, version, field, limits),
        }
    }

    fn parse_outline(
        cursor: &mut BitCursor<'_>,
        styles_version: Option<ShapeVersion>,
        field: &FieldPath<'_>,
        limits: &DecodeLimits,
    ) -> Result<Self> {
        let code = codes::SHAPE;
        let num_fill_bits = parse_ubits(cursor, 4, code, &field.child("NumFillBits"))?;
        let num_line_bits = parse_ubits(cursor, 4, code, &field.child("NumLineBits"))?;

        let mut widths = StyleWidths::from_fields(num_fill_bits, num_line_bits);
        let mut records = Vec::new();

        loop {
            let index = records.len();
            let record_field = field.indexed("ShapeRecord", index);

            if index >= limits.max_shape_records {
                return Err(SwfError::malformed(
                    code,
                    cursor.byte_position() as u64,
                    record_field.to_string(),
                    format!(
                        "outline exceeds {} records without an end-of-shape record",
                        limits.max_shape_records
                    ),
                ));
            }

            let record = ShapeRecord::parse(cursor, widths, styles_version, &record_field)?;
            trace!(
                "{}: {} at bit {} ({} bits)",
                record_field,
                record.kind().name(),
                record.bit_position(),
                record.bit_length()
            );

            if let Some(next) = record.new_widths() {
                trace!(
                    "{}: style widths {}/{} -> {}/{}",
                    record_field, widths.fill_bits, widths.line_bits, next.fill_bits, next.line_bits
                );
                widths = next;
            }

            let end = record.is_end();
            records.push(record);
            if end {
                break;
            }
        }

        cursor.align();

        let shape = Self {
            num_fill_bits,
            num_line_bits,
            records: ShapeRecordList { records },
            generation: if styles_version.is_some() {
                OutlineGeneration::Extended
            } else {
                OutlineGeneration::Basic
            },
        };
        debug!(
            "{}: decoded {} shape records ({} bits)",
            field,
            shape.records.len(),
            shape.bit_length()
        );
        Ok(shape)
    }

    /// Initial `NumFillBits`.
    pub fn num_fill_bits(&self) -> UBits {
        self.num_fill_bits
    }

    /// Initial `NumLineBits`.
    pub fn num_line_bits(&self) -> UBits {
        self.num_line_bits
    }

    /// The outline records.
    pub fn records(&self) -> &ShapeRecordList {
        &self.records
    }

    /// Outline generation the shape was decoded with.
    pub fn generation(&self) -> OutlineGeneration {
        self.generation
    }
}

impl FileElement for Shape {
    fn bit_position(&self) -> u64 {
        self.num_fill_bits.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.num_fill_bits, &self.num_line_bits, &self.records])
    }
}

/// A decoded `SHAPEWITHSTYLE`: style tables followed by an outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeWithStyle {
    version: ShapeVersion,
    fill_styles: FillStyleArray,
    line_styles: LineStyleArray,
    shape: Shape,
}

impl ShapeWithStyle {
    /// Decode a shape with style tables for `version`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
        limits: &DecodeLimits,
    ) -> Result<Self> {
        let fill_styles = FillStyleArray::parse(cursor, version, &field.child("FillStyles"))?;
        let line_styles = LineStyleArray::parse(cursor, version, &field.child("LineStyles"))?;
        let shape = Shape::parse_for(cursor, version, &field.child("Shape"), limits)?;

        cursor.align();

        debug!(
            "{}: decoded {} with {} fill and {} line styles",
            field,
            version,
            fill_styles.len(),
            line_styles.len()
        );

        Ok(Self {
            version,
            fill_styles,
            line_styles,
            shape,
        })
    }

    /// Shape version the structure was decoded for.
    pub fn version(&self) -> ShapeVersion {
        self.version
    }

    /// Initial fill style table.
    pub fn fill_styles(&self) -> &FillStyleArray {
        &self.fill_styles
    }

    /// Initial line style table.
    pub fn line_styles(&self) -> &LineStyleArray {
        &self.line_styles
    }

    /// The outline.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl FileElement for ShapeWithStyle {
    fn bit_position(&self) -> u64 {
        self.fill_styles.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.fill_styles, &self.line_styles, &self.shape])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape_record::ShapeRecordKind;

    #[test]
    fn test_single_sentinel() {
        // NumFillBits=0 NumLineBits=0, end-of-shape
        let data = [0x00, 0x00];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Shape").unwrap();

        let shape = Shape::parse(&mut cursor, &root, &DecodeLimits::DEFAULT).unwrap();

        assert_eq!(shape.records().len(), 1);
        assert_eq!(shape.records().records()[0].kind(), ShapeRecordKind::EndShape);
        assert_eq!(shape.bit_length(), 14);
        assert_eq!(cursor.bit_position(), 16);
    }

    #[test]
    fn test_record_limit() {
        // Two straight edges, then the sentinel, with a limit of two records
        let data = [0x00, 0b1100_0001, 0b0011_0000, 0b0101_0000, 0x00];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Shape").unwrap();
        let limits = DecodeLimits::new(2);

        let err = Shape::parse(&mut cursor, &root, &limits).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.field(), Some("Shape::ShapeRecord[2]"));
    }

    #[test]
    fn test_missing_sentinel_is_truncated() {
        let data = [0x00, 0b1100_0001, 0b0011_0000];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Shape").unwrap();

        let err = Shape::parse(&mut cursor, &root, &DecodeLimits::DEFAULT).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_shape_with_style_empty_tables() {
        // no fill styles, no line styles, widths 0/0, sentinel
        let data = [0x00, 0x00, 0x00, 0x00];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Shapes").unwrap();

        let shape = ShapeWithStyle::parse(
            &mut cursor,
            ShapeVersion::Shape3,
            &root,
            &DecodeLimits::DEFAULT,
        )
        .unwrap();

        assert!(shape.fill_styles().is_empty());
        assert_eq!(shape.shape().generation(), OutlineGeneration::Extended);
        assert_eq!(shape.bit_length(), 8 + 8 + 14);
        assert!(cursor.is_exhausted());
    }
}
