//! Structure selection and decoding.

use crate::tree::{ToTree, TreeNode};
use clap::ValueEnum;
use log::debug;
use oxiswf_core::{BitCursor, FieldPath, FileElement, Result};
use oxiswf_shape::{
    DecodeLimits, FillStyleArray, LineStyleArray, Matrix, Shape, ShapeVersion, ShapeWithStyle,
};
use serde::Serialize;

/// Structure to decode at the requested offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Structure {
    /// MATRIX
    Matrix,
    /// SHAPE outline
    Shape,
    /// SHAPEWITHSTYLE
    ShapeWithStyle,
    /// FILLSTYLEARRAY
    FillStyles,
    /// LINESTYLEARRAY
    LineStyles,
}

impl Structure {
    /// Name of the root field.
    pub fn root_name(self) -> &'static str {
        match self {
            Self::Matrix => "Matrix",
            Self::Shape => "Shape",
            Self::ShapeWithStyle => "Shapes",
            Self::FillStyles => "FillStyles",
            Self::LineStyles => "LineStyles",
        }
    }
}

/// A decoded structure of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decoded {
    /// A matrix.
    Matrix(Matrix),
    /// A shape outline.
    Shape(Shape),
    /// Style tables plus outline.
    ShapeWithStyle(ShapeWithStyle),
    /// A fill style array.
    FillStyles(FillStyleArray),
    /// A line style array.
    LineStyles(LineStyleArray),
}

impl FileElement for Decoded {
    fn bit_position(&self) -> u64 {
        match self {
            Self::Matrix(v) => v.bit_position(),
            Self::Shape(v) => v.bit_position(),
            Self::ShapeWithStyle(v) => v.bit_position(),
            Self::FillStyles(v) => v.bit_position(),
            Self::LineStyles(v) => v.bit_position(),
        }
    }

    fn bit_length(&self) -> u64 {
        match self {
            Self::Matrix(v) => v.bit_length(),
            Self::Shape(v) => v.bit_length(),
            Self::ShapeWithStyle(v) => v.bit_length(),
            Self::FillStyles(v) => v.bit_length(),
            Self::LineStyles(v) => v.bit_length(),
        }
    }
}

impl ToTree for Decoded {
    fn to_tree(&self, name: &str) -> TreeNode {
        match self {
            Self::Matrix(v) => v.to_tree(name),
            Self::Shape(v) => v.to_tree(name),
            Self::ShapeWithStyle(v) => v.to_tree(name),
            Self::FillStyles(v) => v.to_tree(name),
            Self::LineStyles(v) => v.to_tree(name),
        }
    }
}

/// The result of one decode: the value and the bits the cursor advanced,
/// alignment padding included.
#[derive(Debug, Clone, PartialEq)]
pub struct Dissection {
    /// Decoded value.
    pub value: Decoded,
    /// Bits from the start offset to the final cursor position.
    pub consumed_bits: u64,
}

/// What to decode and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRequest {
    /// Structure to decode.
    pub structure: Structure,
    /// Shape version deciding colour width and record layouts.
    pub version: ShapeVersion,
    /// Byte offset of the structure in the input.
    pub offset: usize,
    /// Resource limits.
    pub limits: DecodeLimits,
}

impl DecodeRequest {
    /// Decode the requested structure from `data`.
    pub fn decode(&self, data: &[u8]) -> Result<Dissection> {
        let mut cursor = BitCursor::at(data, self.offset)?;
        let start = cursor.bit_position();
        let root = FieldPath::root(self.structure.root_name())?;

        let value = match self.structure {
            Structure::Matrix => Decoded::Matrix(Matrix::parse(&mut cursor, &root)?),
            Structure::Shape => Decoded::Shape(Shape::parse_for(
                &mut cursor,
                self.version,
                &root,
                &self.limits,
            )?),
            Structure::ShapeWithStyle => Decoded::ShapeWithStyle(ShapeWithStyle::parse(
                &mut cursor,
                self.version,
                &root,
                &self.limits,
            )?),
            Structure::FillStyles => {
                Decoded::FillStyles(FillStyleArray::parse(&mut cursor, self.version, &root)?)
            }
            Structure::LineStyles => {
                Decoded::LineStyles(LineStyleArray::parse(&mut cursor, self.version, &root)?)
            }
        };

        let consumed_bits = cursor.bit_position() - start;
        debug!(
            "{} ({}) at offset {}: {} bits",
            root, self.version, self.offset, consumed_bits
        );

        Ok(Dissection {
            value,
            consumed_bits,
        })
    }
}
