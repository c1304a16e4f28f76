//! # OxiSWF Shape: SWF Structure Grammar
//!
//! Decoders for the composite SWF structures used by the `DefineShape` tag
//! family, built on the primitives of [`oxiswf_core`].
//!
//! ## Structures
//!
//! - **Matrix**: affine transform with optional scale and rotate/skew
//! - **Colours**: `RGB` / `RGBA`, chosen by shape version
//! - **Gradients**: gradient and focal gradient records
//! - **Styles**: fill styles, line styles (`LINESTYLE` / `LINESTYLE2`) and their arrays
//! - **Outlines**: self-terminating sequences of edge and style-change records
//!
//! ## Outline decoding
//!
//! Shape records are not tagged; the first six bits of each record are
//! peeked to pick the variant. Outlines end at the end-of-shape record, and
//! a style-change record carrying new styles changes the bit width of style
//! indices for every record after it.
//!
//! ## Example
//!
//! ```rust
//! use oxiswf_core::{BitCursor, FieldPath, FileElement};
//! use oxiswf_shape::{DecodeLimits, Shape, ShapeRecord};
//!
//! // NumFillBits=1, NumLineBits=0
//! // style change: FillStyle0 = 1
//! // end of shape
//! let data = [0b0001_0000, 0b0000_1010, 0b0000_0000];
//! let mut cursor = BitCursor::new(&data);
//! let root = FieldPath::root("Shape").unwrap();
//!
//! let shape = Shape::parse(&mut cursor, &root, &DecodeLimits::DEFAULT).unwrap();
//!
//! assert_eq!(shape.records().len(), 2);
//! assert!(matches!(shape.records().records()[0], ShapeRecord::StyleChange(_)));
//! assert_eq!(shape.bit_length(), 8 + 7 + 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codes;
mod color;
mod fill_style;
mod gradient;
mod limits;
mod line_style;
mod matrix;
mod shape;
mod shape_record;
mod version;

pub use color::{Color, Rgb, Rgba};
pub use fill_style::{FillStyle, FillStyleArray, FillStyleKind, FillStyleType};
pub use gradient::{FocalGradient, Gradient, GradientRecord, InterpolationMode, SpreadMode};
pub use limits::DecodeLimits;
pub use line_style::{CapStyle, JoinStyle, LineStyle, LineStyle2, LineStyleArray, LineStyleRecord};
pub use matrix::Matrix;
pub use shape::{Shape, ShapeRecordList, ShapeWithStyle};
pub use shape_record::{
    CurvedEdgeRecord, EndShapeRecord, NewStyles, ShapeRecord, ShapeRecordKind, StraightEdgeRecord,
    StyleChangeRecord, StyleWidths,
};
pub use version::{OutlineGeneration, ShapeVersion};
