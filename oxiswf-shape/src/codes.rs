//! Error classification codes for the structure decoders.
//!
//! The decoding engine treats these as opaque; they are attached to every
//! error raised while decoding the corresponding structure. All structure
//! decoders currently share the structure-parsing class `0x00006`.

use oxiswf_core::ErrorCode;

const STRUCTURE: ErrorCode = ErrorCode(0x00006);

/// `MATRIX` records.
pub const MATRIX: ErrorCode = STRUCTURE;
/// `RGB` and `RGBA` colour records.
pub const COLOR: ErrorCode = STRUCTURE;
/// `GRADIENT`, `FOCALGRADIENT` and `GRADRECORD` records.
pub const GRADIENT: ErrorCode = STRUCTURE;
/// `FILLSTYLE` records and `FILLSTYLEARRAY` counts.
pub const FILL_STYLE: ErrorCode = STRUCTURE;
/// `LINESTYLE` / `LINESTYLE2` records and `LINESTYLEARRAY` counts.
pub const LINE_STYLE: ErrorCode = STRUCTURE;
/// Shape outline header (`NumFillBits`, `NumLineBits`).
pub const SHAPE: ErrorCode = STRUCTURE;
/// Individual shape records.
pub const SHAPE_RECORD: ErrorCode = STRUCTURE;
