//! # OxiSWF Core
//!
//! Core components for the OxiSWF structure decoder.
//!
//! This crate provides the fundamental building blocks every SWF structure
//! decoder is made of:
//!
//! - [`bitstream`]: Bit-precise cursor (MSB-first bit fields, little-endian bytes)
//! - [`types`]: Primitive value types that remember where they were read
//! - [`parse`]: Primitive decoders and conditional (gated) helpers
//! - [`element`]: The file element contract and bit-length summation
//! - [`path`]: Field paths used in diagnostics
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiSWF is designed as a layered decoding stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Presentation                                        │
//! │     oxiswf CLI, dissector tree, JSON output            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Structure Grammar                                   │
//! │     Matrix, styles, shape records, outlines            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Primitives (this crate)                             │
//! │     BitCursor, typed primitives, gates, errors         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiswf_core::prelude::*;
//!
//! let data = [0b1000_1100, 0b0000_0000];
//! let mut cursor = BitCursor::new(&data);
//! let root = FieldPath::root("Example").unwrap();
//! let code = ErrorCode(6);
//!
//! let has_scale = parse_flag(&mut cursor, code, &root.child("HasScale")).unwrap();
//! let bits = parse_ubits(&mut cursor, 5, code, &root.child("NBits")).unwrap();
//!
//! assert!(has_scale.value());
//! assert_eq!(bits.value(), 3);
//! assert_eq!(add_bit_lengths(&[&has_scale, &bits]), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod element;
pub mod error;
pub mod parse;
pub mod path;
pub mod types;

// Re-exports for convenience
pub use bitstream::BitCursor;
pub use element::{ElementSlot, FileElement, add_bit_lengths};
pub use error::{ErrorCode, Result, SwfError};
pub use parse::Gate;
pub use path::FieldPath;
pub use types::{
    ByteArray, Fixed8, Flag, Float, Float16, Float32, Float64, FloatFBits, Int8, Int16, Int24,
    Int32, Integer, SBits, SwfString, UBits, UInt8, UInt16, UInt24, UInt32,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::BitCursor;
    pub use crate::element::{FileElement, add_bit_lengths};
    pub use crate::error::{ErrorCode, Result, SwfError};
    pub use crate::parse::{
        Gate, parse_fbits, parse_fbits_if, parse_flag, parse_flag_if, parse_if, parse_sbits,
        parse_sbits_if, parse_u8, parse_u16, parse_ubits, parse_ubits_if,
    };
    pub use crate::path::FieldPath;
    pub use crate::types::{Fixed8, Flag, FloatFBits, SBits, UBits, UInt8, UInt16};
}
