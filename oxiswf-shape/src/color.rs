//! `RGB` and `RGBA` colour records.

use crate::codes;
use crate::version::ShapeVersion;
use oxiswf_core::element::{FileElement, add_bit_lengths};
use oxiswf_core::parse::parse_u8;
use oxiswf_core::types::UInt8;
use oxiswf_core::{BitCursor, FieldPath, Result};
use serde::Serialize;

/// A 24-bit `RGB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    red: UInt8,
    green: UInt8,
    blue: UInt8,
}

impl Rgb {
    /// Decode an `RGB` record.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let red = parse_u8(cursor, codes::COLOR, &field.child("Red"))?;
        let green = parse_u8(cursor, codes::COLOR, &field.child("Green"))?;
        let blue = parse_u8(cursor, codes::COLOR, &field.child("Blue"))?;
        Ok(Self { red, green, blue })
    }

    /// Red component.
    pub fn red(&self) -> UInt8 {
        self.red
    }

    /// Green component.
    pub fn green(&self) -> UInt8 {
        self.green
    }

    /// Blue component.
    pub fn blue(&self) -> UInt8 {
        self.blue
    }
}

impl FileElement for Rgb {
    fn bit_position(&self) -> u64 {
        self.red.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.red, &self.green, &self.blue])
    }
}

/// A 32-bit `RGBA` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    red: UInt8,
    green: UInt8,
    blue: UInt8,
    alpha: UInt8,
}

impl Rgba {
    /// Decode an `RGBA` record.
    pub fn parse(cursor: &mut BitCursor<'_>, field: &FieldPath<'_>) -> Result<Self> {
        let red = parse_u8(cursor, codes::COLOR, &field.child("Red"))?;
        let green = parse_u8(cursor, codes::COLOR, &field.child("Green"))?;
        let blue = parse_u8(cursor, codes::COLOR, &field.child("Blue"))?;
        let alpha = parse_u8(cursor, codes::COLOR, &field.child("Alpha"))?;
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// Red component.
    pub fn red(&self) -> UInt8 {
        self.red
    }

    /// Green component.
    pub fn green(&self) -> UInt8 {
        self.green
    }

    /// Blue component.
    pub fn blue(&self) -> UInt8 {
        self.blue
    }

    /// Alpha component (255 is opaque).
    pub fn alpha(&self) -> UInt8 {
        self.alpha
    }
}

impl FileElement for Rgba {
    fn bit_position(&self) -> u64 {
        self.red.bit_position()
    }

    fn bit_length(&self) -> u64 {
        add_bit_lengths(&[&self.red, &self.green, &self.blue, &self.alpha])
    }
}

/// A colour whose width is fixed by the shape version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    /// Shape versions 1 and 2.
    Rgb(Rgb),
    /// Shape versions 3 and 4.
    Rgba(Rgba),
}

impl Color {
    /// Decode the colour record used by `version`.
    pub fn parse(
        cursor: &mut BitCursor<'_>,
        version: ShapeVersion,
        field: &FieldPath<'_>,
    ) -> Result<Self> {
        if version.uses_rgba() {
            Rgba::parse(cursor, field).map(Self::Rgba)
        } else {
            Rgb::parse(cursor, field).map(Self::Rgb)
        }
    }

    /// Components as `[r, g, b, a]`; `RGB` colours are opaque.
    pub fn to_rgba(&self) -> [u8; 4] {
        match self {
            Self::Rgb(c) => [c.red.value(), c.green.value(), c.blue.value(), 0xFF],
            Self::Rgba(c) => [
                c.red.value(),
                c.green.value(),
                c.blue.value(),
                c.alpha.value(),
            ],
        }
    }
}

impl FileElement for Color {
    fn bit_position(&self) -> u64 {
        match self {
            Self::Rgb(c) => c.bit_position(),
            Self::Rgba(c) => c.bit_position(),
        }
    }

    fn bit_length(&self) -> u64 {
        match self {
            Self::Rgb(c) => c.bit_length(),
            Self::Rgba(c) => c.bit_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_width_follows_version() {
        let data = [0x10, 0x20, 0x30, 0x40];
        let root = FieldPath::root("Color").unwrap();

        let mut cursor = BitCursor::new(&data);
        let rgb = Color::parse(&mut cursor, ShapeVersion::Shape2, &root).unwrap();
        assert_eq!(rgb.bit_length(), 24);
        assert_eq!(rgb.to_rgba(), [0x10, 0x20, 0x30, 0xFF]);

        let mut cursor = BitCursor::new(&data);
        let rgba = Color::parse(&mut cursor, ShapeVersion::Shape3, &root).unwrap();
        assert_eq!(rgba.bit_length(), 32);
        assert_eq!(rgba.to_rgba(), [0x10, 0x20, 0x30, 0x40]);
    }

    #[test]
    fn test_truncated_alpha() {
        let data = [0x10, 0x20, 0x30];
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Color").unwrap();

        let err = Color::parse(&mut cursor, ShapeVersion::Shape4, &root).unwrap_err();
        assert_eq!(err.field(), Some("Color::Alpha"));
        assert_eq!(err.offset(), Some(3));
    }
}
