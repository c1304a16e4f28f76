//! Integration tests for the bit cursor and primitive decoders.

use oxiswf_core::prelude::*;
use oxiswf_core::parse::{parse_cstring, parse_f16, parse_i24, parse_string, parse_u24};

const CODE: ErrorCode = ErrorCode(6);

#[test]
fn test_fixed_point_half() {
    let data = [0x80, 0x00];
    let mut cursor = BitCursor::new(&data);
    let root = FieldPath::root("ScaleX").expect("valid root");

    let value = parse_fbits(&mut cursor, 16, CODE, &root).expect("decode failed");

    assert_eq!(value.value(), -0.5);
    assert_eq!(value.raw(), -32768);
    assert_eq!(value.bit_length(), 16);
}

#[test]
fn test_fixed_point_smallest_step() {
    let data = [0x00, 0x01];
    let mut cursor = BitCursor::new(&data);
    let root = FieldPath::root("ScaleX").expect("valid root");

    let value = parse_fbits(&mut cursor, 16, CODE, &root).expect("decode failed");

    assert_eq!(value.value(), 1.0 / 65536.0);
}

#[test]
fn test_truncation_at_boundary() {
    let data = [0xAB, 0xCD];
    let mut cursor = BitCursor::new(&data);
    let root = FieldPath::root("Shape").expect("valid root");

    parse_ubits(&mut cursor, 12, CODE, &root.child("Head")).expect("decode failed");
    let err = parse_ubits(&mut cursor, 5, CODE, &root.child("Tail")).unwrap_err();

    assert!(err.is_truncated());
    assert_eq!(err.offset(), Some(1));
    assert_eq!(err.field(), Some("Shape::Tail"));
    assert_eq!(
        err.to_string(),
        "Read beyond file while parsing Shape::Tail (00000001)"
    );
    assert_eq!(cursor.bit_position(), 12);

    // The remaining four bits are still readable.
    let tail = parse_ubits(&mut cursor, 4, CODE, &root.child("Tail")).expect("decode failed");
    assert_eq!(tail.value(), 0xD);
}

#[test]
fn test_byte_reads_align_first() {
    let data = [0b1110_0000, 0x01, 0x02, 0x03, 0xFF, 0xFF, 0xFF];
    let mut cursor = BitCursor::new(&data);
    let root = FieldPath::root("Record").expect("valid root");

    let flag = parse_flag(&mut cursor, CODE, &root.child("Flag")).expect("decode failed");
    let count = parse_u24(&mut cursor, CODE, &root.child("Count")).expect("decode failed");
    let delta = parse_i24(&mut cursor, CODE, &root.child("Delta")).expect("decode failed");

    assert!(flag.value());
    assert_eq!(count.value(), 0x030201);
    assert_eq!(count.bit_position(), 8);
    assert_eq!(delta.value(), -1);
    // Padding bits belong to no element.
    assert_eq!(add_bit_lengths(&[&flag, &count, &delta]), 49);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_strings() {
    let data = b"SWF\0rest";
    let mut cursor = BitCursor::new(data);
    let root = FieldPath::root("Name").expect("valid root");

    let name = parse_cstring(&mut cursor, CODE, &root).expect("decode failed");
    assert_eq!(name.bytes(), b"SWF");
    assert_eq!(name.bit_length(), 32);

    let rest = parse_string(&mut cursor, 4, CODE, &root).expect("decode failed");
    assert_eq!(rest.to_string_lossy(), "rest");
    assert_eq!(rest.bit_position(), 32);
}

#[test]
fn test_half_float() {
    // 1.0 in binary16 is 0x3C00, stored little-endian
    let data = [0x00, 0x3C];
    let mut cursor = BitCursor::new(&data);
    let root = FieldPath::root("Value").expect("valid root");

    let value = parse_f16(&mut cursor, CODE, &root).expect("decode failed");
    assert_eq!(value.value(), 1.0);
}

#[test]
fn test_cursor_at_offset() {
    let data = [0x00, 0x00, 0x7F];
    let mut cursor = BitCursor::at(&data, 2).expect("offset in range");
    let root = FieldPath::root("Value").expect("valid root");

    let value = parse_u8(&mut cursor, CODE, &root).expect("decode failed");
    assert_eq!(value.value(), 0x7F);
    assert_eq!(value.bit_position(), 16);

    let err = BitCursor::at(&data, 4).unwrap_err();
    assert!(matches!(err, SwfError::InvalidArgument { argument: "byte_offset", .. }));
}
