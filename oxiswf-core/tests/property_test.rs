//! Property tests for bit-level decoding.

use oxiswf_core::prelude::*;
use proptest::prelude::*;

const CODE: ErrorCode = ErrorCode(6);

/// Packs `(value, width)` fields MSB-first, zero-padding the final byte.
fn pack(fields: &[(u32, u8)]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut acc = 0u8;
    let mut used = 0u8;

    for &(value, width) in fields {
        for i in (0..width).rev() {
            let bit = ((value as u64 >> i) & 1) as u8;
            acc |= bit << (7 - used);
            used += 1;
            if used == 8 {
                out.push(acc);
                acc = 0;
                used = 0;
            }
        }
    }
    if used > 0 {
        out.push(acc);
    }
    out
}

fn mask(value: u32, width: u8) -> u32 {
    if width == 0 {
        0
    } else if width == 32 {
        value
    } else {
        value & ((1u32 << width) - 1)
    }
}

fn arb_fields() -> impl Strategy<Value = Vec<(u32, u8)>> {
    prop::collection::vec((any::<u32>(), 0u8..=32), 0..24)
        .prop_map(|fields| fields.into_iter().map(|(v, w)| (mask(v, w), w)).collect())
}

proptest! {
    #[test]
    fn prop_reads_advance_by_width(fields in arb_fields()) {
        let data = pack(&fields);
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Field").expect("valid root");

        let mut expected_position = 0u64;
        for (index, &(value, width)) in fields.iter().enumerate() {
            let field = root.indexed("Bits", index);
            let decoded = parse_ubits(&mut cursor, width, CODE, &field).expect("decode failed");

            prop_assert_eq!(decoded.value(), value);
            prop_assert_eq!(decoded.bit_position(), expected_position);
            expected_position += width as u64;
            prop_assert_eq!(cursor.bit_position(), expected_position);
        }
    }

    #[test]
    fn prop_signed_fields_sign_extend(value in any::<i32>(), width in 1u8..=32) {
        let min = -(1i64 << (width - 1));
        let max = (1i64 << (width - 1)) - 1;
        let value = (value as i64).clamp(min, max) as i32;
        let data = pack(&[(mask(value as u32, width), width)]);
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Delta").expect("valid root");

        let decoded = parse_sbits(&mut cursor, width, CODE, &root).expect("decode failed");
        prop_assert_eq!(decoded.value(), value);
    }

    #[test]
    fn prop_align_is_idempotent(data in prop::collection::vec(any::<u8>(), 1..16), skip in 0u8..8) {
        let mut cursor = BitCursor::new(&data);
        cursor.read_ubits(skip).expect("decode failed");

        cursor.align();
        let once = cursor.bit_position();
        cursor.align();

        prop_assert_eq!(cursor.bit_position(), once);
        prop_assert_eq!(once % 8, 0);
    }

    #[test]
    fn prop_failed_read_keeps_position(data in prop::collection::vec(any::<u8>(), 0..4), skip in 0u8..8) {
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Field").expect("valid root");
        if cursor.has_bits_left(skip as u64) {
            cursor.read_ubits(skip).expect("decode failed");
        }
        let before = cursor.bit_position();
        let overshoot = (cursor.bits_left() + 1).min(32) as u8;

        if !cursor.has_bits_left(overshoot as u64) {
            let err = parse_ubits(&mut cursor, overshoot, CODE, &root).unwrap_err();
            prop_assert!(err.is_truncated());
            prop_assert_eq!(cursor.bit_position(), before);
        }
    }
}
