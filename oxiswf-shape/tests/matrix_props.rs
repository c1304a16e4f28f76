//! Property tests for matrix bit accounting.

mod common;

use common::BitPacker;
use oxiswf_core::{BitCursor, FieldPath, FileElement};
use oxiswf_shape::Matrix;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct MatrixInput {
    scale: Option<(u8, i32, i32)>,
    rotate: Option<(u8, i32, i32)>,
    translate: (u8, i32, i32),
}

fn arb_component() -> impl Strategy<Value = (u8, i32, i32)> {
    (0u8..32, any::<i32>(), any::<i32>())
}

fn arb_matrix() -> impl Strategy<Value = MatrixInput> {
    (
        prop::option::of(arb_component()),
        prop::option::of(arb_component()),
        arb_component(),
    )
        .prop_map(|(scale, rotate, translate)| MatrixInput {
            scale,
            rotate,
            translate,
        })
}

fn pack(input: &MatrixInput) -> (Vec<u8>, u64) {
    let mut p = BitPacker::new();
    let mut bits = 0u64;

    for component in [input.scale, input.rotate] {
        p.flag(component.is_some());
        bits += 1;
        if let Some((width, a, b)) = component {
            p.bits(width as u32, 5).sbits(a, width).sbits(b, width);
            bits += 5 + 2 * width as u64;
        }
    }
    let (width, x, y) = input.translate;
    p.bits(width as u32, 5).sbits(x, width).sbits(y, width);
    bits += 5 + 2 * width as u64;

    (p.finish(), bits)
}

proptest! {
    #[test]
    fn prop_matrix_length_is_sum_of_fields(input in arb_matrix()) {
        let (data, bits) = pack(&input);
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Matrix").expect("valid root");

        let matrix = Matrix::parse(&mut cursor, &root).expect("decode failed");

        prop_assert_eq!(matrix.bit_length(), bits);
        prop_assert_eq!(matrix.bit_position(), 0);
        prop_assert_eq!(matrix.scale_x().is_some(), input.scale.is_some());
        prop_assert_eq!(matrix.rotate_skew1().is_some(), input.rotate.is_some());
        prop_assert_eq!(cursor.bit_position(), bits.div_ceil(8) * 8);
    }

    #[test]
    fn prop_matrix_fields_are_contiguous(input in arb_matrix()) {
        let (data, _) = pack(&input);
        let mut cursor = BitCursor::new(&data);
        let root = FieldPath::root("Matrix").expect("valid root");

        let matrix = Matrix::parse(&mut cursor, &root).expect("decode failed");

        let mut ends = vec![matrix.has_scale().bit_end()];
        if let (Some(n), Some(y)) = (matrix.n_scale_bits(), matrix.scale_y()) {
            prop_assert_eq!(n.bit_position(), ends[ends.len() - 1]);
            ends.push(y.bit_end());
        }
        prop_assert_eq!(matrix.has_rotate().bit_position(), ends[ends.len() - 1]);
        prop_assert_eq!(matrix.translate_y().bit_end(), matrix.bit_end());
    }

    #[test]
    fn prop_truncated_matrix_fails_cleanly(input in arb_matrix(), cut in 0usize..8) {
        let (data, _) = pack(&input);
        let cut = cut.min(data.len().saturating_sub(1));
        let short = &data[..cut];
        let mut cursor = BitCursor::new(short);
        let root = FieldPath::root("Matrix").expect("valid root");

        if let Err(err) = Matrix::parse(&mut cursor, &root) {
            prop_assert!(err.is_truncated());
            prop_assert!(err.field().is_some_and(|f| f.starts_with("Matrix::")));
        }
    }
}
