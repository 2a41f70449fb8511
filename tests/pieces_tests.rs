//! Piece catalog tests

use blockfall::core::{get_shape, Shape, CATALOG};
use blockfall::types::PieceKind;

fn cells(shape: &Shape) -> Vec<(u8, u8)> {
    shape.cells().to_vec()
}

#[test]
fn test_catalog_has_seven_distinct_shapes() {
    assert_eq!(CATALOG.len(), 7);
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_catalog_order_matches_kinds() {
    for kind in PieceKind::ALL {
        assert_eq!(get_shape(kind), CATALOG[kind.index()]);
    }
}

#[test]
fn test_spawn_masks() {
    assert_eq!(cells(&get_shape(PieceKind::I)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(cells(&get_shape(PieceKind::O)), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(&get_shape(PieceKind::T)), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&get_shape(PieceKind::S)), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(&get_shape(PieceKind::Z)), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(&get_shape(PieceKind::J)), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&get_shape(PieceKind::L)), vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_o_rotation_is_fixed_point() {
    let o = get_shape(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_rotation_swaps_dimensions() {
    for shape in CATALOG {
        let r = shape.rotated();
        assert_eq!((r.width(), r.height()), (shape.height(), shape.width()));
        assert_eq!(r.cells().len(), shape.cells().len());
    }
}

#[test]
fn test_half_turn_fixes_s_but_not_t() {
    // A half turn maps S onto itself; T points the other way.
    let s = get_shape(PieceKind::S);
    assert_eq!(s.rotated().rotated(), s);

    let t = get_shape(PieceKind::T);
    assert_ne!(t.rotated().rotated(), t);
}

#[test]
fn test_four_rotations_identity_for_custom_masks() {
    let masks: [&[&[u8]]; 3] = [
        &[&[1]],
        &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]],
        &[&[1, 0], &[1, 1], &[0, 1], &[0, 1]],
    ];
    for rows in masks {
        let shape = Shape::from_mask(rows).unwrap();
        assert_eq!(shape.rotated().rotated().rotated().rotated(), shape);
    }
}
