//! Property tests for shape generation and transformation invariants

use proptest::prelude::*;

use relicgrid::core::types::Cell;
use relicgrid::shape::generators::{Corner, Facing};
use relicgrid::shape::Shape;

fn arb_corner() -> impl Strategy<Value = Corner> {
    prop_oneof![
        Just(Corner::TopLeft),
        Just(Corner::TopRight),
        Just(Corner::BottomLeft),
        Just(Corner::BottomRight),
    ]
}

fn arb_facing() -> impl Strategy<Value = Facing> {
    prop_oneof![
        Just(Facing::Up),
        Just(Facing::Down),
        Just(Facing::Left),
        Just(Facing::Right),
    ]
}

/// Any well-parameterized generated shape
fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (1u32..=6, 1u32..=6).prop_map(|(w, h)| Shape::rectangle(w, h).unwrap()),
        (1u32..=6, arb_corner()).prop_map(|(arm, c)| Shape::l_shape(arm, c).unwrap()),
        (1u32..=4, 1u32..=5, arb_facing())
            .prop_map(|(stem, top, f)| Shape::t_shape(stem, top, f).unwrap()),
        (2u32..=5, 3u32..=6, arb_facing())
            .prop_map(|(h, w, f)| Shape::u_shape(h, w, f).unwrap()),
        (1u32..=4).prop_map(|arm| Shape::plus_shape(arm).unwrap()),
        (1u32..=5).prop_map(|size| Shape::diamond(size).unwrap()),
        (2u32..=6, 2u32..=6).prop_map(|(w, h)| Shape::frame(w, h, 1).unwrap()),
    ]
}

proptest! {
    /// Generated shapes are normalized: bounds start at the origin
    #[test]
    fn prop_generated_shapes_are_normalized(shape in arb_shape()) {
        let bounds = shape.bounds();
        prop_assert_eq!(bounds.min_x, 0);
        prop_assert_eq!(bounds.min_y, 0);
        prop_assert!(shape.cell_count() > 0);
    }

    /// Cell lists are duplicate-free and sorted row-major
    #[test]
    fn prop_cells_sorted_and_distinct(shape in arb_shape()) {
        let cells = shape.cells();
        for pair in cells.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Reconstructing a shape from its own cells is the identity
    #[test]
    fn prop_from_cells_round_trips(shape in arb_shape()) {
        let rebuilt = Shape::from_cells(shape.cells().to_vec()).unwrap();
        prop_assert_eq!(rebuilt, shape);
    }

    /// Four clockwise rotations return to the original shape
    #[test]
    fn prop_four_rotations_are_identity(shape in arb_shape()) {
        let rotated = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        prop_assert_eq!(rotated, shape);
    }

    /// A clockwise then counter-clockwise rotation cancels out
    #[test]
    fn prop_cw_then_ccw_is_identity(shape in arb_shape()) {
        prop_assert_eq!(shape.rotate_cw().rotate_ccw(), shape);
    }

    /// Mirrors are involutions
    #[test]
    fn prop_mirrors_are_involutions(shape in arb_shape()) {
        prop_assert_eq!(shape.mirror_horizontal().mirror_horizontal(), shape.clone());
        prop_assert_eq!(shape.mirror_vertical().mirror_vertical(), shape);
    }

    /// Transforms never change the number of cells
    #[test]
    fn prop_transforms_preserve_cell_count(shape in arb_shape()) {
        let n = shape.cell_count();
        prop_assert_eq!(shape.rotate_cw().cell_count(), n);
        prop_assert_eq!(shape.rotate_ccw().cell_count(), n);
        prop_assert_eq!(shape.mirror_horizontal().cell_count(), n);
        prop_assert_eq!(shape.mirror_vertical().cell_count(), n);
    }

    /// Rotation swaps the bounding box dimensions
    #[test]
    fn prop_rotation_swaps_bounds(shape in arb_shape()) {
        let before = shape.bounds();
        let after = shape.rotate_cw().bounds();
        prop_assert_eq!(after.width, before.height);
        prop_assert_eq!(after.height, before.width);
    }

    /// A shape always overlaps itself at the same anchor and never overlaps
    /// itself when shifted past its own bounding box
    #[test]
    fn prop_overlap_self_and_disjoint(shape in arb_shape(), x in 0i32..20, y in 0i32..20) {
        let anchor = Cell::new(x, y);
        prop_assert!(Shape::overlaps(&shape, anchor, &shape, anchor));

        let beyond = Cell::new(x + shape.bounds().width, y);
        prop_assert!(!Shape::overlaps(&shape, anchor, &shape, beyond));
    }

    /// Overlap is symmetric
    #[test]
    fn prop_overlap_is_symmetric(
        a in arb_shape(),
        b in arb_shape(),
        ax in 0i32..8, ay in 0i32..8,
        bx in 0i32..8, by in 0i32..8,
    ) {
        let (pa, pb) = (Cell::new(ax, ay), Cell::new(bx, by));
        prop_assert_eq!(
            Shape::overlaps(&a, pa, &b, pb),
            Shape::overlaps(&b, pb, &a, pa)
        );
    }

    /// Translation shifts every cell by exactly the anchor offset
    #[test]
    fn prop_translation_is_uniform(shape in arb_shape(), x in -5i32..10, y in -5i32..10) {
        let anchor = Cell::new(x, y);
        let translated = shape.translated(anchor);
        prop_assert_eq!(translated.len(), shape.cell_count());
        for (orig, moved) in shape.cells().iter().zip(&translated) {
            prop_assert_eq!(*moved, *orig + anchor);
        }
    }
}
