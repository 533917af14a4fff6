//! Integration tests for cell-exact placement on the occupancy grid

use relicgrid::core::error::PlacementError;
use relicgrid::core::types::Cell;
use relicgrid::data::TemplateRegistry;
use relicgrid::grid::OccupancyGrid;
use relicgrid::item::Item;
use relicgrid::shape::generators::Corner;
use relicgrid::shape::Shape;

fn block(name: &str, w: u32, h: u32) -> Item {
    Item::new(name, "test", "#777777", Shape::rectangle(w, h).unwrap())
}

/// Test 1: Overlapping footprints are rejected with the exact colliding cell
#[test]
fn test_overlap_reports_colliding_cell() {
    let mut grid = OccupancyGrid::new(10, 8);
    let first = grid.add_item(block("First", 2, 2));
    let second = grid.add_item(block("Second", 2, 2));

    grid.place(first, Cell::new(0, 0)).unwrap();
    let err = grid.place(second, Cell::new(1, 1)).unwrap_err();

    match err {
        PlacementError::Overlap { cell, occupant } => {
            assert_eq!(cell, Cell::new(1, 1));
            assert_eq!(occupant, first);
        }
        other => panic!("expected overlap, got {other:?}"),
    }
}

/// Test 2: Interlocking L-pieces pack where bounding boxes would collide
#[test]
fn test_interlocking_l_pieces_both_place() {
    let mut grid = OccupancyGrid::new(10, 8);
    let tl = grid.add_item(Item::new(
        "Hook",
        "test",
        "#777777",
        Shape::l_shape(3, Corner::TopLeft).unwrap(),
    ));
    let br = grid.add_item(Item::new(
        "Counterhook",
        "test",
        "#777777",
        Shape::l_shape(3, Corner::BottomRight).unwrap(),
    ));

    grid.place(tl, Cell::new(0, 0)).unwrap();
    grid.place(br, Cell::new(1, 0)).unwrap();

    // Bounding boxes span the same 3x3 region; cells interleave
    assert_eq!(grid.item_at(Cell::new(0, 0)), Some(tl));
    assert_eq!(grid.item_at(Cell::new(1, 0)), Some(br));
    assert_eq!(grid.item_at(Cell::new(3, 2)), Some(br));
    assert_eq!(grid.item_at(Cell::new(2, 2)), Some(tl));
}

/// Test 3: Any out-of-grid cell rejects the whole placement
#[test]
fn test_out_of_bounds_rejected() {
    let mut grid = OccupancyGrid::new(4, 4);
    let tall = grid.add_item(block("Tall", 1, 3));

    let err = grid.place(tall, Cell::new(0, 2)).unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds(_)));
    assert!(!grid.item(tall).unwrap().is_placed());
}

/// Test 4: A failed placement mutates nothing
#[test]
fn test_failed_placement_is_atomic() {
    let mut grid = OccupancyGrid::new(10, 8);
    let anchor_item = grid.add_item(block("Anchor", 2, 2));
    let intruder = grid.add_item(block("Intruder", 2, 2));
    grid.place(anchor_item, Cell::new(2, 2)).unwrap();

    let before = grid.to_ascii();
    assert!(grid.place(intruder, Cell::new(3, 3)).is_err());

    assert_eq!(grid.to_ascii(), before);
    assert!(!grid.item(intruder).unwrap().is_placed());
    assert_eq!(grid.placed_count(), 1);
}

/// Test 5: Re-placing an item moves it, clearing the old footprint
#[test]
fn test_replace_clears_old_footprint() {
    let mut grid = OccupancyGrid::new(10, 8);
    let piece = grid.add_item(block("Piece", 2, 2));

    grid.place(piece, Cell::new(0, 0)).unwrap();
    grid.place(piece, Cell::new(5, 5)).unwrap();

    assert_eq!(grid.item_at(Cell::new(0, 0)), None);
    assert_eq!(grid.item_at(Cell::new(5, 5)), Some(piece));
    assert_eq!(grid.placed_count(), 1);
}

/// Test 6: A failed move leaves the item at its old position
#[test]
fn test_failed_move_keeps_old_position() {
    let mut grid = OccupancyGrid::new(10, 8);
    let piece = grid.add_item(block("Piece", 2, 2));
    let wall = grid.add_item(block("Wall", 2, 2));
    grid.place(piece, Cell::new(0, 0)).unwrap();
    grid.place(wall, Cell::new(4, 4)).unwrap();

    assert!(grid.place(piece, Cell::new(3, 3)).is_err());

    assert_eq!(grid.item_at(Cell::new(0, 0)), Some(piece));
    assert_eq!(grid.item(piece).unwrap().anchor, Some(Cell::new(0, 0)));
}

/// Test 7: Remove then place back restores the identical layout
#[test]
fn test_remove_and_replace_round_trip() {
    let mut grid = OccupancyGrid::new(10, 8);
    let a = grid.add_item(block("A", 2, 2));
    let b = grid.add_item(block("B", 1, 3));
    grid.place(a, Cell::new(0, 0)).unwrap();
    grid.place(b, Cell::new(3, 1)).unwrap();
    let before = grid.to_ascii();

    grid.remove(b);
    assert_eq!(grid.item_at(Cell::new(3, 1)), None);
    assert!(!grid.item(b).unwrap().is_placed());

    grid.place(b, Cell::new(3, 1)).unwrap();
    assert_eq!(grid.to_ascii(), before);
}

/// Test 8: Removing an unplaced item is a no-op
#[test]
fn test_remove_unplaced_is_noop() {
    let mut grid = OccupancyGrid::new(10, 8);
    let loose = grid.add_item(block("Loose", 1, 1));

    grid.remove(loose);

    assert!(grid.item(loose).is_some());
    assert_eq!(grid.placed_count(), 0);
}

/// Test 9: The free-anchor scan is row-major and skips occupied regions
#[test]
fn test_first_free_anchor_scans_row_major() {
    let mut grid = OccupancyGrid::new(5, 5);
    let bar = grid.add_item(block("Bar", 3, 1));
    grid.place(bar, Cell::new(0, 0)).unwrap();

    let square = Shape::rectangle(2, 2).unwrap();
    // Row 0 has only cols 3-4 free; a 2x2 fits there
    assert_eq!(grid.first_free_anchor(&square), Some(Cell::new(3, 0)));

    let wide = Shape::rectangle(4, 2).unwrap();
    // Too wide for the gap; drops to the next row
    assert_eq!(grid.first_free_anchor(&wide), Some(Cell::new(0, 1)));
}

/// Test 10: clear() unplaces everything but keeps the items registered
#[test]
fn test_clear_keeps_items() {
    let mut grid = OccupancyGrid::new(10, 8);
    let a = grid.add_item(block("A", 2, 2));
    let b = grid.add_item(block("B", 1, 1));
    grid.place(a, Cell::new(0, 0)).unwrap();
    grid.place(b, Cell::new(5, 5)).unwrap();

    grid.clear();

    assert_eq!(grid.placed_count(), 0);
    assert_eq!(grid.item_count(), 2);
    assert!(grid.item(a).is_some());
}

/// Test 11: Starter catalog items place onto the default grid end to end
#[test]
fn test_catalog_items_place_on_default_grid() {
    let registry = TemplateRegistry::builtin();
    let mut grid = OccupancyGrid::with_default_size();

    let sword = grid.add_item(registry.instantiate("Sword").unwrap());
    let armor = grid.add_item(registry.instantiate("Armor").unwrap());
    let gem = grid.add_item(registry.instantiate("Fire Gem").unwrap());

    grid.place(sword, Cell::new(0, 0)).unwrap();
    grid.place(armor, Cell::new(2, 0)).unwrap();
    grid.place(gem, Cell::new(1, 0)).unwrap();

    assert_eq!(grid.placed_count(), 3);
    assert_eq!(grid.item_at(Cell::new(3, 2)), Some(armor));
    assert_eq!(grid.item_at(Cell::new(1, 0)), Some(gem));
}
