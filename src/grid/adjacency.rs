//! Adjacency resolution for enhancement eligibility
//!
//! Two placed items are adjacent when any cell of one touches any cell of
//! the other in one of the 8 surrounding directions. Enhancement application
//! order follows neighbor order, so the discovery order here is a contract,
//! not an implementation detail.

use crate::core::types::{Cell, ItemId};
use crate::grid::OccupancyGrid;

/// Probe order around each occupied cell: orthogonals first, then diagonals
const DIRECTIONS: [Cell; 8] = [
    Cell { x: -1, y: 0 },
    Cell { x: 1, y: 0 },
    Cell { x: 0, y: -1 },
    Cell { x: 0, y: 1 },
    Cell { x: -1, y: -1 },
    Cell { x: 1, y: -1 },
    Cell { x: -1, y: 1 },
    Cell { x: 1, y: 1 },
];

/// Distinct placed items sharing 8-directional adjacency with `id`
///
/// Deterministic contract: the item's occupied cells are walked in sorted
/// row-major order, the 8 directions probed in a fixed order, and each
/// neighbor is collected once, at first discovery. Re-running on an
/// unchanged grid always yields the same sequence.
///
/// Empty for an unplaced or unknown item.
pub fn neighbors_of(grid: &OccupancyGrid, id: ItemId) -> Vec<ItemId> {
    let Some(item) = grid.item(id) else {
        return Vec::new();
    };
    if !item.is_placed() {
        return Vec::new();
    }

    // Shape cells are stored sorted row-major; translation preserves that.
    let occupied = item.occupied_cells();

    let mut neighbors: Vec<ItemId> = Vec::new();
    for cell in occupied {
        for dir in DIRECTIONS {
            let probe = cell + dir;
            if let Some(other) = grid.item_at(probe) {
                if other != id && !neighbors.contains(&other) {
                    neighbors.push(other);
                }
            }
        }
    }

    neighbors
}
