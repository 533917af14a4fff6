//! Occupancy grid: the single owner of cell-level placement state
//!
//! A grid is one character's inventory: a bounded cell matrix where every
//! cell records at most one owning item, plus the items themselves (placed
//! or not). All placement goes through the grid so the occupancy invariant
//! has exactly one writer.

pub mod adjacency;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::config;
use crate::core::error::PlacementError;
use crate::core::types::{Cell, ItemId};
use crate::item::Item;
use crate::shape::Shape;

/// A bounded cell matrix with item ownership
///
/// Items are iterated in insertion order everywhere (skill synthesis, debug
/// dumps), which keeps derived output reproducible for an unchanged grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyGrid {
    cols: usize,
    rows: usize,
    /// Row-major cell -> owner map; `None` = free
    cells: Vec<Option<ItemId>>,
    items: AHashMap<ItemId, Item>,
    /// Insertion order of item ids; the deterministic walk order
    order: Vec<ItemId>,
}

impl OccupancyGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
            items: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Grid sized from the global engine config
    pub fn with_default_size() -> Self {
        let cfg = config();
        Self::new(cfg.grid_cols, cfg.grid_rows)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.cols && (cell.y as usize) < self.rows
    }

    fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.cols + cell.x as usize
    }

    // === ITEM MANAGEMENT ===

    /// Register an item with this inventory (unplaced)
    ///
    /// Any anchor the item carried elsewhere is discarded; placement in this
    /// grid only happens through [`place`](Self::place). Re-adding an id that
    /// is already registered replaces the stored item, unplacing it first so
    /// no cell keeps pointing at the old footprint.
    pub fn add_item(&mut self, mut item: Item) -> ItemId {
        item.anchor = None;
        let id = item.id;
        self.remove(id);
        if self.items.insert(id, item).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove an item from the inventory entirely, clearing its cells
    pub fn take_item(&mut self, id: ItemId) -> Option<Item> {
        self.remove(id);
        self.order.retain(|&other| other != id);
        self.items.remove(&id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// All items in insertion order, placed or not
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Placed items in insertion order
    pub fn placed_items(&self) -> impl Iterator<Item = &Item> {
        self.items().filter(|item| item.is_placed())
    }

    pub fn item_count(&self) -> usize {
        self.order.len()
    }

    pub fn placed_count(&self) -> usize {
        self.placed_items().count()
    }

    // === PLACEMENT ===

    /// Would `shape` fit at `anchor` with no cell conflicts at all?
    ///
    /// No self-exclusion; used for auto-placement of not-yet-registered
    /// shapes.
    pub fn fits(&self, shape: &Shape, anchor: Cell) -> bool {
        shape.cells().iter().all(|&offset| {
            let cell = offset + anchor;
            self.in_bounds(cell) && self.cells[self.index(cell)].is_none()
        })
    }

    /// Could the registered item be placed (or re-placed) at `anchor`?
    pub fn can_place(&self, id: ItemId, anchor: Cell) -> bool {
        match self.items.get(&id) {
            Some(item) => self.can_place_shape(id, &item.shape, anchor),
            None => false,
        }
    }

    /// Could `shape` sit at `anchor`, ignoring cells the item itself owns?
    ///
    /// The self-exclusion supports re-placing an item over its current
    /// position and previewing a rotated footprint in place.
    pub fn can_place_shape(&self, id: ItemId, shape: &Shape, anchor: Cell) -> bool {
        self.validate_placement(id, shape, anchor).is_ok()
    }

    fn validate_placement(
        &self,
        id: ItemId,
        shape: &Shape,
        anchor: Cell,
    ) -> Result<(), PlacementError> {
        for &offset in shape.cells() {
            let cell = offset + anchor;
            if !self.in_bounds(cell) {
                return Err(PlacementError::OutOfBounds(cell));
            }
            match self.cells[self.index(cell)] {
                Some(occupant) if occupant != id => {
                    return Err(PlacementError::Overlap { cell, occupant });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Place (or move) an item so its shape origin sits at `anchor`
    ///
    /// Atomic: the placement is validated in full before any cell is
    /// touched, so a failure leaves both grid and item exactly as they were.
    pub fn place(&mut self, id: ItemId, anchor: Cell) -> Result<(), PlacementError> {
        let item = self
            .items
            .get(&id)
            .ok_or(PlacementError::UnknownItem(id))?;
        let shape = item.shape.clone();

        self.validate_placement(id, &shape, anchor)?;

        // Commit: clear the previous footprint, write the new one
        if let Some(previous) = item.anchor {
            for offset in shape.cells() {
                let index = self.index(*offset + previous);
                self.cells[index] = None;
            }
        }
        for offset in shape.cells() {
            let index = self.index(*offset + anchor);
            self.cells[index] = Some(id);
        }
        if let Some(item) = self.items.get_mut(&id) {
            item.anchor = Some(anchor);
            debug!(item = %item.name, %anchor, "placed item");
        }

        Ok(())
    }

    /// Unplace an item, clearing all cells it owns
    ///
    /// No-op (not an error) when the item is unknown or already unplaced.
    pub fn remove(&mut self, id: ItemId) {
        let Some(item) = self.items.get(&id) else {
            return;
        };
        let Some(anchor) = item.anchor else {
            return;
        };

        let cells = item.shape.translated(anchor);
        for cell in cells {
            let index = self.index(cell);
            self.cells[index] = None;
        }
        if let Some(item) = self.items.get_mut(&id) {
            item.anchor = None;
            debug!(item = %item.name, "removed item from grid");
        }
    }

    /// Unplace every item; the inventory keeps them all
    pub fn clear(&mut self) {
        let ids: Vec<ItemId> = self.order.clone();
        for id in ids {
            self.remove(id);
        }
    }

    // === QUERIES ===

    /// Owner of a cell, O(1)
    pub fn item_at(&self, cell: Cell) -> Option<ItemId> {
        if self.in_bounds(cell) {
            self.cells[self.index(cell)]
        } else {
            None
        }
    }

    /// Distinct placed items sharing 8-directional adjacency with this item
    pub fn items_adjacent_to(&self, id: ItemId) -> Vec<ItemId> {
        adjacency::neighbors_of(self, id)
    }

    /// First anchor where the shape fits, scanning row-major
    ///
    /// The scan order (left-to-right, top-to-bottom) is a contract:
    /// auto-placement is reproducible given identical occupancy.
    pub fn first_free_anchor(&self, shape: &Shape) -> Option<Cell> {
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                let anchor = Cell::new(x, y);
                if self.fits(shape, anchor) {
                    return Some(anchor);
                }
            }
        }
        None
    }

    /// Is there any anchor at which this shape fits?
    pub fn has_room_for(&self, shape: &Shape) -> bool {
        self.first_free_anchor(shape).is_some()
    }

    /// ASCII dump of occupancy: `.` for free cells, per-item letters
    pub fn to_ascii(&self) -> String {
        let letters: Vec<(ItemId, char)> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (b'A' + (i % 26) as u8) as char))
            .collect();

        let mut lines = Vec::with_capacity(self.rows);
        for y in 0..self.rows as i32 {
            let line: String = (0..self.cols as i32)
                .map(|x| match self.item_at(Cell::new(x, y)) {
                    Some(id) => letters
                        .iter()
                        .find(|(other, _)| *other == id)
                        .map(|&(_, ch)| ch)
                        .unwrap_or('?'),
                    None => '.',
                })
                .collect();
            lines.push(line);
        }
        lines.join("\n")
    }
}
