//! Canonical polyomino shapes
//!
//! A shape is a normalized, duplicate-free, 4-connected set of cell offsets.
//! The cell set is the single source of truth for collision - the bounding
//! box is derived and never authoritative, so two interlocking L-pieces with
//! overlapping boxes can still coexist on a grid.

pub mod generators;
pub mod library;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::ShapeError;
use crate::core::types::Cell;
use generators::{Corner, Facing};

/// Bounding box of a cell set
///
/// Width and height are derived measures for layout and rendering. Collision
/// always goes through [`Shape::overlaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub width: i32,
    pub height: i32,
}

/// A validated polyomino footprint
///
/// Invariants (enforced at construction, preserved by every transform):
/// - at least one cell
/// - no duplicate offsets
/// - every cell reachable from every other via orthogonal steps
/// - normalized so `min_x == 0` and `min_y == 0`
///
/// Cells are kept in sorted row-major order so identical shapes compare and
/// serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// Build a shape from raw cells, normalizing then validating
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, ShapeError> {
        let mut cells = normalize(cells);
        validate(&cells)?;
        cells.sort();
        Ok(Self { cells })
    }

    // === GENERATOR CONSTRUCTORS ===

    /// Solid `width x height` rectangle
    pub fn rectangle(width: u32, height: u32) -> Result<Self, ShapeError> {
        Self::from_cells(generators::rectangle(width, height))
    }

    /// L-piece with both arms of `arm_length`, corner in the given quadrant
    pub fn l_shape(arm_length: u32, corner: Corner) -> Result<Self, ShapeError> {
        Self::from_cells(generators::l_shape(arm_length, corner))
    }

    /// T-piece with a bar of `top_width` and a stem of `stem_length`
    pub fn t_shape(stem_length: u32, top_width: u32, facing: Facing) -> Result<Self, ShapeError> {
        Self::from_cells(generators::t_shape(stem_length, top_width, facing))
    }

    /// U-piece opening toward `facing`
    pub fn u_shape(height: u32, width: u32, facing: Facing) -> Result<Self, ShapeError> {
        Self::from_cells(generators::u_shape(height, width, facing))
    }

    /// Plus/cross with arms of `arm_length` around a center cell
    pub fn plus_shape(arm_length: u32) -> Result<Self, ShapeError> {
        Self::from_cells(generators::plus_shape(arm_length))
    }

    /// Z-piece (or its mirrored S twin)
    pub fn z_shape(width: u32, height: u32, mirrored: bool) -> Result<Self, ShapeError> {
        Self::from_cells(generators::z_shape(width, height, mirrored))
    }

    /// Diamond of the given size (Manhattan-distance disc)
    pub fn diamond(size: u32) -> Result<Self, ShapeError> {
        Self::from_cells(generators::diamond(size))
    }

    /// Hollow rectangle with walls `thickness` cells thick
    pub fn frame(width: u32, height: u32, thickness: u32) -> Result<Self, ShapeError> {
        Self::from_cells(generators::frame(width, height, thickness))
    }

    /// Shape from an ASCII pattern, one string per row
    ///
    /// `X`, `x` and `1` mark filled cells; anything else is empty.
    pub fn from_text_pattern<S: AsRef<str>>(lines: &[S]) -> Result<Self, ShapeError> {
        Self::from_cells(generators::from_text_pattern(lines))
    }

    // === QUERIES ===

    /// Shape-local cell offsets in sorted row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Does the shape cover this local offset?
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Bounding box (normalized shapes always have `min_x == min_y == 0`)
    pub fn bounds(&self) -> Bounds {
        bounds(&self.cells)
    }

    /// Absolute cells covered when the shape's origin sits at `anchor`
    pub fn translated(&self, anchor: Cell) -> Vec<Cell> {
        self.cells.iter().map(|&c| c + anchor).collect()
    }

    /// Cell-exact conflict test between two anchored shapes
    ///
    /// The single source of truth for "do these two footprints collide".
    /// Callers must never approximate this with bounding-box tests.
    pub fn overlaps(a: &Shape, anchor_a: Cell, b: &Shape, anchor_b: Cell) -> bool {
        let occupied: AHashSet<Cell> = a.cells.iter().map(|&c| c + anchor_a).collect();
        b.cells.iter().any(|&c| occupied.contains(&(c + anchor_b)))
    }

    // === TRANSFORMS ===

    /// Rotate 90 degrees clockwise: `(x, y) -> (max_y - y, x)`
    ///
    /// Four successive clockwise rotations reproduce the original shape.
    pub fn rotate_cw(&self) -> Shape {
        let max_y = self.bounds().max_y;
        self.transformed(|c| Cell::new(max_y - c.y, c.x))
    }

    /// Rotate 90 degrees counter-clockwise: `(x, y) -> (y, max_x - x)`
    pub fn rotate_ccw(&self) -> Shape {
        let max_x = self.bounds().max_x;
        self.transformed(|c| Cell::new(c.y, max_x - c.x))
    }

    /// Reflect across the vertical axis
    pub fn mirror_horizontal(&self) -> Shape {
        let max_x = self.bounds().max_x;
        self.transformed(|c| Cell::new(max_x - c.x, c.y))
    }

    /// Reflect across the horizontal axis
    pub fn mirror_vertical(&self) -> Shape {
        let max_y = self.bounds().max_y;
        self.transformed(|c| Cell::new(c.x, max_y - c.y))
    }

    /// Apply a cell bijection and re-canonicalize
    ///
    /// Rotations and reflections preserve cell count, distinctness and
    /// connectivity, so re-validating is unnecessary.
    fn transformed(&self, f: impl Fn(Cell) -> Cell) -> Shape {
        let mut cells = normalize(self.cells.iter().copied().map(f).collect());
        cells.sort();
        Shape { cells }
    }

    // === DEBUG ===

    /// ASCII dump of the footprint, row per line
    pub fn to_ascii(&self, fill: char, empty: char) -> String {
        let b = self.bounds();
        let mut lines = Vec::with_capacity(b.height as usize);
        for y in b.min_y..=b.max_y {
            let line: String = (b.min_x..=b.max_x)
                .map(|x| {
                    if self.contains(Cell::new(x, y)) {
                        fill
                    } else {
                        empty
                    }
                })
                .collect();
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ascii('X', '.'))
    }
}

/// Translate cells so the minimum x and minimum y are both 0. Idempotent.
pub fn normalize(cells: Vec<Cell>) -> Vec<Cell> {
    if cells.is_empty() {
        return cells;
    }
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    cells
        .into_iter()
        .map(|c| Cell::new(c.x - min_x, c.y - min_y))
        .collect()
}

/// Check the shape invariants on a raw cell list
pub fn validate(cells: &[Cell]) -> Result<(), ShapeError> {
    if cells.is_empty() {
        return Err(ShapeError::Empty);
    }

    let mut seen: AHashSet<Cell> = AHashSet::with_capacity(cells.len());
    for &cell in cells {
        if !seen.insert(cell) {
            return Err(ShapeError::DuplicateCell(cell));
        }
    }

    // Flood fill from any one cell; all cells must be reachable through
    // orthogonal steps.
    let mut visited: AHashSet<Cell> = AHashSet::with_capacity(cells.len());
    let mut stack = vec![cells[0]];
    visited.insert(cells[0]);

    while let Some(cell) = stack.pop() {
        for neighbor in cell.orthogonal_neighbors() {
            if seen.contains(&neighbor) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    if visited.len() != cells.len() {
        return Err(ShapeError::Disconnected);
    }

    Ok(())
}

/// Bounding box of a raw cell list (zeroed when empty)
pub fn bounds(cells: &[Cell]) -> Bounds {
    if cells.is_empty() {
        return Bounds {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
            width: 0,
            height: 0,
        };
    }

    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let max_x = cells.iter().map(|c| c.x).max().unwrap_or(0);
    let max_y = cells.iter().map(|c| c.y).max().unwrap_or(0);

    Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    }
}
