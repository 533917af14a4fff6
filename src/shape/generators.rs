//! Raw polyomino generators
//!
//! Each generator returns an unvalidated cell list; callers go through
//! [`Shape::from_cells`](crate::shape::Shape::from_cells) (or the `Shape`
//! constructors) to normalize and validate. Degenerate parameters (a U two
//! cells wide, a Z one cell tall) surface as `ShapeError`s there instead of
//! silently producing broken footprints.

use serde::{Deserialize, Serialize};

use crate::core::types::Cell;

/// Which quadrant an L-piece's corner sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

/// Which way a T-stem points or a U opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

/// Solid rectangle, row-major
pub fn rectangle(width: u32, height: u32) -> Vec<Cell> {
    let mut cells = Vec::with_capacity((width * height) as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            cells.push(Cell::new(x, y));
        }
    }
    cells
}

/// L-piece: a vertical arm and a horizontal arm of equal length meeting at
/// the named corner
pub fn l_shape(arm_length: u32, corner: Corner) -> Vec<Cell> {
    let arm = arm_length as i32;
    let mut cells = Vec::new();

    match corner {
        Corner::TopLeft => {
            for y in 0..arm {
                cells.push(Cell::new(0, y));
            }
            for x in 1..arm {
                cells.push(Cell::new(x, arm - 1));
            }
        }
        Corner::TopRight => {
            for y in 0..arm {
                cells.push(Cell::new(arm - 1, y));
            }
            for x in 0..arm - 1 {
                cells.push(Cell::new(x, arm - 1));
            }
        }
        Corner::BottomLeft => {
            for y in 0..arm {
                cells.push(Cell::new(0, y));
            }
            for x in 1..arm {
                cells.push(Cell::new(x, 0));
            }
        }
        Corner::BottomRight => {
            for y in 0..arm {
                cells.push(Cell::new(arm - 1, y));
            }
            for x in 0..arm - 1 {
                cells.push(Cell::new(x, 0));
            }
        }
    }

    cells
}

/// T-piece: a bar `top_width` wide with a stem `stem_length` long, stem
/// pointing away from the bar in the `facing` direction
pub fn t_shape(stem_length: u32, top_width: u32, facing: Facing) -> Vec<Cell> {
    let stem = stem_length as i32;
    let top = top_width as i32;
    let center = top / 2;
    let mut cells = Vec::new();

    match facing {
        Facing::Up => {
            for x in 0..top {
                cells.push(Cell::new(x, 0));
            }
            for y in 1..stem {
                cells.push(Cell::new(center, y));
            }
        }
        Facing::Down => {
            for y in 0..stem - 1 {
                cells.push(Cell::new(center, y));
            }
            for x in 0..top {
                cells.push(Cell::new(x, stem - 1));
            }
        }
        Facing::Left => {
            for y in 0..top {
                cells.push(Cell::new(0, y));
            }
            for x in 1..stem {
                cells.push(Cell::new(x, center));
            }
        }
        Facing::Right => {
            for x in 0..stem - 1 {
                cells.push(Cell::new(x, center));
            }
            for y in 0..top {
                cells.push(Cell::new(stem - 1, y));
            }
        }
    }

    cells
}

/// U-piece: two parallel walls joined by a base, opening toward `facing`
pub fn u_shape(height: u32, width: u32, facing: Facing) -> Vec<Cell> {
    let h = height as i32;
    let w = width as i32;
    let mut cells = Vec::new();

    match facing {
        Facing::Up => {
            for y in 0..h {
                cells.push(Cell::new(0, y));
            }
            for x in 1..w - 1 {
                cells.push(Cell::new(x, h - 1));
            }
            for y in 0..h {
                cells.push(Cell::new(w - 1, y));
            }
        }
        Facing::Down => {
            for x in 0..w {
                cells.push(Cell::new(x, 0));
            }
            for y in 1..h - 1 {
                cells.push(Cell::new(0, y));
            }
            for y in 1..h - 1 {
                cells.push(Cell::new(w - 1, y));
            }
        }
        Facing::Left => {
            for x in 0..w {
                cells.push(Cell::new(x, 0));
            }
            for y in 1..h - 1 {
                cells.push(Cell::new(w - 1, y));
            }
            for x in 0..w {
                cells.push(Cell::new(x, h - 1));
            }
        }
        Facing::Right => {
            for y in 0..h {
                cells.push(Cell::new(0, y));
            }
            for x in 1..w - 1 {
                cells.push(Cell::new(x, 0));
            }
            for x in 1..w - 1 {
                cells.push(Cell::new(x, h - 1));
            }
        }
    }

    cells
}

/// Plus/cross: horizontal and vertical bars of `2 * arm_length + 1` cells
/// crossing at the center
pub fn plus_shape(arm_length: u32) -> Vec<Cell> {
    let center = arm_length as i32;
    let span = center * 2 + 1;
    let mut cells = Vec::new();

    for x in 0..span {
        cells.push(Cell::new(x, center));
    }
    for y in 0..span {
        if y != center {
            cells.push(Cell::new(center, y));
        }
    }

    cells
}

/// Z-piece: two horizontal bars joined by an interpolated diagonal; the
/// mirrored variant is the S twin
pub fn z_shape(width: u32, height: u32, mirrored: bool) -> Vec<Cell> {
    let w = width as i32;
    let h = height as i32;
    let mut cells = Vec::new();

    for x in 0..w {
        cells.push(Cell::new(x, 0));
    }

    for y in 1..h - 1 {
        let x = ((w - 1) * y) / (h - 1);
        if mirrored {
            cells.push(Cell::new(x, y));
        } else {
            cells.push(Cell::new(w - 1 - x, y));
        }
    }

    for x in 0..w {
        cells.push(Cell::new(x, h - 1));
    }

    cells
}

/// Diamond: cells within Manhattan distance `size / 2` of the center
pub fn diamond(size: u32) -> Vec<Cell> {
    let s = size as i32;
    let center = s / 2;
    let mut cells = Vec::new();

    for y in 0..s {
        for x in 0..s {
            if (x - center).abs() + (y - center).abs() <= center {
                cells.push(Cell::new(x, y));
            }
        }
    }

    cells
}

/// Hollow rectangle with walls `thickness` cells thick
pub fn frame(width: u32, height: u32, thickness: u32) -> Vec<Cell> {
    let w = width as i32;
    let h = height as i32;
    let t = thickness as i32;
    let mut cells = Vec::new();

    // Top and bottom walls; the mirror guard keeps thin frames duplicate-free
    for y in 0..t {
        for x in 0..w {
            cells.push(Cell::new(x, y));
            if y != h - 1 - y {
                cells.push(Cell::new(x, h - 1 - y));
            }
        }
    }

    // Side walls between the horizontal ones
    for x in 0..t {
        for y in t..h - t {
            cells.push(Cell::new(x, y));
            if x != w - 1 - x {
                cells.push(Cell::new(w - 1 - x, y));
            }
        }
    }

    cells
}

/// Cells from an ASCII pattern: `X`, `x` and `1` are filled
pub fn from_text_pattern<S: AsRef<str>>(lines: &[S]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.as_ref().chars().enumerate() {
            if matches!(ch, 'X' | 'x' | '1') {
                cells.push(Cell::new(x as i32, y as i32));
            }
        }
    }
    cells
}
