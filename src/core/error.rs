//! Error taxonomy for shape construction and placement
//!
//! All failures are ordinary result values so the UI layer can show
//! non-fatal feedback (a red placement preview) without unwinding. A failed
//! operation leaves both the grid and the item unchanged.

use thiserror::Error;

use crate::core::types::{Cell, ItemId};

/// Why a cell set is not a valid shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape is empty")]
    Empty,

    #[error("shape contains duplicate cell {0}")]
    DuplicateCell(Cell),

    #[error("shape is not 4-connected")]
    Disconnected,
}

/// Why an item could not be placed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {cell} is already occupied by {occupant:?}")]
    Overlap { cell: Cell, occupant: ItemId },

    #[error("item {0:?} is not registered in this grid")]
    UnknownItem(ItemId),
}

/// Umbrella error for callers that drive the whole engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
