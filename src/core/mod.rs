//! Shared types, error taxonomy, and engine configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, EngineConfig};
pub use error::{EngineError, PlacementError, Result, ShapeError};
pub use types::{Cell, ItemId, SkillType};
