//! Relicgrid - Shape-Based Inventory & Skill Synthesis Engine
//!
//! Items occupy polyomino footprints on a bounded grid; a character's usable
//! skills are never stored, they are derived from which items are placed,
//! which items touch, and the enhancement rules those neighbors contribute.

pub mod core;
pub mod data;
pub mod grid;
pub mod item;
pub mod shape;
pub mod skills;
