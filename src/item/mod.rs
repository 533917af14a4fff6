//! Inventory items
//!
//! An item couples identity and display metadata with a polyomino footprint
//! and the two rule sets skill synthesis consumes: base skills it grants
//! while placed, and enhancement rules it offers to spatial neighbors.
//!
//! Items never mutate grid state themselves - the grid owns occupancy, the
//! item only records where it was anchored. That keeps one owner per cell.

use serde::{Deserialize, Serialize};

use crate::core::types::{Cell, ItemId};
use crate::shape::Shape;
use crate::skills::{BaseSkill, EnhancementRule};

/// An inventory entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity; fresh per instantiation, never reused by clones
    pub id: ItemId,
    /// Display name (also the provenance label in derived skills)
    pub name: String,
    /// Authoring type tag ("weapon", "armor", "gem", ...) - opaque here
    pub kind: String,
    /// Display color, opaque to the engine
    pub color: String,
    /// Footprint on the grid
    pub shape: Shape,
    /// Anchor cell when placed, `None` while unplaced
    pub anchor: Option<Cell>,
    /// Skills this item contributes while placed
    pub base_skills: Vec<BaseSkill>,
    /// Rules this item offers to adjacent items while placed
    pub enhancements: Vec<EnhancementRule>,
}

impl Item {
    /// Create a new unplaced item
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        color: impl Into<String>,
        shape: Shape,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: kind.into(),
            color: color.into(),
            shape,
            anchor: None,
            base_skills: Vec::new(),
            enhancements: Vec::new(),
        }
    }

    pub fn with_base_skills(mut self, skills: Vec<BaseSkill>) -> Self {
        self.base_skills = skills;
        self
    }

    pub fn with_enhancements(mut self, enhancements: Vec<EnhancementRule>) -> Self {
        self.enhancements = enhancements;
        self
    }

    pub fn is_placed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Absolute cells this item covers; empty while unplaced
    pub fn occupied_cells(&self) -> Vec<Cell> {
        match self.anchor {
            Some(anchor) => self.shape.translated(anchor),
            None => Vec::new(),
        }
    }

    /// Duplicate this item as a fresh unplaced instance
    ///
    /// Used when instantiating a template into an inventory: same shape,
    /// skills and enhancements, new identity, no placement.
    pub fn clone_unplaced(&self) -> Self {
        Self {
            id: ItemId::new(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            color: self.color.clone(),
            shape: self.shape.clone(),
            anchor: None,
            base_skills: self.base_skills.clone(),
            enhancements: self.enhancements.clone(),
        }
    }
}
