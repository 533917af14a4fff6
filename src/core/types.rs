//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for inventory items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// A grid cell coordinate
///
/// Used both for shape-local offsets (normalized shapes keep these
/// non-negative) and for absolute grid positions once an anchor is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Ord for Cell {
    /// Row-major ordering: rows first, then columns within a row.
    ///
    /// This ordering drives every deterministic cell walk in the engine
    /// (auto-placement scans, adjacency resolution).
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors (flood-fill connectivity)
    pub fn orthogonal_neighbors(&self) -> [Cell; 4] {
        [
            Cell::new(self.x, self.y - 1),
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x + 1, self.y),
        ]
    }
}

impl std::ops::Add for Cell {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Cell {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Skill type vocabulary
///
/// Fixed set shared by base skills and enhancement filters. Negative damage
/// on a skill means healing regardless of type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Physical,
    Magic,
    Ranged,
    Defensive,
    Healing,
}

impl SkillType {
    /// Get all skill types
    pub fn all() -> &'static [SkillType] {
        &[
            SkillType::Physical,
            SkillType::Magic,
            SkillType::Ranged,
            SkillType::Defensive,
            SkillType::Healing,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SkillType::Physical => "physical",
            SkillType::Magic => "magic",
            SkillType::Ranged => "ranged",
            SkillType::Defensive => "defensive",
            SkillType::Healing => "healing",
        }
    }
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
