//! Engine configuration with documented constants
//!
//! All gameplay-visible tuning values are collected here with explanations
//! of their purpose. Derived-skill output depends on these, so changing them
//! changes what players see.

use crate::core::types::SkillType;

/// Configuration for the inventory and skill-synthesis engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === GRID ===
    /// Default inventory width in cells
    ///
    /// Matches the character inventory panel the UI layer renders.
    pub grid_cols: usize,

    /// Default inventory height in cells
    pub grid_rows: usize,

    // === SKILL SYNTHESIS ===
    /// Floor applied to a skill's cost after enhancement deltas
    ///
    /// The original game clamped inconsistently (0 in one path, 1 in
    /// another); the engine applies this single floor everywhere.
    pub cost_floor: i32,

    /// Name of the guaranteed unarmed fallback skill
    pub fallback_skill_name: &'static str,

    /// Description of the unarmed fallback skill
    pub fallback_skill_description: &'static str,

    /// Damage of the unarmed fallback skill
    ///
    /// Deliberately weaker than any weapon base skill (the weakest weapon
    /// deals 20) so an empty inventory is playable but never optimal.
    pub fallback_skill_damage: i32,

    /// Provenance label for the unarmed fallback skill
    pub fallback_skill_source: &'static str,

    /// Substrings that mark a skill source as weapon-like
    ///
    /// The fallback skill is only injected when no physical skill traces
    /// back to a source whose lowercased name contains one of these.
    pub weapon_keywords: &'static [&'static str],

    /// Type tag the fallback skill carries
    pub fallback_skill_type: SkillType,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_cols: 10,
            grid_rows: 8,

            cost_floor: 0,

            fallback_skill_name: "Punch",
            fallback_skill_description: "Basic unarmed attack",
            fallback_skill_damage: 12,
            fallback_skill_source: "Bare Hands",
            weapon_keywords: &["sword", "weapon", "staff", "bow", "axe", "dagger"],
            fallback_skill_type: SkillType::Physical,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err("grid dimensions must be non-zero".into());
        }

        if self.cost_floor < 0 {
            return Err(format!(
                "cost_floor ({}) must be non-negative",
                self.cost_floor
            ));
        }

        if self.fallback_skill_damage <= 0 {
            return Err("fallback skill must deal positive damage".into());
        }

        if self.weapon_keywords.is_empty() {
            return Err("weapon_keywords must not be empty".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EngineConfig) -> std::result::Result<(), EngineConfig> {
    CONFIG.set(config)
}
