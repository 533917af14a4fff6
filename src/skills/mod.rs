//! Skill model: base skills, enhancement rules, derived skills
//!
//! Skills are never stored on a character. Items carry [`BaseSkill`]s and
//! [`EnhancementRule`]s; the synthesis pipeline in [`synthesis`] folds the
//! rules of spatially adjacent items into each base skill to produce the
//! [`DerivedSkill`] list a character can actually use.

pub mod synthesis;

pub use synthesis::generate_skills;

use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::SkillType;

/// A skill an item grants while placed, before any enhancement
///
/// Negative damage means healing of that magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSkill {
    pub name: String,
    pub description: String,
    pub damage: i32,
    pub cost: i32,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
}

/// A declarative string rewrite
///
/// Enhancement rules rewrite skill names and descriptions. The original
/// game attached arbitrary closures to item data; here the operations are a
/// closed, serializable set so rules stay data rather than code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum TextRewrite {
    /// Replace every occurrence of `from` with `to`
    Replace { from: String, to: String },
    /// Prefix the prior text
    Prepend { prefix: String },
    /// Suffix the prior text
    Append { suffix: String },
    /// Substitute the prior text for `{}` in `template`
    Template { template: String },
}

impl TextRewrite {
    /// Apply the rewrite to the prior string
    pub fn apply(&self, prior: &str) -> String {
        match self {
            TextRewrite::Replace { from, to } => prior.replace(from.as_str(), to),
            TextRewrite::Prepend { prefix } => format!("{prefix}{prior}"),
            TextRewrite::Append { suffix } => format!("{prior}{suffix}"),
            TextRewrite::Template { template } => template.replace("{}", prior),
        }
    }
}

/// A neighbor-contributed transform applied to matching skills
///
/// A rule with neither filter set matches every skill. Filters are checked
/// against the skill's *current* type and name, so an earlier rule's rename
/// can stop a later name-targeted rule from firing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancementRule {
    /// Skill types this rule targets (`None` = all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_types: Option<Vec<SkillType>>,
    /// Skill names this rule targets (`None` = all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_names: Option<Vec<String>>,
    /// Multiplies damage, result floored toward zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_multiplier: Option<f32>,
    /// Added to damage after the multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_bonus: Option<i32>,
    /// Added to cost, clamped at the configured floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_modifier: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_rewrite: Option<TextRewrite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_rewrite: Option<TextRewrite>,
}

impl EnhancementRule {
    /// Does this rule apply to a skill with the given current type and name?
    pub fn matches(&self, skill_type: SkillType, name: &str) -> bool {
        if let Some(types) = &self.target_types {
            if !types.contains(&skill_type) {
                return false;
            }
        }
        if let Some(names) = &self.target_names {
            if !names.iter().any(|n| n == name) {
                return false;
            }
        }
        true
    }

    /// Apply the transform in the contract order: damage multiplier, damage
    /// bonus, cost delta, name rewrite, description rewrite
    pub fn apply(&self, skill: &mut DerivedSkill) {
        if let Some(multiplier) = self.damage_multiplier {
            skill.damage = (skill.damage as f32 * multiplier).floor() as i32;
        }
        if let Some(bonus) = self.damage_bonus {
            skill.damage += bonus;
        }
        if let Some(delta) = self.cost_modifier {
            skill.cost = (skill.cost + delta).max(config().cost_floor);
        }
        if let Some(rewrite) = &self.name_rewrite {
            skill.name = rewrite.apply(&skill.name);
        }
        if let Some(rewrite) = &self.description_rewrite {
            skill.description = rewrite.apply(&skill.description);
        }
    }
}

/// A base skill after zero or more enhancements, with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSkill {
    pub name: String,
    pub description: String,
    pub damage: i32,
    pub cost: i32,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    /// Names of every item that shaped this skill, contributor order
    pub sources: Vec<String>,
}

impl DerivedSkill {
    /// Seed a derived skill from a base skill and its owning item's name
    pub fn from_base(base: &BaseSkill, source: impl Into<String>) -> Self {
        Self {
            name: base.name.clone(),
            description: base.description.clone(),
            damage: base.damage,
            cost: base.cost,
            skill_type: base.skill_type,
            sources: vec![source.into()],
        }
    }

    /// Record a contributing item, keeping the list duplicate-free
    pub fn add_source(&mut self, source: &str) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
    }

    /// Provenance label, e.g. `"Sword + Fire Gem"`
    pub fn source_label(&self) -> String {
        self.sources.join(" + ")
    }

    /// Healing skills carry negative damage
    pub fn is_healing(&self) -> bool {
        self.damage < 0
    }
}
