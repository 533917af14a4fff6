//! The derivation pipeline from placed items to usable skills
//!
//! Recomputed from scratch on every call. Inventories are small, and a
//! stateless walk cannot hold a stale cache; do not replace this with
//! incremental bookkeeping.

use tracing::debug;

use crate::core::config::config;
use crate::core::types::SkillType;
use crate::grid::{adjacency, OccupancyGrid};
use crate::skills::DerivedSkill;

/// Derive the full usable-skill list for one inventory
///
/// For every placed item, in grid insertion order, each of its base skills
/// is seeded with the item's name as provenance and then folded through the
/// enhancement rules of every adjacent item, in adjacency-resolver order.
/// Each matching rule builds on the previous rule's result - a skill can be
/// enhanced several times - and appends the neighbor's name to provenance.
/// Rule filters see the skill's current (possibly rewritten) type and name.
///
/// The output always contains at least one offensive action: when no
/// physical skill traces back to a weapon-like source, the configured
/// unarmed fallback is prepended. Determinism: an unchanged grid yields a
/// byte-identical list on every call.
pub fn generate_skills(grid: &OccupancyGrid) -> Vec<DerivedSkill> {
    let mut skills = Vec::new();

    // Each item contributes its base skills exactly once, no matter how
    // many neighbors revisit it.
    for item in grid.placed_items() {
        if item.base_skills.is_empty() {
            continue;
        }

        let neighbors = adjacency::neighbors_of(grid, item.id);

        for base in &item.base_skills {
            let mut derived = DerivedSkill::from_base(base, &item.name);

            for &neighbor_id in &neighbors {
                let Some(neighbor) = grid.item(neighbor_id) else {
                    continue;
                };
                for rule in &neighbor.enhancements {
                    if rule.matches(derived.skill_type, &derived.name) {
                        rule.apply(&mut derived);
                        derived.add_source(&neighbor.name);
                    }
                }
            }

            debug!(
                skill = %derived.name,
                damage = derived.damage,
                sources = %derived.source_label(),
                "derived skill"
            );
            skills.push(derived);
        }
    }

    if !has_weapon_skill(&skills) {
        debug!("no weapon-backed physical skill, adding unarmed fallback");
        skills.insert(0, unarmed_fallback());
    }

    if skills.is_empty() {
        // Unreachable given the fallback above; kept as a hard floor so the
        // battle layer can rely on a non-empty list.
        return default_skills();
    }

    skills
}

/// The guaranteed skill list for a character with nothing usable
pub fn default_skills() -> Vec<DerivedSkill> {
    vec![unarmed_fallback()]
}

/// The zero-cost unarmed attack from the engine config
pub fn unarmed_fallback() -> DerivedSkill {
    let cfg = config();
    DerivedSkill {
        name: cfg.fallback_skill_name.to_string(),
        description: cfg.fallback_skill_description.to_string(),
        damage: cfg.fallback_skill_damage,
        cost: 0,
        skill_type: cfg.fallback_skill_type,
        sources: vec![cfg.fallback_skill_source.to_string()],
    }
}

/// Is any derived skill a physical attack backed by a weapon-like source?
fn has_weapon_skill(skills: &[DerivedSkill]) -> bool {
    let keywords = config().weapon_keywords;
    skills.iter().any(|skill| {
        skill.skill_type == SkillType::Physical
            && skill.sources.iter().any(|source| {
                let source = source.to_lowercase();
                keywords.iter().any(|keyword| source.contains(keyword))
            })
    })
}
