//! Template registry: the item catalog the content layer draws from
//!
//! Holds parsed [`ItemTemplate`]s keyed by name, loads more from TOML, and
//! ships a built-in starter catalog matching the original game data.

use std::path::Path;

use ahash::AHashMap;
use tracing::info;

use crate::core::error::{EngineError, Result};
use crate::core::types::SkillType;
use crate::data::schema::{ItemTemplate, ShapeSpec, TemplateFile};
use crate::item::Item;
use crate::skills::{BaseSkill, EnhancementRule, TextRewrite};

/// Registry of item templates, keyed by display name
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<ItemTemplate>,
    by_name: AHashMap<String, usize>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the starter catalog
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for template in starter_catalog() {
            registry.register(template);
        }
        registry
    }

    /// Add a template, replacing any previous one with the same name
    pub fn register(&mut self, template: ItemTemplate) {
        if let Some(&index) = self.by_name.get(&template.name) {
            self.templates[index] = template;
        } else {
            self.by_name
                .insert(template.name.clone(), self.templates.len());
            self.templates.push(template);
        }
    }

    /// Parse templates from a TOML string; returns how many were loaded
    pub fn load_toml_str(&mut self, source: &str) -> Result<usize> {
        let file: TemplateFile = toml::from_str(source)?;
        let count = file.items.len();
        for template in file.items {
            // Surface broken shape parameters at load time, not placement time
            template.shape.build()?;
            self.register(template);
        }
        info!(count, "loaded item templates");
        Ok(count)
    }

    /// Parse templates from a TOML file on disk
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let source = std::fs::read_to_string(path)?;
        self.load_toml_str(&source)
    }

    pub fn get(&self, name: &str) -> Option<&ItemTemplate> {
        self.by_name.get(name).map(|&index| &self.templates[index])
    }

    /// Instantiate a fresh unplaced item from the named template
    pub fn instantiate(&self, name: &str) -> Result<Item> {
        let template = self
            .get(name)
            .ok_or_else(|| EngineError::UnknownTemplate(name.to_string()))?;
        Ok(template.instantiate()?)
    }

    /// Template names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn skill(
    name: &str,
    description: &str,
    damage: i32,
    cost: i32,
    skill_type: SkillType,
) -> BaseSkill {
    BaseSkill {
        name: name.into(),
        description: description.into(),
        damage,
        cost,
        skill_type,
    }
}

fn replace(from: &str, to: &str) -> Option<TextRewrite> {
    Some(TextRewrite::Replace {
        from: from.into(),
        to: to.into(),
    })
}

fn prepend(prefix: &str) -> Option<TextRewrite> {
    Some(TextRewrite::Prepend {
        prefix: prefix.into(),
    })
}

fn append(suffix: &str) -> Option<TextRewrite> {
    Some(TextRewrite::Append {
        suffix: suffix.into(),
    })
}

/// The starter item catalog
///
/// Mirrors the original sample inventory: three weapons, two armor pieces,
/// a consumable, and three enhancement gems. Where an original rewrite
/// renamed either of two skills in one function, it is decomposed into an
/// unfiltered rule plus a name-filtered follow-up rule on the same item.
fn starter_catalog() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate {
            name: "Sword".into(),
            kind: "weapon".into(),
            color: "#e74c3c".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 3,
            },
            base_skills: vec![skill(
                "Attack",
                "Basic sword strike",
                25,
                0,
                SkillType::Physical,
            )],
            enhancements: vec![],
        },
        ItemTemplate {
            name: "Staff".into(),
            kind: "weapon".into(),
            color: "#9b59b6".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 2,
            },
            base_skills: vec![skill(
                "Fireball",
                "Launch a fireball",
                30,
                5,
                SkillType::Magic,
            )],
            enhancements: vec![],
        },
        ItemTemplate {
            name: "Shield".into(),
            kind: "armor".into(),
            color: "#34495e".into(),
            shape: ShapeSpec::Rectangle {
                width: 2,
                height: 2,
            },
            base_skills: vec![skill(
                "Block",
                "Defensive stance",
                0,
                2,
                SkillType::Defensive,
            )],
            enhancements: vec![EnhancementRule {
                target_types: Some(vec![SkillType::Physical]),
                damage_bonus: Some(5),
                name_rewrite: prepend("Defensive "),
                description_rewrite: append(" with shield protection"),
                ..Default::default()
            }],
        },
        ItemTemplate {
            name: "Fire Gem".into(),
            kind: "gem".into(),
            color: "#e67e22".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 1,
            },
            base_skills: vec![],
            enhancements: vec![
                EnhancementRule {
                    target_types: Some(vec![SkillType::Magic]),
                    damage_multiplier: Some(1.5),
                    name_rewrite: replace("Fireball", "Fire Blast"),
                    description_rewrite: append(" (enhanced by fire gem)"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Physical]),
                    damage_multiplier: Some(1.6),
                    cost_modifier: Some(2),
                    name_rewrite: replace("Attack", "Flaming Strike"),
                    description_rewrite: replace(
                        "Basic sword strike",
                        "Blazing sword attack with fire damage",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Ranged]),
                    damage_multiplier: Some(1.4),
                    cost_modifier: Some(1),
                    name_rewrite: replace("Arrow Shot", "Fire Arrow"),
                    description_rewrite: replace(
                        "Ranged attack",
                        "Burning arrow that ignites targets",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Defensive]),
                    damage_bonus: Some(8),
                    name_rewrite: prepend("Burning "),
                    description_rewrite: append(" with fire retaliation damage"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Healing]),
                    damage_multiplier: Some(0.8),
                    cost_modifier: Some(1),
                    name_rewrite: replace("Heal", "Cauterize"),
                    description_rewrite: replace(
                        "Restore health",
                        "Painful but effective fire healing",
                    ),
                    ..Default::default()
                },
            ],
        },
        ItemTemplate {
            name: "Dual Cast".into(),
            kind: "gem".into(),
            color: "#f39c12".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 1,
            },
            base_skills: vec![],
            enhancements: vec![
                EnhancementRule {
                    target_types: Some(vec![SkillType::Magic]),
                    damage_multiplier: Some(1.8),
                    cost_modifier: Some(3),
                    name_rewrite: prepend("Double "),
                    description_rewrite: append(" (cast twice)"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Physical]),
                    damage_multiplier: Some(1.7),
                    cost_modifier: Some(2),
                    name_rewrite: replace("Attack", "Combo Strike"),
                    description_rewrite: replace(
                        "Basic sword strike",
                        "Rapid dual weapon attack",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Ranged]),
                    damage_multiplier: Some(1.9),
                    cost_modifier: Some(2),
                    name_rewrite: replace("Arrow Shot", "Double Shot"),
                    description_rewrite: replace(
                        "Ranged attack",
                        "Fire two arrows simultaneously",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Defensive]),
                    damage_multiplier: Some(2.0),
                    cost_modifier: Some(1),
                    name_rewrite: prepend("Enhanced "),
                    description_rewrite: append(" with doubled effectiveness"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Healing]),
                    damage_multiplier: Some(1.8),
                    cost_modifier: Some(2),
                    name_rewrite: replace("Heal", "Greater Heal"),
                    description_rewrite: replace(
                        "Restore health",
                        "Powerful dual-layer healing",
                    ),
                    ..Default::default()
                },
            ],
        },
        ItemTemplate {
            name: "Potion".into(),
            kind: "consumable".into(),
            color: "#27ae60".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 1,
            },
            base_skills: vec![skill("Heal", "Restore health", -20, 0, SkillType::Healing)],
            enhancements: vec![],
        },
        ItemTemplate {
            name: "Bow".into(),
            kind: "weapon".into(),
            color: "#16a085".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 2,
            },
            base_skills: vec![skill(
                "Arrow Shot",
                "Ranged attack",
                20,
                1,
                SkillType::Ranged,
            )],
            enhancements: vec![],
        },
        ItemTemplate {
            name: "Armor".into(),
            kind: "armor".into(),
            color: "#7f8c8d".into(),
            shape: ShapeSpec::Rectangle {
                width: 2,
                height: 3,
            },
            base_skills: vec![skill(
                "Fortify",
                "Increase defense",
                0,
                3,
                SkillType::Defensive,
            )],
            enhancements: vec![EnhancementRule {
                target_types: Some(vec![SkillType::Defensive]),
                damage_bonus: Some(10),
                name_rewrite: prepend("Heavy "),
                description_rewrite: append(" (armored)"),
                ..Default::default()
            }],
        },
        ItemTemplate {
            name: "Ice Gem".into(),
            kind: "gem".into(),
            color: "#3498db".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 1,
            },
            base_skills: vec![],
            enhancements: vec![
                EnhancementRule {
                    target_types: Some(vec![SkillType::Magic]),
                    damage_multiplier: Some(1.3),
                    cost_modifier: Some(1),
                    name_rewrite: replace("Fireball", "Frost Bolt"),
                    description_rewrite: append(" (frozen with ice)"),
                    ..Default::default()
                },
                // Follow-up rename for the lightning line; numeric effects
                // already applied by the rule above
                EnhancementRule {
                    target_types: Some(vec![SkillType::Magic]),
                    target_names: Some(vec!["Lightning Bolt".into()]),
                    name_rewrite: replace("Lightning Bolt", "Ice Shard"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Physical]),
                    damage_multiplier: Some(1.2),
                    cost_modifier: Some(1),
                    name_rewrite: replace("Attack", "Frost Strike"),
                    description_rewrite: replace(
                        "Basic sword strike",
                        "Chilling blade attack that slows enemies",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Ranged]),
                    damage_multiplier: Some(1.1),
                    cost_modifier: Some(1),
                    name_rewrite: replace("Arrow Shot", "Ice Arrow"),
                    description_rewrite: replace(
                        "Ranged attack",
                        "Freezing arrow that slows targets",
                    ),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Defensive]),
                    damage_bonus: Some(5),
                    cost_modifier: Some(1),
                    name_rewrite: prepend("Frozen "),
                    description_rewrite: append(" with ice armor protection"),
                    ..Default::default()
                },
                EnhancementRule {
                    target_types: Some(vec![SkillType::Healing]),
                    damage_multiplier: Some(1.1),
                    name_rewrite: replace("Heal", "Frost Mend"),
                    description_rewrite: replace(
                        "Restore health",
                        "Cooling ice healing that numbs pain",
                    ),
                    ..Default::default()
                },
            ],
        },
        ItemTemplate {
            name: "Lightning Rod".into(),
            kind: "weapon".into(),
            color: "#f1c40f".into(),
            shape: ShapeSpec::Rectangle {
                width: 1,
                height: 2,
            },
            base_skills: vec![skill(
                "Lightning Bolt",
                "Electric shock attack",
                28,
                4,
                SkillType::Magic,
            )],
            enhancements: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 10);
        assert!(registry.get("Sword").is_some());
        assert!(registry.get("Ice Gem").is_some());
    }

    #[test]
    fn test_builtin_shapes_all_build() {
        let registry = TemplateRegistry::builtin();
        for name in registry.names().collect::<Vec<_>>() {
            let template = registry.get(name).unwrap();
            assert!(template.shape.build().is_ok(), "{name}");
        }
    }

    #[test]
    fn test_instantiate_unknown_template() {
        let registry = TemplateRegistry::builtin();
        assert!(matches!(
            registry.instantiate("Excalibur"),
            Err(EngineError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_instantiate_fresh_ids() {
        let registry = TemplateRegistry::builtin();
        let a = registry.instantiate("Sword").unwrap();
        let b = registry.instantiate("Sword").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.base_skills, b.base_skills);
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = TemplateRegistry::builtin();
        let count = registry.len();

        let mut sword = registry.get("Sword").unwrap().clone();
        sword.color = "#000000".into();
        registry.register(sword);

        assert_eq!(registry.len(), count);
        assert_eq!(registry.get("Sword").unwrap().color, "#000000");
    }

    #[test]
    fn test_load_toml_str_rejects_bad_shape() {
        let mut registry = TemplateRegistry::new();
        let toml_str = r#"
[[item]]
name = "Ghost"
type = "gem"
shape = "pattern"
rows = []
"#;
        assert!(registry.load_toml_str(toml_str).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_toml_str_registers_items() {
        let mut registry = TemplateRegistry::new();
        let toml_str = r#"
[[item]]
name = "Hatchet"
type = "weapon"
shape = "l"
arm_length = 2
orientation = "tl"

[[item.base_skills]]
name = "Chop"
description = "A short swing"
damage = 15
cost = 0
type = "physical"
"#;
        assert_eq!(registry.load_toml_str(toml_str).unwrap(), 1);
        let hatchet = registry.instantiate("Hatchet").unwrap();
        assert_eq!(hatchet.shape.cell_count(), 3);
    }
}
