//! Item template schema for TOML deserialization
//!
//! Templates are the authoring format the game content layer writes items
//! in. The shape is a tagged variant - one variant per shape kind carrying
//! exactly its parameters - so invalid parameter combinations cannot be
//! expressed, and enhancement rewrites are declarative data rather than
//! embedded code.

use serde::{Deserialize, Serialize};

use crate::core::error::ShapeError;
use crate::item::Item;
use crate::shape::generators::{Corner, Facing};
use crate::shape::Shape;
use crate::skills::{BaseSkill, EnhancementRule};

/// Shape description, dispatched on the `shape` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle {
        width: u32,
        height: u32,
    },
    L {
        arm_length: u32,
        orientation: Corner,
    },
    T {
        stem_length: u32,
        top_width: u32,
        orientation: Facing,
    },
    U {
        height: u32,
        width: u32,
        orientation: Facing,
    },
    Plus {
        arm_length: u32,
    },
    Z {
        width: u32,
        height: u32,
        #[serde(default)]
        mirrored: bool,
    },
    Diamond {
        size: u32,
    },
    Frame {
        width: u32,
        height: u32,
        #[serde(default = "default_thickness")]
        thickness: u32,
    },
    Pattern {
        rows: Vec<String>,
    },
}

fn default_thickness() -> u32 {
    1
}

impl ShapeSpec {
    /// Build the concrete, validated shape this spec describes
    pub fn build(&self) -> Result<Shape, ShapeError> {
        match self {
            ShapeSpec::Rectangle { width, height } => Shape::rectangle(*width, *height),
            ShapeSpec::L {
                arm_length,
                orientation,
            } => Shape::l_shape(*arm_length, *orientation),
            ShapeSpec::T {
                stem_length,
                top_width,
                orientation,
            } => Shape::t_shape(*stem_length, *top_width, *orientation),
            ShapeSpec::U {
                height,
                width,
                orientation,
            } => Shape::u_shape(*height, *width, *orientation),
            ShapeSpec::Plus { arm_length } => Shape::plus_shape(*arm_length),
            ShapeSpec::Z {
                width,
                height,
                mirrored,
            } => Shape::z_shape(*width, *height, *mirrored),
            ShapeSpec::Diamond { size } => Shape::diamond(*size),
            ShapeSpec::Frame {
                width,
                height,
                thickness,
            } => Shape::frame(*width, *height, *thickness),
            ShapeSpec::Pattern { rows } => Shape::from_text_pattern(rows),
        }
    }
}

/// One authorable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Display name; also the registry key
    pub name: String,
    /// Type tag ("weapon", "armor", "gem", "consumable", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Display color, passed through opaquely
    #[serde(default = "default_color")]
    pub color: String,
    /// Footprint description
    #[serde(flatten)]
    pub shape: ShapeSpec,
    /// Skills granted while placed
    #[serde(default)]
    pub base_skills: Vec<BaseSkill>,
    /// Rules offered to adjacent items
    #[serde(default)]
    pub enhancements: Vec<EnhancementRule>,
}

fn default_color() -> String {
    "#3498db".to_string()
}

impl ItemTemplate {
    /// Instantiate a fresh unplaced item from this template
    pub fn instantiate(&self) -> Result<Item, ShapeError> {
        Ok(
            Item::new(&self.name, &self.kind, &self.color, self.shape.build()?)
                .with_base_skills(self.base_skills.clone())
                .with_enhancements(self.enhancements.clone()),
        )
    }
}

/// Top-level layout of a template TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFile {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SkillType;

    #[test]
    fn test_deserialize_weapon_template() {
        let toml_str = r##"
[[item]]
name = "Sword"
type = "weapon"
color = "#e74c3c"
shape = "rectangle"
width = 1
height = 3

[[item.base_skills]]
name = "Attack"
description = "Basic sword strike"
damage = 25
cost = 0
type = "physical"
"##;
        let file: TemplateFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.items.len(), 1);

        let sword = &file.items[0];
        assert_eq!(sword.name, "Sword");
        assert_eq!(
            sword.shape,
            ShapeSpec::Rectangle {
                width: 1,
                height: 3
            }
        );
        assert_eq!(sword.base_skills[0].skill_type, SkillType::Physical);
    }

    #[test]
    fn test_deserialize_gem_with_rewrites() {
        let toml_str = r#"
[[item]]
name = "Fire Gem"
type = "gem"
shape = "rectangle"
width = 1
height = 1

[[item.enhancements]]
target_types = ["magic"]
damage_multiplier = 1.5

[item.enhancements.name_rewrite]
op = "replace"
from = "Fireball"
to = "Fire Blast"

[item.enhancements.description_rewrite]
op = "append"
suffix = " (enhanced by fire gem)"
"#;
        let file: TemplateFile = toml::from_str(toml_str).unwrap();
        let gem = &file.items[0];
        assert_eq!(gem.color, default_color());
        assert_eq!(gem.enhancements.len(), 1);
        assert_eq!(gem.enhancements[0].damage_multiplier, Some(1.5));
        assert!(gem.enhancements[0].name_rewrite.is_some());
    }

    #[test]
    fn test_deserialize_every_shape_kind() {
        let toml_str = r#"
[[item]]
name = "Axe"
type = "weapon"
shape = "l"
arm_length = 3
orientation = "tl"

[[item]]
name = "Staff"
type = "weapon"
shape = "t"
stem_length = 3
top_width = 3
orientation = "up"

[[item]]
name = "Bow"
type = "weapon"
shape = "u"
height = 3
width = 3
orientation = "up"

[[item]]
name = "Talisman"
type = "accessory"
shape = "plus"
arm_length = 1

[[item]]
name = "Lightning Charm"
type = "gem"
shape = "z"
width = 3
height = 3

[[item]]
name = "Jewel"
type = "gem"
shape = "diamond"
size = 3

[[item]]
name = "Picture Frame"
type = "accessory"
shape = "frame"
width = 4
height = 4

[[item]]
name = "Crown"
type = "armor"
shape = "pattern"
rows = ["X.X", "XXX"]
"#;
        let file: TemplateFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.items.len(), 8);
        for template in &file.items {
            let shape = template.shape.build();
            assert!(shape.is_ok(), "{} should build: {:?}", template.name, shape);
        }
    }

    #[test]
    fn test_instantiate_produces_unplaced_item() {
        let template = ItemTemplate {
            name: "Shield".into(),
            kind: "armor".into(),
            color: "#34495e".into(),
            shape: ShapeSpec::Rectangle {
                width: 2,
                height: 2,
            },
            base_skills: vec![],
            enhancements: vec![],
        };

        let a = template.instantiate().unwrap();
        let b = template.instantiate().unwrap();
        assert!(!a.is_placed());
        assert_ne!(a.id, b.id);
        assert_eq!(a.shape, b.shape);
    }

    #[test]
    fn test_degenerate_shape_params_fail_at_build() {
        let spec = ShapeSpec::Pattern { rows: vec![] };
        assert_eq!(spec.build(), Err(ShapeError::Empty));
    }
}
