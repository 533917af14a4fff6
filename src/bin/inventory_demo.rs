//! Headless inventory walkthrough - places the starter catalog and reports
//! the derived skill list after each arrangement, the way a player would see
//! it change while dragging items around.

use relicgrid::core::error::Result;
use relicgrid::core::types::Cell;
use relicgrid::data::TemplateRegistry;
use relicgrid::grid::OccupancyGrid;
use relicgrid::skills::synthesis::generate_skills;

fn print_skills(grid: &OccupancyGrid) {
    for skill in generate_skills(grid) {
        let damage = if skill.is_healing() {
            format!("heals {}", -skill.damage)
        } else {
            format!("{} dmg", skill.damage)
        };
        println!(
            "  {:<22} {:<9} {:>10}  cost {:<2} [{}]",
            skill.name,
            skill.skill_type.name(),
            damage,
            skill.cost,
            skill.source_label()
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Relicgrid Inventory Demo ===\n");

    let registry = TemplateRegistry::builtin();
    let mut grid = OccupancyGrid::with_default_size();

    println!("Empty grid:");
    print_skills(&grid);

    // A bare weapon
    let sword = grid.add_item(registry.instantiate("Sword")?);
    grid.place(sword, Cell::new(0, 0))?;
    println!("\nSword placed at (0, 0):");
    print_skills(&grid);

    // Gem touching the sword: the physical skill gets rewritten
    let fire_gem = grid.add_item(registry.instantiate("Fire Gem")?);
    grid.place(fire_gem, Cell::new(1, 0))?;
    println!("\nFire Gem placed beside the sword:");
    print_skills(&grid);

    // Stack a second gem on the same weapon
    let dual_cast = grid.add_item(registry.instantiate("Dual Cast")?);
    grid.place(dual_cast, Cell::new(1, 1))?;
    println!("\nDual Cast added, also adjacent:");
    print_skills(&grid);

    // Fill out the rest of the loadout away from the gems
    for (name, anchor) in [
        ("Staff", Cell::new(4, 0)),
        ("Shield", Cell::new(6, 0)),
        ("Potion", Cell::new(4, 3)),
        ("Bow", Cell::new(9, 0)),
        ("Armor", Cell::new(6, 3)),
        ("Lightning Rod", Cell::new(3, 5)),
    ] {
        let id = grid.add_item(registry.instantiate(name)?);
        grid.place(id, anchor)?;
    }
    println!("\nFull loadout:");
    println!("{}", grid.to_ascii());
    print_skills(&grid);

    // Pull the gems off again: the sword reverts to its base skill
    grid.remove(fire_gem);
    grid.remove(dual_cast);
    println!("\nGems removed:");
    print_skills(&grid);

    Ok(())
}
