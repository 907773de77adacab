use std::path::Path;

use colored::Colorize;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;
    let issues = world.validate();

    println!(
        "  {} '{}': {} locations, {} quests",
        "Checked".bold(),
        world.meta.name,
        world.location_count(),
        world.quests().count()
    );
    if issues.is_empty() {
        println!("  {}", "No problems found.".green());
        return Ok(());
    }

    for issue in &issues {
        eprintln!("{}: {issue}", "warning".yellow());
    }
    Err(format!("world has {} problem(s)", issues.len()))
}
