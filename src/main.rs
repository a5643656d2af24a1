//! Emerald Village - demonstration entry point
//!
//! Seeds the sample villagers, prints the color-coded roster, work reports
//! and reward summaries, then saves the roster to a fixed JSON file and
//! reloads it.

use crossterm::style::Stylize;

use emerald_village::inhabitant::{combined_bonus, Inhabitant, Role};
use emerald_village::village::{persistence, Village};

const SAVE_PATH: &str = "village.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("emerald_village=info")
        .init();

    println!("=== Emerald Village ===");

    let mut village = Village::new();
    seed_villagers(&mut village);

    print_roster(&village);

    println!("\n=== At work ===");
    for inhabitant in village.iter() {
        println!("{}", inhabitant.work());
    }

    println!("\n=== Rewards ===");
    for inhabitant in village.iter() {
        println!("{}: {} emeralds", inhabitant.name, inhabitant.reward());
    }

    println!("\n=== Combined bonus, Johny + Pedro ===");
    let johny = village.find_by_name("Johny");
    let pedro = village.find_by_name("Pedro");
    if let (Some(johny), Some(pedro)) = (johny, pedro) {
        println!(
            "{} + {} = {} emeralds",
            johny.name,
            pedro.name,
            combined_bonus(johny, pedro)
        );
    }

    println!("\nVillage total: {} emeralds", village.total_emeralds());

    println!("\n=== Top 3 by reward ===");
    for inhabitant in village.top3_by_reward() {
        println!("{} - {} emeralds", inhabitant.name, inhabitant.reward());
    }

    // Persistence failures are reported, never fatal.
    if let Err(e) = persistence::save_to_file(&village, SAVE_PATH) {
        tracing::error!("save failed: {e}");
    }
    if let Err(e) = persistence::load_from_file(&mut village, SAVE_PATH) {
        tracing::error!("load failed: {e}");
    }
}

/// The fixed sample population. A duplicate name is reported and skipped;
/// the rest of the batch still goes in.
fn seed_villagers(village: &mut Village) {
    let sample = vec![
        Inhabitant::warrior("Martin", 12, 20, 5, 1),
        Inhabitant::warrior("Lukas", 20, 30, 10, 2),
        Inhabitant::mage("Pedro", 25, 20),
        Inhabitant::builder("Johny", 14, 20, 3),
        Inhabitant::builder("Sonya", 18, 25, 12),
        Inhabitant::worker("Vojgrc", 10, 15),
    ];
    for inhabitant in sample {
        if let Err(e) = village.add(inhabitant) {
            tracing::warn!("{e}");
        }
    }
}

fn print_roster(village: &Village) {
    for inhabitant in village.iter() {
        let line = inhabitant.to_string();
        let styled = match inhabitant.role() {
            Role::Warrior { .. } => line.red(),
            Role::Mage => line.blue(),
            Role::Builder { .. } => line.green(),
            Role::Worker => line.yellow(),
        };
        println!("{styled}");
    }
}
