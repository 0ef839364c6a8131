//! Colored table output for lineups.

use lineupforge::Lineup;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

/// Prints each lineup as a header line plus one row per slot.
pub fn print_lineups(lineups: &[Lineup]) {
    for (index, lineup) in lineups.iter().enumerate() {
        print_header(index, lineup);
        for slot in lineup.slots() {
            println!(
                "  {:<5} {:<24} {:<4} {:>7} {:>6.1}",
                slot.kind.to_string().bright_yellow(),
                slot.candidate.name,
                slot.candidate.origin.dimmed(),
                slot.candidate.cost.to_formatted_string(&Locale::en),
                slot.candidate.value,
            );
        }
        println!();
    }
}

fn print_header(index: usize, lineup: &Lineup) {
    println!(
        "{} {}  {} {:.1}  {} {}",
        "Lineup".bright_green().bold(),
        (index + 1).bright_green().bold(),
        "value".dimmed(),
        lineup.total_value(),
        "cost".dimmed(),
        lineup.total_cost().to_formatted_string(&Locale::en),
    );
}
