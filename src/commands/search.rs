//! Batter search command implementation

use crate::{dataset::Dataset, events::HitEvent, Result};

/// One human-readable line per event.
pub fn format_event_line(event: &HitEvent) -> String {
    format!(
        "{:>10}  vs {:<22} {:<8} {:>6.1} ft  {:>6.1}°  LA {:>5.1}°  EV {:>5.1} mph",
        event.game_date.to_string(),
        event.pitcher,
        event.outcome.to_string(),
        event.hit_distance,
        event.exit_direction,
        event.launch_angle,
        event.exit_speed,
    )
}

/// Print a batter's events. An unknown batter prints nothing (or `[]`).
pub fn handle_search(dataset: &Dataset, batter: &str, as_json: bool) -> Result<()> {
    let events = dataset.search(Some(batter))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No batted balls found for '{}'", batter);
        return Ok(());
    }

    println!("{} ({} batted balls)", events[0].batter, events.len());
    for event in events {
        println!("{}", format_event_line(event));
    }
    Ok(())
}
