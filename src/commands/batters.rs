//! Batter list command implementation

use crate::{dataset::Dataset, Result};

/// Print every batter, one per line or as a JSON array.
pub fn handle_batters(dataset: &Dataset, as_json: bool) -> Result<()> {
    let batters = dataset.list_batters();
    if as_json {
        println!("{}", serde_json::to_string_pretty(batters)?);
    } else {
        for name in batters {
            println!("{}", name);
        }
    }
    Ok(())
}
