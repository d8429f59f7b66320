//! Video lookup command implementation

use crate::{dataset::Dataset, Result};

/// Without a pitcher, list the pitchers faced; with one, list that pairing's clips.
pub fn handle_videos(
    dataset: &Dataset,
    batter: &str,
    pitcher: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let Some(pitcher) = pitcher else {
        let pitchers = dataset.pitchers(Some(batter))?;
        if as_json {
            println!("{}", serde_json::to_string_pretty(&pitchers)?);
        } else {
            for name in pitchers {
                println!("{}", name);
            }
        }
        return Ok(());
    };

    let cards = dataset.videos(Some(batter), Some(pitcher))?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No videos for {} vs {}", batter, pitcher);
    }
    for card in cards {
        println!("{}", card.title);
        println!("  Date: {}", card.date);
        println!("  Exit Speed: {}", card.exit_speed);
        println!("  Launch Angle: {}", card.launch_angle);
        println!("  Hit Distance: {}", card.hit_distance);
        println!("  Outcome: {}", card.outcome);
        println!("  Watch: {}", card.link);
    }
    Ok(())
}
