//! Raw spreadsheet row → canonical [`HitEvent`] conversion.

use serde::Deserialize;

use super::types::{GameDate, HitEvent, Outcome};
use crate::error::{ChartError, Result};

/// One spreadsheet row as exported. Columns not listed here are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "BATTER")]
    pub batter: String,
    #[serde(rename = "PITCHER")]
    pub pitcher: String,
    #[serde(rename = "GAME_DATE")]
    pub game_date: f64,
    #[serde(rename = "EXIT_SPEED")]
    pub exit_speed: f64,
    #[serde(rename = "LAUNCH_ANGLE")]
    pub launch_angle: f64,
    #[serde(rename = "HIT_DISTANCE")]
    pub hit_distance: f64,
    #[serde(rename = "EXIT_DIRECTION")]
    pub exit_direction: f64,
    #[serde(rename = "PLAY_OUTCOME", default)]
    pub play_outcome: Option<String>,
    #[serde(rename = "VIDEO_LINK", default)]
    pub video_link: Option<String>,
}

/// Reformat a `"Last, First"` name as `"First Last"`.
///
/// Splits on the first comma only, so `"Smith, John, Jr."` becomes `"John, Jr. Smith"`.
/// Returns `None` when there is no comma or either side is blank.
pub fn reformat_name(raw: &str) -> Option<String> {
    let (last, first) = raw.split_once(',')?;
    let (last, first) = (last.trim(), first.trim());
    if last.is_empty() || first.is_empty() {
        return None;
    }
    Some(format!("{} {}", first, last))
}

fn malformed(row: usize, reason: impl Into<String>) -> ChartError {
    ChartError::MalformedRecord {
        row,
        reason: reason.into(),
    }
}

/// Normalize one row. `row` is the 1-based record number used in error messages.
///
/// Directions past the foul lines are kept; they plot as foul balls.
pub fn normalize_row(row: usize, raw: RawRow) -> Result<HitEvent> {
    let batter = reformat_name(&raw.batter).ok_or_else(|| {
        malformed(
            row,
            format!("batter '{}' is not in 'Last, First' form", raw.batter),
        )
    })?;
    let pitcher = reformat_name(&raw.pitcher).ok_or_else(|| {
        malformed(
            row,
            format!("pitcher '{}' is not in 'Last, First' form", raw.pitcher),
        )
    })?;

    let game_date =
        GameDate::from_serial(raw.game_date).map_err(|e| malformed(row, e.to_string()))?;

    let measurements = [
        ("EXIT_SPEED", raw.exit_speed),
        ("LAUNCH_ANGLE", raw.launch_angle),
        ("HIT_DISTANCE", raw.hit_distance),
        ("EXIT_DIRECTION", raw.exit_direction),
    ];
    if let Some((column, _)) = measurements.iter().find(|(_, v)| !v.is_finite()) {
        return Err(malformed(row, format!("{} is not a finite number", column)));
    }

    if raw.hit_distance < 0.0 {
        return Err(malformed(
            row,
            format!("HIT_DISTANCE {} is negative", raw.hit_distance),
        ));
    }

    let outcome = raw
        .play_outcome
        .as_deref()
        .map(Outcome::from_raw)
        .unwrap_or(Outcome::Unknown);

    let video_link = raw
        .video_link
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty());

    Ok(HitEvent {
        batter,
        pitcher,
        game_date,
        exit_speed: raw.exit_speed,
        launch_angle: raw.launch_angle,
        hit_distance: raw.hit_distance,
        exit_direction: raw.exit_direction,
        outcome,
        video_link,
    })
}
