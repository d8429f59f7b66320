//! Canonical batted-ball event types.

use crate::error::{ChartError, Result};
use chrono::{DateTime, NaiveDate};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Spreadsheet serial of 1970-01-01. Day 0 of the serial calendar lands on
/// 1899-12-30 because the source calendar counts a 29 February 1900 that never existed.
pub const UNIX_EPOCH_SERIAL: i64 = 25_569;

pub const SECONDS_PER_DAY: i64 = 86_400;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";
const PARSE_FORMAT: &str = "%m/%d/%Y";

/// Calendar date of a game, normalized from a spreadsheet day serial.
///
/// Displays and serializes as `M/D/YYYY` without zero padding, e.g. `1/1/2021`.
///
/// # Examples
///
/// ```rust
/// use spray_chart::GameDate;
///
/// let date = GameDate::from_serial(44197.0).unwrap();
/// assert_eq!(date.to_string(), "1/1/2021");
/// assert_eq!(date.to_serial(), 44197);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameDate(NaiveDate);

impl GameDate {
    /// Convert a day serial to a calendar date. Fractional days are dropped.
    pub fn from_serial(serial: f64) -> Result<Self> {
        if !serial.is_finite() {
            return Err(ChartError::InvalidDate { serial });
        }

        // Saturates for huge magnitudes; the checked math below rejects those.
        let days = serial.floor() as i64;
        let seconds = days
            .checked_sub(UNIX_EPOCH_SERIAL)
            .and_then(|d| d.checked_mul(SECONDS_PER_DAY))
            .ok_or(ChartError::InvalidDate { serial })?;
        let timestamp =
            DateTime::from_timestamp(seconds, 0).ok_or(ChartError::InvalidDate { serial })?;

        Ok(Self(timestamp.date_naive()))
    }

    /// Day serial of this date; the inverse of [`GameDate::from_serial`].
    pub fn to_serial(&self) -> i64 {
        // NaiveDate's default is 1970-01-01
        (self.0 - NaiveDate::default()).num_days() + UNIX_EPOCH_SERIAL
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for GameDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), PARSE_FORMAT)
            .map(Self)
            .map_err(|e| ChartError::BadRequest {
                message: format!("invalid game date '{}': {}", s, e),
            })
    }
}

impl Serialize for GameDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Result category of a batted ball.
///
/// Anything outside the fixed set is carried as [`Outcome::Unknown`]; the outcome only
/// drives display color, never whether an event is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    Unknown,
}

impl Outcome {
    /// Recognized categories in legend order.
    pub const KNOWN: [Outcome; 5] = [
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::Out,
    ];

    /// Map a raw outcome cell onto the fixed set. Matching is exact.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Single" => Outcome::Single,
            "Double" => Outcome::Double,
            "Triple" => Outcome::Triple,
            "HomeRun" => Outcome::HomeRun,
            "Out" => Outcome::Out,
            _ => Outcome::Unknown,
        }
    }

    /// Marker fill color.
    pub fn color(&self) -> &'static str {
        match self {
            Outcome::Single => "#0000FF",
            Outcome::Double => "#FFFF00",
            Outcome::Triple => "#800080",
            Outcome::HomeRun => "#00FF00",
            Outcome::Out => "#FF0000",
            Outcome::Unknown => "gray",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Single => "Single",
            Outcome::Double => "Double",
            Outcome::Triple => "Triple",
            Outcome::HomeRun => "HomeRun",
            Outcome::Out => "Out",
            Outcome::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// One normalized batted-ball record.
///
/// Serializes with the spreadsheet's column names so API consumers see the same
/// shape as the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    #[serde(rename = "BATTER")]
    pub batter: String,
    #[serde(rename = "PITCHER")]
    pub pitcher: String,
    #[serde(rename = "GAME_DATE")]
    pub game_date: GameDate,
    /// mph
    #[serde(rename = "EXIT_SPEED")]
    pub exit_speed: f64,
    /// degrees
    #[serde(rename = "LAUNCH_ANGLE")]
    pub launch_angle: f64,
    /// feet from home plate
    #[serde(rename = "HIT_DISTANCE")]
    pub hit_distance: f64,
    /// degrees from the center axis; negative is left field
    #[serde(rename = "EXIT_DIRECTION")]
    pub exit_direction: f64,
    #[serde(rename = "PLAY_OUTCOME")]
    pub outcome: Outcome,
    #[serde(rename = "VIDEO_LINK", default, skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
}

impl HitEvent {
    pub fn has_video(&self) -> bool {
        self.video_link.is_some()
    }
}
