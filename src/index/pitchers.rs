//! Per-batter pitcher grouping and video cards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::events::HitEvent;

/// One batter's events grouped by the pitcher faced.
#[derive(Debug, Clone, Default)]
pub struct PitcherIndex<'a> {
    by_pitcher: BTreeMap<&'a str, Vec<&'a HitEvent>>,
}

impl<'a> PitcherIndex<'a> {
    pub fn for_batter<I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a HitEvent>,
    {
        let mut by_pitcher: BTreeMap<&'a str, Vec<&'a HitEvent>> = BTreeMap::new();
        for event in events {
            by_pitcher
                .entry(event.pitcher.as_str())
                .or_default()
                .push(event);
        }
        Self { by_pitcher }
    }

    /// Distinct pitchers, sorted ascending.
    pub fn pitchers(&self) -> Vec<&'a str> {
        self.by_pitcher.keys().copied().collect()
    }

    /// Events against `pitcher` (exact name match), in original order.
    pub fn events_against(&self, pitcher: &str) -> &[&'a HitEvent] {
        self.by_pitcher
            .get(pitcher)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Video-bearing events against `pitcher`.
    pub fn videos(&self, pitcher: &str) -> Vec<VideoCard> {
        self.events_against(pitcher)
            .iter()
            .filter_map(|event| VideoCard::from_event(event))
            .collect()
    }
}

/// A labeled link to one batted ball's video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCard {
    pub title: String,
    pub date: String,
    pub exit_speed: String,
    pub launch_angle: String,
    pub hit_distance: String,
    pub outcome: String,
    pub link: String,
}

impl VideoCard {
    /// `None` when the event carries no video.
    pub fn from_event(event: &HitEvent) -> Option<Self> {
        let link = event.video_link.clone()?;
        Some(Self {
            title: format!("{} vs {}", event.batter, event.pitcher),
            date: event.game_date.to_string(),
            exit_speed: format!("{:.1} mph", event.exit_speed),
            launch_angle: format!("{:.1}°", event.launch_angle),
            hit_distance: format!("{:.1} ft", event.hit_distance),
            outcome: event.outcome.to_string(),
            link,
        })
    }
}
