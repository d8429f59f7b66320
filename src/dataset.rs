//! The in-memory dataset snapshot and the read-only queries served from it.
//!
//! A [`Dataset`] is built once, before anything is served, and never changes
//! afterward. Share it behind an `Arc`; every query is a pure read.

use std::path::Path;

use crate::{
    error::{ChartError, QueryParam, Result},
    events::{load_events, HitEvent},
    index::{BatterIndex, PitcherIndex, VideoCard},
};

#[derive(Debug, Clone)]
pub struct Dataset {
    batters: BatterIndex,
}

/// Absent and empty parameters are missing; anything else is looked up as given.
fn required<'q>(value: Option<&'q str>, param: QueryParam) -> Result<&'q str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ChartError::MissingParameter { param }),
    }
}

impl Dataset {
    pub fn from_events(events: Vec<HitEvent>) -> Self {
        Self {
            batters: BatterIndex::build(events),
        }
    }

    /// Load and index an export file. Any malformed row fails the whole load.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_events(load_events(path)?))
    }

    pub fn batter_index(&self) -> &BatterIndex {
        &self.batters
    }

    pub fn events(&self) -> &[HitEvent] {
        self.batters.events()
    }

    pub fn list_batters(&self) -> &[String] {
        self.batters.list_batters()
    }

    /// Events for a batter. No match is an empty list, not an error.
    pub fn search(&self, batter: Option<&str>) -> Result<Vec<&HitEvent>> {
        let batter = required(batter, QueryParam::Batter)?;
        Ok(self.batters.lookup(batter))
    }

    /// Distinct pitchers a batter has faced, sorted.
    pub fn pitchers(&self, batter: Option<&str>) -> Result<Vec<&str>> {
        let events = self.search(batter)?;
        Ok(PitcherIndex::for_batter(events).pitchers())
    }

    /// Video cards for one batter/pitcher pairing.
    pub fn videos(&self, batter: Option<&str>, pitcher: Option<&str>) -> Result<Vec<VideoCard>> {
        let events = self.search(batter)?;
        let pitcher = required(pitcher, QueryParam::Pitcher)?;
        Ok(PitcherIndex::for_batter(events).videos(pitcher))
    }
}
