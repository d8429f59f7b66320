//! Query indices over the canonical event collection.
//!
//! - [`BatterIndex`]: case-insensitive batter name → events
//! - [`pitchers::PitcherIndex`]: one batter's events grouped by pitcher

pub mod pitchers;


use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::events::HitEvent;

pub use pitchers::{PitcherIndex, VideoCard};

/// Key used for case-insensitive name matching. Whitespace is significant.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Immutable batter lookup over a shared event collection.
///
/// Holds positions into the collection rather than copies, so every lookup yields
/// events in their original order.
#[derive(Debug, Clone)]
pub struct BatterIndex {
    events: Arc<[HitEvent]>,
    by_batter: HashMap<String, Vec<usize>>,
    names: Vec<String>,
}

impl BatterIndex {
    pub fn build(events: impl Into<Arc<[HitEvent]>>) -> Self {
        let events = events.into();
        let mut by_batter: HashMap<String, Vec<usize>> = HashMap::new();
        let mut names = BTreeSet::new();

        for (pos, event) in events.iter().enumerate() {
            let positions = by_batter.entry(name_key(&event.batter)).or_default();
            // First spelling seen for a key is the one listed.
            if positions.is_empty() {
                names.insert(event.batter.clone());
            }
            positions.push(pos);
        }

        Self {
            events,
            by_batter,
            names: names.into_iter().collect(),
        }
    }

    /// All events for `name`, matched case-insensitively. Unknown names yield an
    /// empty list.
    pub fn lookup(&self, name: &str) -> Vec<&HitEvent> {
        self.by_batter
            .get(&name_key(name))
            .map(|positions| positions.iter().map(|&i| &self.events[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct batter names, sorted ascending.
    pub fn list_batters(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_batter.contains_key(&name_key(name))
    }

    /// The whole collection, in load order.
    pub fn events(&self) -> &[HitEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
