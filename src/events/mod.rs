//! Batted-ball events: canonical types, row normalization and export loading.

pub mod loader;
pub mod normalize;
pub mod types;


pub use loader::{load_events, load_events_from_reader, SourceFormat};
pub use normalize::{normalize_row, reformat_name, RawRow};
pub use types::{GameDate, HitEvent, Outcome};
