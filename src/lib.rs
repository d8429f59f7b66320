//! Spray Chart Library
//!
//! Loads a batted-ball workbook or export, indexes it by batter and pitcher, and projects each
//! ball onto a baseball field so it can be charted, hovered over and served as JSON.
//!
//! ## Features
//!
//! - **Event Normalization**: Spreadsheet serial dates, "Last, First" names and raw
//!   outcome labels become typed [`HitEvent`]s
//! - **Batter Index**: Case-insensitive exact-name lookup and a sorted batter list
//! - **Field Geometry**: Diamond, foul lines and labelled distance arcs
//! - **Spatial Projection**: Distance and direction to field coordinates
//! - **Hover State Machine**: Timed enter/exit transitions for the detail panel
//! - **HTTP API**: `/batters`, `/search`, `/pitchers` and `/videos`
//!
//! ## Quick Start
//!
//! ```rust
//! use spray_chart::{field::project, GameDate};
//!
//! let date = GameDate::from_serial(44197.0).unwrap();
//! assert_eq!(date.to_string(), "1/1/2021");
//!
//! let point = project(350.0, 0.0);
//! assert!(point.x.abs() < 1e-9);
//! assert!((point.y + 350.0).abs() < 1e-9);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at an export once instead of passing `--data` every time:
//! ```bash
//! export SPRAY_CHART_DATA=/path/to/batted_balls.csv
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;
pub mod events;
pub mod field;
pub mod index;

// Re-export commonly used types
pub use dataset::Dataset;
pub use error::{ChartError, QueryParam, Result};
pub use events::{GameDate, HitEvent, Outcome};
pub use index::BatterIndex;

pub const DATA_ENV_VAR: &str = "SPRAY_CHART_DATA";
