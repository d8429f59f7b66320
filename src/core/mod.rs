//! Process-wide utilities
//!
//! - `logging`: tracing subscriber setup

pub mod logging;
