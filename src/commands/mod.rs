//! Command implementations for the spray chart CLI

pub mod batters;
pub mod plot;
pub mod search;
pub mod serve;
pub mod videos;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::{dataset::Dataset, error::ChartError, Result, DATA_ENV_VAR};

/// Resolve the data file from the command line, falling back to `SPRAY_CHART_DATA`.
pub fn resolve_data_path(data: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data {
        return Ok(path);
    }
    match std::env::var(DATA_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Err(ChartError::MissingDataPath {
            env_var: DATA_ENV_VAR.to_string(),
        }),
    }
}

/// Load the dataset snapshot once, ready to be shared.
pub fn load_dataset(path: &Path) -> Result<Arc<Dataset>> {
    let dataset = Dataset::load(path)?;
    info!(
        events = dataset.events().len(),
        batters = dataset.list_batters().len(),
        "dataset ready"
    );
    Ok(Arc::new(dataset))
}
