//! Spray chart rendering command implementation

use std::path::Path;
use tracing::{info, warn};

use crate::{dataset::Dataset, field::PlotSession, Result};

/// Render a batter's spray chart to an SVG string. Returns `None` for a batter with
/// no events.
pub fn render_batter_svg(dataset: &Dataset, batter: &str) -> Result<Option<String>> {
    let events: Vec<_> = dataset.search(Some(batter))?.into_iter().cloned().collect();
    if events.is_empty() {
        return Ok(None);
    }
    let session = PlotSession::with_system_clock(events);
    Ok(Some(session.scene().to_svg()))
}

/// Write a batter's spray chart to `out`.
pub fn handle_plot(dataset: &Dataset, batter: &str, out: &Path) -> Result<()> {
    let Some(svg) = render_batter_svg(dataset, batter)? else {
        warn!(batter, "no batted balls to plot");
        println!("No results found for '{}'", batter);
        return Ok(());
    };

    std::fs::write(out, svg)?;
    info!(batter, path = %out.display(), "wrote spray chart");
    println!("✓ Spray chart written to {}", out.display());
    Ok(())
}
