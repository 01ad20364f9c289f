//! Plot `Amplitude` against `Time` from a single CSV file.
//!
//! Usage:
//!   static_plot [path/to/data.csv]

use std::path::PathBuf;

use anyhow::Context;
use gainscope::data::loader::{load_xy_csv, AMPLITUDE_COLUMN, TIME_COLUMN};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data.csv"));

    let points = load_xy_csv(&path, TIME_COLUMN, AMPLITUDE_COLUMN)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!("plotting {} samples from {}", points.len(), path.display());

    gainscope::run_static_plot(points).map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}
