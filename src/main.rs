//! Multi-channel waveform viewer.
//!
//! Usage:
//!   gainscope [--config viewer.json] [--data-dir DIR]
//!
//! Without a config, three channels are read from `channel1.csv` ..
//! `channel3.csv`. If a file is missing the viewer opens on simulated data.

use std::path::PathBuf;

use anyhow::Context;
use gainscope::{load_channels, run_viewer, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config_path: Option<PathBuf> = None;
    let mut data_dir: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = args.next().map(PathBuf::from),
            "--data-dir" => data_dir = args.next().map(PathBuf::from),
            other => anyhow::bail!("unexpected argument '{other}'"),
        }
    }

    let mut cfg = match &config_path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = data_dir {
        cfg = cfg.with_data_dir(dir);
    }

    let loaded = load_channels(&cfg.sources(), cfg.missing_column)
        .context("loading channel data")?;
    let session = cfg.build_session(loaded)?;

    run_viewer(session, &cfg).map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
