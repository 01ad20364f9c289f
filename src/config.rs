//! Configuration for the multi-channel viewer.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::channel::{Channel, ChannelLook};
use crate::data::loader::{LoadedChannels, MissingColumnPolicy};
use crate::data::session::{ViewerSession, DEFAULT_TITLE};
use crate::error::{ConfigError, ViewerError};

// ─────────────────────────────────────────────────────────────────────────────
// Channel definitions
// ─────────────────────────────────────────────────────────────────────────────

/// One channel row: where its data lives and how it is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub name: String,
    /// CSV file; relative paths are resolved against the data directory.
    pub path: PathBuf,
    /// `#RRGGBB`
    pub color: String,
    /// `#RRGGBB`; defaults to `color`.
    #[serde(default)]
    pub cursor_color: Option<String>,
}

impl ChannelConfig {
    pub fn new(name: &str, path: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(path),
            color: color.to_string(),
            cursor_color: None,
        }
    }

    pub fn look(&self) -> Result<ChannelLook, ConfigError> {
        let color = parse_color(&self.color)?;
        let cursor_color = match &self.cursor_color {
            Some(c) => parse_color(c)?,
            None => color,
        };
        Ok(ChannelLook::new(color, cursor_color))
    }
}

/// Parse a `#RRGGBB` (or `#RRGGBBAA`) string.
pub fn parse_color(s: &str) -> Result<Color32, ConfigError> {
    Color32::from_hex(s.trim()).map_err(|_| ConfigError::InvalidColor(s.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle optional pieces of the viewer UI. All default to `true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the plot legend.
    pub legend: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Show the `X: .., Y: ..` status line under the chart.
    pub coordinate_readout: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            legend: true,
            grid: true,
            coordinate_readout: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the viewer.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `channels`       | Channel files and colors, in display order |
/// | `missing_column` | Whether a file without `Time` aborts or falls back to synthetic data |
/// | `features`       | Optional UI pieces |
/// | `window_size`    | Initial window size in points |
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    pub channels: Vec<ChannelConfig>,
    pub missing_column: MissingColumnPolicy,
    pub features: FeatureFlags,
    pub window_size: [f32; 2],
    /// Base directory for relative channel paths.
    #[serde(skip)]
    pub data_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            channels: vec![
                ChannelConfig::new("Channel 1", "channel1.csv", "#FFFF00"),
                ChannelConfig::new("Channel 2", "channel2.csv", "#C71585"),
                ChannelConfig::new("Channel 3", "channel3.csv", "#0000FF"),
            ],
            missing_column: MissingColumnPolicy::default(),
            features: FeatureFlags::default(),
            window_size: [900.0, 700.0],
            data_dir: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let cfg = Self::from_json(&json)?;
        log::info!("loaded viewer config from {}", path.display());
        Ok(cfg)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// `(name, resolved path)` for every channel, in order.
    pub fn sources(&self) -> Vec<(String, PathBuf)> {
        self.channels
            .iter()
            .map(|c| {
                let path = match &self.data_dir {
                    Some(dir) if c.path.is_relative() => dir.join(&c.path),
                    _ => c.path.clone(),
                };
                (c.name.clone(), path)
            })
            .collect()
    }

    /// Build a session from loaded series, one per configured channel.
    pub fn build_session(&self, loaded: LoadedChannels) -> anyhow::Result<ViewerSession> {
        if loaded.series.len() != self.channels.len() {
            anyhow::bail!(
                "loaded {} series for {} configured channels",
                loaded.series.len(),
                self.channels.len()
            );
        }
        let mut channels = Vec::with_capacity(self.channels.len());
        for (cfg, series) in self.channels.iter().zip(loaded.series) {
            channels.push(Channel::new(cfg.name.clone(), cfg.look()?, series));
        }
        if channels.is_empty() {
            return Err(ViewerError::NoChannels.into());
        }
        Ok(ViewerSession::new(channels)?
            .with_title(self.title.clone())
            .simulated(loaded.simulated))
    }
}
