//! CSV loading for channel data.
//!
//! Files carry a header row. Column names are trimmed, a `Time` column is
//! required, and the amplitude column is picked by name with a positional
//! fallback. Rows without a usable time value are dropped.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::synthetic;
use crate::error::LoadError;

pub const TIME_COLUMN: &str = "Time";
pub const AMPLITUDE_COLUMN: &str = "Amplitude";

/// What to do when a channel file exists but lacks its `Time` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingColumnPolicy {
    /// Refuse to open the viewer.
    #[default]
    Fatal,
    /// Substitute synthetic data, as for a missing file.
    Simulate,
}

/// Series for every configured channel, in order.
#[derive(Debug, Clone)]
pub struct LoadedChannels {
    pub series: Vec<Vec<[f64; 2]>>,
    /// Set when the series were synthesized instead of read from disk.
    pub simulated: bool,
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file))
}

fn read_headers(reader: &mut csv::Reader<File>, path: &Path) -> Result<Vec<String>, LoadError> {
    let headers = reader.headers().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(headers.iter().map(|h| h.trim().to_string()).collect())
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Pick the amplitude column for the channel at `index` (zero based):
/// `Amplitude{index + 1}`, then `Amplitude`, then the second column.
pub fn amplitude_column(headers: &[String], index: usize) -> usize {
    let numbered = format!("{AMPLITUDE_COLUMN}{}", index + 1);
    column_index(headers, &numbered)
        .or_else(|| column_index(headers, AMPLITUDE_COLUMN))
        .unwrap_or(if headers.len() > 1 { 1 } else { 0 })
}

fn parse_field(record: &csv::StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Load one channel file. A missing amplitude value is kept as `NaN`.
pub fn load_channel_csv(
    path: &Path,
    channel_name: &str,
    index: usize,
) -> Result<Vec<[f64; 2]>, LoadError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    let t_idx = column_index(&headers, TIME_COLUMN).ok_or_else(|| LoadError::MissingColumn {
        channel: channel_name.to_string(),
        column: TIME_COLUMN.to_string(),
    })?;
    let a_idx = amplitude_column(&headers, index);
    log::info!(
        "{channel_name}: reading {} (amplitude column '{}')",
        path.display(),
        headers.get(a_idx).map(String::as_str).unwrap_or("")
    );

    let mut series = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(t) = parse_field(&record, t_idx) else {
            dropped += 1;
            continue;
        };
        let a = parse_field(&record, a_idx).unwrap_or(f64::NAN);
        series.push([t, a]);
    }
    if dropped > 0 {
        log::warn!("{channel_name}: dropped {dropped} rows without a time value");
    }
    Ok(series)
}

/// Load every channel, falling back to synthetic data for the whole set when a
/// file is missing (or, under [`MissingColumnPolicy::Simulate`], when a file
/// lacks its time column).
pub fn load_channels(
    sources: &[(String, PathBuf)],
    policy: MissingColumnPolicy,
) -> Result<LoadedChannels, LoadError> {
    if sources.is_empty() {
        return Err(LoadError::NoChannels);
    }
    let mut series = Vec::with_capacity(sources.len());
    for (index, (name, path)) in sources.iter().enumerate() {
        match load_channel_csv(path, name, index) {
            Ok(s) => series.push(s),
            Err(e) if e.is_missing_file() => return Ok(simulate(sources.len(), &e)),
            Err(e @ LoadError::MissingColumn { .. }) if policy == MissingColumnPolicy::Simulate => {
                return Ok(simulate(sources.len(), &e));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(LoadedChannels {
        series,
        simulated: false,
    })
}

fn simulate(count: usize, cause: &LoadError) -> LoadedChannels {
    log::warn!("Error loading channel data: {cause}");
    log::warn!("Using simulated data for {count} channels");
    LoadedChannels {
        series: synthetic::all_series(count),
        simulated: true,
    }
}

/// Load two named columns as `[x, y]` pairs, dropping rows missing either value.
/// Both columns are required.
pub fn load_xy_csv(path: &Path, x_column: &str, y_column: &str) -> Result<Vec<[f64; 2]>, LoadError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    log::info!("Column names: {headers:?}");
    let name = path.display().to_string();
    let missing = |column: &str| LoadError::MissingColumn {
        channel: name.clone(),
        column: column.to_string(),
    };
    let x_idx = column_index(&headers, x_column).ok_or_else(|| missing(x_column))?;
    let y_idx = column_index(&headers, y_column).ok_or_else(|| missing(y_column))?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(x), Some(y)) = (parse_field(&record, x_idx), parse_field(&record, y_idx)) {
            points.push([x, y]);
        }
    }
    Ok(points)
}
