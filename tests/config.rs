use std::fs;
use std::path::PathBuf;

use egui::Color32;
use gainscope::config::parse_color;
use gainscope::data::loader::LoadedChannels;
use gainscope::data::synthetic;
use gainscope::{ChannelConfig, ConfigError, MissingColumnPolicy, ViewerConfig};
use tempfile::TempDir;

#[test]
fn defaults_describe_three_channels() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.channels.len(), 3);
    assert_eq!(cfg.channels[1].name, "Channel 2");
    assert_eq!(cfg.missing_column, MissingColumnPolicy::Fatal);
    assert!(cfg.features.legend && cfg.features.grid && cfg.features.coordinate_readout);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = ViewerConfig::from_json(
        r#"{ "missing_column": "simulate", "features": { "grid": false } }"#,
    )
    .unwrap();
    assert_eq!(cfg.missing_column, MissingColumnPolicy::Simulate);
    assert!(!cfg.features.grid);
    assert!(cfg.features.legend);
    assert_eq!(cfg.channels.len(), 3);
}

#[test]
fn malformed_json_is_reported() {
    let err = ViewerConfig::from_json("{ channels: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn load_reads_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.json");
    fs::write(
        &path,
        r##"{ "title": "Bench", "channels": [ { "name": "Probe", "path": "probe.csv", "color": "#00FF00" } ] }"##,
    )
    .unwrap();
    let cfg = ViewerConfig::load(&path).unwrap();
    assert_eq!(cfg.title, "Bench");
    assert_eq!(cfg.channels[0].cursor_color, None);

    let missing = ViewerConfig::load(&dir.path().join("none.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));
}

#[test]
fn relative_paths_resolve_against_data_dir() {
    let mut cfg = ViewerConfig::default().with_data_dir("/data");
    cfg.channels[2].path = PathBuf::from("/abs/ch3.csv");
    let sources = cfg.sources();
    assert_eq!(sources[0].1, PathBuf::from("/data/channel1.csv"));
    assert_eq!(sources[2].1, PathBuf::from("/abs/ch3.csv"));
    assert_eq!(sources[2].0, "Channel 3");
}

#[test]
fn colors_parse_from_hex() {
    assert_eq!(parse_color("#FFFF00").unwrap(), Color32::from_rgb(255, 255, 0));
    assert!(matches!(
        parse_color("yellow"),
        Err(ConfigError::InvalidColor(ref s)) if s == "yellow"
    ));

    let mut ch = ChannelConfig::new("Probe", "p.csv", "#C71585");
    assert_eq!(ch.look().unwrap().cursor_color, Color32::from_rgb(0xC7, 0x15, 0x85));
    ch.cursor_color = Some("#FF0000".to_string());
    assert_eq!(ch.look().unwrap().cursor_color, Color32::RED);
}

#[test]
fn build_session_applies_looks_and_simulated_flag() {
    let cfg = ViewerConfig::default();
    let loaded = LoadedChannels {
        series: synthetic::all_series(3),
        simulated: true,
    };
    let session = cfg.build_session(loaded).unwrap();
    assert!(session.is_simulated());
    assert!(session.title().ends_with(" (simulated data)"));
    let blue = &session.registry().channels()[2];
    assert_eq!(blue.look.color, Color32::from_rgb(0, 0, 255));
    assert_eq!(session.registry().active_id(), 0);
}

#[test]
fn build_session_rejects_mismatched_series() {
    let cfg = ViewerConfig::default();
    let loaded = LoadedChannels {
        series: synthetic::all_series(2),
        simulated: false,
    };
    assert!(cfg.build_session(loaded).is_err());
}
