//! gainscope crate root: re-exports and module wiring.
//!
//! Desktop tools for plotting recorded or simulated waveforms and measuring them
//! with cursors, built on egui/eframe:
//! - `data`: channel model, cursor state machine, measurements, CSV loading and
//!   synthetic signals. Free of any UI code.
//! - `panels`: egui widgets that render a [`ViewerSnapshot`] and report input.
//! - `app`: eframe applications and `run_*` entry points.
//! - `config`: viewer configuration loaded from JSON.
//! - `error`: error types.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_daq_scope, run_static_plot, run_viewer, ViewerApp};
pub use config::{ChannelConfig, FeatureFlags, ViewerConfig};
pub use data::channel::{Channel, ChannelId, ChannelLook};
pub use data::cursors::{Axis, CursorId, CursorStateMachine, DragState};
pub use data::gain::Gain;
pub use data::loader::{load_channels, MissingColumnPolicy};
pub use data::measurement::{Frequency, Measurement};
pub use data::registry::ChannelRegistry;
pub use data::session::{ChartBounds, ControlAction, PointerEvent, ViewerSession};
pub use data::snapshot::ViewerSnapshot;
pub use error::{ConfigError, LoadError, ViewerError};
