//! Native application wrappers.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`viewer_app`]    | Multi-channel viewer with gain control and cursor measurements |
//! | [`static_plot`]   | Single-shot `Amplitude vs Time` plot |
//! | [`daq_scope`]     | Simulated PGA oscilloscope |
//! | [`run`]           | `run_*` entry points that open a native window |

pub mod daq_scope;
pub mod run;
pub mod static_plot;
pub mod viewer_app;

pub use daq_scope::DaqScopeApp;
pub use run::{run_daq_scope, run_static_plot, run_viewer};
pub use static_plot::StaticPlotApp;
pub use viewer_app::ViewerApp;
