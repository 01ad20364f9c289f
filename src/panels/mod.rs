pub mod channels_ui;
pub mod measurement_ui;
pub mod scope_ui;

pub use channels_ui::ChannelsPanel;
pub use measurement_ui::MeasurementOverlay;
pub use scope_ui::{ScopePanel, ScopeResponse};
