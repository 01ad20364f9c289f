//! Channel model: one named, colored, independently gained signal series.

use egui::Color32;

use super::gain::{scale_series, Gain};

/// Channels are addressed by their position in the registry.
pub type ChannelId = usize;

/// Visual presentation of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLook {
    /// Trace and annotation background color.
    pub color: Color32,
    /// Color of the cursor lines placed while this channel is active.
    pub cursor_color: Color32,
    pub width: f32,
}

impl Default for ChannelLook {
    fn default() -> Self {
        Self {
            color: Color32::GRAY,
            cursor_color: Color32::GRAY,
            width: 1.5,
        }
    }
}

impl ChannelLook {
    pub fn new(color: Color32, cursor_color: Color32) -> Self {
        Self {
            color,
            cursor_color,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Channel {
    pub name: String,
    pub look: ChannelLook,
    pub(crate) visible: bool,
    pub(crate) gain: Gain,
    series: Vec<[f64; 2]>,
}

impl Channel {
    /// Create a visible channel at unity gain. The series is fixed from here on.
    pub fn new(name: impl Into<String>, look: ChannelLook, series: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            look,
            visible: true,
            gain: Gain::One,
            series,
        }
    }

    pub fn with_gain(mut self, gain: Gain) -> Self {
        self.gain = gain;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Raw `[time, amplitude]` samples as loaded.
    pub fn series(&self) -> &[[f64; 2]] {
        &self.series
    }

    /// Samples with the current gain applied.
    pub fn displayed_series(&self) -> Vec<[f64; 2]> {
        scale_series(&self.series, self.gain)
    }

    pub fn legend_label(&self) -> String {
        format!("{} (Gain = {})", self.name, self.gain)
    }
}
