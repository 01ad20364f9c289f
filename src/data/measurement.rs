//! Cursor-pair measurements: time delta with frequency, and amplitude delta.

use std::fmt;

use super::channel::ChannelId;
use super::cursors::{Axis, CursorPair};

/// Frequency derived from a time delta. A zero delta has no finite frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frequency {
    Hz(f64),
    Infinite,
}

impl Frequency {
    pub fn from_period(delta: f64) -> Self {
        if delta == 0.0 {
            Frequency::Infinite
        } else {
            Frequency::Hz(1.0 / delta)
        }
    }

    pub fn hz(self) -> Option<f64> {
        match self {
            Frequency::Hz(f) => Some(f),
            Frequency::Infinite => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Hz(hz) => write!(f, "{hz:.2} Hz"),
            Frequency::Infinite => write!(f, "∞"),
        }
    }
}

/// A delta measured between the two cursors of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub axis: Axis,
    pub delta: f64,
    /// Only present for time measurements.
    pub frequency: Option<Frequency>,
    pub owner: ChannelId,
    pub owner_name: String,
}

impl Measurement {
    /// Compute the measurement for a complete pair, `None` otherwise.
    pub fn from_pair(
        axis: Axis,
        pair: &CursorPair,
        owner: ChannelId,
        owner_name: &str,
    ) -> Option<Self> {
        let (a, b) = pair.both()?;
        let delta = (b - a).abs();
        let frequency = match axis {
            Axis::Time => Some(Frequency::from_period(delta)),
            Axis::Amplitude => None,
        };
        Some(Self {
            axis,
            delta,
            frequency,
            owner,
            owner_name: owner_name.to_string(),
        })
    }

    /// Annotation text shown on the chart.
    pub fn label(&self) -> String {
        match (self.axis, self.frequency) {
            (Axis::Time, Some(freq)) => format!(
                "ΔTime = {:.4} s\nFreq = {}\n({})",
                self.delta, freq, self.owner_name
            ),
            _ => format!("ΔAmp = {:.4} V\n({})", self.delta, self.owner_name),
        }
    }
}

/// The time and amplitude measurements of the active channel.
///
/// Both may be computed at once, but only the most recently completed or
/// updated one is shown.
#[derive(Debug, Clone, Default)]
pub struct MeasurementBoard {
    time: Option<Measurement>,
    amplitude: Option<Measurement>,
    shown: Option<Axis>,
}

impl MeasurementBoard {
    pub fn get(&self, axis: Axis) -> Option<&Measurement> {
        match axis {
            Axis::Time => self.time.as_ref(),
            Axis::Amplitude => self.amplitude.as_ref(),
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<Measurement> {
        match axis {
            Axis::Time => &mut self.time,
            Axis::Amplitude => &mut self.amplitude,
        }
    }

    /// Recompute the measurement for `axis` from its pair and show it.
    /// An incomplete pair hides the axis' measurement instead.
    pub fn update(&mut self, axis: Axis, pair: &CursorPair, owner: ChannelId, owner_name: &str) {
        match Measurement::from_pair(axis, pair, owner, owner_name) {
            Some(m) => {
                *self.slot_mut(axis) = Some(m);
                self.shown = Some(axis);
            }
            None => self.hide(axis),
        }
    }

    pub fn hide(&mut self, axis: Axis) {
        *self.slot_mut(axis) = None;
        if self.shown == Some(axis) {
            self.shown = None;
        }
    }

    pub fn is_visible(&self, axis: Axis) -> bool {
        self.shown == Some(axis)
    }

    /// The single measurement currently on display, if any.
    pub fn shown(&self) -> Option<&Measurement> {
        self.get(self.shown?)
    }

    pub fn clear(&mut self) {
        self.time = None;
        self.amplitude = None;
        self.shown = None;
    }
}
