//! Viewer session: the single owner of channel, cursor and measurement state.
//!
//! Every user interaction goes through [`ViewerSession::apply`] (channel controls)
//! or [`ViewerSession::handle_pointer`] (chart input), and the renderer reads the
//! result back with [`ViewerSession::snapshot`].

use super::channel::{Channel, ChannelId};
use super::cursors::{Axis, CursorId, CursorStateMachine, PressOutcome};
use super::gain::Gain;
use super::measurement::MeasurementBoard;
use super::registry::{ChannelRegistry, RegistryEffect};
use super::snapshot::{translucent, Annotation, ChannelView, CursorGlyph, ViewerSnapshot};
use crate::error::Result;

pub const DEFAULT_TITLE: &str = "Multi-Channel Amplitude vs Time with Gain";

/// Visible range of both chart axes at the time of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl ChartBounds {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Time => self.x,
            Axis::Amplitude => self.y,
        }
    }

    pub fn span(&self, axis: Axis) -> f64 {
        let (lo, hi) = self.range(axis);
        hi - lo
    }
}

/// Raw chart input, in plot coordinates `[time, amplitude]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { axis: Axis, pos: [f64; 2] },
    Move { pos: [f64; 2] },
    Release,
}

/// Changes coming from the channel control rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    SetVisible(ChannelId, bool),
    SetGain(ChannelId, Gain),
    SetActive(ChannelId),
    ClearCursors,
}

fn axis_value(axis: Axis, pos: [f64; 2]) -> f64 {
    match axis {
        Axis::Time => pos[0],
        Axis::Amplitude => pos[1],
    }
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    registry: ChannelRegistry,
    cursors: CursorStateMachine,
    measurements: MeasurementBoard,
    title: String,
    simulated: bool,
}

impl ViewerSession {
    pub fn new(channels: Vec<Channel>) -> Result<Self> {
        Ok(Self {
            registry: ChannelRegistry::new(channels)?,
            cursors: CursorStateMachine::new(),
            measurements: MeasurementBoard::default(),
            title: DEFAULT_TITLE.to_string(),
            simulated: false,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Mark the session as running on synthetic data.
    pub fn simulated(mut self, simulated: bool) -> Self {
        self.simulated = simulated;
        self
    }

    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    pub fn title(&self) -> String {
        if self.simulated {
            format!("{} (simulated data)", self.title)
        } else {
            self.title.clone()
        }
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    pub fn cursors(&self) -> &CursorStateMachine {
        &self.cursors
    }

    pub fn measurements(&self) -> &MeasurementBoard {
        &self.measurements
    }

    pub fn apply(&mut self, action: ControlAction) -> Result<()> {
        let effect = match action {
            ControlAction::SetVisible(id, visible) => self.registry.set_visible(id, visible)?,
            ControlAction::SetGain(id, gain) => {
                self.registry.set_gain(id, gain)?;
                RegistryEffect::None
            }
            ControlAction::SetActive(id) => self.registry.set_active(id)?,
            ControlAction::ClearCursors => RegistryEffect::ClearCursors,
        };
        if effect == RegistryEffect::ClearCursors {
            self.clear_cursors();
        }
        Ok(())
    }

    pub fn set_visible(&mut self, id: ChannelId, visible: bool) -> Result<()> {
        self.apply(ControlAction::SetVisible(id, visible))
    }

    pub fn set_gain(&mut self, id: ChannelId, gain: Gain) -> Result<()> {
        self.apply(ControlAction::SetGain(id, gain))
    }

    pub fn set_active(&mut self, id: ChannelId) -> Result<()> {
        self.apply(ControlAction::SetActive(id))
    }

    /// Remove all cursors and measurements. Idempotent.
    pub fn clear_cursors(&mut self) {
        self.cursors.clear();
        self.measurements.clear();
    }

    /// Feed one pointer event into the cursor state machine.
    ///
    /// Presses and drags are ignored while the active channel is hidden; a
    /// release always ends a drag.
    pub fn handle_pointer(&mut self, event: PointerEvent, bounds: &ChartBounds) {
        match event {
            PointerEvent::Press { axis, pos } => {
                if !self.registry.active_visible() {
                    return;
                }
                let value = axis_value(axis, pos);
                match self.cursors.press(axis, value, bounds.span(axis)) {
                    PressOutcome::DragStarted(_) => {}
                    PressOutcome::Placed { restarted, .. } => {
                        if restarted {
                            self.measurements.hide(axis);
                        }
                        self.refresh_measurement(axis);
                    }
                }
            }
            PointerEvent::Move { pos } => {
                if !self.registry.active_visible() {
                    return;
                }
                let Some(target) = self.cursors.drag().target() else {
                    return;
                };
                let axis = target.axis();
                if self
                    .cursors
                    .drag_to(axis_value(axis, pos), bounds.range(axis))
                    .is_some()
                {
                    self.refresh_measurement(axis);
                }
            }
            PointerEvent::Release => self.cursors.release(),
        }
    }

    fn refresh_measurement(&mut self, axis: Axis) {
        let pair = self.cursors.pair(axis);
        if !pair.is_complete() {
            return;
        }
        let active = self.registry.active_id();
        let name = self.registry.active().name.clone();
        self.measurements.update(axis, pair, active, &name);
    }

    /// Hover label for the status line.
    pub fn coordinate_readout(&self, pos: Option<[f64; 2]>) -> String {
        match pos {
            Some([x, y]) => format!(
                "X: {x:.3}, Y: {y:.3} ({})",
                self.registry.active().name
            ),
            None => "X: ---, Y: ---".to_string(),
        }
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        let channels = self
            .registry
            .channels()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible())
            .map(|(id, c)| ChannelView {
                id,
                name: c.name.clone(),
                legend: c.legend_label(),
                color: c.look.color,
                width: c.look.width,
                points: c.displayed_series(),
            })
            .collect();

        let active = self.registry.active();
        let mut cursors = Vec::new();
        let mut annotation = None;
        if active.visible() {
            for id in [CursorId::V1, CursorId::V2, CursorId::H1, CursorId::H2] {
                if let Some(position) = self.cursors.position(id) {
                    cursors.push(CursorGlyph {
                        id,
                        position,
                        color: active.look.cursor_color,
                    });
                }
            }
            annotation = self.measurements.shown().map(|m| Annotation {
                text: m.label(),
                background: translucent(active.look.color),
            });
        }

        ViewerSnapshot {
            title: self.title(),
            active: self.registry.active_id(),
            channels,
            cursors,
            annotation,
        }
    }
}
