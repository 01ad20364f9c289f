use egui::{Id, PointerButton, Ui};
use egui_plot::{Legend, Line, Plot, PlotMemory};

use super::measurement_ui::MeasurementOverlay;
use crate::config::FeatureFlags;
use crate::data::channel::ChannelId;
use crate::data::cursors::Axis;
use crate::data::session::{ChartBounds, ControlAction, PointerEvent};
use crate::data::snapshot::{ChannelView, ViewerSnapshot};

pub const PLOT_TITLE: &str = "Multi-Channel Amplitude vs Time";
const PLOT_ID: &str = "gainscope_plot";

/// Plot item id of a channel's line, stable across gain changes.
pub fn channel_item_id(id: ChannelId) -> Id {
    Id::new(("gainscope_channel", id))
}

/// Turn legend entries the user unchecked into visibility actions.
///
/// Ids that do not belong to a drawn channel are ignored.
pub fn legend_actions(hidden: &[Id], channels: &[ChannelView]) -> Vec<ControlAction> {
    channels
        .iter()
        .filter(|ch| hidden.contains(&channel_item_id(ch.id)))
        .map(|ch| ControlAction::SetVisible(ch.id, false))
        .collect()
}

/// What happened on the chart during one frame.
#[derive(Debug)]
pub struct ScopeResponse {
    pub events: Vec<PointerEvent>,
    /// Channel visibility changes requested through the legend.
    pub actions: Vec<ControlAction>,
    /// Visible axis ranges the events refer to.
    pub bounds: ChartBounds,
    /// Pointer position in plot coordinates while hovering the chart.
    pub hover: Option<[f64; 2]>,
}

/// Paints a [`ViewerSnapshot`] and turns raw pointer input into [`PointerEvent`]s.
///
/// Panning and box zoom are disabled so that primary and secondary clicks and
/// drags belong to the cursors. Ctrl+wheel still zooms.
///
/// Clicking a legend entry hides a channel through the registry, never through
/// plot memory: the hidden set egui_plot records is drained every frame.
#[derive(Default)]
pub struct ScopePanel;

impl ScopePanel {
    pub fn show(
        &mut self,
        ui: &mut Ui,
        snapshot: &ViewerSnapshot,
        features: &FeatureFlags,
    ) -> ScopeResponse {
        ui.vertical_centered(|ui| ui.heading(PLOT_TITLE));

        let plot_id = Id::new(PLOT_ID);
        let mut plot = Plot::new(PLOT_ID)
            .id(plot_id)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_scroll(false)
            .allow_zoom(true)
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude (V)")
            .show_grid(features.grid);
        if features.legend {
            plot = plot.legend(Legend::default().follow_insertion_order(true));
        }

        let plot_resp = plot.show(ui, |plot_ui| {
            for ch in &snapshot.channels {
                plot_ui.line(
                    Line::new(ch.legend.clone(), ch.points.clone())
                        .id(channel_item_id(ch.id))
                        .color(ch.color)
                        .width(ch.width),
                );
            }
            MeasurementOverlay::draw(plot_ui, &snapshot.cursors, snapshot.annotation.as_ref());

            let b = plot_ui.plot_bounds();
            let bounds = ChartBounds::new((b.min()[0], b.max()[0]), (b.min()[1], b.max()[1]));
            let pointer = plot_ui.pointer_coordinate().map(|p| [p.x, p.y]);
            (bounds, pointer)
        });

        let (bounds, pointer) = plot_resp.inner;
        let actions = drain_legend_toggles(ui, plot_id, &snapshot.channels);
        let hovered = plot_resp.response.hovered();
        let hover = if hovered { pointer } else { None };

        let (primary, secondary, released, moving) = ui.input(|i| {
            (
                i.pointer.button_pressed(PointerButton::Primary),
                i.pointer.button_pressed(PointerButton::Secondary),
                i.pointer.any_released(),
                i.pointer.is_moving(),
            )
        });

        let mut events = Vec::new();
        if let Some(pos) = hover {
            if primary {
                events.push(PointerEvent::Press {
                    axis: Axis::Time,
                    pos,
                });
            }
            if secondary {
                events.push(PointerEvent::Press {
                    axis: Axis::Amplitude,
                    pos,
                });
            }
            if moving {
                events.push(PointerEvent::Move { pos });
            }
        }
        if released {
            events.push(PointerEvent::Release);
        }

        ScopeResponse {
            events,
            actions,
            bounds,
            hover,
        }
    }
}

fn drain_legend_toggles(ui: &Ui, plot_id: Id, channels: &[ChannelView]) -> Vec<ControlAction> {
    let Some(mut mem) = PlotMemory::load(ui.ctx(), plot_id) else {
        return Vec::new();
    };
    if mem.hidden_items.is_empty() {
        return Vec::new();
    }
    let hidden: Vec<Id> = mem.hidden_items.drain().collect();
    mem.store(ui.ctx(), plot_id);
    legend_actions(&hidden, channels)
}
