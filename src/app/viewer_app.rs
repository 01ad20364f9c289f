//! Native application wrapper for the multi-channel viewer.
//!
//! [`ViewerApp`] owns the [`ViewerSession`] and implements [`eframe::App`]. Each
//! frame it renders the channel controls and the chart from a fresh snapshot,
//! then feeds the collected control actions and pointer events back into the
//! session.

use eframe::egui;

use crate::config::FeatureFlags;
use crate::data::session::{ControlAction, ViewerSession};
use crate::panels::{ChannelsPanel, ScopePanel};

pub struct ViewerApp {
    session: ViewerSession,
    features: FeatureFlags,
    channels_panel: ChannelsPanel,
    scope_panel: ScopePanel,
    /// Coordinate readout from the most recent frame.
    readout: String,
}

impl ViewerApp {
    pub fn new(session: ViewerSession, features: FeatureFlags) -> Self {
        let readout = session.coordinate_readout(None);
        Self {
            session,
            features,
            channels_panel: ChannelsPanel,
            scope_panel: ScopePanel,
            readout,
        }
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    fn apply_actions(&mut self, actions: Vec<ControlAction>) {
        for action in actions {
            log::debug!("control action {action:?}");
            if let Err(e) = self.session.apply(action) {
                log::error!("ignoring control action {action:?}: {e}");
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::TopBottomPanel::top("channel_controls")
            .show(ctx, |ui| {
                self.channels_panel.show(ui, self.session.registry())
            })
            .inner;
        self.apply_actions(actions);

        if self.features.coordinate_readout {
            egui::TopBottomPanel::bottom("coordinate_readout").show(ctx, |ui| {
                ui.vertical_centered(|ui| ui.label(&self.readout));
            });
        }

        let snapshot = self.session.snapshot();
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| self.scope_panel.show(ui, &snapshot, &self.features))
            .inner;

        self.apply_actions(response.actions);
        for event in response.events {
            self.session.handle_pointer(event, &response.bounds);
        }
        self.readout = self.session.coordinate_readout(response.hover);
    }
}
