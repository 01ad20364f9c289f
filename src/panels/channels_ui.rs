use egui::Ui;
use egui_phosphor::regular::{BROOM, CROSSHAIR};

use crate::data::gain::Gain;
use crate::data::registry::ChannelRegistry;
use crate::data::session::ControlAction;

/// One control row per channel: visibility, color swatch, gain and active selection.
///
/// The panel holds no channel state; it renders the registry as-is and reports
/// what the user changed.
#[derive(Default)]
pub struct ChannelsPanel;

impl ChannelsPanel {
    pub const TITLE: &'static str = "Channel Controls";

    pub fn show(&mut self, ui: &mut Ui, registry: &ChannelRegistry) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        ui.strong(Self::TITLE);
        for (id, channel) in registry.channels().iter().enumerate() {
            ui.horizontal(|ui| {
                let mut visible = channel.visible();
                if ui.checkbox(&mut visible, channel.name.as_str()).changed() {
                    actions.push(ControlAction::SetVisible(id, visible));
                }

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(24.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, channel.look.color);

                ui.label("Gain:");
                let current = channel.gain();
                let mut gain = current;
                egui::ComboBox::from_id_salt(("gain", id))
                    .selected_text(gain.to_string())
                    .width(60.0)
                    .show_ui(ui, |ui| {
                        for g in Gain::ALL {
                            ui.selectable_value(&mut gain, g, g.to_string());
                        }
                    });
                if gain != current {
                    actions.push(ControlAction::SetGain(id, gain));
                }

                let is_active = registry.active_id() == id;
                if ui
                    .radio(is_active, format!("{CROSSHAIR} Active"))
                    .on_hover_text("Cursors and measurements follow this channel")
                    .clicked()
                {
                    actions.push(ControlAction::SetActive(id));
                }
            });
        }
        if ui
            .button(format!("{BROOM} Clear cursors"))
            .clicked()
        {
            actions.push(ControlAction::ClearCursors);
        }
        actions
    }
}
