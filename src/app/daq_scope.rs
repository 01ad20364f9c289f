//! Simulated single-channel oscilloscope with a PGA gain selector.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::pga::{self, PgaSetting, CAPTURE_SAMPLES, PGA_SETTINGS};

pub const DAQ_SCOPE_TITLE: &str = "Easy DAQ Oscilloscope with MCP6S21 Gain Scaling";

pub struct DaqScopeApp {
    setting: &'static PgaSetting,
    samples: Vec<f64>,
    info: String,
    rng: StdRng,
}

impl Default for DaqScopeApp {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl DaqScopeApp {
    pub fn new(rng: StdRng) -> Self {
        Self {
            setting: &PGA_SETTINGS[0],
            samples: Vec::new(),
            info: String::new(),
            rng,
        }
    }

    pub fn setting(&self) -> &PgaSetting {
        self.setting
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn select(&mut self, label: &str) -> Result<(), crate::error::ViewerError> {
        self.setting = pga::setting(label)?;
        self.capture();
        Ok(())
    }

    /// Take a new simulated capture at the selected gain.
    pub fn capture(&mut self) {
        self.samples = pga::simulate_capture(&mut self.rng, self.setting);
        self.info = self.setting.info_line();
        log::debug!("captured {} samples at {}", self.samples.len(), self.setting.label);
    }
}

impl eframe::App for DaqScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Select MCP6S21 PGA Gain:");
                let mut selected = self.setting.label;
                egui::ComboBox::from_id_salt("pga_gain")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for s in PGA_SETTINGS.iter() {
                            ui.selectable_value(&mut selected, s.label, s.label);
                        }
                    });
                if selected != self.setting.label {
                    if let Err(e) = self.select(selected) {
                        log::error!("{e}");
                    }
                }
                if ui.button("Start Capture").clicked() {
                    self.capture();
                }
                ui.label(&self.info);
            });

            ui.vertical_centered(|ui| ui.heading("Oscilloscope View"));
            let range = self.setting.plot_range();
            let points: Vec<[f64; 2]> = self
                .samples
                .iter()
                .enumerate()
                .map(|(i, v)| [i as f64, *v])
                .collect();
            Plot::new("daq_scope_plot")
                .legend(Legend::default())
                .show_grid(true)
                .x_axis_label("Sample #")
                .y_axis_label("Voltage")
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [0.0, 0.0],
                        [CAPTURE_SAMPLES as f64, range],
                    ));
                    plot_ui.line(Line::new("Input Signal", points));
                });
        });
    }
}
