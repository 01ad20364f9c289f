//! Single-shot plot of one `Time`/`Amplitude` table.

use eframe::egui;
use egui_plot::{Legend, Line, Plot};

pub const STATIC_PLOT_TITLE: &str = "Amplitude vs Time";

pub struct StaticPlotApp {
    points: Vec<[f64; 2]>,
}

impl StaticPlotApp {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points }
    }
}

impl eframe::App for StaticPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(STATIC_PLOT_TITLE));
            Plot::new("static_plot")
                .legend(Legend::default())
                .show_grid(true)
                .x_axis_label("Time (s)")
                .y_axis_label("Amplitude (V)")
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new("Amplitude", self.points.clone())
                            .color(egui::Color32::BLUE)
                            .width(1.5),
                    );
                });
        });
    }
}
