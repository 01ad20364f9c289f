//! Entry points for running the tools as native windows.
//!
//! Each `run_*` function builds its app, opens a window and blocks until the
//! window is closed.

use eframe::egui;

use super::daq_scope::{DaqScopeApp, DAQ_SCOPE_TITLE};
use super::static_plot::{StaticPlotApp, STATIC_PLOT_TITLE};
use super::viewer_app::ViewerApp;
use crate::config::ViewerConfig;
use crate::data::session::ViewerSession;

/// Launch the multi-channel viewer.
///
/// The window title comes from the session, so a session running on synthetic
/// data is labelled as such.
pub fn run_viewer(session: ViewerSession, cfg: &ViewerConfig) -> eframe::Result<()> {
    let title = session.title();
    let [w, h] = cfg.window_size;
    log::info!("opening viewer '{title}' with {} channels", session.registry().len());
    let app = ViewerApp::new(session, cfg.features.clone());
    run_native(&title, egui::vec2(w, h), app)
}

pub fn run_static_plot(points: Vec<[f64; 2]>) -> eframe::Result<()> {
    run_native(
        STATIC_PLOT_TITLE,
        egui::vec2(1000.0, 600.0),
        StaticPlotApp::new(points),
    )
}

pub fn run_daq_scope() -> eframe::Result<()> {
    run_native(DAQ_SCOPE_TITLE, egui::vec2(640.0, 480.0), DaqScopeApp::default())
}

fn run_native<A: eframe::App + 'static>(
    title: &str,
    size: egui::Vec2,
    app: A,
) -> eframe::Result<()> {
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(
        title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
