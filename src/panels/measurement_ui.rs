use egui::{Align2, Color32, Id};
use egui_plot::{HLine, LineStyle, PlotPoint, PlotUi, Text, VLine};

use crate::data::cursors::Axis;
use crate::data::snapshot::{Annotation, CursorGlyph};

/// Annotation anchor, as a fraction of the visible plot area from its bottom-left corner.
const ANNOTATION_ANCHOR: [f64; 2] = [0.7, 0.95];

/// Draws cursor lines and the measurement annotation on top of the chart.
pub struct MeasurementOverlay;

impl MeasurementOverlay {
    pub fn draw(plot_ui: &mut PlotUi, cursors: &[CursorGlyph], annotation: Option<&Annotation>) {
        for glyph in cursors {
            // Unnamed items stay out of the legend.
            let id = Id::new(("gainscope_cursor", glyph.id));
            let style = LineStyle::Dashed { length: 6.0 };
            match glyph.axis() {
                Axis::Time => plot_ui.vline(
                    VLine::new("", glyph.position)
                        .id(id)
                        .color(glyph.color)
                        .width(1.0)
                        .style(style),
                ),
                Axis::Amplitude => plot_ui.hline(
                    HLine::new("", glyph.position)
                        .id(id)
                        .color(glyph.color)
                        .width(1.0)
                        .style(style),
                ),
            }
        }

        let Some(annotation) = annotation else {
            return;
        };
        let bounds = plot_ui.plot_bounds();
        let (min, max) = (bounds.min(), bounds.max());
        let pos = PlotPoint::new(
            min[0] + ANNOTATION_ANCHOR[0] * (max[0] - min[0]),
            min[1] + ANNOTATION_ANCHOR[1] * (max[1] - min[1]),
        );

        let font_size = plot_ui.ctx().style().text_styles[&egui::TextStyle::Body].size * 1.2;
        let style = egui::Style::default();
        let mut job = egui::text::LayoutJob::default();
        egui::RichText::new(annotation.text.clone())
            .size(font_size)
            .color(Color32::BLACK)
            .background_color(annotation.background)
            .append_to(&mut job, &style, egui::FontSelection::Default, egui::Align::LEFT);
        plot_ui.text(
            Text::new("", pos, job)
                .id(Id::new("gainscope_annotation"))
                .anchor(Align2::LEFT_TOP),
        );
    }
}
