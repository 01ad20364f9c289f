//! Read-only view of the session handed to the renderer after every event.

use egui::Color32;

use super::channel::ChannelId;
use super::cursors::{Axis, CursorId};

/// Background alpha applied to the annotation box (30%).
pub const ANNOTATION_ALPHA: u8 = 77;

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelView {
    pub id: ChannelId,
    pub name: String,
    pub legend: String,
    pub color: Color32,
    pub width: f32,
    /// `[time, amplitude * gain]`
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlyph {
    pub id: CursorId,
    pub position: f64,
    pub color: Color32,
}

impl CursorGlyph {
    pub fn axis(&self) -> Axis {
        self.id.axis()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub background: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot {
    pub title: String,
    pub active: ChannelId,
    /// Visible channels only, in registry order.
    pub channels: Vec<ChannelView>,
    pub cursors: Vec<CursorGlyph>,
    pub annotation: Option<Annotation>,
}

impl ViewerSnapshot {
    pub fn channel(&self, id: ChannelId) -> Option<&ChannelView> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn cursor(&self, id: CursorId) -> Option<&CursorGlyph> {
        self.cursors.iter().find(|c| c.id == id)
    }
}

pub(crate) fn translucent(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), ANNOTATION_ALPHA)
}
