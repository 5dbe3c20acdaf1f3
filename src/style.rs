use egui::{Color32, Stroke};

use crate::shape::ShapeKind;

/// Outline and fill consumed by [`Shape::set_style`](crate::shape::Shape::set_style).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub stroke: Stroke,
    pub fill: Color32,
}

impl ShapeStyle {
    pub fn new(stroke: Stroke, fill: Color32) -> Self {
        Self { stroke, fill }
    }
}

const ACCENT: Color32 = Color32::from_rgb(0x3d, 0x7e, 0xc9);
const ACCENT_DARK: Color32 = Color32::from_rgb(0x1f, 0x4e, 0x8c);

/// Style for a shape that is still being sketched: thin outline, washed-out
/// fill, so the draft reads as provisional next to committed shapes.
pub fn editing_style_for(kind: ShapeKind) -> ShapeStyle {
    match kind {
        ShapeKind::Point => ShapeStyle::new(
            Stroke::new(1.0, ACCENT),
            Color32::from_rgba_unmultiplied(0x3d, 0x7e, 0xc9, 140),
        ),
        ShapeKind::Circle | ShapeKind::Polygon => ShapeStyle::new(
            Stroke::new(1.0, ACCENT),
            Color32::from_rgba_unmultiplied(0x3d, 0x7e, 0xc9, 40),
        ),
        ShapeKind::Line => ShapeStyle::new(Stroke::new(1.5, ACCENT), Color32::TRANSPARENT),
    }
}

/// Style applied when a sketch is committed.
pub fn finished_style_for(kind: ShapeKind) -> ShapeStyle {
    match kind {
        ShapeKind::Point => ShapeStyle::new(Stroke::new(1.0, ACCENT_DARK), ACCENT_DARK),
        ShapeKind::Circle | ShapeKind::Polygon => ShapeStyle::new(
            Stroke::new(2.0, ACCENT_DARK),
            Color32::from_rgba_unmultiplied(0x1f, 0x4e, 0x8c, 70),
        ),
        ShapeKind::Line => ShapeStyle::new(Stroke::new(2.0, ACCENT_DARK), Color32::TRANSPARENT),
    }
}
