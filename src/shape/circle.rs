use egui::{Painter, Pos2};

use crate::style::ShapeStyle;

/// A circle anchored at its first vertex. While being sketched only the
/// radius changes; the center never moves.
#[derive(Debug, Clone)]
pub struct CircleShape {
    vertices: Vec<Pos2>,
    radius: f32,
    style: ShapeStyle,
}

impl CircleShape {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            vertices: Vec::new(),
            radius: 0.0,
            style,
        }
    }

    pub fn set_vertices(&mut self, vertices: &[Pos2]) {
        self.vertices = vertices.to_vec();
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    /// The circle's center is its first vertex.
    pub fn center(&self) -> Option<Pos2> {
        self.vertices.first().copied()
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn style(&self) -> ShapeStyle {
        self.style
    }

    pub fn draw(&self, painter: &Painter) {
        if let Some(center) = self.center() {
            painter.circle(center, self.radius, self.style.fill, self.style.stroke);
        }
    }
}
