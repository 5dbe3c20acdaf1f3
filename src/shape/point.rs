use egui::{Painter, Pos2};

use crate::style::ShapeStyle;

/// Radius a point is given once its sketch is committed.
pub const POINT_DISPLAY_RADIUS: f32 = 5.0;

// Smaller radius while the point is still being placed.
const EDITING_RADIUS: f32 = 3.0;

/// A single marker position rendered as a small filled circle.
#[derive(Debug, Clone)]
pub struct PointShape {
    vertices: Vec<Pos2>,
    radius: f32,
    style: ShapeStyle,
}

impl PointShape {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            vertices: Vec::new(),
            radius: EDITING_RADIUS,
            style,
        }
    }

    pub fn set_vertices(&mut self, vertices: &[Pos2]) {
        self.vertices = vertices.to_vec();
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
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
        if let Some(&position) = self.vertices.first() {
            painter.circle(position, self.radius, self.style.fill, self.style.stroke);
        }
    }
}
