use egui::{Painter, Pos2};

use crate::style::ShapeStyle;

/// An open polyline.
#[derive(Debug, Clone)]
pub struct LineShape {
    vertices: Vec<Pos2>,
    style: ShapeStyle,
}

impl LineShape {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            vertices: Vec::new(),
            style,
        }
    }

    pub fn set_vertices(&mut self, vertices: &[Pos2]) {
        self.vertices = vertices.to_vec();
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn style(&self) -> ShapeStyle {
        self.style
    }

    pub fn draw(&self, painter: &Painter) {
        if self.vertices.len() >= 2 {
            painter.add(egui::Shape::line(self.vertices.clone(), self.style.stroke));
        }
    }
}
