use egui::{Painter, Pos2};

use crate::style::ShapeStyle;

/// A closed polygon. The vertex sequence is expected to repeat its first
/// point at the end once the sketch is committed.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    vertices: Vec<Pos2>,
    style: ShapeStyle,
}

impl PolygonShape {
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
        match self.vertices.len() {
            0 | 1 => {}
            2 => {
                painter.add(egui::Shape::line(self.vertices.clone(), self.style.stroke));
            }
            _ => {
                painter.add(egui::Shape::convex_polygon(
                    self.vertices.clone(),
                    self.style.fill,
                    self.style.stroke,
                ));
            }
        }
    }
}
