use egui::{Painter, Pos2};

// Re-export concrete implementations
mod circle;
mod line;
mod point;
mod polygon;

pub use circle::CircleShape;
pub use line::LineShape;
pub use point::{POINT_DISPLAY_RADIUS, PointShape};
pub use polygon::PolygonShape;

use crate::error::SketchError;
use crate::style::ShapeStyle;

/// Geometry kinds a finished shape can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Circle,
    Line,
    Polygon,
}

/// A drawable 2D shape. Each variant owns its own vertex storage.
#[derive(Debug, Clone)]
pub enum Shape {
    Point(PointShape),
    Circle(CircleShape),
    Line(LineShape),
    Polygon(PolygonShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Replace the shape's vertex sequence with a copy of `vertices`.
    pub fn set_vertices(&mut self, vertices: &[Pos2]) {
        match self {
            Shape::Point(s) => s.set_vertices(vertices),
            Shape::Circle(s) => s.set_vertices(vertices),
            Shape::Line(s) => s.set_vertices(vertices),
            Shape::Polygon(s) => s.set_vertices(vertices),
        }
    }

    pub fn vertices(&self) -> &[Pos2] {
        match self {
            Shape::Point(s) => s.vertices(),
            Shape::Circle(s) => s.vertices(),
            Shape::Line(s) => s.vertices(),
            Shape::Polygon(s) => s.vertices(),
        }
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        match self {
            Shape::Point(s) => s.set_style(style),
            Shape::Circle(s) => s.set_style(style),
            Shape::Line(s) => s.set_style(style),
            Shape::Polygon(s) => s.set_style(style),
        }
    }

    pub fn style(&self) -> ShapeStyle {
        match self {
            Shape::Point(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Polygon(s) => s.style(),
        }
    }

    /// Draw the shape using the provided painter.
    pub fn draw(&self, painter: &Painter) {
        match self {
            Shape::Point(s) => s.draw(painter),
            Shape::Circle(s) => s.draw(painter),
            Shape::Line(s) => s.draw(painter),
            Shape::Polygon(s) => s.draw(painter),
        }
    }

    /// Set the display radius. Only points and circles carry one; on other
    /// kinds this is a capability error, not a silent no-op.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), SketchError> {
        match self {
            Shape::Point(s) => {
                s.set_radius(radius);
                Ok(())
            }
            Shape::Circle(s) => {
                s.set_radius(radius);
                Ok(())
            }
            Shape::Line(_) | Shape::Polygon(_) => Err(SketchError::MissingCapability(
                "set_radius on a shape without a radius",
            )),
        }
    }

    pub fn radius(&self) -> Option<f32> {
        match self {
            Shape::Point(s) => Some(s.radius()),
            Shape::Circle(s) => Some(s.radius()),
            Shape::Line(_) | Shape::Polygon(_) => None,
        }
    }

    /// Center of a circle (its first vertex); `None` for every other kind.
    pub fn center(&self) -> Option<Pos2> {
        match self {
            Shape::Circle(s) => s.center(),
            _ => None,
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use crate::style;

    /// Static mapping from geometry kind to constructor. New shapes come up
    /// in their finished style; a sketch session swaps in the editing style
    /// for its draft.
    pub fn create(kind: ShapeKind) -> Shape {
        let style = style::finished_style_for(kind);
        match kind {
            ShapeKind::Point => Shape::Point(PointShape::new(style)),
            ShapeKind::Circle => Shape::Circle(CircleShape::new(style)),
            ShapeKind::Line => Shape::Line(LineShape::new(style)),
            ShapeKind::Polygon => Shape::Polygon(PolygonShape::new(style)),
        }
    }
}
