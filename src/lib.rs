#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod input;
pub mod ring;
pub mod shape;
pub mod sketch;
pub mod style;

pub use app::SketchApp;
pub use document::Document;
pub use error::SketchError;
pub use ring::{RingBuilder, box_ring, regular_polygon_ring};
pub use shape::{Shape, ShapeKind};
pub use sketch::{DraftPoints, SketchConfig, SketchKind, SketchSession};
pub use style::ShapeStyle;
