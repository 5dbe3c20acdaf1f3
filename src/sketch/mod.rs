//! The sketch state machine: the start / modify / add-vertex / finish
//! lifecycle that turns a stream of pointer positions into a finished
//! [`Shape`] appended to a shared [`Document`].

mod draft;
pub use draft::DraftPoints;

use std::sync::Arc;

use egui::{Painter, Pos2};
use parking_lot::RwLock;

use crate::document::Document;
use crate::error::SketchError;
use crate::ring::RingBuilder;
use crate::shape::{self, POINT_DISPLAY_RADIUS, Shape, ShapeKind};
use crate::style;

/// What a session sketches. `Custom` builds a polygon whose ring comes from
/// an injected [`RingBuilder`] instead of the clicked vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SketchKind {
    Point,
    Circle,
    Line,
    Polygon,
    Custom,
}

impl SketchKind {
    /// The geometry kind a sketch of this kind produces.
    pub fn geometry_kind(self) -> ShapeKind {
        match self {
            SketchKind::Point => ShapeKind::Point,
            SketchKind::Circle => ShapeKind::Circle,
            SketchKind::Line => ShapeKind::Line,
            SketchKind::Polygon | SketchKind::Custom => ShapeKind::Polygon,
        }
    }
}

/// Construction-time configuration for a [`SketchSession`].
pub struct SketchConfig {
    kind: SketchKind,
    freehand: bool,
    ring_builder: Option<RingBuilder>,
}

impl SketchConfig {
    pub fn new(kind: SketchKind) -> Self {
        Self {
            kind,
            freehand: false,
            ring_builder: None,
        }
    }

    pub fn freehand(mut self, enabled: bool) -> Self {
        self.freehand = enabled;
        self
    }

    pub fn ring_builder(mut self, builder: RingBuilder) -> Self {
        self.ring_builder = Some(builder);
        self
    }
}

// The in-progress sketch. Vertex list and shape exist exactly as long as
// the sketch is active, so they live together behind one Option.
struct Draft {
    points: DraftPoints,
    shape: Shape,
}

/// Stateful driver that builds one shape at a time from pointer input.
///
/// A session is long-lived and reusable: `start` opens a draft, `modify`
/// and `add_vertex` grow it, `finish` commits it to the attached document
/// and returns the session to idle. `modify` always redraws the draft onto
/// the attached surface; `add_vertex` redraws only in freehand mode, so a
/// UI layer can reason about redraw cost without inspecting internals.
pub struct SketchSession {
    kind: SketchKind,
    freehand: bool,
    draft: Option<Draft>,
    surface: Option<Painter>,
    collection: Option<Arc<RwLock<Document>>>,
    ring_builder: Option<RingBuilder>,
}

impl SketchSession {
    /// Build a session from `config`. A `Custom` session without a ring
    /// builder is rejected here rather than at first use.
    pub fn new(config: SketchConfig) -> Result<Self, SketchError> {
        if config.kind == SketchKind::Custom && config.ring_builder.is_none() {
            return Err(SketchError::MissingCapability(
                "custom sketch requires a ring builder",
            ));
        }
        Ok(Self {
            kind: config.kind,
            freehand: config.freehand,
            draft: None,
            surface: None,
            collection: None,
            ring_builder: config.ring_builder,
        })
    }

    pub fn kind(&self) -> SketchKind {
        self.kind
    }

    pub fn freehand(&self) -> bool {
        self.freehand
    }

    pub fn set_freehand(&mut self, enabled: bool) {
        self.freehand = enabled;
    }

    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Attach the surface drafts are drawn onto. The painter is treated as
    /// an opaque handle; it is only ever passed through to [`Shape::draw`].
    pub fn set_surface(&mut self, surface: Painter) {
        self.surface = Some(surface);
    }

    /// Attach the document finished shapes are appended to.
    pub fn set_collection(&mut self, collection: Arc<RwLock<Document>>) {
        self.collection = Some(collection);
    }

    /// The shape currently being sketched, if any.
    pub fn draft_shape(&self) -> Option<&Shape> {
        self.draft.as_ref().map(|draft| &draft.shape)
    }

    /// The draft vertex list, if a sketch is active.
    pub fn draft_points(&self) -> Option<&[Pos2]> {
        self.draft.as_ref().map(|draft| draft.points.as_slice())
    }

    /// Open a new draft at `point`. Errors if a sketch is already active.
    pub fn start(&mut self, point: Pos2) -> Result<(), SketchError> {
        if self.draft.is_some() {
            return Err(SketchError::InvalidState {
                operation: "start",
                active: true,
            });
        }
        let points = DraftPoints::seed(point);
        let mut shape = shape::factory::create(self.kind.geometry_kind());
        shape.set_style(style::editing_style_for(shape.kind()));
        shape.set_vertices(points.as_slice());
        log::debug!("sketch started: {:?} at {point:?}", self.kind);
        self.draft = Some(Draft { points, shape });
        Ok(())
    }

    /// Track the pointer: overwrite the floating vertex with `point`,
    /// re-derive the geometry, and redraw the draft.
    ///
    /// This is the high-frequency operation (every pointer move) and is
    /// idempotent under repeated identical input.
    pub fn modify(&mut self, point: Pos2) -> Result<(), SketchError> {
        let draft = self.draft.as_mut().ok_or(SketchError::InvalidState {
            operation: "modify",
            active: false,
        })?;
        draft.points.replace_floating(point);
        match self.kind {
            SketchKind::Circle => {
                // The center stays pinned at the first vertex; only the
                // radius follows the pointer.
                let radius = draft.points.first().distance(point);
                draft.shape.set_radius(radius)?;
            }
            SketchKind::Custom => {
                let builder = self.ring_builder.as_ref().ok_or(
                    SketchError::MissingCapability("custom sketch requires a ring builder"),
                )?;
                let ring = builder(draft.points.first(), draft.points.floating());
                draft.shape.set_vertices(&ring);
            }
            SketchKind::Point | SketchKind::Line | SketchKind::Polygon => {
                draft.shape.set_vertices(draft.points.as_slice());
            }
        }
        let painter = self.surface.as_ref().ok_or(SketchError::MissingCapability(
            "no drawing surface attached",
        ))?;
        draft.shape.draw(painter);
        Ok(())
    }

    /// Commit the current floating vertex and append `point` as the new
    /// floating one. Redraws only in freehand mode; discrete callers get
    /// their visual feedback from `modify`.
    pub fn add_vertex(&mut self, point: Pos2) -> Result<(), SketchError> {
        let draft = self.draft.as_mut().ok_or(SketchError::InvalidState {
            operation: "add_vertex",
            active: false,
        })?;
        draft.points.push_floating(point);
        draft.shape.set_vertices(draft.points.as_slice());
        if self.freehand {
            let painter = self.surface.as_ref().ok_or(SketchError::MissingCapability(
                "no drawing surface attached",
            ))?;
            draft.shape.draw(painter);
        }
        Ok(())
    }

    /// Close the draft and append the finished shape to the document. The
    /// session is idle (and reusable) afterwards.
    pub fn finish(&mut self) -> Result<(), SketchError> {
        let Some(mut draft) = self.draft.take() else {
            return Err(SketchError::InvalidState {
                operation: "finish",
                active: false,
            });
        };
        match self.kind {
            SketchKind::Point => draft.shape.set_radius(POINT_DISPLAY_RADIUS)?,
            SketchKind::Polygon => {
                // Custom rings close themselves in `modify`; clicked
                // polygons close here.
                draft.points.close_ring();
                draft.shape.set_vertices(draft.points.as_slice());
            }
            SketchKind::Circle | SketchKind::Line | SketchKind::Custom => {}
        }
        draft.shape.set_style(style::finished_style_for(draft.shape.kind()));
        let collection = self.collection.as_ref().ok_or(SketchError::MissingCapability(
            "no target collection attached",
        ))?;
        collection.write().add_shape(draft.shape);
        log::debug!("sketch finished: {:?}", self.kind);
        Ok(())
    }

    /// Discard the draft without committing it.
    pub fn cancel(&mut self) -> Result<(), SketchError> {
        if self.draft.take().is_none() {
            return Err(SketchError::InvalidState {
                operation: "cancel",
                active: false,
            });
        }
        log::debug!("sketch cancelled: {:?}", self.kind);
        Ok(())
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self {
            kind: SketchKind::Line,
            freehand: false,
            draft: None,
            surface: None,
            collection: None,
            ring_builder: None,
        }
    }
}
