use super::PointerEvent;
use crate::error::SketchError;
use crate::sketch::{SketchKind, SketchSession};

// Two-anchor sketches commit on release; multi-vertex sketches keep
// collecting clicks until an explicit finish. Freehand drags always commit
// on release.
fn finishes_on_release(session: &SketchSession) -> bool {
    session.freehand()
        || matches!(
            session.kind(),
            SketchKind::Point | SketchKind::Circle | SketchKind::Custom
        )
}

/// Drive `session` with one pointer event.
///
/// Press starts a sketch or commits a vertex; movement tracks the floating
/// vertex (committing instead while dragging in freehand mode); release
/// finishes two-anchor and freehand sketches. Events that do not apply to
/// the current state (e.g. movement while idle) are ignored.
pub fn route_event(
    session: &mut SketchSession,
    event: PointerEvent,
) -> Result<(), SketchError> {
    match event {
        PointerEvent::Down(pos) => {
            if session.is_active() {
                session.add_vertex(pos)
            } else {
                // Commit the anchor right away so subsequent pointer moves
                // track a separate floating vertex instead of dragging the
                // anchor around.
                session.start(pos)?;
                session.add_vertex(pos)
            }
        }
        PointerEvent::Move { pos, primary_down } => {
            if !session.is_active() {
                return Ok(());
            }
            if session.freehand() && primary_down {
                session.add_vertex(pos)
            } else {
                session.modify(pos)
            }
        }
        PointerEvent::Up(pos) => {
            if session.is_active() && finishes_on_release(session) {
                session.modify(pos)?;
                session.finish()
            } else {
                Ok(())
            }
        }
        PointerEvent::Finish => {
            if session.is_active() {
                session.finish()
            } else {
                Ok(())
            }
        }
        PointerEvent::Cancel => {
            if session.is_active() {
                session.cancel()
            } else {
                Ok(())
            }
        }
    }
}
