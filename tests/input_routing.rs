use std::sync::Arc;

use approx::assert_relative_eq;
use eframe_sketch::input::{PointerEvent, route_event};
use eframe_sketch::{
    Document, SketchConfig, SketchKind, SketchSession, ShapeKind, box_ring,
};
use egui::{Pos2, pos2};
use parking_lot::RwLock;

fn test_painter() -> egui::Painter {
    egui::Painter::new(
        egui::Context::default(),
        egui::LayerId::background(),
        egui::Rect::EVERYTHING,
    )
}

fn session_with(config: SketchConfig) -> (SketchSession, Arc<RwLock<Document>>) {
    let document = Arc::new(RwLock::new(Document::new()));
    let mut session = SketchSession::new(config).unwrap();
    session.set_surface(test_painter());
    session.set_collection(document.clone());
    (session, document)
}

fn hover(pos: Pos2) -> PointerEvent {
    PointerEvent::Move {
        pos,
        primary_down: false,
    }
}

fn drag(pos: Pos2) -> PointerEvent {
    PointerEvent::Move {
        pos,
        primary_down: true,
    }
}

fn route_all(session: &mut SketchSession, events: &[PointerEvent]) {
    for event in events {
        route_event(session, *event).unwrap();
    }
}

#[test]
fn discrete_line_collects_clicks_and_tracks_the_pointer() {
    let (mut session, document) = session_with(SketchConfig::new(SketchKind::Line));

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(0.0, 0.0)),
            hover(pos2(1.0, 1.0)),
            PointerEvent::Down(pos2(1.0, 1.0)),
            hover(pos2(2.0, 2.0)),
            PointerEvent::Finish,
        ],
    );

    let document = document.read();
    assert_eq!(document.shapes().len(), 1);
    assert_eq!(document.shapes()[0].kind(), ShapeKind::Line);
    assert_eq!(
        document.shapes()[0].vertices(),
        &[pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0)]
    );
}

#[test]
fn point_commits_on_release() {
    let (mut session, document) = session_with(SketchConfig::new(SketchKind::Point));

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(5.0, 5.0)),
            PointerEvent::Up(pos2(5.0, 5.0)),
        ],
    );

    let document = document.read();
    assert_eq!(document.shapes().len(), 1);
    assert_eq!(document.shapes()[0].vertices()[0], pos2(5.0, 5.0));
    assert_eq!(document.shapes()[0].radius(), Some(5.0));
    assert!(!session.is_active());
}

#[test]
fn circle_commits_on_release_with_dragged_radius() {
    let (mut session, document) = session_with(SketchConfig::new(SketchKind::Circle));

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(0.0, 0.0)),
            drag(pos2(2.0, 0.0)),
            PointerEvent::Up(pos2(3.0, 4.0)),
        ],
    );

    let document = document.read();
    assert_eq!(document.shapes().len(), 1);
    assert_eq!(document.shapes()[0].center(), Some(pos2(0.0, 0.0)));
    assert_relative_eq!(document.shapes()[0].radius().unwrap(), 5.0, epsilon = 1e-5);
}

#[test]
fn custom_box_commits_on_release() {
    let config = SketchConfig::new(SketchKind::Custom).ring_builder(box_ring());
    let (mut session, document) = session_with(config);

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(0.0, 0.0)),
            drag(pos2(2.0, 1.0)),
            PointerEvent::Up(pos2(8.0, 6.0)),
        ],
    );

    let document = document.read();
    let ring = document.shapes()[0].vertices();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);
    assert_eq!(ring[2], pos2(8.0, 6.0));
}

#[test]
fn freehand_drag_commits_vertices_and_finishes_on_release() {
    let (mut session, document) =
        session_with(SketchConfig::new(SketchKind::Line).freehand(true));

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(0.0, 0.0)),
            drag(pos2(1.0, 0.0)),
            drag(pos2(2.0, 1.0)),
            PointerEvent::Up(pos2(3.0, 3.0)),
        ],
    );

    let document = document.read();
    assert_eq!(document.shapes().len(), 1);
    // Anchor, two committed drag samples, and the release position.
    assert_eq!(document.shapes()[0].vertices().len(), 4);
    assert!(!session.is_active());
}

#[test]
fn cancel_discards_and_leaves_the_document_untouched() {
    let (mut session, document) = session_with(SketchConfig::new(SketchKind::Polygon));

    route_all(
        &mut session,
        &[
            PointerEvent::Down(pos2(0.0, 0.0)),
            hover(pos2(4.0, 4.0)),
            PointerEvent::Cancel,
        ],
    );

    assert!(!session.is_active());
    assert!(document.read().shapes().is_empty());
}

#[test]
fn stray_events_while_idle_are_ignored() {
    let (mut session, document) = session_with(SketchConfig::new(SketchKind::Line));

    route_all(
        &mut session,
        &[
            hover(pos2(1.0, 1.0)),
            PointerEvent::Up(pos2(1.0, 1.0)),
            PointerEvent::Finish,
            PointerEvent::Cancel,
        ],
    );

    assert!(!session.is_active());
    assert!(document.read().shapes().is_empty());
}
