use eframe_sketch::SketchError;
use eframe_sketch::shape::{self, ShapeKind};
use eframe_sketch::style::{self, ShapeStyle};
use egui::{Color32, Stroke, pos2};

const ALL_KINDS: [ShapeKind; 4] = [
    ShapeKind::Point,
    ShapeKind::Circle,
    ShapeKind::Line,
    ShapeKind::Polygon,
];

#[test]
fn factory_creates_the_requested_kind() {
    for kind in ALL_KINDS {
        let shape = shape::factory::create(kind);
        assert_eq!(shape.kind(), kind);
        assert!(shape.vertices().is_empty());
    }
}

#[test]
fn set_vertices_replaces_the_stored_sequence() {
    let mut shape = shape::factory::create(ShapeKind::Line);

    shape.set_vertices(&[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
    shape.set_vertices(&[pos2(5.0, 5.0)]);

    assert_eq!(shape.vertices(), &[pos2(5.0, 5.0)]);
}

#[test]
fn only_points_and_circles_have_a_radius() {
    for kind in [ShapeKind::Point, ShapeKind::Circle] {
        let mut shape = shape::factory::create(kind);
        shape.set_radius(7.5).unwrap();
        assert_eq!(shape.radius(), Some(7.5));
    }

    for kind in [ShapeKind::Line, ShapeKind::Polygon] {
        let mut shape = shape::factory::create(kind);
        assert!(matches!(
            shape.set_radius(7.5),
            Err(SketchError::MissingCapability(_))
        ));
        assert_eq!(shape.radius(), None);
    }
}

#[test]
fn circle_center_is_its_first_vertex() {
    let mut circle = shape::factory::create(ShapeKind::Circle);
    assert_eq!(circle.center(), None);

    circle.set_vertices(&[pos2(2.0, 3.0), pos2(9.0, 9.0)]);
    assert_eq!(circle.center(), Some(pos2(2.0, 3.0)));

    let mut line = shape::factory::create(ShapeKind::Line);
    line.set_vertices(&[pos2(2.0, 3.0)]);
    assert_eq!(line.center(), None);
}

#[test]
fn set_style_is_applied() {
    let custom = ShapeStyle::new(Stroke::new(4.0, Color32::RED), Color32::GOLD);
    for kind in ALL_KINDS {
        let mut shape = shape::factory::create(kind);
        shape.set_style(custom);
        assert_eq!(shape.style(), custom);
    }
}

#[test]
fn editing_and_finished_styles_differ() {
    for kind in ALL_KINDS {
        assert_ne!(
            style::editing_style_for(kind),
            style::finished_style_for(kind),
            "{kind:?} should change appearance when committed"
        );
    }
}
