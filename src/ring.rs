//! Parametric ring builders: derive a closed polygon ring from two anchor
//! points. Used by custom sketches, where the ring replaces the clicked
//! vertex list.

use egui::{Pos2, pos2};

/// Builds a closed ring (first point repeated as the last) from a start and
/// end anchor.
pub type RingBuilder = Box<dyn Fn(Pos2, Pos2) -> Vec<Pos2> + Send>;

/// Axis-aligned rectangle with `start` and `end` as opposite corners.
///
/// Coincident anchors yield a zero-area ring; that is degenerate geometry,
/// not an error.
pub fn box_ring() -> RingBuilder {
    Box::new(|start, end| {
        vec![
            start,
            pos2(end.x, start.y),
            end,
            pos2(start.x, end.y),
            start,
        ]
    })
}

/// Regular polygon centered on `start`, circumradius reaching `end`, with
/// one vertex aimed at `end`.
///
/// Produces `side_count + 1` points, the last closing the ring. Counts
/// below 3 are clamped to 1 and give degenerate (but well-formed) rings.
pub fn regular_polygon_ring(side_count: u32) -> RingBuilder {
    let sides = side_count.max(1);
    Box::new(move |start, end| {
        let radius = start.distance(end);
        let step = 360.0 / sides as f32;
        let bearing = bearing_degrees(start, end);
        let mut ring = Vec::with_capacity(sides as usize + 1);
        for i in 0..sides {
            let angle = (bearing + step * i as f32).rem_euclid(360.0).to_radians();
            ring.push(pos2(
                start.x + radius * angle.cos(),
                start.y + radius * angle.sin(),
            ));
        }
        let first = ring[0];
        ring.push(first);
        ring
    })
}

/// Screen-space bearing of `end` as seen from `start`, in `[0, 360)`
/// degrees. Angles grow clockwise because y points down, the same
/// convention the shapes render in, so projecting back through cos/sin
/// lands the first vertex on `end`'s heading.
fn bearing_degrees(start: Pos2, end: Pos2) -> f32 {
    let delta = end - start;
    delta.y.atan2(delta.x).to_degrees().rem_euclid(360.0)
}
