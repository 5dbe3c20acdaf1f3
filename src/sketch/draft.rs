use egui::Pos2;

/// Vertex list of an in-progress sketch.
///
/// Append and replace-last only. The last entry is the floating vertex that
/// tracks the pointer; everything before it is committed. The list is never
/// empty: it is seeded with one vertex and only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPoints {
    points: Vec<Pos2>,
}

impl DraftPoints {
    /// Start a draft with its first (floating) vertex.
    pub fn seed(first: Pos2) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Overwrite the floating vertex with the current pointer position.
    pub fn replace_floating(&mut self, point: Pos2) {
        if let Some(last) = self.points.last_mut() {
            *last = point;
        }
    }

    /// Commit the current floating vertex and append `point` as the new
    /// floating one.
    pub fn push_floating(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Close the ring by repeating the first vertex at the end.
    pub fn close_ring(&mut self) {
        let first = self.first();
        self.points.push(first);
    }

    pub fn first(&self) -> Pos2 {
        self.points[0]
    }

    /// The floating vertex (always the last entry).
    pub fn floating(&self) -> Pos2 {
        self.points[self.points.len() - 1]
    }

    pub fn as_slice(&self) -> &[Pos2] {
        &self.points
    }
}
