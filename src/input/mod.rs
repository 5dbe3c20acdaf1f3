use egui::{Pos2, Response, Ui};

mod router;
pub use router::route_event;

/// Pointer activity on the canvas, reduced to what the sketch lifecycle
/// cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a position.
    Down(Pos2),
    /// Pointer moved (or is hovering) at a position.
    Move {
        pos: Pos2,
        /// Whether the primary button is held; freehand committing keys off
        /// this.
        primary_down: bool,
    },
    /// Primary button released at a position.
    Up(Pos2),
    /// Explicit request to finish the active sketch (double-click / Enter).
    Finish,
    /// Explicit request to discard the active sketch (Escape).
    Cancel,
}

/// Convert this frame's raw egui pointer state into sketch pointer events,
/// in the order they should be routed.
pub fn gather_events(ui: &Ui, response: &Response) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    let (pressed, released, primary_down, escape, enter) = ui.input(|input| {
        (
            input.pointer.primary_pressed(),
            input.pointer.primary_released(),
            input.pointer.primary_down(),
            input.key_pressed(egui::Key::Escape),
            input.key_pressed(egui::Key::Enter),
        )
    });

    if escape {
        events.push(PointerEvent::Cancel);
    }

    let pos = response.hover_pos().or_else(|| response.interact_pointer_pos());

    // A double-click would otherwise also register as a press and start a
    // fresh sketch right after finishing the current one.
    if response.double_clicked() || enter {
        events.push(PointerEvent::Finish);
        return events;
    }

    if let Some(pos) = pos {
        if pressed && response.hovered() {
            events.push(PointerEvent::Down(pos));
        }
        events.push(PointerEvent::Move { pos, primary_down });
        if released {
            events.push(PointerEvent::Up(pos));
        }
    }

    events
}
