use std::sync::Arc;

use parking_lot::RwLock;

use crate::document::Document;
use crate::input;
use crate::ring;
use crate::sketch::{SketchConfig, SketchKind, SketchSession};

/// Which parametric ring a custom sketch derives from its two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CustomRing {
    Box,
    RegularPolygon,
}

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    kind: SketchKind,
    freehand: bool,
    custom_ring: CustomRing,
    side_count: u32,
    // Runtime state; rebuilt on startup rather than persisted.
    #[serde(skip)]
    document: Arc<RwLock<Document>>,
    #[serde(skip)]
    session: SketchSession,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            kind: SketchKind::Line,
            freehand: false,
            custom_ring: CustomRing::Box,
            side_count: 6,
            document: Arc::new(RwLock::new(Document::new())),
            session: SketchSession::default(),
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.rebuild_session();
        app
    }

    /// Replace the session to match the currently selected settings. Any
    /// in-progress sketch is dropped with the old session.
    fn rebuild_session(&mut self) {
        let mut config = SketchConfig::new(self.kind).freehand(self.freehand);
        if self.kind == SketchKind::Custom {
            config = config.ring_builder(match self.custom_ring {
                CustomRing::Box => ring::box_ring(),
                CustomRing::RegularPolygon => ring::regular_polygon_ring(self.side_count),
            });
        }
        match SketchSession::new(config) {
            Ok(mut session) => {
                session.set_collection(self.document.clone());
                self.session = session;
            }
            Err(err) => log::error!("could not configure sketch tool: {err}"),
        }
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Shapes");
        ui.separator();

        let mut changed = false;
        for (kind, label) in [
            (SketchKind::Point, "• Point"),
            (SketchKind::Circle, "◯ Circle"),
            (SketchKind::Line, "╱ Line"),
            (SketchKind::Polygon, "⬠ Polygon"),
            (SketchKind::Custom, "◻ Custom"),
        ] {
            if ui.selectable_label(self.kind == kind, label).clicked() && self.kind != kind {
                self.kind = kind;
                changed = true;
            }
        }

        ui.separator();

        if ui.checkbox(&mut self.freehand, "Freehand").changed() {
            changed = true;
        }

        if self.kind == SketchKind::Custom {
            ui.label("Ring:");
            changed |= ui
                .selectable_value(&mut self.custom_ring, CustomRing::Box, "Box")
                .changed();
            changed |= ui
                .selectable_value(
                    &mut self.custom_ring,
                    CustomRing::RegularPolygon,
                    "Regular polygon",
                )
                .changed();
            if self.custom_ring == CustomRing::RegularPolygon {
                changed |= ui
                    .add(egui::Slider::new(&mut self.side_count, 3..=12).text("Sides"))
                    .changed();
            }
        }

        if changed {
            self.rebuild_session();
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.session.is_active(), egui::Button::new("Finish"))
                .clicked()
            {
                if let Err(err) = self.session.finish() {
                    log::warn!("finish rejected: {err}");
                }
            }
            if ui
                .add_enabled(self.session.is_active(), egui::Button::new("Cancel"))
                .clicked()
            {
                if let Err(err) = self.session.cancel() {
                    log::warn!("cancel rejected: {err}");
                }
            }
        });
        if ui.button("Undo last shape").clicked() {
            self.document.write().remove_last_shape();
        }

        ui.separator();
        let count = self.document.read().shapes().len();
        ui.label(format!("{count} shapes"));
        if self.session.is_active() {
            ui.label("Sketching…");
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        painter.rect_filled(response.rect, 0.0, ui.visuals().extreme_bg_color);

        // The painter is only valid for this frame, so re-attach it before
        // routing any events that might draw.
        self.session.set_surface(painter.clone());

        for shape in self.document.read().shapes() {
            shape.draw(&painter);
        }

        for event in input::gather_events(ui, &response) {
            if let Err(err) = input::route_event(&mut self.session, event) {
                log::warn!("sketch event rejected: {err}");
            }
        }

        // Frames without pointer movement route no Move event, so nothing
        // redrew the draft above; do it here to keep it visible.
        let pointer_tracked =
            response.hover_pos().is_some() || response.interact_pointer_pos().is_some();
        if !pointer_tracked {
            if let Some(shape) = self.session.draft_shape() {
                shape.draw(&painter);
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tools_panel").show(ctx, |ui| self.tools_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));
    }
}
