//! User interface components for the string art editor.
//!
//! This module contains the eframe application, the toolbar, the segment panel and
//! keyboard handling. It holds no editing logic of its own: every button and
//! pointer event is forwarded to [`crate::editor::Editor`].
//!
//! # Module Organization
//!
//! - `state` - The `StringArtApp` struct and coordinate helpers
//! - `canvas` - Pointer and scroll plumbing from egui into the editor
//! - `rendering` - Drawing the grid, entities, preview and minimap

mod canvas;
mod rendering;
mod state;

pub use state::StringArtApp;

use crate::constants::{MAX_POINT_COUNT, MIN_POINT_COUNT};
use crate::editor::EditorMode;
use eframe::egui;

impl eframe::App for StringArtApp {
    /// Persist view preferences between restarts. Drawings are not stored.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.sync_settings();
        self.settings.store(storage);
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar, the segment panel and the canvas, and handles the
    /// editing shortcuts.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_edit_keys(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::right("segment_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_segment_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        self.sync_settings();
    }
}

impl StringArtApp {
    /// Handles Escape (cancel), Delete/Backspace (delete) and Enter (confirm).
    ///
    /// Ignored while a text field has keyboard focus.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    fn handle_edit_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (cancel, delete, confirm) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Enter),
            )
        });
        if cancel {
            self.editor.cancel_edit();
        }
        if delete {
            self.editor.delete_selected();
        }
        if confirm {
            self.editor.confirm_edit();
        }
    }

    /// Renders the toolbar with tools, view controls and grid options.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            // Tools toggle: clicking the active tool returns to no tool
            for mode in [EditorMode::Move, EditorMode::Draw, EditorMode::Select] {
                let active = self.editor.mode() == mode;
                if ui.selectable_label(active, mode.label()).clicked() {
                    self.editor
                        .set_mode(if active { EditorMode::Neutral } else { mode });
                }
            }

            ui.separator();

            if ui.button("Zoom In").clicked() {
                self.editor.zoom_in();
            }
            if ui.button("Zoom Out").clicked() {
                self.editor.zoom_out();
            }
            if ui.button("Center").clicked() {
                self.editor.center_view();
            }

            ui.separator();

            if ui.button("Add Circle").clicked() {
                self.editor.add_random_circle();
            }

            ui.separator();

            if ui.button("Split Grid").clicked() {
                self.editor.split_grid();
            }
            if ui.button("Enlarge Grid").clicked() {
                self.editor.enlarge_grid();
            }
            let mut grid_visible = self.editor.grid().is_visible();
            if ui.checkbox(&mut grid_visible, "Show Grid").changed() {
                self.editor.toggle_grid_visible();
            }

            ui.separator();

            ui.checkbox(&mut self.settings.show_nails, "Nails");
            ui.checkbox(&mut self.settings.show_minimap, "Minimap");
            ui.checkbox(&mut self.settings.dark_mode, "Dark Mode");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Zoom: {:.0}%",
                    self.editor.viewport().scale() * 100.0
                ));
                ui.label(format!("Grid: {:.1}", self.editor.grid().pitch()));
            });
        });
    }

    /// Renders the panel for the selected segment: point count, confirm, cancel and delete.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_segment_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Segment");
        ui.separator();

        let Some(segment) = self.editor.selected_segment() else {
            let hint = match self.editor.mode() {
                EditorMode::Neutral => "Pick a tool in the toolbar.",
                EditorMode::Move => "Drag the canvas to pan.",
                EditorMode::Draw if self.editor.active_point().is_some() => {
                    "Click a grid point to close the segment."
                }
                EditorMode::Draw => "Click a grid point to start a segment.",
                EditorMode::Select => "Click a segment to edit it.",
            };
            ui.label(hint);
            ui.separator();
            ui.label(format!(
                "Segments: {}  Points: {}  Circles: {}",
                self.editor.segments().len(),
                self.editor.points().len(),
                self.editor.circles().len()
            ));
            return;
        };

        ui.label(format!(
            "From ({:.1}, {:.1}) to ({:.1}, {:.1})",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        ));
        ui.label(format!("Length: {:.1}", segment.length()));
        ui.label(format!("Nails: {}", segment.point_count));
        ui.separator();

        let mut count = self
            .editor
            .pending_point_count()
            .unwrap_or(MIN_POINT_COUNT);
        ui.horizontal(|ui| {
            ui.label("Point count:");
            if ui
                .add(egui::DragValue::new(&mut count).range(MIN_POINT_COUNT..=MAX_POINT_COUNT))
                .changed()
            {
                self.editor.set_pending_point_count(count);
            }
            if ui.button("Apply").clicked() {
                self.editor.apply_pending_point_count();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Confirm").clicked() {
                self.editor.confirm_edit();
            }
            if ui.button("Cancel").clicked() {
                self.editor.cancel_edit();
            }
            ui.add_enabled_ui(self.editor.mode() == EditorMode::Select, |ui| {
                if ui.button("Delete").clicked() {
                    self.editor.delete_selected();
                }
            });
        });
    }
}

// Headless egui-driven UI tests live inside the `ui` module so they can reach
// private helpers such as `draw_canvas` and `handle_edit_keys`.
#[cfg(test)]
mod tests;
