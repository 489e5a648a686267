//! Application state management structures.
//!
//! The editing core lives in [`Editor`]; this module wraps it together with the
//! persisted view preferences and the little bit of state the egui layer needs
//! between frames.

use crate::editor::Editor;
use crate::settings::Settings;
use eframe::egui;

/// The main application structure.
///
/// This struct implements the `eframe::App` trait and owns the single [`Editor`]
/// that every panel reads from and writes to.
pub struct StringArtApp {
    /// The editing state machine and everything it owns
    pub editor: Editor,
    /// Persisted view preferences
    pub settings: Settings,
    /// Screen rectangle occupied by the canvas in the last frame
    pub canvas_rect: egui::Rect,
}

impl Default for StringArtApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl StringArtApp {
    /// Creates the app with previously stored settings, if eframe has any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(Settings::load(cc.storage))
    }

    /// Creates the app from the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        let editor = Editor::new(egui::vec2(800.0, 600.0), settings.grid());
        Self {
            editor,
            settings,
            canvas_rect: egui::Rect::NOTHING,
        }
    }

    /// Copies grid changes made through the editor back into the persisted settings.
    pub fn sync_settings(&mut self) {
        self.settings.sync_grid(self.editor.grid());
    }

    /// Converts an absolute screen position into canvas-local coordinates.
    pub fn to_canvas(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas_rect.min).to_pos2()
    }

    /// Converts a world position into an absolute screen position for painting.
    pub fn world_to_paint(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        self.editor.viewport().world_to_screen(world_pos) + self.canvas_rect.min.to_vec2()
    }
}
