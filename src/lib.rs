//! # String Art Tool
//!
//! A small vector editor for designing string art patterns. Segments are drawn
//! between grid-snapped points and carry evenly spaced nails along their length;
//! the nail count of each segment can be edited after drawing.
//!
//! ## Features
//! - Zoomable, pannable canvas with a bounded viewport
//! - Grid snapping with adjustable pitch
//! - Draw, select, edit and delete segments with confirm/cancel
//! - Minimap showing the visible part of the drawing
//! - Randomly placed decorative circles

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod editor;
pub mod grid;
pub mod minimap;
pub mod settings;
mod types;
pub mod viewport;
mod ui;

// Re-export public types and functions
pub use editor::{Editor, EditorMode};
pub use grid::Grid;
pub use minimap::Minimap;
pub use settings::Settings;
pub use types::*;
pub use ui::StringArtApp;
pub use viewport::Viewport;

/// Runs the string art editor in a native window.
///
/// Stored settings from a previous run are restored when eframe has any.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use string_art_tool::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "String Art",
        options,
        Box::new(|cc| Ok(Box::new(StringArtApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_default() {
        let editor = Editor::default();
        assert!(editor.points().is_empty());
        assert!(editor.segments().is_empty());
        assert!(editor.circles().is_empty());
        assert_eq!(editor.mode(), EditorMode::Neutral);
        assert_eq!(editor.viewport().scale(), 1.0);
    }

    #[test]
    fn test_app_uses_settings_grid() {
        let settings = Settings {
            grid_pitch: 20.0,
            grid_visible: false,
            ..Settings::default()
        };
        let app = StringArtApp::with_settings(settings);
        assert_eq!(app.editor.grid().pitch(), 20.0);
        assert!(!app.editor.grid().is_visible());
    }
}
