//! Canvas interaction plumbing.
//!
//! Translates egui pointer input into canvas-local screen coordinates and hands it
//! to the editor. All decisions (snapping, hit testing, panning) are made there.

use super::state::StringArtApp;
use eframe::egui;

impl StringArtApp {
    /// Allocates the canvas, forwards this frame's input to the editor and paints it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        self.canvas_rect = response.rect;
        self.editor.set_canvas_size(response.rect.size());

        self.handle_canvas_pointer(ui, &response);
        self.handle_canvas_zoom(ui, &response);

        self.render_canvas(&painter);
    }

    /// Feeds pointer motion, presses and releases to the editor.
    ///
    /// Presses only count when they land on the canvas; motion is forwarded while
    /// the pointer is over the canvas or a pan drag is in progress.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let (pointer, pressed, released) = ui.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });

        let Some(pointer) = pointer else {
            self.editor.clear_hover();
            return;
        };
        let local = self.to_canvas(pointer);
        let over_canvas = response.rect.contains(pointer);

        if over_canvas || self.editor.is_dragging() {
            self.editor.handle_pointer_move(local);
        } else {
            self.editor.clear_hover();
        }
        if pressed && over_canvas {
            self.editor.handle_pointer_down(local);
        }
        if released {
            self.editor.handle_pointer_up(local);
        }
    }

    /// Zooms around the cursor on scroll wheel input over the canvas.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_zoom(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta == 0.0 {
            return;
        }
        let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        if !response.rect.contains(mouse_pos) {
            return;
        }
        // One wheel notch scrolls roughly 50 points.
        self.editor.zoom_at(scroll_delta / 50.0, self.to_canvas(mouse_pos));
    }
}
