//! Pan/zoom state and the screen/world coordinate transform.
//!
//! Screen coordinates are pixels relative to the top-left corner of the canvas.
//! World coordinates are the canvas content space: `screen = world * scale + offset`.

use crate::constants::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use egui::{Pos2, Rect, Vec2};

/// Current pan offset and zoom scale of one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Zoom factor (1.0 = content fills the canvas exactly)
    scale: f32,
    /// Screen position of the world origin
    offset: Vec2,
    /// Canvas size in screen pixels
    size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(egui::vec2(800.0, 600.0))
    }
}

impl Viewport {
    /// Creates an unzoomed, unpanned viewport for a canvas of the given size.
    pub fn new(size: Vec2) -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            size,
        }
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current pan offset in screen pixels.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Canvas size in screen pixels.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Updates the canvas size (window resize) and re-clamps the offset.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.clamp();
    }

    /// Converts a screen position to world space.
    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        (screen - self.offset) / self.scale
    }

    /// Converts a world position to screen space.
    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        world * self.scale + self.offset
    }

    /// World-space rectangle currently visible through the canvas.
    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_min_max(
            self.screen_to_world(Pos2::ZERO),
            self.screen_to_world(self.size.to_pos2()),
        )
    }

    /// Multiplies the scale by `factor`, keeping the world point under `anchor` fixed on screen.
    ///
    /// The resulting scale is clamped to `[MIN_SCALE, MAX_SCALE]`; the anchor is honoured
    /// with the factor actually applied.
    pub fn zoom(&mut self, factor: f32, anchor: Pos2) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let applied = new_scale / self.scale;
        let anchor = anchor.to_vec2();
        self.offset = anchor - (anchor - self.offset) * applied;
        self.scale = new_scale;
        self.clamp();
    }

    /// Zooms in one step around the canvas centre.
    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_STEP, self.center());
    }

    /// Zooms out one step around the canvas centre.
    pub fn zoom_out(&mut self) {
        self.zoom(1.0 / ZOOM_STEP, self.center());
    }

    /// Moves the content by `delta` screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
        self.clamp();
    }

    /// Resets to scale 1 with no pan.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Vec2::ZERO;
    }

    /// Constrains the offset so the scaled content always covers the canvas.
    ///
    /// Keeps `offset.x` in `[width - width * scale, 0]` and likewise for y.
    pub fn clamp(&mut self) {
        let min = self.size - self.size * self.scale;
        self.offset.x = self.offset.x.max(min.x).min(0.0);
        self.offset.y = self.offset.y.max(min.y).min(0.0);
    }

    /// Centre of the canvas in screen space.
    pub fn center(&self) -> Pos2 {
        (self.size / 2.0).to_pos2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn viewport() -> Viewport {
        Viewport::new(egui::vec2(1000.0, 600.0))
    }

    #[test]
    fn screen_world_round_trip_under_zoom_and_pan() {
        let mut vp = viewport();
        vp.zoom(2.5, egui::pos2(300.0, 200.0));
        vp.pan(egui::vec2(-40.0, -15.0));

        let screen = egui::pos2(123.0, 456.0);
        let back = vp.world_to_screen(vp.screen_to_world(screen));
        assert!((back - screen).length() < EPS);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut vp = viewport();
        let anchor = egui::pos2(400.0, 250.0);
        let world_before = vp.screen_to_world(anchor);
        vp.zoom(1.5, anchor);
        let world_after = vp.screen_to_world(anchor);
        assert!((world_before - world_after).length() < EPS);
        assert!((vp.scale() - 1.5).abs() < EPS);
    }

    #[test]
    fn zoom_in_then_out_restores_scale() {
        let mut vp = viewport();
        vp.zoom_in();
        vp.zoom_in();
        let scale = vp.scale();
        vp.zoom_in();
        vp.zoom_out();
        assert!((vp.scale() - scale).abs() < EPS);
    }

    #[test]
    fn scale_is_clamped_to_bounds() {
        let mut vp = viewport();
        vp.zoom_out();
        assert_eq!(vp.scale(), MIN_SCALE);
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert!((vp.scale() - MAX_SCALE).abs() < EPS);
        assert!(vp.offset().x <= 0.0 && vp.offset().y <= 0.0);
    }

    #[test]
    fn pan_is_clamped_so_content_covers_canvas() {
        let mut vp = viewport();
        vp.pan(egui::vec2(500.0, 500.0));
        assert_eq!(vp.offset(), Vec2::ZERO);

        vp.zoom(2.0, egui::pos2(0.0, 0.0));
        for delta in [
            egui::vec2(-5000.0, -5000.0),
            egui::vec2(3000.0, -20.0),
            egui::vec2(-1.0, 9000.0),
        ] {
            vp.pan(delta);
            let size = vp.size();
            let offset = vp.offset();
            assert!(offset.x <= 0.0 && offset.x >= size.x - size.x * vp.scale() - EPS);
            assert!(offset.y <= 0.0 && offset.y >= size.y - size.y * vp.scale() - EPS);
            let visible = vp.visible_world_rect();
            assert!(visible.min.x >= -EPS && visible.max.x <= size.x + EPS);
            assert!(visible.min.y >= -EPS && visible.max.y <= size.y + EPS);
        }
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut vp = viewport();
        vp.zoom(3.0, egui::pos2(10.0, 10.0));
        vp.pan(egui::vec2(-100.0, -100.0));
        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::ZERO);
        let p = egui::pos2(42.0, 17.0);
        assert_eq!(vp.screen_to_world(p), p);
    }

    #[test]
    fn shrinking_canvas_reclamps_offset() {
        let mut vp = viewport();
        vp.zoom(2.0, egui::pos2(1000.0, 600.0));
        assert!((vp.offset().x + 1000.0).abs() < EPS);
        vp.set_size(egui::vec2(400.0, 300.0));
        assert!(vp.offset().x >= -400.0 - EPS);
        assert!(vp.offset().y >= -300.0 - EPS);
    }
}
