//! Overview of the whole canvas with the visible area outlined.

use crate::constants::MINIMAP_WIDTH;
use crate::viewport::Viewport;
use egui::{Pos2, Rect, Vec2};

/// Fixed-width overview scaled to the canvas aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimap {
    width: f32,
    height: f32,
    scale: f32,
}

impl Minimap {
    /// Creates a minimap of `width` pixels for a canvas of `canvas_size`.
    pub fn new(width: f32, canvas_size: Vec2) -> Self {
        let mut minimap = Self {
            width,
            height: 0.0,
            scale: 0.0,
        };
        minimap.resize(canvas_size);
        minimap
    }

    /// Recomputes height and scale after the canvas was resized.
    pub fn resize(&mut self, canvas_size: Vec2) {
        if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
            self.height = 0.0;
            self.scale = 0.0;
            return;
        }
        self.height = canvas_size.y / canvas_size.x * self.width;
        self.scale = self.width / canvas_size.x;
    }

    /// Size of the minimap in pixels.
    pub fn size(&self) -> Vec2 {
        egui::vec2(self.width, self.height)
    }

    /// Minimap pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Maps a world position into minimap pixel space.
    pub fn project_point(&self, world: Pos2) -> Pos2 {
        world * self.scale
    }

    /// Outline of the visible area in minimap pixel space.
    ///
    /// `min = -offset * minimap_scale / scale`, `size = canvas_size * minimap_scale / scale`.
    pub fn project(&self, viewport: &Viewport) -> Rect {
        let factor = self.scale / viewport.scale();
        let min = (-viewport.offset() * factor).to_pos2();
        Rect::from_min_size(min, viewport.size() * factor)
    }
}

impl Default for Minimap {
    fn default() -> Self {
        Self::new(MINIMAP_WIDTH, Viewport::default().size())
    }
}
