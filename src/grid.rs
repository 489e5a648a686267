//! Snapping grid: pitch, visibility and nearest-intersection snapping.

use crate::constants::{DEFAULT_GRID_PITCH, MAX_GRID_PITCH, MIN_GRID_PITCH, SNAP_RADIUS};
use egui::{Pos2, Rect};

/// Snaps a world position to the nearest grid intersection.
///
/// The candidate intersection is accepted only if it lies within [`SNAP_RADIUS`]
/// unscaled canvas units of `world`, so the accepted region grows on screen as the
/// view zooms in. `scale` only has to be usable.
/// Returns `None` when no intersection is close enough or the inputs are unusable.
pub fn snap(world: Pos2, pitch: f32, scale: f32) -> Option<Pos2> {
    if !(pitch.is_finite() && pitch > 0.0 && scale.is_finite() && scale > 0.0) {
        return None;
    }
    let candidate = egui::pos2(
        (world.x / pitch).round() * pitch,
        (world.y / pitch).round() * pitch,
    );
    if (world - candidate).length() > SNAP_RADIUS {
        return None;
    }
    Some(candidate)
}

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLine {
    /// Line of constant x
    Vertical(i64),
    /// Line of constant y
    Horizontal(i64),
}

/// Grid configuration shared by snapping and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pitch: f32,
    visible: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            pitch: DEFAULT_GRID_PITCH,
            visible: true,
        }
    }
}

impl Grid {
    /// Creates a grid with the given pitch, falling back to the default for unusable values.
    pub fn new(pitch: f32, visible: bool) -> Self {
        let mut grid = Self {
            visible,
            ..Self::default()
        };
        grid.set_pitch(pitch);
        grid
    }

    /// Distance between neighbouring grid lines in world units.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Whether the grid is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the pitch. Non-finite or out-of-range values are rejected.
    pub fn set_pitch(&mut self, pitch: f32) -> bool {
        if !pitch.is_finite() || !(MIN_GRID_PITCH..=MAX_GRID_PITCH).contains(&pitch) {
            log::debug!("rejected grid pitch {pitch}");
            return false;
        }
        self.pitch = pitch;
        true
    }

    /// Halves the pitch.
    pub fn split(&mut self) -> bool {
        self.set_pitch(self.pitch / 2.0)
    }

    /// Doubles the pitch.
    pub fn enlarge(&mut self) -> bool {
        self.set_pitch(self.pitch * 2.0)
    }

    /// Shows or hides the grid.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Snaps a world position using this grid's pitch.
    pub fn snap(&self, world: Pos2, scale: f32) -> Option<Pos2> {
        snap(world, self.pitch, scale)
    }

    /// World coordinate of a grid line.
    pub fn line_coordinate(&self, index: i64) -> f32 {
        index as f32 * self.pitch
    }

    /// Grid lines crossing the given world rectangle, verticals first.
    pub fn lines(&self, world_rect: Rect) -> Vec<GridLine> {
        let first_x = (world_rect.min.x / self.pitch).ceil() as i64;
        let last_x = (world_rect.max.x / self.pitch).floor() as i64;
        let first_y = (world_rect.min.y / self.pitch).ceil() as i64;
        let last_y = (world_rect.max.y / self.pitch).floor() as i64;

        (first_x..=last_x)
            .map(GridLine::Vertical)
            .chain((first_y..=last_y).map(GridLine::Horizontal))
            .collect()
    }
}
