//! The editing state machine.
//!
//! [`Editor`] owns the drawing, the viewport, the grid and the minimap, and is the
//! single writer of all of them. The UI layer feeds it pointer events in canvas
//! screen coordinates and invokes the toolbar operations; everything it renders is
//! read back through the accessors here.
//!
//! Exactly one [`EditorMode`] is active at a time. Transient state (pan drag,
//! half-drawn segment, selected segment with its saved snapshot) is cleared when
//! the mode changes, so invalid combinations cannot be observed.

use crate::constants::{HIT_TOLERANCE, MAX_POINT_COUNT, MIN_POINT_COUNT, WHEEL_ZOOM_STEP};
use crate::grid::Grid;
use crate::hit_test::hit_test;
use crate::minimap::Minimap;
use crate::types::*;
use crate::viewport::Viewport;
use egui::{Pos2, Rect, Vec2};
use rand::Rng;

/// The active tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// No tool active; pointer input is ignored
    #[default]
    Neutral,
    /// Dragging pans the canvas
    Move,
    /// Clicks place snapped points and close segments
    Draw,
    /// Clicks pick a segment for point-count editing or deletion
    Select,
}

impl EditorMode {
    /// Human-readable name for toolbars and status lines.
    pub fn label(self) -> &'static str {
        match self {
            EditorMode::Neutral => "None",
            EditorMode::Move => "Move",
            EditorMode::Draw => "Draw",
            EditorMode::Select => "Select",
        }
    }
}

/// The segment under edit, with what it looked like when the edit started.
#[derive(Debug, Clone)]
struct Selection {
    segment: SegmentId,
    snapshot: SegmentSnapshot,
    pending_point_count: usize,
}

impl Selection {
    fn begin(segment: &Segment) -> Self {
        Self {
            segment: segment.id,
            snapshot: segment.snapshot(),
            pending_point_count: segment.point_count,
        }
    }
}

/// Single owned editing state for one canvas.
#[derive(Debug, Clone)]
pub struct Editor {
    drawing: Drawing,
    viewport: Viewport,
    grid: Grid,
    minimap: Minimap,
    mode: EditorMode,
    /// Last pointer position while a Move-mode drag is in progress
    drag_last_pos: Option<Pos2>,
    active_point: Option<Point>,
    selection: Option<Selection>,
    /// Last known pointer position in world space
    hover: Option<Pos2>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Viewport::default().size(), Grid::default())
    }
}

impl Editor {
    /// Creates an empty editor for a canvas of `canvas_size` screen pixels.
    pub fn new(canvas_size: Vec2, grid: Grid) -> Self {
        Self {
            drawing: Drawing::new(),
            viewport: Viewport::new(canvas_size),
            grid,
            minimap: Minimap::new(crate::constants::MINIMAP_WIDTH, canvas_size),
            mode: EditorMode::Neutral,
            drag_last_pos: None,
            active_point: None,
            selection: None,
            hover: None,
        }
    }

    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    /// All entities on the canvas.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Every endpoint and nail.
    pub fn points(&self) -> &[Point] {
        &self.drawing.points
    }

    /// Segments in creation order.
    pub fn segments(&self) -> &[Segment] {
        &self.drawing.segments
    }

    /// Decorative circles.
    pub fn circles(&self) -> &[Circle] {
        &self.drawing.circles
    }

    /// Current pan/zoom state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current grid configuration.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Overview geometry.
    pub fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    /// Outline of the visible area in minimap pixel space.
    pub fn minimap_rect(&self) -> Rect {
        self.minimap.project(&self.viewport)
    }

    /// The active tool.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// First endpoint of the segment being drawn, if any.
    pub fn active_point(&self) -> Option<&Point> {
        self.active_point.as_ref()
    }

    /// The segment currently targeted for editing, if any.
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selection
            .as_ref()
            .and_then(|sel| self.drawing.segment(sel.segment))
    }

    /// Point count shown in the editor field for the selected segment.
    pub fn pending_point_count(&self) -> Option<usize> {
        self.selection.as_ref().map(|sel| sel.pending_point_count)
    }

    /// Whether a Move-mode drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_last_pos.is_some()
    }

    /// Preview line from the active point to the pointer.
    ///
    /// The end snaps to the grid when close enough and otherwise follows the raw pointer.
    pub fn preview_segment(&self) -> Option<(Pos2, Pos2)> {
        if self.mode != EditorMode::Draw {
            return None;
        }
        let start = self.active_point.as_ref()?.pos();
        let hover = self.hover?;
        let end = self
            .grid
            .snap(hover, self.viewport.scale())
            .unwrap_or(hover);
        Some((start, end))
    }

    // ---------------------------------------------------------------------
    // Mode switching
    // ---------------------------------------------------------------------

    /// Switches the active tool, clearing every piece of transient state.
    ///
    /// A segment still selected keeps its current nails; a half-drawn segment is dropped.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("mode {} -> {}", self.mode.label(), mode.label());
        self.drag_last_pos = None;
        self.abandon_active_point();
        self.selection = None;
        self.mode = mode;
    }

    // ---------------------------------------------------------------------
    // Pointer input (canvas screen coordinates)
    // ---------------------------------------------------------------------

    /// Handles a primary button press.
    pub fn handle_pointer_down(&mut self, screen: Pos2) {
        let world = self.viewport.screen_to_world(screen);
        self.hover = Some(world);
        match self.mode {
            EditorMode::Neutral => {}
            EditorMode::Move => self.drag_last_pos = Some(screen),
            EditorMode::Draw => {
                self.draw_click(world);
            }
            EditorMode::Select => {
                self.select_click(world);
            }
        }
    }

    /// Handles pointer motion, panning while a Move-mode drag is active.
    pub fn handle_pointer_move(&mut self, screen: Pos2) {
        if let (EditorMode::Move, Some(last)) = (self.mode, self.drag_last_pos) {
            self.viewport.pan(screen - last);
            self.drag_last_pos = Some(screen);
        }
        self.hover = Some(self.viewport.screen_to_world(screen));
    }

    /// Handles a primary button release.
    pub fn handle_pointer_up(&mut self, screen: Pos2) {
        self.drag_last_pos = None;
        self.hover = Some(self.viewport.screen_to_world(screen));
    }

    /// Forgets the pointer position, e.g. when it leaves the canvas.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Places a point in Draw mode. Returns true if the click changed the drawing.
    ///
    /// Ignored while a freshly closed segment awaits confirm/cancel, and when the
    /// click is not close enough to a grid intersection.
    pub fn draw_click(&mut self, world: Pos2) -> bool {
        if self.mode != EditorMode::Draw || self.selection.is_some() {
            return false;
        }
        let Some(snapped) = self.grid.snap(world, self.viewport.scale()) else {
            return false;
        };

        let point = Point::new(snapped);
        self.drawing.add_point(point);
        match self.active_point.take() {
            None => {
                self.active_point = Some(point);
            }
            Some(start) => {
                let segment = Segment::new(start, point);
                self.selection = Some(Selection::begin(&segment));
                let id = self.drawing.add_segment(segment);
                log::info!(
                    "segment {id} created from ({}, {}) to ({}, {})",
                    start.x,
                    start.y,
                    point.x,
                    point.y
                );
            }
        }
        true
    }

    /// Picks a segment in Select mode. Returns true if the selection changed.
    ///
    /// Moving the selection elsewhere (or to nothing) keeps the previous segment's edits.
    pub fn select_click(&mut self, world: Pos2) -> bool {
        if self.mode != EditorMode::Select {
            return false;
        }
        let hit = hit_test(
            world,
            &self.drawing.segments,
            HIT_TOLERANCE,
            self.viewport.scale(),
        );
        let current = self.selection.as_ref().map(|sel| sel.segment);
        if hit.map(|s| s.id) == current {
            return false;
        }
        self.selection = hit.map(Selection::begin);
        true
    }

    // ---------------------------------------------------------------------
    // Segment editing
    // ---------------------------------------------------------------------

    /// Updates the value in the point-count field without applying it.
    pub fn set_pending_point_count(&mut self, count: usize) {
        if let Some(sel) = self.selection.as_mut() {
            sel.pending_point_count = count.clamp(MIN_POINT_COUNT, MAX_POINT_COUNT);
        }
    }

    /// Regenerates the nails of the selected segment.
    ///
    /// Rejected when `count` is outside `MIN_POINT_COUNT..=MAX_POINT_COUNT` or nothing is selected.
    pub fn set_point_count(&mut self, count: usize) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            log::debug!("set_point_count({count}) ignored: no segment selected");
            return false;
        };
        if !self.drawing.set_point_count(sel.segment, count) {
            log::debug!("set_point_count({count}) rejected");
            return false;
        }
        sel.pending_point_count = count;
        true
    }

    /// Applies the pending point count of the selected segment.
    pub fn apply_pending_point_count(&mut self) -> bool {
        match self.pending_point_count() {
            Some(count) => self.set_point_count(count),
            None => false,
        }
    }

    /// Discards uncommitted edits.
    ///
    /// In Draw mode a freshly closed segment is removed entirely; a lone active
    /// point is dropped. In Select mode the segment reverts to its saved snapshot.
    pub fn cancel_edit(&mut self) -> bool {
        match (self.mode, self.selection.take()) {
            (EditorMode::Draw, Some(sel)) => {
                self.drawing.remove_segment(sel.segment);
                log::info!("segment {} discarded", sel.segment);
                true
            }
            (EditorMode::Draw, None) => self.abandon_active_point(),
            (EditorMode::Select, Some(sel)) => {
                self.drawing.restore_segment(sel.segment, sel.snapshot);
                log::info!("segment {} reverted", sel.segment);
                true
            }
            (_, sel) => {
                self.selection = sel;
                false
            }
        }
    }

    /// Removes the selected segment. Valid only in Select mode.
    pub fn delete_selected(&mut self) -> bool {
        if self.mode != EditorMode::Select {
            log::debug!("delete ignored outside select mode");
            return false;
        }
        let Some(sel) = self.selection.take() else {
            log::debug!("delete ignored: no segment selected");
            return false;
        };
        self.drawing.remove_segment(sel.segment);
        log::info!("segment {} deleted", sel.segment);
        true
    }

    /// Commits the selected segment and clears the selection.
    ///
    /// A pending point count that was not applied yet is applied first.
    pub fn confirm_edit(&mut self) -> bool {
        let pending = self
            .selection
            .as_ref()
            .map(|sel| sel.pending_point_count)
            .filter(|count| Some(*count) != self.selected_segment().map(|s| s.point_count));
        if let Some(count) = pending {
            self.set_point_count(count);
        }
        match self.selection.take() {
            Some(sel) => {
                log::info!("segment {} confirmed", sel.segment);
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Entities
    // ---------------------------------------------------------------------

    /// Adds a randomly placed circle using the thread-local generator.
    pub fn add_random_circle(&mut self) -> CircleId {
        self.add_random_circle_with(&mut rand::rng())
    }

    /// Adds a randomly placed circle using the given generator.
    pub fn add_random_circle_with<R: Rng>(&mut self, rng: &mut R) -> CircleId {
        let circle = Circle::random(rng, self.viewport.size());
        self.drawing.add_circle(circle)
    }

    // ---------------------------------------------------------------------
    // View
    // ---------------------------------------------------------------------

    /// Zooms in one step around the canvas centre.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zooms out one step around the canvas centre.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Zooms by `notches` wheel steps around a screen position.
    pub fn zoom_at(&mut self, notches: f32, anchor: Pos2) {
        self.viewport.zoom(WHEEL_ZOOM_STEP.powf(notches), anchor);
    }

    /// Resets the view to scale 1 with no pan.
    pub fn center_view(&mut self) {
        self.viewport.reset();
    }

    /// Updates the canvas size after a resize.
    pub fn set_canvas_size(&mut self, size: Vec2) {
        if size == self.viewport.size() {
            return;
        }
        self.viewport.set_size(size);
        self.minimap.resize(size);
    }

    // ---------------------------------------------------------------------
    // Grid
    // ---------------------------------------------------------------------

    /// Sets the grid pitch. Unusable values are rejected.
    pub fn set_grid_pitch(&mut self, pitch: f32) -> bool {
        self.grid.set_pitch(pitch)
    }

    /// Halves the grid pitch.
    pub fn split_grid(&mut self) -> bool {
        self.grid.split()
    }

    /// Doubles the grid pitch.
    pub fn enlarge_grid(&mut self) -> bool {
        self.grid.enlarge()
    }

    /// Shows or hides the grid.
    pub fn toggle_grid_visible(&mut self) {
        self.grid.toggle_visible();
    }

    /// Drops the half-drawn segment's first point. Returns true if there was one.
    fn abandon_active_point(&mut self) -> bool {
        match self.active_point.take() {
            Some(point) => {
                self.drawing.remove_point_if_orphan(point.id);
                true
            }
            None => false,
        }
    }
}
