//! Canvas rendering for the grid, circles, segments, nails and the minimap.
//!
//! Everything is read from the editor and converted to absolute screen space with
//! [`StringArtApp::world_to_paint`]; nothing here mutates editing state.

use super::state::StringArtApp;
use crate::constants::*;
use crate::grid::GridLine;
use crate::types::PointKind;
use eframe::egui;
use eframe::epaint::StrokeKind;

impl StringArtApp {
    /// Renders all canvas layers.
    ///
    /// Layers from back to front: paper, grid, circles, segments, nails and points,
    /// the draw preview, then the minimap overlay.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter clipped to the canvas
    pub fn render_canvas(&self, painter: &egui::Painter) {
        painter.rect_filled(self.canvas_rect, 0.0, egui::Color32::WHITE);

        if self.editor.grid().is_visible() {
            self.draw_grid(painter);
        }
        self.draw_circles(painter);
        self.draw_segments(painter);
        self.draw_points(painter);
        self.draw_preview(painter);

        if self.settings.show_minimap {
            self.draw_minimap(painter);
        }
    }

    /// Draws grid lines across the visible part of the world.
    ///
    /// Skipped when the on-screen pitch gets too small to be useful.
    pub fn draw_grid(&self, painter: &egui::Painter) {
        let grid = self.editor.grid();
        let viewport = self.editor.viewport();
        if grid.pitch() * viewport.scale() < 2.0 {
            return;
        }
        let stroke = egui::Stroke::new(1.0, GRID_STROKE);
        let rect = self.canvas_rect;

        for line in grid.lines(viewport.visible_world_rect()) {
            match line {
                GridLine::Vertical(i) => {
                    let x = self
                        .world_to_paint(egui::pos2(grid.line_coordinate(i), 0.0))
                        .x;
                    painter.line_segment(
                        [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                        stroke,
                    );
                }
                GridLine::Horizontal(i) => {
                    let y = self
                        .world_to_paint(egui::pos2(0.0, grid.line_coordinate(i)))
                        .y;
                    painter.line_segment(
                        [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                        stroke,
                    );
                }
            }
        }
    }

    fn draw_circles(&self, painter: &egui::Painter) {
        let scale = self.editor.viewport().scale();
        for circle in self.editor.circles() {
            painter.circle_filled(
                self.world_to_paint(circle.center()),
                circle.radius * scale,
                circle.color,
            );
        }
    }

    fn draw_segments(&self, painter: &egui::Painter) {
        let selected = self.editor.selected_segment().map(|s| s.id);
        for segment in self.editor.segments() {
            let color = if Some(segment.id) == selected {
                SELECTION_STROKE
            } else {
                SEGMENT_STROKE
            };
            painter.line_segment(
                [
                    self.world_to_paint(segment.start.pos()),
                    self.world_to_paint(segment.end.pos()),
                ],
                egui::Stroke::new(SEGMENT_STROKE_WIDTH, color),
            );
        }
    }

    /// Draws endpoints, nails (when enabled) and the active draw point.
    fn draw_points(&self, painter: &egui::Painter) {
        let selected = self.editor.selected_segment();
        for point in self.editor.points() {
            let pos = self.world_to_paint(point.pos());
            match point.kind {
                PointKind::Endpoint => {
                    painter.circle_filled(pos, POINT_RADIUS, POINT_FILL);
                }
                PointKind::Nail if self.settings.show_nails => {
                    let color = if selected.is_some_and(|s| s.references(point.id)) {
                        SELECTION_STROKE
                    } else {
                        POINT_FILL
                    };
                    painter.circle_filled(pos, NAIL_RADIUS, color);
                }
                PointKind::Nail => {}
            }
        }

        if let Some(active) = self.editor.active_point() {
            painter.circle_stroke(
                self.world_to_paint(active.pos()),
                POINT_RADIUS + 3.0,
                egui::Stroke::new(1.5, SELECTION_STROKE),
            );
        }
    }

    fn draw_preview(&self, painter: &egui::Painter) {
        if let Some((start, end)) = self.editor.preview_segment() {
            let points = [self.world_to_paint(start), self.world_to_paint(end)];
            painter.add(egui::Shape::dashed_line(
                &points,
                egui::Stroke::new(SEGMENT_STROKE_WIDTH, PREVIEW_SEGMENT_STROKE),
                6.0,
                4.0,
            ));
        }
    }

    /// Draws the overview in the bottom-right corner of the canvas.
    ///
    /// Circles and segments are projected with the minimap scale; the visible area
    /// is outlined on top.
    pub fn draw_minimap(&self, painter: &egui::Painter) {
        let minimap = self.editor.minimap();
        let size = minimap.size();
        if size.y <= 0.0 {
            return;
        }
        let origin = self.canvas_rect.max - size - egui::vec2(MINIMAP_MARGIN, MINIMAP_MARGIN);
        let frame = egui::Rect::from_min_size(origin, size);
        let to_frame = |world: egui::Pos2| minimap.project_point(world) + origin.to_vec2();

        let minimap_painter = painter.with_clip_rect(frame);
        minimap_painter.rect_filled(frame, 2.0, egui::Color32::from_gray(245));
        for circle in self.editor.circles() {
            minimap_painter.circle_filled(
                to_frame(circle.center()),
                (circle.radius * minimap.scale()).max(1.0),
                circle.color,
            );
        }
        for segment in self.editor.segments() {
            minimap_painter.line_segment(
                [to_frame(segment.start.pos()), to_frame(segment.end.pos())],
                egui::Stroke::new(1.0, SEGMENT_STROKE),
            );
        }

        let visible = self.editor.minimap_rect().translate(origin.to_vec2());
        minimap_painter.rect_filled(
            visible,
            0.0,
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 26),
        );
        minimap_painter.rect_stroke(
            visible,
            0.0,
            egui::Stroke::new(2.0, MINIMAP_VIEWPORT_STROKE),
            StrokeKind::Inside,
        );
        painter.rect_stroke(
            frame,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
            StrokeKind::Outside,
        );
    }
}
