//! Shared application-wide constants.
//! Centralizes tweakable values used across the editing core, rendering and interactions.

use egui::Color32;

// Grid/snapping
/// Default grid pitch in world units (one centimetre at 96 dpi).
pub const DEFAULT_GRID_PITCH: f32 = 37.795_277;
/// Smallest grid pitch reachable by repeatedly splitting the grid.
pub const MIN_GRID_PITCH: f32 = 1.0;
/// Largest grid pitch reachable by repeatedly enlarging the grid.
pub const MAX_GRID_PITCH: f32 = 1000.0;
/// Maximum distance (unscaled canvas pixels) between a pointer and a grid intersection for a snap to succeed.
pub const SNAP_RADIUS: f32 = 5.0;

// Viewport
/// Lower zoom bound; the content always covers the whole canvas.
pub const MIN_SCALE: f32 = 1.0;
/// Upper zoom bound.
pub const MAX_SCALE: f32 = 5.0;
/// Multiplicative factor applied by a single zoom-in/zoom-out step.
pub const ZOOM_STEP: f32 = 1.2;
/// Factor applied per scroll wheel notch when zooming around the cursor.
pub const WHEEL_ZOOM_STEP: f32 = 1.05;

// Editing
/// Pick radius (screen pixels) for selecting a segment.
pub const HIT_TOLERANCE: f32 = 6.0;
/// Smallest permitted number of nails on a segment (its two endpoints).
pub const MIN_POINT_COUNT: usize = 2;
/// Upper bound offered by the point-count editor.
pub const MAX_POINT_COUNT: usize = 500;

// Minimap
/// Fixed width of the overview in pixels; the height follows the canvas aspect ratio.
pub const MINIMAP_WIDTH: f32 = 200.0;
/// Distance between the minimap and the canvas corner.
pub const MINIMAP_MARGIN: f32 = 12.0;

// Circles
/// Smallest radius of a randomly generated circle.
pub const CIRCLE_MIN_RADIUS: f32 = 10.0;
/// Exclusive upper bound of a randomly generated circle radius.
pub const CIRCLE_MAX_RADIUS: f32 = 60.0;

// Markers (screen pixels)
/// Radius of endpoint markers.
pub const POINT_RADIUS: f32 = 4.0;
/// Radius of nail markers.
pub const NAIL_RADIUS: f32 = 2.5;
/// Stroke width of committed segments.
pub const SEGMENT_STROKE_WIDTH: f32 = 2.0;

// Palette
/// Points drawn in drawing mode.
pub const POINT_FILL: Color32 = Color32::BLACK;
/// Completed segments.
pub const SEGMENT_STROKE: Color32 = Color32::from_rgb(0x9a, 0x9c, 0x9a);
/// Segment preview while drawing.
pub const PREVIEW_SEGMENT_STROKE: Color32 = Color32::from_rgb(0x9a, 0x9c, 0x9a);
/// Grid lines.
pub const GRID_STROKE: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
/// Highlight for the selected segment and its nails.
pub const SELECTION_STROKE: Color32 = Color32::from_rgb(100, 150, 255);
/// Outline of the visible area inside the minimap.
pub const MINIMAP_VIEWPORT_STROKE: Color32 = Color32::RED;
