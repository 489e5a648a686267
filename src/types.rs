//! Core data types for the string art editor.
//!
//! This module defines the drawing model: points placed on the grid, segments
//! joining two points with their evenly spaced nails, and decorative circles.
//! A [`Drawing`] owns all of them and keeps the point set consistent with the
//! segments that reference it.

use egui::{Color32, Pos2, Vec2};
use rand::Rng;
use uuid::Uuid;

/// Unique identifier for points (segment endpoints and nails).
pub type PointId = Uuid;

/// Unique identifier for segments.
pub type SegmentId = Uuid;

/// Unique identifier for decorative circles.
pub type CircleId = Uuid;

/// Distinguishes user-placed points from generated nails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Placed by a draw click; the start or end of a segment
    Endpoint,
    /// Generated between the endpoints of a segment
    Nail,
}

/// A point in world space.
///
/// Identity is the id: two points may share a position without being the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Unique identifier for this point
    pub id: PointId,
    /// World x coordinate
    pub x: f32,
    /// World y coordinate
    pub y: f32,
    /// Whether this point was placed by the user or generated as a nail
    pub kind: PointKind,
}

impl Point {
    /// Creates a new user-placed point at the given world position.
    pub fn new(pos: Pos2) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: pos.x,
            y: pos.y,
            kind: PointKind::Endpoint,
        }
    }

    /// Creates a new generated nail at the given world position.
    pub fn nail(pos: Pos2) -> Self {
        Self {
            kind: PointKind::Nail,
            ..Self::new(pos)
        }
    }

    /// Position of this point in world space.
    pub fn pos(&self) -> Pos2 {
        egui::pos2(self.x, self.y)
    }
}

/// Saved `{point_count, nails}` of a segment, taken when an edit session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSnapshot {
    /// Point count before the edit
    pub point_count: usize,
    /// Nails before the edit
    pub nails: Vec<Point>,
}

/// A line between two points carrying `point_count` evenly spaced nails.
///
/// `nails[0]` is always `start` and `nails[point_count - 1]` is always `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Unique identifier for this segment
    pub id: SegmentId,
    /// First endpoint
    pub start: Point,
    /// Second endpoint
    pub end: Point,
    /// Number of nails, endpoints included (always >= 2)
    pub point_count: usize,
    /// Nails ordered from `start` to `end`
    pub nails: Vec<Point>,
}

impl Segment {
    /// Creates a segment between two points with the default two nails (its endpoints).
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            point_count: crate::constants::MIN_POINT_COUNT,
            nails: vec![start, end],
        }
    }

    /// Returns true when both endpoints sit at the same position.
    pub fn is_degenerate(&self) -> bool {
        self.start.pos() == self.end.pos()
    }

    /// Length of the segment in world units.
    pub fn length(&self) -> f32 {
        (self.end.pos() - self.start.pos()).length()
    }

    /// Returns true if the point is an endpoint or a nail of this segment.
    pub fn references(&self, point_id: PointId) -> bool {
        self.start.id == point_id
            || self.end.id == point_id
            || self.nails.iter().any(|n| n.id == point_id)
    }

    /// Captures the current point count and nails so an edit can be rolled back.
    pub fn snapshot(&self) -> SegmentSnapshot {
        SegmentSnapshot {
            point_count: self.point_count,
            nails: self.nails.clone(),
        }
    }

    /// Replaces the nails with `count` evenly spaced points, endpoints included.
    ///
    /// Interior nails are new points; the endpoints are reused. Returns the nails
    /// that were replaced, or `None` if `count` is outside
    /// `MIN_POINT_COUNT..=MAX_POINT_COUNT`.
    pub fn regenerate_nails(&mut self, count: usize) -> Option<Vec<Point>> {
        use crate::constants::{MAX_POINT_COUNT, MIN_POINT_COUNT};

        if !(MIN_POINT_COUNT..=MAX_POINT_COUNT).contains(&count) {
            return None;
        }
        let positions = nail_positions(self.start.pos(), self.end.pos(), count);
        let mut nails = Vec::with_capacity(count);
        nails.push(self.start);
        nails.extend(
            positions[1..count - 1]
                .iter()
                .map(|pos| Point::nail(*pos)),
        );
        nails.push(self.end);

        self.point_count = count;
        Some(std::mem::replace(&mut self.nails, nails))
    }

    /// Puts back a previously captured point count and nails. Returns the nails that were replaced.
    pub fn restore(&mut self, snapshot: SegmentSnapshot) -> Vec<Point> {
        self.point_count = snapshot.point_count;
        std::mem::replace(&mut self.nails, snapshot.nails)
    }
}

/// Computes `count` evenly spaced positions from `start` to `end` inclusive.
///
/// `count` below 2 yields the endpoints that fit (`[]` or `[start]`).
pub fn nail_positions(start: Pos2, end: Pos2, count: usize) -> Vec<Pos2> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f32;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + (end - start) * (i as f32 / last)
                    }
                })
                .collect()
        }
    }
}

/// A decorative filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Unique identifier for this circle
    pub id: CircleId,
    /// Centre x in world space
    pub x: f32,
    /// Centre y in world space
    pub y: f32,
    /// Radius in world units
    pub radius: f32,
    /// Fill colour
    pub color: Color32,
}

impl Circle {
    /// Creates a circle with a random centre inside `bounds`, a random radius and a random colour.
    pub fn random<R: Rng>(rng: &mut R, bounds: Vec2) -> Self {
        use crate::constants::{CIRCLE_MAX_RADIUS, CIRCLE_MIN_RADIUS};

        Self {
            id: Uuid::new_v4(),
            x: random_coordinate(rng, bounds.x),
            y: random_coordinate(rng, bounds.y),
            radius: rng.random_range(CIRCLE_MIN_RADIUS..CIRCLE_MAX_RADIUS),
            color: random_color(rng),
        }
    }

    /// Centre of the circle in world space.
    pub fn center(&self) -> Pos2 {
        egui::pos2(self.x, self.y)
    }
}

fn random_coordinate<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Picks a random opaque 24-bit colour.
pub fn random_color<R: Rng>(rng: &mut R) -> Color32 {
    let [r, g, b, _] = rng.random::<u32>().to_le_bytes();
    Color32::from_rgb(r, g, b)
}

/// All entities on the canvas.
///
/// The point set mirrors what the segments reference; the mutating helpers keep
/// it that way so that no live segment ever loses one of its points.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Every endpoint and nail currently on the canvas, in creation order
    pub points: Vec<Point>,
    /// Segments in creation order
    pub segments: Vec<Segment>,
    /// Decorative circles
    pub circles: Vec<Circle>,
}

impl Drawing {
    /// Creates an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point to the point set.
    pub fn add_point(&mut self, point: Point) -> PointId {
        let id = point.id;
        self.points.push(point);
        id
    }

    /// Looks up a point by id.
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Adds a segment. Its endpoints and nails must already be in the point set or are added here.
    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let id = segment.id;
        for nail in &segment.nails {
            if self.point(nail.id).is_none() {
                self.points.push(*nail);
            }
        }
        self.segments.push(segment);
        id
    }

    /// Looks up a segment by id.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Returns true if any segment uses the point as endpoint or nail.
    pub fn is_referenced(&self, point_id: PointId) -> bool {
        self.segments.iter().any(|s| s.references(point_id))
    }

    /// Regenerates the nails of a segment. Returns false if the segment is unknown or `count` is out of range.
    ///
    /// Replaced interior nails leave the point set unless another segment still uses them.
    pub fn set_point_count(&mut self, segment_id: SegmentId, count: usize) -> bool {
        let Some(index) = self.segments.iter().position(|s| s.id == segment_id) else {
            return false;
        };
        let Some(old_nails) = self.segments[index].regenerate_nails(count) else {
            return false;
        };
        self.swap_nails(index, &old_nails);
        true
    }

    /// Puts a segment's saved point count and nails back. Returns false if the segment is unknown.
    pub fn restore_segment(&mut self, segment_id: SegmentId, snapshot: SegmentSnapshot) -> bool {
        let Some(index) = self.segments.iter().position(|s| s.id == segment_id) else {
            return false;
        };
        let old_nails = self.segments[index].restore(snapshot);
        self.swap_nails(index, &old_nails);
        true
    }

    /// Removes a segment and prunes the points it leaves behind.
    ///
    /// A point survives iff a remaining segment references it.
    pub fn remove_segment(&mut self, segment_id: SegmentId) -> Option<Segment> {
        let index = self.segments.iter().position(|s| s.id == segment_id)?;
        let removed = self.segments.remove(index);
        self.prune_points();
        Some(removed)
    }

    /// Removes a point unless a segment references it. Returns true if it was removed.
    pub fn remove_point_if_orphan(&mut self, point_id: PointId) -> bool {
        if self.is_referenced(point_id) {
            return false;
        }
        let before = self.points.len();
        self.points.retain(|p| p.id != point_id);
        self.points.len() != before
    }

    /// Drops every point no segment references.
    pub fn prune_points(&mut self) {
        let segments = &self.segments;
        self.points
            .retain(|p| segments.iter().any(|s| s.references(p.id)));
    }

    /// Adds a decorative circle.
    pub fn add_circle(&mut self, circle: Circle) -> CircleId {
        let id = circle.id;
        self.circles.push(circle);
        id
    }

    /// Syncs the point set after the nails of `self.segments[index]` changed from `old_nails`.
    fn swap_nails(&mut self, index: usize, old_nails: &[Point]) {
        let segment = &self.segments[index];
        let stale: Vec<PointId> = old_nails
            .iter()
            .filter(|n| !segment.references(n.id))
            .map(|n| n.id)
            .filter(|id| {
                !self
                    .segments
                    .iter()
                    .enumerate()
                    .any(|(i, s)| i != index && s.references(*id))
            })
            .collect();
        self.points.retain(|p| !stale.contains(&p.id));

        let fresh: Vec<Point> = segment
            .nails
            .iter()
            .filter(|n| !self.points.iter().any(|p| p.id == n.id))
            .copied()
            .collect();
        self.points.extend(fresh);
    }
}
