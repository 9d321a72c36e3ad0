//! Point and segment geometry used by the collision engine
//!
//! Projection onto a segment is deliberately unclamped: callers screen out
//! projections that fall off the segment with `on_segment`, which compares
//! distance sums within `SEGMENT_BUFFER`.

use glam::Vec2;

use crate::consts::SEGMENT_BUFFER;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// True if `point` lies strictly inside the circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    distance(point, center) < radius
}

/// Project `target` onto the infinite line through `p1` and `p2`
///
/// t = ((target - p1) · (p2 - p1)) / |p2 - p1|², result = p1 + t (p2 - p1).
/// A zero-length segment projects everything onto `p1`.
pub fn closest_point_on_segment(p1: Vec2, p2: Vec2, target: Vec2) -> Vec2 {
    let line = p2 - p1;
    let len_sq = line.length_squared();
    if len_sq == 0.0 {
        return p1;
    }
    let t = (target - p1).dot(line) / len_sq;
    p1 + line * t
}

/// True if `point` lies on the bounded segment `p1`-`p2`
///
/// Uses d(p1, point) + d(point, p2) ≈ d(p1, p2) within `SEGMENT_BUFFER`.
#[inline]
pub fn on_segment(p1: Vec2, p2: Vec2, point: Vec2) -> bool {
    on_segment_within(p1, p2, point, SEGMENT_BUFFER)
}

pub fn on_segment_within(p1: Vec2, p2: Vec2, point: Vec2, buffer: f32) -> bool {
    let seg_len = distance(p1, p2);
    let sum = distance(p1, point) + distance(point, p2);
    sum >= seg_len - buffer && sum <= seg_len + buffer
}
