//! Shell vs terrain collision detection
//!
//! A shell is a circle; terrain is a polyline. A shell hits a segment when
//! either endpoint is strictly inside the circle, or when its projection onto
//! the segment lies on the segment and is within `size` of the centre.

use super::geometry::{closest_point_on_segment, distance, on_segment, point_in_circle};
use super::shell::Shell;
use super::terrain::{Segment, Terrain};
use glam::Vec2;

/// Check collision between a shell and the segment `p1`-`p2`
pub fn check_collision(shell: &Shell, p1: Vec2, p2: Vec2) -> bool {
    // Shell sitting on a terrain vertex
    if point_in_circle(p1, shell.pos, shell.size) || point_in_circle(p2, shell.pos, shell.size) {
        return true;
    }

    let closest = closest_point_on_segment(p1, p2, shell.pos);
    if !on_segment(p1, p2, closest) {
        return false;
    }

    distance(closest, shell.pos) <= shell.size
}

/// First segment (lowest index) the shell collides with, if any
pub fn first_colliding_segment(shell: &Shell, terrain: &Terrain) -> Option<Segment> {
    terrain
        .segments()
        .find(|seg| check_collision(shell, seg.p1, seg.p2))
}
