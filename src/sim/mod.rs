//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (injected into terrain generation)
//! - Stable iteration order (shells in list order, segments left to right)
//! - Playfield size passed in explicitly, never read from the host
//! - No rendering or platform dependencies

pub mod collision;
pub mod crater;
pub mod geometry;
pub mod shell;
pub mod terrain;
pub mod tick;

pub use collision::{check_collision, first_colliding_segment};
pub use crater::{CraterPolicy, ImpactEvent, LogCrater, RecordCrater};
pub use geometry::{closest_point_on_segment, distance, on_segment, point_in_circle};
pub use shell::Shell;
pub use terrain::{Segment, Terrain};
pub use tick::{FrameClock, FrameReport, World, collide_shells, cull_off_world};
