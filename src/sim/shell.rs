//! Projectiles fired by tanks
//!
//! The game loop owns the shell list. The simulation reads position and
//! size, advances kinematics, and removes shells that hit terrain or leave
//! the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::{SHELL_MASS, SHELL_SIZE};
use crate::error::ShellError;

/// A circular projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    /// Collision radius
    pub size: f32,
}

impl Shell {
    pub fn new(pos: Vec2, vel: Vec2, mass: f32, size: f32) -> Self {
        Self {
            pos,
            vel,
            mass,
            size,
        }
    }

    /// Shell with default mass and size
    pub fn fired(pos: Vec2, vel: Vec2) -> Self {
        Self::new(pos, vel, SHELL_MASS, SHELL_SIZE)
    }

    /// A shell is usable by collision checks only with a finite position and
    /// a finite, non-negative size
    pub fn validate(&self) -> Result<(), ShellError> {
        if !self.pos.is_finite() {
            return Err(ShellError::NonFinitePosition {
                x: self.pos.x,
                y: self.pos.y,
            });
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(ShellError::InvalidSize { size: self.size });
        }
        Ok(())
    }

    /// Advance one explicit Euler step (+y is down)
    pub fn step(&mut self, dt: f32, gravity: f32) {
        self.vel.y += gravity * dt;
        self.pos += self.vel * dt;
    }

    /// True once any part of the shell leaves the sides or bottom of the playfield
    pub fn is_off_world(&self, config: &WorldConfig) -> bool {
        self.pos.x - self.size < 0.0
            || self.pos.x + self.size > config.playfield_width()
            || self.pos.y + self.size > config.playfield_height()
    }
}
