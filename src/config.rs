//! Playfield configuration
//!
//! The host owns this value and threads it into generation, collision
//! culling and rendering. Nothing in the simulation reads window size directly.

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_RATE, SPLIT_SCREEN, WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::ConfigError;

/// World dimensions and loop settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Full world width (pixels)
    pub width: f32,
    /// World height (pixels, +y points down)
    pub height: f32,
    /// Target frames per second (design target only)
    pub frame_rate: u32,
    /// Two clients share the screen; each gets half the width
    pub split_screen: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            frame_rate: FRAME_RATE,
            split_screen: SPLIT_SCREEN,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a host-supplied JSON config; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConfigError::InvalidWidth { width: self.width });
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::InvalidHeight {
                height: self.height,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Width of the playable area (halved in split-screen)
    #[inline]
    pub fn playfield_width(&self) -> f32 {
        if self.split_screen {
            self.width / 2.0
        } else {
            self.width
        }
    }

    #[inline]
    pub fn playfield_height(&self) -> f32 {
        self.height
    }

    /// Copy of this config with new dimensions
    pub fn resized(&self, width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            ..*self
        };
        config.validate()?;
        Ok(config)
    }

    /// Whole-pixel display size for a canvas backing this playfield
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Seconds per frame at the target frame rate
    pub fn frame_budget_secs(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}
