//! Tank Artillery - A 2D artillery game on destructible terrain
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, shells, collisions, impacts)
//! - `renderer`: Canvas path rendering of the terrain silhouette
//! - `config`: Playfield configuration supplied by the host
//! - `error`: Validation errors for config, terrain and shells

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::WorldConfig;
pub use error::{ConfigError, ShellError, TerrainError};

/// Game configuration constants
pub mod consts {
    /// Target frame rate (informational; the host refresh callback drives the loop)
    pub const FRAME_RATE: u32 = 30;
    /// Largest frame delta fed to the simulation, in seconds
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical world size, independent of the actual display size
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;
    /// Show two clients side by side (halves the playfield width)
    pub const SPLIT_SCREEN: bool = false;

    /// Minimum number of terrain points a generated terrain carries
    pub const MIN_TERRAIN_POINTS: usize = 5;
    /// Tolerance for the distance-sum segment membership test (world units)
    pub const SEGMENT_BUFFER: f32 = 0.1;

    /// Shell defaults
    pub const SHELL_MASS: f32 = 10.0;
    pub const SHELL_SIZE: f32 = 6.0;
    /// Downward acceleration applied to shells (pixels/s², +y is down)
    pub const GRAVITY: f32 = 300.0;

    /// Terrain fill style
    pub const GROUND_COLOR: &str = "green";
    pub const SKY_COLOR: &str = "white";
    pub const SHELL_COLOR: &str = "black";
}
