//! Validation errors
//!
//! Nothing here is recoverable I/O; every variant is a contract violation
//! caught at a boundary (host config, terrain geometry, shell state).

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidWidth { width: f32 },
    InvalidHeight { height: f32 },
    ZeroFrameRate,
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "playfield width must be finite and positive, got {width}")
            }
            Self::InvalidHeight { height } => {
                write!(f, "playfield height must be finite and positive, got {height}")
            }
            Self::ZeroFrameRate => write!(f, "frame rate must be non-zero"),
            Self::Parse { message } => write!(f, "invalid world config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq)]
pub enum TerrainError {
    InvalidPlayfield(ConfigError),
    NonFiniteHeight { start_y: f32, end_y: f32 },
    TooFewPoints { actual: usize, min: usize },
    NonFinitePoint { index: usize },
    NonIncreasingX { index: usize, prev: f32, x: f32 },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayfield(err) => write!(f, "cannot generate terrain: {err}"),
            Self::NonFiniteHeight { start_y, end_y } => write!(
                f,
                "terrain edge heights must be finite, got start={start_y} end={end_y}"
            ),
            Self::TooFewPoints { actual, min } => {
                write!(f, "terrain needs at least {min} points, got {actual}")
            }
            Self::NonFinitePoint { index } => {
                write!(f, "terrain point {index} has a non-finite coordinate")
            }
            Self::NonIncreasingX { index, prev, x } => write!(
                f,
                "terrain x must strictly increase: point {index} has x={x} after x={prev}"
            ),
        }
    }
}

impl std::error::Error for TerrainError {}

impl From<ConfigError> for TerrainError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidPlayfield(err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShellError {
    NonFinitePosition { x: f32, y: f32 },
    InvalidSize { size: f32 },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { x, y } => {
                write!(f, "shell position is not finite: ({x}, {y})")
            }
            Self::InvalidSize { size } => {
                write!(f, "shell size must be finite and non-negative, got {size}")
            }
        }
    }
}

impl std::error::Error for ShellError {}
