//! Terrain and shell rendering
//!
//! Drawing goes through `PathSink`, a minimal path-building surface. On the
//! web it is backed by `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

pub use shapes::{draw_shell, draw_terrain, terrain_outline};

/// A 2D surface that can build and fill paths
pub trait PathSink {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Full circle centred on (x, y)
    fn circle(&mut self, x: f32, y: f32, radius: f32);
    fn close_path(&mut self);
    fn set_fill_style(&mut self, style: &str);
    fn fill(&mut self);
}
