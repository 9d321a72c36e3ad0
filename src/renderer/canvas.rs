//! `PathSink` over a browser 2D canvas context

use web_sys::CanvasRenderingContext2d;

use super::PathSink;

impl PathSink for CanvasRenderingContext2d {
    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::move_to(self, x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::line_to(self, x as f64, y as f64);
    }

    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        if let Err(e) = self.arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
}
