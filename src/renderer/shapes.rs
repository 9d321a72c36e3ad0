//! Path generation for the ground silhouette and shells

use glam::Vec2;

use super::PathSink;
use crate::config::WorldConfig;
use crate::consts::{GROUND_COLOR, SHELL_COLOR};
use crate::sim::{Shell, Terrain};

/// Closed ground polygon: terrain left to right, bottom-right corner,
/// bottom-left corner, back to the first terrain point
pub fn terrain_outline(terrain: &Terrain, config: &WorldConfig) -> Vec<Vec2> {
    let points = terrain.points();
    let mut outline = Vec::with_capacity(points.len() + 3);
    outline.extend_from_slice(points);
    outline.push(Vec2::new(config.playfield_width(), config.playfield_height()));
    outline.push(Vec2::new(0.0, config.playfield_height()));
    if let Some(&first) = points.first() {
        outline.push(first);
    }
    outline
}

/// Fill the terrain as a solid ground silhouette
pub fn draw_terrain(sink: &mut dyn PathSink, terrain: &Terrain, config: &WorldConfig) {
    let outline = terrain_outline(terrain, config);
    let Some((first, rest)) = outline.split_first() else {
        return;
    };

    sink.begin_path();
    sink.set_fill_style(GROUND_COLOR);
    sink.move_to(first.x, first.y);
    for p in rest {
        sink.line_to(p.x, p.y);
    }
    sink.close_path();
    sink.fill();
}

pub fn draw_shell(sink: &mut dyn PathSink, shell: &Shell) {
    sink.begin_path();
    sink.set_fill_style(SHELL_COLOR);
    sink.circle(shell.pos.x, shell.pos.y, shell.size);
    sink.fill();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Begin,
        Move(f32, f32),
        Line(f32, f32),
        Circle(f32, f32, f32),
        Close,
        Style(String),
        Fill,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl PathSink for Recorder {
        fn begin_path(&mut self) {
            self.ops.push(Op::Begin);
        }
        fn move_to(&mut self, x: f32, y: f32) {
            self.ops.push(Op::Move(x, y));
        }
        fn line_to(&mut self, x: f32, y: f32) {
            self.ops.push(Op::Line(x, y));
        }
        fn circle(&mut self, x: f32, y: f32, radius: f32) {
            self.ops.push(Op::Circle(x, y, radius));
        }
        fn close_path(&mut self) {
            self.ops.push(Op::Close);
        }
        fn set_fill_style(&mut self, style: &str) {
            self.ops.push(Op::Style(style.to_string()));
        }
        fn fill(&mut self) {
            self.ops.push(Op::Fill);
        }
    }

    fn terrain() -> Terrain {
        Terrain::from_points(vec![
            Vec2::new(0.0, 60.0),
            Vec2::new(50.0, 40.0),
            Vec2::new(100.0, 70.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_outline_closes_through_bottom_corners() {
        let config = WorldConfig::new(100.0, 80.0).unwrap();
        let outline = terrain_outline(&terrain(), &config);
        assert_eq!(
            outline,
            vec![
                Vec2::new(0.0, 60.0),
                Vec2::new(50.0, 40.0),
                Vec2::new(100.0, 70.0),
                Vec2::new(100.0, 80.0),
                Vec2::new(0.0, 80.0),
                Vec2::new(0.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_draw_terrain_path() {
        let config = WorldConfig::new(100.0, 80.0).unwrap();
        let mut recorder = Recorder::default();
        draw_terrain(&mut recorder, &terrain(), &config);
        assert_eq!(
            recorder.ops,
            vec![
                Op::Begin,
                Op::Style(GROUND_COLOR.to_string()),
                Op::Move(0.0, 60.0),
                Op::Line(50.0, 40.0),
                Op::Line(100.0, 70.0),
                Op::Line(100.0, 80.0),
                Op::Line(0.0, 80.0),
                Op::Line(0.0, 60.0),
                Op::Close,
                Op::Fill,
            ]
        );
    }

    #[test]
    fn test_draw_does_not_mutate_terrain() {
        let config = WorldConfig::default();
        let terrain = terrain();
        let before = terrain.clone();
        draw_terrain(&mut Recorder::default(), &terrain, &config);
        assert_eq!(terrain, before);
    }

    #[test]
    fn test_draw_shell() {
        let mut recorder = Recorder::default();
        draw_shell(&mut recorder, &Shell::fired(Vec2::new(3.0, 4.0), Vec2::ZERO));
        assert!(recorder.ops.contains(&Op::Circle(3.0, 4.0, 6.0)));
        assert_eq!(recorder.ops.last(), Some(&Op::Fill));
    }
}
