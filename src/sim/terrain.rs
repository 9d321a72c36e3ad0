//! Ground polyline and procedural terrain generation
//!
//! Terrain is an ordered list of points with strictly increasing x, spanning
//! the playfield from x = 0 to x = playfield width. Consecutive points form
//! the segments shells collide with.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::MIN_TERRAIN_POINTS;
use crate::error::TerrainError;

/// Two consecutive terrain points (derived, never stored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Index of `p1` in the terrain point list
    pub index: usize,
    pub p1: Vec2,
    pub p2: Vec2,
}

/// The ground of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    points: Vec<Vec2>,
}

impl Terrain {
    /// Generate terrain across the current playfield
    ///
    /// `num_points` below `MIN_TERRAIN_POINTS` is raised to the minimum.
    /// Interior heights are uniform within the lower 3/5 of the playfield.
    /// An invalid playfield or non-finite edge heights are rejected.
    pub fn generate<R: Rng>(
        start_y: f32,
        end_y: f32,
        num_points: usize,
        config: &WorldConfig,
        rng: &mut R,
    ) -> Result<Self, TerrainError> {
        config.validate()?;
        if !start_y.is_finite() || !end_y.is_finite() {
            return Err(TerrainError::NonFiniteHeight { start_y, end_y });
        }
        let points = generate_points(start_y, end_y, num_points, config, rng);
        validate_points(&points)?;
        log::debug!(
            "Generated terrain: {} points across {}x{}",
            points.len(),
            config.playfield_width(),
            config.playfield_height()
        );
        Ok(Self { points })
    }

    /// Build terrain from explicit points (level data, tests)
    pub fn from_points(points: Vec<Vec2>) -> Result<Self, TerrainError> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Replace the terrain geometry (e.g. after carving)
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<(), TerrainError> {
        validate_points(&points)?;
        self.points = points;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Segments in left-to-right order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(index, w)| Segment {
                index,
                p1: w[0],
                p2: w[1],
            })
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        let p1 = *self.points.get(index)?;
        let p2 = *self.points.get(index + 1)?;
        Some(Segment { index, p1, p2 })
    }
}

fn generate_points<R: Rng>(
    start_y: f32,
    end_y: f32,
    num_points: usize,
    config: &WorldConfig,
    rng: &mut R,
) -> Vec<Vec2> {
    let num_points = num_points.max(MIN_TERRAIN_POINTS);
    let width = config.playfield_width();
    let height = config.playfield_height();

    // Whole-pixel spacing; fall back to fractional spacing on very narrow playfields
    let mut x_spacing = (width / num_points as f32).floor();
    if x_spacing <= 0.0 {
        x_spacing = width / num_points as f32;
    }

    // Heights measured up from the bottom edge
    let y_min = 0.0;
    let y_max = (3.0 * height / 5.0).floor();

    let mut points = Vec::with_capacity(num_points);
    points.push(Vec2::new(0.0, start_y));

    for i in 1..num_points - 1 {
        let rise = rng.random::<f32>() * (y_max - y_min) + y_min;
        points.push(Vec2::new(i as f32 * x_spacing, height - rise));
    }

    points.push(Vec2::new(width, end_y));
    points
}

fn validate_points(points: &[Vec2]) -> Result<(), TerrainError> {
    if points.len() < 2 {
        return Err(TerrainError::TooFewPoints {
            actual: points.len(),
            min: 2,
        });
    }
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(TerrainError::NonFinitePoint { index });
        }
    }
    for (i, w) in points.windows(2).enumerate() {
        if w[1].x <= w[0].x {
            return Err(TerrainError::NonIncreasingX {
                index: i + 1,
                prev: w[0].x,
                x: w[1].x,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config(width: f32, height: f32) -> WorldConfig {
        WorldConfig::new(width, height).unwrap()
    }

    #[test]
    fn test_generate_clamps_to_minimum_points() {
        let mut rng = Pcg32::seed_from_u64(7);
        let cfg = config(1000.0, 800.0);
        let terrain = Terrain::generate(500.0, 600.0, 2, &cfg, &mut rng).unwrap();
        assert_eq!(terrain.len(), MIN_TERRAIN_POINTS);
    }

    #[test]
    fn test_generate_endpoints_pinned() {
        let mut rng = Pcg32::seed_from_u64(42);
        let cfg = config(1920.0, 1080.0);
        let terrain = Terrain::generate(700.0, 650.0, 20, &cfg, &mut rng).unwrap();
        let points = terrain.points();
        assert_eq!(points[0], Vec2::new(0.0, 700.0));
        assert_eq!(*points.last().unwrap(), Vec2::new(1920.0, 650.0));
    }

    #[test]
    fn test_generate_spacing_and_height_band() {
        let mut rng = Pcg32::seed_from_u64(3);
        let cfg = config(1000.0, 500.0);
        let terrain = Terrain::generate(400.0, 400.0, 7, &cfg, &mut rng).unwrap();
        // floor(1000 / 7) = 142
        for (i, p) in terrain.points()[1..terrain.len() - 1].iter().enumerate() {
            assert_eq!(p.x, (i + 1) as f32 * 142.0);
            // Lower 3/5 of the screen: y in (500 - 300, 500]
            assert!(p.y > 200.0 && p.y <= 500.0, "y out of band: {}", p.y);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let cfg = WorldConfig::default();
        let generate = |seed| {
            Terrain::generate(800.0, 800.0, 12, &cfg, &mut Pcg32::seed_from_u64(seed)).unwrap()
        };
        let a = generate(99);
        let b = generate(99);
        let c = generate(100);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_resize_between_generations() {
        let mut rng = Pcg32::seed_from_u64(5);
        let small = config(1000.0, 600.0);
        let first = Terrain::generate(300.0, 300.0, 10, &small, &mut rng).unwrap();
        let before = first.clone();

        let large = small.resized(2000.0, 600.0).unwrap();
        let second = Terrain::generate(300.0, 300.0, 10, &large, &mut rng).unwrap();

        assert_eq!(first.points()[1].x, 100.0);
        assert_eq!(second.points()[1].x, 200.0);
        assert_eq!(first.points().last().unwrap().x, 1000.0);
        assert_eq!(second.points().last().unwrap().x, 2000.0);
        // Earlier terrain is untouched
        assert_eq!(first, before);
    }

    #[test]
    fn test_split_screen_generation_uses_half_width() {
        let cfg = WorldConfig {
            split_screen: true,
            ..Default::default()
        };
        let terrain = Terrain::generate(500.0, 500.0, 8, &cfg, &mut Pcg32::seed_from_u64(1))
            .unwrap();
        assert_eq!(terrain.points().last().unwrap().x, 960.0);
        assert_eq!(terrain.points()[1].x, 120.0);
    }

    #[test]
    fn test_generate_rejects_non_finite_heights() {
        let cfg = WorldConfig::default();
        let mut rng = Pcg32::seed_from_u64(11);
        assert!(matches!(
            Terrain::generate(f32::NAN, 500.0, 6, &cfg, &mut rng),
            Err(TerrainError::NonFiniteHeight { .. })
        ));
        assert!(matches!(
            Terrain::generate(500.0, f32::INFINITY, 6, &cfg, &mut rng),
            Err(TerrainError::NonFiniteHeight { .. })
        ));
    }

    #[test]
    fn test_generate_rejects_unvalidated_config() {
        let mut rng = Pcg32::seed_from_u64(11);
        let zero_width = WorldConfig {
            width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            Terrain::generate(500.0, 500.0, 6, &zero_width, &mut rng),
            Err(TerrainError::InvalidPlayfield(ConfigError::InvalidWidth {
                width: 0.0
            }))
        );
        let nan_height = WorldConfig {
            height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            Terrain::generate(500.0, 500.0, 6, &nan_height, &mut rng),
            Err(TerrainError::InvalidPlayfield(ConfigError::InvalidHeight { .. }))
        ));
    }

    #[test]
    fn test_from_points_validation() {
        assert_eq!(
            Terrain::from_points(vec![Vec2::ZERO]),
            Err(TerrainError::TooFewPoints { actual: 1, min: 2 })
        );
        assert_eq!(
            Terrain::from_points(vec![Vec2::ZERO, Vec2::new(f32::NAN, 0.0)]),
            Err(TerrainError::NonFinitePoint { index: 1 })
        );
        assert!(matches!(
            Terrain::from_points(vec![Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(5.0, 1.0)]),
            Err(TerrainError::NonIncreasingX { index: 2, .. })
        ));
        assert!(Terrain::from_points(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn test_set_points_rejects_bad_geometry() {
        let mut terrain =
            Terrain::from_points(vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)])
                .unwrap();
        let original = terrain.clone();
        assert!(terrain.set_points(vec![Vec2::new(3.0, 0.0), Vec2::ZERO]).is_err());
        assert_eq!(terrain, original);
        terrain
            .set_points(vec![Vec2::ZERO, Vec2::new(10.0, 5.0)])
            .unwrap();
        assert_eq!(terrain.len(), 2);
    }

    #[test]
    fn test_segments_left_to_right() {
        let terrain =
            Terrain::from_points(vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)])
                .unwrap();
        let segments: Vec<Segment> = terrain.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[1].p1, Vec2::new(10.0, 0.0));
        assert_eq!(segments[1].p2, Vec2::new(20.0, 5.0));
        assert_eq!(terrain.segment(1), Some(segments[1]));
        assert_eq!(terrain.segment(2), None);
    }

    proptest! {
        #[test]
        fn prop_generated_terrain_shape(
            seed in any::<u64>(),
            n in 0usize..400,
            width in 50.0f32..4000.0,
            height in 50.0f32..3000.0,
        ) {
            let cfg = config(width, height);
            let mut rng = Pcg32::seed_from_u64(seed);
            let terrain = Terrain::generate(height / 2.0, height / 3.0, n, &cfg, &mut rng).unwrap();
            let points = terrain.points();

            prop_assert_eq!(points.len(), n.max(MIN_TERRAIN_POINTS));
            prop_assert_eq!(points[0].x, 0.0);
            prop_assert_eq!(points[points.len() - 1].x, width);
            for w in points.windows(2) {
                prop_assert!(w[1].x > w[0].x);
            }
        }
    }
}
