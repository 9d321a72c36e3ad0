//! Per-frame simulation step
//!
//! The host calls `World::frame` once per display refresh with its
//! timestamp. Each frame applies any pending resize, advances shells,
//! resolves shell/terrain impacts and culls shells that left the playfield.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::first_colliding_segment;
use super::crater::{CraterPolicy, ImpactEvent};
use super::shell::Shell;
use super::terrain::Terrain;
use crate::config::WorldConfig;
use crate::consts::{GRAVITY, MAX_FRAME_DT};
use crate::error::TerrainError;

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Impacts in shell order
    pub impacts: Vec<ImpactEvent>,
    /// Malformed shells left out of collision checks
    pub skipped: usize,
    /// Shells removed for leaving the playfield
    pub culled: usize,
}

/// Resolve shell/terrain collisions for one frame
///
/// Shells that hit terrain are removed from `shells` in place; survivors
/// keep their relative order. Every shell is checked against the terrain as
/// it was at the start of the pass, and the crater policy runs afterwards
/// once per impact, in shell order.
pub fn collide_shells(
    terrain: &mut Terrain,
    shells: &mut Vec<Shell>,
    policy: &mut dyn CraterPolicy,
) -> FrameReport {
    let mut report = FrameReport::default();
    let mut hit = vec![false; shells.len()];

    for (i, shell) in shells.iter().enumerate() {
        if let Err(err) = shell.validate() {
            log::warn!("Skipping shell {i}: {err}");
            report.skipped += 1;
            continue;
        }
        if let Some(segment) = first_colliding_segment(shell, terrain) {
            hit[i] = true;
            report.impacts.push(ImpactEvent {
                shell_pos: shell.pos,
                shell_size: shell.size,
                segment,
            });
        }
    }

    // Mark-and-filter, never splice while scanning
    let mut index = 0;
    shells.retain(|_| {
        let keep = !hit[index];
        index += 1;
        keep
    });

    for event in &report.impacts {
        policy.on_impact(terrain, event);
    }

    report
}

/// Remove shells that left the playfield or can no longer be simulated
pub fn cull_off_world(shells: &mut Vec<Shell>, config: &WorldConfig) -> usize {
    let before = shells.len();
    shells.retain(|shell| shell.validate().is_ok() && !shell.is_off_world(config));
    before - shells.len()
}

/// Measures the time between host refresh callbacks
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    budget: f32,
}

impl FrameClock {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            last_ms: None,
            budget: config.frame_budget_secs(),
        }
    }

    /// Seconds since the previous callback, clamped to `MAX_FRAME_DT`
    ///
    /// The first callback has no predecessor and reports one frame budget.
    /// A non-finite timestamp also reports one frame budget and is not
    /// remembered as the previous callback.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            log::warn!("Non-finite frame timestamp {now_ms}, using frame budget");
            return self.budget.clamp(0.0, MAX_FRAME_DT);
        }
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => self.budget,
        };
        self.last_ms = Some(now_ms);
        if !dt.is_finite() {
            return self.budget.clamp(0.0, MAX_FRAME_DT);
        }
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Everything one round needs, owned by the host loop
#[derive(Debug, Clone)]
pub struct World {
    pub config: WorldConfig,
    pub terrain: Terrain,
    pub shells: Vec<Shell>,
    /// Downward acceleration on shells
    pub gravity: f32,
    /// Frames simulated this round
    pub frame_count: u64,
    clock: FrameClock,
    pending_resize: Option<(f32, f32)>,
    rng: Pcg32,
}

impl World {
    /// Start a round with freshly generated terrain
    pub fn new(
        config: WorldConfig,
        seed: u64,
        start_y: f32,
        end_y: f32,
        num_points: usize,
    ) -> Result<Self, TerrainError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = Terrain::generate(start_y, end_y, num_points, &config, &mut rng)?;
        log::info!("World created with seed {seed}");
        Ok(Self {
            config,
            terrain,
            shells: Vec::new(),
            gravity: GRAVITY,
            frame_count: 0,
            clock: FrameClock::new(&config),
            pending_resize: None,
            rng,
        })
    }

    /// Start a new round on the current playfield
    ///
    /// On error the current round is left as it was.
    pub fn regenerate(
        &mut self,
        start_y: f32,
        end_y: f32,
        num_points: usize,
    ) -> Result<(), TerrainError> {
        self.terrain =
            Terrain::generate(start_y, end_y, num_points, &self.config, &mut self.rng)?;
        self.shells.clear();
        self.frame_count = 0;
        self.clock.reset();
        Ok(())
    }

    pub fn fire(&mut self, shell: Shell) {
        self.shells.push(shell);
    }

    /// Record a display resize; it takes effect at the start of the next frame
    pub fn request_resize(&mut self, width: f32, height: f32) {
        self.pending_resize = Some((width, height));
    }

    pub fn pending_resize(&self) -> Option<(f32, f32)> {
        self.pending_resize
    }

    /// Advance one frame at host timestamp `now_ms`
    pub fn frame(&mut self, now_ms: f64, policy: &mut dyn CraterPolicy) -> FrameReport {
        self.apply_pending_resize();

        let dt = self.clock.delta(now_ms);
        self.step(dt, policy)
    }

    /// Advance by an explicit timestep
    pub fn step(&mut self, dt: f32, policy: &mut dyn CraterPolicy) -> FrameReport {
        self.frame_count += 1;

        for shell in &mut self.shells {
            shell.step(dt, self.gravity);
        }

        let mut report = collide_shells(&mut self.terrain, &mut self.shells, policy);
        report.culled = cull_off_world(&mut self.shells, &self.config);
        if report.culled > 0 {
            log::debug!("Culled {} off-world shells", report.culled);
        }
        report
    }

    fn apply_pending_resize(&mut self) {
        let Some((width, height)) = self.pending_resize.take() else {
            return;
        };
        match self.config.resized(width, height) {
            Ok(config) => {
                log::info!(
                    "Playfield resized: {}x{} -> {}x{}",
                    self.config.width,
                    self.config.height,
                    width,
                    height
                );
                self.config = config;
            }
            Err(err) => log::warn!("Ignoring resize: {err}"),
        }
    }
}
