//! Impact events and crater policies
//!
//! Terrain deformation is pluggable. The default policy only logs the
//! impact; hosts that want craters supply their own `CraterPolicy` and
//! reshape the terrain through `Terrain::set_points`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::terrain::{Segment, Terrain};

/// A shell hit the terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    /// Shell centre at the moment of impact
    pub shell_pos: Vec2,
    pub shell_size: f32,
    /// Segment that was hit
    pub segment: Segment,
}

/// Reaction to a confirmed impact
pub trait CraterPolicy {
    fn on_impact(&mut self, terrain: &mut Terrain, event: &ImpactEvent);
}

/// Logs impacts, leaves the terrain untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrater;

impl CraterPolicy for LogCrater {
    fn on_impact(&mut self, _terrain: &mut Terrain, event: &ImpactEvent) {
        log::info!(
            "Crater at ({:.1}, {:.1}) on segment {} [({:.1}, {:.1}) - ({:.1}, {:.1})]",
            event.shell_pos.x,
            event.shell_pos.y,
            event.segment.index,
            event.segment.p1.x,
            event.segment.p1.y,
            event.segment.p2.x,
            event.segment.p2.y,
        );
    }
}

/// Collects impacts for the host to consume later
#[derive(Debug, Clone, Default)]
pub struct RecordCrater {
    pub events: Vec<ImpactEvent>,
}

impl RecordCrater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<ImpactEvent> {
        std::mem::take(&mut self.events)
    }
}

impl CraterPolicy for RecordCrater {
    fn on_impact(&mut self, _terrain: &mut Terrain, event: &ImpactEvent) {
        self.events.push(event.clone());
    }
}
