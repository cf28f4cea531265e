use std::time::Duration;

use super::types::{Coordinate, DeathReason, Mode, Segment};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub segments: Vec<Segment>,
    pub food: Coordinate,
    pub score: u32,
    pub level: u32,
    pub food_eaten: u32,
    pub delay: Duration,
    pub is_running: bool,
    pub is_paused: bool,
    pub is_dead: bool,
    pub death_reason: Option<DeathReason>,
    pub board_size: i32,
    pub mode: Mode,
    pub steps: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Coordinate> {
        self.segments.first().map(|segment| segment.cell)
    }

    /// Freshly created or reset, nothing has moved yet.
    pub fn is_pristine(&self) -> bool {
        !self.is_running && !self.is_paused && !self.is_dead
    }
}
