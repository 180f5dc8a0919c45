//! Data-driven game balance
//!
//! Every balance constant the session consumes lives in one record, so a
//! deployment can override pace and board shape without touching code.
//! Omitted fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;

/// Balance knobs injected into the session at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between steps at score zero
    pub start_interval: f32,
    /// Lower bound on the step interval
    pub interval_floor: f32,
    /// Interval reduction per milestone
    pub interval_decrement: f32,
    /// Score granted per food consumed
    pub food_reward: u32,
    /// Score multiple that triggers a speed-up
    pub score_milestone: u32,
    /// Segments in a freshly reset snake
    pub start_length: usize,
    /// Playfield half-extent on x
    pub grid_half_width: i32,
    /// Playfield half-extent on y
    pub grid_half_height: i32,
    /// Fold through walls instead of colliding with them
    pub wrap_through_walls: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_interval: consts::START_INTERVAL,
            interval_floor: consts::INTERVAL_FLOOR,
            interval_decrement: consts::INTERVAL_DECREMENT,
            food_reward: consts::FOOD_REWARD,
            score_milestone: consts::SCORE_MILESTONE,
            start_length: consts::START_LENGTH,
            grid_half_width: consts::GRID_HALF_WIDTH,
            grid_half_height: consts::GRID_HALF_HEIGHT,
            wrap_through_walls: true,
        }
    }
}

impl Tuning {
    /// Load tuning from JSON, falling back to defaults for omitted fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning: {tuning:?}");
        Ok(tuning)
    }
}
