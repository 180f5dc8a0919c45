//! Grid Snake - deterministic simulation core for a grid snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid arithmetic, body movement,
//!   collisions, growth, speed policy, session orchestration)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling, food placement, and audio are external
//! collaborators. They drive the session through its public surface
//! ([`sim::GameSession`]) and read back position snapshots and one-way
//! [`sim::GameEvent`] notifications.

pub mod sim;
pub mod tuning;

pub use sim::{ContactEvent, Direction, GameEvent, GamePhase, GameSession};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Seconds between simulation steps at score zero
    pub const START_INTERVAL: f32 = 0.2;
    /// Lower bound on the step interval; the speed policy never goes below
    pub const INTERVAL_FLOOR: f32 = 0.05;
    /// Interval reduction applied at each score milestone
    pub const INTERVAL_DECREMENT: f32 = 0.02;
    /// Score granted per food consumed
    pub const FOOD_REWARD: u32 = 10;
    /// Score multiple that triggers a speed-up
    pub const SCORE_MILESTONE: u32 = 50;

    /// Segments in a freshly reset snake
    pub const START_LENGTH: usize = 3;

    /// Grid half-extents; playable cells span [-half, +half] on each axis
    pub const GRID_HALF_WIDTH: i32 = 10;
    pub const GRID_HALF_HEIGHT: i32 = 10;
}
