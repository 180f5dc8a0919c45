//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, gated by the session timer
//! - No RNG (food placement belongs to an external collaborator)
//! - No rendering or platform dependencies
//!
//! Replaying the same sequence of `tick`/`set_desired_direction`/`notify_*`
//! calls reproduces the same body positions, score, and events exactly.

pub mod collision;
pub mod grid;
pub mod growth;
pub mod movement;
pub mod session;
pub mod speed;
pub mod state;

pub use collision::{CollisionOutcome, check_self_collision};
pub use grid::Grid;
pub use growth::Growth;
pub use movement::step_body;
pub use session::GameSession;
pub use speed::SpeedPolicy;
pub use state::{ContactEvent, Direction, GameEvent, GamePhase, SnakeBody};
