//! Core simulation types
//!
//! Everything a collaborator needs to observe the session - directions,
//! the body itself, lifecycle phase, and the one-way notification events -
//! lives here. All types are serializable so a session snapshot can be
//! captured for diagnostics or replay.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit grid vector for this direction
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// The exact reverse of this direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if `other` is the exact reverse of `self`
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Ordered sequence of grid positions, head at index 0
///
/// Invariant: never empty. The session owns the body exclusively; the
/// movement engine mutates it through a borrow each step and retains
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeBody {
    pub(crate) positions: Vec<IVec2>,
}

impl SnakeBody {
    /// Build a body of `length` segments stacked from `origin` along the
    /// reverse of `heading`, head first.
    pub fn stacked(origin: IVec2, heading: Direction, length: usize) -> Self {
        assert!(length >= 1, "snake body needs at least one segment");

        let back = heading.opposite().delta();
        let positions = (0..length as i32).map(|i| origin + back * i).collect();
        Self { positions }
    }

    /// Head position (index 0)
    pub fn head(&self) -> IVec2 {
        self.positions[0]
    }

    /// Position vacated last - the last segment
    pub fn tail(&self) -> IVec2 {
        *self.positions.last().expect("body is never empty")
    }

    /// All segment positions, head first
    pub fn positions(&self) -> &[IVec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a grown segment at the given position
    pub(crate) fn push_segment(&mut self, pos: IVec2) {
        self.positions.push(pos);
    }
}

/// Lifecycle phase of the session
///
/// `Resetting` is transient - the session re-enters `Playing` inside the
/// same call. It exists as a distinct phase so collaborators holding
/// per-segment handles know to discard them and re-acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal tick processing
    Playing,
    /// Terminal event hit; the body is being reinitialized
    Resetting,
}

/// Typed contact report from the external overlap collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactEvent {
    /// Head overlapped a food object
    Food,
    /// Head overlapped a boundary wall
    Wall,
}

/// One-way notification to external collaborators
///
/// Drained via [`super::GameSession::drain_events`]; the core never waits
/// on acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One simulation step completed normally
    Stepped,
    /// A segment was appended at the given cell
    Grew(IVec2),
    /// Score changed to the given value
    ScoreChanged(u32),
    /// Step interval changed to the given value (seconds)
    IntervalChanged(f32),
    /// Body and score were reinitialized; discard all segment handles
    Reset,
}
