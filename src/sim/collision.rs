//! Self-collision and wall-violation checks
//!
//! Both checks are pure inspections of already-moved state. Self-collision
//! runs after the body shift and after any growth append; the grown tail
//! segment sits on the cell the old tail just vacated, which the head cannot
//! re-enter in a single step, so growth alone never trips the check.

use glam::IVec2;

use super::grid::Grid;
use super::state::SnakeBody;

/// Result of the post-move self check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Head occupies a free cell
    Clear,
    /// Head landed on another segment
    SelfCollision,
}

/// Check whether the post-move head overlaps any other segment
pub fn check_self_collision(body: &SnakeBody) -> CollisionOutcome {
    let head = body.head();

    if body.positions()[1..].contains(&head) {
        CollisionOutcome::SelfCollision
    } else {
        CollisionOutcome::Clear
    }
}

/// Check whether a head position violates a solid boundary.
///
/// Only meaningful when wrap is disabled; with wrap-through there is no
/// wall to violate.
pub fn wall_violation(grid: &Grid, head: IVec2) -> bool {
    !grid.wrap_enabled && !grid.contains(head)
}
