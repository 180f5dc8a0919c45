//! One coordinated body shift per simulation step
//!
//! The tricky part of the snake core: the shift must read each source
//! position *before* this step overwrites it. Walking from the tail toward
//! the head guarantees that - every `positions[i - 1]` read still holds its
//! pre-step value. A head-first in-place traversal would copy the new head
//! down the whole body instead.

use glam::IVec2;

use super::grid::Grid;
use super::state::{Direction, SnakeBody};

/// Advance the body one step in `direction`.
///
/// The head moves by the direction's unit vector (folded through the grid
/// when wrap is enabled; left out of bounds otherwise, for the caller's
/// wall check). Each remaining segment takes its predecessor's pre-step
/// position. Returns the cell vacated by the tail - the candidate location
/// for a newly grown segment.
pub fn step_body(body: &mut SnakeBody, direction: Direction, grid: &Grid) -> IVec2 {
    let tail_before_shift = body.tail();

    let positions = &mut body.positions;
    for i in (1..positions.len()).rev() {
        positions[i] = positions[i - 1];
    }

    let new_head = positions[0] + direction.delta();
    positions[0] = if grid.wrap_enabled {
        grid.wrap(new_head)
    } else {
        new_head
    };

    tail_before_shift
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10, true)
    }

    #[test]
    fn test_straight_step_shifts_whole_body() {
        let mut body = SnakeBody::stacked(IVec2::ZERO, Direction::Up, 3);

        let tail = step_body(&mut body, Direction::Up, &grid());

        assert_eq!(body.positions(), &[
            IVec2::new(0, 1),
            IVec2::new(0, 0),
            IVec2::new(0, -1),
        ]);
        assert_eq!(tail, IVec2::new(0, -2));
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_turn_uses_pre_shift_snapshot() {
        // After a turn the neck must land on the head's old cell, not on the
        // head's new cell - the regression a naive head-first copy causes.
        let mut body = SnakeBody::stacked(IVec2::ZERO, Direction::Up, 3);
        step_body(&mut body, Direction::Up, &grid());

        step_body(&mut body, Direction::Right, &grid());

        assert_eq!(body.positions(), &[
            IVec2::new(1, 1),
            IVec2::new(0, 1),
            IVec2::new(0, 0),
        ]);
    }

    #[test]
    fn test_step_wraps_head_when_enabled() {
        let mut body = SnakeBody::stacked(IVec2::new(10, 0), Direction::Right, 2);

        step_body(&mut body, Direction::Right, &grid());

        assert_eq!(body.head(), IVec2::new(-10, 0));
        assert_eq!(body.positions()[1], IVec2::new(10, 0));
    }

    #[test]
    fn test_step_leaves_head_out_of_bounds_when_wrap_disabled() {
        let solid = Grid::new(10, 10, false);
        let mut body = SnakeBody::stacked(IVec2::new(10, 0), Direction::Right, 2);

        step_body(&mut body, Direction::Right, &solid);

        assert_eq!(body.head(), IVec2::new(11, 0));
        assert!(!solid.contains(body.head()));
    }

    #[test]
    fn test_single_segment_body() {
        let mut body = SnakeBody::stacked(IVec2::ZERO, Direction::Up, 1);

        let tail = step_body(&mut body, Direction::Left, &grid());

        // Head is also the tail: the vacated cell is where it stood
        assert_eq!(tail, IVec2::ZERO);
        assert_eq!(body.positions(), &[IVec2::new(-1, 0)]);
    }
}
