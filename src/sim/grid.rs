//! Grid bounds and wrap-around arithmetic
//!
//! The playfield is an integer lattice symmetric around the origin:
//! cells span `[-half_width, half_width]` by `[-half_height, half_height]`.
//! A coordinate that leaves the field on one side folds to the opposite
//! bound on that axis - not modular arithmetic, the fold always lands
//! exactly on the boundary cell.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Playfield bounds plus the wrap-through flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Grid {
    /// Half-extent on the x axis
    pub half_width: i32,
    /// Half-extent on the y axis
    pub half_height: i32,
    /// Whether positions fold through walls instead of colliding with them
    pub wrap_enabled: bool,
}

impl Grid {
    pub fn new(half_width: i32, half_height: i32, wrap_enabled: bool) -> Self {
        assert!(
            half_width > 0 && half_height > 0,
            "grid half-extents must be positive, got ({half_width}, {half_height})"
        );
        Self {
            half_width,
            half_height,
            wrap_enabled,
        }
    }

    /// Fold an out-of-bounds position to the opposite boundary, per axis.
    ///
    /// In-bounds coordinates pass through unchanged, so this is idempotent.
    pub fn wrap(&self, pos: IVec2) -> IVec2 {
        let x = if pos.x > self.half_width {
            -self.half_width
        } else if pos.x < -self.half_width {
            self.half_width
        } else {
            pos.x
        };
        let y = if pos.y > self.half_height {
            -self.half_height
        } else if pos.y < -self.half_height {
            self.half_height
        } else {
            pos.y
        };
        IVec2::new(x, y)
    }

    /// Check whether a position lies inside the playfield
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x.abs() <= self.half_width && pos.y.abs() <= self.half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_folds_to_opposite_bound() {
        let grid = Grid::new(10, 10, true);

        assert_eq!(grid.wrap(IVec2::new(11, 3)), IVec2::new(-10, 3));
        assert_eq!(grid.wrap(IVec2::new(-11, 3)), IVec2::new(10, 3));
        assert_eq!(grid.wrap(IVec2::new(4, 11)), IVec2::new(4, -10));
        assert_eq!(grid.wrap(IVec2::new(4, -11)), IVec2::new(4, 10));
    }

    #[test]
    fn test_wrap_leaves_bounds_untouched() {
        let grid = Grid::new(10, 10, true);

        assert_eq!(grid.wrap(IVec2::new(10, -10)), IVec2::new(10, -10));
        assert_eq!(grid.wrap(IVec2::ZERO), IVec2::ZERO);
    }

    #[test]
    fn test_wrap_both_axes_at_once() {
        let grid = Grid::new(5, 7, true);
        assert_eq!(grid.wrap(IVec2::new(6, -8)), IVec2::new(-5, 7));
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(10, 10, false);

        assert!(grid.contains(IVec2::new(10, 10)));
        assert!(grid.contains(IVec2::new(-10, 0)));
        assert!(!grid.contains(IVec2::new(11, 0)));
        assert!(!grid.contains(IVec2::new(0, -11)));
    }

    #[test]
    #[should_panic(expected = "half-extents must be positive")]
    fn test_degenerate_extents_rejected() {
        Grid::new(0, 10, true);
    }

    proptest! {
        #[test]
        fn wrap_lands_in_bounds(x in -11i32..=11, y in -11i32..=11) {
            // One step overshoots a bound by at most one cell; every such
            // position must fold back into the playfield
            let grid = Grid::new(10, 10, true);
            let wrapped = grid.wrap(IVec2::new(x, y));
            prop_assert!(grid.contains(wrapped));
        }

        #[test]
        fn wrap_is_idempotent(x in -11i32..=11, y in -11i32..=11) {
            let grid = Grid::new(10, 10, true);
            let once = grid.wrap(IVec2::new(x, y));
            prop_assert_eq!(grid.wrap(once), once);
        }
    }
}
