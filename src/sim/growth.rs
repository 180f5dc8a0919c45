//! Deferred growth from food consumption
//!
//! Eating food does not grow the snake immediately - it arms a flag, and
//! the next movement step appends exactly one segment at the cell the tail
//! vacated. The flag is boolean, so multiple food notifications before that
//! step collapse into a single growth.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Pending-growth flag, applied once per armed period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Growth {
    pending: bool,
}

impl Growth {
    /// Arm growth for the next step. Idempotent until applied.
    pub fn note_food(&mut self) {
        self.pending = true;
    }

    /// Consume the flag: returns the new segment's cell if growth was
    /// pending, clearing the flag either way it was set.
    pub fn apply(&mut self, tail_before_shift: IVec2) -> Option<IVec2> {
        if self.pending {
            self.pending = false;
            Some(tail_before_shift)
        } else {
            None
        }
    }

    /// Drop any armed growth (reset path)
    pub fn clear(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
