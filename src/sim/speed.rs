//! Score-driven speed policy
//!
//! The step interval shrinks by a fixed decrement each time the score lands
//! on an exact non-zero multiple of the milestone, clamped to a floor. The
//! check fires per score change, so a score of 55 with a milestone of 50
//! never triggers - only the landing on 50, 100, ... does.

/// Milestone rule mapping score changes to a step interval
#[derive(Debug, Clone, Copy)]
pub struct SpeedPolicy {
    pub milestone: u32,
    pub decrement: f32,
    pub floor: f32,
}

impl SpeedPolicy {
    /// Interval to use after the score changed to `score`.
    ///
    /// Returns `current` unchanged unless the score sits exactly on a
    /// non-zero milestone multiple and the interval is still above the
    /// floor.
    pub fn interval_after(&self, score: u32, current: f32) -> f32 {
        if score == 0 || !score.is_multiple_of(self.milestone) {
            return current;
        }
        if current <= self.floor {
            return current;
        }
        (current - self.decrement).max(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SpeedPolicy {
        SpeedPolicy {
            milestone: 50,
            decrement: 0.02,
            floor: 0.05,
        }
    }

    #[test]
    fn test_milestone_shrinks_interval() {
        let next = policy().interval_after(50, 0.2);
        assert!((next - 0.18).abs() < 1e-6);
    }

    #[test]
    fn test_non_multiple_does_nothing() {
        assert_eq!(policy().interval_after(55, 0.18), 0.18);
        assert_eq!(policy().interval_after(49, 0.2), 0.2);
    }

    #[test]
    fn test_zero_score_does_nothing() {
        assert_eq!(policy().interval_after(0, 0.2), 0.2);
    }

    #[test]
    fn test_clamped_at_floor() {
        // 0.06 - 0.02 would undershoot; the clamp stops at the floor
        let next = policy().interval_after(100, 0.06);
        assert!((next - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_at_floor_stays_put() {
        assert_eq!(policy().interval_after(150, 0.05), 0.05);
    }
}
