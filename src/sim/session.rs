//! Game session orchestration
//!
//! Owns all mutable simulation state and advances it one step at a time:
//! latch the buffered direction, shift the body, apply pending growth, check
//! for terminal collisions, and speed up at score milestones. Terminal
//! events (self-collision, wall violation) are ordinary transitions through
//! the transient `Resetting` phase, never errors.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionOutcome, check_self_collision, wall_violation};
use super::grid::Grid;
use super::growth::Growth;
use super::movement::step_body;
use super::speed::SpeedPolicy;
use super::state::{ContactEvent, Direction, GameEvent, GamePhase, SnakeBody};
use crate::tuning::Tuning;

/// The simulation session: one snake, one grid, one timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    tuning: Tuning,
    grid: Grid,
    body: SnakeBody,
    /// Direction applied on the last step
    direction: Direction,
    /// Buffered input, committed at the next step boundary
    desired_direction: Direction,
    /// Seconds accumulated toward the next step
    timer: f32,
    /// Current seconds-per-step; shrinks at score milestones
    interval: f32,
    score: u32,
    growth: Growth,
    phase: GamePhase,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session from injected tuning.
    ///
    /// Degenerate tuning is a programmer error and fails fast here rather
    /// than corrupting the simulation later.
    pub fn new(tuning: Tuning) -> Self {
        assert!(
            tuning.start_interval > 0.0 && tuning.start_interval.is_finite(),
            "start_interval must be positive and finite"
        );
        assert!(
            tuning.interval_floor > 0.0 && tuning.interval_decrement > 0.0,
            "interval floor and decrement must be positive"
        );
        assert!(tuning.score_milestone > 0, "score milestone must be non-zero");
        assert!(tuning.start_length >= 1, "start length must be at least 1");

        let grid = Grid::new(
            tuning.grid_half_width,
            tuning.grid_half_height,
            tuning.wrap_through_walls,
        );

        let mut session = Self {
            tuning,
            grid,
            body: SnakeBody::stacked(IVec2::ZERO, Direction::Up, tuning.start_length),
            direction: Direction::Up,
            desired_direction: Direction::Up,
            timer: 0.0,
            interval: tuning.start_interval,
            score: 0,
            growth: Growth::default(),
            phase: GamePhase::Playing,
            events: Vec::new(),
        };
        session.reset();
        session
    }

    /// Advance the session timer; runs at most one simulation step.
    ///
    /// When the timer reaches the current interval the step executes and the
    /// timer returns to zero - any overshoot is clamped, not carried, so a
    /// long external stall costs simulated time instead of producing a burst
    /// of catch-up steps.
    pub fn tick(&mut self, elapsed: f32) {
        assert!(
            elapsed >= 0.0 && elapsed.is_finite(),
            "elapsed time must be non-negative and finite, got {elapsed}"
        );

        self.timer += elapsed;
        if self.timer < self.interval {
            return;
        }
        self.timer = 0.0;
        self.step();
    }

    /// Buffer a direction for the next step boundary.
    ///
    /// The buffered value is committed only when a step runs, and only if it
    /// is not the exact reverse of the last-committed direction.
    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.desired_direction = direction;
    }

    /// Handle a resolved overlap report from the external collision layer
    pub fn notify_contact(&mut self, contact: ContactEvent) {
        match contact {
            ContactEvent::Food => self.on_food_consumed(),
            ContactEvent::Wall => self.on_wall_contact(),
        }
    }

    /// The head overlapped a food object (at most once per consumption)
    pub fn notify_food_consumed(&mut self) {
        self.notify_contact(ContactEvent::Food);
    }

    /// The head overlapped a boundary wall
    pub fn notify_wall_contact(&mut self) {
        self.notify_contact(ContactEvent::Wall);
    }

    /// Current segment positions, head first
    pub fn positions(&self) -> &[IVec2] {
        self.body.positions()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current seconds-per-step
    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Direction applied on the last step
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take all notifications queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// One simulation step: latch direction, move, grow, check collisions
    fn step(&mut self) {
        if !self.desired_direction.is_opposite(self.direction) {
            self.direction = self.desired_direction;
        }

        let vacated = step_body(&mut self.body, self.direction, &self.grid);

        if wall_violation(&self.grid, self.body.head()) {
            log::info!("wall violation at {}; resetting", self.body.head());
            self.reset();
            return;
        }

        if let Some(cell) = self.growth.apply(vacated) {
            self.body.push_segment(cell);
            self.events.push(GameEvent::Grew(cell));
        }

        if check_self_collision(&self.body) == CollisionOutcome::SelfCollision {
            log::info!("self collision at {}; resetting", self.body.head());
            self.reset();
            return;
        }

        self.events.push(GameEvent::Stepped);
    }

    fn on_food_consumed(&mut self) {
        self.score += self.tuning.food_reward;
        self.growth.note_food();
        self.events.push(GameEvent::ScoreChanged(self.score));

        let next = self.speed_policy().interval_after(self.score, self.interval);
        if next != self.interval {
            log::info!(
                "score {} milestone: interval {:.3}s -> {:.3}s",
                self.score,
                self.interval,
                next
            );
            self.interval = next;
            self.events.push(GameEvent::IntervalChanged(next));
        }
    }

    fn on_wall_contact(&mut self) {
        if self.grid.wrap_enabled {
            log::debug!("wall contact ignored: wrap-through is enabled");
            return;
        }
        self.reset();
    }

    /// Reinitialize body, score, direction, timer, and pending growth.
    ///
    /// The step interval deliberately survives: speed earned before a crash
    /// carries into the next life. Collaborators observe the transition via
    /// `GameEvent::Reset` and must discard their segment handles.
    fn reset(&mut self) {
        self.phase = GamePhase::Resetting;

        self.body = SnakeBody::stacked(IVec2::ZERO, Direction::Up, self.tuning.start_length);
        self.direction = Direction::Up;
        self.desired_direction = Direction::Up;
        self.timer = 0.0;
        self.score = 0;
        self.growth.clear();
        self.events.push(GameEvent::Reset);

        log::info!(
            "session reset: {} segments, interval {:.3}s",
            self.body.len(),
            self.interval
        );
        self.phase = GamePhase::Playing;
    }

    fn speed_policy(&self) -> SpeedPolicy {
        SpeedPolicy {
            milestone: self.tuning.score_milestone,
            decrement: self.tuning.interval_decrement,
            floor: self.tuning.interval_floor,
        }
    }
}
