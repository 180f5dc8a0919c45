//! Grid Snake entry point
//!
//! Headless demo driver: runs the simulation core against a seeded input
//! stream (random turns, occasional food contacts) and logs what the
//! session reports. Useful for eyeballing determinism - the same seed
//! always produces the same final score, length, and interval.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use grid_snake::sim::{Direction, GameEvent, GameSession};
use grid_snake::tuning::Tuning;

/// Steps to simulate per run
const DEMO_STEPS: u32 = 2_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Grid Snake demo starting with seed {seed}");

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut session = GameSession::new(Tuning::default());
    session.drain_events();

    let mut resets = 0u32;
    let mut growths = 0u32;

    for _ in 0..DEMO_STEPS {
        if rng.random_bool(0.3) {
            session.set_desired_direction(random_direction(&mut rng));
        }

        let dt = session.interval();
        session.tick(dt);

        // Stand-in for the external overlap collaborator
        if rng.random_bool(0.05) {
            session.notify_food_consumed();
        }

        for event in session.drain_events() {
            match event {
                GameEvent::Grew(cell) => {
                    growths += 1;
                    log::debug!("grew a segment at {cell}");
                }
                GameEvent::ScoreChanged(score) => log::debug!("score: {score}"),
                GameEvent::IntervalChanged(interval) => {
                    log::info!("speed up: {interval:.3}s per step")
                }
                GameEvent::Reset => resets += 1,
                GameEvent::Stepped => {}
            }
        }
    }

    log::info!(
        "demo finished: score {}, length {}, interval {:.3}s, {} growths, {} resets",
        session.score(),
        session.positions().len(),
        session.interval(),
        growths,
        resets,
    );
    println!(
        "seed {seed}: score {} | length {} | {} resets",
        session.score(),
        session.positions().len(),
        resets
    );
}

fn random_direction(rng: &mut Pcg32) -> Direction {
    match rng.random_range(0..4) {
        0 => Direction::Up,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Right,
    }
}
