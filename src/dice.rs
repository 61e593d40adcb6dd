//! Dice: the random source behind every wandering decision.
//!
//! The world never touches a PRNG directly. Production code rolls
//! [`RngDice`]; tests script exact outcomes with [`ScriptedDice`].

use crate::world::{Direction, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Unit steps taken per tick.
pub const STEP_RANGE: RangeInclusive<u8> = 1..=3;
/// Markers placed per spawn.
pub const SPAWN_RANGE: RangeInclusive<u8> = 3..=10;

/// Source of every random choice the world makes.
pub trait Dice {
    /// Direction for this tick, uniform over the four.
    fn direction(&mut self) -> Direction;

    /// Number of unit steps, uniform in [`STEP_RANGE`].
    fn steps(&mut self) -> u8;

    /// Number of markers to spawn, uniform in [`SPAWN_RANGE`].
    fn spawn_count(&mut self) -> u8;

    /// A uniform cell in `[0, width) x [0, height)`.
    ///
    /// Callers never ask for an empty area.
    fn cell(&mut self, width: u16, height: u16) -> Position;
}

/// [`Dice`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Deterministic dice for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }

    fn steps(&mut self) -> u8 {
        self.rng.gen_range(STEP_RANGE)
    }

    fn spawn_count(&mut self) -> u8 {
        self.rng.gen_range(SPAWN_RANGE)
    }

    fn cell(&mut self, width: u16, height: u16) -> Position {
        debug_assert!(width > 0 && height > 0);
        Position::new(self.rng.gen_range(0..width), self.rng.gen_range(0..height))
    }
}

/// Deterministic [`Dice`] replaying queued outcomes.
///
/// Each queue is consumed front to back. An exhausted queue falls back to
/// a fixed default (`Right`, 1 step, 3 markers, cell `(0, 0)`), so tests only
/// script what they care about.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    directions: VecDeque<Direction>,
    steps: VecDeque<u8>,
    spawn_counts: VecDeque<u8>,
    cells: VecDeque<Position>,
}

impl ScriptedDice {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue directions.
    #[must_use]
    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions.extend(directions);
        self
    }

    /// Queue step counts.
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = u8>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Queue spawn counts.
    #[must_use]
    pub fn with_spawn_counts(mut self, counts: impl IntoIterator<Item = u8>) -> Self {
        self.spawn_counts.extend(counts);
        self
    }

    /// Queue spawn cells.
    #[must_use]
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.cells.extend(cells);
        self
    }
}

impl Dice for ScriptedDice {
    fn direction(&mut self) -> Direction {
        self.directions.pop_front().unwrap_or(Direction::Right)
    }

    fn steps(&mut self) -> u8 {
        self.steps.pop_front().unwrap_or(1)
    }

    fn spawn_count(&mut self) -> u8 {
        self.spawn_counts.pop_front().unwrap_or(3)
    }

    fn cell(&mut self, _width: u16, _height: u16) -> Position {
        self.cells.pop_front().unwrap_or_default()
    }
}
