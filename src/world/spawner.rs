//! Marker Spawner: drops a handful of markers on a fixed interval.

use super::{Position, World};
use crate::dice::Dice;
use std::time::{Duration, Instant};

/// Decides when the next spawn is due.
///
/// Polled once per tick. It never blocks; the loop asks and moves on.
#[derive(Debug, Clone, Copy)]
pub struct SpawnClock {
    interval: Duration,
    last: Instant,
}

impl SpawnClock {
    /// Start the clock. The first spawn is due one `interval` after `now`.
    pub const fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Whether at least one interval has passed since the last spawn.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    /// Mark a spawn as having happened at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Check and reset in one go. Returns `true` if a spawn is due.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.reset(now);
            true
        } else {
            false
        }
    }
}

impl World {
    /// Scatter a random number of markers over the interior.
    ///
    /// Returns the cells that gained a marker. Rolling an already marked
    /// cell, or the actor's own cell, places nothing.
    pub fn spawn(&mut self, dice: &mut impl Dice) -> Vec<Position> {
        let bounds = self.bounds;
        if bounds.is_empty() {
            return Vec::new();
        }

        let count = dice.spawn_count();
        let mut placed = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let cell = dice.cell(bounds.width, bounds.height);
            if !bounds.contains(cell.x, cell.y) || cell == self.actor {
                continue;
            }
            if self.markers.insert(cell) {
                placed.push(cell);
            }
        }

        log::debug!("spawned {}/{count} markers, {} on screen", placed.len(), self.markers.len());
        placed
    }
}
