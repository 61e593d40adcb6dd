//! Movement Engine: a bounded random walk, one tick at a time.

use super::{Position, World};

/// Direction of travel for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the bottom border.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the right border.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// What one tick of movement changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walk {
    /// Cells the actor left, in order. These must be erased on screen.
    pub trail: Vec<Position>,
    /// Where the actor ended up.
    pub end: Position,
    /// Markers eaten along the way, in order.
    pub eaten: Vec<Position>,
}

impl Walk {
    /// Unit steps actually applied.
    pub fn steps(&self) -> usize {
        self.trail.len()
    }
}

impl World {
    /// Move the actor up to `steps` cells in `direction`.
    ///
    /// The walk halts at the first step that would leave the interior; it
    /// never wraps or bounces. Each applied step eats a marker on the
    /// destination cell and adds one to the distance.
    pub fn walk(&mut self, direction: Direction, steps: u8) -> Walk {
        let mut walk = Walk {
            end: self.actor,
            ..Walk::default()
        };

        for _ in 0..steps {
            let Some(next) = self.neighbor(direction) else {
                break;
            };

            if self.markers.remove(next) {
                self.counters.eaten += 1;
                walk.eaten.push(next);
            }

            walk.trail.push(self.actor);
            self.actor = next;
            self.counters.distance += 1;
        }

        walk.end = self.actor;
        walk
    }

    /// The adjacent cell in `direction`, if it lies inside the interior.
    fn neighbor(&self, direction: Direction) -> Option<Position> {
        let Position { x, y } = self.actor;
        let next = match direction {
            Direction::Up => Position::new(x, y.checked_sub(1)?),
            Direction::Down => Position::new(x, y.checked_add(1)?),
            Direction::Left => Position::new(x.checked_sub(1)?, y),
            Direction::Right => Position::new(x.checked_add(1)?, y),
        };
        self.bounds.contains(next.x, next.y).then_some(next)
    }
}
