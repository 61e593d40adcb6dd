//! World State: everything that changes from tick to tick.
//!
//! One explicit struct owned by the main loop. Nothing here draws; the
//! movement and spawn operations return what changed so the scene can
//! redraw exactly those cells.

mod movement;
mod spawner;

pub use movement::{Direction, Walk};
pub use spawner::SpawnClock;

use crate::layout::Rect;
use std::collections::HashSet;

/// A cell in interior coordinates, `(0, 0)` being the top-left interior cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Markers currently on screen. Set semantics: one marker per cell.
#[derive(Clone, Debug, Default)]
pub struct MarkerSet {
    cells: HashSet<Position>,
}

impl MarkerSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker. Returns `false` if one was already there.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    /// Remove a marker. Returns `true` if one was there.
    pub fn remove(&mut self, pos: Position) -> bool {
        self.cells.remove(&pos)
    }

    /// Whether a marker occupies `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no markers.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over marker cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Drop every marker not inside `bounds`.
    pub fn retain_within(&mut self, bounds: Rect) -> usize {
        let before = self.cells.len();
        self.cells.retain(|p| bounds.contains(p.x, p.y));
        before - self.cells.len()
    }
}

/// Process-lifetime totals. Only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Unit steps actually taken.
    pub distance: u64,
    /// Markers eaten.
    pub eaten: u64,
}

/// Actor, markers, counters and the interior they live in.
#[derive(Clone, Debug)]
pub struct World {
    actor: Position,
    markers: MarkerSet,
    counters: Counters,
    bounds: Rect,
}

impl World {
    /// A world with an actor centered in `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            actor: center_of(bounds),
            markers: MarkerSet::new(),
            counters: Counters::default(),
            bounds,
        }
    }

    /// Current actor position.
    pub const fn actor(&self) -> Position {
        self.actor
    }

    /// Markers on screen.
    pub const fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Mutable access to the markers.
    pub fn markers_mut(&mut self) -> &mut MarkerSet {
        &mut self.markers
    }

    /// Distance and eaten totals.
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// The interior in its own coordinates.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Place the actor. Positions outside the interior are ignored.
    pub fn place_actor(&mut self, pos: Position) {
        if self.bounds.contains(pos.x, pos.y) {
            self.actor = pos;
        }
    }

    /// Adopt a new interior after a terminal resize.
    ///
    /// The actor returns to the center. Markers outside the new interior
    /// are dropped since the screen they were drawn on is gone, as is one
    /// sitting on the new center. Counters are kept.
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.actor = center_of(bounds);
        self.markers.remove(self.actor);
        let dropped = self.markers.retain_within(bounds);
        if dropped > 0 {
            log::debug!("resize dropped {dropped} markers outside {bounds:?}");
        }
    }
}

const fn center_of(bounds: Rect) -> Position {
    Position::new(bounds.width / 2, bounds.height / 2)
}
