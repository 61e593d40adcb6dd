//! # Muncher
//!
//! A tiny terminal toy: an `@` wanders a bordered box sized to the
//! terminal, eating `*` markers that appear every few seconds, while the
//! header counts stars eaten and distance travelled.
//!
//! ## Core Concepts
//!
//! - **Single-source layout**: every border and interior offset comes from [`Layout`]
//! - **Explicit world state**: actor, markers and counters live in one [`World`]
//! - **Injected randomness**: all rolls go through the [`Dice`] trait
//! - **Single-write frames**: each tick's draw calls are flushed in one write
//!
//! ## Example
//!
//! ```rust
//! use muncher::{Playground, PlaygroundConfig, ScriptedDice};
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let mut playground = Playground::new(&PlaygroundConfig::default(), ScriptedDice::new(), now);
//!
//! // One tick on an 80x24 terminal
//! let frame = playground.frame((80, 24), now);
//! assert!(!frame.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod dice;
pub mod layout;
pub mod playground;
pub mod scene;
pub mod terminal;
pub mod world;

// Re-exports for convenience
pub use config::{ConfigError, PlaygroundConfig};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use layout::{BorderPainter, Layout, Rect};
pub use playground::{run, Playground};
pub use scene::Scene;
pub use terminal::{Interrupt, OutputBuffer};
pub use world::{Counters, Direction, MarkerSet, Position, SpawnClock, Walk, World};
