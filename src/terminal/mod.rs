//! Terminal module: frame output, session lifecycle and interrupt watching.
//!
//! Nothing here inspects whether a write reached the terminal. Drawing is
//! cosmetic, so failures simply leave the effect absent.

mod output;
mod session;
mod signals;

pub use output::OutputBuffer;
pub use session::{terminal_size, TerminalSession};
pub use signals::{Interrupt, SignalWatcher};
