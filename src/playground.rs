//! Playground: the frame loop tying layout, world and scene together.
//!
//! Each tick: react to the terminal size, walk the actor, rewrite the
//! header, spawn markers if the clock says so, flush, sleep. The loop only
//! ends on SIGINT/SIGTERM or when the terminal size cannot be read.

use crate::config::PlaygroundConfig;
use crate::dice::{Dice, RngDice};
use crate::layout::{BorderPainter, Layout};
use crate::scene::Scene;
use crate::terminal::{terminal_size, Interrupt, OutputBuffer, SignalWatcher, TerminalSession};
use crate::world::{SpawnClock, World};
use std::io;
use std::time::{Duration, Instant};

/// Owns the world state and produces one frame of output per tick.
///
/// `Playground` never touches the terminal itself. [`Playground::frame`]
/// takes the terminal size and the current time and returns the bytes to
/// write, which keeps every tick reproducible under test.
pub struct Playground<D> {
    /// Random source for direction, steps and spawns.
    dice: D,
    /// Actor, markers and counters.
    world: World,
    /// Layout for the last seen terminal size.
    layout: Layout,
    /// Border and its size cache.
    border: BorderPainter,
    /// Spawn timer.
    clock: SpawnClock,
    /// Glyphs.
    scene: Scene,
    /// Frame output, reused every tick.
    output: OutputBuffer,
    /// Ticks processed.
    frame_count: u64,
}

impl<D: Dice> Playground<D> {
    /// Create a playground whose spawn clock starts at `now`.
    pub fn new(config: &PlaygroundConfig, dice: D, now: Instant) -> Self {
        let layout = Layout::compute(0, 0);
        Self {
            dice,
            world: World::new(layout.bounds()),
            layout,
            border: BorderPainter::new(),
            clock: SpawnClock::new(config.spawn_interval, now),
            scene: config.scene,
            output: OutputBuffer::new(),
            frame_count: 0,
        }
    }

    /// The world state.
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The current layout.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Ticks processed so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one tick for a terminal of `size` at time `now`.
    ///
    /// Returns the frame's output; nothing has been written yet.
    pub fn frame(&mut self, size: (u16, u16), now: Instant) -> &OutputBuffer {
        self.output.clear();

        let layout = Layout::compute(size.0, size.1);
        if self.border.needs_paint(&layout) {
            self.relayout(layout);
        }

        self.step();

        self.scene
            .draw_header(&mut self.output, &self.layout, self.world.counters());

        if self.clock.fire(now) {
            let placed = self.world.spawn(&mut self.dice);
            self.scene
                .draw_markers(&mut self.output, &self.layout, placed);
        }

        self.frame_count += 1;
        &self.output
    }

    /// Adopt a new terminal size: recenter, repaint border and markers.
    fn relayout(&mut self, layout: Layout) {
        let (width, height) = layout.size();
        log::info!("terminal size now {width}x{height}, interior {:?}", layout.interior());

        self.layout = layout;
        self.world.resize(layout.bounds());
        self.border.paint(&mut self.output, &self.layout);
        self.scene
            .draw_markers(&mut self.output, &self.layout, self.world.markers().iter());
    }

    /// One random walk, drawn.
    fn step(&mut self) {
        let direction = self.dice.direction();
        let steps = self.dice.steps();
        let walk = self.world.walk(direction, steps);
        self.scene.draw_walk(&mut self.output, &self.layout, &walk);
    }
}

/// Run the playground on the real terminal until interrupted.
///
/// Returns the interrupt that ended the loop.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the signal watcher
/// cannot be installed, or the terminal size cannot be read. The last one
/// can happen on any tick and ends the run immediately.
pub fn run(config: &PlaygroundConfig) -> io::Result<Interrupt> {
    config.validate()?;

    let dice = config.seed.map_or_else(RngDice::from_entropy, RngDice::seeded);
    let signals = SignalWatcher::spawn()?;
    let _session = TerminalSession::start();
    let mut playground = Playground::new(config, dice, Instant::now());
    let mut stdout = io::stdout();

    log::info!(
        "starting: frame delay {:?}, spawn interval {:?}, seed {:?}",
        config.frame_delay,
        config.spawn_interval,
        config.seed
    );

    loop {
        let frame_start = Instant::now();
        let size = terminal_size()?;

        let output = playground.frame(size, frame_start);
        let _ = output.flush_to(&mut stdout);

        if let Some(interrupt) = signals.poll() {
            park_cursor(&mut stdout, size.1);
            let counters = playground.world().counters();
            log::info!(
                "stopping after {} frames: {} eaten, {} travelled",
                playground.frame_count(),
                counters.eaten,
                counters.distance
            );
            return Ok(interrupt);
        }

        pace(frame_start, config.frame_delay);
    }
}

/// Sleep for whatever remains of the frame.
fn pace(frame_start: Instant, frame_delay: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_delay {
        std::thread::sleep(frame_delay - elapsed);
    }
}

/// Leave the cursor on the last row so the shell prompt lands below the box.
fn park_cursor(stdout: &mut io::Stdout, height: u16) {
    let mut out = OutputBuffer::with_capacity(16);
    out.cursor_move(0, height.saturating_sub(1));
    out.write_str("\r\n");
    let _ = out.flush_to(stdout);
}
