//! `TerminalSession`: RAII guard for cursor visibility.

use super::OutputBuffer;
use crossterm::terminal;
use std::io;
use std::sync::OnceLock;

/// Query the live terminal size as `(columns, rows)`.
///
/// # Errors
///
/// Returns an error if the terminal cannot report its size. Callers treat
/// this as fatal.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    terminal::size()
}

/// Hides the cursor for its lifetime and shows it again on drop.
///
/// Drop runs on normal return, on `?` propagation out of the main loop and
/// after an interrupt delivered through [`super::SignalWatcher`]. A panic
/// hook covers unwinding panics as well.
pub struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    /// Hide the cursor and install the panic hook.
    pub fn start() -> Self {
        install_panic_hook();
        let mut out = OutputBuffer::with_capacity(8);
        out.cursor_hide();
        let _ = out.flush_to(&mut io::stdout());
        log::debug!("terminal session started, cursor hidden");
        Self { restored: false }
    }

    /// Show the cursor again. Idempotent.
    pub fn restore(&mut self) {
        if !self.restored {
            best_effort_cleanup();
            self.restored = true;
            log::debug!("terminal session restored");
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut out = OutputBuffer::with_capacity(8);
    out.cursor_show();
    let _ = out.flush_to(&mut io::stdout());
}
