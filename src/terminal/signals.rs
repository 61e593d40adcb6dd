//! Signal Watcher: Dedicated thread turning termination signals into messages.
//!
//! The main loop never blocks on this. It polls the receiver once per tick
//! and leaves the loop when an [`Interrupt`] arrives, which lets the
//! session guard restore the cursor.

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::io;
use std::thread::JoinHandle;

/// A termination request delivered by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupt {
    /// Raw signal number (e.g. 2 for SIGINT).
    pub signal: i32,
}

impl Interrupt {
    /// Conventional shell exit status for this signal.
    pub const fn exit_code(self) -> i32 {
        128 + self.signal
    }
}

/// Watches SIGINT and SIGTERM on a background thread.
pub struct SignalWatcher {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    /// Handle to the watcher thread.
    thread: Option<JoinHandle<()>>,
    /// Receiver for interrupts.
    rx: Receiver<Interrupt>,
}

impl SignalWatcher {
    /// Register the signal handlers and spawn the watcher thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the handlers cannot be registered or the thread
    /// cannot be spawned.
    #[cfg(unix)]
    pub fn spawn() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let handle = signals.handle();

        // One pending interrupt is enough; extra signals are dropped
        let (tx, rx) = bounded(1);

        let thread = std::thread::Builder::new()
            .name("muncher-signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    log::info!("termination signal {signal} received");
                    let _ = tx.try_send(Interrupt { signal });
                }
            })?;

        Ok(Self {
            handle,
            thread: Some(thread),
            rx,
        })
    }

    /// Without unix signals the watcher never fires; the OS default applies.
    ///
    /// # Errors
    ///
    /// Never fails on this platform.
    #[cfg(not(unix))]
    pub fn spawn() -> io::Result<Self> {
        let (_tx, rx) = bounded(1);
        Ok(Self { thread: None, rx })
    }

    /// Non-blocking check for a pending interrupt.
    pub fn poll(&self) -> Option<Interrupt> {
        match self.rx.try_recv() {
            Ok(interrupt) => Some(interrupt),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for SignalWatcher {
    fn drop(&mut self) {
        #[cfg(unix)]
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
