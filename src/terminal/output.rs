//! `OutputBuffer`: Single-syscall output buffer for one frame of ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building a frame's escape sequences.
///
/// Every draw operation for a tick is accumulated here, then flushed in a
/// single `write()` so the terminal never shows a half-drawn frame.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string at the current cursor position.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single glyph at the current cursor position.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move cursor to (x, y) position (0-indexed here, 1-indexed on the wire).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        let _ = write!(
            self.data,
            "\x1b[{};{}H",
            u32::from(y) + 1,
            u32::from(x) + 1
        );
    }

    /// Move to (x, y) and write a glyph there.
    #[inline]
    pub fn put(&mut self, x: u16, y: u16, c: char) {
        self.cursor_move(x, y);
        self.write_char(c);
    }

    /// Clear from the cursor to the end of the line (`tput el`).
    #[inline]
    pub fn clear_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Clear the first `height` rows, one line at a time.
    pub fn clear_rows(&mut self, height: u16) {
        for row in 0..height {
            self.cursor_move(0, row);
            self.clear_line();
        }
    }

    /// Hide cursor (`tput civis`).
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor (`tput cnorm`).
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
