//! Scene: turns world changes into draw calls.
//!
//! The scene never redraws the whole screen. It erases the cells a walk
//! vacated, draws the actor where it stopped, draws freshly spawned
//! markers and rewrites the header line.

use crate::layout::{Layout, HEADER_ROW};
use crate::terminal::OutputBuffer;
use crate::world::{Counters, Position, Walk};
use unicode_width::UnicodeWidthChar;

/// Glyphs used to draw the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// Glyph for the wandering actor.
    pub actor: char,
    /// Glyph for a marker.
    pub marker: char,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            actor: '@',
            marker: '*',
        }
    }
}

impl Scene {
    /// Erase the trail of a walk and draw the actor at its end.
    pub fn draw_walk(&self, out: &mut OutputBuffer, layout: &Layout, walk: &Walk) {
        for &cell in &walk.trail {
            let (x, y) = layout.to_screen(cell);
            out.put(x, y, ' ');
        }
        self.draw_actor(out, layout, walk.end);
    }

    /// Draw the actor at `pos`.
    pub fn draw_actor(&self, out: &mut OutputBuffer, layout: &Layout, pos: Position) {
        if layout.interior().is_empty() {
            return;
        }
        let (x, y) = layout.to_screen(pos);
        out.put(x, y, self.actor);
    }

    /// Draw a marker on each of `cells`.
    pub fn draw_markers(
        &self,
        out: &mut OutputBuffer,
        layout: &Layout,
        cells: impl IntoIterator<Item = Position>,
    ) {
        for cell in cells {
            let (x, y) = layout.to_screen(cell);
            out.put(x, y, self.marker);
        }
    }

    /// Rewrite the header row with the current totals.
    pub fn draw_header(&self, out: &mut OutputBuffer, layout: &Layout, counters: Counters) {
        let (width, height) = layout.size();
        if width == 0 || height == 0 {
            return;
        }

        let text = header_text(counters);
        let (clipped, used) = clip_to_width(&text, usize::from(width));
        out.cursor_move(0, HEADER_ROW);
        out.write_str(clipped);
        if used < usize::from(width) {
            out.clear_line();
        }
    }
}

/// Header line contents.
pub fn header_text(counters: Counters) -> String {
    format!(
        "Total Stars Eaten: {}  Total Distance: {}",
        counters.eaten, counters.distance
    )
}

/// Longest prefix of `text` that fits in `max` columns, and its width.
fn clip_to_width(text: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return (&text[..i], used);
        }
        used += w;
    }
    (text, used)
}
