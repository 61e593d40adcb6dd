//! Frame: screen layout and the bordered box around the interior.
//!
//! ```text
//! row 0        Total Stars Eaten: 3  Total Distance: 41
//! row 1        +------------------+
//! row 2..h-2   |    *     @       |
//! row h-1      +------------------+
//! ```
//!
//! Every offset between interior coordinates and screen cells is derived
//! here. Movement, spawning and drawing all go through [`Layout`].

use super::rect::Rect;
use crate::terminal::OutputBuffer;
use crate::world::Position;

/// Row holding the counters header.
pub const HEADER_ROW: u16 = 0;
/// Row of the top border.
const TOP_BORDER_ROW: u16 = 1;
/// Columns taken by the left and right border.
const BORDER_COLUMNS: u16 = 2;
/// Rows taken by the header, top border and bottom border.
const RESERVED_ROWS: u16 = 3;

/// Screen layout computed from a terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    width: u16,
    height: u16,
    interior: Rect,
}

impl Layout {
    /// Compute the layout for a `width` x `height` terminal.
    ///
    /// Terminals too small for a border yield an empty interior.
    pub const fn compute(width: u16, height: u16) -> Self {
        let interior = Rect::new(
            1,
            TOP_BORDER_ROW + 1,
            width.saturating_sub(BORDER_COLUMNS),
            height.saturating_sub(RESERVED_ROWS),
        );
        Self {
            width,
            height,
            interior,
        }
    }

    /// Terminal size this layout was computed for.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The interior in screen coordinates.
    pub const fn interior(&self) -> Rect {
        self.interior
    }

    /// The interior in its own coordinate space (origin at 0,0).
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.interior.width, self.interior.height)
    }

    /// Midpoint of the interior, where the actor starts after a resize.
    pub const fn center(&self) -> Position {
        Position::new(self.interior.width / 2, self.interior.height / 2)
    }

    /// Map an interior position to its screen cell.
    pub const fn to_screen(&self, pos: Position) -> (u16, u16) {
        (self.interior.x + pos.x, self.interior.y + pos.y)
    }
}

/// Draws the border, remembering the last size it painted for.
///
/// Painting with an unchanged size emits nothing, which keeps the box from
/// flickering on every tick.
#[derive(Debug, Default)]
pub struct BorderPainter {
    /// Last painted terminal size.
    cache: Option<(u16, u16)>,
}

impl BorderPainter {
    /// Create a painter that has not drawn anything yet.
    pub const fn new() -> Self {
        Self { cache: None }
    }

    /// Size of the last paint, if any.
    pub const fn cached_size(&self) -> Option<(u16, u16)> {
        self.cache
    }

    /// Whether `layout` differs from what is on screen.
    pub fn needs_paint(&self, layout: &Layout) -> bool {
        self.cache != Some(layout.size())
    }

    /// Clear the screen and draw the border if the size changed.
    ///
    /// Returns `true` if anything was written.
    pub fn paint(&mut self, out: &mut OutputBuffer, layout: &Layout) -> bool {
        if !self.needs_paint(layout) {
            return false;
        }

        let (width, height) = layout.size();
        out.clear_rows(height);

        if !layout.interior().is_empty() {
            let rule = horizontal_rule(width);
            out.cursor_move(0, TOP_BORDER_ROW);
            out.write_str(&rule);

            let interior = layout.interior();
            for row in interior.y..interior.bottom() {
                out.put(0, row, '|');
                out.put(width - 1, row, '|');
            }

            out.cursor_move(0, height - 1);
            out.write_str(&rule);
        }

        log::debug!("border painted for {width}x{height}");
        self.cache = Some((width, height));
        true
    }
}

fn horizontal_rule(width: u16) -> String {
    let inner = usize::from(width.saturating_sub(BORDER_COLUMNS));
    let mut rule = String::with_capacity(inner + 2);
    rule.push('+');
    rule.extend(std::iter::repeat('-').take(inner));
    rule.push('+');
    rule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_reserves_border_and_header() {
        let layout = Layout::compute(80, 24);
        assert_eq!(layout.interior(), Rect::new(1, 2, 78, 21));
        assert_eq!(layout.bounds(), Rect::new(0, 0, 78, 21));
    }

    #[test]
    fn test_interior_touches_borders_exactly() {
        let layout = Layout::compute(12, 13);
        let bounds = layout.bounds();
        // top-left interior cell sits just inside the corner
        assert_eq!(layout.to_screen(Position::new(0, 0)), (1, 2));
        // bottom-right interior cell sits just inside the opposite corner
        let last = Position::new(bounds.width - 1, bounds.height - 1);
        assert_eq!(layout.to_screen(last), (10, 11));
    }

    #[test]
    fn test_center() {
        let layout = Layout::compute(12, 13);
        assert_eq!(layout.center(), Position::new(5, 5));
    }

    #[test]
    fn test_tiny_terminal_has_empty_interior() {
        assert!(Layout::compute(1, 1).interior().is_empty());
        assert!(Layout::compute(2, 10).interior().is_empty());
        assert!(Layout::compute(10, 3).interior().is_empty());
        assert!(!Layout::compute(3, 4).interior().is_empty());
    }

    #[test]
    fn test_paint_is_idempotent_for_same_size() {
        let mut painter = BorderPainter::new();
        let mut out = OutputBuffer::new();
        let layout = Layout::compute(20, 10);

        assert!(painter.paint(&mut out, &layout));
        assert!(!out.is_empty());

        out.clear();
        assert!(!painter.paint(&mut out, &layout));
        assert!(out.is_empty());
    }

    #[test]
    fn test_paint_again_after_resize() {
        let mut painter = BorderPainter::new();
        let mut out = OutputBuffer::new();

        painter.paint(&mut out, &Layout::compute(20, 10));
        out.clear();
        assert!(painter.paint(&mut out, &Layout::compute(21, 10)));
        assert_eq!(painter.cached_size(), Some((21, 10)));
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(horizontal_rule(5), "+---+");
        assert_eq!(horizontal_rule(2), "++");
    }
}
