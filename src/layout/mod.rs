//! Layout module: Screen regions recomputed only on terminal resize.
//!
//! There is exactly one place that knows where the header, the border and
//! the interior live; everything else asks [`Layout`].

mod frame;
mod rect;

pub use frame::{BorderPainter, Layout, HEADER_ROW};
pub use rect::Rect;
