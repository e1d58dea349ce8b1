//! Text metrics for monospace cell grids
//!
//! Terminal front ends measure text in display columns. [`MonospaceMetrics`]
//! turns columns into pixels so the pixel-based layout constants keep their
//! proportions on a character grid.

use unicode_width::UnicodeWidthStr;

use super::TextMetrics;

/// Pixel metrics for a fixed-size character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl MonospaceMetrics {
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Display columns occupied by `text`
    pub fn columns(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn width(&self, text: &str) -> i32 {
        Self::columns(text) as i32 * self.cell_width
    }

    fn line_height(&self) -> i32 {
        self.cell_height
    }
}
