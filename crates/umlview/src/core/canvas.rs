//! Character-cell drawing surface
//!
//! [`AsciiCanvas`] implements [`DrawSurface`] over a fixed grid of cells.
//! Incoming coordinates are pixels; each cell covers `cell_width x
//! cell_height` pixels of the transformed space. Text is never scaled, so at
//! zoom levels below 1.0 labels may overrun their boxes.

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::box_drawing::{BoxChars, GlyphSet, DOWN, LEFT, RIGHT, UP};
use super::{DrawSurface, FontStyle, MonospaceMetrics, Point, Rect, Rgba, Transform};

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub italic: bool,
    arms: u8,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bg: None,
        italic: false,
        arms: 0,
    };
}

/// Fixed-size character canvas
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
    metrics: MonospaceMetrics,
    transform: Transform,
    chars: BoxChars,
    /// Color assumed under cells that were never filled
    pub background: Rgba,
    /// Color used for drawn strings
    pub text_color: Rgba,
}

impl AsciiCanvas {
    /// Create a canvas of `width x height` cells
    pub fn new(width: usize, height: usize, metrics: MonospaceMetrics) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
            metrics,
            transform: Transform::IDENTITY,
            chars: BoxChars::default(),
            background: Rgba::from_hex(0xEEEEEE),
            text_color: Rgba::BLACK,
        }
    }

    /// Create a canvas large enough for a pixel viewport
    pub fn from_pixels(width: u32, height: u32, metrics: MonospaceMetrics) -> Self {
        let cols = (width as i32 + metrics.cell_width - 1) / metrics.cell_width;
        let rows = (height as i32 + metrics.cell_height - 1) / metrics.cell_height;
        Self::new(cols.max(1) as usize, rows.max(1) as usize, metrics)
    }

    /// Switch line glyphs between Unicode and pure ASCII
    pub fn with_glyphs(mut self, set: GlyphSet) -> Self {
        self.chars = BoxChars::new(set);
        self
    }

    pub fn metrics(&self) -> MonospaceMetrics {
        self.metrics
    }

    /// Blank every cell and reset the transform
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.transform = Transform::IDENTITY;
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.width && row < self.height {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Get the character at the specified cell
    pub fn get_char(&self, col: usize, row: usize) -> char {
        self.cell(col, row).map(|c| c.ch).unwrap_or(' ')
    }

    /// Iterate over rows of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    fn cell_mut(&mut self, col: i64, row: i64) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        let idx = row as usize * self.width + col as usize;
        self.cells.get_mut(idx)
    }

    /// Cells covering the half-open pixel span `[from, to)`
    fn span(from: f64, to: f64, size: i32) -> Option<(i64, i64)> {
        if to <= from {
            return None;
        }
        let size = size as f64;
        let start = (from / size).floor() as i64;
        let end = (to / size).ceil() as i64 - 1;
        Some((start, end.max(start)))
    }

    fn to_cell(&self, x: i32, y: i32) -> (i64, i64) {
        let (sx, sy) = self.transform.to_screen(x as f64, y as f64);
        (
            (sx / self.metrics.cell_width as f64).floor() as i64,
            (sy / self.metrics.cell_height as f64).floor() as i64,
        )
    }

    fn add_arms(&mut self, col: i64, row: i64, arms: u8, color: Rgba) {
        let chars = self.chars;
        if let Some(cell) = self.cell_mut(col, row) {
            // Text wins over lines drawn later
            if cell.arms == 0 && cell.ch != ' ' {
                return;
            }
            cell.arms |= arms;
            cell.ch = chars.glyph(cell.arms);
            cell.fg = Some(color);
            cell.italic = false;
        }
    }

    fn draw_horizontal(&mut self, row: i64, c0: i64, c1: i64, color: Rgba) {
        let (lo, hi) = (c0.min(c1), c0.max(c1));
        if lo == hi {
            self.add_arms(lo, row, LEFT | RIGHT, color);
            return;
        }
        for col in lo..=hi {
            let mut arms = 0;
            if col > lo {
                arms |= LEFT;
            }
            if col < hi {
                arms |= RIGHT;
            }
            self.add_arms(col, row, arms, color);
        }
    }

    fn draw_vertical(&mut self, col: i64, r0: i64, r1: i64, color: Rgba) {
        let (lo, hi) = (r0.min(r1), r0.max(r1));
        if lo == hi {
            self.add_arms(col, lo, UP | DOWN, color);
            return;
        }
        for row in lo..=hi {
            let mut arms = 0;
            if row > lo {
                arms |= UP;
            }
            if row < hi {
                arms |= DOWN;
            }
            self.add_arms(col, row, arms, color);
        }
    }
}

impl DrawSurface for AsciiCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (x0, y0, x1, y1) = self.transform.transform_rect(rect);
        let (Some((c0, c1)), Some((r0, r1))) = (
            Self::span(x0, x1, self.metrics.cell_width),
            Self::span(y0, y1, self.metrics.cell_height),
        ) else {
            return;
        };
        let background = self.background;
        let text_color = self.text_color;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let Some(cell) = self.cell_mut(col, row) else {
                    continue;
                };
                if color.is_opaque() {
                    *cell = Cell {
                        bg: Some(color),
                        ..Cell::BLANK
                    };
                } else {
                    cell.bg = Some(color.over(cell.bg.unwrap_or(background)));
                    if cell.ch != ' ' {
                        cell.fg = Some(color.over(cell.fg.unwrap_or(text_color)));
                    }
                }
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        let (c0, r0) = self.to_cell(from.x, from.y);
        let (c1, r1) = self.to_cell(to.x, to.y);
        if r0 == r1 {
            self.draw_horizontal(r0, c0, c1, color);
        } else if c0 == c1 {
            self.draw_vertical(c0, r0, r1, color);
        } else {
            // Diagonals become an L: across on the start row, then down
            self.draw_horizontal(r0, c0, c1, color);
            self.draw_vertical(c1, r0, r1, color);
        }
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, style: FontStyle) {
        if text.is_empty() {
            return;
        }
        let (sx, sy) = self.transform.to_screen(x as f64, y as f64);
        let mut col = (sx / self.metrics.cell_width as f64).floor() as i64;
        let row = (sy / self.metrics.cell_height as f64).ceil() as i64 - 1;
        let text_color = self.text_color;
        for ch in text.chars() {
            let columns = UnicodeWidthChar::width(ch).unwrap_or(1).max(1) as i64;
            if let Some(cell) = self.cell_mut(col, row) {
                cell.ch = ch;
                cell.fg = Some(text_color);
                cell.italic = style == FontStyle::Italic;
                cell.arms = 0;
            }
            for pad in 1..columns {
                if let Some(cell) = self.cell_mut(col + pad, row) {
                    cell.ch = '\0';
                    cell.arms = 0;
                }
            }
            col += columns;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn scale(&mut self, s: f64) {
        self.transform.scale(s);
    }

    fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
    }

    fn size(&self) -> (i32, i32) {
        (
            self.width as i32 * self.metrics.cell_width,
            self.height as i32 * self.metrics.cell_height,
        )
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<String> = self
            .rows()
            .map(|row| {
                let s: String = row.iter().map(|c| c.ch).filter(|c| *c != '\0').collect();
                s.trim_end().to_string()
            })
            .collect();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        write!(f, "{}", rows.join("\n"))
    }
}
