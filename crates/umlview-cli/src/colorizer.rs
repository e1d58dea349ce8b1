//! Terminal colorization for rendered canvases
//!
//! Converts the per-cell colors of an [`AsciiCanvas`] into ANSI styled runs
//! using crossterm. Adjacent cells with the same style are merged into one run.

use crossterm::style::{Attribute, Color, ContentStyle, StyledContent};
use umlview::core::{AsciiCanvas, Cell, Rgba};

fn to_color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

fn cell_style(cell: &Cell, canvas: &AsciiCanvas) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.background_color = Some(to_color(cell.bg.unwrap_or(canvas.background)));
    if cell.ch != ' ' {
        style.foreground_color = Some(to_color(cell.fg.unwrap_or(canvas.text_color)));
    }
    if cell.italic {
        style.attributes.set(Attribute::Italic);
    }
    style
}

/// Styled runs for every canvas row, limited to `max_cols` columns
pub fn styled_rows(canvas: &AsciiCanvas, max_cols: usize) -> Vec<Vec<StyledContent<String>>> {
    canvas
        .rows()
        .map(|row| {
            let mut runs: Vec<StyledContent<String>> = Vec::new();
            let mut current: Option<(ContentStyle, String)> = None;

            for cell in row.iter().take(max_cols) {
                if cell.ch == '\0' {
                    continue;
                }
                let style = cell_style(cell, canvas);
                match current.as_mut() {
                    Some((s, text)) if *s == style => text.push(cell.ch),
                    _ => {
                        if let Some((s, text)) = current.take() {
                            runs.push(StyledContent::new(s, text));
                        }
                        current = Some((style, cell.ch.to_string()));
                    }
                }
            }
            if let Some((s, text)) = current {
                runs.push(StyledContent::new(s, text));
            }
            runs
        })
        .collect()
}

/// Render the canvas as text with ANSI colors
pub fn colorize_canvas(canvas: &AsciiCanvas) -> String {
    let mut result = String::new();
    for (i, row) in styled_rows(canvas, canvas.width).iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        for run in row {
            result.push_str(&run.to_string());
        }
    }
    result
}
