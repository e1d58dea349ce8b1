//! Abstract drawing surface and text measurement
//!
//! The viewer never talks to a window system directly. It measures text
//! through [`TextMetrics`] and emits primitives against a [`DrawSurface`];
//! front ends supply the concrete implementations.

use super::{FontStyle, Point, Rect, Rgba, Transform};

/// Text measurement capability
///
/// Implementations must be pure: the same string always measures the same
/// within a frame.
pub trait TextMetrics {
    /// Advance width of `text` in pixels
    fn width(&self, text: &str) -> i32;

    /// Height of one line of text in pixels
    fn line_height(&self) -> i32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn width(&self, text: &str) -> i32 {
        (**self).width(text)
    }

    fn line_height(&self) -> i32 {
        (**self).line_height()
    }
}

/// Target for drawing primitives
///
/// Coordinates passed to the drawing calls are in the current transformed
/// space; `translate` and `scale` compose onto the current transform the
/// same way a 2D graphics context does.
pub trait DrawSurface {
    /// Fill `rect` with `color`, blending when the color is translucent
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a straight line between two points
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);

    /// Draw `text` with its baseline at `y`
    fn draw_string(&mut self, text: &str, x: i32, y: i32, style: FontStyle);

    /// Append a translation to the current transform
    fn translate(&mut self, dx: f64, dy: f64);

    /// Append a uniform scale to the current transform
    fn scale(&mut self, s: f64);

    /// Reset to the identity transform
    fn reset_transform(&mut self);

    /// Surface size in untransformed pixels
    fn size(&self) -> (i32, i32);

    /// Outline `rect`
    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.right() - 1, rect.bottom() - 1);
        self.draw_line(Point::new(l, t), Point::new(r, t), color);
        self.draw_line(Point::new(r, t), Point::new(r, b), color);
        self.draw_line(Point::new(r, b), Point::new(l, b), color);
        self.draw_line(Point::new(l, b), Point::new(l, t), color);
    }
}

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        style: FontStyle,
    },
    Translate {
        dx: f64,
        dy: f64,
    },
    Scale {
        s: f64,
    },
    ResetTransform,
}

/// Headless surface that records every primitive it receives
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    transform: Transform,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            transform: Transform::IDENTITY,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current transform after all recorded translate/scale calls
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Drop recorded commands and reset the transform
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform = Transform::IDENTITY;
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every filled rectangle, in order
    pub fn fills(&self) -> Vec<(Rect, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Find the first draw of `text`
    pub fn find_text(&self, needle: &str) -> Option<(i32, i32, FontStyle)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, x, y, style } if text == needle => Some((*x, *y, *style)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, style: FontStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn scale(&mut self, s: f64) {
        self.transform.scale(s);
        self.commands.push(DrawCommand::Scale { s });
    }

    fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
        self.commands.push(DrawCommand::ResetTransform);
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }
}
