//! Core type definitions for diagram processing
//!
//! This module contains the fundamental value types used throughout umlview:
//! colors, integer pixel geometry, font styles, the canvas transform, and the
//! UML visibility markers.

use std::fmt;

/// A 32-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);

    /// Opaque color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Returns true if the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Composite `self` over an opaque `below` color
    pub fn over(self, below: Rgba) -> Rgba {
        let alpha = self.a as u32;
        let mix = |top: u8, bottom: u8| -> u8 {
            ((top as u32 * alpha + bottom as u32 * (255 - alpha) + 127) / 255) as u8
        };
        Rgba::rgb(
            mix(self.r, below.r),
            mix(self.g, below.g),
            mix(self.b, below.b),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A point in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center of the rectangle
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Half-open containment test, matching how boxes are filled
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < self.right() as f64
            && y < self.bottom() as f64
    }
}

/// Font style for drawn strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontStyle {
    #[default]
    Plain,
    /// Used for abstract class names
    Italic,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Plain => write!(f, "plain"),
            FontStyle::Italic => write!(f, "italic"),
        }
    }
}

/// Affine canvas transform: `screen = offset + zoom * world`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        offset_x: 0.0,
        offset_y: 0.0,
        zoom: 1.0,
    };

    /// Append a translation expressed in the current (scaled) coordinate space
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx * self.zoom;
        self.offset_y += dy * self.zoom;
    }

    /// Append a uniform scale
    pub fn scale(&mut self, s: f64) {
        self.zoom *= s;
    }

    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.zoom + self.offset_x, y * self.zoom + self.offset_y)
    }

    pub fn to_world(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.zoom, (y - self.offset_y) / self.zoom)
    }

    /// Map a world rectangle to screen space
    pub fn transform_rect(&self, rect: Rect) -> (f64, f64, f64, f64) {
        let (x0, y0) = self.to_screen(rect.x as f64, rect.y as f64);
        let (x1, y1) = self.to_screen(rect.right() as f64, rect.bottom() as f64);
        (x0, y0, x1, y1)
    }
}

/// UML visibility marker for a class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
}

impl Visibility {
    /// Map a source access modifier keyword; anything unknown is protected
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "public" => Visibility::Public,
            "private" => Visibility::Private,
            _ => Visibility::Protected,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sigil())
    }
}
