//! Box drawing glyphs for character-cell surfaces
//!
//! Lines drawn onto a cell grid are tracked as a set of arms (up, down,
//! left, right) per cell. The glyph for a cell is chosen from its arms, so
//! crossing and touching lines merge into corners and junctions.

/// Arm pointing up
pub const UP: u8 = 0b0001;
/// Arm pointing down
pub const DOWN: u8 = 0b0010;
/// Arm pointing left
pub const LEFT: u8 = 0b0100;
/// Arm pointing right
pub const RIGHT: u8 = 0b1000;

/// Glyph set used to draw lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// `+ - |` only
    Ascii,
    /// Light box-drawing characters
    #[default]
    Unicode,
}

/// Box drawing characters for one glyph set
#[derive(Debug, Clone, Copy)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub t_right: char,
    pub t_left: char,
    pub t_down: char,
    pub t_up: char,
    pub cross: char,
}

impl BoxChars {
    pub fn new(set: GlyphSet) -> Self {
        match set {
            GlyphSet::Ascii => Self::ascii(),
            GlyphSet::Unicode => Self::unicode(),
        }
    }

    /// ASCII-only box characters
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            t_right: '+',
            t_left: '+',
            t_down: '+',
            t_up: '+',
            cross: '+',
        }
    }

    /// Unicode box-drawing characters
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            t_right: '├',
            t_left: '┤',
            t_down: '┬',
            t_up: '┴',
            cross: '┼',
        }
    }

    /// Glyph for a cell whose line arms are `arms`
    pub fn glyph(&self, arms: u8) -> char {
        let up = arms & UP != 0;
        let down = arms & DOWN != 0;
        let left = arms & LEFT != 0;
        let right = arms & RIGHT != 0;
        match (up, down, left, right) {
            (true, true, true, true) => self.cross,
            (true, true, true, false) => self.t_left,
            (true, true, false, true) => self.t_right,
            (false, true, true, true) => self.t_down,
            (true, false, true, true) => self.t_up,
            (false, true, false, true) => self.top_left,
            (false, true, true, false) => self.top_right,
            (true, false, false, true) => self.bottom_left,
            (true, false, true, false) => self.bottom_right,
            (_, _, false, false) => self.vertical,
            _ => self.horizontal,
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}
