//! Per-tree header colors

use std::collections::HashMap;

use super::{ClassForest, ClassId};
use crate::core::{Rgba, UmlError};

/// Ordered list of root colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Fewest colors a palette may hold
    pub const MIN_COLORS: usize = 4;

    pub fn new(colors: Vec<Rgba>) -> Result<Self, UmlError> {
        if colors.len() < Self::MIN_COLORS {
            return Err(UmlError::config_error(format!(
                "palette needs at least {} colors, got {}",
                Self::MIN_COLORS,
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for slot `n`, wrapping around
    pub fn slot(&self, n: usize) -> Rgba {
        self.colors[n % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgba::from_hex(0xFF8080),
                Rgba::from_hex(0x699DFF),
                Rgba::from_hex(0xFFED91),
                Rgba::from_hex(0xE37DFF),
            ],
        }
    }
}

/// Lazily assigns one palette slot per tree, in order of first query
#[derive(Debug, Clone, Default)]
pub struct ColorAssigner {
    palette: Palette,
    assigned: HashMap<ClassId, Rgba>,
    roots_colored: usize,
}

impl ColorAssigner {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
            roots_colored: 0,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color of `id`, which is always the color of its tree's root
    pub fn color_of(&mut self, forest: &ClassForest, id: ClassId) -> Rgba {
        if let Some(color) = self.assigned.get(&id) {
            return *color;
        }

        let root = forest.top_root(id);
        let color = match self.assigned.get(&root) {
            Some(color) => *color,
            None => {
                let color = self.palette.slot(self.roots_colored);
                self.roots_colored += 1;
                self.assigned.insert(root, color);
                color
            }
        };
        self.assigned.insert(id, color);
        color
    }

    /// Already-assigned color, without assigning one
    pub fn peek(&self, id: ClassId) -> Option<Rgba> {
        self.assigned.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::ClassRecord;

    #[test]
    fn test_short_palette_is_rejected() {
        assert!(matches!(Palette::new(vec![]), Err(UmlError::ConfigError { .. })));
        let three = vec![Rgba::from_hex(0x000000); 3];
        assert!(matches!(Palette::new(three), Err(UmlError::ConfigError { .. })));
        let four = vec![Rgba::from_hex(0x000000); 4];
        assert_eq!(Palette::new(four).unwrap().len(), 4);
    }

    #[test]
    fn test_slots_wrap() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.slot(0), Rgba::from_hex(0xFF8080));
        assert_eq!(palette.slot(5), Rgba::from_hex(0x699DFF));
    }

    #[test]
    fn test_tree_shares_root_color() {
        let mut forest = ClassForest::new();
        let r = forest.ingest(ClassRecord::new("R")).id();
        let s = forest.ingest(ClassRecord::new("S").with_parent_name("R")).id();
        let u = forest.ingest(ClassRecord::new("U")).id();

        let mut colors = ColorAssigner::default();
        // querying a descendant first still colors the root
        let cs = colors.color_of(&forest, s);
        assert_eq!(colors.peek(r), Some(cs));
        assert_eq!(colors.color_of(&forest, r), cs);
        assert_eq!(colors.color_of(&forest, u), Palette::default().slot(1));
    }

    #[test]
    fn test_query_order_decides_slot() {
        let mut forest = ClassForest::new();
        let a = forest.ingest(ClassRecord::new("A")).id();
        let b = forest.ingest(ClassRecord::new("B")).id();
        let c = forest.ingest(ClassRecord::new("C")).id();

        let mut colors = ColorAssigner::default();
        assert_eq!(colors.color_of(&forest, b), Palette::default().slot(0));
        assert_eq!(colors.color_of(&forest, a), Palette::default().slot(1));
        assert!(colors.peek(c).is_none());
    }
}
