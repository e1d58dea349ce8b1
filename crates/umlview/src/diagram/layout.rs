//! Class box placement
//!
//! Every box is sized from its widest line of text. Roots sit side by side on
//! the top row; the expanded root additionally gets its direct subclasses in
//! one centered row beneath it.

use tracing::trace;

use super::{ClassForest, ClassId};
use crate::core::{LayoutConfig, Point, Rect, TextMetrics};

/// Size of one class box, independent of where it is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxMetrics {
    /// Widest of the name, field and method strings
    pub max_text_width: i32,
    pub width: i32,
    pub height: i32,
    /// Height of the colored name band
    pub header_height: i32,
    pub line_height: i32,
}

/// A class box placed in canvas coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBox {
    pub id: ClassId,
    pub rect: Rect,
    pub metrics: BoxMetrics,
    /// Left edge of every text line
    pub text_x: i32,
    pub name_baseline: i32,
    pub field_baselines: Vec<i32>,
    pub method_baselines: Vec<i32>,
    /// Parent bottom-center to this box's top-center, for expanded children
    pub connector: Option<(Point, Point)>,
}

impl PlacedBox {
    pub fn header_rect(&self) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.metrics.header_height,
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.rect.contains(x, y)
    }
}

/// All boxes of one frame, in draw order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub boxes: Vec<PlacedBox>,
    /// Index of the first box drawn above the dimming wash
    pub expanded_from: usize,
    /// Top-row x the selected root would have occupied
    pub selected_x: Option<i32>,
}

impl FrameLayout {
    /// Boxes drawn beneath the wash (every unselected root)
    pub fn background(&self) -> &[PlacedBox] {
        &self.boxes[..self.expanded_from]
    }

    /// The selected root and its children
    pub fn expanded(&self) -> &[PlacedBox] {
        &self.boxes[self.expanded_from..]
    }

    pub fn find(&self, id: ClassId) -> Option<&PlacedBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Topmost box under a canvas point
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&PlacedBox> {
        self.boxes.iter().rev().find(|b| b.contains(x, y))
    }
}

/// Computes box sizes and positions against a text measurement capability
pub struct ClassLayout<'a, M: TextMetrics> {
    forest: &'a ClassForest,
    metrics: M,
    config: &'a LayoutConfig,
}

impl<'a, M: TextMetrics> ClassLayout<'a, M> {
    pub fn new(forest: &'a ClassForest, metrics: M, config: &'a LayoutConfig) -> Self {
        Self {
            forest,
            metrics,
            config,
        }
    }

    pub fn max_text_width(&self, id: ClassId) -> i32 {
        let record = self.forest.get(id);
        std::iter::once(&record.name)
            .chain(&record.fields)
            .chain(&record.methods)
            .map(|line| self.metrics.width(line))
            .max()
            .unwrap_or(0)
    }

    pub fn box_metrics(&self, id: ClassId) -> BoxMetrics {
        let record = self.forest.get(id);
        let padding = self.config.padding;
        let line_height = self.metrics.line_height();
        let max_text_width = self.max_text_width(id);
        let lines = (record.fields.len() + record.methods.len() + 1) as i32;

        BoxMetrics {
            max_text_width,
            width: max_text_width + 2 * padding,
            height: lines * line_height + 4 * padding,
            header_height: line_height + padding,
            line_height,
        }
    }

    /// Place a single box with its top-left corner at `(x, y)`
    pub fn place(&self, id: ClassId, x: i32, y: i32) -> PlacedBox {
        let record = self.forest.get(id);
        let metrics = self.box_metrics(id);
        let padding = self.config.padding;
        let lh = metrics.line_height;

        let mut cursor = y + metrics.header_height + 2 * padding;
        let field_baselines = record
            .fields
            .iter()
            .map(|_| {
                let at = cursor;
                cursor += lh;
                at
            })
            .collect();
        cursor += padding;
        let method_baselines = record
            .methods
            .iter()
            .map(|_| {
                let at = cursor;
                cursor += lh;
                at
            })
            .collect();

        PlacedBox {
            id,
            rect: Rect::new(x, y, metrics.width, metrics.height),
            metrics,
            text_x: x + padding,
            name_baseline: y + lh,
            field_baselines,
            method_baselines,
            connector: None,
        }
    }

    /// Place `id` and its direct subclasses centered in one row beneath it
    pub fn place_expanded(&self, id: ClassId, x: i32, y: i32) -> Vec<PlacedBox> {
        let parent = self.place(id, x, y);
        let spacing = self.config.child_spacing;
        let children = self.forest.subclasses(id);

        let advance = |child: ClassId| self.max_text_width(child) + 2 * spacing;
        let total: i32 = children.iter().map(|c| advance(*c)).sum::<i32>() - 2 * spacing;

        let mut current_x = x - (total - parent.metrics.max_text_width) / 2;
        let child_y = y + parent.rect.height + spacing;
        let anchor = Point::new(parent.rect.center_x(), parent.rect.bottom());

        let mut placed = Vec::with_capacity(children.len() + 1);
        placed.push(parent);
        for &child in children {
            let mut child_box = self.place(child, current_x, child_y);
            child_box.connector = Some((
                anchor,
                Point::new(child_box.rect.center_x(), child_box.rect.y),
            ));
            trace!(class = %self.forest.get(child).name, x = current_x, y = child_y, "Placed subclass");
            current_x += advance(child);
            placed.push(child_box);
        }
        placed
    }

    /// Lay out one frame: every root in a row, the selected root expanded
    ///
    /// Roots advance by `max_text_width + root_gap`. The selected root keeps
    /// its slot in the row but is placed last, expanded, so it draws on top.
    pub fn layout_frame(&self, selected: Option<ClassId>) -> FrameLayout {
        let mut frame = FrameLayout::default();
        let mut offset = 0;

        for root in self.forest.roots() {
            if Some(root) == selected {
                frame.selected_x = Some(offset);
            } else {
                frame.boxes.push(self.place(root, offset, 0));
            }
            offset += self.max_text_width(root) + self.config.root_gap;
        }

        frame.expanded_from = frame.boxes.len();
        if let (Some(id), Some(x)) = (selected, frame.selected_x) {
            frame.boxes.extend(self.place_expanded(id, x, 0));
        }
        frame
    }
}
