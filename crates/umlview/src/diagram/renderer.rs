//! Drawing of placed class boxes onto a [`DrawSurface`]

use super::{ClassForest, ClassRecord, ColorAssigner, PlacedBox};
use crate::core::{DrawSurface, FontStyle, LayoutConfig, Point, Rgba};

/// Draws class boxes and the connectors between an expanded root and its
/// subclasses
#[derive(Debug, Clone)]
pub struct ClassRenderer {
    pub fill: Rgba,
    pub outline_color: Rgba,
    pub connector_color: Rgba,
    pub outline: bool,
    pub connectors: bool,
}

impl ClassRenderer {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            fill: Rgba::WHITE,
            outline_color: Rgba::BLACK,
            connector_color: Rgba::BLACK,
            outline: config.outline,
            connectors: config.connectors,
        }
    }

    /// Draw one box: body, colored header, name, members, then outline
    pub fn draw_box<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        record: &ClassRecord,
        placed: &PlacedBox,
        header: Rgba,
    ) {
        surface.fill_rect(placed.rect, self.fill);
        surface.fill_rect(placed.header_rect(), header);

        let style = if record.is_abstract {
            FontStyle::Italic
        } else {
            FontStyle::Plain
        };
        surface.draw_string(&record.name, placed.text_x, placed.name_baseline, style);

        for (field, y) in record.fields.iter().zip(&placed.field_baselines) {
            surface.draw_string(field, placed.text_x, *y, FontStyle::Plain);
        }
        for (method, y) in record.methods.iter().zip(&placed.method_baselines) {
            surface.draw_string(method, placed.text_x, *y, FontStyle::Plain);
        }

        if self.outline {
            surface.stroke_rect(placed.rect, self.outline_color);
        }
    }

    /// Elbow connector from a parent's bottom edge to a child's top edge
    pub fn draw_connector<S: DrawSurface + ?Sized>(&self, surface: &mut S, from: Point, to: Point) {
        let mid_y = from.y + (to.y - from.y) / 2;
        let bend_a = Point::new(from.x, mid_y);
        let bend_b = Point::new(to.x, mid_y);
        surface.draw_line(from, bend_a, self.connector_color);
        surface.draw_line(bend_a, bend_b, self.connector_color);
        surface.draw_line(bend_b, to, self.connector_color);
    }

    /// Draw `boxes` in order, coloring each by its tree
    pub fn draw_boxes<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        forest: &ClassForest,
        colors: &mut ColorAssigner,
        boxes: &[PlacedBox],
    ) {
        for placed in boxes {
            let color = colors.color_of(forest, placed.id);
            self.draw_box(surface, forest.get(placed.id), placed, color);
        }
        if self.connectors {
            for (from, to) in boxes.iter().filter_map(|b| b.connector) {
                self.draw_connector(surface, from, to);
            }
        }
    }
}

impl Default for ClassRenderer {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawCommand, RecordingSurface, TextMetrics};
    use crate::diagram::ClassLayout;

    struct Fixed;

    impl TextMetrics for Fixed {
        fn width(&self, text: &str) -> i32 {
            text.len() as i32 * 2
        }
        fn line_height(&self) -> i32 {
            12
        }
    }

    #[test]
    fn test_box_drawing_order() {
        let mut forest = ClassForest::new();
        let id = forest
            .ingest(
                ClassRecord::new("Shape")
                    .with_abstract(true)
                    .with_fields(vec!["- int n".into()])
                    .with_methods(vec!["+ void f()".into()]),
            )
            .id();
        let config = LayoutConfig::default();
        let placed = ClassLayout::new(&forest, Fixed, &config).place(id, 5, 7);

        let mut surface = RecordingSurface::new(200, 200);
        let header = Rgba::from_hex(0x699DFF);
        ClassRenderer::new(&config).draw_box(&mut surface, forest.get(id), &placed, header);

        let commands = surface.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: placed.rect,
                color: Rgba::WHITE
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: placed.header_rect(),
                color: header
            }
        );
        assert_eq!(surface.find_text("Shape"), Some((15, 19, FontStyle::Italic)));
        assert_eq!(surface.texts(), vec!["Shape", "- int n", "+ void f()"]);
        assert!(matches!(commands.last(), Some(DrawCommand::StrokeRect { .. })));
    }

    #[test]
    fn test_outline_and_connectors_can_be_disabled() {
        let mut forest = ClassForest::new();
        let a = forest.ingest(ClassRecord::new("A")).id();
        forest.ingest(ClassRecord::new("B").with_parent_name("A"));
        let config = LayoutConfig {
            outline: false,
            connectors: false,
            ..LayoutConfig::default()
        };
        let boxes = ClassLayout::new(&forest, Fixed, &config).place_expanded(a, 0, 0);

        let mut surface = RecordingSurface::new(200, 200);
        let mut colors = ColorAssigner::default();
        ClassRenderer::new(&config).draw_boxes(&mut surface, &forest, &mut colors, &boxes);

        assert!(surface
            .commands()
            .iter()
            .all(|c| !matches!(c, DrawCommand::StrokeRect { .. } | DrawCommand::Line { .. })));
    }

    #[test]
    fn test_connector_is_an_elbow() {
        let mut surface = RecordingSurface::new(100, 100);
        ClassRenderer::default().draw_connector(&mut surface, Point::new(10, 20), Point::new(40, 60));
        let lines: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                (Point::new(10, 20), Point::new(10, 40)),
                (Point::new(10, 40), Point::new(40, 40)),
                (Point::new(40, 40), Point::new(40, 60)),
            ]
        );
    }
}
