//! End-to-end scenarios: extraction, resolution, coloring and selection

use umlview::core::{DrawCommand, RecordingSurface, TextMetrics, UmlError};
use umlview::diagram::{ClassForest, ColorAssigner, Palette, Viewer};
use umlview::build_forest;

/// Ten pixels per byte, 14-pixel lines
struct Fixed;

impl TextMetrics for Fixed {
    fn width(&self, text: &str) -> i32 {
        text.len() as i32 * 10
    }

    fn line_height(&self) -> i32 {
        14
    }
}

fn names(forest: &ClassForest, ids: &[umlview::diagram::ClassId]) -> Vec<String> {
    ids.iter().map(|id| forest.get(*id).name.clone()).collect()
}

#[test]
fn test_single_class() {
    let (forest, diagnostics) = build_forest(["class A { private int x; public void f() {} }"]);
    assert!(diagnostics.is_empty());

    let roots: Vec<_> = forest.roots().collect();
    assert_eq!(names(&forest, &roots), vec!["A"]);

    let a = forest.get(roots[0]);
    assert!(!a.is_abstract);
    assert_eq!(a.fields, vec!["- int x"]);
    assert_eq!(a.methods, vec!["+ void f()"]);
    assert!(a.subclasses().is_empty());
}

#[test]
fn test_out_of_order_inheritance() {
    let (forest, diagnostics) = build_forest(["class B extends A {}", "abstract class A {}"]);
    assert!(diagnostics.is_empty());

    let a = forest.find("A").unwrap();
    let b = forest.find("B").unwrap();
    assert!(forest.get(a).is_abstract);
    assert!(forest.get(a).is_root());
    assert_eq!(forest.parent(b), Some(a));
    assert_eq!(forest.subclasses(a), &[b]);
}

#[test]
fn test_dangling_parent() {
    let (forest, diagnostics) = build_forest(["class C extends Nonexistent {}"]);

    let c = forest.find("C").unwrap();
    assert!(forest.get(c).is_root());
    assert!(forest.get(c).parent_name_pending().is_none());
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics[0] {
        UmlError::UnresolvedParent { parent_name, .. } => assert_eq!(parent_name, "Nonexistent"),
        other => panic!("unexpected diagnostic: {other}"),
    }
}

#[test]
fn test_color_inheritance() {
    let (forest, _) = build_forest([
        "class R {}",
        "class S extends R {}",
        "class T extends S {}",
        "class U {}",
    ]);
    let palette = Palette::default();
    let mut colors = ColorAssigner::new(palette.clone());

    let [r, s, t, u] = ["R", "S", "T", "U"].map(|n| forest.find(n).unwrap());
    let [cr, cs, ct, cu] = [r, s, t, u].map(|id| colors.color_of(&forest, id));

    assert_eq!(cr, palette.slot(0));
    assert_eq!(cs, palette.slot(0));
    assert_eq!(ct, palette.slot(0));
    assert_eq!(cu, palette.slot(1));
}

#[test]
fn test_selection_focus() {
    let (forest, _) = build_forest([
        "class X {}",
        "class X1 extends X {}",
        "class X2 extends X {}",
        "class Y {}",
        "class Y1 extends Y {}",
        "class Y2 extends Y {}",
        "class Z {}",
        "class Z1 extends Z {}",
        "class Z2 extends Z {}",
    ]);
    let mut viewer = Viewer::new(&forest);
    let mut surface = RecordingSurface::new(960, 540);

    viewer.render(&mut surface, Fixed);
    let frame = viewer.last_frame().clone();
    let xs: Vec<i32> = frame.boxes.iter().map(|b| b.rect.x).collect();
    // one-letter names: 10px text + 50px gap
    assert_eq!(xs, vec![0, 60, 120]);
    assert_eq!(surface.texts(), vec!["X", "Y", "Z"]);
    let wash = viewer.config().wash;
    assert!(!surface.fills().iter().any(|(_, c)| *c == wash));

    let y_box = frame.boxes[1].rect;
    surface.clear();
    let picked = viewer.pointer_down(y_box.x + 2, y_box.y + 2);
    assert_eq!(picked, forest.find("Y"));

    viewer.render(&mut surface, Fixed);
    assert!(surface.fills().iter().any(|(_, c)| *c == wash));
    assert_eq!(surface.texts(), vec!["X", "Z", "Y", "Y1", "Y2"]);

    let expanded = viewer.last_frame().expanded();
    assert_eq!(expanded.len(), 3);
    let (parent, y1, y2) = (&expanded[0], &expanded[1], &expanded[2]);
    assert_eq!(parent.rect.x, 60);

    // two-letter children: 20px text, advance 20 + 80
    let total = (20 + 80) + (20 + 80) - 80;
    assert_eq!(y1.rect.x, 60 - (total - 10) / 2);
    assert_eq!(y2.rect.x - y1.rect.x, 20 + 80);
    assert_eq!(y1.rect.y, parent.rect.height + 40);
    assert_eq!(y1.rect.y, y2.rect.y);

    // children are centered under the parent's text
    let row_center = (y1.rect.x + y2.rect.x + 20) / 2;
    assert!((row_center - (parent.rect.x + 5)).abs() <= 1);

    // wash draws in surface space
    let wash_index = surface
        .commands()
        .iter()
        .position(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == wash))
        .unwrap();
    assert_eq!(surface.commands()[wash_index - 1], DrawCommand::ResetTransform);
}

#[test]
fn test_access_sigil_mapping() {
    let (forest, _) = build_forest(["class P { protected String name; public int get() {} }"]);
    let p = forest.get(forest.find("P").unwrap());
    assert_eq!(p.fields, vec!["# String name"]);
    assert_eq!(p.methods, vec!["+ int get()"]);
}

#[test]
fn test_duplicate_declaration_keeps_first() {
    let (forest, diagnostics) = build_forest([
        "class A { private int first; }",
        "class A { private int second; }",
    ]);
    assert!(diagnostics.is_empty());
    assert_eq!(forest.len(), 1);
    assert_eq!(forest.get(forest.find("A").unwrap()).fields, vec!["- int first"]);
}

#[test]
fn test_files_without_declarations_are_skipped() {
    let (forest, diagnostics) = build_forest(["package demo;", "", "class Only {}"]);
    assert!(diagnostics.is_empty());
    assert_eq!(forest.len(), 1);
}

#[test]
fn test_self_extension_is_reported() {
    let (forest, diagnostics) = build_forest(["class A extends A {}"]);
    assert_eq!(forest.roots().count(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(diagnostics[0], UmlError::CyclicParent { .. }));
}
