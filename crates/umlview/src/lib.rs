//! umlview - Interactive UML class diagrams from Java sources
//!
//! A library that extracts a shallow structural model from Java files,
//! stitches the classes into inheritance trees and draws them as class
//! boxes on any surface that can fill rectangles and draw strings.
//!
//! # Quick Start
//!
//! ```rust
//! use umlview::build_forest;
//!
//! let (forest, diagnostics) = build_forest(["class B extends A {}", "abstract class A {}"]);
//! assert!(diagnostics.is_empty());
//!
//! let a = forest.find("A").unwrap();
//! assert!(forest.get(a).is_abstract);
//! assert_eq!(forest.subclasses(a).len(), 1);
//! ```
//!
//! # Drawing
//!
//! The [`Viewer`](diagram::Viewer) holds pan, zoom and selection state and
//! draws against a [`DrawSurface`](core::DrawSurface):
//!
//! ```rust
//! use umlview::prelude::*;
//!
//! let (forest, _) = build_forest(["class Shape { public double area() {} }"]);
//! let mut viewer = Viewer::new(&forest);
//! let mut surface = RecordingSurface::new(960, 540);
//! viewer.render(&mut surface, MonospaceMetrics::default());
//!
//! assert_eq!(surface.texts(), vec!["Shape", "+ double area()"]);
//! ```

pub mod core;
pub mod diagram;
pub mod plugins;
pub mod project;

use crate::core::UmlError;
use crate::diagram::ClassForest;
use crate::plugins::java::JavaParser;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::build_forest;
    pub use crate::core::{
        AsciiCanvas, Database, Detector, DrawSurface, FontStyle, LayoutConfig, MonospaceMetrics,
        Parser, Rect, RecordingSurface, Rgba, TextMetrics, UmlError, ViewerConfig,
    };
    pub use crate::diagram::{
        ClassForest, ClassId, ClassLayout, ClassRecord, ClassRenderer, ColorAssigner, Palette,
        Viewer,
    };
    pub use crate::plugins::java::{JavaParser, MainMethodDetector};
    pub use crate::project::{load_project, LoadOptions, Project};
}

/// Extract and ingest every text in order, then resolve parents
///
/// Texts without a class or interface declaration are skipped. The returned
/// diagnostics list every parent that could not be bound.
pub fn build_forest<I, S>(texts: I) -> (ClassForest, Vec<UmlError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parser = JavaParser::new();
    let mut forest = ClassForest::new();
    for text in texts {
        if let Some(record) = parser.extract(text.as_ref()) {
            forest.ingest(record);
        }
    }
    let diagnostics = forest.finalize();
    (forest, diagnostics)
}
