//! Class diagram model, layout and drawing
//!
//! - [`database`]: the class forest and its deferred parent resolution
//! - [`layout`]: box sizes and positions for one frame
//! - [`palette`]: per-tree header colors
//! - [`renderer`]: primitives for placed boxes
//! - [`viewer`]: pan, zoom, selection and per-frame rendering

pub mod database;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod viewer;

pub use database::{ClassForest, ClassId, ClassRecord, IngestOutcome};
pub use layout::{BoxMetrics, ClassLayout, FrameLayout, PlacedBox};
pub use palette::{ColorAssigner, Palette};
pub use renderer::ClassRenderer;
pub use viewer::Viewer;
