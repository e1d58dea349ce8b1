//! Java source plugin
//!
//! Extracts class records from Java files and recognizes the entry point
//! file used to locate a project's root package.

mod detector;
mod parser;

pub use detector::MainMethodDetector;
pub use parser::{parameter_types, JavaParser};
