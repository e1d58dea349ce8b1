//! Core abstractions for class extraction and diagram drawing
//!
//! This module defines the traits the pipeline is built on (parsers,
//! databases, detectors, drawing surfaces and text metrics), the shared value
//! types, configuration, errors and logging.

pub mod box_drawing;
mod canvas;
mod config;
mod database;
mod detector;
mod error;
pub mod logging;
mod parser;
mod surface;
mod text;
mod types;

pub use canvas::*;
pub use config::*;
pub use database::*;
pub use detector::*;
pub use error::*;
pub use parser::*;
pub use surface::*;
pub use text::*;
pub use types::*;
