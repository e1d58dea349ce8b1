//! Source language plugins
//!
//! Each plugin implements the core [`Parser`](crate::core::Parser) and
//! [`Detector`](crate::core::Detector) traits for one source language.

pub mod java;

pub use java::{JavaParser, MainMethodDetector};
