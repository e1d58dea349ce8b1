//! Core error types for class extraction and diagram processing
//!
//! This module defines the error and diagnostic types used throughout the
//! pipeline. Only [`UmlError::EmptyProject`] is fatal; every other variant is
//! reported as a diagnostic and processing continues.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for class extraction and diagram processing
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unresolved parent class {parent_name} for {class_name}")]
    UnresolvedParent {
        class_name: String,
        parent_name: String,
    },

    #[error("Inheritance cycle: {class_name} cannot extend {parent_name}")]
    CyclicParent {
        class_name: String,
        parent_name: String,
    },

    #[error("Duplicate class declaration: {class_name}")]
    DuplicateClass { class_name: String },

    #[error("No file declaring `public static void main` found under {}", root.display())]
    EmptyProject { root: PathBuf },

    #[error("No class or interface declaration found in {}", path.display())]
    NoClassInFile { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl UmlError {
    /// Create a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new unresolved parent diagnostic
    pub fn unresolved_parent(class_name: impl Into<String>, parent_name: impl Into<String>) -> Self {
        Self::UnresolvedParent {
            class_name: class_name.into(),
            parent_name: parent_name.into(),
        }
    }

    /// Create a new inheritance cycle diagnostic
    pub fn cyclic_parent(class_name: impl Into<String>, parent_name: impl Into<String>) -> Self {
        Self::CyclicParent {
            class_name: class_name.into(),
            parent_name: parent_name.into(),
        }
    }

    /// Create a new duplicate declaration diagnostic
    pub fn duplicate_class(class_name: impl Into<String>) -> Self {
        Self::DuplicateClass {
            class_name: class_name.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Returns true if this error must abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(self, UmlError::EmptyProject { .. })
    }
}
