//! Tests for core error types

use std::error::Error;
use std::io;

use umlview::core::UmlError;

#[test]
fn test_file_read_error() {
    let error = UmlError::file_read("src/App.java", io::Error::new(io::ErrorKind::NotFound, "gone"));
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Failed to read"));
    assert!(error_msg.contains("src/App.java"));
    assert!(error.source().is_some());
    assert!(!error.is_fatal());
}

#[test]
fn test_unresolved_parent() {
    let error = UmlError::unresolved_parent("C", "Nonexistent");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Nonexistent"));
    assert!(error_msg.contains("C"));
}

#[test]
fn test_cyclic_parent() {
    let error = UmlError::cyclic_parent("A", "B");
    assert_eq!(error.to_string(), "Inheritance cycle: A cannot extend B");
}

#[test]
fn test_duplicate_class() {
    let error = UmlError::duplicate_class("Shape");
    assert!(error.to_string().contains("Duplicate class declaration: Shape"));
}

#[test]
fn test_empty_project_is_fatal() {
    let error = UmlError::EmptyProject { root: "/work".into() };
    assert!(error.is_fatal());
    assert!(error.to_string().contains("public static void main"));
}

#[test]
fn test_config_error() {
    let error = UmlError::config_error("min_zoom exceeds max_zoom");
    assert!(error.to_string().contains("Invalid configuration"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let error: UmlError = io_error.into();
    assert!(matches!(error, UmlError::IoError { .. }));
    assert!(error.to_string().contains("denied"));
}
