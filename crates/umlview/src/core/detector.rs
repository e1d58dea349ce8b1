//! Core detector trait for recognizing source files
//!
//! Detectors answer a yes/no question about a file's text, such as "is this
//! the program entry point". They are used during project discovery.

/// Core trait for source detectors
///
/// # Example
/// ```
/// use umlview::core::Detector;
/// use umlview::plugins::java::MainMethodDetector;
///
/// let detector = MainMethodDetector::new();
/// assert!(detector.detect("public static void main(String[] args) {}"));
/// ```
pub trait Detector {
    /// Detect if the input matches
    fn detect(&self, input: &str) -> bool;

    /// Get the detector name
    fn name(&self) -> &'static str;

    /// Get the literal patterns that this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
