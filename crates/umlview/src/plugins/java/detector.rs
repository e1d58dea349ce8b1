//! Entry point detector
//!
//! Recognizes the file that declares the program's `main` method. Its
//! directory is taken as the application's root package.

use crate::core::Detector;

const MAIN_SIGNATURE: &str = "public static void main";

/// Detector for files declaring `public static void main`
pub struct MainMethodDetector;

impl MainMethodDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MainMethodDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for MainMethodDetector {
    fn detect(&self, input: &str) -> bool {
        input.lines().any(|line| line.contains(MAIN_SIGNATURE))
    }

    fn name(&self) -> &'static str {
        "main-method"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec![MAIN_SIGNATURE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_main() {
        let detector = MainMethodDetector::new();
        assert!(detector.detect(
            "public class App {\n    public static void main(String[] args) {}\n}"
        ));
    }

    #[test]
    fn test_rejects_other_files() {
        let detector = MainMethodDetector::new();
        assert!(!detector.detect("public class Shape {}"));
        assert!(!detector.detect("static void main() {}"));
        // The signature must sit on one line
        assert!(!detector.detect("public static\nvoid main(String[] a) {}"));
    }

    #[test]
    fn test_patterns() {
        assert_eq!(MainMethodDetector::new().patterns(), vec!["public static void main"]);
    }
}
