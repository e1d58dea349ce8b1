//! Java class extractor
//!
//! Pulls a structural summary out of one source file with five independent
//! pattern scans. There is no tokenizer: comments and string literals are
//! matched like any other text, and only the first declared type is kept.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::trace;

use crate::core::{Parser, Visibility};
use crate::diagram::{ClassForest, ClassRecord};

mod patterns {
    use super::*;

    pub static CLASS_NAME: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(class|interface)\s+(\w+)").unwrap());

    pub static ABSTRACT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"abstract\s+class\s+\w+").unwrap());

    pub static PARENT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"class\s+\w+\s+extends\s+(\w+)").unwrap());

    pub static FIELD: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(private|protected|public)\s+([\w<>]+)\s+(\w+)\s*;").unwrap()
    });

    pub static METHOD: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(public|protected|private)\s+([\w<>]+)\s+(\w+)\s*\(([^)]*)\)").unwrap()
    });
}

/// Regex-driven extractor for Java-like source files
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract the first declared class or interface, if any
    pub fn extract(&self, text: &str) -> Option<ClassRecord> {
        let name = patterns::CLASS_NAME.captures(text)?.get(2)?.as_str();
        let is_abstract = patterns::ABSTRACT.is_match(text);

        let mut record = ClassRecord::new(name)
            .with_abstract(is_abstract)
            .with_fields(self.fields(text))
            .with_methods(self.methods(text));

        if let Some(parent) = patterns::PARENT.captures(text).and_then(|c| c.get(1)) {
            record = record.with_parent_name(parent.as_str());
        }

        trace!(
            class = name,
            is_abstract,
            fields = record.fields.len(),
            methods = record.methods.len(),
            "Extracted class"
        );
        Some(record)
    }

    fn fields(&self, text: &str) -> Vec<String> {
        patterns::FIELD
            .captures_iter(text)
            .map(|caps| {
                let sigil = Visibility::from_keyword(&caps[1]).sigil();
                format!("{} {} {}", sigil, &caps[2], &caps[3])
            })
            .collect()
    }

    fn methods(&self, text: &str) -> Vec<String> {
        patterns::METHOD
            .captures_iter(text)
            .map(|caps| {
                let sigil = Visibility::from_keyword(&caps[1]).sigil();
                format!(
                    "{} {} {}({})",
                    sigil,
                    &caps[2],
                    &caps[3],
                    parameter_types(&caps[4])
                )
            })
            .collect()
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a raw parameter list to its types
///
/// Each comma-separated parameter contributes its first word, plus the
/// second word when that one carries a `<`. Generic arguments containing
/// commas are split like any other parameter.
pub fn parameter_types(params: &str) -> String {
    if params.trim().is_empty() {
        return String::new();
    }

    params
        .split(',')
        .map(str::trim)
        .map(|param| {
            let mut parts = param.split_whitespace();
            let first = parts.next().unwrap_or_default();
            match parts.next() {
                Some(second) if second.contains('<') => format!("{} {}", first, second),
                _ => first.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl Parser<ClassForest> for JavaParser {
    fn parse(&self, input: &str, database: &mut ClassForest) -> Result<()> {
        if let Some(record) = self.extract(input) {
            database.ingest(record);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "java"
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        patterns::CLASS_NAME.is_match(input)
    }
}
