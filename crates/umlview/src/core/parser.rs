//! Core parser trait for source text
//!
//! A parser turns the text of one source file into model data stored in a
//! database. Parsers are shallow pattern matchers; they never fail on
//! malformed input, they simply find less.

use anyhow::Result;

use super::Database;

/// Core trait for source parsers
///
/// # Example
/// ```
/// use umlview::core::{Database, Parser};
/// use umlview::diagram::ClassForest;
/// use umlview::plugins::java::JavaParser;
///
/// let parser = JavaParser::new();
/// let mut forest = ClassForest::new();
/// parser.parse("class A { private int x; }", &mut forest).unwrap();
/// assert_eq!(forest.node_count(), 1);
/// ```
pub trait Parser<D: Database> {
    /// Parse one source text into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input contains anything this parser extracts
    fn can_parse(&self, input: &str) -> bool;
}
