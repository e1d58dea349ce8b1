//! Project discovery and loading
//!
//! A project's root package is the directory holding the file that declares
//! `public static void main`. Every `.java` file below it is read, extracted
//! and ingested in sorted path order, so the same tree always yields the same
//! forest.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};
use walkdir::WalkDir;

use crate::core::{Detector, UmlError};
use crate::diagram::ClassForest;
use crate::plugins::java::{JavaParser, MainMethodDetector};

const SOURCE_EXTENSION: &str = "java";

/// Options for building a forest from disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Synthesize placeholder parents for undeclared names
    pub placeholders: bool,
}

/// A fully loaded project
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub forest: ClassForest,
    /// Recoverable problems found while loading
    pub diagnostics: Vec<UmlError>,
}

fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

fn walk_sources(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_source_file(p))
}

/// Read a source file, replacing bytes that are not UTF-8
fn read_source(path: &Path) -> Result<String, UmlError> {
    let bytes = fs::read(path).map_err(|source| UmlError::file_read(path, source))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Find the directory of the first source file that declares `main`
pub fn find_project_root(start: &Path) -> Result<PathBuf, UmlError> {
    let detector = MainMethodDetector::new();

    for path in walk_sources(start) {
        // Unreadable files cannot be the entry point
        let Ok(text) = read_source(&path) else {
            continue;
        };
        if detector.detect(&text) {
            if let Some(parent) = path.parent() {
                debug!(path = %path.display(), "Found entry point");
                return Ok(parent.to_path_buf());
            }
        }
    }

    Err(UmlError::EmptyProject {
        root: start.to_path_buf(),
    })
}

/// Every source file below `root`, sorted
pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walk_sources(root).collect();
    files.sort();
    files
}

/// Read, extract and ingest every source file below `root`
pub fn load_forest(root: &Path, options: LoadOptions) -> (ClassForest, Vec<PathBuf>, Vec<UmlError>) {
    let _span = info_span!("load_forest", root = %root.display()).entered();

    let parser = JavaParser::new();
    let mut forest = ClassForest::new().with_placeholders(options.placeholders);
    let mut diagnostics = Vec::new();
    let files = collect_source_files(root);

    for path in &files {
        let text = match read_source(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("{}", err);
                diagnostics.push(err);
                continue;
            }
        };

        match parser.extract(&text) {
            Some(record) => {
                forest.ingest(record);
            }
            None => {
                debug!("{}", UmlError::NoClassInFile { path: path.clone() });
            }
        }
    }

    diagnostics.extend(forest.finalize());
    info!(
        files = files.len(),
        classes = forest.len(),
        diagnostics = diagnostics.len(),
        "Loaded forest"
    );
    (forest, files, diagnostics)
}

/// Locate the root package below `start` and load it
pub fn load_project(start: &Path, options: LoadOptions) -> Result<Project, UmlError> {
    let root = find_project_root(start)?;
    let (forest, files, diagnostics) = load_forest(&root, options);
    Ok(Project {
        root,
        files,
        forest,
        diagnostics,
    })
}
