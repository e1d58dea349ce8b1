//! Output verification for the umlview binary
//!
//! Spawns the built binary against a temporary project tree and checks what
//! it prints.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "app/App.java",
        "public class App { public static void main(String[] args) {} }",
    );
    write(
        dir.path(),
        "app/Shape.java",
        "public abstract class Shape { private int sides; public double area() {} }",
    );
    write(dir.path(), "app/Circle.java", "public class Circle extends Shape {}");
    write(dir.path(), "app/Ghost.java", "public class Ghost extends Missing {}");
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_umlview"))
        .args(args)
        .arg("--root")
        .arg(dir)
        .env_remove("UMLVIEW_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_scan_prints_tree_and_warnings() {
    let dir = project();
    let output = run(dir.path(), &["scan"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Shape (abstract)"));
    assert!(stdout.contains("\n  Circle"));
    assert!(stdout.contains("Ghost"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing"));
}

#[test]
fn test_scan_json() {
    let dir = project();
    let output = run(dir.path(), &["scan", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files"], 4);
    let classes = report["classes"].as_array().unwrap();
    let circle = classes.iter().find(|c| c["name"] == "Circle").unwrap();
    assert_eq!(circle["parent"], "Shape");
    assert_eq!(report["diagnostics"].as_array().unwrap().len(), 1);
}

#[test]
fn test_render_plain_frame() {
    let dir = project();
    let output = run(dir.path(), &["render", "--color", "never"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Shape"));
    assert!(stdout.contains("- int sides"));
    assert!(!stdout.contains("\x1b["));
    // Circle is only drawn once its tree is selected
    assert!(!stdout.contains("Circle"));
}

#[test]
fn test_render_selection_to_file() {
    let dir = project();
    let out = dir.path().join("frame.txt");
    let output = run(
        dir.path(),
        &["render", "--select", "Circle", "--output", out.to_str().unwrap()],
    );
    assert!(output.status.success());

    let frame = fs::read_to_string(&out).unwrap();
    assert!(frame.contains("Shape"));
    assert!(frame.contains("Circle"));
}

#[test]
fn test_unknown_selection_fails() {
    let dir = project();
    let output = run(dir.path(), &["render", "--select", "Nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown class"));
}

#[test]
fn test_missing_entry_point_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Lib.java", "class Lib {}");
    let output = run(dir.path(), &["scan"]);
    assert_eq!(output.status.code(), Some(2));
}
