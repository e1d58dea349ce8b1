//! Command-line interface for the umlview utility
//!
//! Provides subcommands to inspect a Java project's class forest, render a
//! single frame of the diagram, or browse it interactively in the terminal.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::colorizer::colorize_canvas;
use crate::terminal;
use umlview::core::box_drawing::GlyphSet;
use umlview::core::logging::init_logging;
use umlview::core::{AsciiCanvas, LayoutConfig, MonospaceMetrics, UmlError, ViewerConfig};
use umlview::diagram::{ClassForest, ClassId, Palette, Viewer};
use umlview::project::{load_project, LoadOptions, Project};

/// umlview - Browse Java class hierarchies as UML diagrams
#[derive(Parser)]
#[command(name = "umlview")]
#[command(about = "Extract class hierarchies from Java sources and draw them as UML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Options shared by every subcommand that loads a project
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Directory to search for the entry point (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Create empty placeholder classes for undeclared parents
    #[arg(long)]
    pub placeholders: bool,
}

/// Options controlling how boxes are measured and drawn
#[derive(clap::Args, Debug, Clone)]
pub struct DrawArgs {
    /// Width of one terminal cell in pixels
    #[arg(long, default_value_t = 8)]
    pub cell_width: i32,

    /// Height of one terminal cell (and one text line) in pixels
    #[arg(long, default_value_t = 16)]
    pub line_height: i32,

    /// Do not outline class boxes
    #[arg(long)]
    pub no_outline: bool,

    /// Do not draw connectors to subclasses
    #[arg(long)]
    pub no_connectors: bool,

    /// Character set for outlines
    #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
    pub style: StyleChoice,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the class forest as an indented tree
    Scan {
        #[command(flatten)]
        project: ProjectArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one settled frame of the diagram
    Render {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        draw: DrawArgs,

        /// Select the tree containing this class
        #[arg(short, long)]
        select: Option<String>,

        /// Zoom factor (clamped to 0.5..=2.0)
        #[arg(short, long, default_value_t = 1.0)]
        zoom: f64,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Browse the diagram interactively
    View {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        draw: DrawArgs,
    },
}

/// Supported outline character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for GlyphSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => GlyphSet::Ascii,
            StyleChoice::Unicode => GlyphSet::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// One class in `scan --json` output
#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub is_abstract: bool,
    pub placeholder: bool,
    pub parent: Option<String>,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
    pub subclasses: Vec<String>,
}

/// `scan --json` output
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files: usize,
    pub roots: Vec<String>,
    pub classes: Vec<ClassSummary>,
    pub diagnostics: Vec<String>,
}

impl ScanReport {
    pub fn new(project: &Project) -> Self {
        let forest = &project.forest;
        let name = |id: ClassId| forest.get(id).name.clone();
        Self {
            root: project.root.clone(),
            files: project.files.len(),
            roots: forest.roots().map(name).collect(),
            classes: forest
                .ids()
                .map(|id| {
                    let record = forest.get(id);
                    ClassSummary {
                        name: record.name.clone(),
                        is_abstract: record.is_abstract,
                        placeholder: record.is_placeholder(),
                        parent: record.parent().map(name),
                        fields: record.fields.clone(),
                        methods: record.methods.clone(),
                        subclasses: record.subclasses().iter().copied().map(name).collect(),
                    }
                })
                .collect(),
            diagnostics: project.diagnostics.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Indented text tree of every root and its descendants
pub fn format_tree(forest: &ClassForest) -> String {
    let mut out = String::new();
    for root in forest.roots() {
        for id in forest.descendants(root) {
            let record = forest.get(id);
            let indent = "  ".repeat(forest.depth(id));
            let mut tags = Vec::new();
            if record.is_abstract {
                tags.push("abstract");
            }
            if record.is_placeholder() {
                tags.push("placeholder");
            }
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" ({})", tags.join(", "))
            };
            out.push_str(&format!(
                "{}{}{} [{} fields, {} methods]\n",
                indent,
                record.name,
                tags,
                record.fields.len(),
                record.methods.len()
            ));
        }
    }
    out
}

/// Main CLI application
pub struct UmlApp {
    verbose: bool,
}

impl UmlApp {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flag defaults
        let log_level_str = std::env::var("UMLVIEW_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("UMLVIEW_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        self.verbose = cli.verbose;
        if self.verbose {
            eprintln!("umlview v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Scan { project, json } => self.scan_command(&project, json),
            Commands::Render {
                project,
                draw,
                select,
                zoom,
                output,
                color,
            } => self.render_command(&project, &draw, select.as_deref(), zoom, output, color),
            Commands::View { project, draw } => self.view_command(&project, &draw),
        }
    }

    fn load(&self, args: &ProjectArgs) -> Result<Project> {
        let start = match &args.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let options = LoadOptions {
            placeholders: args.placeholders,
        };
        let project = load_project(&start, options)?;

        if self.verbose {
            eprintln!(
                "Loaded {} classes from {} files under {}",
                project.forest.len(),
                project.files.len(),
                project.root.display()
            );
        }
        Ok(project)
    }

    /// Handle the scan command
    fn scan_command(&self, args: &ProjectArgs, json: bool) -> Result<()> {
        let project = self.load(args)?;

        if json {
            let report = ScanReport::new(&project);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", format_tree(&project.forest));
            for diagnostic in &project.diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
        }
        Ok(())
    }

    /// Handle the render command
    fn render_command(
        &self,
        args: &ProjectArgs,
        draw: &DrawArgs,
        select: Option<&str>,
        zoom: f64,
        output: Option<PathBuf>,
        color: ColorChoice,
    ) -> Result<()> {
        let project = self.load(args)?;
        let config = build_config(draw);
        let metrics = MonospaceMetrics::new(draw.cell_width, draw.line_height);

        let mut viewer = Viewer::with_config(&project.forest, config, Palette::default())?;
        viewer.set_zoom(zoom);
        if let Some(name) = select {
            if viewer.select(name).is_none() {
                warn!(class = name, "No such class to select");
                return Err(anyhow!("Unknown class '{}'", name));
            }
        }
        viewer.settle();

        let window = &viewer.config().window;
        let mut canvas = AsciiCanvas::from_pixels(window.width, window.height, metrics)
            .with_glyphs(draw.style.into());
        viewer.render(&mut canvas, metrics);
        info!(cols = canvas.width, rows = canvas.height, "Rendered frame");

        let text = if should_colorize(&output, color) {
            colorize_canvas(&canvas)
        } else {
            canvas.to_string()
        };
        write_output(output.as_deref(), &text)
    }

    /// Handle the view command
    fn view_command(&self, args: &ProjectArgs, draw: &DrawArgs) -> Result<()> {
        let project = self.load(args)?;
        for diagnostic in &project.diagnostics {
            warn!("{}", diagnostic);
        }
        let metrics = MonospaceMetrics::new(draw.cell_width, draw.line_height);
        let mut viewer =
            Viewer::with_config(&project.forest, build_config(draw), Palette::default())?;
        terminal::run(&mut viewer, metrics, draw.style.into())
    }
}

impl Default for UmlApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Map drawing flags onto the viewer configuration
pub fn build_config(draw: &DrawArgs) -> ViewerConfig {
    ViewerConfig {
        layout: LayoutConfig {
            outline: !draw.no_outline,
            connectors: !draw.no_connectors,
            ..LayoutConfig::default()
        },
        ..ViewerConfig::default()
    }
}

/// Determine if we should colorize the output based on color choice and output destination
fn should_colorize(output: &Option<PathBuf>, color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            match output {
                None => crossterm::tty::IsTty::is_tty(&io::stdout()),
                Some(p) if p.to_str() == Some("-") => crossterm::tty::IsTty::is_tty(&io::stdout()),
                Some(_) => false,
            }
        }
    }
}

/// Write output to file or stdout
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let stdout_content = if content.is_empty() || content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    };

    match output {
        Some(path) if path.to_string_lossy() != "-" => {
            fs::write(path, &stdout_content).map_err(|e| {
                anyhow!("Failed to write output file '{}': {}", path.display(), e)
            })?;
        }
        _ => {
            print!("{}", stdout_content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Exit code for a failed run
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<UmlError>() {
        Some(UmlError::EmptyProject { .. }) => 2,
        _ => 1,
    }
}
