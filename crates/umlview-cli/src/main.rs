//! umlview CLI - Browse Java class hierarchies as UML diagrams

mod cli;
mod colorizer;
mod terminal;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::UmlApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(cli::exit_code(&e));
    }
}
