mod catalog;
mod cli;
mod config;
mod engine;
mod history;
mod logging;
mod model;
mod prompt;
mod synthesize;
mod tui;
mod validate;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
