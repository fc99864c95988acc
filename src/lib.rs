pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod project_identity;
pub mod structure;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the generator CLI entrypoint.
pub fn run_cli() {
    // Argument errors exit through clap with a usage message
    let args = cli::args::Cli::parse();
    ui::set_verbose(args.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
