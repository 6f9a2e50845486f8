//! fdn-recipe CLI - drives the foundation package recipe through its
//! lifecycle phases.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("fdn_recipe=debug")
    } else {
        EnvFilter::new("fdn_recipe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Version(args) => commands::version::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Source(args) => commands::source::execute(args),
        Commands::Build(args) => commands::build::execute(args),
        Commands::Package(args) => commands::package::execute(args),
        Commands::Requirements(args) => commands::requirements::execute(args),
        Commands::PackageId(args) => commands::package_id::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
