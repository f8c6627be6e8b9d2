//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::Level;

use crate::config::KeyFile;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    // Get API key from CLI, env, or the stored key file
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("PORTSCOPE_API_KEY").ok())
        .or_else(|| KeyFile::default_location().ok().and_then(|f| f.load().ok()));

    // Create context for commands
    let ctx = commands::Context {
        api_key,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Count(args) => commands::count::execute(ctx, args).await,
        Commands::Myip => commands::myip::execute(ctx).await,
        Commands::Search(args) => commands::search::execute(ctx, args).await,
        Commands::Parse(args) => commands::parse::execute(args),
    }
}
