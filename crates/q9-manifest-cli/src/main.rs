mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let directive = if cli.verbose {
        "q9_manifest=debug"
    } else {
        "q9_manifest=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    match cli.command.clone().unwrap_or_default() {
        Command::Build(args) => commands::build::run(&commands::load_config(&cli)?, &args),
        Command::Anchors => commands::anchors::run(&commands::load_config(&cli)?),
        Command::Lookup { keys } => commands::lookup::run(&commands::load_config(&cli)?, &keys),
        Command::Init { force } => commands::init::run(&cli.config, force),
    }
}
