mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "mwx=debug,mwx_cli=debug"
    } else {
        "mwx=info,mwx_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Compile {
            config,
            only,
            database,
        } => commands::compile::handle(config.as_deref(), &only, database),

        Commands::Database { config } => commands::database::handle(config.as_deref()),

        Commands::List => {
            commands::list::handle();
            Ok(())
        }

        Commands::Lookup {
            config,
            kind,
            value,
        } => commands::lookup::handle(config.as_deref(), kind, &value),
    }
}
