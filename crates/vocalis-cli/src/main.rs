//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which work through the composed
//! StudioContext. No direct HTTP or wire-format access outside of
//! bootstrap.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vocalis_cli::{Cli, Commands, HistoryCommand, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // -v forces debug output, otherwise RUST_LOG decides.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut ctx = bootstrap(&cli)?;

    match cli.command {
        Commands::Say { text, voice } => {
            handlers::handle_say(&mut ctx, text, voice).await?;
        }
        Commands::Effect { prompt } => {
            handlers::handle_effect(&mut ctx, prompt).await?;
        }
        Commands::Convert { file, voice } => {
            handlers::handle_convert(&mut ctx, &file, voice).await?;
        }
        Commands::Voices { service } => {
            handlers::handle_voices(&ctx, service).await?;
        }
        Commands::History { command } => match command {
            HistoryCommand::List { service } => {
                handlers::handle_history_list(&ctx, service).await?;
            }
            HistoryCommand::Delete { id } => {
                handlers::handle_history_delete(&ctx, &id).await?;
            }
        },
    }

    Ok(())
}
