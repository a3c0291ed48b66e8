use anyhow::Result;
use clap::Parser;
use tracing::debug;

use quire_cli::{
    cli::{Cli, Commands},
    commands, config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first: it carries the default log level
    let config = config::CliConfig::load(cli.config.clone(), cli.folders.clone()).await?;

    let level_override = cli.level_override().map(|level| level.as_directive());
    let env_filter = config.quire.logging.filter_directives(level_override);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    config.log_sources();
    debug!("Starting quire");

    match cli.command {
        Commands::List { show_unresolved } => {
            commands::list::execute(config, cli.format, show_unresolved).await?
        }
        Commands::Inspect { file, toggle } => {
            commands::inspect::execute(config, cli.format, file, toggle).await?
        }
    }

    Ok(())
}
