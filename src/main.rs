use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toondex::app::AppContext;
use toondex::cli::{commands, Cli, Commands};
use toondex::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Ingest {
            service,
            update_day,
            page,
            headed,
        } => {
            commands::ingest(&ctx, service, update_day, page, headed).await?;
        }
        Commands::List => {
            commands::list(&ctx)?;
        }
    }

    Ok(())
}
