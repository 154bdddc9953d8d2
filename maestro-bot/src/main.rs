//! maestro-bot entry point: dotenv, tracing, CLI dispatch.

use anyhow::Result;
use clap::Parser;
use maestro_bot::{run, Cli, Commands, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = Config::load(token)?;
            maestro_core::init_tracing(&config.log_file)?;
            run(config).await
        }
    }
}
