use clap::Parser;
use nfl_roster_notify::utils::{logger, validation::Validate};
use nfl_roster_notify::{fetch_roster_text, CliConfig, RosterFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nfl-roster-notify (debug fetch)");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = RosterFetcher::from_config(&config);
    let player_profiles = fetch_roster_text(&fetcher).await;

    println!("{}", player_profiles);

    Ok(())
}
