//! Pokedex - an interactive explorer for the PokeAPI
//!
//! Pages through location areas, lists encounters and catches Pokemon.

use anyhow::Context;
use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::PokeApiClient;
use pokedex::cli::Cli;
use pokedex::repl;
use pokedex::{Config, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables, then apply CLI flags
/// 3. Build the HTTP client and the per-category caches
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines stay out of the prompt, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: api_base={}, page_size={}, ttls={}s/{}s/{}s",
        config.api_base,
        config.page_size,
        config.locations_ttl,
        config.encounters_ttl,
        config.pokemon_ttl
    );

    let client =
        PokeApiClient::new(config.http_timeout()).context("invalid HTTP client configuration")?;
    let mut session =
        Session::from_config(client, &config).context("invalid cache configuration")?;

    repl::run(&mut session, BufReader::new(stdin()), stdout())
        .await
        .context("terminal I/O failed")?;

    info!("Pokedex closed");
    Ok(())
}
