//! Pokédex - A REPL client for PokeAPI
//!
//! Pages through location areas, explores them and catches Pokémon, with API
//! responses memoized in an in-memory TTL cache.

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{repl, Config, PokeApiClient, Session};

/// Main entry point for the Pokédex REPL.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber (stderr, so stdout stays REPL-only)
/// 3. Load configuration from environment, then apply flags
/// 4. Create the API client, which starts the cache reaper
/// 5. Run the REPL on stdin/stdout
/// 6. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so the prompt is not interleaved with logs,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().apply_cli(&cli);
    info!(
        "Configuration loaded: cache_interval={}ms, base_url={}, timeout={}s",
        config.cache_interval_ms, config.base_url, config.http_timeout_secs
    );

    let client = PokeApiClient::new(&config).context("failed to create PokeAPI client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("REPL terminated unexpectedly");

    session
        .client()
        .shutdown()
        .await
        .context("failed to stop response cache")?;
    info!("Shutdown complete");

    outcome
}
