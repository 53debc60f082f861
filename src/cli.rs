//! Command-line interface parsing for the Pokédex REPL
//!
//! Flags override the corresponding environment variables read by
//! [`Config::from_env`](crate::config::Config::from_env).

use clap::Parser;

/// Pokédex - explore PokeAPI location areas and catch Pokémon
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokédex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How often cached responses are swept, in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub cache_interval_ms: Option<u64>,

    /// PokeAPI root URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}
