//! Pokédex - A REPL client for PokeAPI
//!
//! Pages through location areas, explores them and catches Pokémon, with API
//! responses memoized in an in-memory TTL cache.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use repl::Session;
