//! Error types for the Pokédex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error Enum ==
/// Misuse of the TTL cache lifecycle.
///
/// A lookup miss is never an error; these variants only describe
/// construction and shutdown contract violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The reap interval must be positive and leave the first sweep
    /// deadline representable
    #[error("Invalid cache interval: {0:?} (must be greater than zero and schedulable)")]
    InvalidInterval(std::time::Duration),

    /// The reaper needs a Tokio runtime to be spawned on
    #[error("Cache created outside of a Tokio runtime")]
    NoRuntime,

    /// `stop` was called on a cache whose reaper has already been stopped
    #[error("Cache reaper already stopped")]
    AlreadyStopped,
}

// == Pokedex Error Enum ==
/// Unified error type for API calls and REPL commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200 status
    #[error("{status} response was not ok ({url})")]
    Status { status: StatusCode, url: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A command was invoked without its required argument
    #[error("{0} requires {1}!")]
    MissingArgument(&'static str, &'static str),

    /// Paging backwards from the first page
    #[error("no previous page of location areas")]
    NoPreviousPage,

    /// Inspecting a Pokémon that has not been caught
    #[error("{0} not found in your pokédex")]
    NotCaught(String),

    /// Cache lifecycle misuse
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Failure writing command output
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
