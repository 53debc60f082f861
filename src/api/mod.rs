//! API Module
//!
//! HTTP access to PokeAPI, memoized through the TTL cache.
//!
//! # Endpoints used
//! - `GET /location-area` - Paged list of location areas
//! - `GET /location-area/{name}` - One area and its encounters
//! - `GET /pokemon/{name}` - One Pokémon

pub mod client;

pub use client::PokeApiClient;
