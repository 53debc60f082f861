//! PokeAPI response models
//!
//! Only the fields the REPL commands read are modelled; serde ignores the rest
//! of each payload.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
